//! Infinite planes in 3D, stored as a base point and a unit normal

use crate::errors::MathError;
use crate::float_types::{Real, Tolerance};
use crate::line::Line;
use crate::matrix::Matrix;
use crate::point::Point3;
use crate::traits::NumericTuple;
use crate::vector::Vector;
use std::fmt::Display;

/// Every point `p` with `normal · (p - base) = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    base: Point3,
    normal: Point3,
}

impl Plane {
    /// Fails with `ZeroLength` when `normal` is (within tolerance) zero.
    pub fn new(base: impl Into<Point3>, normal: impl Into<Point3>) -> Result<Self, MathError> {
        let normal: Point3 = normal.into();
        Ok(Plane {
            base: base.into(),
            normal: normal.normalize()?,
        })
    }

    /// The plane through `base` spanned by `v1` and `v2` (normal `v1 × v2`).
    /// Parallel spanning vectors give `ZeroLength`.
    pub fn from_vectors(
        base: impl Into<Point3>,
        v1: impl Into<Point3>,
        v2: impl Into<Point3>,
    ) -> Result<Self, MathError> {
        let (v1, v2): (Point3, Point3) = (v1.into(), v2.into());
        Plane::new(base, v1.cross(&v2))
    }

    /// `z = 0`
    pub const fn xy() -> Self {
        Plane::coordinate(Point3::new(0.0, 0.0, 1.0))
    }

    /// `x = 0`
    pub const fn yz() -> Self {
        Plane::coordinate(Point3::new(1.0, 0.0, 0.0))
    }

    /// `y = 0`
    pub const fn zx() -> Self {
        Plane::coordinate(Point3::new(0.0, 1.0, 0.0))
    }

    const fn coordinate(normal: Point3) -> Self {
        Plane {
            base: Point3::ORIGIN,
            normal,
        }
    }

    pub const fn base(&self) -> Point3 {
        self.base
    }

    /// Unit normal.
    pub const fn normal(&self) -> Point3 {
        self.normal
    }

    pub fn equal_to(&self, other: &Plane) -> bool {
        self.contains_point(&other.base) && self.is_parallel_to_plane(other)
    }

    /// Normals are parallel or antiparallel.
    pub fn is_parallel_to_plane(&self, other: &Plane) -> bool {
        self.normal.is_parallel(&other.normal) || self.normal.is_antiparallel(&other.normal)
    }

    /// The line's direction is perpendicular to the normal.
    pub fn is_parallel_to_line(&self, line: &Line) -> bool {
        self.normal.is_perpendicular(&line.direction())
    }

    pub fn is_perpendicular(&self, other: &Plane) -> bool {
        self.normal.is_perpendicular(&other.normal)
    }

    pub fn distance_from_point(&self, point: &Point3) -> Real {
        self.normal.dot3(&point.minus(&self.base)).abs()
    }

    /// 0 unless the line is parallel to the plane.
    pub fn distance_from_line(&self, line: &Line) -> Real {
        if self.intersects_line(line) {
            return 0.0;
        }
        self.distance_from_point(&line.base())
    }

    /// 0 unless the planes are parallel.
    pub fn distance_from_plane(&self, other: &Plane) -> Real {
        if self.intersects_plane(other) {
            return 0.0;
        }
        self.distance_from_point(&other.base)
    }

    pub fn contains_point(&self, point: &Point3) -> bool {
        Tolerance::current().is_zero(self.distance_from_point(point))
    }

    pub fn contains_line(&self, line: &Line) -> bool {
        self.contains_point(&line.base()) && self.contains_point(&line.point_at(1.0))
    }

    /// A plane contains only itself.
    pub fn contains_plane(&self, other: &Plane) -> bool {
        self.equal_to(other)
    }

    /// A unique intersection point exists.
    pub fn intersects_line(&self, line: &Line) -> bool {
        !self.is_parallel_to_line(line)
    }

    pub fn intersects_plane(&self, other: &Plane) -> bool {
        !self.is_parallel_to_plane(other)
    }

    pub fn intersection_with_line(&self, line: &Line) -> Result<Point3, MathError> {
        if !self.intersects_line(line) {
            return Err(MathError::Parallel);
        }
        let direction = line.direction();
        let t = self.normal.dot3(&self.base.minus(&line.base())) / self.normal.dot3(&direction);
        Ok(line.point_at(t))
    }

    /// The line shared by two non-parallel planes.
    ///
    /// A base point is found by fixing one coordinate to 0 and solving the two
    /// plane equations in the remaining pair. The fixed coordinate is the one
    /// where `n1 × n2` is largest, that component being the determinant of
    /// the 2x2 system, so any pair of planes accepted by
    /// [`intersects_plane`](Self::intersects_plane) has a solution.
    pub fn intersection_with_plane(&self, other: &Plane) -> Result<Line, MathError> {
        if !self.intersects_plane(other) {
            return Err(MathError::Parallel);
        }
        let n = self.normal.components();
        let o = other.normal.components();
        let direction = self.normal.cross(&other.normal);
        let d = direction.components();

        let mut zeroed = 0;
        for k in 1..3 {
            if d[k].abs() > d[zeroed].abs() {
                zeroed = k;
            }
        }
        let det = d[zeroed];
        if det == 0.0 {
            return Err(MathError::Parallel);
        }
        tracing::debug!(coordinate = zeroed + 1, det, "plane intersection base fixes coordinate to 0");

        // the pair's determinant is d[zeroed], nonzero, so only exact
        // singularity may stop the solve
        let (a, b) = ((zeroed + 1) % 3, (zeroed + 2) % 3);
        let solver = Matrix::from_rows(vec![vec![n[a], n[b]], vec![o[a], o[b]]])?;
        let rhs = Vector::from([self.normal.dot3(&self.base), other.normal.dot3(&other.base)]);
        let solution = solver
            .invert_with(Tolerance::new(Real::EPSILON))
            .map_err(|_| MathError::Parallel)?
            .multiply_vector(&rhs)?;
        let mut base = [0.0; 3];
        base[a] = solution.as_slice()[0];
        base[b] = solution.as_slice()[1];
        // rescaled so the largest component is ±1 before normalizing
        Line::new(base, direction.scaled(1.0 / det.abs()))
    }

    /// Orthogonal projection of `point` onto the plane.
    pub fn point_closest_to(&self, point: &Point3) -> Point3 {
        let offset = self.base.minus(point).dot3(&self.normal);
        point.plus(&self.normal.scaled(offset))
    }

    /// Moves the base point; the normal is unchanged.
    pub fn translate(&self, dx: Real, dy: Real, dz: Real) -> Plane {
        Plane {
            base: self.base.translate(dx, dy, dz),
            normal: self.normal,
        }
    }

    /// Rotates by `theta` about `axis` (right-hand rule on its direction).
    pub fn rotate(&self, theta: Real, axis: &Line) -> Result<Plane, MathError> {
        let center = axis.point_closest_to_point(&self.base);
        let arm = self.base.minus(&center).rotate(theta, axis.direction())?;
        let normal = self.normal.rotate(theta, axis.direction())?;
        Plane::new(center.plus(&arm), normal)
    }
}

impl Display for Plane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "base: {}, normal: {}", self.base, self.normal)
    }
}
