//! Infinite lines in 3D, stored as a base point and a unit direction

use crate::errors::MathError;
use crate::float_types::{PI, Real, Tolerance};
use crate::plane::Plane;
use crate::point::Point3;
use crate::traits::NumericTuple;
use crate::vector::Vector;
use std::fmt::Display;

/// `base + t · direction` for every real `t`.
///
/// The direction is always a unit vector. 2D inputs are lifted to `z = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    base: Point3,
    direction: Point3,
}

impl Line {
    /// Fails with `ZeroLength` when `direction` is (within tolerance) zero.
    pub fn new(base: impl Into<Point3>, direction: impl Into<Point3>) -> Result<Self, MathError> {
        let direction: Point3 = direction.into();
        Ok(Line {
            base: base.into(),
            direction: direction.normalize()?,
        })
    }

    /// Builds a line from 2- or 3-dimensional vectors.
    pub fn from_vectors(base: &Vector, direction: &Vector) -> Result<Self, MathError> {
        Line::new(lift(base)?, lift(direction)?)
    }

    /// The x-axis: through the origin along `[1, 0, 0]`.
    pub const fn x_axis() -> Self {
        Line::axis(Point3::new(1.0, 0.0, 0.0))
    }

    pub const fn y_axis() -> Self {
        Line::axis(Point3::new(0.0, 1.0, 0.0))
    }

    pub const fn z_axis() -> Self {
        Line::axis(Point3::new(0.0, 0.0, 1.0))
    }

    const fn axis(direction: Point3) -> Self {
        Line {
            base: Point3::ORIGIN,
            direction,
        }
    }

    pub const fn base(&self) -> Point3 {
        self.base
    }

    /// Unit direction.
    pub const fn direction(&self) -> Point3 {
        self.direction
    }

    /// Same line: parallel (or antiparallel) and containing the other's base.
    pub fn equal_to(&self, other: &Line) -> bool {
        self.is_parallel(other) && self.contains(&other.base)
    }

    pub fn contains(&self, point: &Point3) -> bool {
        Tolerance::current().is_zero(self.distance_from_point(point))
    }

    /// Parallel or antiparallel directions.
    pub fn is_parallel(&self, other: &Line) -> bool {
        self.direction.is_parallel(&other.direction) || self.direction.is_antiparallel(&other.direction)
    }

    /// Perpendicular distance from `point` to the line.
    pub fn distance_from_point(&self, point: &Point3) -> Real {
        point.minus(&self.base).cross(&self.direction).length()
    }

    /// Shortest distance between two lines; for parallel lines the distance
    /// from this line to the other's base point.
    pub fn distance_from_line(&self, other: &Line) -> Real {
        if self.is_parallel(other) {
            return self.distance_from_point(&other.base);
        }
        let normal = self.direction.cross(&other.direction);
        let offset = self.base.minus(&other.base);
        (offset.dot3(&normal) / normal.length()).abs()
    }

    pub fn point_at(&self, t: Real) -> Point3 {
        self.base.plus(&self.direction.scaled(t))
    }

    /// Orthogonal projection of `point` onto the line.
    pub fn point_closest_to_point(&self, point: &Point3) -> Point3 {
        let t = point.minus(&self.base).dot3(&self.direction);
        self.point_at(t)
    }

    /// The point on this line nearest to `other`. For intersecting lines this
    /// is the intersection; parallel lines have no unique answer.
    pub fn point_closest_to_line(&self, other: &Line) -> Result<Point3, MathError> {
        if self.is_parallel(other) {
            return Err(MathError::Parallel);
        }
        Ok(self.point_at(self.closest_parameter(other)))
    }

    /// Parameter `s` of the point `base + s·direction` closest to `other`.
    ///
    /// With `w = p - q`, `a = x·x`, `b = x·y`, `c = y·y`, `d = x·w`,
    /// `e = y·w`: `s = (b·e - c·d) / (a·c - b²)`. The denominator only
    /// vanishes for parallel lines, which callers exclude.
    fn closest_parameter(&self, other: &Line) -> Real {
        let (x, y) = (&self.direction, &other.direction);
        let w = self.base.minus(&other.base);
        let a = x.dot3(x);
        let b = x.dot3(y);
        let c = y.dot3(y);
        let d = x.dot3(&w);
        let e = y.dot3(&w);
        (b * e - c * d) / (a * c - b * b)
    }

    /// A unique intersection point exists: not parallel and not skew.
    pub fn intersects_line(&self, other: &Line) -> bool {
        !self.is_parallel(other) && Tolerance::current().is_zero(self.distance_from_line(other))
    }

    pub fn intersects_plane(&self, plane: &Plane) -> bool {
        plane.intersects_line(self)
    }

    /// `Parallel` for parallel lines, `NoIntersection` for skew ones.
    pub fn intersection_with_line(&self, other: &Line) -> Result<Point3, MathError> {
        if self.is_parallel(other) {
            return Err(MathError::Parallel);
        }
        if !self.intersects_line(other) {
            return Err(MathError::NoIntersection);
        }
        Ok(self.point_at(self.closest_parameter(other)))
    }

    pub fn intersection_with_plane(&self, plane: &Plane) -> Result<Point3, MathError> {
        plane.intersection_with_line(self)
    }

    pub fn lies_in(&self, plane: &Plane) -> bool {
        plane.contains_line(self)
    }

    /// Moves the base point; the direction is unchanged.
    pub fn translate(&self, dx: Real, dy: Real, dz: Real) -> Line {
        Line {
            base: self.base.translate(dx, dy, dz),
            direction: self.direction,
        }
    }

    /// Rotates by `theta` about `axis`. The orientation of `axis` fixes the
    /// sense of rotation (right-hand rule).
    pub fn rotate(&self, theta: Real, axis: &Line) -> Result<Line, MathError> {
        let center = axis.point_closest_to_point(&self.base);
        let arm = self.base.minus(&center).rotate(theta, axis.direction)?;
        let direction = self.direction.rotate(theta, axis.direction)?;
        Line::new(center.plus(&arm), direction)
    }

    pub fn reflection_in_point(&self, point: &Point3) -> Line {
        Line {
            base: self.base.reflection_in_point(point),
            direction: self.direction,
        }
    }

    /// Half-turn about `line`.
    pub fn reflection_in_line(&self, line: &Line) -> Result<Line, MathError> {
        self.rotate(PI, line)
    }

    pub fn reflection_in_plane(&self, plane: &Plane) -> Line {
        let n = plane.normal();
        let d = self.direction;
        Line {
            base: self.base.reflection_in_plane(plane),
            direction: d.minus(&n.scaled(2.0 * d.dot3(&n))),
        }
    }
}

/// Reads a 2D or 3D vector as a point, lifting 2D to `z = 0`.
fn lift(v: &Vector) -> Result<Point3, MathError> {
    match v.dimension() {
        2 | 3 => v.to_point3(),
        n => Err(MathError::UnsupportedDimension(n)),
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "base: {}, direction: {}", self.base, self.direction)
    }
}
