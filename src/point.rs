//! 2D and 3D points in homogeneous coordinates
//!
//! A `Point2` behaves as the 2-tuple `(x, y)` for arithmetic but is carried
//! into matrix products as `[x, y, 1]`; likewise `Point3` as `[x, y, z, 1]`.
//! Rotations and translations are delegated to [`AffineTransform`].

use crate::errors::MathError;
use crate::float_types::{Real, Tolerance, tolerance};
use crate::line::Line;
use crate::plane::Plane;
use crate::traits::{Homogeneous, NumericTuple};
use crate::transform::{AffineTransform, Axis};
use crate::vector::Vector;
use std::fmt::Display;
use std::ops::{Mul, Neg};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    pub x: Real,
    pub y: Real,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

/// Reads the euclidean part of a homogeneous vector of length `dim + 1`,
/// dividing by the trailing weight unless it is already exactly 1.
fn dehomogenize(v: &Vector, dim: usize) -> Result<Vec<Real>, MathError> {
    if v.dimension() != dim + 1 {
        return Err(MathError::mismatch(dim + 1, v.dimension()));
    }
    let coords = v.as_slice();
    let w = coords[dim];
    if w == 1.0 {
        return Ok(coords[..dim].to_vec());
    }
    if Tolerance::current().is_zero(w) {
        // a point at infinity has no euclidean position
        return Err(MathError::ZeroLength);
    }
    Ok(coords[..dim].iter().map(|c| c / w).collect())
}

impl Point2 {
    /// `(0, 0)`
    pub const ORIGIN: Point2 = Point2 { x: 0.0, y: 0.0 };

    pub const fn new(x: Real, y: Real) -> Self {
        Point2 { x, y }
    }

    /// Rotates counter-clockwise about the origin by `theta` radians.
    pub fn rotate(&self, theta: Real) -> Point2 {
        AffineTransform::new_2d().rotate_2d(theta).apply_to_point2(self)
    }

    pub fn translate(&self, dx: Real, dy: Real) -> Point2 {
        AffineTransform::new_2d().translate_2d(dx, dy).apply_to_point2(self)
    }

    /// Lifts to 3D with `z = 0`.
    pub const fn make_3d(&self) -> Point3 {
        Point3::new(self.x, self.y, 0.0)
    }
}

impl NumericTuple for Point2 {
    fn dimension(&self) -> usize {
        2
    }

    fn components(&self) -> Vec<Real> {
        vec![self.x, self.y]
    }

    fn map<F: FnMut(Real, usize) -> Real>(&self, mut f: F) -> Self {
        Point2::new(f(self.x, 0), f(self.y, 1))
    }

    fn zip_map<F: FnMut(Real, Real) -> Real>(&self, other: &Self, mut f: F) -> Result<Self, MathError> {
        Ok(Point2::new(f(self.x, other.x), f(self.y, other.y)))
    }
}

impl Homogeneous for Point2 {
    const DIM: usize = 2;

    fn homogeneous(&self) -> Vector {
        Vector::new(vec![self.x, self.y, 1.0])
    }

    fn from_homogeneous(v: &Vector) -> Result<Self, MathError> {
        let c = dehomogenize(v, Self::DIM)?;
        Ok(Point2::new(c[0], c[1]))
    }
}

impl Point3 {
    /// `(0, 0, 0)`
    pub const ORIGIN: Point3 = Point3 { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Point3 { x, y, z }
    }

    pub fn rotate_x(&self, phi: Real) -> Point3 {
        AffineTransform::new_3d().rotation_x(phi).apply_to_point3(self)
    }

    pub fn rotate_y(&self, theta: Real) -> Point3 {
        AffineTransform::new_3d().rotation_y(theta).apply_to_point3(self)
    }

    pub fn rotate_z(&self, psi: Real) -> Point3 {
        AffineTransform::new_3d().rotation_z(psi).apply_to_point3(self)
    }

    /// Rotates by `theta` radians about an axis through the origin.
    pub fn rotate(&self, theta: Real, axis: impl Into<Axis>) -> Result<Point3, MathError> {
        let mut t = AffineTransform::new_3d();
        t.rotation(theta, Some(axis.into()))?;
        Ok(t.apply_to_point3(self))
    }

    pub fn translate(&self, dx: Real, dy: Real, dz: Real) -> Point3 {
        AffineTransform::new_3d()
            .translate_3d(dx, dy, dz)
            .apply_to_point3(self)
    }

    /// Spherical coordinates `(r, φ, θ)`: `φ` measured from `+z`, `θ` in the
    /// xy-plane from `+x`.
    pub fn to_spherical(&self) -> Point3 {
        let r = self.length();
        let phi = (self.x * self.x + self.y * self.y).sqrt().atan2(self.z);
        let theta = self.y.atan2(self.x);
        Point3::new(r, phi, theta)
    }

    pub fn cross(&self, other: &Point3) -> Point3 {
        Point3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Point reflection: `2c - p`.
    pub fn reflection_in_point(&self, center: &Point3) -> Point3 {
        Point3::new(
            2.0 * center.x - self.x,
            2.0 * center.y - self.y,
            2.0 * center.z - self.z,
        )
    }

    /// Mirror image across a line.
    pub fn reflection_in_line(&self, line: &Line) -> Point3 {
        self.reflection_in_point(&line.point_closest_to_point(self))
    }

    /// Mirror image across a plane.
    pub fn reflection_in_plane(&self, plane: &Plane) -> Point3 {
        self.reflection_in_point(&plane.point_closest_to(self))
    }

    pub(crate) fn plus(&self, other: &Point3) -> Point3 {
        Point3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub(crate) fn minus(&self, other: &Point3) -> Point3 {
        Point3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub(crate) fn scaled(&self, k: Real) -> Point3 {
        Point3::new(self.x * k, self.y * k, self.z * k)
    }

    pub(crate) fn dot3(&self, other: &Point3) -> Real {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl NumericTuple for Point3 {
    fn dimension(&self) -> usize {
        3
    }

    fn components(&self) -> Vec<Real> {
        vec![self.x, self.y, self.z]
    }

    fn map<F: FnMut(Real, usize) -> Real>(&self, mut f: F) -> Self {
        Point3::new(f(self.x, 0), f(self.y, 1), f(self.z, 2))
    }

    fn zip_map<F: FnMut(Real, Real) -> Real>(&self, other: &Self, mut f: F) -> Result<Self, MathError> {
        Ok(Point3::new(
            f(self.x, other.x),
            f(self.y, other.y),
            f(self.z, other.z),
        ))
    }

    fn dot(&self, other: &Self) -> Result<Real, MathError> {
        Ok(self.dot3(other))
    }
}

impl Homogeneous for Point3 {
    const DIM: usize = 3;

    fn homogeneous(&self) -> Vector {
        Vector::new(vec![self.x, self.y, self.z, 1.0])
    }

    fn from_homogeneous(v: &Vector) -> Result<Self, MathError> {
        let c = dehomogenize(v, Self::DIM)?;
        Ok(Point3::new(c[0], c[1], c[2]))
    }
}

impl Neg for Point2 {
    type Output = Point2;

    fn neg(self) -> Point2 {
        Point2::new(-self.x, -self.y)
    }
}

impl Neg for Point3 {
    type Output = Point3;

    fn neg(self) -> Point3 {
        Point3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<Real> for Point2 {
    type Output = Point2;

    fn mul(self, k: Real) -> Point2 {
        Point2::new(self.x * k, self.y * k)
    }
}

impl Mul<Real> for Point3 {
    type Output = Point3;

    fn mul(self, k: Real) -> Point3 {
        self.scaled(k)
    }
}

impl Display for Point2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl Display for Point3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

impl From<Point2> for Point3 {
    fn from(p: Point2) -> Self {
        p.make_3d()
    }
}

impl From<[Real; 2]> for Point2 {
    fn from(c: [Real; 2]) -> Self {
        Point2::new(c[0], c[1])
    }
}

impl From<[Real; 3]> for Point3 {
    fn from(c: [Real; 3]) -> Self {
        Point3::new(c[0], c[1], c[2])
    }
}

impl TryFrom<&Vector> for Point2 {
    type Error = MathError;

    fn try_from(v: &Vector) -> Result<Self, MathError> {
        v.to_point2()
    }
}

impl TryFrom<&Vector> for Point3 {
    type Error = MathError;

    fn try_from(v: &Vector) -> Result<Self, MathError> {
        v.to_point3()
    }
}

impl From<nalgebra::Point2<Real>> for Point2 {
    fn from(p: nalgebra::Point2<Real>) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl From<Point2> for nalgebra::Point2<Real> {
    fn from(p: Point2) -> Self {
        nalgebra::Point2::new(p.x, p.y)
    }
}

impl From<nalgebra::Point3<Real>> for Point3 {
    fn from(p: nalgebra::Point3<Real>) -> Self {
        Point3::new(p.x, p.y, p.z)
    }
}

impl From<Point3> for nalgebra::Point3<Real> {
    fn from(p: Point3) -> Self {
        nalgebra::Point3::new(p.x, p.y, p.z)
    }
}

impl From<nalgebra::Vector3<Real>> for Point3 {
    fn from(v: nalgebra::Vector3<Real>) -> Self {
        Point3::new(v.x, v.y, v.z)
    }
}

macro_rules! impl_point_approx {
    ($point:ty, $($field:ident),+) => {
        impl approx::AbsDiffEq for $point {
            type Epsilon = Real;

            fn default_epsilon() -> Real {
                tolerance()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
                $(approx::AbsDiffEq::abs_diff_eq(&self.$field, &other.$field, epsilon))&&+
            }
        }

        impl approx::RelativeEq for $point {
            fn default_max_relative() -> Real {
                tolerance()
            }

            fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
                $(approx::RelativeEq::relative_eq(&self.$field, &other.$field, epsilon, max_relative))&&+
            }
        }
    };
}

impl_point_approx!(Point2, x, y);
impl_point_approx!(Point3, x, y, z);
