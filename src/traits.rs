//! Shared arithmetic for vectors and points, and the homogeneous-coordinate trait

use crate::errors::MathError;
use crate::float_types::{Real, Tolerance};
use crate::vector::Vector;

/// Fixed-dimension numeric tuples: [`Vector`], [`Point2`](crate::point::Point2)
/// and [`Point3`](crate::point::Point3).
///
/// Implementors supply `map` and `zip_map`; all the arithmetic is written in
/// terms of those two, so every operation returns the implementor's concrete
/// type (a point plus a point is a point, not a vector).
pub trait NumericTuple: Sized + Clone {
    /// Number of euclidean components (2 for a `Point2`, even though it
    /// carries a homogeneous third coordinate).
    fn dimension(&self) -> usize;

    /// The euclidean components, in order.
    fn components(&self) -> Vec<Real>;

    /// Builds a new tuple by applying `f(value, zero_based_index)` to each component.
    fn map<F: FnMut(Real, usize) -> Real>(&self, f: F) -> Self;

    /// Combines two tuples component by component.
    /// Fails with `DimensionMismatch` when the dimensions differ.
    fn zip_map<F: FnMut(Real, Real) -> Real>(&self, other: &Self, f: F) -> Result<Self, MathError>;

    /// 1-indexed component access.
    fn get(&self, i: usize) -> Result<Real, MathError> {
        let n = self.dimension();
        if i < 1 || i > n {
            return Err(MathError::IndexOutOfRange { index: i, len: n });
        }
        Ok(self.components()[i - 1])
    }

    fn add(&self, other: &Self) -> Result<Self, MathError> {
        self.zip_map(other, |a, b| a + b)
    }

    fn subtract(&self, other: &Self) -> Result<Self, MathError> {
        self.zip_map(other, |a, b| a - b)
    }

    fn multiply_by(&self, k: Real) -> Self {
        self.map(|x, _| x * k)
    }

    fn negative(&self) -> Self {
        self.map(|x, _| -x)
    }

    /// Sum of element-wise products.
    fn dot(&self, other: &Self) -> Result<Real, MathError> {
        if self.dimension() != other.dimension() {
            return Err(MathError::mismatch(self.dimension(), other.dimension()));
        }
        Ok(self
            .components()
            .iter()
            .zip(other.components())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Euclidean norm.
    fn length(&self) -> Real {
        self.components().iter().map(|x| x * x).sum::<Real>().sqrt()
    }

    fn normalize(&self) -> Result<Self, MathError> {
        self.normalize_with(Tolerance::current())
    }

    /// Unit tuple in the same direction; `ZeroLength` if the length is within `tol` of 0.
    fn normalize_with(&self, tol: Tolerance) -> Result<Self, MathError> {
        let len = self.length();
        if tol.is_zero(len) {
            return Err(MathError::ZeroLength);
        }
        Ok(self.map(|x, _| x / len))
    }

    /// Angle in `[0, π]` between two tuples.
    ///
    /// The cosine is clamped to `[-1, 1]` so rounding on (anti)parallel inputs
    /// cannot produce `NaN`.
    fn angle_between(&self, other: &Self) -> Result<Real, MathError> {
        let dot = self.dot(other)?;
        let (a, b) = (self.length(), other.length());
        let tol = Tolerance::current();
        if tol.is_zero(a) || tol.is_zero(b) {
            return Err(MathError::ZeroLength);
        }
        Ok((dot / (a * b)).clamp(-1.0, 1.0).acos())
    }

    fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_with(other, Tolerance::current())
    }

    /// Same dimension and every component within `tol`.
    fn approx_eq_with(&self, other: &Self, tol: Tolerance) -> bool {
        self.dimension() == other.dimension()
            && self
                .components()
                .iter()
                .zip(other.components())
                .all(|(a, b)| tol.approx_eq(*a, b))
    }

    fn is_parallel(&self, other: &Self) -> bool {
        self.is_parallel_with(other, Tolerance::current())
    }

    /// Same direction (angle ~0). Zero tuples are never parallel.
    fn is_parallel_with(&self, other: &Self, tol: Tolerance) -> bool {
        self.angle_between(other).is_ok_and(|theta| tol.is_zero(theta))
    }

    fn is_antiparallel(&self, other: &Self) -> bool {
        self.is_antiparallel_with(other, Tolerance::current())
    }

    /// Opposite direction (angle ~π).
    fn is_antiparallel_with(&self, other: &Self, tol: Tolerance) -> bool {
        self.angle_between(other)
            .is_ok_and(|theta| tol.approx_eq(theta, crate::float_types::PI))
    }

    fn is_perpendicular(&self, other: &Self) -> bool {
        self.is_perpendicular_with(other, Tolerance::current())
    }

    fn is_perpendicular_with(&self, other: &Self, tol: Tolerance) -> bool {
        self.dot(other).is_ok_and(|d| tol.is_zero(d))
    }

    /// The component with the largest absolute value (sign kept); 0 for empty tuples.
    fn max(&self) -> Real {
        self.components()
            .into_iter()
            .fold(0.0, |best, x| if x.abs() > best.abs() { x } else { best })
    }

    /// Plain euclidean copy as a [`Vector`].
    fn to_vector(&self) -> Vector {
        Vector::new(self.components())
    }
}

/// Points that live in homogeneous coordinates: a `DIM`-dimensional point is
/// stored as the `DIM + 1` vector `[.., 1]` so affine transforms apply by a
/// single matrix multiplication.
pub trait Homogeneous: NumericTuple {
    /// Euclidean dimension; the homogeneous vector has `DIM + 1` components.
    const DIM: usize;

    /// `[x, y, (z,) 1]`
    fn homogeneous(&self) -> Vector;

    /// Reads a `DIM + 1` vector back into a point, dividing through by the
    /// trailing component when it is not exactly 1.
    fn from_homogeneous(v: &Vector) -> Result<Self, MathError>;
}
