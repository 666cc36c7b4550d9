//! `Vector`: an ordered, fixed-length tuple of `Real`s

use crate::errors::MathError;
use crate::float_types::{Real, Tolerance, tolerance};
use crate::matrix::Matrix;
use crate::point::{Point2, Point3};
use crate::traits::{Homogeneous, NumericTuple};
use nalgebra::{DVector, Vector3};
use std::fmt::Display;
use std::ops::{Mul, Neg};

/// A vector of fixed dimension `n`, set at construction.
///
/// Vectors are values: every operation returns a new `Vector`. Component
/// access is 1-indexed (`get(1)` is the first component).
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    components: DVector<Real>,
}

impl Vector {
    pub fn new(components: Vec<Real>) -> Self {
        Vector {
            components: DVector::from_vec(components),
        }
    }

    pub fn from_slice(components: &[Real]) -> Self {
        Vector {
            components: DVector::from_column_slice(components),
        }
    }

    /// The zero vector of dimension `n`.
    pub fn zeros(n: usize) -> Self {
        Vector {
            components: DVector::zeros(n),
        }
    }

    /// `[1, 0, 0]`
    pub fn i() -> Self {
        Vector::new(vec![1.0, 0.0, 0.0])
    }

    /// `[0, 1, 0]`
    pub fn j() -> Self {
        Vector::new(vec![0.0, 1.0, 0.0])
    }

    /// `[0, 0, 1]`
    pub fn k() -> Self {
        Vector::new(vec![0.0, 0.0, 1.0])
    }

    pub fn as_slice(&self) -> &[Real] {
        self.components.as_slice()
    }

    /// Borrow the underlying nalgebra storage.
    pub const fn as_dvector(&self) -> &DVector<Real> {
        &self.components
    }

    /// Standard 3D cross product; `CrossUndefined` unless both vectors are 3D.
    pub fn cross(&self, other: &Vector) -> Result<Vector, MathError> {
        if self.dimension() != 3 {
            return Err(MathError::CrossUndefined {
                dimension: self.dimension(),
            });
        }
        if other.dimension() != 3 {
            return Err(MathError::CrossUndefined {
                dimension: other.dimension(),
            });
        }
        let a = Vector3::from_column_slice(self.as_slice());
        let b = Vector3::from_column_slice(other.as_slice());
        Ok(Vector::from(a.cross(&b)))
    }

    /// `n x 1` matrix holding this vector.
    pub fn to_column_matrix(&self) -> Matrix {
        Matrix::from(self.components.clone())
    }

    /// `1 x n` matrix holding this vector.
    pub fn to_row_matrix(&self) -> Matrix {
        Matrix::from_vector(self)
    }

    /// 1-indexed position of the first component within tolerance of `value`.
    pub fn index_of(&self, value: Real) -> Option<usize> {
        let tol = Tolerance::current();
        self.components
            .iter()
            .position(|x| tol.approx_eq(*x, value))
            .map(|i| i + 1)
    }

    /// Appends a zero `z` component to a 2-vector.
    pub fn make_3d(&self) -> Result<Vector, MathError> {
        match self.dimension() {
            2 => Ok(Vector::new(vec![self.components[0], self.components[1], 0.0])),
            3 => Ok(self.clone()),
            n => Err(MathError::UnsupportedDimension(n)),
        }
    }

    /// Reads a 2-vector, or a homogeneous 3-vector `[x, y, w]`, as a [`Point2`].
    pub fn to_point2(&self) -> Result<Point2, MathError> {
        match self.dimension() {
            2 => Ok(Point2::new(self.components[0], self.components[1])),
            3 => Point2::from_homogeneous(self),
            n => Err(MathError::UnsupportedDimension(n)),
        }
    }

    /// Reads a 3-vector, or a homogeneous 4-vector `[x, y, z, w]`, as a [`Point3`].
    /// A 2-vector is lifted to `z = 0`.
    pub fn to_point3(&self) -> Result<Point3, MathError> {
        match self.dimension() {
            2 => Ok(Point3::new(self.components[0], self.components[1], 0.0)),
            3 => Ok(Point3::new(
                self.components[0],
                self.components[1],
                self.components[2],
            )),
            4 => Point3::from_homogeneous(self),
            n => Err(MathError::UnsupportedDimension(n)),
        }
    }
}

impl NumericTuple for Vector {
    fn dimension(&self) -> usize {
        self.components.len()
    }

    fn components(&self) -> Vec<Real> {
        self.components.as_slice().to_vec()
    }

    fn get(&self, i: usize) -> Result<Real, MathError> {
        if i < 1 || i > self.dimension() {
            return Err(MathError::IndexOutOfRange {
                index: i,
                len: self.dimension(),
            });
        }
        Ok(self.components[i - 1])
    }

    fn map<F: FnMut(Real, usize) -> Real>(&self, mut f: F) -> Self {
        let mapped = self
            .components
            .iter()
            .enumerate()
            .map(|(i, x)| f(*x, i))
            .collect::<Vec<_>>();
        Vector::new(mapped)
    }

    fn zip_map<F: FnMut(Real, Real) -> Real>(&self, other: &Self, mut f: F) -> Result<Self, MathError> {
        if self.dimension() != other.dimension() {
            return Err(MathError::mismatch(self.dimension(), other.dimension()));
        }
        Ok(Vector {
            components: self.components.zip_map(&other.components, |a, b| f(a, b)),
        })
    }

    fn dot(&self, other: &Self) -> Result<Real, MathError> {
        if self.dimension() != other.dimension() {
            return Err(MathError::mismatch(self.dimension(), other.dimension()));
        }
        Ok(self.components.dot(&other.components))
    }

    fn length(&self) -> Real {
        self.components.norm()
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector {
            components: -self.components,
        }
    }
}

impl Mul<Real> for &Vector {
    type Output = Vector;

    fn mul(self, k: Real) -> Vector {
        self.multiply_by(k)
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}

impl AsRef<[Real]> for Vector {
    fn as_ref(&self) -> &[Real] {
        self.as_slice()
    }
}

impl From<Vec<Real>> for Vector {
    fn from(components: Vec<Real>) -> Self {
        Vector::new(components)
    }
}

impl<const N: usize> From<[Real; N]> for Vector {
    fn from(components: [Real; N]) -> Self {
        Vector::from_slice(&components)
    }
}

impl From<DVector<Real>> for Vector {
    fn from(components: DVector<Real>) -> Self {
        Vector { components }
    }
}

impl From<Vector> for DVector<Real> {
    fn from(v: Vector) -> Self {
        v.components
    }
}

impl From<Vector3<Real>> for Vector {
    fn from(v: Vector3<Real>) -> Self {
        Vector::from_slice(v.as_slice())
    }
}

impl approx::AbsDiffEq for Vector {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.dimension() == other.dimension()
            && approx::AbsDiffEq::abs_diff_eq(&self.components, &other.components, epsilon)
    }
}

impl approx::RelativeEq for Vector {
    fn default_max_relative() -> Real {
        tolerance()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.dimension() == other.dimension()
            && approx::RelativeEq::relative_eq(
                &self.components,
                &other.components,
                epsilon,
                max_relative,
            )
    }
}
