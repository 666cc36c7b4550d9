//! `Matrix`: a rectangular grid of `Real`s with 1-indexed accessors
//!
//! Storage is a 0-indexed `nalgebra::DMatrix`; the public API translates
//! `(i, j)` with `i, j >= 1` onto it so formulas can be written the way
//! linear algebra texts state them.

use crate::errors::MathError;
use crate::float_types::{Real, Tolerance, tolerance};
use crate::traits::NumericTuple;
use crate::vector::Vector;
use nalgebra::{DMatrix, DVector, Matrix3, Matrix4};
use rand::Rng;
use std::fmt::Display;

mod elimination;

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: DMatrix<Real>,
}

impl Matrix {
    /// Builds a matrix from nested rows; all rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<Real>>) -> Result<Self, MathError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != num_cols {
                return Err(MathError::RaggedRows {
                    row: i + 1,
                    expected: num_cols,
                    found: row.len(),
                });
            }
        }
        let flat: Vec<Real> = rows.into_iter().flatten().collect();
        Ok(Matrix {
            data: DMatrix::from_row_slice(num_rows, num_cols, &flat),
        })
    }

    /// Builds a matrix whose rows are the given vectors.
    pub fn from_row_vectors(rows: &[Vector]) -> Result<Self, MathError> {
        Self::from_rows(rows.iter().map(|r| r.as_slice().to_vec()).collect())
    }

    /// A single-row matrix.
    pub fn from_vector(vector: &Vector) -> Self {
        Matrix {
            data: DMatrix::from_row_slice(1, vector.dimension(), vector.as_slice()),
        }
    }

    /// The `0 x 0` matrix.
    pub fn empty() -> Self {
        Matrix {
            data: DMatrix::zeros(0, 0),
        }
    }

    /// The `n x n` identity.
    pub fn identity(n: usize) -> Self {
        Matrix {
            data: DMatrix::identity(n, n),
        }
    }

    /// A `rows x cols` matrix of zeros.
    pub fn zero(rows: usize, cols: usize) -> Self {
        Matrix {
            data: DMatrix::zeros(rows, cols),
        }
    }

    /// Square matrix with `elements` on the diagonal and 0 elsewhere.
    pub fn diagonal(elements: impl AsRef<[Real]>) -> Self {
        let elements = elements.as_ref();
        let mut m = Matrix::identity(elements.len());
        for (i, x) in elements.iter().enumerate() {
            m.data[(i, i)] = *x;
        }
        m
    }

    /// Random entries in `[0, 1)`, or integers in `0..=max` when `max` is given.
    pub fn random(rows: usize, cols: usize, max: Option<u32>) -> Self {
        let mut rng = rand::thread_rng();
        Matrix::zero(rows, cols).map(|_, _, _| match max {
            Some(max) => rng.gen_range(0..=max) as Real,
            None => rng.r#gen::<Real>(),
        })
    }

    pub fn num_rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn num_cols(&self) -> usize {
        self.data.ncols()
    }

    /// `(rows, columns)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.data.shape()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.num_rows() == self.num_cols()
    }

    pub fn same_size_as(&self, other: &Matrix) -> bool {
        self.dimensions() == other.dimensions()
    }

    pub const fn as_dmatrix(&self) -> &DMatrix<Real> {
        &self.data
    }

    pub(crate) const fn as_dmatrix_mut(&mut self) -> &mut DMatrix<Real> {
        &mut self.data
    }

    fn check_row(&self, i: usize) -> Result<(), MathError> {
        if i < 1 || i > self.num_rows() {
            return Err(MathError::IndexOutOfRange {
                index: i,
                len: self.num_rows(),
            });
        }
        Ok(())
    }

    fn check_col(&self, j: usize) -> Result<(), MathError> {
        if j < 1 || j > self.num_cols() {
            return Err(MathError::IndexOutOfRange {
                index: j,
                len: self.num_cols(),
            });
        }
        Ok(())
    }

    /// Element `(i, j)`, 1-indexed.
    pub fn get(&self, i: usize, j: usize) -> Result<Real, MathError> {
        self.check_row(i)?;
        self.check_col(j)?;
        Ok(self.data[(i - 1, j - 1)])
    }

    /// Sets element `(i, j)` in place and returns `self` for chaining.
    /// This is the one mutating operation on `Matrix`.
    pub fn set_element(&mut self, i: usize, j: usize, value: Real) -> Result<&mut Self, MathError> {
        self.check_row(i)?;
        self.check_col(j)?;
        self.data[(i - 1, j - 1)] = value;
        Ok(self)
    }

    /// Row `i` as a vector.
    pub fn row(&self, i: usize) -> Result<Vector, MathError> {
        self.check_row(i)?;
        Ok(Vector::new(self.data.row(i - 1).iter().copied().collect()))
    }

    /// Column `j` as a vector.
    pub fn col(&self, j: usize) -> Result<Vector, MathError> {
        self.check_col(j)?;
        Ok(Vector::new(self.data.column(j - 1).iter().copied().collect()))
    }

    /// New matrix from `f(value, row, col)` with zero-based `row`/`col`.
    pub fn map<F: FnMut(Real, usize, usize) -> Real>(&self, mut f: F) -> Matrix {
        let (rows, cols) = self.dimensions();
        Matrix {
            data: DMatrix::from_fn(rows, cols, |i, j| f(self.data[(i, j)], i, j)),
        }
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix, MathError> {
        self.check_same_size(other)?;
        Ok(Matrix {
            data: &self.data + &other.data,
        })
    }

    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, MathError> {
        self.check_same_size(other)?;
        Ok(Matrix {
            data: &self.data - &other.data,
        })
    }

    fn check_same_size(&self, other: &Matrix) -> Result<(), MathError> {
        if self.num_rows() != other.num_rows() {
            return Err(MathError::mismatch(self.num_rows(), other.num_rows()));
        }
        if self.num_cols() != other.num_cols() {
            return Err(MathError::mismatch(self.num_cols(), other.num_cols()));
        }
        Ok(())
    }

    /// Scalar multiple.
    pub fn multiply_by(&self, k: Real) -> Matrix {
        Matrix {
            data: &self.data * k,
        }
    }

    pub fn negative(&self) -> Matrix {
        self.multiply_by(-1.0)
    }

    /// Entries rounded to the nearest integer.
    pub fn round(&self) -> Matrix {
        self.map(|x, _, _| x.round())
    }

    /// True when `self * other` is defined.
    pub fn can_multiply_from_left(&self, other: &Matrix) -> bool {
        self.num_cols() == other.num_rows()
    }

    /// True when `self * vector` is defined.
    pub fn can_multiply_vector(&self, vector: &Vector) -> bool {
        self.num_cols() == vector.dimension()
    }

    /// Matrix product `self * other`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MathError> {
        if !self.can_multiply_from_left(other) {
            return Err(MathError::mismatch(self.num_cols(), other.num_rows()));
        }
        Ok(Matrix {
            data: &self.data * &other.data,
        })
    }

    /// Matrix-vector product `self * vector`, treating `vector` as a column.
    pub fn multiply_vector(&self, vector: &Vector) -> Result<Vector, MathError> {
        if !self.can_multiply_vector(vector) {
            return Err(MathError::mismatch(self.num_cols(), vector.dimension()));
        }
        Ok(Vector::from(&self.data * vector.as_dvector()))
    }

    pub fn transpose(&self) -> Matrix {
        Matrix {
            data: self.data.transpose(),
        }
    }

    /// Sum of the diagonal; square matrices only.
    pub fn trace(&self) -> Result<Real, MathError> {
        self.check_square()?;
        Ok(self.data.trace())
    }

    pub(crate) fn check_square(&self) -> Result<(), MathError> {
        if !self.is_square() {
            return Err(MathError::NotSquare {
                rows: self.num_rows(),
                cols: self.num_cols(),
            });
        }
        Ok(())
    }

    /// The diagonal entries of a square matrix.
    pub fn diagonal_vector(&self) -> Result<Vector, MathError> {
        self.check_square()?;
        Ok(Vector::new(self.data.diagonal().iter().copied().collect()))
    }

    /// Sub-matrix of `num_rows x num_cols` starting at `(row, col)`.
    ///
    /// Selection wraps: element `(i, j)` of the result (zero-based) is taken
    /// from `((row - 1 + i) mod rows, (col - 1 + j) mod cols)`, so a minor may
    /// run past the right or bottom edge and continue from the other side.
    /// This is what lets `minor` cycle rows/columns or read off the right half
    /// of an augmented matrix.
    pub fn minor(
        &self,
        row: usize,
        col: usize,
        num_rows: usize,
        num_cols: usize,
    ) -> Result<Matrix, MathError> {
        if self.is_empty() {
            return Err(MathError::EmptyMatrix);
        }
        if row < 1 {
            return Err(MathError::IndexOutOfRange {
                index: row,
                len: self.num_rows(),
            });
        }
        if col < 1 {
            return Err(MathError::IndexOutOfRange {
                index: col,
                len: self.num_cols(),
            });
        }
        let (rows, cols) = self.dimensions();
        Ok(Matrix {
            data: DMatrix::from_fn(num_rows, num_cols, |i, j| {
                self.data[((row - 1 + i) % rows, (col - 1 + j) % cols)]
            }),
        })
    }

    /// `[self | other]`.
    ///
    /// When the row counts differ `self` is returned unchanged,
    /// which keeps chains of matrix operations going; check
    /// `num_rows()` first if that matters.
    pub fn augment(&self, other: &Matrix) -> Matrix {
        if self.num_rows() != other.num_rows() {
            return self.clone();
        }
        let rows = self.num_rows();
        let (left, right) = (self.num_cols(), other.num_cols());
        Matrix {
            data: DMatrix::from_fn(rows, left + right, |i, j| {
                if j < left {
                    self.data[(i, j)]
                } else {
                    other.data[(i, j - left)]
                }
            }),
        }
    }

    /// The entry with the largest absolute value (sign kept).
    pub fn max(&self) -> Real {
        self.data
            .iter()
            .fold(0.0, |best, x| if x.abs() > best.abs() { *x } else { best })
    }

    pub fn snap_to(&self, value: Real) -> Matrix {
        self.snap_to_with(value, Tolerance::current())
    }

    /// Replaces every entry within `tol` of `value` by exactly `value`.
    ///
    /// Matrices built from `sin`/`cos` are snapped to 0 so that, for example,
    /// `cos(π/2) ≈ 6e-17` composes as an exact zero.
    pub fn snap_to_with(&self, value: Real, tol: Tolerance) -> Matrix {
        self.map(|x, _, _| tol.snap(x, value))
    }

    /// A single row or column as a vector.
    pub fn to_vector(&self) -> Result<Vector, MathError> {
        if self.num_cols() == 1 {
            return self.col(1);
        }
        if self.num_rows() == 1 {
            return self.row(1);
        }
        Err(MathError::mismatch(1, self.num_cols()))
    }

    /// 1-indexed `(i, j)` of the first entry (row-major) within tolerance of `value`.
    pub fn index_of(&self, value: Real) -> Option<(usize, usize)> {
        let tol = Tolerance::current();
        let (rows, cols) = self.dimensions();
        (0..rows)
            .flat_map(|i| (0..cols).map(move |j| (i, j)))
            .find(|&(i, j)| tol.approx_eq(self.data[(i, j)], value))
            .map(|(i, j)| (i + 1, j + 1))
    }

    pub fn equal_to(&self, other: &Matrix) -> bool {
        self.equal_to_with(other, Tolerance::current())
    }

    /// Same size and every entry within `tol`.
    pub fn equal_to_with(&self, other: &Matrix, tol: Tolerance) -> bool {
        self.same_size_as(other)
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| tol.approx_eq(*a, *b))
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.num_rows() {
            if i > 0 {
                writeln!(f)?;
            }
            let row = Vector::new(self.data.row(i).iter().copied().collect());
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl From<DMatrix<Real>> for Matrix {
    fn from(data: DMatrix<Real>) -> Self {
        Matrix { data }
    }
}

/// A column matrix.
impl From<DVector<Real>> for Matrix {
    fn from(column: DVector<Real>) -> Self {
        let rows = column.len();
        Matrix {
            data: DMatrix::from_column_slice(rows, 1, column.as_slice()),
        }
    }
}

impl From<Matrix> for DMatrix<Real> {
    fn from(m: Matrix) -> Self {
        m.data
    }
}

impl From<Matrix3<Real>> for Matrix {
    fn from(m: Matrix3<Real>) -> Self {
        Matrix {
            data: DMatrix::from_column_slice(3, 3, m.as_slice()),
        }
    }
}

impl From<Matrix4<Real>> for Matrix {
    fn from(m: Matrix4<Real>) -> Self {
        Matrix {
            data: DMatrix::from_column_slice(4, 4, m.as_slice()),
        }
    }
}

impl approx::AbsDiffEq for Matrix {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.same_size_as(other)
            && approx::AbsDiffEq::abs_diff_eq(&self.data, &other.data, epsilon)
    }
}

impl approx::RelativeEq for Matrix {
    fn default_max_relative() -> Real {
        tolerance()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.same_size_as(other)
            && approx::RelativeEq::relative_eq(&self.data, &other.data, epsilon, max_relative)
    }
}
