//! Gaussian elimination: upper-triangular reduction, determinant, rank and
//! Gauss-Jordan inversion.
//!
//! Pivots are accepted only when their magnitude exceeds the tolerance.
//! A rejected pivot is repaired by *adding* the lower row with the largest
//! entry in that column (adding preserves the determinant, swapping would
//! flip its sign). A column with no usable pivot is treated as zero from the
//! pivot row down and skipped, so the result is in row-echelon form.

use super::Matrix;
use crate::errors::MathError;
use crate::float_types::{Real, Tolerance};

impl Matrix {
    pub fn to_upper_triangular(&self) -> Matrix {
        self.to_upper_triangular_with(Tolerance::current())
    }

    /// Row-echelon form reached using only row additions, so the determinant
    /// and rank of the result equal those of `self`.
    pub fn to_upper_triangular_with(&self, tol: Tolerance) -> Matrix {
        let mut m = self.data.clone();
        let (rows, cols) = m.shape();
        let mut pivot_row = 0;

        for col in 0..cols {
            if pivot_row >= rows {
                break;
            }

            if tol.is_zero(m[(pivot_row, col)]) {
                let replacement = (pivot_row + 1..rows)
                    .filter(|&k| !tol.is_zero(m[(k, col)]))
                    .max_by(|&a, &b| m[(a, col)].abs().total_cmp(&m[(b, col)].abs()));

                match replacement {
                    Some(k) => {
                        tracing::trace!(row = pivot_row + 1, from = k + 1, col = col + 1, "pivot repaired");
                        for c in 0..cols {
                            let value = m[(k, c)];
                            m[(pivot_row, c)] += value;
                        }
                    },
                    None => {
                        for k in pivot_row..rows {
                            m[(k, col)] = 0.0;
                        }
                        continue;
                    },
                }
            }

            let pivot = m[(pivot_row, col)];
            for k in pivot_row + 1..rows {
                let factor = m[(k, col)] / pivot;
                if factor == 0.0 {
                    continue;
                }
                for c in col + 1..cols {
                    let delta = factor * m[(pivot_row, c)];
                    m[(k, c)] -= delta;
                }
                m[(k, col)] = 0.0;
            }
            pivot_row += 1;
        }

        Matrix::from(m)
    }

    pub fn determinant(&self) -> Result<Real, MathError> {
        self.determinant_with(Tolerance::current())
    }

    /// Product of the diagonal of the upper-triangular form; square matrices only.
    pub fn determinant_with(&self, tol: Tolerance) -> Result<Real, MathError> {
        self.check_square()?;
        let upper = self.to_upper_triangular_with(tol);
        Ok(upper.data.diagonal().iter().product())
    }

    pub fn is_singular(&self) -> bool {
        self.is_singular_with(Tolerance::current())
    }

    /// Square with a determinant within `tol` of zero.
    pub fn is_singular_with(&self, tol: Tolerance) -> bool {
        self.determinant_with(tol).is_ok_and(|det| tol.is_zero(det))
    }

    pub fn invertible(&self) -> bool {
        self.invertible_with(Tolerance::current())
    }

    /// Square and not singular. Non-square matrices are never invertible.
    pub fn invertible_with(&self, tol: Tolerance) -> bool {
        self.determinant_with(tol).is_ok_and(|det| !tol.is_zero(det))
    }

    pub fn invert(&self) -> Result<Matrix, MathError> {
        self.invert_with(Tolerance::current())
    }

    /// Gauss-Jordan inversion.
    ///
    /// `[self | I]` is reduced to upper-triangular form, then each row from
    /// the bottom up is scaled to a unit pivot and eliminated from the rows
    /// above it. The right half is the inverse.
    pub fn invert_with(&self, tol: Tolerance) -> Result<Matrix, MathError> {
        self.check_square()?;
        if !self.invertible_with(tol) {
            tracing::debug!(rows = self.num_rows(), "refusing to invert a singular matrix");
            return Err(MathError::Singular);
        }
        let n = self.num_rows();
        if n == 0 {
            return Ok(Matrix::empty());
        }

        let mut m = self
            .augment(&Matrix::identity(n))
            .to_upper_triangular_with(tol)
            .data;
        let width = 2 * n;

        for r in (0..n).rev() {
            let pivot = m[(r, r)];
            if tol.is_zero(pivot) {
                return Err(MathError::Singular);
            }
            for c in 0..width {
                m[(r, c)] /= pivot;
            }
            for above in 0..r {
                let factor = m[(above, r)];
                if factor == 0.0 {
                    continue;
                }
                for c in 0..width {
                    let delta = factor * m[(r, c)];
                    m[(above, c)] -= delta;
                }
            }
        }

        Matrix::from(m).minor(1, n + 1, n, n)
    }

    pub fn rank(&self) -> usize {
        self.rank_with(Tolerance::current())
    }

    /// Number of rows of the upper-triangular form holding an entry larger than `tol`.
    pub fn rank_with(&self, tol: Tolerance) -> usize {
        let upper = self.to_upper_triangular_with(tol);
        upper
            .data
            .row_iter()
            .filter(|row| row.iter().any(|x| !tol.is_zero(*x)))
            .count()
    }
}
