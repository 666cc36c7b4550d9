//! Test support library
//! Provides various helper functions & utilities for tests.

use mathnetics::{Matrix, float_types::Real};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Builds a matrix from row literals, panicking on ragged input.
pub fn matrix<const C: usize>(rows: &[[Real; C]]) -> Matrix {
    Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).expect("rows are rectangular")
}
