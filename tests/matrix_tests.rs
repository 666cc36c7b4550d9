mod support;

use approx::assert_abs_diff_eq;
use mathnetics::prelude::*;
use proptest::prelude::*;
use support::matrix;

#[test]
fn constructors() {
    let m = matrix(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    assert_eq!(m.dimensions(), (2, 3));
    assert_eq!(m.get(2, 1), Ok(4.0));
    assert!(m.get(3, 1).is_err());
    assert!(m.get(1, 0).is_err());

    assert_eq!(
        Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]),
        Err(MathError::RaggedRows { row: 2, expected: 2, found: 1 })
    );

    let row = Matrix::from_vector(&Vector::from([1.0, 2.0, 3.0]));
    assert_eq!(row.dimensions(), (1, 3));
    assert!(Matrix::empty().is_empty());
}

#[test]
fn diagonal_places_entries_on_the_diagonal() {
    let d = Matrix::diagonal([1.0, 2.0, 3.0]);
    assert_eq!(d.get(1, 1), Ok(1.0));
    assert_eq!(d.get(2, 2), Ok(2.0));
    assert_eq!(d.get(3, 3), Ok(3.0));
    for i in 1..=3 {
        for j in 1..=3 {
            if i != j {
                assert_eq!(d.get(i, j), Ok(0.0));
            }
        }
    }
    assert_eq!(Matrix::diagonal(Vector::from([1.0, 1.0, 1.0])), Matrix::identity(3));
}

#[test]
fn random_respects_shape_and_bound() {
    let unit = Matrix::random(3, 4, None);
    assert_eq!(unit.dimensions(), (3, 4));
    assert!(unit.as_dmatrix().iter().all(|x| (0.0..1.0).contains(x)));

    let ints = Matrix::random(5, 5, Some(3));
    assert!(ints.as_dmatrix().iter().all(|x| x.fract() == 0.0 && (0.0..=3.0).contains(x)));
}

#[test]
fn rows_columns_and_set_element() {
    let mut m = matrix(&[[1.0, 2.0], [3.0, 4.0]]);
    assert_eq!(m.row(2), Ok(Vector::from([3.0, 4.0])));
    assert_eq!(m.col(2), Ok(Vector::from([2.0, 4.0])));

    m.set_element(1, 1, 9.0).unwrap().set_element(2, 2, 8.0).unwrap();
    assert_eq!(m, matrix(&[[9.0, 2.0], [3.0, 8.0]]));
    assert!(m.set_element(3, 1, 0.0).is_err());
}

#[test]
fn elementwise_arithmetic() {
    let a = matrix(&[[1.0, 2.0], [3.0, 4.0]]);
    let b = matrix(&[[4.0, 3.0], [2.0, 1.0]]);
    assert_eq!(a.add(&b), Ok(matrix(&[[5.0, 5.0], [5.0, 5.0]])));
    assert_eq!(a.subtract(&a), Ok(Matrix::zero(2, 2)));
    assert_eq!(a.multiply_by(2.0), matrix(&[[2.0, 4.0], [6.0, 8.0]]));
    assert_eq!(a.negative().max(), -4.0);
    assert_eq!(matrix(&[[1.4, -2.6]]).round(), matrix(&[[1.0, -3.0]]));
    assert!(a.add(&Matrix::identity(3)).is_err());
}

#[test]
fn multiplication_checks_inner_dimensions() {
    let a = matrix(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    let b = matrix(&[[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]);
    assert!(a.can_multiply_from_left(&b));
    assert_eq!(a.multiply(&b), Ok(matrix(&[[4.0, 5.0], [10.0, 11.0]])));

    assert!(!a.can_multiply_from_left(&a));
    assert_eq!(
        a.multiply(&a),
        Err(MathError::DimensionMismatch { expected: 3, found: 2 })
    );

    assert_eq!(
        a.multiply_vector(&Vector::from([1.0, 1.0, 1.0])),
        Ok(Vector::from([6.0, 15.0]))
    );
    assert!(a.multiply_vector(&Vector::from([1.0, 1.0])).is_err());
}

#[test]
fn trace_and_transpose() {
    let m = matrix(&[[1.0, 2.0], [3.0, 4.0]]);
    assert_eq!(m.trace(), Ok(5.0));
    assert_eq!(m.transpose(), matrix(&[[1.0, 3.0], [2.0, 4.0]]));
    assert_eq!(
        matrix(&[[1.0, 2.0, 3.0]]).trace(),
        Err(MathError::NotSquare { rows: 1, cols: 3 })
    );
    assert_eq!(m.diagonal_vector(), Ok(Vector::from([1.0, 4.0])));
}

#[test]
fn minor_wraps_rows_and_columns() {
    let m = matrix(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    assert_eq!(m.minor(1, 1, 2, 2), Ok(matrix(&[[1.0, 2.0], [4.0, 5.0]])));
    assert_eq!(
        m.minor(1, 2, 3, 3),
        Ok(matrix(&[[2.0, 3.0, 1.0], [5.0, 6.0, 4.0], [8.0, 9.0, 7.0]]))
    );
    assert_eq!(m.minor(3, 3, 2, 2), Ok(matrix(&[[9.0, 7.0], [3.0, 1.0]])));
    assert_eq!(Matrix::empty().minor(1, 1, 1, 1), Err(MathError::EmptyMatrix));
}

#[test]
fn augment_is_permissive() {
    let a = matrix(&[[1.0], [2.0]]);
    let b = matrix(&[[3.0, 4.0], [5.0, 6.0]]);
    assert_eq!(a.augment(&b), matrix(&[[1.0, 3.0, 4.0], [2.0, 5.0, 6.0]]));
    // mismatched row counts leave the matrix untouched
    assert_eq!(a.augment(&Matrix::identity(3)), a);
}

#[test]
fn identity_and_zero_determinants() {
    for n in 1..6 {
        assert_eq!(Matrix::identity(n).determinant(), Ok(1.0));
        assert_eq!(Matrix::zero(n, n).determinant(), Ok(0.0));
    }
    assert_eq!(
        Matrix::zero(2, 3).determinant(),
        Err(MathError::NotSquare { rows: 2, cols: 3 })
    );
}

#[test]
fn determinant_with_row_repair() {
    assert_eq!(matrix(&[[0.0, 1.0], [1.0, 0.0]]).determinant(), Ok(-1.0));
    let m = matrix(&[[2.0, -1.0, 0.0], [-1.0, 2.0, -1.0], [0.0, -1.0, 2.0]]);
    assert_abs_diff_eq!(m.determinant().unwrap(), 4.0, epsilon = 1e-12);
}

#[test]
fn upper_triangular_form() {
    let m = matrix(&[[2.0, 1.0], [4.0, 5.0]]);
    assert_eq!(m.to_upper_triangular(), matrix(&[[2.0, 1.0], [0.0, 3.0]]));
}

#[test]
fn rank_counts_nonzero_rows() {
    assert_eq!(Matrix::identity(3).rank(), 3);
    assert_eq!(Matrix::zero(2, 2).rank(), 0);
    assert_eq!(matrix(&[[1.0, 2.0], [2.0, 4.0]]).rank(), 1);
    assert_eq!(matrix(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).rank(), 2);
}

#[test]
fn invert_known_matrix() {
    let m = matrix(&[[2.0, -1.0, 0.0], [-1.0, 2.0, -1.0], [0.0, -1.0, 2.0]]);
    assert!(m.invertible());
    let expected = matrix(&[[3.0, 2.0, 1.0], [2.0, 4.0, 2.0], [1.0, 2.0, 3.0]]).multiply_by(0.25);
    assert!(m.invert().unwrap().equal_to(&expected));
    assert!(m.multiply(&m.invert().unwrap()).unwrap().equal_to(&Matrix::identity(3)));
}

#[test]
fn singular_and_non_square_are_not_invertible() {
    let singular = matrix(&[[1.0, 2.0], [2.0, 4.0]]);
    assert!(singular.is_singular());
    assert!(!singular.invertible());
    assert_eq!(singular.invert(), Err(MathError::Singular));

    let wide = matrix(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
    assert!(!wide.is_singular());
    assert!(!wide.invertible());
    assert_eq!(wide.invert(), Err(MathError::NotSquare { rows: 2, cols: 3 }));
}

#[test]
fn snap_to_removes_trigonometric_noise() {
    let m = matrix(&[[6e-17, 1.0], [0.5, -6e-17]]);
    let snapped = m.snap_to(0.0);
    assert_eq!(snapped.get(1, 1), Ok(0.0));
    assert_eq!(snapped.get(2, 2), Ok(0.0));
    assert_eq!(snapped.get(1, 2), Ok(1.0));
    assert_eq!(snapped.get(2, 1), Ok(0.5));
    assert_eq!(matrix(&[[0.999_999_9]]).snap_to(1.0), matrix(&[[1.0]]));
}

#[test]
fn equality_tolerance_and_lookup() {
    let a = matrix(&[[1.0, 2.0], [3.0, 4.0]]);
    let b = matrix(&[[1.0 + 1e-9, 2.0], [3.0, 4.0]]);
    assert_ne!(a, b);
    assert!(a.equal_to(&b));
    assert!(!a.equal_to(&Matrix::identity(3)));
    assert_eq!(a.index_of(3.0), Some((2, 1)));
    assert_eq!(a.index_of(10.0), None);
    assert_eq!(matrix(&[[1.0, 2.0]]).to_vector(), Ok(Vector::from([1.0, 2.0])));
    assert!(a.to_vector().is_err());
}

#[test]
fn display_prints_one_row_per_line() {
    assert_eq!(matrix(&[[1.0, 2.0], [3.0, 4.0]]).to_string(), "[1, 2]\n[3, 4]");
}

/// Diagonally dominant 3x3 matrices are always comfortably invertible.
fn dominant_matrix() -> impl Strategy<Value = Matrix> {
    prop::array::uniform9(-1.0f64..1.0).prop_map(|e| {
        matrix(&[
            [e[0] + 5.0, e[1], e[2]],
            [e[3], e[4] + 5.0, e[5]],
            [e[6], e[7], e[8] + 5.0],
        ])
    })
}

proptest! {
    #[test]
    fn transpose_is_an_involution(e in prop::array::uniform6(-100.0f64..100.0)) {
        let m = matrix(&[[e[0], e[1], e[2]], [e[3], e[4], e[5]]]);
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn product_with_inverse_is_identity(m in dominant_matrix()) {
        let inverse = m.invert().unwrap();
        prop_assert!(m.multiply(&inverse).unwrap().equal_to(&Matrix::identity(3)));
    }

    #[test]
    fn double_inverse_round_trips(m in dominant_matrix()) {
        prop_assert!(m.invert().unwrap().invert().unwrap().equal_to(&m));
    }
}
