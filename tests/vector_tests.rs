mod support;

use approx::assert_abs_diff_eq;
use mathnetics::float_types::{FRAC_PI_2, PI};
use mathnetics::prelude::*;
use proptest::prelude::*;
use support::approx_eq;

#[test]
fn construction_and_indexing() {
    let v = Vector::new(vec![3.0, -1.0, 2.0]);
    assert_eq!(v.dimension(), 3);
    assert_eq!(v.get(2), Ok(-1.0));
    assert_eq!(
        v.get(4),
        Err(MathError::IndexOutOfRange { index: 4, len: 3 })
    );
    assert_eq!(Vector::zeros(4).as_slice(), &[0.0; 4]);
}

#[test]
fn arithmetic_requires_matching_dimensions() {
    let a = Vector::from([1.0, 2.0, 3.0]);
    let b = Vector::from([4.0, 5.0, 6.0]);
    assert_eq!(a.add(&b), Ok(Vector::from([5.0, 7.0, 9.0])));
    assert_eq!(b.subtract(&a), Ok(Vector::from([3.0, 3.0, 3.0])));
    assert_eq!(a.multiply_by(2.0), Vector::from([2.0, 4.0, 6.0]));
    assert_eq!(a.negative(), -a.clone());
    assert_eq!(a.dot(&b), Ok(32.0));

    let short = Vector::from([1.0, 2.0]);
    assert_eq!(
        a.add(&short),
        Err(MathError::DimensionMismatch { expected: 3, found: 2 })
    );
    assert!(a.dot(&short).is_err());
}

#[test]
fn cross_product_is_three_dimensional_only() {
    assert_eq!(Vector::i().cross(&Vector::j()), Ok(Vector::k()));
    assert_eq!(Vector::j().cross(&Vector::i()), Ok(-Vector::k()));
    assert_eq!(
        Vector::from([1.0, 0.0]).cross(&Vector::from([0.0, 1.0])),
        Err(MathError::CrossUndefined { dimension: 2 })
    );
}

#[test]
fn normalize_and_length() {
    let v = Vector::from([3.0, 4.0]);
    assert_eq!(v.length(), 5.0);
    assert_abs_diff_eq!(v.normalize().unwrap(), Vector::from([0.6, 0.8]), epsilon = 1e-12);
    assert_eq!(Vector::zeros(3).normalize(), Err(MathError::ZeroLength));
}

#[test]
fn angles_and_orientation_tests() {
    let i = Vector::i();
    let j = Vector::j();
    assert!(approx_eq(i.angle_between(&j).unwrap(), FRAC_PI_2, 1e-12));
    assert!(approx_eq(i.angle_between(&-i.clone()).unwrap(), PI, 1e-12));

    assert!(i.is_parallel(&i.multiply_by(3.0)));
    assert!(!i.is_parallel(&-i.clone()));
    assert!(i.is_antiparallel(&-i.clone()));
    assert!(i.is_perpendicular(&j));
    assert!(!i.is_perpendicular(&i));
    // a zero vector has no direction
    assert!(!Vector::zeros(3).is_parallel(&i));
    assert_eq!(Vector::zeros(3).angle_between(&i), Err(MathError::ZeroLength));
    // lengths inside the tolerance count as zero, as in normalize
    let tiny = Vector::from([1e-9, 0.0, 0.0]);
    assert_eq!(tiny.angle_between(&i), Err(MathError::ZeroLength));
    assert_eq!(tiny.normalize(), Err(MathError::ZeroLength));
}

#[test]
fn max_and_index_of() {
    let v = Vector::from([1.0, -5.0, 3.0]);
    assert_eq!(v.max(), -5.0);
    assert_eq!(v.index_of(3.0), Some(3));
    assert_eq!(v.index_of(3.0 + 1e-9), Some(3));
    assert_eq!(v.index_of(7.0), None);
}

#[test]
fn conversions_to_points_and_matrices() {
    assert_eq!(Vector::from([1.0, 2.0]).make_3d(), Ok(Vector::from([1.0, 2.0, 0.0])));
    assert_eq!(Vector::from([1.0, 2.0]).to_point2(), Ok(Point2::new(1.0, 2.0)));
    assert_eq!(
        Vector::from([2.0, 4.0, 6.0, 2.0]).to_point3(),
        Ok(Point3::new(1.0, 2.0, 3.0))
    );
    assert_eq!(
        Vector::from([1.0; 5]).to_point3(),
        Err(MathError::UnsupportedDimension(5))
    );

    let v = Vector::from([1.0, 2.0, 3.0]);
    assert_eq!(v.to_column_matrix().dimensions(), (3, 1));
    assert_eq!(v.to_row_matrix().dimensions(), (1, 3));
    assert_eq!(v.to_column_matrix().to_vector(), Ok(v.clone()));
}

#[test]
fn display() {
    assert_eq!(Vector::from([1.0, -2.0, 0.5]).to_string(), "[1, -2, 0.5]");
}

proptest! {
    #[test]
    fn dot_with_self_is_squared_length(xs in prop::collection::vec(-100.0f64..100.0, 1..6)) {
        let v = Vector::new(xs);
        let len = v.length();
        prop_assert!((v.dot(&v).unwrap() - len * len).abs() < 1e-6);
    }

    #[test]
    fn normalized_vectors_have_unit_length(xs in prop::collection::vec(1.0f64..100.0, 1..6)) {
        let v = Vector::new(xs).normalize().unwrap();
        prop_assert!((v.length() - 1.0).abs() < 1e-9);
    }
}
