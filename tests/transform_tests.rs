mod support;

use approx::assert_abs_diff_eq;
use mathnetics::float_types::{FRAC_PI_2, PI};
use mathnetics::prelude::*;
use support::matrix;

#[test]
fn only_two_and_three_dimensions_are_supported() {
    assert_eq!(AffineTransform::new(2).unwrap().dimension(), 2);
    assert_eq!(AffineTransform::new(3).unwrap().matrix(), &Matrix::identity(4));
    assert_eq!(AffineTransform::new(4), Err(MathError::UnsupportedDimension(4)));
    assert_eq!(AffineTransform::new(1), Err(MathError::UnsupportedDimension(1)));
}

/// The second call is the outer factor: translate first, then rotate.
#[test]
fn translate_then_rotate_2d_applies_in_call_order() {
    let mut t = AffineTransform::new_2d();
    t.translate_2d(1.0, 0.0).rotate_2d(PI / 2.0);
    let p = t.apply_to(&Point2::new(1.0, 0.0)).unwrap();
    assert_abs_diff_eq!(p, Point2::new(0.0, 2.0), epsilon = 1e-6);
}

#[test]
fn rotate_then_translate_2d() {
    let mut t = AffineTransform::new_2d();
    t.rotate_2d(PI / 2.0).translate_2d(1.0, 0.0);
    let p = t.apply_to(&Point2::new(1.0, 0.0)).unwrap();
    assert_abs_diff_eq!(p, Point2::new(1.0, 1.0), epsilon = 1e-6);
}

#[test]
fn rotation_x_by_pi_flips_y() {
    let mut t = AffineTransform::new(3).unwrap();
    t.rotation_x(PI);
    let p = t.apply_to(&Point3::new(0.0, 1.0, 0.0)).unwrap();
    assert_abs_diff_eq!(p, Point3::new(0.0, -1.0, 0.0), epsilon = 1e-6);
}

#[test]
fn axis_rotations_are_right_handed() {
    let quarter = |build: fn(&mut AffineTransform, Real) -> &mut AffineTransform, p: Point3| {
        let mut t = AffineTransform::new_3d();
        build(&mut t, FRAC_PI_2);
        t.apply_to(&p).unwrap()
    };
    assert_eq!(
        quarter(AffineTransform::rotation_x, Point3::new(0.0, 1.0, 0.0)),
        Point3::new(0.0, 0.0, 1.0)
    );
    assert_eq!(
        quarter(AffineTransform::rotation_y, Point3::new(0.0, 0.0, 1.0)),
        Point3::new(1.0, 0.0, 0.0)
    );
    assert_eq!(
        quarter(AffineTransform::rotation_z, Point3::new(1.0, 0.0, 0.0)),
        Point3::new(0.0, 1.0, 0.0)
    );
}

#[test]
fn rotation_matrices_are_snapped() {
    let mut t = AffineTransform::new_3d();
    t.rotation_z(FRAC_PI_2);
    assert_eq!(
        t.matrix(),
        &matrix(&[
            [0.0, -1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    );
}

#[test]
fn arbitrary_axis_agrees_with_coordinate_axes() {
    for theta in [0.3, 1.0, 2.5, -0.7] {
        let mut about_k = AffineTransform::new_3d();
        about_k.rotation(theta, Some(Vector::k().into())).unwrap();
        let mut z = AffineTransform::new_3d();
        z.rotation_z(theta);
        assert!(about_k.matrix().equal_to(z.matrix()));

        let mut about_i = AffineTransform::new_3d();
        about_i.rotation(theta, Some([2.0, 0.0, 0.0].into())).unwrap();
        let mut x = AffineTransform::new_3d();
        x.rotation_x(theta);
        assert!(about_i.matrix().equal_to(x.matrix()));
    }
}

#[test]
fn rotation_accepts_every_axis_form() {
    let expected = Point3::new(0.0, 1.0, 0.0);
    let p = Point3::new(1.0, 0.0, 0.0);
    let offset_axis = Line::new([5.0, 5.0, 5.0], [0.0, 0.0, 3.0]).unwrap();
    let axes: Vec<Axis> = vec![
        Vector::k().into(),
        Point3::new(0.0, 0.0, 1.0).into(),
        offset_axis.into(),
        [0.0, 0.0, 1.0].into(),
    ];
    for axis in axes {
        let mut t = AffineTransform::new_3d();
        t.rotation(FRAC_PI_2, Some(axis)).unwrap();
        assert_abs_diff_eq!(t.apply_to(&p).unwrap(), expected, epsilon = 1e-9);
    }
}

#[test]
fn rotation_without_axis_is_planar() {
    let mut t = AffineTransform::new_3d();
    t.rotation(FRAC_PI_2, None).unwrap();
    assert_eq!(t.dimension(), 2);
    let mut planar = AffineTransform::new_2d();
    planar.rotate_2d(FRAC_PI_2);
    assert_eq!(t, planar);
}

#[test]
fn rotation_rejects_bad_axes() {
    let mut t = AffineTransform::new_3d();
    assert_eq!(
        t.rotation(1.0, Some(Vector::from([1.0, 0.0]).into())).unwrap_err(),
        MathError::UnsupportedDimension(2)
    );
    assert_eq!(
        t.rotation(1.0, Some([0.0, 0.0, 0.0].into())).unwrap_err(),
        MathError::ZeroLength
    );
    // failed calls leave the transform alone
    assert_eq!(t, AffineTransform::new_3d());
}

#[test]
fn translations_accumulate() {
    let mut t = AffineTransform::new_2d();
    t.translate_2d(1.0, 2.0).translate_2d(3.0, 4.0);
    assert_eq!(t.apply_to(&Point2::ORIGIN), Ok(Point2::new(4.0, 6.0)));
    assert_eq!(t.matrix().row(3), Ok(Vector::from([0.0, 0.0, 1.0])));
}

#[test]
fn switching_dimension_resets_to_identity() {
    let mut t = AffineTransform::new_2d();
    t.translate_2d(5.0, 5.0).translate_3d(1.0, 2.0, 3.0);
    assert_eq!(t.dimension(), 3);
    assert_eq!(t.apply_to(&Point3::ORIGIN), Ok(Point3::new(1.0, 2.0, 3.0)));

    t.rotate_2d(0.5);
    assert_eq!(t.dimension(), 2);
    assert_eq!(t.matrix().num_rows(), 3);
}

#[test]
fn apply_requires_matching_dimension() {
    let t = AffineTransform::new_2d();
    assert_eq!(
        t.apply_to(&Point3::new(1.0, 2.0, 3.0)),
        Err(MathError::DimensionMismatch { expected: 2, found: 3 })
    );
    assert_eq!(
        t.apply_to_vector(&Vector::from([1.0, 2.0, 1.0])),
        Ok(Vector::from([1.0, 2.0, 1.0]))
    );
}

#[test]
fn last_row_stays_homogeneous() {
    let mut t = AffineTransform::new_3d();
    t.rotation_x(0.4)
        .translate_3d(1.0, -2.0, 0.5)
        .rotation(1.1, Some([1.0, 1.0, 1.0].into()))
        .unwrap()
        .new_coordinates(0.2, 0.9);
    assert_eq!(t.matrix().row(4), Ok(Vector::from([0.0, 0.0, 0.0, 1.0])));
}

#[test]
fn affine_inverse_undoes_the_transform() {
    let mut t = AffineTransform::new_3d();
    t.rotation_z(0.3).translate_3d(1.0, 2.0, 3.0).rotation_y(-1.2);
    assert!(t.invertible());
    let inverse = t.invert().unwrap();
    assert_eq!(inverse.dimension(), 3);

    let p = Point3::new(-4.0, 0.5, 7.0);
    let back = inverse.apply_to(&t.apply_to(&p).unwrap()).unwrap();
    assert_abs_diff_eq!(back, p, epsilon = 1e-9);

    assert!(inverse.matrix().equal_to(&t.matrix().invert().unwrap()));
    assert_eq!(inverse.matrix().row(4), Ok(Vector::from([0.0, 0.0, 0.0, 1.0])));
}

#[test]
fn two_dimensional_inverse() {
    let mut t = AffineTransform::new_2d();
    t.rotate_2d(0.8).translate_2d(-3.0, 1.0);
    let p = Point2::new(2.0, 5.0);
    let back = t.invert().unwrap().apply_to(&t.apply_to(&p).unwrap()).unwrap();
    assert_abs_diff_eq!(back, p, epsilon = 1e-9);
}

#[test]
fn dup_snapshots_a_stage() {
    let mut t = AffineTransform::new_3d();
    t.translate_3d(1.0, 0.0, 0.0);
    let snapshot = t.dup();
    t.rotation_z(PI);
    assert_eq!(snapshot.apply_to(&Point3::ORIGIN), Ok(Point3::new(1.0, 0.0, 0.0)));
    assert_abs_diff_eq!(
        t.apply_to(&Point3::ORIGIN).unwrap(),
        Point3::new(-1.0, 0.0, 0.0),
        epsilon = 1e-9
    );
}

#[test]
fn new_coordinates_views_along_the_given_direction() {
    // looking from +x changes nothing
    let mut t = AffineTransform::new_3d();
    t.new_coordinates(0.0, FRAC_PI_2);
    assert_eq!(t.matrix(), &Matrix::identity(4));

    // looking from +y: the y-axis becomes the depth axis
    let mut t = AffineTransform::new_3d();
    t.new_coordinates(FRAC_PI_2, FRAC_PI_2);
    assert_eq!(t.apply_to(&Point3::new(0.0, 1.0, 0.0)), Ok(Point3::new(1.0, 0.0, 0.0)));
    assert_eq!(t.apply_to(&Point3::new(1.0, 0.0, 0.0)), Ok(Point3::new(0.0, -1.0, 0.0)));
    assert_eq!(t.apply_to(&Point3::new(0.0, 0.0, 1.0)), Ok(Point3::new(0.0, 0.0, 1.0)));
}
