mod support;

use approx::assert_abs_diff_eq;
use mathnetics::float_types::FRAC_PI_2;
use mathnetics::prelude::*;
use support::approx_eq;

#[test]
fn cube_layout() {
    let cube = Object3D::cube(2.0, None);
    assert_eq!(cube.vertices().len(), 8);
    assert_eq!(cube.faces().len(), 6);
    assert!(cube.faces().iter().all(|f| f.len() == 5 && f.first() == f.last()));
    assert!(
        cube.vertices()
            .iter()
            .all(|v| v.x.abs() == 1.0 && v.y.abs() == 1.0 && v.z.abs() == 1.0)
    );
}

#[test]
fn cube_is_centered_where_asked() {
    let cube = Object3D::cube(2.0, Some(Point3::new(10.0, 0.0, -5.0)));
    assert_eq!(cube.vertices()[0], Point3::new(11.0, -1.0, -4.0));
    assert_eq!(cube.vertices()[7], Point3::new(9.0, -1.0, -6.0));
}

#[test]
fn faces_must_reference_existing_vertices() {
    let vertices = vec![Point3::ORIGIN, Point3::new(1.0, 0.0, 0.0)];
    assert_eq!(
        Object3D::new(vertices.clone(), vec![vec![0, 1], vec![1, 2]]),
        Err(MathError::IndexOutOfRange { index: 2, len: 2 })
    );

    let mut object = Object3D::new(vertices, vec![vec![0, 1]]).unwrap();
    object.add_face(vec![1, 0]).unwrap();
    assert_eq!(object.faces(), &[vec![0, 1], vec![1, 0]]);
    assert!(object.add_face(vec![5]).is_err());
    assert_eq!(object.faces().len(), 2);
}

#[test]
fn to_each_and_translate_move_vertices_only() {
    let mut object = Object3D::polyline([[0.0, 0.0, 0.0], [1.0, 2.0, 3.0]]);
    object.to_each(|v| v * 2.0).translate(1.0, 0.0, 0.0);
    assert_eq!(
        object.vertices(),
        &[Point3::new(1.0, 0.0, 0.0), Point3::new(3.0, 4.0, 6.0)]
    );
    assert_eq!(object.faces(), &[vec![0, 1]]);
}

#[test]
fn view_in_leaves_the_model_alone() {
    let mut cube = Object3D::cube(2.0, None);
    let before = cube.vertices().to_vec();
    cube.view_in(FRAC_PI_2, FRAC_PI_2);
    assert_eq!(cube.vertices(), before.as_slice());
    assert_eq!(cube.view().len(), 8);
    // looking from +y, the y coordinate becomes depth
    assert_eq!(cube.view()[0], Point3::new(-1.0, -1.0, 1.0));
}

#[test]
fn perspective_projection() {
    let mut cube = Object3D::cube(2.0, None);
    cube.view_in(0.0, FRAC_PI_2).to_2d(3.0).unwrap();
    let screen = cube.screen();
    assert_eq!(screen.len(), 8);
    // the near face (x = 1) is magnified, the far face (x = -1) shrunk
    assert_abs_diff_eq!(screen[0], Point2::new(-1.5, 1.5), epsilon = 1e-12);
    assert_abs_diff_eq!(screen[3], Point2::new(-0.75, 0.75), epsilon = 1e-12);
}

#[test]
fn edges_follow_the_faces() {
    let mut cube = Object3D::cube(2.0, None);
    assert_eq!(
        cube.edges_2d(),
        Err(MathError::IndexOutOfRange { index: 0, len: 0 })
    );

    cube.view_in(0.0, FRAC_PI_2).to_2d(3.0).unwrap();
    let edges = cube.edges_2d().unwrap();
    assert_eq!(edges.len(), 24);
    assert_eq!(edges[0], (cube.screen()[0], cube.screen()[4]));
    assert_eq!(edges[3], (cube.screen()[1], cube.screen()[0]));
}

#[test]
fn moving_the_model_invalidates_the_projection() {
    let mut path = Object3D::polyline([[0.0, 1.0, 0.0], [0.0, 2.0, 0.0]]);
    path.view_in(0.0, FRAC_PI_2).to_2d(10.0).unwrap();
    assert_eq!(
        path.edges_2d(),
        Ok(vec![(Point2::new(1.0, 0.0), Point2::new(2.0, 0.0))])
    );

    path.translate(0.0, 5.0, 0.0);
    assert!(path.view().is_empty());
    assert!(path.screen().is_empty());
    assert_eq!(
        path.edges_2d(),
        Err(MathError::IndexOutOfRange { index: 0, len: 0 })
    );

    path.view_in(0.0, FRAC_PI_2);
    assert!(path.screen().is_empty());
    path.to_2d(10.0).unwrap();
    assert_eq!(
        path.edges_2d(),
        Ok(vec![(Point2::new(6.0, 0.0), Point2::new(7.0, 0.0))])
    );
}

#[test]
fn projection_rejects_vertices_in_the_camera_plane() {
    let mut path = Object3D::polyline([[0.0, 1.0, 0.0], [3.0, 2.0, 0.0]]);
    path.view_in(0.0, FRAC_PI_2).to_2d(10.0).unwrap();
    let before = path.screen().to_vec();

    assert!(matches!(path.to_2d(3.0), Err(MathError::ZeroLength)));
    assert_eq!(path.screen(), before.as_slice());
}

#[test]
fn polyline_connects_consecutive_points() {
    let path = Object3D::polyline([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]]);
    assert_eq!(path.vertices().len(), 3);
    assert_eq!(path.faces(), &[vec![0, 1], vec![1, 2]]);

    let empty = Object3D::polyline(Vec::<Point3>::new());
    assert!(empty.vertices().is_empty());
    assert!(empty.faces().is_empty());
}

#[test]
fn axis_segments() {
    let x = Object3D::x_axis(-2.0, 3.0);
    assert_eq!(
        x.vertices(),
        &[Point3::new(-2.0, 0.0, 0.0), Point3::new(3.0, 0.0, 0.0)]
    );
    assert_eq!(Object3D::y_axis(0.0, 1.0).vertices()[1], Point3::new(0.0, 1.0, 0.0));
    assert_eq!(Object3D::z_axis(0.0, 1.0).vertices()[1], Point3::new(0.0, 0.0, 1.0));
    assert_eq!(x.faces().len(), 1);
}

#[test]
fn sphere_counts() {
    // 11 rings of 24 plus the two poles
    let sphere = Object3D::sphere(1.0, None, None);
    assert_eq!(sphere.vertices().len(), 11 * 24 + 2);
    assert_eq!(sphere.faces().len(), 10 * 24 + 2 * 24);

    let coarse = Object3D::sphere(1.0, None, Some(4));
    assert_eq!(coarse.vertices().len(), 5 * 12 + 2);
    assert_eq!(coarse.faces().len(), 4 * 12 + 2 * 12);
}

#[test]
fn sphere_vertices_lie_on_the_surface() {
    let center = Point3::new(1.0, -2.0, 3.0);
    let sphere = Object3D::sphere(2.5, Some(center), Some(6));
    for v in sphere.vertices() {
        let distance = v.subtract(&center).unwrap().length();
        assert!(approx_eq(distance, 2.5, 1e-9));
    }
    let n = sphere.vertices().len();
    assert_abs_diff_eq!(sphere.vertices()[n - 1], Point3::new(1.0, 0.5, 3.0), epsilon = 1e-12);
    assert!(sphere.faces().iter().flatten().all(|&i| i < n));
}

#[test]
fn display_lists_vertices_then_faces() {
    let path = Object3D::polyline([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]);
    assert_eq!(path.to_string(), "vertices:\n(0,0,0)\n(1,0,0)\n\nfaces:\n[0, 1]");
}
