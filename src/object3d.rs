//! Face-vertex wireframes that can be viewed from a camera direction and
//! projected to 2D.
//!
//! A face is an *open* polyline of vertex indices: a square is `[0, 1, 2, 3, 0]`.
//! The same model therefore holds line segments, polygons and solids.

use crate::errors::MathError;
use crate::float_types::{FRAC_PI_2, Real, Tolerance};
use crate::line::Line;
use crate::point::{Point2, Point3};
use crate::transform::AffineTransform;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object3D {
    vertices: Vec<Point3>,
    faces: Vec<Vec<usize>>,
    /// Vertices in camera coordinates after the last `view_in`.
    view: Vec<Point3>,
    /// Perspective projection of `view` after the last `to_2d`.
    screen: Vec<Point2>,
}

impl Object3D {
    /// Fails with `IndexOutOfRange` when a face refers to a missing vertex.
    pub fn new(vertices: Vec<Point3>, faces: Vec<Vec<usize>>) -> Result<Self, MathError> {
        let mut object = Object3D {
            vertices,
            ..Default::default()
        };
        for face in faces {
            object.add_face(face)?;
        }
        Ok(object)
    }

    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Vec<usize>] {
        &self.faces
    }

    /// Camera-space vertices from the last [`view_in`](Self::view_in).
    pub fn view(&self) -> &[Point3] {
        &self.view
    }

    /// Projected vertices from the last [`to_2d`](Self::to_2d).
    pub fn screen(&self) -> &[Point2] {
        &self.screen
    }

    pub fn add_face(&mut self, face: Vec<usize>) -> Result<&mut Self, MathError> {
        let len = self.vertices.len();
        if let Some(&index) = face.iter().find(|&&i| i >= len) {
            return Err(MathError::IndexOutOfRange { index, len });
        }
        self.faces.push(face);
        Ok(self)
    }

    /// Replaces every vertex with `f(vertex)`. Faces are untouched; the
    /// camera view and projection are discarded since they no longer match.
    pub fn to_each<F: FnMut(Point3) -> Point3>(&mut self, mut f: F) -> &mut Self {
        for v in &mut self.vertices {
            *v = f(*v);
        }
        self.view.clear();
        self.screen.clear();
        self
    }

    pub fn translate(&mut self, dx: Real, dy: Real, dz: Real) -> &mut Self {
        let mut t = AffineTransform::new_3d();
        t.translate_3d(dx, dy, dz);
        self.to_each(|v| t.apply_to_point3(&v))
    }

    /// Expresses every vertex in the viewing frame of a camera looking from
    /// direction `(theta, phi)`; see [`AffineTransform::new_coordinates`].
    /// The object itself is not moved. Any earlier projection is discarded.
    pub fn view_in(&mut self, theta: Real, phi: Real) -> &mut Self {
        let mut t = AffineTransform::new_3d();
        t.new_coordinates(theta, phi);
        self.view = self.vertices.iter().map(|v| t.apply_to_point3(v)).collect();
        self.screen.clear();
        self
    }

    /// Perspective projection of the viewed vertices for a camera `focus`
    /// units from the origin: `m = focus / (focus - x)`, giving `(m·y, m·z)`.
    ///
    /// Fails with `ZeroLength` when a vertex sits in the camera's own plane
    /// (`x == focus` within tolerance); the previous projection is kept.
    pub fn to_2d(&mut self, focus: Real) -> Result<&mut Self, MathError> {
        let tol = Tolerance::current();
        self.screen = self
            .view
            .iter()
            .map(|p| {
                let depth = focus - p.x;
                if tol.is_zero(depth) {
                    return Err(MathError::ZeroLength);
                }
                let m = focus / depth;
                Ok(Point2::new(m * p.y, m * p.z))
            })
            .collect::<Result<_, _>>()?;
        Ok(self)
    }

    /// Line segments between consecutive projected vertices of every face,
    /// in face order. Fails with `IndexOutOfRange` if [`to_2d`](Self::to_2d)
    /// has not run since the vertices last changed.
    pub fn edges_2d(&self) -> Result<Vec<(Point2, Point2)>, MathError> {
        let len = self.screen.len();
        let at = |index: usize| {
            self.screen
                .get(index)
                .copied()
                .ok_or(MathError::IndexOutOfRange { index, len })
        };
        let mut edges = Vec::new();
        for face in &self.faces {
            for pair in face.windows(2) {
                edges.push((at(pair[0])?, at(pair[1])?));
            }
        }
        Ok(edges)
    }

    /// Axis-aligned cube of edge `side`, centered at `center` (default origin).
    pub fn cube(side: Real, center: Option<Point3>) -> Self {
        let h = side / 2.0;
        let vertices = vec![
            Point3::new(h, -h, h),
            Point3::new(h, h, h),
            Point3::new(-h, h, h),
            Point3::new(-h, -h, h),
            Point3::new(h, -h, -h),
            Point3::new(h, h, -h),
            Point3::new(-h, h, -h),
            Point3::new(-h, -h, -h),
        ];
        let faces = vec![
            vec![0, 4, 5, 1, 0],
            vec![1, 5, 6, 2, 1],
            vec![2, 6, 7, 3, 2],
            vec![3, 7, 4, 0, 3],
            vec![4, 5, 6, 7, 4],
            vec![0, 1, 2, 3, 0],
        ];
        let mut cube = Object3D {
            vertices,
            faces,
            ..Default::default()
        };
        if let Some(c) = center {
            cube.translate(c.x, c.y, c.z);
        }
        cube
    }

    /// Latitude/longitude wireframe sphere about the y-axis.
    ///
    /// `segments` (default 10) controls the resolution: `segments / 2` rings
    /// above and below the equator, each with `2·segments + 4` vertices,
    /// plus one vertex at each pole.
    pub fn sphere(radius: Real, center: Option<Point3>, segments: Option<usize>) -> Self {
        let half = segments.map_or(5, |s| s / 2);
        let step = FRAC_PI_2 / (half + 1) as Real;
        let around = 4 * half + 4;
        let rings = 2 * half + 1;

        let mut vertices = Vec::with_capacity(rings * around + 2);
        for ring in 0..rings {
            let latitude = step * (ring as Real - half as Real);
            let r = radius * latitude.cos();
            let y = radius * latitude.sin();
            for j in 0..around {
                let longitude = step * j as Real;
                vertices.push(Point3::new(r * longitude.cos(), y, -r * longitude.sin()));
            }
        }

        let mut faces = Vec::with_capacity((rings - 1) * around + 2 * around);
        for ring in 0..rings - 1 {
            let (lo, hi) = (ring * around, (ring + 1) * around);
            for j in 0..around {
                let next = (j + 1) % around;
                faces.push(vec![lo + j, lo + next, hi + next, hi + j]);
            }
        }

        let south = vertices.len();
        vertices.push(Point3::new(0.0, -radius, 0.0));
        vertices.push(Point3::new(0.0, radius, 0.0));
        let top = (rings - 1) * around;
        for j in 0..around {
            let next = (j + 1) % around;
            faces.push(vec![j, next, south, j]);
            faces.push(vec![top + j, top + next, south + 1, top + j]);
        }

        let mut sphere = Object3D {
            vertices,
            faces,
            ..Default::default()
        };
        if let Some(c) = center.filter(|c| *c != Point3::ORIGIN) {
            sphere.translate(c.x, c.y, c.z);
        }
        sphere
    }

    /// Connects `points` in sequence with one two-vertex face per segment.
    pub fn polyline<P: Into<Point3>>(points: impl IntoIterator<Item = P>) -> Self {
        let vertices: Vec<Point3> = points.into_iter().map(Into::into).collect();
        let faces = (1..vertices.len()).map(|i| vec![i - 1, i]).collect();
        Object3D {
            vertices,
            faces,
            ..Default::default()
        }
    }

    /// The segment of the x-axis from `min` to `max`.
    pub fn x_axis(min: Real, max: Real) -> Self {
        Object3D::segment(&Line::x_axis(), min, max)
    }

    pub fn y_axis(min: Real, max: Real) -> Self {
        Object3D::segment(&Line::y_axis(), min, max)
    }

    pub fn z_axis(min: Real, max: Real) -> Self {
        Object3D::segment(&Line::z_axis(), min, max)
    }

    fn segment(line: &Line, min: Real, max: Real) -> Self {
        Object3D::polyline([line.point_at(min), line.point_at(max)])
    }
}

impl Display for Object3D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "vertices:")?;
        for v in &self.vertices {
            writeln!(f, "{}", v)?;
        }
        writeln!(f)?;
        write!(f, "faces:")?;
        for face in &self.faces {
            write!(f, "\n{:?}", face)?;
        }
        Ok(())
    }
}
