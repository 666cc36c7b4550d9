use crate::float_types::Real;
use crate::point::{Point2, Point3};
use crate::traits::NumericTuple;
use crate::wasm::{line_js::LineJs, plane_js::PlaneJs};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct Point2Js {
    pub(crate) inner: Point2,
}

#[wasm_bindgen]
impl Point2Js {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64) -> Point2Js {
        Point2::new(x as Real, y as Real).into()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.inner.x as f64
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.inner.y as f64
    }

    pub fn rotate(&self, theta: f64) -> Point2Js {
        self.inner.rotate(theta as Real).into()
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Point2Js {
        self.inner.translate(dx as Real, dy as Real).into()
    }

    #[wasm_bindgen(js_name = make3D)]
    pub fn make_3d(&self) -> Point3Js {
        self.inner.make_3d().into()
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.inner.to_string()
    }
}

#[wasm_bindgen]
pub struct Point3Js {
    pub(crate) inner: Point3,
}

#[wasm_bindgen]
impl Point3Js {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64, z: f64) -> Point3Js {
        Point3::new(x as Real, y as Real, z as Real).into()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.inner.x as f64
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.inner.y as f64
    }

    #[wasm_bindgen(getter)]
    pub fn z(&self) -> f64 {
        self.inner.z as f64
    }

    #[wasm_bindgen(js_name = rotateX)]
    pub fn rotate_x(&self, phi: f64) -> Point3Js {
        self.inner.rotate_x(phi as Real).into()
    }

    #[wasm_bindgen(js_name = rotateY)]
    pub fn rotate_y(&self, theta: f64) -> Point3Js {
        self.inner.rotate_y(theta as Real).into()
    }

    #[wasm_bindgen(js_name = rotateZ)]
    pub fn rotate_z(&self, psi: f64) -> Point3Js {
        self.inner.rotate_z(psi as Real).into()
    }

    /// Rotation about an axis through the origin given as `[x, y, z]`.
    pub fn rotate(&self, theta: f64, ax: f64, ay: f64, az: f64) -> Result<Point3Js, JsValue> {
        let axis = [ax as Real, ay as Real, az as Real];
        Ok(self.inner.rotate(theta as Real, axis)?.into())
    }

    pub fn translate(&self, dx: f64, dy: f64, dz: f64) -> Point3Js {
        self.inner.translate(dx as Real, dy as Real, dz as Real).into()
    }

    #[wasm_bindgen(js_name = toSpherical)]
    pub fn to_spherical(&self) -> Point3Js {
        self.inner.to_spherical().into()
    }

    #[wasm_bindgen(js_name = getLength)]
    pub fn length(&self) -> f64 {
        self.inner.length() as f64
    }

    #[wasm_bindgen(js_name = reflectionInPoint)]
    pub fn reflection_in_point(&self, center: &Point3Js) -> Point3Js {
        self.inner.reflection_in_point(&center.inner).into()
    }

    #[wasm_bindgen(js_name = reflectionInLine)]
    pub fn reflection_in_line(&self, line: &LineJs) -> Point3Js {
        self.inner.reflection_in_line(&line.inner).into()
    }

    #[wasm_bindgen(js_name = reflectionInPlane)]
    pub fn reflection_in_plane(&self, plane: &PlaneJs) -> Point3Js {
        self.inner.reflection_in_plane(&plane.inner).into()
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.inner.to_string()
    }
}

// Rust-only conversions (not visible to JS)
impl From<Point2> for Point2Js {
    fn from(p: Point2) -> Self {
        Point2Js { inner: p }
    }
}

impl From<Point3> for Point3Js {
    fn from(p: Point3) -> Self {
        Point3Js { inner: p }
    }
}

impl From<&Point3Js> for Point3 {
    fn from(p: &Point3Js) -> Self {
        p.inner
    }
}
