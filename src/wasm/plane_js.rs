use crate::float_types::Real;
use crate::plane::Plane;
use crate::point::Point3;
use crate::wasm::{line_js::LineJs, point_js::Point3Js};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct PlaneJs {
    pub(crate) inner: Plane,
}

#[wasm_bindgen]
impl PlaneJs {
    // Constructor: base point and normal
    #[wasm_bindgen(constructor)]
    pub fn new(base: &Point3Js, normal: &Point3Js) -> Result<PlaneJs, JsValue> {
        Ok(Plane::new(Point3::from(base), Point3::from(normal))?.into())
    }

    // Constructor: base point and two spanning vectors
    #[wasm_bindgen(js_name = fromVectors)]
    pub fn from_vectors(base: &Point3Js, v1: &Point3Js, v2: &Point3Js) -> Result<PlaneJs, JsValue> {
        Ok(Plane::from_vectors(Point3::from(base), Point3::from(v1), Point3::from(v2))?.into())
    }

    #[wasm_bindgen(js_name = XY)]
    pub fn xy() -> PlaneJs {
        Plane::xy().into()
    }

    #[wasm_bindgen(js_name = YZ)]
    pub fn yz() -> PlaneJs {
        Plane::yz().into()
    }

    #[wasm_bindgen(js_name = ZX)]
    pub fn zx() -> PlaneJs {
        Plane::zx().into()
    }

    #[wasm_bindgen(getter)]
    pub fn base(&self) -> Point3Js {
        self.inner.base().into()
    }

    #[wasm_bindgen(getter)]
    pub fn normal(&self) -> Point3Js {
        self.inner.normal().into()
    }

    #[wasm_bindgen(js_name = equalTo)]
    pub fn equal_to(&self, other: &PlaneJs) -> bool {
        self.inner.equal_to(&other.inner)
    }

    #[wasm_bindgen(js_name = isPerpendicular)]
    pub fn is_perpendicular(&self, other: &PlaneJs) -> bool {
        self.inner.is_perpendicular(&other.inner)
    }

    #[wasm_bindgen(js_name = distanceFromPoint)]
    pub fn distance_from_point(&self, point: &Point3Js) -> f64 {
        self.inner.distance_from_point(&point.inner) as f64
    }

    #[wasm_bindgen(js_name = containsPoint)]
    pub fn contains_point(&self, point: &Point3Js) -> bool {
        self.inner.contains_point(&point.inner)
    }

    #[wasm_bindgen(js_name = containsLine)]
    pub fn contains_line(&self, line: &LineJs) -> bool {
        self.inner.contains_line(&line.inner)
    }

    #[wasm_bindgen(js_name = intersectionWithLine)]
    pub fn intersection_with_line(&self, line: &LineJs) -> Result<Point3Js, JsValue> {
        Ok(self.inner.intersection_with_line(&line.inner)?.into())
    }

    #[wasm_bindgen(js_name = intersectionWithPlane)]
    pub fn intersection_with_plane(&self, other: &PlaneJs) -> Result<LineJs, JsValue> {
        Ok(self.inner.intersection_with_plane(&other.inner)?.into())
    }

    #[wasm_bindgen(js_name = pointClosestTo)]
    pub fn point_closest_to(&self, point: &Point3Js) -> Point3Js {
        self.inner.point_closest_to(&point.inner).into()
    }

    pub fn translate(&self, dx: f64, dy: f64, dz: f64) -> PlaneJs {
        self.inner.translate(dx as Real, dy as Real, dz as Real).into()
    }

    pub fn rotate(&self, theta: f64, axis: &LineJs) -> Result<PlaneJs, JsValue> {
        Ok(self.inner.rotate(theta as Real, &axis.inner)?.into())
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.inner.to_string()
    }
}

impl From<Plane> for PlaneJs {
    fn from(plane: Plane) -> Self {
        PlaneJs { inner: plane }
    }
}
