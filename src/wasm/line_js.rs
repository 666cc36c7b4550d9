use crate::float_types::Real;
use crate::line::Line;
use crate::point::Point3;
use crate::wasm::{plane_js::PlaneJs, point_js::Point3Js};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct LineJs {
    pub(crate) inner: Line,
}

#[wasm_bindgen]
impl LineJs {
    #[wasm_bindgen(constructor)]
    pub fn new(base: &Point3Js, direction: &Point3Js) -> Result<LineJs, JsValue> {
        Ok(Line::new(Point3::from(base), Point3::from(direction))?.into())
    }

    #[wasm_bindgen(js_name = xAxis)]
    pub fn x_axis() -> LineJs {
        Line::x_axis().into()
    }

    #[wasm_bindgen(js_name = yAxis)]
    pub fn y_axis() -> LineJs {
        Line::y_axis().into()
    }

    #[wasm_bindgen(js_name = zAxis)]
    pub fn z_axis() -> LineJs {
        Line::z_axis().into()
    }

    #[wasm_bindgen(getter)]
    pub fn base(&self) -> Point3Js {
        self.inner.base().into()
    }

    #[wasm_bindgen(getter)]
    pub fn direction(&self) -> Point3Js {
        self.inner.direction().into()
    }

    #[wasm_bindgen(js_name = equalTo)]
    pub fn equal_to(&self, other: &LineJs) -> bool {
        self.inner.equal_to(&other.inner)
    }

    pub fn contains(&self, point: &Point3Js) -> bool {
        self.inner.contains(&point.inner)
    }

    #[wasm_bindgen(js_name = isParallel)]
    pub fn is_parallel(&self, other: &LineJs) -> bool {
        self.inner.is_parallel(&other.inner)
    }

    #[wasm_bindgen(js_name = distanceFromPoint)]
    pub fn distance_from_point(&self, point: &Point3Js) -> f64 {
        self.inner.distance_from_point(&point.inner) as f64
    }

    #[wasm_bindgen(js_name = distanceFromLine)]
    pub fn distance_from_line(&self, other: &LineJs) -> f64 {
        self.inner.distance_from_line(&other.inner) as f64
    }

    #[wasm_bindgen(js_name = pointAt)]
    pub fn point_at(&self, t: f64) -> Point3Js {
        self.inner.point_at(t as Real).into()
    }

    #[wasm_bindgen(js_name = pointClosestToPoint)]
    pub fn point_closest_to_point(&self, point: &Point3Js) -> Point3Js {
        self.inner.point_closest_to_point(&point.inner).into()
    }

    #[wasm_bindgen(js_name = pointClosestToLine)]
    pub fn point_closest_to_line(&self, other: &LineJs) -> Result<Point3Js, JsValue> {
        Ok(self.inner.point_closest_to_line(&other.inner)?.into())
    }

    #[wasm_bindgen(js_name = intersectionWithLine)]
    pub fn intersection_with_line(&self, other: &LineJs) -> Result<Point3Js, JsValue> {
        Ok(self.inner.intersection_with_line(&other.inner)?.into())
    }

    #[wasm_bindgen(js_name = intersectionWithPlane)]
    pub fn intersection_with_plane(&self, plane: &PlaneJs) -> Result<Point3Js, JsValue> {
        Ok(self.inner.intersection_with_plane(&plane.inner)?.into())
    }

    pub fn translate(&self, dx: f64, dy: f64, dz: f64) -> LineJs {
        self.inner.translate(dx as Real, dy as Real, dz as Real).into()
    }

    pub fn rotate(&self, theta: f64, axis: &LineJs) -> Result<LineJs, JsValue> {
        Ok(self.inner.rotate(theta as Real, &axis.inner)?.into())
    }

    #[wasm_bindgen(js_name = reflectionInPlane)]
    pub fn reflection_in_plane(&self, plane: &PlaneJs) -> LineJs {
        self.inner.reflection_in_plane(&plane.inner).into()
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.inner.to_string()
    }
}

impl From<Line> for LineJs {
    fn from(line: Line) -> Self {
        LineJs { inner: line }
    }
}
