use crate::float_types::Real;
use crate::errors::MathError;
use crate::transform::{AffineTransform, Axis};
use crate::wasm::{
    matrix_js::MatrixJs,
    point_js::{Point2Js, Point3Js},
};
use wasm_bindgen::prelude::*;

/// Chainable in Rust; from JS each builder mutates in place.
#[wasm_bindgen]
pub struct AffineTransformJs {
    pub(crate) inner: AffineTransform,
}

#[wasm_bindgen]
impl AffineTransformJs {
    #[wasm_bindgen(constructor)]
    pub fn new(dim: usize) -> Result<AffineTransformJs, JsValue> {
        Ok(AffineTransformJs {
            inner: AffineTransform::new(dim)?,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn dimension(&self) -> usize {
        self.inner.dimension()
    }

    #[wasm_bindgen(getter)]
    pub fn matrix(&self) -> MatrixJs {
        self.inner.matrix().clone().into()
    }

    #[wasm_bindgen(js_name = translate2D)]
    pub fn translate_2d(&mut self, dx: f64, dy: f64) {
        self.inner.translate_2d(dx as Real, dy as Real);
    }

    #[wasm_bindgen(js_name = translate3D)]
    pub fn translate_3d(&mut self, dx: f64, dy: f64, dz: f64) {
        self.inner.translate_3d(dx as Real, dy as Real, dz as Real);
    }

    #[wasm_bindgen(js_name = rotate2D)]
    pub fn rotate_2d(&mut self, theta: f64) {
        self.inner.rotate_2d(theta as Real);
    }

    #[wasm_bindgen(js_name = rotationX)]
    pub fn rotation_x(&mut self, phi: f64) {
        self.inner.rotation_x(phi as Real);
    }

    #[wasm_bindgen(js_name = rotationY)]
    pub fn rotation_y(&mut self, theta: f64) {
        self.inner.rotation_y(theta as Real);
    }

    #[wasm_bindgen(js_name = rotationZ)]
    pub fn rotation_z(&mut self, psi: f64) {
        self.inner.rotation_z(psi as Real);
    }

    /// Rotation about `axis` (`[x, y, z]`); an empty axis rotates in 2D.
    pub fn rotation(&mut self, theta: f64, axis: Vec<f64>) -> Result<(), JsValue> {
        let axis: Option<Axis> = match axis.as_slice() {
            [] => None,
            [x, y, z] => Some([*x as Real, *y as Real, *z as Real].into()),
            other => return Err(MathError::UnsupportedDimension(other.len()).into()),
        };
        self.inner.rotation(theta as Real, axis)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = newCoordinates)]
    pub fn new_coordinates(&mut self, theta: f64, phi: f64) {
        self.inner.new_coordinates(theta as Real, phi as Real);
    }

    #[wasm_bindgen(js_name = applyTo2D)]
    pub fn apply_to_2d(&self, p: &Point2Js) -> Result<Point2Js, JsValue> {
        Ok(self.inner.apply_to(&p.inner)?.into())
    }

    #[wasm_bindgen(js_name = applyTo3D)]
    pub fn apply_to_3d(&self, p: &Point3Js) -> Result<Point3Js, JsValue> {
        Ok(self.inner.apply_to(&p.inner)?.into())
    }

    pub fn invertible(&self) -> bool {
        self.inner.invertible()
    }

    pub fn invert(&self) -> Result<AffineTransformJs, JsValue> {
        Ok(AffineTransformJs {
            inner: self.inner.invert()?,
        })
    }

    pub fn dup(&self) -> AffineTransformJs {
        AffineTransformJs {
            inner: self.inner.dup(),
        }
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.inner.to_string()
    }
}
