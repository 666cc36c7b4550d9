use crate::float_types::Real;
use crate::traits::NumericTuple;
use crate::vector::Vector;
use js_sys::Float64Array;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct VectorJs {
    pub(crate) inner: Vector,
}

#[wasm_bindgen]
impl VectorJs {
    #[wasm_bindgen(constructor)]
    pub fn new(components: Vec<f64>) -> VectorJs {
        VectorJs {
            inner: Vector::new(components.into_iter().map(|x| x as Real).collect()),
        }
    }

    #[wasm_bindgen(js_name = zeros)]
    pub fn zeros(n: usize) -> VectorJs {
        Vector::zeros(n).into()
    }

    #[wasm_bindgen(getter)]
    pub fn dimension(&self) -> usize {
        self.inner.dimension()
    }

    /// 1-indexed component access.
    pub fn get(&self, i: usize) -> Result<f64, JsValue> {
        Ok(self.inner.get(i)? as f64)
    }

    pub fn add(&self, other: &VectorJs) -> Result<VectorJs, JsValue> {
        Ok(self.inner.add(&other.inner)?.into())
    }

    pub fn subtract(&self, other: &VectorJs) -> Result<VectorJs, JsValue> {
        Ok(self.inner.subtract(&other.inner)?.into())
    }

    #[wasm_bindgen(js_name = multiplyBy)]
    pub fn multiply_by(&self, k: f64) -> VectorJs {
        self.inner.multiply_by(k as Real).into()
    }

    pub fn dot(&self, other: &VectorJs) -> Result<f64, JsValue> {
        Ok(self.inner.dot(&other.inner)? as f64)
    }

    pub fn cross(&self, other: &VectorJs) -> Result<VectorJs, JsValue> {
        Ok(self.inner.cross(&other.inner)?.into())
    }

    #[wasm_bindgen(js_name = getLength)]
    pub fn length(&self) -> f64 {
        self.inner.length() as f64
    }

    pub fn normalize(&self) -> Result<VectorJs, JsValue> {
        Ok(self.inner.normalize()?.into())
    }

    #[wasm_bindgen(js_name = angleBetween)]
    pub fn angle_between(&self, other: &VectorJs) -> Result<f64, JsValue> {
        Ok(self.inner.angle_between(&other.inner)? as f64)
    }

    #[wasm_bindgen(js_name = equalTo)]
    pub fn equal_to(&self, other: &VectorJs) -> bool {
        self.inner.approx_eq(&other.inner)
    }

    #[wasm_bindgen(js_name = isParallel)]
    pub fn is_parallel(&self, other: &VectorJs) -> bool {
        self.inner.is_parallel(&other.inner)
    }

    #[wasm_bindgen(js_name = isPerpendicular)]
    pub fn is_perpendicular(&self, other: &VectorJs) -> bool {
        self.inner.is_perpendicular(&other.inner)
    }

    #[wasm_bindgen(js_name = toArray)]
    pub fn to_array(&self) -> Float64Array {
        let components: Vec<f64> = self.inner.as_slice().iter().map(|x| *x as f64).collect();
        Float64Array::from(components.as_slice())
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.inner.to_string()
    }
}

// Rust-only conversions
impl From<Vector> for VectorJs {
    fn from(v: Vector) -> Self {
        VectorJs { inner: v }
    }
}

impl From<&VectorJs> for Vector {
    fn from(v: &VectorJs) -> Self {
        v.inner.clone()
    }
}
