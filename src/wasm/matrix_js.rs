use crate::float_types::Real;
use crate::matrix::Matrix;
use crate::wasm::vector_js::VectorJs;
use js_sys::Float64Array;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct MatrixJs {
    pub(crate) inner: Matrix,
}

#[wasm_bindgen]
impl MatrixJs {
    /// Builds a matrix from a nested JS array of rows.
    #[wasm_bindgen(constructor)]
    pub fn new(rows: JsValue) -> Result<MatrixJs, JsValue> {
        let rows: Vec<Vec<f64>> = from_value(rows)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse rows: {:?}", e)))?;
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|x| x as Real).collect())
            .collect();
        Ok(Matrix::from_rows(rows)?.into())
    }

    #[wasm_bindgen(js_name = identity)]
    pub fn identity(n: usize) -> MatrixJs {
        Matrix::identity(n).into()
    }

    #[wasm_bindgen(js_name = zero)]
    pub fn zero(rows: usize, cols: usize) -> MatrixJs {
        Matrix::zero(rows, cols).into()
    }

    #[wasm_bindgen(js_name = random)]
    pub fn random(rows: usize, cols: usize, max: Option<u32>) -> MatrixJs {
        Matrix::random(rows, cols, max).into()
    }

    #[wasm_bindgen(getter, js_name = numRows)]
    pub fn num_rows(&self) -> usize {
        self.inner.num_rows()
    }

    #[wasm_bindgen(getter, js_name = numCols)]
    pub fn num_cols(&self) -> usize {
        self.inner.num_cols()
    }

    /// 1-indexed element access.
    pub fn get(&self, i: usize, j: usize) -> Result<f64, JsValue> {
        Ok(self.inner.get(i, j)? as f64)
    }

    #[wasm_bindgen(js_name = setElement)]
    pub fn set_element(&mut self, i: usize, j: usize, value: f64) -> Result<(), JsValue> {
        self.inner.set_element(i, j, value as Real)?;
        Ok(())
    }

    pub fn add(&self, other: &MatrixJs) -> Result<MatrixJs, JsValue> {
        Ok(self.inner.add(&other.inner)?.into())
    }

    pub fn subtract(&self, other: &MatrixJs) -> Result<MatrixJs, JsValue> {
        Ok(self.inner.subtract(&other.inner)?.into())
    }

    #[wasm_bindgen(js_name = multiplyBy)]
    pub fn multiply_by(&self, k: f64) -> MatrixJs {
        self.inner.multiply_by(k as Real).into()
    }

    pub fn multiply(&self, other: &MatrixJs) -> Result<MatrixJs, JsValue> {
        Ok(self.inner.multiply(&other.inner)?.into())
    }

    #[wasm_bindgen(js_name = multiplyVector)]
    pub fn multiply_vector(&self, v: &VectorJs) -> Result<VectorJs, JsValue> {
        Ok(self.inner.multiply_vector(&v.inner)?.into())
    }

    pub fn transpose(&self) -> MatrixJs {
        self.inner.transpose().into()
    }

    pub fn trace(&self) -> Result<f64, JsValue> {
        Ok(self.inner.trace()? as f64)
    }

    pub fn minor(&self, row: usize, col: usize, rows: usize, cols: usize) -> Result<MatrixJs, JsValue> {
        Ok(self.inner.minor(row, col, rows, cols)?.into())
    }

    pub fn augment(&self, other: &MatrixJs) -> MatrixJs {
        self.inner.augment(&other.inner).into()
    }

    #[wasm_bindgen(js_name = toUpperTriangular)]
    pub fn to_upper_triangular(&self) -> MatrixJs {
        self.inner.to_upper_triangular().into()
    }

    pub fn determinant(&self) -> Result<f64, JsValue> {
        Ok(self.inner.determinant()? as f64)
    }

    #[wasm_bindgen(js_name = isSingular)]
    pub fn is_singular(&self) -> bool {
        self.inner.is_singular()
    }

    pub fn invertible(&self) -> bool {
        self.inner.invertible()
    }

    pub fn invert(&self) -> Result<MatrixJs, JsValue> {
        Ok(self.inner.invert()?.into())
    }

    pub fn rank(&self) -> usize {
        self.inner.rank()
    }

    #[wasm_bindgen(js_name = snapTo)]
    pub fn snap_to(&self, value: f64) -> MatrixJs {
        self.inner.snap_to(value as Real).into()
    }

    #[wasm_bindgen(js_name = equalTo)]
    pub fn equal_to(&self, other: &MatrixJs) -> bool {
        self.inner.equal_to(&other.inner)
    }

    /// Nested array of rows.
    #[wasm_bindgen(js_name = toArray)]
    pub fn to_array(&self) -> Result<JsValue, JsValue> {
        let rows: Vec<Vec<f64>> = self
            .inner
            .as_dmatrix()
            .row_iter()
            .map(|row| row.iter().map(|x| *x as f64).collect())
            .collect();
        to_value(&rows).map_err(|e| JsValue::from_str(&format!("Failed to export rows: {:?}", e)))
    }

    /// Row-major elements in one typed array, for handing to WebGL and friends.
    #[wasm_bindgen(js_name = toFloat64Array)]
    pub fn to_float64_array(&self) -> Float64Array {
        let elements: Vec<f64> = self
            .inner
            .as_dmatrix()
            .row_iter()
            .flat_map(|row| row.iter().map(|x| *x as f64).collect::<Vec<_>>())
            .collect();
        Float64Array::from(elements.as_slice())
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.inner.to_string()
    }
}

impl From<Matrix> for MatrixJs {
    fn from(m: Matrix) -> Self {
        MatrixJs { inner: m }
    }
}
