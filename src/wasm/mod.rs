use crate::errors::MathError;
use wasm_bindgen::prelude::*;

pub mod line_js;
pub mod matrix_js;
pub mod plane_js;
pub mod point_js;
pub mod transform_js;
pub mod vector_js;

// Optional: better panic messages in the browser console.
#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Kernel errors reach JavaScript as their display string.
impl From<MathError> for JsValue {
    fn from(e: MathError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

/// Runtime override of the comparison tolerance.
#[wasm_bindgen(js_name = setTolerance)]
pub fn set_tolerance(value: f64) {
    crate::float_types::set_tolerance(value as crate::float_types::Real);
}

#[wasm_bindgen(js_name = tolerance)]
pub fn tolerance() -> f64 {
    crate::float_types::tolerance() as f64
}
