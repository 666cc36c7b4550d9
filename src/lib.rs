//! A small **linear algebra and affine transformation** kernel with 2D/3D
//! geometric primitives built on top of it.
//!
//! All public indexing is **1-based** (`v.get(1)` is the first component,
//! `m.get(1, 1)` the top-left element). Every equality, zero and singularity
//! test goes through one process-wide tolerance, see [`float_types::tolerance`].
//!
//! ```text
//! let mut t = AffineTransform::new_2d();
//! t.translate_2d(1.0, 0.0).rotate_2d(PI / 2.0);
//! assert!(t.apply_to(&Point2::new(1.0, 0.0))?.approx_eq(&Point2::new(0.0, 2.0)));
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **wasm**: `wasm-bindgen` wrappers for JavaScript callers
//! - **console_error_panic_hook**: readable panics in the browser console

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod group;
pub mod line;
pub mod matrix;
pub mod object3d;
pub mod plane;
pub mod point;
pub mod set;
pub mod traits;
pub mod transform;
pub mod vector;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::MathError;
pub use group::Group;
pub use line::Line;
pub use matrix::Matrix;
pub use object3d::Object3D;
pub use plane::Plane;
pub use point::{Point2, Point3};
pub use set::Set;
pub use transform::{AffineTransform, Axis};
pub use vector::Vector;

/// Value types and traits in one import.
pub mod prelude {
    pub use crate::errors::MathError;
    pub use crate::float_types::{PI, Real, Tolerance, tolerance};
    pub use crate::group::Group;
    pub use crate::line::Line;
    pub use crate::matrix::Matrix;
    pub use crate::object3d::Object3D;
    pub use crate::plane::Plane;
    pub use crate::point::{Point2, Point3};
    pub use crate::set::Set;
    pub use crate::traits::{Homogeneous, NumericTuple};
    pub use crate::transform::{AffineTransform, Axis};
    pub use crate::vector::Vector;
}
