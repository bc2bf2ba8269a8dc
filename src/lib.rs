//! trisect: SIMD 3D geometry kernel for a host application
//!
//! The geometry lives in [`trisect_math`], this crate exposes it over a C ABI so it can be loaded as a native library,
//! or as a wasm module when building for `wasm32` with the `simd128` target feature.
//!
//! Vectors are allocated by the kernel and passed around as pointers, results are written to `dst` pointers.
//! Queries that can miss return `false`, or `-1` for an index.

use trisect_logging::LogCategory;

pub use trisect_math as math;
pub use trisect_simd as simd;
pub use trisect_logging as logging;

pub(crate) const LOG_CAT : LogCategory = LogCategory::new("Host");

mod settings;
pub use settings::*;

mod ffi;
pub use ffi::*;
