//! 4-lane SIMD register used by the trisect geometry kernel
//!
//! Currently no runtime dynamic dispatch is supported, so the instructions sets will be decided at compile time
//!
//! This is not a generic SIMD library, it only covers what a 3D vector packed in a 4-lane float register needs:
//! - x86_64 uses SSE (SSE2 is part of the baseline), with FMA when the `fma` target feature is enabled
//! - wasm32 uses simd128 when the `simd128` target feature is enabled
//! - everything else falls back to the scalar backend
//!
//! The `force_scalar` feature forces the scalar backend on every target.

#![allow(non_camel_case_types)]

mod backend;
mod simd;

pub use backend::*;
pub use simd::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "force_scalar")] {
        /// Backend used by the operators and methods of [`f32x4`]
        pub type DefBackend = Scalar;
    } else if #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))] {
        /// Backend used by the operators and methods of [`f32x4`]
        pub type DefBackend = Sse;
    } else if #[cfg(all(target_arch = "wasm32", target_feature = "simd128"))] {
        /// Backend used by the operators and methods of [`f32x4`]
        pub type DefBackend = Simd128;
    } else {
        /// Backend used by the operators and methods of [`f32x4`]
        pub type DefBackend = Scalar;
    }
}

pub const DEF_BACKEND_TYPE : BackendType = <DefBackend as Backend>::TYPE;

/// Check if an intrinsic can be used on the current machine
///
/// #Note
///
/// Currently, no dynamic detection has been implemented, so values returned depend on the machine the binary was compiled for
pub fn has_intrin(intrin: BackendType) -> bool {
    match intrin {
        BackendType::Scalar  => true,
        BackendType::SSE     => cfg!(all(target_arch = "x86_64", target_feature = "sse2")),
        BackendType::Simd128 => cfg!(all(target_arch = "wasm32", target_feature = "simd128")),
    }
}
