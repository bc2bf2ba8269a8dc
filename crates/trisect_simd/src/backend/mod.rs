use crate::f32x4;

mod scalar;
pub use scalar::*;

#[cfg(target_arch = "x86_64")]
mod sse;
#[cfg(target_arch = "x86_64")]
pub use sse::*;

#[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
mod simd128;
#[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
pub use simd128::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BackendType {
    Scalar,

    // x86-64
    SSE,

    // wasm32
    Simd128,
}

/// Marker type for an instruction set the register operations can be implemented with
pub trait Backend {
    const TYPE : BackendType;
}

pub trait SimdSetImpl<B: Backend> {
    /// Set all elements to 0
    fn simd_zero_impl() -> Self;

    /// Set all elements of the register to `val`
    fn simd_splat_impl(val: f32) -> Self;

    /// Set each element of the register, in lane order
    fn simd_set_impl(x: f32, y: f32, z: f32, w: f32) -> Self;
}

pub trait SimdArithImpl<B: Backend> {
    /// Per element add
    fn simd_add_impl(self, other: Self) -> Self;

    /// Per element subtract
    fn simd_sub_impl(self, other: Self) -> Self;

    /// Per element multiplication
    fn simd_mul_impl(self, other: Self) -> Self;

    /// Per element negate
    fn simd_neg_impl(self) -> Self;

    /// Per element `self * a + b`, with a single rounding when the backend supports fused multiply-add
    fn simd_mul_add_impl(self, a: Self, b: Self) -> Self;
}

pub trait SimdLaneImpl<B: Backend> {
    /// Swap the lower and upper 2 lanes, i.e. `(z, w, x, y)`
    fn simd_swap_halves_impl(self) -> Self;

    /// Set the 4th lane to 0, leaving the other lanes untouched
    fn simd_clear_w_impl(self) -> Self;
}

// NOTE: All backends sum as `(x + z) + (y + w)`, so horizontal results are identical between backends
pub trait SimdHorizontalImpl<B: Backend> : SimdArithImpl<B> + SimdLaneImpl<B> + Sized {
    /// Sum all elements in the register
    fn simd_reduce_sum_impl(self) -> f32;

    /// Sum of the per element products of 2 registers
    fn simd_dot_impl(self, other: Self) -> f32 {
        self.simd_mul_impl(other).simd_reduce_sum_impl()
    }
}

/// Implements the conversion between a `f32x4` and a native register type
macro_rules! from_transmute {
    { unsafe $from:ty => $to:ty } => {
        impl From<$from> for $to {
            #[inline(always)]
            fn from(value: $from) -> $to {
                unsafe { core::mem::transmute(value) }
            }
        }

        impl From<$to> for $from {
            #[inline(always)]
            fn from(value: $to) -> $from {
                unsafe { core::mem::transmute(value) }
            }
        }
    };
}
pub(crate) use from_transmute;

static_assertions::assert_eq_size!(f32x4, [f32; 4]);
static_assertions::const_assert_eq!(core::mem::align_of::<f32x4>(), 16);
