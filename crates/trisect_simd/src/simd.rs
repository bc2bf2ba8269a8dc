use core::ops::{Add, Sub, Mul, Neg, AddAssign, SubAssign, MulAssign};

use crate::{
    backend::*,
    DefBackend,
};

/// 4-lane `f32` register
///
/// The register is 16-byte aligned, so it can be reinterpreted as the native register type of each backend.
///
/// Performance (in cycles, numbers represent estimated latency, not including throughput, and are therefore not 100% accurate and are meant as a guide)
///
/// | op            | scalar | SSE     | simd128 |
/// |---------------|--------|---------|---------|
/// | add/sub/mul   |   S    | 4       | S       |
/// | mul_add       |   S    | 4 (FMA) | S       |
/// | reduce_sum    |   S    | ~10     | S       |
///
/// S : Scalar (Unknown latency, as this partially depends on the compiler or runtime)
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[repr(C, align(16))]
pub struct f32x4([f32; 4]);

impl f32x4 {
    /// Number of lanes in this register
    pub const LANES : usize = 4;

    /// Construct a SIMD register by setting all lanes to 0
    #[must_use]
    #[inline]
    pub fn zero() -> Self {
        <Self as SimdSetImpl<DefBackend>>::simd_zero_impl()
    }

    /// Construct a SIMD register by setting all lanes to the given value
    #[must_use]
    #[inline]
    pub fn splat(val: f32) -> Self {
        <Self as SimdSetImpl<DefBackend>>::simd_splat_impl(val)
    }

    /// Construct a SIMD register from its lanes
    #[must_use]
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        <Self as SimdSetImpl<DefBackend>>::simd_set_impl(x, y, z, w)
    }

    /// Converts an array to a SIMD register
    #[must_use]
    #[inline(always)]
    pub const fn from_array(array: [f32; 4]) -> Self {
        Self(array)
    }

    /// Converts a SIMD register to an array
    #[must_use]
    #[inline(always)]
    pub const fn to_array(self) -> [f32; 4] {
        self.0
    }

    /// Returns an array reference containing the entire SIMD register
    #[inline(always)]
    pub const fn as_array(&self) -> &[f32; 4] {
        &self.0
    }

    /// Returns a mutable array reference containing the entire SIMD register
    #[inline(always)]
    pub fn as_mut_array(&mut self) -> &mut [f32; 4] {
        &mut self.0
    }

    /// Load a SIMD register from memory
    #[must_use]
    #[inline]
    pub fn load(mem: &[f32; 4]) -> Self {
        Self(*mem)
    }

    /// Store the content from a SIMD register to memory
    #[inline]
    pub fn store(self, mem: &mut [f32; 4]) {
        *mem = self.0;
    }

    /// Get the value of a single lane
    ///
    /// #Panics
    /// Panics if `idx >= 4`
    #[must_use]
    #[inline(always)]
    pub fn lane(self, idx: usize) -> f32 {
        self.0[idx]
    }

    /// Calculate `self * a + b`, with a single rounding when the backend supports fused multiply-add
    #[must_use]
    #[inline]
    pub fn mul_add(self, a: Self, b: Self) -> Self {
        <Self as SimdArithImpl<DefBackend>>::simd_mul_add_impl(self, a, b)
    }

    /// Swap the lower and upper 2 lanes, i.e. `(z, w, x, y)`
    #[must_use]
    #[inline]
    pub fn swap_halves(self) -> Self {
        <Self as SimdLaneImpl<DefBackend>>::simd_swap_halves_impl(self)
    }

    /// Set the 4th lane to 0
    #[must_use]
    #[inline]
    pub fn clear_w(self) -> Self {
        <Self as SimdLaneImpl<DefBackend>>::simd_clear_w_impl(self)
    }

    /// Sum all lanes of the register, summed as `(x + z) + (y + w)`
    #[must_use]
    #[inline]
    pub fn reduce_sum(self) -> f32 {
        <Self as SimdHorizontalImpl<DefBackend>>::simd_reduce_sum_impl(self)
    }

    /// Sum of the lane-wise products of 2 registers
    #[must_use]
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        <Self as SimdHorizontalImpl<DefBackend>>::simd_dot_impl(self, other)
    }
}

impl From<[f32; 4]> for f32x4 {
    fn from(array: [f32; 4]) -> Self {
        Self::from_array(array)
    }
}

impl From<f32x4> for [f32; 4] {
    fn from(val: f32x4) -> Self {
        val.to_array()
    }
}

macro_rules! impl_op {
    ($trait:ident, $func:ident, $assign_trait:ident, $assign_func:ident, $impl_func:ident) => {
        impl $trait for f32x4 {
            type Output = Self;

            #[inline]
            fn $func(self, rhs: Self) -> Self {
                <Self as SimdArithImpl<DefBackend>>::$impl_func(self, rhs)
            }
        }

        impl $trait<f32> for f32x4 {
            type Output = Self;

            #[inline]
            fn $func(self, rhs: f32) -> Self {
                <Self as SimdArithImpl<DefBackend>>::$impl_func(self, Self::splat(rhs))
            }
        }

        impl $assign_trait for f32x4 {
            #[inline]
            fn $assign_func(&mut self, rhs: Self) {
                *self = <Self as SimdArithImpl<DefBackend>>::$impl_func(*self, rhs);
            }
        }
    };
}
impl_op!(Add, add, AddAssign, add_assign, simd_add_impl);
impl_op!(Sub, sub, SubAssign, sub_assign, simd_sub_impl);
impl_op!(Mul, mul, MulAssign, mul_assign, simd_mul_impl);

impl Neg for f32x4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        <Self as SimdArithImpl<DefBackend>>::simd_neg_impl(self)
    }
}
