use core::arch::wasm32 as arch;
use core::arch::wasm32::v128;

use super::*;

/// WebAssembly 128-bit packed SIMD
pub struct Simd128;

impl Backend for Simd128 {
    const TYPE : BackendType = BackendType::Simd128;
}

from_transmute!{ unsafe f32x4 => v128 }

impl SimdSetImpl<Simd128> for f32x4 {
    fn simd_zero_impl() -> Self {
        arch::f32x4_splat(0.0).into()
    }

    fn simd_splat_impl(val: f32) -> Self {
        arch::f32x4_splat(val).into()
    }

    fn simd_set_impl(x: f32, y: f32, z: f32, w: f32) -> Self {
        arch::f32x4(x, y, z, w).into()
    }
}

impl SimdArithImpl<Simd128> for f32x4 {
    fn simd_add_impl(self, other: Self) -> Self {
        arch::f32x4_add(self.into(), other.into()).into()
    }

    fn simd_sub_impl(self, other: Self) -> Self {
        arch::f32x4_sub(self.into(), other.into()).into()
    }

    fn simd_mul_impl(self, other: Self) -> Self {
        arch::f32x4_mul(self.into(), other.into()).into()
    }

    fn simd_neg_impl(self) -> Self {
        arch::f32x4_neg(self.into()).into()
    }

    // NOTE: simd128 has no fused multiply-add, relaxed-simd does, but only with a non-deterministic rounding
    fn simd_mul_add_impl(self, a: Self, b: Self) -> Self {
        arch::f32x4_add(arch::f32x4_mul(self.into(), a.into()), b.into()).into()
    }
}

impl SimdLaneImpl<Simd128> for f32x4 {
    fn simd_swap_halves_impl(self) -> Self {
        let val : v128 = self.into();
        arch::i32x4_shuffle::<2, 3, 0, 1>(val, val).into()
    }

    fn simd_clear_w_impl(self) -> Self {
        arch::v128_and(self.into(), arch::u32x4(!0, !0, !0, 0)).into()
    }
}

impl SimdHorizontalImpl<Simd128> for f32x4 {
    fn simd_reduce_sum_impl(self) -> f32 {
        let val : v128 = self.into();
        let sums = arch::f32x4_add(val, arch::i32x4_shuffle::<2, 3, 0, 1>(val, val));
        arch::f32x4_extract_lane::<0>(sums) + arch::f32x4_extract_lane::<1>(sums)
    }
}
