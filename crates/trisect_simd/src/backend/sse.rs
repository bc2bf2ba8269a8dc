use core::arch::x86_64::*;

use super::*;

/// SSE, SSE2 is part of the x86_64 baseline, so this is always available on x86_64
pub struct Sse;

impl Backend for Sse {
    const TYPE : BackendType = BackendType::SSE;
}

from_transmute!{ unsafe f32x4 => __m128 }

impl SimdSetImpl<Sse> for f32x4 {
    fn simd_zero_impl() -> Self {
        unsafe{ _mm_setzero_ps().into() }
    }

    fn simd_splat_impl(val: f32) -> Self {
        unsafe{ _mm_set1_ps(val).into() }
    }

    fn simd_set_impl(x: f32, y: f32, z: f32, w: f32) -> Self {
        unsafe{ _mm_setr_ps(x, y, z, w).into() }
    }
}

impl SimdArithImpl<Sse> for f32x4 {
    fn simd_add_impl(self, other: Self) -> Self {
        unsafe{ _mm_add_ps(self.into(), other.into()).into() }
    }

    fn simd_sub_impl(self, other: Self) -> Self {
        unsafe{ _mm_sub_ps(self.into(), other.into()).into() }
    }

    fn simd_mul_impl(self, other: Self) -> Self {
        unsafe{ _mm_mul_ps(self.into(), other.into()).into() }
    }

    fn simd_neg_impl(self) -> Self {
        // Flip the sign bit
        unsafe{ _mm_xor_ps(self.into(), _mm_set1_ps(-0.0)).into() }
    }

    fn simd_mul_add_impl(self, a: Self, b: Self) -> Self {
        cfg_if::cfg_if!{
            if #[cfg(target_feature = "fma")] {
                unsafe{ _mm_fmadd_ps(self.into(), a.into(), b.into()).into() }
            } else {
                unsafe{ _mm_add_ps(_mm_mul_ps(self.into(), a.into()), b.into()).into() }
            }
        }
    }
}

impl SimdLaneImpl<Sse> for f32x4 {
    fn simd_swap_halves_impl(self) -> Self {
        unsafe {
            let val : __m128 = self.into();
            _mm_shuffle_ps::<0b01_00_11_10>(val, val).into()
        }
    }

    fn simd_clear_w_impl(self) -> Self {
        unsafe {
            let mask = _mm_castsi128_ps(_mm_setr_epi32(-1, -1, -1, 0));
            _mm_and_ps(self.into(), mask).into()
        }
    }
}

impl SimdHorizontalImpl<Sse> for f32x4 {
    fn simd_reduce_sum_impl(self) -> f32 {
        unsafe {
            let val : __m128 = self.into();
            // (x + z, y + w, z + z, w + w)
            let sums = _mm_add_ps(val, _mm_movehl_ps(val, val));
            let high = _mm_shuffle_ps::<0b00_00_00_01>(sums, sums);
            _mm_cvtss_f32(_mm_add_ss(sums, high))
        }
    }
}
