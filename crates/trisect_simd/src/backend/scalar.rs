use super::*;

/// Plain `f32` math, available on every target
pub struct Scalar;

impl Backend for Scalar {
    const TYPE : BackendType = BackendType::Scalar;
}

impl SimdSetImpl<Scalar> for f32x4 {
    fn simd_zero_impl() -> Self {
        f32x4::from_array([0.0; 4])
    }

    fn simd_splat_impl(val: f32) -> Self {
        f32x4::from_array([val; 4])
    }

    fn simd_set_impl(x: f32, y: f32, z: f32, w: f32) -> Self {
        f32x4::from_array([x, y, z, w])
    }
}

macro_rules! impl_lanewise {
    ($a:expr, $b:expr, |$x:ident, $y:ident| $op:expr) => {{
        let a = $a.to_array();
        let b = $b.to_array();
        let mut res = [0f32; 4];
        for i in 0..4 {
            let ($x, $y) = (a[i], b[i]);
            res[i] = $op;
        }
        f32x4::from_array(res)
    }};
}

impl SimdArithImpl<Scalar> for f32x4 {
    fn simd_add_impl(self, other: Self) -> Self {
        impl_lanewise!(self, other, |a, b| a + b)
    }

    fn simd_sub_impl(self, other: Self) -> Self {
        impl_lanewise!(self, other, |a, b| a - b)
    }

    fn simd_mul_impl(self, other: Self) -> Self {
        impl_lanewise!(self, other, |a, b| a * b)
    }

    fn simd_neg_impl(self) -> Self {
        f32x4::from_array(self.to_array().map(|val| -val))
    }

    fn simd_mul_add_impl(self, a: Self, b: Self) -> Self {
        let lhs = self.to_array();
        let a = a.to_array();
        let b = b.to_array();
        let mut res = [0f32; 4];
        for i in 0..4 {
            res[i] = lhs[i].mul_add(a[i], b[i]);
        }
        f32x4::from_array(res)
    }
}

impl SimdLaneImpl<Scalar> for f32x4 {
    fn simd_swap_halves_impl(self) -> Self {
        let [x, y, z, w] = self.to_array();
        f32x4::from_array([z, w, x, y])
    }

    fn simd_clear_w_impl(self) -> Self {
        let [x, y, z, _] = self.to_array();
        f32x4::from_array([x, y, z, 0.0])
    }
}

impl SimdHorizontalImpl<Scalar> for f32x4 {
    fn simd_reduce_sum_impl(self) -> f32 {
        let [x, y, z, w] = self.to_array();
        (x + z) + (y + w)
    }
}
