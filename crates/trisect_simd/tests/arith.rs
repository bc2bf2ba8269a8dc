use core::ops::{Add, Sub, Mul};

use rand::{Rng, SeedableRng, rngs::StdRng};
use trisect_simd::*;

macro_rules! impl_op {
    ($op:tt, $expr:expr) => {
        let arr0 : [f32; 4] = [2.0, 5.0, 8.0, 11.0];
        let arr1 : [f32; 4] = [1.0, 2.0, 3.0, 4.0];
        let mut expected_arr = [0f32; 4];
        let arr_it = expected_arr.iter_mut().zip(arr0.iter().zip(arr1.iter()));
        arr_it.for_each(|(res, (a, b))| *res = $expr(*a, *b));

        let val0 = f32x4::from_array(arr0);
        let val1 = f32x4::from_array(arr1);
        let expected = f32x4::from_array(expected_arr);

        assert_eq!(val0 $op val1, expected);
    };
}

macro_rules! impl_scalar_cmp {
    ($rng:expr, $trait:ident, $func:ident) => {
        for _ in 0..256 {
            let a = f32x4::from_array($rng.gen::<[f32; 4]>().map(|val| val * 200.0 - 100.0));
            let b = f32x4::from_array($rng.gen::<[f32; 4]>().map(|val| val * 200.0 - 100.0));
            assert_eq!(<f32x4 as $trait<DefBackend>>::$func(a, b), <f32x4 as $trait<Scalar>>::$func(a, b));
        }
    };
}

#[test]
fn add() {
    impl_op!(+, f32::add);
}

#[test]
fn sub() {
    impl_op!(-, f32::sub);
}

#[test]
fn mul() {
    impl_op!(*, f32::mul);
}

#[test]
fn neg() {
    let val = f32x4::new(1.0, -2.0, 0.0, -0.0);
    let res = (-val).to_array();
    assert_eq!(res[0], -1.0);
    assert_eq!(res[1], 2.0);
    assert!(res[2] == 0.0 && res[2].is_sign_negative());
    assert!(res[3] == 0.0 && res[3].is_sign_positive());
}

#[test]
fn mul_scalar() {
    let val = f32x4::new(1.0, -2.0, 3.5, 0.0);
    assert_eq!(val * 2.0, f32x4::new(2.0, -4.0, 7.0, 0.0));
}

#[test]
fn assign_ops() {
    let mut val = f32x4::splat(1.0);
    val += f32x4::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(val, f32x4::new(2.0, 3.0, 4.0, 5.0));
    val -= f32x4::splat(2.0);
    assert_eq!(val, f32x4::new(0.0, 1.0, 2.0, 3.0));
    val *= f32x4::splat(-1.0);
    assert_eq!(val, f32x4::new(-0.0, -1.0, -2.0, -3.0));
}

#[test]
fn set() {
    assert_eq!(f32x4::zero().to_array(), [0.0; 4]);
    assert_eq!(f32x4::splat(1.5).to_array(), [1.5; 4]);
    assert_eq!(f32x4::new(1.0, 2.0, 3.0, 4.0).to_array(), [1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn load_store() {
    let mem = [4.0, 3.0, 2.0, 1.0];
    let val = f32x4::load(&mem);
    let mut out = [0f32; 4];
    val.store(&mut out);
    assert_eq!(mem, out);
    assert_eq!(val.lane(0), 4.0);
    assert_eq!(val.lane(3), 1.0);
}

#[test]
fn mul_add() {
    let val = f32x4::new(1.0, 2.0, 3.0, 4.0);
    let res = val.mul_add(f32x4::splat(2.0), f32x4::splat(0.5));
    assert_eq!(res, f32x4::new(2.5, 4.5, 6.5, 8.5));
}

#[test]
fn swap_halves() {
    let val = f32x4::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(val.swap_halves(), f32x4::new(3.0, 4.0, 1.0, 2.0));
    assert_eq!(val.swap_halves().swap_halves(), val);
}

#[test]
fn clear_w() {
    let val = f32x4::new(1.0, 2.0, 3.0, f32::NAN);
    assert_eq!(val.clear_w().to_array(), [1.0, 2.0, 3.0, 0.0]);
}

#[test]
fn reduce_sum() {
    assert_eq!(f32x4::new(1.0, 2.0, 3.0, 4.0).reduce_sum(), 10.0);
    assert_eq!(f32x4::new(1.0, 2.0, 3.0, 0.0).dot(f32x4::new(4.0, 5.0, 6.0, 0.0)), 32.0);
}

#[test]
fn default_backend_matches_scalar() {
    let mut rng = StdRng::seed_from_u64(0x7269_7365_6374);
    impl_scalar_cmp!(rng, SimdArithImpl, simd_add_impl);
    impl_scalar_cmp!(rng, SimdArithImpl, simd_sub_impl);
    impl_scalar_cmp!(rng, SimdArithImpl, simd_mul_impl);

    for _ in 0..256 {
        let val = f32x4::from_array(rng.gen::<[f32; 4]>().map(|val| val * 200.0 - 100.0));
        assert_eq!(<f32x4 as SimdLaneImpl<DefBackend>>::simd_swap_halves_impl(val), <f32x4 as SimdLaneImpl<Scalar>>::simd_swap_halves_impl(val));
        assert_eq!(<f32x4 as SimdLaneImpl<DefBackend>>::simd_clear_w_impl(val), <f32x4 as SimdLaneImpl<Scalar>>::simd_clear_w_impl(val));
        assert_eq!(<f32x4 as SimdHorizontalImpl<DefBackend>>::simd_reduce_sum_impl(val), <f32x4 as SimdHorizontalImpl<Scalar>>::simd_reduce_sum_impl(val));
    }
}

#[test]
fn backend_type() {
    assert!(has_intrin(BackendType::Scalar));
    assert!(has_intrin(DEF_BACKEND_TYPE));
}
