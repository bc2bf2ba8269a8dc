use std::{
    ops::*,
    fmt::Display,
};
use trisect_simd::f32x4;

use crate::ApproxEq;

/// 3D vector, stored in a 4-lane SIMD register
///
/// The 4th lane is always 0: every constructor clears it, `add` and `sub` keep it at 0, and any operation
/// that multiplies by a caller supplied factor clears it again, as `0 * inf` would otherwise leave a NaN behind.
/// Because of this, a dot product can sum all 4 lanes.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[repr(transparent)]
pub struct Vector3(f32x4);

static_assertions::assert_eq_size!(Vector3, [f32; 4]);
static_assertions::const_assert_eq!(core::mem::align_of::<Vector3>(), 16);

impl Vector3 {
    /// Vector with all components set to 0
    pub const ZERO : Vector3 = Vector3(f32x4::from_array([0.0; 4]));

    /// Create a new vector
    #[inline(always)]
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(f32x4::new(x, y, z, 0.0))
    }

    /// Create a vector with all components set to 0
    #[inline(always)]
    #[must_use]
    pub fn zero() -> Self {
        Self(f32x4::zero())
    }

    /// Create a vector with all components set to `val`
    #[inline(always)]
    #[must_use]
    pub fn set(val: f32) -> Self {
        Self(f32x4::splat(val).clear_w())
    }

    /// Create a vector from an array
    #[inline(always)]
    #[must_use]
    pub fn from_array(arr: [f32; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Create a vector from a register, the 4th lane gets cleared
    #[inline(always)]
    #[must_use]
    pub fn from_register(reg: f32x4) -> Self {
        Self(reg.clear_w())
    }

    /// Get the content of the vector as an array
    #[inline(always)]
    #[must_use]
    pub fn to_array(self) -> [f32; 3] {
        let [x, y, z, _] = self.0.to_array();
        [x, y, z]
    }

    /// Get the underlying register
    #[inline(always)]
    #[must_use]
    pub fn register(self) -> f32x4 {
        self.0
    }

    /// Get all 4 lanes of the underlying register, the 4th lane is always 0
    #[inline(always)]
    pub fn lanes(&self) -> &[f32; 4] {
        self.0.as_array()
    }

    #[inline(always)]
    pub fn x(self) -> f32 {
        self.0.lane(0)
    }

    #[inline(always)]
    pub fn y(self) -> f32 {
        self.0.lane(1)
    }

    #[inline(always)]
    pub fn z(self) -> f32 {
        self.0.lane(2)
    }

    //--------------------------------------------------------------

    /// Component-wise add of 2 vectors
    #[inline]
    #[must_use]
    pub fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }

    /// Component-wise subtract of 2 vectors
    #[inline]
    #[must_use]
    pub fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }

    /// Multiply each component by `factor`
    #[inline]
    #[must_use]
    pub fn scale(self, factor: f32) -> Self {
        Self((self.0 * f32x4::splat(factor)).clear_w())
    }

    /// Calculate `self + rhs * factor`, with a single rounding when the target supports fused multiply-add
    #[inline]
    #[must_use]
    pub fn add_scale(self, rhs: Self, factor: f32) -> Self {
        Self(rhs.0.mul_add(f32x4::splat(factor), self.0).clear_w())
    }

    /// Add `rhs * factor` to the vector
    #[inline]
    pub fn add_scaled_in_place(&mut self, rhs: Self, factor: f32) {
        *self = self.add_scale(rhs, factor);
    }

    /// Store the vector into `dst`
    #[inline]
    pub fn store(self, dst: &mut Self) {
        *dst = self;
    }

    /// Calculate the dot product of 2 vectors
    #[inline]
    #[must_use]
    pub fn dot(self, rhs: Self) -> f32 {
        self.0.dot(rhs.0)
    }

    /// Calculate the dot product of the vector and the difference between `minuend` and `subtrahend`,
    /// i.e. `self.dot(minuend - subtrahend)`, with the difference only living in a register
    #[inline]
    #[must_use]
    pub fn dot_with_difference(self, minuend: Self, subtrahend: Self) -> f32 {
        self.0.dot(minuend.0 - subtrahend.0)
    }

    /// Calculate the cross product of 2 vectors
    #[inline]
    #[must_use]
    pub fn cross(self, rhs: Self) -> Self {
        let [ax, ay, az] = self.to_array();
        let [bx, by, bz] = rhs.to_array();
        Self::new(ay * bz - az * by,
                  az * bx - ax * bz,
                  ax * by - ay * bx)
    }

    /// Calculate the square length of the vector
    #[inline]
    pub fn len_sq(self) -> f32 {
        self.dot(self)
    }

    /// Calculate the length of the vector
    #[inline]
    pub fn len(self) -> f32 {
        self.len_sq().sqrt()
    }

    /// Check if all components are exactly 0
    #[inline]
    pub fn is_zero(self) -> bool {
        self.len_sq() == 0.0
    }

    /// Normalize the vector, a zero vector stays a zero vector
    #[must_use]
    pub fn normalize(self) -> Self {
        let len_sq = self.len_sq();
        if len_sq == 0.0 {
            self
        } else {
            self.scale(1.0 / len_sq.sqrt())
        }
    }
}

impl ApproxEq for Vector3 {
    const EPSILON : f32 = f32::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        self.x().is_close_to(rhs.x(), epsilon) &&
        self.y().is_close_to(rhs.y(), epsilon) &&
        self.z().is_close_to(rhs.z(), epsilon)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(arr: [f32; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(vec: Vector3) -> Self {
        vec.to_array()
    }
}

impl Add for Vector3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Vector3::add(self, rhs)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Vector3::sub(self, rhs)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        // -0.0 in the 4th lane still compares equal to 0, but keep the bits clean
        Self((-self.0).clear_w())
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale(rhs);
    }
}

impl Index<usize> for Vector3 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        debug_assert!(index < 3);
        &self.0.as_array()[index]
    }
}

impl Display for Vector3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("({}, {}, {})", self.x(), self.y(), self.z()))
    }
}
