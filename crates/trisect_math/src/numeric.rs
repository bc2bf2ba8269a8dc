/// Approximate equality, for comparing results that went through rounding
pub trait ApproxEq : Sized {
    const EPSILON : f32;

    /// Check if `self` is approximately equal to another value, given an `epsilon`
    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool;

    /// Check if `self` is approximately equal to another, using the machine epsilon
    fn is_approx_eq(self, rhs: Self) -> bool {
        self.is_close_to(rhs, Self::EPSILON)
    }
}

impl ApproxEq for f32 {
    const EPSILON : f32 = f32::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        (self - rhs).abs() <= epsilon
    }
}
