use std::fmt::Display;

use crate::{ApproxEq, Vector3};

/// 3D ray, starting at `orig` and extending infinitely along `dir`
///
/// `dir` does not need to be normalized, the ray parameter `t` of any hit is expressed in multiples of `dir`.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct Ray {
    pub orig : Vector3,
    pub dir  : Vector3,
}

impl Ray {
    /// Create a new ray
    #[inline]
    #[must_use]
    pub fn new(orig: Vector3, dir: Vector3) -> Self {
        Self { orig, dir }
    }

    /// Get the point at a given ray parameter
    #[inline]
    #[must_use]
    pub fn point_at(self, t: f32) -> Vector3 {
        self.orig.add_scale(self.dir, t)
    }
}

impl ApproxEq for Ray {
    const EPSILON: f32 = f32::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        self.orig.is_close_to(rhs.orig, epsilon) &&
        self.dir.is_close_to(rhs.dir, epsilon)
    }
}

impl Display for Ray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ o: {}, d: {} }}", self.orig, self.dir))
    }
}
