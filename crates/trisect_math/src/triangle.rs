use std::fmt::Display;

use trisect_logging::log_warning;
use trisect_simd::f32x4;

use crate::*;

/// Triangle spanned by 2 sides starting at a shared vertex, with a precomputed coefficient register for containment tests
///
/// The vertex and sides are borrowed and must outlive the triangle, only the coefficient register is owned.
/// The coefficient register holds `(1 / |side0|², 1 / |side1|², angle, angle)`, with `angle = dot(side0, side1)`.
///
/// Containment is exact for triangles whose sides are perpendicular, for other triangles it is an approximation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Triangle<'a> {
    offset : &'a Vector3,
    side0  : &'a Vector3,
    side1  : &'a Vector3,
    comp   : f32x4,
}

impl<'a> Triangle<'a> {
    /// Create a new triangle, without checking if it is degenerate
    ///
    /// A side without length ends up as an infinite or NaN coefficient, containment tests on such a triangle give meaningless results.
    #[must_use]
    pub fn new(offset: &'a Vector3, side0: &'a Vector3, side1: &'a Vector3) -> Self {
        let mag_sq0 = side0.dot(*side0);
        let mag_sq1 = side1.dot(*side1);
        let angle = side0.dot(*side1);
        let comp = f32x4::new(1.0 / mag_sq0, 1.0 / mag_sq1, angle, angle);
        Self { offset, side0, side1, comp }
    }

    /// Create a new triangle, rejecting sides without length and sides that point along the same line
    pub fn try_new(offset: &'a Vector3, side0: &'a Vector3, side1: &'a Vector3) -> Result<Self> {
        let reason = Self::degenerate_reason(*side0, *side1);
        if let Some(reason) = reason {
            log_warning!(LOG_CAT, "Rejected triangle at {} with sides {} and {}: {}", offset, side0, side1, reason);
            return Err(Error::DegenerateTriangle(reason));
        }
        Ok(Self::new(offset, side0, side1))
    }

    fn degenerate_reason(side0: Vector3, side1: Vector3) -> Option<&'static str> {
        let is_usable = |mag_sq: f32| mag_sq != 0.0 && mag_sq.is_finite();
        if !is_usable(side0.len_sq()) {
            Some("side0 has no usable length")
        } else if !is_usable(side1.len_sq()) {
            Some("side1 has no usable length")
        } else if side0.cross(side1).is_zero() {
            Some("sides are parallel")
        } else {
            None
        }
    }

    /// Check if a point lies inside the triangle, points on the edges count as inside
    ///
    /// The point is projected on both sides and the projections are scaled by the coefficient register,
    /// this gives coordinates `u` along side0 and `v` along side1, the point is inside when `u >= 0`, `v >= 0` and `u + v <= 1`.
    /// The point is not checked to be on the triangle's plane.
    ///
    /// The coordinates are exact when the sides are perpendicular, for other triangles they are an approximation.
    #[must_use]
    pub fn contains(&self, point: Vector3) -> bool {
        let difference = point.sub(*self.offset);
        let angle0 = difference.dot(*self.side0);
        let angle1 = difference.dot(*self.side1);

        // (angle0 / |side0|², angle1 / |side1|², angle1 * angle, angle0 * angle)
        let coords = f32x4::new(angle0, angle1, angle1, angle0) * self.comp;
        let [u, v, _, _] = (coords - coords.swap_halves()).to_array();
        u >= 0.0 && v >= 0.0 && u + v <= 1.0
    }

    /// Get the normalized normal of the triangle, following the right hand rule from side0 to side1
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        self.side0.cross(*self.side1).normalize()
    }

    /// Get the plane the triangle lies on
    #[must_use]
    pub fn plane(&self) -> Plane {
        Plane::new(self.normal(), *self.offset)
    }

    /// Get the shared vertex of both sides
    #[inline]
    pub fn offset(&self) -> &'a Vector3 {
        self.offset
    }

    #[inline]
    pub fn side0(&self) -> &'a Vector3 {
        self.side0
    }

    #[inline]
    pub fn side1(&self) -> &'a Vector3 {
        self.side1
    }

    /// Get the coefficient register
    #[inline]
    pub fn comp(&self) -> f32x4 {
        self.comp
    }
}

impl Display for Triangle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ o: {}, s0: {}, s1: {} }}", self.offset, self.side0, self.side1))
    }
}
