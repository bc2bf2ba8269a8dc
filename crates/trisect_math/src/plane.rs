use std::fmt::Display;

use crate::*;

/// Plane through `offset`, facing along `normal`
///
/// The plane is not normalized, `normal` is used as given.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct Plane {
    pub normal : Vector3,
    pub offset : Vector3,
}

/// Result of a ray hitting a surface
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RayHit {
    /// Ray parameter of the hit
    pub t     : f32,
    /// Point where the ray hit
    pub point : Vector3,
}

impl Plane {
    /// Create a new plane
    #[inline]
    #[must_use]
    pub fn new(normal: Vector3, offset: Vector3) -> Self {
        Self { normal, offset }
    }

    /// Intersect the plane with a ray
    ///
    /// When the ray origin lies exactly on the plane, a hit at `t == 0` is reported, with `normal * dot(normal, offset)` as the hit point.
    /// That point is the plane's closest point to the world origin when `normal` is normalized, not the ray origin.
    ///
    /// A ray parallel to the plane, or pointing away from it, does not intersect.
    #[must_use]
    pub fn intersect(&self, ray: &Ray) -> Option<RayHit> {
        let numerator = self.normal.dot_with_difference(self.offset, ray.orig);
        if numerator == 0.0 {
            return Some(RayHit { t: 0.0, point: self.normal.scale(self.normal.dot(self.offset)) });
        }

        let denominator = self.normal.dot(ray.dir);
        if denominator == 0.0 {
            return None;
        }

        let t = numerator / denominator;
        if t < 0.0 {
            return None;
        }
        Some(RayHit { t, point: ray.orig.add_scale(ray.dir, t) })
    }

    /// Calculate the signed distance from a point to the plane, in multiples of the normal's length, positive when above the plane
    #[inline]
    #[must_use]
    pub fn distance(&self, point: Vector3) -> f32 {
        self.normal.dot_with_difference(point, self.offset)
    }

    /// Check if a point is above the plane
    #[inline]
    #[must_use]
    pub fn is_above(&self, point: Vector3) -> bool {
        self.distance(point) > 0.0
    }
}

/// Intersect a ray with the plane through `offset`, facing along `normal`, returning the hit point
#[inline]
#[must_use]
pub fn plane_intersect(ray_source: Vector3, ray_dir: Vector3, normal: Vector3, offset: Vector3) -> Option<Vector3> {
    Plane::new(normal, offset).intersect(&Ray::new(ray_source, ray_dir)).map(|hit| hit.point)
}

impl ApproxEq for Plane {
    const EPSILON: f32 = f32::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: f32) -> bool {
        self.normal.is_close_to(rhs.normal, epsilon) &&
        self.offset.is_close_to(rhs.offset, epsilon)
    }
}

impl Display for Plane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{{ n: {}, o: {} }}", self.normal, self.offset))
    }
}
