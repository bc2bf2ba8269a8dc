use crate::{Ray, RayHit, Triangle, Vector3};

/// Intersection of a shape with a ray
pub trait IntersectWithRay {
    /// Intersect the shape with a ray, returning the closest hit in front of the ray origin, if any
    fn intersect_ray(&self, ray: &Ray) -> Option<RayHit>;
}

/// Closest hit of a ray with a set of triangles
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TriangleHit {
    /// Index of the triangle that was hit
    pub index : usize,
    /// Ray parameter of the hit
    pub t     : f32,
    /// Point where the ray hit the triangle
    pub point : Vector3,
}

/// Find the triangle the ray hits first
///
/// Triangles are scanned in order, a later triangle only replaces the current closest when its ray parameter is strictly smaller,
/// so on a tie the triangle with the lowest index wins.
/// A ray starting on a triangle hits it at `t == 0`.
#[must_use]
pub fn closest_hit<'t, 'a: 't, I>(ray: &Ray, triangles: I) -> Option<TriangleHit>
where
    I: IntoIterator<Item = &'t Triangle<'a>>
{
    let mut closest : Option<TriangleHit> = None;
    for (index, triangle) in triangles.into_iter().enumerate() {
        let Some(hit) = triangle.intersect_ray(ray) else { continue };
        if closest.map_or(true, |cur| hit.t < cur.t) {
            closest = Some(TriangleHit { index, t: hit.t, point: hit.point });
        }
    }
    closest
}

/// Find the index of the triangle hit first by the ray starting at `ray_source` and going along `ray_dir`
#[inline]
#[must_use]
pub fn closest_triangle<'t, 'a: 't, I>(ray_source: Vector3, ray_dir: Vector3, triangles: I) -> Option<usize>
where
    I: IntoIterator<Item = &'t Triangle<'a>>
{
    closest_hit(&Ray::new(ray_source, ray_dir), triangles).map(|hit| hit.index)
}

mod ray_intersections;

#[cfg(test)]
mod test;
