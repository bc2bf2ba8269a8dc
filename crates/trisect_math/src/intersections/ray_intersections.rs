use crate::*;

//- ray-plane intersection -----------------------------------------------------------------------------------------------------

impl IntersectWithRay for Plane {
    fn intersect_ray(&self, ray: &Ray) -> Option<RayHit> {
        self.intersect(ray)
    }
}

//- ray-triangle intersection --------------------------------------------------------------------------------------------------

impl IntersectWithRay for Triangle<'_> {
    // A ray starting on the triangle's plane hits at its own origin, not at the plane's reported point
    fn intersect_ray(&self, ray: &Ray) -> Option<RayHit> {
        let plane = self.plane();
        if plane.normal.dot_with_difference(plane.offset, ray.orig) == 0.0 {
            return self.contains(ray.orig).then_some(RayHit { t: 0.0, point: ray.orig });
        }
        plane.intersect(ray).filter(|hit| self.contains(hit.point))
    }
}
