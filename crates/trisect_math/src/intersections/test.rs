use crate::*;

const ORIGIN : Vector3 = Vector3::ZERO;

fn unit_sides() -> (Vector3, Vector3) {
    (Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0))
}

#[test]
fn ray_plane() {
    let normal = Vector3::new(0.0, 0.0, 1.0);
    let offset = Vector3::zero();
    let source = Vector3::new(0.0, 0.0, -5.0);

    // Crossing
    let hit = plane_intersect(source, Vector3::new(0.0, 0.0, 1.0), normal, offset);
    assert_eq!(hit, Some(Vector3::zero()));

    // Parallel
    let hit = plane_intersect(source, Vector3::new(0.0, 1.0, 0.0), normal, offset);
    assert_eq!(hit, None);

    // Behind
    let hit = plane_intersect(source, Vector3::new(0.0, 0.0, -1.0), normal, offset);
    assert_eq!(hit, None);

    // Slanted, with a direction that is not normalized
    let plane = Plane::new(normal, offset);
    let ray = Ray::new(source, Vector3::new(2.0, 0.0, 10.0));
    match plane.intersect_ray(&ray) {
        Some(hit) => {
            assert!(hit.t.is_close_to(0.5, 1e-6));
            assert!(hit.point.is_close_to(Vector3::new(1.0, 0.0, 0.0), 1e-5));
        },
        None => panic!("None != Some(0.5)"),
    }
}

#[test]
fn ray_plane_origin_on_plane() {
    let normal = Vector3::new(0.0, 0.0, 2.0);
    let offset = Vector3::new(1.0, 1.0, 2.0);
    let source = Vector3::new(3.0, 4.0, 2.0);

    // The reported point is the normal scaled by dot(normal, offset), even for a ray parallel to the plane
    for dir in [Vector3::new(0.0, 0.0, 1.0), Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 0.0, -1.0)] {
        let hit = Plane::new(normal, offset).intersect(&Ray::new(source, dir));
        assert_eq!(hit, Some(RayHit { t: 0.0, point: Vector3::new(0.0, 0.0, 8.0) }));
    }
}

#[test]
fn ray_triangle() {
    let (side0, side1) = unit_sides();
    let triangle = Triangle::new(&ORIGIN, &side0, &side1);

    let ray = Ray::new(Vector3::new(0.2, 0.2, -1.0), Vector3::new(0.0, 0.0, 1.0));
    let hit = triangle.intersect_ray(&ray);
    assert_eq!(hit, Some(RayHit { t: 1.0, point: Vector3::new(0.2, 0.2, 0.0) }));

    // Hits the plane, outside of the triangle
    let ray = Ray::new(Vector3::new(0.6, 0.6, -1.0), Vector3::new(0.0, 0.0, 1.0));
    assert_eq!(triangle.intersect_ray(&ray), None);

    // Hits the back side
    let ray = Ray::new(Vector3::new(0.2, 0.2, 1.0), Vector3::new(0.0, 0.0, -1.0));
    assert!(triangle.intersect_ray(&ray).is_some());
}

#[test]
fn closest_empty() {
    let ray = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, 1.0));
    let triangles : [Triangle; 0] = [];
    assert_eq!(closest_hit(&ray, &triangles), None);
    assert_eq!(closest_triangle(ray.orig, ray.dir, &triangles), None);
}

#[test]
fn closest_picks_nearest() {
    let (side0, side1) = unit_sides();
    let far = Vector3::new(0.0, 0.0, 3.0);
    let near = Vector3::new(0.0, 0.0, 1.0);
    let triangles = [
        Triangle::new(&far, &side0, &side1),
        Triangle::new(&near, &side0, &side1),
    ];

    let ray = Ray::new(Vector3::new(0.2, 0.2, -1.0), Vector3::new(0.0, 0.0, 1.0));
    let hit = closest_hit(&ray, &triangles);
    assert_eq!(hit, Some(TriangleHit { index: 1, t: 2.0, point: Vector3::new(0.2, 0.2, 1.0) }));
    assert_eq!(closest_triangle(ray.orig, ray.dir, &triangles), Some(1));

    // Outside of the near triangle, inside of the larger far one
    let big_side0 = Vector3::new(4.0, 0.0, 0.0);
    let big_side1 = Vector3::new(0.0, 4.0, 0.0);
    let triangles = [
        Triangle::new(&near, &side0, &side1),
        Triangle::new(&far, &big_side0, &big_side1),
    ];
    let ray = Ray::new(Vector3::new(1.0, 1.0, -1.0), Vector3::new(0.0, 0.0, 1.0));
    assert_eq!(closest_triangle(ray.orig, ray.dir, &triangles), Some(1));
}

#[test]
fn closest_tie_picks_lowest_index() {
    let (side0, side1) = unit_sides();
    let offset = Vector3::new(0.0, 0.0, 2.0);
    let triangles = [
        Triangle::new(&offset, &side0, &side1),
        Triangle::new(&offset, &side1, &side0),
        Triangle::new(&offset, &side0, &side1),
    ];

    let ray = Ray::new(Vector3::new(0.25, 0.25, 0.0), Vector3::new(0.0, 0.0, 1.0));
    assert_eq!(closest_triangle(ray.orig, ray.dir, &triangles), Some(0));
}

#[test]
fn closest_miss() {
    let (side0, side1) = unit_sides();
    let behind = Vector3::new(0.0, 0.0, -3.0);
    let triangles = [Triangle::new(&behind, &side0, &side1)];

    // Triangle is behind the ray
    let ray = Ray::new(Vector3::new(0.2, 0.2, 0.0), Vector3::new(0.0, 0.0, 1.0));
    assert_eq!(closest_triangle(ray.orig, ray.dir, &triangles), None);

    // Ray runs parallel to the triangle
    let ray = Ray::new(Vector3::new(0.2, 0.2, 0.0), Vector3::new(1.0, 0.0, 0.0));
    assert_eq!(closest_triangle(ray.orig, ray.dir, &triangles), None);

    // Ray passes beside the triangle
    let ray = Ray::new(Vector3::new(5.0, 5.0, 0.0), Vector3::new(0.0, 0.0, -1.0));
    assert_eq!(closest_triangle(ray.orig, ray.dir, &triangles), None);
}

#[test]
fn closest_origin_on_plane_outside_triangle() {
    let (side0, side1) = unit_sides();
    let above = Vector3::new(9.5, 9.5, 1.0);
    let triangles = [
        Triangle::new(&ORIGIN, &side0, &side1),
        Triangle::new(&above, &side0, &side1),
    ];

    // Starts on the plane of triangle 0, but far outside of it
    let ray = Ray::new(Vector3::new(10.0, 10.0, 0.0), Vector3::new(0.0, 0.0, 1.0));
    assert_eq!(triangles[0].intersect_ray(&ray), None);
    assert_eq!(closest_hit(&ray, &triangles), Some(TriangleHit { index: 1, t: 1.0, point: Vector3::new(10.0, 10.0, 1.0) }));

    // Nothing else to hit
    assert_eq!(closest_triangle(ray.orig, ray.dir, &triangles[..1]), None);
}

#[test]
fn closest_origin_inside_triangle() {
    let (side0, side1) = unit_sides();
    let far = Vector3::new(0.0, 0.0, 2.0);
    let triangles = [
        Triangle::new(&far, &side0, &side1),
        Triangle::new(&ORIGIN, &side0, &side1),
    ];

    let orig = Vector3::new(0.2, 0.2, 0.0);
    let ray = Ray::new(orig, Vector3::new(0.0, 0.0, 1.0));
    assert_eq!(closest_hit(&ray, &triangles), Some(TriangleHit { index: 1, t: 0.0, point: orig }));

    // Also when the ray runs along the plane
    let ray = Ray::new(orig, Vector3::new(1.0, 0.0, 0.0));
    assert_eq!(closest_hit(&ray, &triangles), Some(TriangleHit { index: 1, t: 0.0, point: orig }));
}

#[test]
fn closest_over_iterator() {
    let (side0, side1) = unit_sides();
    let near = Vector3::new(0.0, 0.0, 1.0);
    let far = Vector3::new(0.0, 0.0, 3.0);
    let triangles = [
        Triangle::new(&far, &side0, &side1),
        Triangle::new(&near, &side0, &side1),
    ];

    let ray = Ray::new(Vector3::new(0.2, 0.2, -1.0), Vector3::new(0.0, 0.0, 1.0));
    let boxed : Vec<Box<Triangle>> = triangles.iter().copied().map(Box::new).collect();
    assert_eq!(closest_triangle(ray.orig, ray.dir, boxed.iter().map(|triangle| &**triangle)), Some(1));
}
