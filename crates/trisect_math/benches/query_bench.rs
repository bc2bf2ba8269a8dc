use criterion::{criterion_main, criterion_group, Criterion, black_box};
use rand::{Rng, SeedableRng, rngs::StdRng};

use trisect_math::*;

fn vector_benchmark(c: &mut Criterion) {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(4.0, 5.0, 6.0);

    c.bench_function("Vector3: add_scale", |bench| bench.iter(|| black_box(a).add_scale(black_box(b), black_box(0.5))));
    c.bench_function("Vector3: dot", |bench| bench.iter(|| black_box(a).dot(black_box(b))));
    c.bench_function("Vector3: dot_with_difference", |bench| bench.iter(|| black_box(a).dot_with_difference(black_box(b), black_box(a))));
}

fn query_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let side0 = Vector3::new(1.0, 0.0, 0.0);
    let side1 = Vector3::new(0.0, 1.0, 0.0);
    let offsets : Vec<Vector3> = (0..1024)
        .map(|_| Vector3::new(rng.gen_range(-1.0..0.0), rng.gen_range(-1.0..0.0), rng.gen_range(1.0..100.0)))
        .collect();
    let triangles : Vec<Triangle> = offsets.iter().map(|offset| Triangle::new(offset, &side0, &side1)).collect();

    let point = Vector3::new(0.2, 0.2, 0.0);
    c.bench_function("Triangle: contains", |bench| bench.iter(|| black_box(&triangles[0]).contains(black_box(point))));

    let ray = Ray::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0));
    c.bench_function("closest_hit: 1024 triangles", |bench| bench.iter(|| closest_hit(black_box(&ray), black_box(&triangles))));
}

criterion_group!(benches, vector_benchmark, query_benchmark);
criterion_main!(benches);
