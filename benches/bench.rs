use bowyer_watson::{triangulate, Point};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_points(count: usize) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| Point::new(rng.gen_range(0.0..800.0), rng.gen_range(0.0..800.0)))
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate");

    for count in [100, 500, 2000] {
        let points = random_points(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &points, |b, points| {
            b.iter(|| triangulate(black_box(points)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
