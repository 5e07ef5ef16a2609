//! Criterion benchmarks for polyline length and concatenation.
//! Focus sizes: n in {0, 10, 100, 1000, 10000}.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polyline::geom2::rand::ReplayToken;
use polyline::{Point, Polyline};

fn random_polyline(n: usize, seed: u64) -> Polyline<f64> {
    Polyline::random_replay(n, -100.0, 100.0, ReplayToken::new(seed, n as u64))
        .expect("valid bounds")
}

fn bench_polyline(c: &mut Criterion) {
    let mut group = c.benchmark_group("polyline");
    for &n in &[0usize, 10, 100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("length", n), &n, |b, &n| {
            let p = random_polyline(n, 43);
            b.iter(|| p.length())
        });

        group.bench_with_input(BenchmarkId::new("concat_borrowed", n), &n, |b, &n| {
            let lhs = random_polyline(n, 44);
            let rhs = random_polyline(n, 45);
            b.iter(|| &lhs + &rhs)
        });

        group.bench_with_input(BenchmarkId::new("append_owned", n), &n, |b, &n| {
            b.iter_batched(
                || random_polyline(n, 46),
                |p| p + Point::new(1.0, 1.0),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_polyline);
criterion_main!(benches);
