//! Criterion benchmarks for the bit engines.
//!
//! Measures single-draw cost, batch fill throughput, and seeding cost
//! (dominated by the WELL1024a warm-up).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use variate_core::{BitEngine, EngineKind};

/// Benchmark a single uniform draw per engine.
fn bench_next_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_uniform");

    for kind in EngineKind::ALL {
        let mut engine = kind.build(42);
        group.bench_function(kind.as_str(), |b| {
            b.iter(|| black_box(engine.next_uniform()));
        });
    }

    group.finish();
}

/// Benchmark batch fills across buffer sizes.
fn bench_fill_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_uniform");

    for size in [1_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        for kind in EngineKind::ALL {
            let mut engine = kind.build(42);
            let mut buffer = vec![0.0; size];
            group.bench_with_input(BenchmarkId::new(kind.as_str(), size), &size, |b, _| {
                b.iter(|| {
                    engine.fill_uniform(black_box(&mut buffer));
                });
            });
        }
    }

    group.finish();
}

/// Benchmark construction (state expansion plus warm-up).
fn bench_seeding(c: &mut Criterion) {
    let mut group = c.benchmark_group("seeding");

    for kind in EngineKind::ALL {
        group.bench_function(kind.as_str(), |b| {
            b.iter(|| black_box(kind.build(black_box(12345))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_next_uniform, bench_fill_uniform, bench_seeding);
criterion_main!(benches);
