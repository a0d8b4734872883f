use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use piecewise::prelude::*;

/// A yard of `n` abutting quadratic pieces over (0, n].
fn stacked_yard(n: usize) -> Yard {
    let pieces = (0..n)
        .map(|i| {
            let lo = i as f64;
            let k = (i % 7) as f64 - 3.0;
            Piece::new(lo, lo + 1.0, BoundedPoly::new(0, &[k, 1.0, 0.5]))
        })
        .collect();
    Yard::new(pieces)
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for n in [16, 64, 256] {
        let yard = stacked_yard(n);
        let partition = Partition::from_yard(&yard);
        group.bench_with_input(BenchmarkId::new("yard", n), &yard, |b, y| {
            b.iter(|| black_box(y.evaluate(black_box(0.75 * n as f64))));
        });
        group.bench_with_input(BenchmarkId::new("partition", n), &partition, |b, t| {
            b.iter(|| black_box(t.evaluate(black_box(0.75 * n as f64))));
        });
    }
    group.finish();
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    group.sample_size(20);
    for n in [16, 64] {
        let yard = stacked_yard(n);
        let partition = Partition::from_yard(&yard);
        group.bench_with_input(BenchmarkId::new("yard", n), &yard, |b, y| {
            b.iter(|| black_box(y.clone() * y));
        });
        group.bench_with_input(BenchmarkId::new("partition", n), &partition, |b, t| {
            b.iter(|| black_box(t * t));
        });
    }
    group.finish();
}

fn bench_canonicalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonicalize");
    for n in [16, 64, 256] {
        let yard = stacked_yard(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &yard, |b, y| {
            b.iter(|| black_box(Partition::from_yard(y)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_multiply, bench_canonicalize);
criterion_main!(benches);
