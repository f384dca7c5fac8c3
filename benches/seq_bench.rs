//! # Sequence Benchmarks
//!
//! Throughput of the push protocol through each combinator.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lazyseq::{Seq, concat, from_slice, zip};
use std::hint::black_box;

const SIZES: [usize; 2] = [10_000, 1_000_000];

fn data(size: usize) -> Vec<u64> {
    (0..size as u64).collect()
}

fn bench_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("map");
    for size in SIZES {
        let data = data(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| from_slice(black_box(data)).map(|x| x ^ 2).count());
        });
    }
    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    for size in SIZES {
        let data = data(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| from_slice(black_box(data)).filter(|x| **x % 2 == 0).count());
        });
    }
    group.finish();
}

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");
    for size in SIZES {
        let data = data(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| from_slice(black_box(data)).reduce(0u64, |acc, x| acc.wrapping_add(*x)));
        });
    }
    group.finish();
}

fn bench_zip(c: &mut Criterion) {
    let mut group = c.benchmark_group("zip");
    for size in SIZES {
        let data = data(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| zip(black_box(data), black_box(data)).count());
        });
    }
    group.finish();
}

fn bench_concat_collect(c: &mut Criterion) {
    let mut group = c.benchmark_group("concat_collect");
    for size in SIZES {
        let (a, b) = (data(size), data(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| concat([from_slice(black_box(&a)), from_slice(black_box(&b))]).collect());
        });
    }
    group.finish();
}

fn bench_early_stop(c: &mut Criterion) {
    let data = data(1_000_000);
    c.bench_function("any_hits_first", |b| {
        b.iter(|| from_slice(black_box(&data)).map(|x| x + 1).any(|x| x > 0));
    });
}

criterion_group!(
    benches,
    bench_map,
    bench_filter,
    bench_reduce,
    bench_zip,
    bench_concat_collect,
    bench_early_stop
);
criterion_main!(benches);
