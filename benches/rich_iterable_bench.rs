//! Benchmark for the RichIterable protocol against hand-written iterator
//! chains over the same data.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rich_collections::iteration::RichIterable;
use std::hint::black_box;

// =============================================================================
// select / collect Benchmark
// =============================================================================

fn benchmark_select_collect(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("select_collect");

    for size in [1000, 100_000] {
        let source: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("RichIterable", size), &size, |bencher, _| {
            bencher.iter(|| {
                let evens = source.select(|value| value % 2 == 0);
                black_box(evens.collect(|value| value * 3))
            });
        });

        group.bench_with_input(BenchmarkId::new("Iterator", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(
                    source
                        .iter()
                        .filter(|value| *value % 2 == 0)
                        .map(|value| value * 3)
                        .collect::<Vec<_>>(),
                )
            });
        });
    }

    group.finish();
}

// =============================================================================
// group_by Benchmark
// =============================================================================

fn benchmark_group_by(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("group_by");

    for size in [1000, 100_000] {
        let source: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("group_by", size), &size, |bencher, _| {
            bencher.iter(|| black_box(source.group_by(|value| value % 16)));
        });

        group.bench_with_input(BenchmarkId::new("count_by", size), &size, |bencher, _| {
            bencher.iter(|| black_box(source.count_by(|value| value % 16)));
        });
    }

    group.finish();
}

// =============================================================================
// sum Benchmark
// =============================================================================

fn benchmark_sum(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sum_of_double");

    for size in [1000, 100_000] {
        let source: Vec<f64> = (0..size).map(|index| f64::from(index) / 7.0).collect();

        group.bench_with_input(BenchmarkId::new("compensated", size), &size, |bencher, _| {
            bencher.iter(|| black_box(source.sum_of_double(|value| *value)));
        });

        group.bench_with_input(BenchmarkId::new("naive", size), &size, |bencher, _| {
            bencher.iter(|| black_box(source.iter().sum::<f64>()));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(benches, benchmark_select_collect, benchmark_group_by, benchmark_sum);

criterion_main!(benches);
