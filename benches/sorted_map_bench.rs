//! Benchmark for TreeSortedMap vs standard BTreeMap.
//!
//! The sorted map trades O(n) insertion for contiguous storage; these
//! benchmarks show where that pays off.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rich_collections::sorted::TreeSortedMap;
use std::collections::BTreeMap;
use std::hint::black_box;

// =============================================================================
// put Benchmark
// =============================================================================

fn benchmark_put(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("put");

    for size in [100, 1000, 10000] {
        group.bench_with_input(
            BenchmarkId::new("TreeSortedMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut map = TreeSortedMap::new();
                    for index in 0..size {
                        map.put(black_box(index), black_box(index * 2));
                    }
                    black_box(map)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BTreeMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut map = BTreeMap::new();
                    for index in 0..size {
                        map.insert(black_box(index), black_box(index * 2));
                    }
                    black_box(map)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// get Benchmark
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in [100, 1000, 10000] {
        let sorted_map: TreeSortedMap<i32, i32> =
            (0..size).map(|index| (index, index * 2)).collect();
        let standard_map: BTreeMap<i32, i32> = (0..size).map(|index| (index, index * 2)).collect();

        group.bench_with_input(
            BenchmarkId::new("TreeSortedMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut sum = 0;
                    for key in 0..size {
                        if let Some(&value) = sorted_map.get(&black_box(key)) {
                            sum += value;
                        }
                    }
                    black_box(sum)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BTreeMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut sum = 0;
                    for key in 0..size {
                        if let Some(&value) = standard_map.get(&black_box(key)) {
                            sum += value;
                        }
                    }
                    black_box(sum)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// range Benchmark
// =============================================================================

fn benchmark_sub_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sub_map");

    for size in [1000, 10000] {
        let sorted_map: TreeSortedMap<i32, i32> =
            (0..size).map(|index| (index, index)).collect();
        let standard_map: BTreeMap<i32, i32> = (0..size).map(|index| (index, index)).collect();
        let (from, to) = (size / 4, size / 2);

        group.bench_with_input(BenchmarkId::new("TreeSortedMap", size), &size, |bencher, _| {
            bencher.iter(|| black_box(sorted_map.sub_map(&from, &to)));
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(
                    standard_map
                        .range(from..to)
                        .map(|(key, value)| (*key, *value))
                        .collect::<BTreeMap<_, _>>(),
                )
            });
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(benches, benchmark_put, benchmark_get, benchmark_sub_map);

criterion_main!(benches);
