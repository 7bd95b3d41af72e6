//! Benchmark for memoization: cache hits, misses and recursive sharing.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fnkit::memo::{MemoHandle, memoize, recursive_memoize};
use std::hint::black_box;

fn sum_to(limit: u64) -> u64 {
    (0..limit).sum()
}

fn benchmark_memo_hit_and_miss(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("memo_hit_and_miss");

    group.bench_function("direct_call", |bencher| {
        bencher.iter(|| black_box(sum_to(black_box(1000))));
    });

    let warm = memoize(sum_to);
    warm.call((1000,));
    group.bench_function("cache_hit", |bencher| {
        bencher.iter(|| black_box(warm.call(black_box((1000,)))));
    });

    group.bench_function("cache_miss", |bencher| {
        bencher.iter(|| {
            let cold = memoize(sum_to);
            black_box(cold.call(black_box((1000,))))
        });
    });

    group.finish();
}

fn benchmark_recursive_fibonacci(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("recursive_fibonacci");

    for n in [10_u64, 40, 90] {
        group.bench_with_input(BenchmarkId::new("fresh_cache", n), &n, |bencher, &n| {
            bencher.iter(|| {
                let fibonacci = recursive_memoize(|fib: &dyn MemoHandle<(u64,), u64>, n: u64| -> u64 {
                    if n < 2 { n } else { fib.call((n - 1,)) + fib.call((n - 2,)) }
                });
                black_box(fibonacci.call((black_box(n),)))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_memo_hit_and_miss, benchmark_recursive_fibonacci);

criterion_main!(benches);
