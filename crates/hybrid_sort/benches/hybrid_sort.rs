use std::hint::black_box;
use std::time::Duration;

use bench::{DISTRIBUTIONS, apply_runtime_config, default_rng, generate_dataset, seed_for};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hybrid_sort::{SortContext, SortParams, hybrid_merge_sort_with_ctx};
use rand::Rng;

const BENCH_SIZES: [usize; 4] = [4096, 16384, 65536, 262144];
const THRESHOLD_SWEEP: [usize; 6] = [1, 8, 16, 32, 64, 128];
const THRESHOLD_SWEEP_SIZE: usize = 100_000;

type StdSortFn = fn(&mut [i64]);

fn bench_sort(c: &mut Criterion) {
    let baselines: [(&str, StdSortFn); 2] = [
        ("std_stable", <[i64]>::sort),
        ("std_unstable", <[i64]>::sort_unstable),
    ];

    for &dist in &DISTRIBUTIONS {
        let mut group = c.benchmark_group(format!("sort/{}", dist.label()));

        for &size in &BENCH_SIZES {
            apply_runtime_config(&mut group, size);
            let base = generate_dataset(dist, size, seed_for(dist, size, 0xBA5E_0000));

            group.bench_function(BenchmarkId::new("hybrid_merge_sort", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    let mut ctx = SortContext::default();
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = std::time::Instant::now();
                        hybrid_merge_sort_with_ctx(&mut data, &mut ctx, SortParams::default());
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });

            for &(name, func) in &baselines {
                group.bench_function(BenchmarkId::new(name, size), |bencher| {
                    bencher.iter_custom(|iters| {
                        let mut total = Duration::ZERO;
                        for _ in 0..iters {
                            let mut data = base.clone();
                            let start = std::time::Instant::now();
                            func(&mut data);
                            total += start.elapsed();
                            black_box(&data);
                        }
                        total
                    });
                });
            }
        }

        group.finish();
    }
}

fn bench_threshold(c: &mut Criterion) {
    let mut rng = default_rng();
    let base = (0..THRESHOLD_SWEEP_SIZE)
        .map(|_| rng.random::<i64>())
        .collect::<Vec<_>>();

    let mut group = c.benchmark_group("threshold");
    apply_runtime_config(&mut group, THRESHOLD_SWEEP_SIZE);

    for &threshold in &THRESHOLD_SWEEP {
        let params = SortParams::with_threshold(threshold);
        group.bench_function(BenchmarkId::new("random_i64", threshold), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                let mut ctx = SortContext::default();
                for _ in 0..iters {
                    let mut data = base.clone();
                    let start = std::time::Instant::now();
                    hybrid_merge_sort_with_ctx(&mut data, &mut ctx, params);
                    total += start.elapsed();
                    black_box(&data);
                }
                total
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sort, bench_threshold);
criterion_main!(benches);
