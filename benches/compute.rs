use std::num::NonZeroU32;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chudnovsky::compute_pi;

const DIGITS: &[u64] = &[1_000, 10_000, 100_000];
const WORKER_COUNTS: &[u32] = &[1, 2, 4, 8];

fn bench_digits(c: &mut Criterion) {
    let mut group = c.benchmark_group("pi/digits");
    group.sample_size(10);

    for &digits in DIGITS {
        group.bench_with_input(BenchmarkId::from_parameter(digits), &digits, |b, &digits| {
            b.iter(|| {
                black_box(compute_pi(digits, None, None).expect("computation should succeed"))
            })
        });
    }

    group.finish();
}

fn bench_worker_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("pi/workers");
    group.sample_size(10);

    for &count in WORKER_COUNTS {
        let parallelism = NonZeroU32::new(count);
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &parallelism,
            |b, &parallelism| {
                b.iter(|| {
                    black_box(
                        compute_pi(50_000, parallelism, None)
                            .expect("computation should succeed"),
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_digits, bench_worker_counts);
criterion_main!(benches);
