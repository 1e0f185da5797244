//! Benchmark for failure handling strategies.
//!
//! Compares `Validation` error accumulation with `Either` short-circuiting
//! when folding many independent checks through `ap`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fantasia::control::{Either, NonEmptyVec, Validation};
use fantasia::typeclass::Semigroup;
use std::hint::black_box;

fn check_validation(value: i32) -> Validation<String, i32> {
    if value % 3 == 0 {
        Validation::failure(format!("{value} is divisible by three"))
    } else {
        Validation::success(value)
    }
}

fn check_either(value: i32) -> Either<String, i32> {
    if value % 3 == 0 {
        Either::Left(format!("{value} is divisible by three"))
    } else {
        Either::Right(value)
    }
}

// =============================================================================
// Chained ap
// =============================================================================

fn benchmark_ap_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ap_chain");

    for size in [10, 100, 1000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(
            BenchmarkId::new("validation_accumulate", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let result = (0..size).fold(Validation::of(0_i64), |accumulator, value| {
                        accumulator
                            .map(|total| move |next: i32| total + i64::from(next))
                            .ap(check_validation(value))
                    });
                    black_box(result)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("either_short_circuit", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let result = (0..size).fold(Either::of(0_i64), |accumulator, value| {
                        accumulator
                            .map(|total| move |next: i32| total + i64::from(next))
                            .ap(check_either(value))
                    });
                    black_box(result)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Error concatenation
// =============================================================================

fn benchmark_error_concatenation(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("error_concatenation");

    for size in [10, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("non_empty_combine", size),
            &size,
            |bencher, &size| {
                let batches: Vec<NonEmptyVec<i32>> =
                    (0..size).map(NonEmptyVec::singleton).collect();
                bencher.iter(|| black_box(NonEmptyVec::reduce_all(batches.clone())));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("vec_extend", size),
            &size,
            |bencher, &size| {
                let batches: Vec<Vec<i32>> = (0..size).map(|value| vec![value]).collect();
                bencher.iter(|| {
                    let mut merged = Vec::new();
                    for batch in batches.clone() {
                        merged.extend(batch);
                    }
                    black_box(merged)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_ap_chain, benchmark_error_concatenation);

criterion_main!(benches);
