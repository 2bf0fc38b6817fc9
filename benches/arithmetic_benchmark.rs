// ============================================================================
// Arithmetic Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Linear operations - add across operand digit counts
// 2. Quadratic operations - schoolbook mul and div across digit counts
// 3. Iterative operations - sqrt and pow
//
// Notes:
// - Operand strings are generated with a fixed digit cycle so runs are
//   reproducible
// - Division cost scales with both operand size and requested scale
// ============================================================================

use arbdec::engine;
use arbdec::numeric::Decimal;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Deterministic operand with the given digit count.
fn operand(digits: usize) -> Decimal {
    let text: String = (0..digits)
        .map(|i| char::from(b'1' + (i % 9) as u8))
        .collect();
    Decimal::parse(&text).unwrap()
}

// ============================================================================
// Linear Operations
// ============================================================================

fn benchmark_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for digits in [8usize, 64, 256].iter() {
        let a = operand(*digits);
        let b = operand(*digits);

        group.bench_with_input(BenchmarkId::from_parameter(digits), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(engine::add(a, b, 10)));
        });
    }

    group.finish();
}

// ============================================================================
// Quadratic Operations
// ============================================================================

fn benchmark_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");

    for digits in [8usize, 64, 256].iter() {
        let a = operand(*digits);
        let b = operand(*digits);

        group.bench_with_input(BenchmarkId::from_parameter(digits), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(engine::mul(a, b, 10)));
        });
    }

    group.finish();
}

fn benchmark_div(c: &mut Criterion) {
    let mut group = c.benchmark_group("div");

    for scale in [10usize, 100, 500].iter() {
        let a = operand(32);
        let b = operand(16);

        group.bench_with_input(
            BenchmarkId::from_parameter(scale),
            &(a, b, *scale),
            |bench, (a, b, scale)| {
                bench.iter(|| black_box(engine::div(a, b, *scale).unwrap()));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Iterative Operations
// ============================================================================

fn benchmark_sqrt(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqrt");

    for scale in [5usize, 25, 100].iter() {
        let value = operand(24);

        group.bench_with_input(
            BenchmarkId::from_parameter(scale),
            &(value, *scale),
            |bench, (value, scale)| {
                bench.iter(|| black_box(engine::sqrt(value, *scale).unwrap()));
            },
        );
    }

    group.finish();
}

fn benchmark_pow(c: &mut Criterion) {
    let mut group = c.benchmark_group("pow");

    for exponent in [10, 100, 1000].iter() {
        let base = Decimal::parse("1.0001").unwrap();
        let exp = Decimal::parse(&exponent.to_string()).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(exponent),
            &(base, exp),
            |bench, (base, exp)| {
                bench.iter(|| black_box(engine::pow(base, exp, 10).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_add,
    benchmark_mul,
    benchmark_div,
    benchmark_sqrt,
    benchmark_pow,
);
criterion_main!(benches);
