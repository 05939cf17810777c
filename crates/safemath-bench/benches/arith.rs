//! Checked arithmetic benchmarks.
//!
//! Each operation is measured next to the matching std `checked_*` call so
//! the cost of same-width overflow detection is visible per kind.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use safemath::{Integer, add, div, mul, sub};
use safemath_bench::{happy_pairs, operand_pairs};

// ============================================================================
// Happy Path
// ============================================================================

macro_rules! bench_kind {
    ($group:expr, $t:ty) => {{
        let name = <$t as Integer>::KIND.to_string();
        let pairs = happy_pairs::<$t>();

        $group.bench_with_input(BenchmarkId::new("safemath_add", &name), &pairs, |b, pairs| {
            b.iter(|| {
                for &(x, y) in pairs {
                    let _ = black_box(add(black_box(x), black_box(y)));
                }
            });
        });
        $group.bench_with_input(BenchmarkId::new("std_checked_add", &name), &pairs, |b, pairs| {
            b.iter(|| {
                for &(x, y) in pairs {
                    black_box(black_box(x).checked_add(black_box(y)));
                }
            });
        });
        $group.bench_with_input(BenchmarkId::new("safemath_sub", &name), &pairs, |b, pairs| {
            b.iter(|| {
                for &(x, y) in pairs {
                    let _ = black_box(sub(black_box(x), black_box(y)));
                }
            });
        });
        $group.bench_with_input(BenchmarkId::new("safemath_mul", &name), &pairs, |b, pairs| {
            b.iter(|| {
                for &(x, y) in pairs {
                    let _ = black_box(mul(black_box(x), black_box(y)));
                }
            });
        });
        $group.bench_with_input(BenchmarkId::new("std_checked_mul", &name), &pairs, |b, pairs| {
            b.iter(|| {
                for &(x, y) in pairs {
                    black_box(black_box(x).checked_mul(black_box(y)));
                }
            });
        });
        $group.bench_with_input(BenchmarkId::new("safemath_div", &name), &pairs, |b, pairs| {
            b.iter(|| {
                for &(x, y) in pairs {
                    let _ = black_box(div(black_box(x), black_box(y)));
                }
            });
        });
    }};
}

fn bench_happy_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("arith_happy_path");

    bench_kind!(group, i8);
    bench_kind!(group, i32);
    bench_kind!(group, i64);
    bench_kind!(group, u32);
    bench_kind!(group, u64);
    bench_kind!(group, usize);

    group.finish();
}

// ============================================================================
// Boundary Operands
// ============================================================================

fn bench_boundaries(c: &mut Criterion) {
    let mut group = c.benchmark_group("arith_boundaries");

    let signed = operand_pairs::<i64>();
    group.bench_function("i64_all_ops", |b| {
        b.iter(|| {
            for &(x, y) in &signed {
                let _ = black_box(add(black_box(x), black_box(y)));
                let _ = black_box(sub(black_box(x), black_box(y)));
                let _ = black_box(mul(black_box(x), black_box(y)));
                let _ = black_box(div(black_box(x), black_box(y)));
            }
        });
    });

    let unsigned = operand_pairs::<u64>();
    group.bench_function("u64_all_ops", |b| {
        b.iter(|| {
            for &(x, y) in &unsigned {
                let _ = black_box(add(black_box(x), black_box(y)));
                let _ = black_box(sub(black_box(x), black_box(y)));
                let _ = black_box(mul(black_box(x), black_box(y)));
                let _ = black_box(div(black_box(x), black_box(y)));
            }
        });
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(arith_benches, bench_happy_path, bench_boundaries);

criterion_main!(arith_benches);
