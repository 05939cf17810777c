//! Conversion benchmarks.
//!
//! Compares `convert` with std `TryFrom`, and measures the cost of runtime
//! dispatch through `AnyInt` and `&dyn Any`.

use std::any::Any;
use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use safemath::{AnyInt, convert, convert_any, convert_dyn};

const SOURCES: [i64; 6] = [0, 42, -1, 255, 256, i64::MIN];

fn bench_static_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_static");

    group.bench_function("safemath_i64_to_u8", |b| {
        b.iter(|| {
            for &v in &SOURCES {
                let _ = black_box(convert::<u8, i64>(black_box(v)));
            }
        });
    });

    group.bench_function("std_try_from_i64_to_u8", |b| {
        b.iter(|| {
            for &v in &SOURCES {
                let _ = black_box(u8::try_from(black_box(v)));
            }
        });
    });

    group.bench_function("safemath_u64_to_i64", |b| {
        b.iter(|| {
            for &v in &SOURCES {
                let _ = black_box(convert::<i64, u64>(black_box(v as u64)));
            }
        });
    });

    group.finish();
}

fn bench_dynamic_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_dynamic");

    let tagged = [
        AnyInt::I8(-3),
        AnyInt::U16(300),
        AnyInt::I64(42),
        AnyInt::Usize(7),
        AnyInt::U64(u64::MAX),
    ];
    group.bench_function("convert_any_to_i32", |b| {
        b.iter(|| {
            for &v in &tagged {
                let _ = black_box(convert_any::<i32>(black_box(v)));
            }
        });
    });

    let erased: [Box<dyn Any>; 5] = [
        Box::new(-3i8),
        Box::new(300u16),
        Box::new(42i64),
        Box::new(7usize),
        Box::new(1.5f64),
    ];
    group.bench_function("convert_dyn_to_i32", |b| {
        b.iter(|| {
            for v in &erased {
                let _ = black_box(convert_dyn::<i32>(black_box(v.as_ref())));
            }
        });
    });

    group.finish();
}

criterion_group!(convert_benches, bench_static_convert, bench_dynamic_convert);

criterion_main!(convert_benches);
