#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use safemath::{AnyInt, ArithError, convert, convert_any, convert_dyn};

/// Fuzzer-friendly source value; mirrors `AnyInt` one variant per kind.
#[derive(Debug, Clone, Copy, Arbitrary)]
enum Source {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
}

/// Checks one source against every target kind via std's lossless `TryFrom`.
macro_rules! check_targets {
    ($v:expr => $($dst:ty),*) => {{
        let v = $v;
        $(
            let expected = <$dst>::try_from(v).map_err(|_| ArithError::Truncation);
            assert_eq!(convert::<$dst, _>(v), expected);
            assert_eq!(convert_any::<$dst>(AnyInt::from(v)), expected);
            assert_eq!(convert_dyn::<$dst>(&v), expected);

            if let Ok(to) = expected {
                assert_eq!(convert::<_, $dst>(to), Ok(v));
            }
        )*
    }};
}

macro_rules! check_all_targets {
    ($v:expr) => {
        check_targets!($v => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize)
    };
}

fuzz_target!(|source: Source| {
    match source {
        Source::I8(v) => check_all_targets!(v),
        Source::I16(v) => check_all_targets!(v),
        Source::I32(v) => check_all_targets!(v),
        Source::I64(v) => check_all_targets!(v),
        Source::Isize(v) => check_all_targets!(v),
        Source::U8(v) => check_all_targets!(v),
        Source::U16(v) => check_all_targets!(v),
        Source::U32(v) => check_all_targets!(v),
        Source::U64(v) => check_all_targets!(v),
        Source::Usize(v) => check_all_targets!(v),
    }
});
