#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use safemath::{ArithError, add, div, mul, must_add, must_div, must_mul, must_sub, sub};

// ============================================================================
// Arbitrary Inputs
// ============================================================================

/// One operand pair in each kind the fuzzer exercises.
#[derive(Debug, Arbitrary)]
enum Operands {
    I8(i8, i8),
    I32(i32, i32),
    I64(i64, i64),
    Isize(isize, isize),
    U8(u8, u8),
    U64(u64, u64),
    Usize(usize, usize),
}

macro_rules! check_kind {
    ($a:expr, $b:expr) => {{
        let (a, b) = ($a, $b);

        assert_eq!(add(a, b).ok(), a.checked_add(b));
        assert_eq!(sub(a, b).ok(), a.checked_sub(b));
        assert_eq!(mul(a, b).ok(), a.checked_mul(b));
        assert_eq!(div(a, b).ok(), a.checked_div(b));
        if b == 0 {
            assert_eq!(div(a, b), Err(ArithError::DivisionByZero));
        }

        // libFuzzer aborts on any panic, so the wrappers only run where the
        // checked form succeeds. Failing inputs are covered by the proptests.
        if let Ok(c) = add(a, b) {
            assert_eq!(must_add(a, b), c);
        }
        if let Ok(c) = sub(a, b) {
            assert_eq!(must_sub(a, b), c);
        }
        if let Ok(c) = mul(a, b) {
            assert_eq!(must_mul(a, b), c);
        }
        if let Ok(c) = div(a, b) {
            assert_eq!(must_div(a, b), c);
        }
    }};
}

fuzz_target!(|operands: Operands| {
    match operands {
        Operands::I8(a, b) => check_kind!(a, b),
        Operands::I32(a, b) => check_kind!(a, b),
        Operands::I64(a, b) => check_kind!(a, b),
        Operands::Isize(a, b) => check_kind!(a, b),
        Operands::U8(a, b) => check_kind!(a, b),
        Operands::U64(a, b) => check_kind!(a, b),
        Operands::Usize(a, b) => check_kind!(a, b),
    }
});
