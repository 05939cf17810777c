//! Kani verification harnesses for the checked operations
//!
//! Each proof quantifies over every operand of a kind and shows that the
//! checked function never panics (no `MIN / -1` fault, no division by zero)
//! and agrees with the std `checked_*` primitives.
//!
//! # Running Proofs
//!
//! ```bash
//! # Verify all proofs
//! cargo kani --package safemath
//!
//! # Verify specific proof
//! cargo kani --harness verify_mul_i64
//! ```

#[cfg(kani)]
mod verification {
    use crate::{ArithError, add, convert, div, mul, sub};

    macro_rules! arithmetic_proofs {
        ($($t:ty => $add:ident, $sub:ident, $mul:ident, $div:ident;)*) => {
            $(
                #[kani::proof]
                fn $add() {
                    let a: $t = kani::any();
                    let b: $t = kani::any();
                    assert_eq!(add(a, b).ok(), a.checked_add(b));
                }

                #[kani::proof]
                fn $sub() {
                    let a: $t = kani::any();
                    let b: $t = kani::any();
                    assert_eq!(sub(a, b).ok(), a.checked_sub(b));
                }

                #[kani::proof]
                fn $mul() {
                    let a: $t = kani::any();
                    let b: $t = kani::any();
                    let result = mul(a, b);
                    assert_eq!(result.ok(), a.checked_mul(b));
                    if let Err(err) = result {
                        assert_eq!(err, ArithError::Overflow);
                    }
                }

                #[kani::proof]
                fn $div() {
                    let a: $t = kani::any();
                    let b: $t = kani::any();
                    match div(a, b) {
                        Ok(q) => assert_eq!(Some(q), a.checked_div(b)),
                        Err(ArithError::DivisionByZero) => assert_eq!(b, 0),
                        Err(ArithError::Overflow) => {
                            assert_eq!(a, <$t>::MIN);
                            assert!(a.checked_div(b).is_none() && b != 0);
                        }
                        Err(_) => unreachable!("div only fails with DivisionByZero or Overflow"),
                    }
                }
            )*
        };
    }

    arithmetic_proofs! {
        i8 => verify_add_i8, verify_sub_i8, verify_mul_i8, verify_div_i8;
        u8 => verify_add_u8, verify_sub_u8, verify_mul_u8, verify_div_u8;
        i32 => verify_add_i32, verify_sub_i32, verify_mul_i32, verify_div_i32;
        i64 => verify_add_i64, verify_sub_i64, verify_mul_i64, verify_div_i64;
        u64 => verify_add_u64, verify_sub_u64, verify_mul_u64, verify_div_u64;
    }

    /// **Proof: conversion agrees with std's lossless `TryFrom`**
    #[kani::proof]
    fn verify_convert_i64_to_u32() {
        let v: i64 = kani::any();
        assert_eq!(convert::<u32, i64>(v).ok(), u32::try_from(v).ok());
    }

    #[kani::proof]
    fn verify_convert_u64_to_i64() {
        let v: u64 = kani::any();
        assert_eq!(convert::<i64, u64>(v).ok(), i64::try_from(v).ok());
    }

    #[kani::proof]
    fn verify_convert_isize_to_usize() {
        let v: isize = kani::any();
        let result = convert::<usize, isize>(v);
        assert_eq!(result.ok(), usize::try_from(v).ok());
        if let Ok(u) = result {
            assert_eq!(convert::<isize, usize>(u), Ok(v));
        }
    }
}
