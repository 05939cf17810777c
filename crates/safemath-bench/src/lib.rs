//! # safemath-bench: Performance benchmarks for safemath
//!
//! Compares the checked operations against the std `checked_*` and
//! `TryFrom` primitives on the same inputs.
//!
//! ## Benchmarks
//!
//! - **arith**: `add`, `sub`, `mul`, `div` per kind, on the happy path and
//!   on overflowing inputs
//! - **convert**: `convert`, `convert_any` and `convert_dyn`
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench -p safemath-bench
//!
//! # Run specific benchmark
//! cargo bench -p safemath-bench --bench arith
//!
//! # Save baseline for comparison
//! cargo bench -p safemath-bench --bench arith -- --save-baseline main
//! ```

use safemath::Integer;

/// Operand pairs mixing ordinary values with each kind's extremes.
///
/// Every pair is paired with its mirror, so both operand orders of the
/// `MIN * -1` case are present for signed kinds.
pub fn operand_pairs<T: Integer>() -> Vec<(T, T)> {
    let one = T::from_cast_bits(1);
    let seven = T::from_cast_bits(7);
    let minus_one = !T::ZERO;
    let values = [T::ZERO, one, seven, minus_one, T::MIN, T::MAX];

    let mut pairs = Vec::with_capacity(values.len() * values.len());
    for &a in &values {
        for &b in &values {
            pairs.push((a, b));
        }
    }
    pairs
}

/// Operand pairs on which none of the four operations fail, in any kind.
pub fn happy_pairs<T: Integer>() -> Vec<(T, T)> {
    [(12u64, 3u64), (42, 2), (11, 11), (9, 2), (8, 4)]
        .into_iter()
        .map(|(a, b)| (T::from_cast_bits(a), T::from_cast_bits(b)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operand_pairs_cover_the_min_times_minus_one_case() {
        let pairs = operand_pairs::<i32>();
        assert!(pairs.contains(&(i32::MIN, -1)));
        assert!(pairs.contains(&(-1, i32::MIN)));
    }

    #[test]
    fn happy_pairs_never_fail() {
        for (a, b) in happy_pairs::<i8>() {
            assert!(safemath::add(a, b).is_ok());
            assert!(safemath::sub(a, b).is_ok());
            assert!(safemath::mul(a, b).is_ok());
            assert!(safemath::div(a, b).is_ok());
        }
        for (a, b) in happy_pairs::<u8>() {
            assert!(safemath::sub(a, b).is_ok());
            assert!(safemath::mul(a, b).is_ok());
        }
    }
}
