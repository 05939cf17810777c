//! Checked arithmetic within a single integer kind.
//!
//! None of these functions widen to a larger type: `i64` and `u64` are
//! already the widest supported kinds. Overflow is detected from operand and
//! result signs (`add`, `sub`), by trial division (`mul`), or by ruling out
//! the single unrepresentable quotient (`div`).

use crate::error::{ArithError, Result};
use crate::kind::{Integer, is_signed};

/// Returns `a + b`, or [`ArithError::Overflow`] if the exact sum does not
/// fit in `T`.
///
/// ```
/// use safemath::{ArithError, add};
///
/// assert_eq!(add(10, 20), Ok(30));
/// assert_eq!(add(i8::MAX, 1), Err(ArithError::Overflow));
/// assert_eq!(add(u8::MAX, 1), Err(ArithError::Overflow));
/// ```
#[inline]
pub fn add<T: Integer>(a: T, b: T) -> Result<T> {
    let c = a.wrapping_add(b);

    let overflowed = if is_signed::<T>() {
        // Operands share a sign and the wrapped sum does not.
        let (a_neg, b_neg, c_neg) = (a < T::ZERO, b < T::ZERO, c < T::ZERO);
        a_neg == b_neg && c_neg != a_neg
    } else {
        c < a
    };

    if overflowed {
        return Err(ArithError::Overflow);
    }
    Ok(c)
}

/// Returns `a - b`, or [`ArithError::Overflow`] if the exact difference does
/// not fit in `T`.
///
/// ```
/// use safemath::{ArithError, sub};
///
/// assert_eq!(sub(100, 30), Ok(70));
/// assert_eq!(sub(i8::MIN, 1), Err(ArithError::Overflow));
/// assert_eq!(sub(3u32, 4), Err(ArithError::Overflow));
/// ```
#[inline]
pub fn sub<T: Integer>(a: T, b: T) -> Result<T> {
    let c = a.wrapping_sub(b);

    let overflowed = if is_signed::<T>() {
        // Operands differ in sign and the result's sign left the minuend's.
        let (a_neg, b_neg, c_neg) = (a < T::ZERO, b < T::ZERO, c < T::ZERO);
        a_neg != b_neg && c_neg != a_neg
    } else {
        a < b
    };

    if overflowed {
        return Err(ArithError::Overflow);
    }
    Ok(c)
}

/// Returns `a * b`, or [`ArithError::Overflow`] if the exact product does
/// not fit in `T`.
///
/// `MIN * -1` is rejected before the trial division, since verifying it
/// would require `MIN / -1`, which faults.
///
/// ```
/// use safemath::{ArithError, mul};
///
/// assert_eq!(mul(10, 10), Ok(100));
/// assert_eq!(mul(i8::MAX, 2), Err(ArithError::Overflow));
/// assert_eq!(mul(-1i8, i8::MIN), Err(ArithError::Overflow));
/// ```
#[inline]
pub fn mul<T: Integer>(a: T, b: T) -> Result<T> {
    if a == T::ZERO || b == T::ZERO {
        return Ok(T::ZERO);
    }

    if is_signed::<T>() {
        let minus_one = !T::ZERO;
        if (a == minus_one && b == T::MIN) || (b == minus_one && a == T::MIN) {
            return Err(ArithError::Overflow);
        }
    }

    let c = a.wrapping_mul(b);

    // `a` is non-zero, and `c == MIN` with `a == -1` implies `b == MIN`,
    // which was rejected above.
    if c / a != b {
        return Err(ArithError::Overflow);
    }
    Ok(c)
}

/// Returns the quotient `a / b` rounded toward zero.
///
/// Fails with [`ArithError::DivisionByZero`] when `b == 0`, and with
/// [`ArithError::Overflow`] for `MIN / -1` in signed kinds. No other input
/// can overflow.
///
/// ```
/// use safemath::{ArithError, div};
///
/// assert_eq!(div(100, 4), Ok(25));
/// assert_eq!(div(-7, 2), Ok(-3));
/// assert_eq!(div(100, 0), Err(ArithError::DivisionByZero));
/// assert_eq!(div(i64::MIN, -1), Err(ArithError::Overflow));
/// ```
#[inline]
pub fn div<T: Integer>(a: T, b: T) -> Result<T> {
    if b == T::ZERO {
        return Err(ArithError::DivisionByZero);
    }

    if is_signed::<T>() && b == !T::ZERO && a == T::MIN {
        return Err(ArithError::Overflow);
    }

    Ok(a / b)
}
