//! Lossless conversion between integer kinds.

use crate::error::{ArithError, Result};
use crate::kind::{Integer, is_signed, wrapping_cast};

/// Converts `v` from `Src` to `Dst`, failing with [`ArithError::Truncation`]
/// unless the value is exactly representable in `Dst`.
///
/// The sign checks run before the round-trip comparison: a same-width cast
/// such as `u64 -> i64` round-trips bit-for-bit even when it flips the sign.
///
/// ```
/// use safemath::{ArithError, convert};
///
/// assert_eq!(convert::<u8, _>(42i64), Ok(42));
/// assert_eq!(convert::<i8, _>(200u32), Err(ArithError::Truncation));
/// assert_eq!(convert::<usize, _>(-1i32), Err(ArithError::Truncation));
/// assert_eq!(convert::<i64, _>(u64::MAX), Err(ArithError::Truncation));
/// ```
#[inline]
pub fn convert<Dst: Integer, Src: Integer>(v: Src) -> Result<Dst> {
    let to: Dst = wrapping_cast(v);

    let src_signed = is_signed::<Src>();
    let dst_signed = is_signed::<Dst>();

    if src_signed && !dst_signed && v < Src::ZERO {
        return Err(ArithError::Truncation);
    }

    if !src_signed && dst_signed && to < Dst::ZERO {
        return Err(ArithError::Truncation);
    }

    let back: Src = wrapping_cast(to);
    if back != v {
        return Err(ArithError::Truncation);
    }

    Ok(to)
}
