//! Panicking counterparts of the checked operations.
//!
//! For call sites where a failed operation is a programming error. Each
//! wrapper forwards to its checked function; on failure it logs the reason
//! and panics with the [`ArithError`] itself as the payload, so a
//! `std::panic::catch_unwind` boundary can recover the exact reason:
//!
//! ```
//! use safemath::{ArithError, must_add};
//!
//! let payload = std::panic::catch_unwind(|| must_add(i32::MAX, 1)).unwrap_err();
//! assert_eq!(payload.downcast_ref::<ArithError>(), Some(&ArithError::Overflow));
//! ```

use std::any::Any;
use std::panic::Location;

use crate::arith::{add, div, mul, sub};
use crate::convert::convert;
use crate::dynamic::{AnyInt, convert_any, convert_dyn};
use crate::error::{ArithError, Result};
use crate::kind::Integer;

#[cold]
#[track_caller]
fn raise(op: &'static str, err: ArithError) -> ! {
    let location = Location::caller();
    tracing::error!(op, error = %err, %location, "checked integer operation failed");
    std::panic::panic_any(err)
}

#[inline]
#[track_caller]
fn must<T>(op: &'static str, result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => raise(op, err),
    }
}

/// Like [`add`], but panics with the [`ArithError`] on failure.
#[track_caller]
pub fn must_add<T: Integer>(a: T, b: T) -> T {
    must("add", add(a, b))
}

/// Like [`sub`], but panics with the [`ArithError`] on failure.
#[track_caller]
pub fn must_sub<T: Integer>(a: T, b: T) -> T {
    must("sub", sub(a, b))
}

/// Like [`mul`], but panics with the [`ArithError`] on failure.
#[track_caller]
pub fn must_mul<T: Integer>(a: T, b: T) -> T {
    must("mul", mul(a, b))
}

/// Like [`div`], but panics with the [`ArithError`] on failure.
#[track_caller]
pub fn must_div<T: Integer>(a: T, b: T) -> T {
    must("div", div(a, b))
}

/// Like [`convert`], but panics with the [`ArithError`] on failure.
#[track_caller]
pub fn must_convert<Dst: Integer, Src: Integer>(v: Src) -> Dst {
    must("convert", convert(v))
}

/// Like [`convert_any`], but panics with the [`ArithError`] on failure.
#[track_caller]
pub fn must_convert_any<Dst: Integer>(value: AnyInt) -> Dst {
    must("convert_any", convert_any(value))
}

/// Like [`convert_dyn`], but panics with the [`ArithError`] on failure.
#[track_caller]
pub fn must_convert_dyn<Dst: Integer>(value: &dyn Any) -> Dst {
    must("convert_dyn", convert_dyn(value))
}
