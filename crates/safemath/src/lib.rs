//! # safemath: Overflow-safe integer arithmetic
//!
//! Checked `+ - * /` and lossless conversions across every primitive
//! integer kind up to 64 bits (`i8`..`i64`, `u8`..`u64`, `isize`, `usize`).
//!
//! ## Key Principles
//!
//! - **No widening**: overflow is detected within the operand width, so
//!   `i64` and `u64` are checked the same way as `i8`
//! - **No faults**: `MIN / -1` and `MIN * -1` are reported as
//!   [`ArithError::Overflow`], never executed
//! - **No coercion**: a failure is always returned, never saturated or wrapped
//! - **Pure functions**: no state, no I/O, safe to call from any thread
//!
//! ## Architecture
//!
//! - [`kind`]: the [`Integer`] trait, [`IntKind`] and the signedness classifier
//! - [`arith`]: [`add`], [`sub`], [`mul`], [`div`]
//! - [`convert`](mod@convert): [`convert()`] between any two kinds
//! - [`dynamic`]: [`AnyInt`], [`convert_any`] and [`convert_dyn`] for
//!   runtime-typed values
//! - [`must`]: panicking wrappers (`must_add`, ...) for call sites that treat
//!   failure as a bug
//!
//! ## Example
//!
//! ```
//! use safemath::{ArithError, add, convert, div, mul};
//!
//! assert_eq!(add(10, 20), Ok(30));
//! assert_eq!(mul(i8::MAX, 2), Err(ArithError::Overflow));
//! assert_eq!(div(100, 0), Err(ArithError::DivisionByZero));
//! assert_eq!(convert::<i8, _>(200i32), Err(ArithError::Truncation));
//! ```
//!
//! ## Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` for [`ArithError`],
//!   [`IntKind`], [`Signedness`] and [`AnyInt`]

pub mod arith;
pub mod convert;
pub mod dynamic;
pub mod error;
pub mod kind;
pub mod must;


// Kani verification harnesses for bounded model checking
#[cfg(kani)]
mod kani_proofs;

pub use arith::{add, div, mul, sub};
pub use convert::convert;
pub use dynamic::{AnyInt, convert_any, convert_dyn};
pub use error::{ArithError, Result};
pub use kind::{IntKind, Integer, Signedness, is_signed};
pub use must::{
    must_add, must_convert, must_convert_any, must_convert_dyn, must_div, must_mul, must_sub,
};
