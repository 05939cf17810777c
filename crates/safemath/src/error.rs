//! Failure reasons reported by the checked operations.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a checked operation could not produce an exact result.
///
/// Each variant is a stable sentinel: callers compare against it directly
/// to branch on the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArithError {
    /// The exact result lies outside the operand kind's range. Covers
    /// underflow and the most-negative / `-1` cases of `mul` and `div`.
    #[error("integer overflow/underflow")]
    Overflow,

    /// A conversion would not reproduce the original value, either because
    /// the sign cannot be represented or because magnitude bits were lost.
    #[error("integer type truncation")]
    Truncation,

    /// The divisor of `div` is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A type-erased input is not one of the supported integer kinds.
    #[error("unsupported integer type")]
    InvalidType,
}

/// Result alias used by every checked operation.
pub type Result<T, E = ArithError> = std::result::Result<T, E>;
