//! Conversion of values whose integer kind is only known at runtime.
//!
//! [`AnyInt`] is the closed set of supported kinds. Type-erased values
//! (`&dyn Any`) are first narrowed into it; anything outside the set is
//! rejected with [`ArithError::InvalidType`] before any arithmetic runs.

use std::any::Any;
use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::convert::convert;
use crate::error::{ArithError, Result};
use crate::kind::{IntKind, Integer};

/// An integer tagged with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AnyInt {
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

macro_rules! any_int_variants {
    ($($variant:ident($t:ty)),* $(,)?) => {
        $(
            impl From<$t> for AnyInt {
                fn from(value: $t) -> Self {
                    AnyInt::$variant(value)
                }
            }
        )*

        impl AnyInt {
            /// Narrows a type-erased value into the supported set.
            ///
            /// ```
            /// use safemath::{AnyInt, ArithError};
            ///
            /// assert_eq!(AnyInt::from_any(&7u16), Ok(AnyInt::U16(7)));
            /// assert_eq!(AnyInt::from_any(&7i128), Err(ArithError::InvalidType));
            /// assert_eq!(AnyInt::from_any(&"7"), Err(ArithError::InvalidType));
            /// ```
            pub fn from_any(value: &dyn Any) -> Result<Self> {
                $(
                    if let Some(v) = value.downcast_ref::<$t>() {
                        return Ok(AnyInt::$variant(*v));
                    }
                )*

                tracing::debug!(type_id = ?value.type_id(), "rejected non-integer value");
                Err(ArithError::InvalidType)
            }

            /// The kind of the wrapped value.
            pub fn kind(self) -> IntKind {
                match self {
                    $( AnyInt::$variant(_) => <$t as Integer>::KIND, )*
                }
            }
        }

        impl Display for AnyInt {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $( AnyInt::$variant(v) => write!(f, "{v}{}", self.kind()), )*
                }
            }
        }
    };
}

any_int_variants! {
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

impl<'a> TryFrom<&'a dyn Any> for AnyInt {
    type Error = ArithError;

    fn try_from(value: &'a dyn Any) -> Result<Self> {
        AnyInt::from_any(value)
    }
}

/// Converts a kind-tagged value into `Dst`, dispatching to [`convert`] with
/// the concrete source kind.
///
/// ```
/// use safemath::{AnyInt, ArithError, convert_any};
///
/// assert_eq!(convert_any::<u8>(AnyInt::I64(42)), Ok(42));
/// assert_eq!(convert_any::<u8>(AnyInt::from(-1i32)), Err(ArithError::Truncation));
/// ```
pub fn convert_any<Dst: Integer>(value: AnyInt) -> Result<Dst> {
    match value {
        AnyInt::I8(v) => convert(v),
        AnyInt::I16(v) => convert(v),
        AnyInt::I32(v) => convert(v),
        AnyInt::I64(v) => convert(v),
        AnyInt::Isize(v) => convert(v),
        AnyInt::U8(v) => convert(v),
        AnyInt::U16(v) => convert(v),
        AnyInt::U32(v) => convert(v),
        AnyInt::U64(v) => convert(v),
        AnyInt::Usize(v) => convert(v),
    }
}

/// Converts a type-erased value into `Dst`.
///
/// Fails with [`ArithError::InvalidType`] if `value` is not one of the
/// supported integer kinds, and otherwise behaves exactly like
/// [`convert`] on the concrete value.
///
/// A `Box<dyn Any>` must be passed as `&*boxed`: `&boxed` erases the box
/// itself, which is not an integer kind.
///
/// ```
/// use safemath::{ArithError, convert_dyn};
///
/// let values: [&dyn std::any::Any; 3] = [&300u16, &12i8, &1.5f64];
/// assert_eq!(convert_dyn::<u8>(values[0]), Err(ArithError::Truncation));
/// assert_eq!(convert_dyn::<u8>(values[1]), Ok(12));
/// assert_eq!(convert_dyn::<u8>(values[2]), Err(ArithError::InvalidType));
///
/// let boxed: Box<dyn std::any::Any> = Box::new(7u32);
/// assert_eq!(convert_dyn::<u8>(&*boxed), Ok(7));
/// assert_eq!(convert_dyn::<u8>(&boxed), Err(ArithError::InvalidType));
/// ```
pub fn convert_dyn<Dst: Integer>(value: &dyn Any) -> Result<Dst> {
    convert_any(AnyInt::from_any(value)?)
}
