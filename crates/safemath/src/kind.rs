//! Integer kinds and the signedness classifier.
//!
//! An integer kind is a (signedness, width) pair. The [`Integer`] trait is
//! implemented for exactly the ten primitive kinds this crate supports, and
//! every checked operation is generic over it, so each kind gets its own
//! monomorphized copy with no runtime kind dispatch.

use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::ops::{Div, Not};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use crate::error::ArithError;

#[cfg(not(any(
    target_pointer_width = "16",
    target_pointer_width = "32",
    target_pointer_width = "64"
)))]
compile_error!("safemath supports native integer widths of at most 64 bits");

/// Whether an integer kind can represent negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Signedness {
    Signed,
    Unsigned,
}

/// Describes one integer kind: its signedness and width in bits.
///
/// Native kinds (`isize`, `usize`) are kept distinct from the fixed-width
/// kind of the same size so that `isize` and `i64` never compare equal.
///
/// Deserialization only accepts the members of [`IntKind::ALL`]; any other
/// (signedness, width) combination fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawIntKind"))]
pub struct IntKind {
    signedness: Signedness,
    bits: u32,
    native: bool,
}

impl IntKind {
    /// Width of the platform's pointer-sized integers.
    pub const NATIVE_BITS: u32 = usize::BITS;

    pub const I8: IntKind = IntKind::fixed(Signedness::Signed, 8);
    pub const I16: IntKind = IntKind::fixed(Signedness::Signed, 16);
    pub const I32: IntKind = IntKind::fixed(Signedness::Signed, 32);
    pub const I64: IntKind = IntKind::fixed(Signedness::Signed, 64);
    pub const ISIZE: IntKind = IntKind::native(Signedness::Signed);
    pub const U8: IntKind = IntKind::fixed(Signedness::Unsigned, 8);
    pub const U16: IntKind = IntKind::fixed(Signedness::Unsigned, 16);
    pub const U32: IntKind = IntKind::fixed(Signedness::Unsigned, 32);
    pub const U64: IntKind = IntKind::fixed(Signedness::Unsigned, 64);
    pub const USIZE: IntKind = IntKind::native(Signedness::Unsigned);

    /// Every supported kind, signed kinds first.
    pub const ALL: [IntKind; 10] = [
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::ISIZE,
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::USIZE,
    ];

    const fn fixed(signedness: Signedness, bits: u32) -> Self {
        Self {
            signedness,
            bits,
            native: false,
        }
    }

    const fn native(signedness: Signedness) -> Self {
        Self {
            signedness,
            bits: Self::NATIVE_BITS,
            native: true,
        }
    }

    pub const fn signedness(self) -> Signedness {
        self.signedness
    }

    pub const fn is_signed(self) -> bool {
        matches!(self.signedness, Signedness::Signed)
    }

    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// Returns `true` for the pointer-sized kinds.
    pub const fn is_native(self) -> bool {
        self.native
    }
}

/// Unvalidated wire form of [`IntKind`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawIntKind {
    signedness: Signedness,
    bits: u32,
    native: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawIntKind> for IntKind {
    type Error = ArithError;

    fn try_from(raw: RawIntKind) -> Result<Self, Self::Error> {
        let kind = IntKind {
            signedness: raw.signedness,
            bits: raw.bits,
            native: raw.native,
        };
        if IntKind::ALL.contains(&kind) {
            Ok(kind)
        } else {
            Err(ArithError::InvalidType)
        }
    }
}

impl Display for IntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.is_signed() { 'i' } else { 'u' };
        if self.native {
            write!(f, "{prefix}size")
        } else {
            write!(f, "{prefix}{}", self.bits)
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A primitive integer kind supported by the checked operations.
///
/// This trait is sealed: it is implemented for `i8`, `i16`, `i32`, `i64`,
/// `isize`, `u8`, `u16`, `u32`, `u64` and `usize` only.
pub trait Integer:
    sealed::Sealed
    + Copy
    + Eq
    + Ord
    + Hash
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + 'static
    + Not<Output = Self>
    + Div<Output = Self>
{
    const ZERO: Self;
    /// Most-negative value for signed kinds, zero for unsigned kinds.
    const MIN: Self;
    const MAX: Self;
    const KIND: IntKind;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Extends `self` to 64 bits the way `as u64` would after an `as i64`
    /// (signed kinds) or directly (unsigned kinds).
    ///
    /// Paired with [`Integer::from_cast_bits`] this reproduces the native
    /// `as` cast between any two supported kinds.
    fn to_cast_bits(self) -> u64;

    /// Keeps the low `Self::KIND.bits()` bits of `bits`.
    fn from_cast_bits(bits: u64) -> Self;
}

macro_rules! impl_integer {
    (signed: $($t:ty => $kind:expr),* $(,)?) => {
        $( impl_integer!(@common $t, $kind, |v: $t| v as i64 as u64); )*
    };
    (unsigned: $($t:ty => $kind:expr),* $(,)?) => {
        $( impl_integer!(@common $t, $kind, |v: $t| v as u64); )*
    };
    (@common $t:ty, $kind:expr, $extend:expr) => {
        impl sealed::Sealed for $t {}

        impl Integer for $t {
            const ZERO: Self = 0;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const KIND: IntKind = $kind;

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }

            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$t>::wrapping_mul(self, rhs)
            }

            #[inline]
            fn to_cast_bits(self) -> u64 {
                ($extend)(self)
            }

            #[inline]
            fn from_cast_bits(bits: u64) -> Self {
                bits as $t
            }
        }
    };
}

impl_integer!(signed:
    i8 => IntKind::I8,
    i16 => IntKind::I16,
    i32 => IntKind::I32,
    i64 => IntKind::I64,
    isize => IntKind::ISIZE,
);

impl_integer!(unsigned:
    u8 => IntKind::U8,
    u16 => IntKind::U16,
    u32 => IntKind::U32,
    u64 => IntKind::U64,
    usize => IntKind::USIZE,
);

/// Reports whether `T` is a signed kind.
///
/// The complement of zero is `-1` in a signed two's-complement kind and the
/// maximum value in an unsigned kind, so only signed kinds see it as
/// negative. The check is monomorphized per kind and folds to a constant.
///
/// ```
/// assert!(safemath::is_signed::<i32>());
/// assert!(!safemath::is_signed::<usize>());
/// ```
#[inline]
pub fn is_signed<T: Integer>() -> bool {
    !T::ZERO < T::ZERO
}

/// Performs the native `as` cast from `Src` to `Dst`, wrapping or
/// sign-extending exactly as the primitive cast would.
#[inline]
pub(crate) fn wrapping_cast<Dst: Integer, Src: Integer>(v: Src) -> Dst {
    Dst::from_cast_bits(v.to_cast_bits())
}
