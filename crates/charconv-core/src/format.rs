//! IEEE-754 format descriptors.
//!
//! Each binary float width gets a zero-sized marker type implementing [`FloatFormat`],
//! exposing the constants and extractor functions spec'd in ยง4.1. Parameterizing
//! Dragonbox/Ryu/Lemire over this trait is how this crate stays generic over
//! binary32/binary64/binary80/binary128 without four copies of each algorithm.

/// A carrier integer wide enough to hold one float's bit pattern.
pub trait Carrier:
    Copy
    + Eq
    + Ord
    + core::ops::BitAnd<Output = Self>
    + core::ops::BitOr<Output = Self>
    + core::ops::Shl<u32, Output = Self>
    + core::ops::Shr<u32, Output = Self>
    + core::ops::Not<Output = Self>
{
    /// The all-zero value.
    const ZERO: Self;
    /// The all-one value.
    const ONE: Self;

    /// Widen to `u128`.
    fn to_u128(self) -> u128;
    /// Narrow from `u128`, truncating high bits.
    fn from_u128(value: u128) -> Self;
}

macro_rules! impl_carrier {
    ($($ty:ty),*) => {
        $(
            impl Carrier for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn to_u128(self) -> u128 {
                    self as u128
                }

                fn from_u128(value: u128) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

impl_carrier!(u32, u64, u128);

/// Describes one IEEE-754 binary float width and the pure bit-field accessors for it.
///
/// Mirrors Boost.charconv's `default_float_traits<T>`: everything here is a pure
/// function of the carrier bits, no state, no allocation.
pub trait FloatFormat: Copy {
    /// The unsigned integer type wide enough to hold this format's bit pattern.
    type Carrier: Carrier;

    /// Width of the significand field, excluding any implicit leading bit.
    const SIGNIFICAND_BITS: u32;
    /// Width of the exponent field.
    const EXPONENT_BITS: u32;
    /// Bias subtracted from the raw exponent field to obtain the unbiased exponent.
    const EXPONENT_BIAS: i32;
    /// Smallest representable unbiased exponent (subnormals included).
    const MIN_EXPONENT: i32;
    /// Largest representable unbiased exponent (normals only; excludes inf/NaN).
    const MAX_EXPONENT: i32;
    /// Maximum number of significant decimal digits needed to round-trip this format.
    const DECIMAL_DIGITS: u32;
    /// Bit index of the sign bit.
    const SIGN_INDEX: u32;
    /// True for formats (binary80) whose leading integer bit is stored explicitly
    /// rather than implied.
    const HAS_EXPLICIT_LEADING_BIT: bool;

    /// Size of a buffer sufficient for any format/precision combination
    /// (`digits10 + exponent_digits + 6`, per ยง6.3).
    const MAX_CHARS: usize;
    /// Size of a buffer sufficient for any of the four decimal/hex text formats.
    const MAX_CHARS10: usize;

    /// Total width in bits of the carrier (sign + exponent + significand).
    fn carrier_bits() -> u32 {
        Self::EXPONENT_BITS + Self::SIGNIFICAND_BITS + 1
    }
}

/// Binary32 (IEEE single precision).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binary32;

impl FloatFormat for Binary32 {
    type Carrier = u32;
    const SIGNIFICAND_BITS: u32 = 23;
    const EXPONENT_BITS: u32 = 8;
    const EXPONENT_BIAS: i32 = 1 - (1 << (32 - 23 - 2));
    const MIN_EXPONENT: i32 = Self::EXPONENT_BIAS;
    const MAX_EXPONENT: i32 = (1 << Self::EXPONENT_BITS) - 2 + Self::EXPONENT_BIAS;
    const DECIMAL_DIGITS: u32 = 9;
    const SIGN_INDEX: u32 = 31;
    const HAS_EXPLICIT_LEADING_BIT: bool = false;
    const MAX_CHARS: usize = 11;
    const MAX_CHARS10: usize = 11;
}

/// Binary64 (IEEE double precision).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binary64;

impl FloatFormat for Binary64 {
    type Carrier = u64;
    const SIGNIFICAND_BITS: u32 = 52;
    const EXPONENT_BITS: u32 = 11;
    const EXPONENT_BIAS: i32 = 1 - (1 << (64 - 52 - 2));
    const MIN_EXPONENT: i32 = Self::EXPONENT_BIAS;
    const MAX_EXPONENT: i32 = (1 << Self::EXPONENT_BITS) - 2 + Self::EXPONENT_BIAS;
    const DECIMAL_DIGITS: u32 = 17;
    const SIGN_INDEX: u32 = 63;
    const HAS_EXPLICIT_LEADING_BIT: bool = false;
    const MAX_CHARS: usize = 26;
    const MAX_CHARS10: usize = 26;
}

/// Binary80 (x87 extended precision), carried in a `u128` with the top 48 bits unused.
///
/// Unlike binary32/binary64, the leading integer bit of the significand is stored
/// explicitly rather than implied, per ยง4.1's caveat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binary80;

impl FloatFormat for Binary80 {
    type Carrier = u128;
    const SIGNIFICAND_BITS: u32 = 64;
    const EXPONENT_BITS: u32 = 15;
    const EXPONENT_BIAS: i32 = 1 - (1 << (15 - 1));
    const MIN_EXPONENT: i32 = Self::EXPONENT_BIAS;
    const MAX_EXPONENT: i32 = (1 << Self::EXPONENT_BITS) - 2 + Self::EXPONENT_BIAS;
    const DECIMAL_DIGITS: u32 = 21;
    const SIGN_INDEX: u32 = 79;
    const HAS_EXPLICIT_LEADING_BIT: bool = true;
    const MAX_CHARS: usize = 29;
    const MAX_CHARS10: usize = 29;
}

/// Binary128 (IEEE quadruple precision), carried in a `u128`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binary128;

impl FloatFormat for Binary128 {
    type Carrier = u128;
    const SIGNIFICAND_BITS: u32 = 112;
    const EXPONENT_BITS: u32 = 15;
    const EXPONENT_BIAS: i32 = 1 - (1 << (128 - 112 - 2));
    const MIN_EXPONENT: i32 = Self::EXPONENT_BIAS;
    const MAX_EXPONENT: i32 = (1 << Self::EXPONENT_BITS) - 2 + Self::EXPONENT_BIAS;
    const DECIMAL_DIGITS: u32 = 36;
    const SIGN_INDEX: u32 = 127;
    const HAS_EXPLICIT_LEADING_BIT: bool = false;
    const MAX_CHARS: usize = 41;
    const MAX_CHARS10: usize = 41;
}
