//! Locale-independent, allocation-free, bit-exact conversions between IEEE 754
//! floating point numbers and their shortest round-tripping decimal text
//! representation (§1, §10.1).
//!
//! [`to_chars`] renders a value into one of four textual formats — [`Format::Scientific`],
//! [`Format::Fixed`], [`Format::General`], [`Format::Hex`] — choosing, when no `precision`
//! is given, the shortest decimal string that reads back to the same bit pattern.
//! [`from_chars`] is the inverse: the shortest-round-trip guarantee means `to_chars`
//! followed by `from_chars` is the identity for every finite value.
//!
//! `f32` and `f64` are implemented directly. `Binary80` and `Binary128` are newtypes
//! carrying the raw bit pattern, since neither width has a native Rust type.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

mod dec2flt;
pub mod emitter;
pub mod error;
mod parser;

use charconv_core::bits::BinaryFloatView;
use charconv_core::format::{Binary128 as Binary128Format, Binary64, Binary80 as Binary80Format, FloatFormat};
use charconv_core::policy::BinaryToDecimalRoundingPolicy;
use charconv_dragonbox::{to_decimal as dragonbox_to_decimal, RoundingMode};

pub use error::Error;

/// Which textual representation [`to_chars`] should produce (§4.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `[-]D.DDDDeSDD`, exponent always signed with at least two digits.
    Scientific,
    /// `[-]DDDD.DDDD`, no exponent.
    Fixed,
    /// Whichever of `Scientific`/`Fixed` is shorter, matching C's `%g`.
    General,
    /// IEEE hex-float: `[-]1.hhhhp±dd` for normals, `0.hhhhp-EMIN+1` for subnormals.
    Hex,
}

/// A value that [`to_chars`] can render.
pub trait ToChars: Sized {
    /// Render `self` into `buf`, returning the number of bytes written.
    ///
    /// `precision` rounds to that many digits; `None` emits the shortest decimal
    /// string that reads back to the same bit pattern (or, for [`Format::Hex`], every
    /// significand bit exactly — hex-float has no shortest-form ambiguity to resolve).
    fn to_chars(&self, buf: &mut [u8], format: Format, precision: Option<usize>) -> Result<usize, Error>;
}

/// A value that [`from_chars`] can parse.
pub trait FromChars: Sized {
    /// Parse a value from the prefix of `input`, returning it along with how many
    /// bytes of `input` were consumed.
    fn from_chars(input: &[u8], format: Format) -> Result<(Self, usize), Error>;
}

/// Render `value` into `buf` as `format`, returning the number of bytes written.
pub fn to_chars<F: ToChars>(buf: &mut [u8], value: F, format: Format, precision: Option<usize>) -> Result<usize, Error> {
    value.to_chars(buf, format, precision)
}

/// Parse a value of type `F` from the prefix of `input`, returning it along with the
/// number of bytes consumed.
pub fn from_chars<F: FromChars>(input: &[u8], format: Format) -> Result<(F, usize), Error> {
    F::from_chars(input, format)
}

/// Write the shared `inf`/`nan` text forms (§4.6), returning `None` when the value is
/// finite and the caller should proceed with its normal numeric rendering.
fn write_special(buf: &mut [u8], sign: bool, is_infinite: bool, is_nan: bool, is_signaling: bool) -> Option<Result<usize, Error>> {
    let text: &[u8] = if is_infinite {
        if sign { b"-inf" } else { b"inf" }
    } else if is_nan {
        if is_signaling {
            if sign { b"-nan(snan)" } else { b"nan(snan)" }
        } else if sign {
            b"-nan(ind)"
        } else {
            b"nan"
        }
    } else {
        return None;
    };
    if text.len() > buf.len() {
        return Some(Err(Error::RESULT_OUT_OF_RANGE));
    }
    buf[..text.len()].copy_from_slice(text);
    Some(Ok(text.len()))
}

macro_rules! impl_to_chars_native {
    ($ty:ty, $format:ty) => {
        impl ToChars for $ty {
            fn to_chars(&self, buf: &mut [u8], format: Format, precision: Option<usize>) -> Result<usize, Error> {
                let view = BinaryFloatView::<$format>::new(self.to_bits());
                if let Some(result) =
                    write_special(buf, view.is_negative(), view.is_infinite(), view.is_nan(), view.is_signaling_nan())
                {
                    return result;
                }

                if format == Format::Hex {
                    return emit_hex_native::<$format>(buf, view);
                }
                if view.is_zero() {
                    return emitter::emit_decimal(buf, view.is_negative(), 0, 0, None, format, precision);
                }

                let significand = view.binary_significand();
                let exponent = view.binary_exponent() - <$format as FloatFormat>::SIGNIFICAND_BITS as i32;
                let two_fc = significand << 1;
                let zero_significand = view.has_all_zero_significand_bits() && view.exponent_bits() != 0;

                let decimal = dragonbox_to_decimal::<$format>(
                    two_fc,
                    exponent,
                    zero_significand,
                    RoundingMode::Nearest,
                    BinaryToDecimalRoundingPolicy::ToEven,
                );

                emitter::emit_decimal(
                    buf,
                    view.is_negative(),
                    decimal.significand as u128,
                    decimal.decimal_exponent,
                    Some((significand, exponent)),
                    format,
                    precision,
                )
            }
        }
    };
}

fn emit_hex_native<F: FloatFormat>(buf: &mut [u8], view: BinaryFloatView<F>) -> Result<usize, Error> {
    let is_subnormal = view.exponent_bits() == 0 && !view.has_all_zero_significand_bits();
    let binary_exponent = if is_subnormal { F::MIN_EXPONENT } else { view.binary_exponent() };
    let significand = if is_subnormal { view.significand_bits() } else { view.binary_significand() & ((1u128 << F::SIGNIFICAND_BITS) - 1) };
    emitter::emit_hex(buf, view.is_negative(), significand, F::SIGNIFICAND_BITS, binary_exponent, is_subnormal)
}

impl_to_chars_native!(f64, Binary64);
impl_to_chars_native!(f32, charconv_core::format::Binary32);

macro_rules! impl_from_chars_native {
    ($ty:ty, $format:ty) => {
        impl FromChars for $ty {
            fn from_chars(input: &[u8], format: Format) -> Result<(Self, usize), Error> {
                if format == Format::Hex {
                    let (bits, consumed) = parser::from_chars_hex::<$format>(input)?;
                    return Ok((<$ty>::from_bits(bits as _), consumed));
                }
                let (value, consumed) = parser::from_chars_native::<$ty>(input)?;
                parser::validate_exponent_presence(&input[..consumed], format)?;
                Ok((value, consumed))
            }
        }
    };
}

impl_from_chars_native!(f64, Binary64);
impl_from_chars_native!(f32, charconv_core::format::Binary32);

/// x87 80-bit extended precision, carried as a raw bit pattern in the low 80 bits of a
/// `u128` (no native Rust type has this width).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binary80(pub u128);

/// IEEE 754 binary128 (quadruple precision), carried as a raw bit pattern in a `u128`
/// (no native Rust type has this width).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binary128(pub u128);

macro_rules! impl_wide {
    ($wrapper:ty, $format:ty) => {
        impl ToChars for $wrapper {
            fn to_chars(&self, buf: &mut [u8], format: Format, precision: Option<usize>) -> Result<usize, Error> {
                let view = BinaryFloatView::<$format>::new(self.0);
                if let Some(result) =
                    write_special(buf, view.is_negative(), view.is_infinite(), view.is_nan(), view.is_signaling_nan())
                {
                    return result;
                }

                if format == Format::Hex {
                    return emit_hex_native::<$format>(buf, view);
                }
                if view.is_zero() {
                    return emitter::emit_decimal(buf, view.is_negative(), 0, 0, None, format, precision);
                }

                let significand = view.binary_significand();
                let exponent = view.binary_exponent() - <$format as FloatFormat>::SIGNIFICAND_BITS as i32;
                let is_even = significand & 1 == 0;
                let is_smallest_in_binade = view.significand_bits() == 0 && view.exponent_bits() > 1;

                let decimal = charconv_ryu::to_decimal(
                    significand,
                    exponent,
                    is_even,
                    is_smallest_in_binade,
                    BinaryToDecimalRoundingPolicy::ToEven,
                );

                emitter::emit_decimal(
                    buf,
                    view.is_negative(),
                    decimal.significand,
                    decimal.decimal_exponent,
                    Some((significand, exponent)),
                    format,
                    precision,
                )
            }
        }

        impl FromChars for $wrapper {
            fn from_chars(input: &[u8], format: Format) -> Result<(Self, usize), Error> {
                if format == Format::Hex {
                    let (bits, consumed) = parser::from_chars_hex::<$format>(input)?;
                    return Ok((Self(bits), consumed));
                }
                let (bits, consumed) = parser::from_chars_wide::<$format>(input)?;
                parser::validate_exponent_presence(&input[..consumed], format)?;
                Ok((Self(bits), consumed))
            }
        }
    };
}

impl_wide!(Binary80, Binary80Format);
impl_wide!(Binary128, Binary128Format);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_simple_values() {
        for &value in &[0.0_f64, 1.0, -1.0, 1.5, 3.14159, 1e300, 1e-300, f64::MIN_POSITIVE] {
            let mut buf = [0u8; 64];
            let n = to_chars(&mut buf, value, Format::Scientific, None).unwrap();
            let (parsed, consumed): (f64, usize) = from_chars(&buf[..n], Format::Scientific).unwrap();
            assert_eq!(consumed, n);
            assert_eq!(parsed.to_bits(), value.to_bits());
        }
    }

    #[test]
    fn infinity_and_nan_render_as_text() {
        let mut buf = [0u8; 16];
        let n = to_chars(&mut buf, f64::INFINITY, Format::Scientific, None).unwrap();
        assert_eq!(&buf[..n], b"inf");

        let n = to_chars(&mut buf, f64::NEG_INFINITY, Format::Scientific, None).unwrap();
        assert_eq!(&buf[..n], b"-inf");
    }

    #[test]
    fn negative_zero_keeps_its_sign() {
        let mut buf = [0u8; 16];
        let n = to_chars(&mut buf, -0.0_f64, Format::Fixed, None).unwrap();
        assert_eq!(&buf[..n], b"-0");
    }
}
