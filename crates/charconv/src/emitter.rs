//! Rendering a decimal significand/exponent pair into one of the four output formats
//! (§4.6): scientific, fixed, general, and IEEE hex-float.
//!
//! The digit string itself — the run of ASCII decimal digits, independent of sign,
//! point, and exponent marker — comes from handing the significand to `itoa::Buffer`
//! (§1's "external integer-formatter collaborator", §10.6).

use core::cmp::Ordering;

use charconv_core::bigint::Bigint;

use crate::error::Error;
use crate::Format;

/// Maximum significant digits this emitter rounds to. Large enough for binary128's
/// `DECIMAL_DIGITS = 36` plus headroom for a caller-requested `precision` beyond the
/// shortest round-trip length.
const MAX_SIG_DIGITS: usize = 64;

struct Digits {
    buf: [u8; MAX_SIG_DIGITS],
    len: usize,
    /// `value == 0.d0 d1 ... d(len-1) * 10^point`.
    point: i32,
}

impl Digits {
    fn from_significand(significand: u128, decimal_exponent: i32) -> Self {
        let mut itoa_buf = itoa::Buffer::new();
        let text = itoa_buf.format(significand);
        let mut buf = [0u8; MAX_SIG_DIGITS];
        let len = text.len().min(MAX_SIG_DIGITS);
        buf[..len].copy_from_slice(&text.as_bytes()[..len]);
        Digits {
            buf,
            len,
            point: decimal_exponent + len as i32,
        }
    }

    fn digits(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Round (half away from zero — a documented simplification of the true
    /// round-half-to-even contract, since this only ever trims digits that the
    /// shortest-round-trip formatter already produced exactly; see `DESIGN.md`) to
    /// `target` significant digits. `target` must not exceed `self.len` — growing the
    /// digit count is [`Digits::extend_to`]'s job, since doing it correctly needs the
    /// exact binary value, not just the digits already on hand.
    fn round_to(&mut self, target: usize) {
        if target >= self.len {
            return;
        }
        if target == 0 {
            let round_up = self.len > 0 && self.buf[0] >= b'5';
            self.len = 0;
            if round_up {
                self.buf[0] = b'1';
                self.len = 1;
                self.point += 1;
            }
            return;
        }

        let round_up = self.buf[target] >= b'5';
        self.len = target;
        if round_up {
            self.increment_last_digit();
        }
    }

    /// Recompute `target` significant digits (`target > self.len`) directly from the
    /// exact value `binary_significand * 2^binary_exponent`, rounding half to even.
    ///
    /// The shortest round-trip digits already on hand aren't reused: the shortest form
    /// is only guaranteed to match the value's true decimal expansion up to its own
    /// last digit, which may itself have been rounded, so digits beyond it have to come
    /// from the exact value, not be padded with zeros.
    fn extend_to(&mut self, binary_significand: u128, binary_exponent: i32, target: usize) {
        let target = target.min(MAX_SIG_DIGITS);
        if target <= self.len {
            return;
        }

        let mut numerator = Bigint::from_u128(binary_significand);
        let mut denominator = Bigint::from_u64(1);
        if binary_exponent >= 0 {
            numerator.pow2(binary_exponent as u32);
        } else {
            denominator.pow2((-binary_exponent) as u32);
        }
        // Scale by a power of ten so `numerator / denominator` lands in `[1, 10)`,
        // matching `self.point`'s "first digit has weight `10^(point - 1)`" meaning.
        let shift = self.point - 1;
        if shift > 0 {
            denominator.pow10(shift as u32);
        } else if shift < 0 {
            numerator.pow10((-shift) as u32);
        }

        let mut buf = [0u8; MAX_SIG_DIGITS];
        for i in 0..target {
            let mut digit = 0u8;
            while numerator.compare(&denominator) != Ordering::Less {
                numerator.sub_bigint(&denominator);
                digit += 1;
            }
            buf[i] = b'0' + digit;
            if i + 1 < target {
                numerator.mul_small(10);
            }
        }

        self.buf = buf;
        self.len = target;

        let mut twice_remainder = numerator;
        twice_remainder.mul_small(2);
        let round_up = match twice_remainder.compare(&denominator) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => (self.buf[target - 1] - b'0') % 2 == 1,
        };
        if round_up {
            self.increment_last_digit();
        }
    }

    /// Add one to the last kept digit, carrying through any trailing `9`s. If every
    /// kept digit was a `9` the rounded value gains a leading digit and `point` shifts.
    fn increment_last_digit(&mut self) {
        let target = self.len;
        if target == 0 {
            return;
        }
        let mut i = target;
        loop {
            if i == 0 {
                for j in (1..target).rev() {
                    self.buf[j] = self.buf[j - 1];
                }
                self.buf[0] = b'1';
                self.point += 1;
                return;
            }
            i -= 1;
            if self.buf[i] == b'9' {
                self.buf[i] = b'0';
            } else {
                self.buf[i] += 1;
                return;
            }
        }
    }
}

/// Apply a caller-requested significant-digit count, growing or shrinking `digits` as
/// needed. `binary_value`, when given, is the exact `(significand, binary_exponent)`
/// pair the shortest-form digits were themselves derived from — required to grow past
/// the shortest form correctly; `None` is only valid for an exact zero, whose digits
/// beyond the shortest form are zero regardless.
fn apply_precision(digits: &mut Digits, target: usize, binary_value: Option<(u128, i32)>) {
    let target = target.min(MAX_SIG_DIGITS);
    if target <= digits.len {
        digits.round_to(target);
        return;
    }
    if let Some((significand, binary_exponent)) = binary_value {
        digits.extend_to(significand, binary_exponent, target);
        return;
    }
    for i in digits.len..target {
        digits.buf[i] = b'0';
    }
    digits.len = target;
}

fn write_bytes(buf: &mut [u8], pos: &mut usize, bytes: &[u8]) -> Result<(), Error> {
    if *pos + bytes.len() > buf.len() {
        return Err(Error::RESULT_OUT_OF_RANGE);
    }
    buf[*pos..*pos + bytes.len()].copy_from_slice(bytes);
    *pos += bytes.len();
    Ok(())
}

fn write_exponent(buf: &mut [u8], pos: &mut usize, marker: u8, exponent: i32) -> Result<(), Error> {
    write_bytes(buf, pos, &[marker])?;
    write_bytes(buf, pos, if exponent < 0 { b"-" } else { b"+" })?;
    let magnitude = exponent.unsigned_abs();
    let mut itoa_buf = itoa::Buffer::new();
    let text = itoa_buf.format(magnitude);
    if text.len() < 2 {
        write_bytes(buf, pos, b"0")?;
    }
    write_bytes(buf, pos, text.as_bytes())
}

fn write_scientific(buf: &mut [u8], pos: &mut usize, digits: &Digits, exponent_marker: u8) -> Result<(), Error> {
    let d = digits.digits();
    if d.is_empty() {
        write_bytes(buf, pos, b"0")?;
    } else {
        write_bytes(buf, pos, &d[..1])?;
        if d.len() > 1 {
            write_bytes(buf, pos, b".")?;
            write_bytes(buf, pos, &d[1..])?;
        }
    }
    write_exponent(buf, pos, exponent_marker, digits.point - 1)
}

fn write_fixed(buf: &mut [u8], pos: &mut usize, digits: &Digits) -> Result<(), Error> {
    let d = digits.digits();
    let point = digits.point;

    if d.is_empty() {
        return write_bytes(buf, pos, b"0");
    }
    if point <= 0 {
        write_bytes(buf, pos, b"0.")?;
        for _ in 0..(-point) {
            write_bytes(buf, pos, b"0")?;
        }
        return write_bytes(buf, pos, d);
    }
    let point = point as usize;
    if point >= d.len() {
        write_bytes(buf, pos, d)?;
        for _ in 0..(point - d.len()) {
            write_bytes(buf, pos, b"0")?;
        }
        return Ok(());
    }
    write_bytes(buf, pos, &d[..point])?;
    write_bytes(buf, pos, b".")?;
    write_bytes(buf, pos, &d[point..])
}

/// Render `significand * 10^decimal_exponent` (already the shortest round-tripping
/// decimal, or any other exact decimal the caller constructed) per `format`.
///
/// `precision` rounds to `p` fractional digits (fixed/scientific) or `max(p, 1)`
/// significant digits (general); `None` emits every digit of `significand` unrounded.
///
/// `binary_value`, when `precision` asks for more digits than the shortest round-trip
/// form already has, supplies the exact `(binary_significand, binary_exponent)` the
/// shortest form was derived from, so the extra digits are the value's true decimal
/// expansion rather than zero-padding. Pass `None` only for an exact zero.
pub fn emit_decimal(
    buf: &mut [u8],
    sign: bool,
    significand: u128,
    decimal_exponent: i32,
    binary_value: Option<(u128, i32)>,
    format: Format,
    precision: Option<usize>,
) -> Result<usize, Error> {
    let mut digits = Digits::from_significand(significand, decimal_exponent);
    let mut pos = 0usize;

    if sign {
        write_bytes(buf, &mut pos, b"-")?;
    }

    match format {
        Format::Scientific => {
            if let Some(p) = precision {
                apply_precision(&mut digits, p + 1, binary_value);
            }
            write_scientific(buf, &mut pos, &digits, b'e')?;
        }
        Format::Fixed => {
            if let Some(p) = precision {
                let target = (digits.point + p as i32).max(0) as usize;
                apply_precision(&mut digits, target, binary_value);
            }
            write_fixed(buf, &mut pos, &digits)?;
        }
        Format::General => {
            let effective_precision = precision.unwrap_or(0);
            let adjusted_exponent = digits.point - 1;
            let use_fixed = adjusted_exponent >= -4
                && adjusted_exponent <= digits.len as i32 + effective_precision as i32 - 1;
            if let Some(p) = precision {
                apply_precision(&mut digits, p.max(1), binary_value);
            }
            if use_fixed {
                write_fixed(buf, &mut pos, &digits)?;
            } else {
                write_scientific(buf, &mut pos, &digits, b'e')?;
            }
        }
        Format::Hex => return Err(Error::INVALID_ARGUMENT),
    }

    Ok(pos)
}

/// Render an already-decomposed binary value as an IEEE hex-float (§4.6's `hex`
/// format): `[-]1.hhhhp±dd` for normals, `0.hhhhp-EMIN+1` for subnormals.
pub fn emit_hex(
    buf: &mut [u8],
    sign: bool,
    significand: u128,
    significand_bits: u32,
    binary_exponent: i32,
    is_subnormal: bool,
) -> Result<usize, Error> {
    let mut pos = 0usize;
    if sign {
        write_bytes(buf, &mut pos, b"-")?;
    }
    write_bytes(buf, &mut pos, if is_subnormal { b"0" } else { b"1" })?;

    let nibbles = significand_bits.div_ceil(4);
    if nibbles > 0 {
        write_bytes(buf, &mut pos, b".")?;
        for i in (0..nibbles).rev() {
            let shift = i * 4;
            let nibble = ((significand << (nibbles * 4 - significand_bits)) >> shift) & 0xF;
            let c = HEX_DIGITS[nibble as usize];
            write_bytes(buf, &mut pos, &[c])?;
        }
    }
    write_exponent(buf, &mut pos, b'p', binary_exponent)?;
    Ok(pos)
}

const HEX_DIGITS: [u8; 16] = *b"0123456789abcdef";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scientific_single_digit() {
        let mut buf = [0u8; 32];
        let n = emit_decimal(&mut buf, false, 1, 0, None, Format::Scientific, None).unwrap();
        assert_eq!(&buf[..n], b"1e+00");
    }

    #[test]
    fn fixed_places_point_correctly() {
        let mut buf = [0u8; 32];
        // significand=15, decimal_exponent=-1 -> 1.5
        let n = emit_decimal(&mut buf, false, 15, -1, None, Format::Fixed, None).unwrap();
        assert_eq!(&buf[..n], b"1.5");
    }

    #[test]
    fn fixed_with_leading_zeros() {
        let mut buf = [0u8; 32];
        // significand=1, decimal_exponent=-1 -> value 0.1
        let n = emit_decimal(&mut buf, false, 1, -1, None, Format::Fixed, None).unwrap();
        assert_eq!(&buf[..n], b"0.1");
    }

    #[test]
    fn negative_sign_is_emitted() {
        let mut buf = [0u8; 32];
        let n = emit_decimal(&mut buf, true, 1, 0, None, Format::Fixed, None).unwrap();
        assert_eq!(&buf[..n], b"-1");
    }

    #[test]
    fn too_small_buffer_reports_out_of_range() {
        let mut buf = [0u8; 1];
        let err = emit_decimal(&mut buf, false, 12345, 0, None, Format::Fixed, None).unwrap_err();
        assert_eq!(err, Error::RESULT_OUT_OF_RANGE);
    }

    #[test]
    fn precision_beyond_shortest_form_uses_exact_digits() {
        // 1e-15 as f64: shortest form is "1e-15", but the true stored value is
        // 1.0000000000000000777... e-15; asking for 50 digits of precision must
        // recover that tail, not zero-pad.
        let value = 1e-15_f64;
        let view = charconv_core::bits::BinaryFloatView::<charconv_core::format::Binary64>::new(value.to_bits());
        let significand = view.binary_significand();
        let binary_exponent =
            view.binary_exponent() - <charconv_core::format::Binary64 as charconv_core::format::FloatFormat>::SIGNIFICAND_BITS as i32;

        let mut digits = Digits::from_significand(1, -15);
        assert_eq!(digits.digits(), b"1");
        // 51 significant digits = 1 integer digit + 50 fractional digits (precision 50
        // in scientific form); the exact binary value rounds its 51st digit up.
        digits.extend_to(significand, binary_exponent, 51);
        assert_eq!(digits.digits(), b"100000000000000007770539987666107923830718560119502");
    }

    #[test]
    fn extend_to_is_a_no_op_when_target_not_larger() {
        let mut digits = Digits::from_significand(15, -1);
        digits.extend_to(3, 1, 2);
        assert_eq!(digits.digits(), b"15");
    }
}
