//! The public `from_chars` entry point (§4.7, §6.1): sign handling shared by every
//! format, `f32`/`f64` via [`crate::dec2flt::dec2flt`], a direct big-integer path for
//! `Binary80`/`Binary128`, whose mantissas exceed the 64-bit fast-path budget the
//! Eisel-Lemire machinery assumes (§10.6), and a hex-float lexer shared by every format
//! since hex digits map onto bits exactly, with no decimal-to-binary conversion needed.

use core::cmp::Ordering;

use charconv_core::bigint::Bigint;
use charconv_core::format::FloatFormat;

use crate::dec2flt::dec2flt;
use crate::dec2flt::float::RawFloat;
use crate::error::Error;
use crate::Format;

/// Parse a native `f32`/`f64` (§4.7's full fast-path/Eisel-Lemire/slow-path chain).
pub(crate) fn from_chars_native<F: RawFloat>(input: &[u8]) -> Result<(F, usize), Error> {
    let (value, consumed, out_of_range) = dec2flt::<F>(input).ok_or(Error::INVALID_ARGUMENT)?;
    if out_of_range {
        return Err(Error::RESULT_OUT_OF_RANGE);
    }
    Ok((value, consumed))
}

/// Enforce §4.7's "exponent mandatory iff scientific, forbidden iff fixed" rule against
/// the bytes a decimal parse actually consumed. `general` and `hex` place no constraint
/// here (`hex` has its own grammar, parsed by [`from_chars_hex`] instead).
pub(crate) fn validate_exponent_presence(consumed: &[u8], format: Format) -> Result<(), Error> {
    if !matches!(format, Format::Scientific | Format::Fixed) {
        return Ok(());
    }
    let mut s = consumed;
    if let Some(&c) = s.first() {
        if c == b'+' || c == b'-' {
            s = &s[1..];
        }
    }
    let is_special = s.len() >= 3 && (s[..3].eq_ignore_ascii_case(b"inf") || s[..3].eq_ignore_ascii_case(b"nan"));
    if is_special {
        return Ok(());
    }
    let has_exponent = s.iter().any(|&b| b == b'e' || b == b'E');
    match (format, has_exponent) {
        (Format::Scientific, false) => Err(Error::INVALID_ARGUMENT),
        (Format::Fixed, true) => Err(Error::INVALID_ARGUMENT),
        _ => Ok(()),
    }
}

/// Parse a value of a format with no native Rust type (`Binary80`/`Binary128`),
/// producing the raw bit pattern (sign bit included) directly via the same restoring
/// -division technique [`crate::dec2flt::slow`] uses, generalized to a `u128` mantissa
/// register.
pub(crate) fn from_chars_wide<F: FloatFormat>(input: &[u8]) -> Result<(u128, usize), Error> {
    let mut s = input;
    let mut count = 0usize;
    let negative = match s.first() {
        Some(b'-') => {
            s = &s[1..];
            count += 1;
            true
        }
        Some(b'+') => {
            s = &s[1..];
            count += 1;
            false
        }
        Some(_) => false,
        None => return Err(Error::INVALID_ARGUMENT),
    };
    let sign_bit = (negative as u128) << F::SIGN_INDEX;

    if let Some((bits, rest)) = parse_inf_nan_wide::<F>(s, negative) {
        return Ok((bits, count + rest));
    }

    let mut dec = crate::dec2flt::decimal::parse_decimal(s);
    crate::dec2flt::decimal_seq::trim_trailing_zeros(&mut dec);
    if dec.num_digits == 0 {
        return Err(Error::INVALID_ARGUMENT);
    }

    // Re-lex to find how many bytes the number consumed (mirrors dec2flt's own
    // parse-then-reparse split between the fast lexer and the exact one).
    let Some((_, consumed)) = crate::dec2flt::parse::parse_partial_number(s) else {
        return Err(Error::INVALID_ARGUMENT);
    };

    let (field_bits, out_of_range) = significand_field::<F>(&dec);
    if out_of_range {
        return Err(Error::RESULT_OUT_OF_RANGE);
    }
    let bits = sign_bit
        | (field_bits.exponent_field << F::SIGNIFICAND_BITS)
        | field_bits.significand_field;
    Ok((bits, count + consumed))
}

struct FieldBits {
    significand_field: u128,
    exponent_field: u128,
}

fn significand_field<F: FloatFormat>(dec: &crate::dec2flt::decimal::Decimal) -> (FieldBits, bool) {
    let mut numerator = Bigint::zero();
    for i in 0..dec.num_digits {
        numerator.mul_small(10);
        numerator.add_small(dec.digits[i] as u64);
    }
    let mut denominator = Bigint::from_u64(1);
    // `Bigint` has fixed capacity (`charconv_core::bigint::MAX_BITS`); a decimal exponent
    // magnitude large enough to overflow it is, for every supported format, already far
    // past that format's representable range, so overflow here means exactly what it
    // would mean if we'd compared against the format's true exponent bounds.
    let scale_ok = if dec.decimal_exponent >= 0 {
        numerator.pow10(dec.decimal_exponent as u32)
    } else {
        denominator.pow10((-dec.decimal_exponent) as u32)
    };
    if !scale_ok {
        let infinite_power = (1u128 << F::EXPONENT_BITS) - 1;
        return if dec.decimal_exponent >= 0 {
            (FieldBits { significand_field: 0, exponent_field: infinite_power }, true)
        } else {
            (FieldBits { significand_field: 0, exponent_field: 0 }, true)
        };
    }

    if numerator.is_zero() {
        return (FieldBits { significand_field: 0, exponent_field: 0 }, false);
    }

    // Quotient width needed for this format's stored significand field: formats with
    // an implicit leading bit need one extra bit beyond the field width (the implicit
    // bit itself) plus a round bit; formats that store the leading bit explicitly
    // (binary80) need only the field width plus the round bit.
    let extra = if F::HAS_EXPLICIT_LEADING_BIT { 1 } else { 2 };
    let want_bits = F::SIGNIFICAND_BITS + extra;

    let mut exp2 =
        numerator.bit_length() as i32 - denominator.bit_length() as i32 - want_bits as i32;

    let mut scaled_num = numerator.clone();
    let mut scaled_den = denominator.clone();
    if exp2 > 0 {
        scaled_den.shift_left_bits(exp2 as u32);
    } else if exp2 < 0 {
        scaled_num.shift_left_bits((-exp2) as u32);
    }

    loop {
        if scaled_num.compare(&scaled_den) == Ordering::Less {
            scaled_num.shift_left_bits(1);
            exp2 -= 1;
            continue;
        }
        let mut twice_den = scaled_den.clone();
        twice_den.shift_left_bits(1);
        if scaled_num.compare(&twice_den) != Ordering::Less {
            scaled_den = twice_den;
            exp2 += 1;
            continue;
        }
        break;
    }

    let (quotient, sticky) = restoring_divide(&scaled_num, &scaled_den, want_bits);
    finalize_mantissa::<F>(quotient, sticky, exp2)
}

/// Round an extracted `(field_width + implicit_extra + 1)`-bit quotient (implicit bit,
/// if any, plus fraction bits, plus one round bit) and its binary exponent into a
/// format's raw significand/exponent field pair, handling subnormal range and overflow
/// to infinity.
fn finalize_mantissa<F: FloatFormat>(quotient: u128, sticky: bool, exp2: i32) -> (FieldBits, bool) {
    let mut significand = quotient >> 1;
    let half_bit_set = (quotient & 1) != 0;
    if half_bit_set && (sticky || (significand & 1) != 0) {
        significand += 1;
    }

    let field_width = F::SIGNIFICAND_BITS;
    let implicit_extra = if F::HAS_EXPLICIT_LEADING_BIT { 0 } else { 1 };
    let mut exponent = exp2 - F::EXPONENT_BIAS;
    if significand >= (1u128 << (field_width + implicit_extra)) {
        significand >>= 1;
        exponent += 1;
    }
    if !F::HAS_EXPLICIT_LEADING_BIT {
        significand &= (1u128 << field_width) - 1;
    }

    if exponent <= 0 {
        let shift = (1 - exponent) as u32;
        let full_width = field_width + implicit_extra;
        if shift > full_width {
            // Underflowed to zero: the digits were nonzero but too small to represent.
            return (FieldBits { significand_field: 0, exponent_field: 0 }, true);
        }
        let leading = if F::HAS_EXPLICIT_LEADING_BIT { 0 } else { 1u128 << field_width };
        significand = (significand | leading) >> shift;
        let out_of_range = shift == full_width && significand == 0;
        return (FieldBits { significand_field: significand, exponent_field: 0 }, out_of_range);
    }
    let infinite_power = (1i32 << F::EXPONENT_BITS) - 1;
    if exponent >= infinite_power {
        return (
            FieldBits { significand_field: 0, exponent_field: infinite_power as u128 },
            true,
        );
    }

    (FieldBits { significand_field: significand, exponent_field: exponent as u128 }, false)
}

fn restoring_divide(numerator: &Bigint, denominator: &Bigint, want_bits: u32) -> (u128, bool) {
    let top = numerator.bit_length();
    let mut remainder = Bigint::zero();
    let mut quotient: u128 = 0;

    for step in 0..want_bits {
        remainder.shift_left_bits(1);
        if step < top {
            let bit_index = top - 1 - step;
            if bit_at(numerator, bit_index) {
                remainder.add_small(1);
            }
        }
        if remainder.compare(denominator) != Ordering::Less {
            remainder.sub_bigint(denominator);
            quotient = (quotient << 1) | 1;
        } else {
            quotient <<= 1;
        }
    }

    let mut sticky = !remainder.is_zero();
    if !sticky {
        for bit_index in 0..top.saturating_sub(want_bits) {
            if bit_at(numerator, bit_index) {
                sticky = true;
                break;
            }
        }
    }

    (quotient, sticky)
}

fn bit_at(value: &Bigint, index: u32) -> bool {
    let limbs = value.limbs();
    let limb_idx = (index / 64) as usize;
    if limb_idx >= limbs.len() {
        return false;
    }
    (limbs[limb_idx] >> (index % 64)) & 1 != 0
}

fn parse_inf_nan_wide<F: FloatFormat>(s: &[u8], negative: bool) -> Option<(u128, usize)> {
    let infinite_power = ((1u128 << F::EXPONENT_BITS) - 1) << F::SIGNIFICAND_BITS;
    let sign_bit = (negative as u128) << F::SIGN_INDEX;
    if starts_with_ignore_case(s, b"infinity") {
        return Some((sign_bit | infinite_power, 8));
    }
    if starts_with_ignore_case(s, b"inf") {
        return Some((sign_bit | infinite_power, 3));
    }
    if starts_with_ignore_case(s, b"nan") {
        let quiet_nan = infinite_power | (1u128 << (F::SIGNIFICAND_BITS - 1));
        return Some((sign_bit | quiet_nan, 3));
    }
    None
}

fn starts_with_ignore_case(s: &[u8], pattern: &[u8]) -> bool {
    s.len() >= pattern.len()
        && s[..pattern.len()]
            .iter()
            .zip(pattern)
            .all(|(a, b)| a.to_ascii_lowercase() == *b)
}

/// Maximum hex digits tracked exactly; every format needs at most 28 (binary128's
/// 112-bit significand) plus its leading digit, so this leaves ample headroom before
/// falling back to the sticky bit.
const MAX_HEX_NIBBLES: usize = 64;

fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parse an IEEE hex-float (§4.6/§4.7/§6.2: `[-]hhh.hhhp±dd`, `p`/`P` exponent
/// mandatory), producing the raw bit pattern with sign folded in.
///
/// Every hex digit maps onto exactly four bits, so unlike the decimal paths this needs
/// no bigint: the digit string, read as a plain binary integer, already *is* the
/// significand, and the `p` exponent is a binary (not decimal) power of two.
pub(crate) fn from_chars_hex<F: FloatFormat>(input: &[u8]) -> Result<(u128, usize), Error> {
    let mut s = input;
    let mut count = 0usize;
    let negative = match s.first() {
        Some(b'-') => {
            s = &s[1..];
            count += 1;
            true
        }
        Some(b'+') => {
            s = &s[1..];
            count += 1;
            false
        }
        Some(_) => false,
        None => return Err(Error::INVALID_ARGUMENT),
    };
    let sign_bit = (negative as u128) << F::SIGN_INDEX;

    if let Some((bits, rest)) = parse_inf_nan_wide::<F>(s, negative) {
        return Ok((bits, count + rest));
    }

    let mut nibbles = [0u8; MAX_HEX_NIBBLES];
    let mut nibble_count = 0usize;
    let mut seen_point = false;
    let mut frac_nibbles: u32 = 0;
    let mut any_digit = false;
    let mut truncated_nonzero = false;

    let mut i = 0usize;
    while i < s.len() {
        if let Some(v) = hex_value(s[i]) {
            any_digit = true;
            if nibble_count < MAX_HEX_NIBBLES {
                nibbles[nibble_count] = v;
                nibble_count += 1;
            } else if v != 0 {
                truncated_nonzero = true;
            }
            if seen_point {
                frac_nibbles += 1;
            }
            i += 1;
        } else if s[i] == b'.' && !seen_point {
            seen_point = true;
            i += 1;
        } else {
            break;
        }
    }
    if !any_digit {
        return Err(Error::INVALID_ARGUMENT);
    }

    if i >= s.len() || (s[i] != b'p' && s[i] != b'P') {
        return Err(Error::INVALID_ARGUMENT);
    }
    i += 1;
    let exp_negative = match s.get(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };
    let digits_start = i;
    let mut exp_magnitude: i64 = 0;
    while i < s.len() && s[i].is_ascii_digit() {
        if exp_magnitude < 1_000_000_000 {
            exp_magnitude = exp_magnitude * 10 + (s[i] - b'0') as i64;
        }
        i += 1;
    }
    if i == digits_start {
        return Err(Error::INVALID_ARGUMENT);
    }
    let p_exponent = if exp_negative { -exp_magnitude } else { exp_magnitude };

    // Locate the most significant set bit of the digit string, read as one big
    // left-to-right binary integer (nibble 0's bit 3 is bit 0 from the top).
    let total_bits = (nibble_count * 4) as u32;
    let mut leading: Option<u32> = None;
    for b in 0..total_bits {
        if hex_bit_from_top(&nibbles[..nibble_count], b) {
            leading = Some(b);
            break;
        }
    }
    let Some(leading) = leading else {
        // All-zero mantissa: the value is exactly zero regardless of the exponent.
        return Ok((sign_bit, count + i));
    };

    // value = M * 2^(p_exponent - 4*frac_nibbles); M's leading bit has weight
    // 2^(total_bits - 1 - leading), so the value's true unbiased binary exponent is
    // that weight plus the scale factor.
    let exp2_wide = (total_bits as i64 - 1 - leading as i64) + p_exponent
        - 4 * frac_nibbles as i64;
    let exp2 = exp2_wide.clamp(i32::MIN as i64, i32::MAX as i64) as i32;

    let extra = if F::HAS_EXPLICIT_LEADING_BIT { 1 } else { 2 };
    let want_bits = F::SIGNIFICAND_BITS + extra;

    let mut quotient: u128 = 0;
    let mut sticky = truncated_nonzero;
    for step in 0..want_bits {
        let bit_pos = leading + step;
        let bit = if bit_pos < total_bits { hex_bit_from_top(&nibbles[..nibble_count], bit_pos) } else { false };
        quotient = (quotient << 1) | (bit as u128);
    }
    for step in want_bits..total_bits.saturating_sub(leading) {
        if hex_bit_from_top(&nibbles[..nibble_count], leading + step) {
            sticky = true;
            break;
        }
    }

    let (field_bits, out_of_range) = finalize_mantissa::<F>(quotient, sticky, exp2);
    if out_of_range {
        return Err(Error::RESULT_OUT_OF_RANGE);
    }
    let bits = sign_bit | (field_bits.exponent_field << F::SIGNIFICAND_BITS) | field_bits.significand_field;
    Ok((bits, count + i))
}

fn hex_bit_from_top(nibbles: &[u8], bit_from_top: u32) -> bool {
    let nibble_idx = (bit_from_top / 4) as usize;
    if nibble_idx >= nibbles.len() {
        return false;
    }
    let bit_in_nibble = 3 - (bit_from_top % 4);
    (nibbles[nibble_idx] >> bit_in_nibble) & 1 != 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use charconv_core::format::Binary128;

    #[test]
    fn wide_parses_one_point_five() {
        let (bits, consumed) = from_chars_wide::<Binary128>(b"1.5").unwrap();
        assert_eq!(consumed, 3);
        let exponent_field = (bits >> Binary128::SIGNIFICAND_BITS) & ((1u128 << Binary128::EXPONENT_BITS) - 1);
        // 1.5 has unbiased binary exponent 0, so the raw field equals the format's bias.
        assert_eq!(exponent_field, (-Binary128::EXPONENT_BIAS) as u128);
    }

    #[test]
    fn wide_parses_negative_values() {
        let (bits, _) = from_chars_wide::<Binary128>(b"-1.5").unwrap();
        assert_eq!(bits >> Binary128::SIGN_INDEX, 1);
    }

    #[test]
    fn wide_overflow_reports_out_of_range() {
        let err = from_chars_wide::<Binary128>(b"1e99999").unwrap_err();
        assert_eq!(err, Error::RESULT_OUT_OF_RANGE);
    }

    #[test]
    fn hex_parses_one_point_five() {
        let (bits, consumed) = from_chars_hex::<Binary128>(b"1.8p0").unwrap();
        assert_eq!(consumed, 5);
        let exponent_field = (bits >> Binary128::SIGNIFICAND_BITS) & ((1u128 << Binary128::EXPONENT_BITS) - 1);
        assert_eq!(exponent_field, (-Binary128::EXPONENT_BIAS) as u128);
        let significand = bits & ((1u128 << Binary128::SIGNIFICAND_BITS) - 1);
        assert_eq!(significand, 1u128 << (Binary128::SIGNIFICAND_BITS - 1));
    }

    #[test]
    fn hex_requires_exponent() {
        assert_eq!(from_chars_hex::<Binary128>(b"1.8").unwrap_err(), Error::INVALID_ARGUMENT);
    }
}
