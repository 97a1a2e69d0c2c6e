//! The always-correct fallback (§4.2, §4.7): convert the decimal string's exact digits
//! into a big-integer ratio and extract the correctly-rounded mantissa via restoring
//! binary long division — comparison, subtraction, and shifts only, matching
//! [`charconv_core::bigint::Bigint`]'s own division-free surface (§10.6).

use core::cmp::Ordering;

use charconv_core::bigint::Bigint;

use super::common::BiasedFp;
use super::decimal::parse_decimal;
use super::decimal_seq::trim_trailing_zeros;
use super::float::RawFloat;

/// Parse every digit of `s` exactly (`s` sign-stripped) and round to the nearest `F`.
pub fn parse_long_mantissa<F: RawFloat>(s: &[u8]) -> BiasedFp {
    let mut dec = parse_decimal(s);
    trim_trailing_zeros(&mut dec);

    if dec.num_digits == 0 {
        return BiasedFp::zero_pow();
    }

    let mut numerator = Bigint::zero();
    for i in 0..dec.num_digits {
        numerator.mul_small(10);
        numerator.add_small(dec.digits[i] as u64);
    }

    let mut denominator = Bigint::from_u64(1);
    if dec.decimal_exponent >= 0 {
        numerator.pow10(dec.decimal_exponent as u32);
    } else {
        denominator.pow10((-dec.decimal_exponent) as u32);
    }

    if numerator.is_zero() {
        return BiasedFp::zero_pow();
    }

    // Align numerator/denominator by a power of two so their ratio lands in
    // `[1, 2)`; `exp2` then equals the value's true unbiased binary exponent, and
    // reading off `SIG_BITS + 2` bits of the aligned ratio gives the implicit leading
    // bit, the `SIG_BITS` fraction bits, and one round bit.
    let mut exp2 = numerator.bit_length() as i32 - denominator.bit_length() as i32
        - (F::SIG_BITS as i32 + 2);

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

    let (quotient, sticky) = restoring_divide(&scaled_num, &scaled_den, F::SIG_BITS + 2);

    let mut mantissa = quotient >> 1;
    let half_bit_set = (quotient & 1) != 0;
    if half_bit_set && (sticky || (mantissa & 1) != 0) {
        mantissa += 1;
    }

    let mut power2 = exp2 - F::EXPONENT_BIAS;
    if mantissa >= (1u64 << (F::SIG_BITS + 1)) {
        mantissa >>= 1;
        power2 += 1;
    }
    mantissa &= (1u64 << F::SIG_BITS) - 1;

    if power2 <= 0 {
        let shift = (1 - power2) as u32;
        if shift > F::SIG_BITS + 1 {
            return BiasedFp::zero_pow();
        }
        mantissa = (mantissa | (1u64 << F::SIG_BITS)) >> shift;
        return BiasedFp { m: mantissa, p_biased: 0 };
    }
    if power2 >= F::INFINITE_POWER {
        return BiasedFp::inf(F::INFINITE_POWER);
    }

    BiasedFp { m: mantissa, p_biased: power2 }
}

/// Restoring binary long division: the top `want_bits` bits of `numerator / denominator`
/// (`numerator` assumed pre-scaled so the quotient's leading bit is bit `want_bits - 1`),
/// plus whether any bit beyond those — in the remainder or in lower numerator bits not
/// brought down — was set (the "sticky" bit used to break rounding ties).
fn restoring_divide(numerator: &Bigint, denominator: &Bigint, want_bits: u32) -> (u64, bool) {
    let top = numerator.bit_length();
    let mut remainder = Bigint::zero();
    let mut quotient: u64 = 0;

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

#[cfg(test)]
mod tests {
    use super::*;

    fn recompose(fp: BiasedFp) -> f64 {
        f64::from_bits(((fp.p_biased as u64) << <f64 as RawFloat>::SIG_BITS) | fp.m)
    }

    #[test]
    fn one_point_five_rounds_exactly() {
        let fp = parse_long_mantissa::<f64>(b"1.5");
        assert_eq!(recompose(fp), 1.5);
    }

    #[test]
    fn long_digit_string_rounds_to_nearest() {
        // More digits than the fast paths can use, forcing the slow path.
        let fp = parse_long_mantissa::<f64>(
            b"3.14159265358979323846264338327950288419716939937510582097494459",
        );
        assert_eq!(recompose(fp), core::f64::consts::PI);
    }

    #[test]
    fn zero_parses_to_zero() {
        let fp = parse_long_mantissa::<f64>(b"0.0");
        assert_eq!(fp, BiasedFp::zero_pow());
    }
}
