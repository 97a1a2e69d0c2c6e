//! Generic shortest-round-trip digit generation (§4.5), for formats wide enough that
//! a dense compile-time cache table (as `charconv-dragonbox` builds for binary32/64)
//! is not practical.
//!
//! This is the classic Steele & White "free-format" construction: represent the value
//! and its rounding boundaries as a ratio of two [`Bigint`]s, scale both sides by a
//! power of ten so the ratio starts below one, then repeatedly multiply the numerator
//! by ten and subtract off whole copies of the denominator to emit one digit at a
//! time, stopping as soon as the remaining uncertainty interval guarantees the digits
//! so far round-trip. Every step is addition, multiplication by a small constant, or
//! comparison — never a general bigint division, consistent with `Bigint`'s own
//! surface (§4.2).

use core::cmp::Ordering;

use charconv_core::bigint::Bigint;
use charconv_core::decimal::DecimalFloat;
use charconv_core::policy::BinaryToDecimalRoundingPolicy;

/// Produce the shortest decimal significand and exponent for `significand * 2^binary_exponent`.
///
/// `significand` and `binary_exponent` are the unpacked value (significand includes any
/// implicit or explicit leading bit already folded in, matching
/// [`charconv_core::bits::BinaryFloatView::binary_significand`], with `binary_exponent`
/// adjusted so that `value == significand * 2^binary_exponent`, i.e.
/// `view.binary_exponent() - F::SIGNIFICAND_BITS as i32`).
///
/// `is_even` is the parity of the least-significant significand bit, which decides
/// whether the rounding interval's endpoints are inclusive (even) or exclusive (odd).
/// `lower_boundary_is_closer` is set when `significand` is the smallest mantissa in its
/// binade and the exponent is not the minimum one — the one case where the gap to the
/// next-lower float is half that to the next-higher one.
pub fn to_decimal(
    significand: u128,
    binary_exponent: i32,
    is_even: bool,
    lower_boundary_is_closer: bool,
    tie: BinaryToDecimalRoundingPolicy,
) -> DecimalFloat<u128> {
    let (mut r, mut s, mut m_plus, mut m_minus) =
        scale(significand, binary_exponent, lower_boundary_is_closer);
    let mut k = fixup(&mut r, &mut s, &mut m_plus, &mut m_minus, significand, binary_exponent);

    let mut digits: u128 = 0;
    let mut digit_count: i32 = 0;

    loop {
        r.mul_small(10);
        m_plus.mul_small(10);
        m_minus.mul_small(10);

        let mut digit: u32 = 0;
        while r.compare(&s) != Ordering::Less {
            r.sub_bigint(&s);
            digit += 1;
        }
        digits = digits * 10 + digit as u128;
        digit_count += 1;

        let low = if is_even {
            r.compare(&m_minus) != Ordering::Greater
        } else {
            r.compare(&m_minus) == Ordering::Less
        };

        let mut r_plus = r.clone();
        r_plus.add_bigint(&m_plus, 0);
        let high = if is_even {
            r_plus.compare(&s) != Ordering::Less
        } else {
            r_plus.compare(&s) == Ordering::Greater
        };

        if !low && !high {
            continue;
        }
        if high && !low {
            digits += 1;
        } else if low && high {
            let mut two_r = r.clone();
            two_r.mul_small(2);
            let round_up = match two_r.compare(&s) {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => prefers_up(tie),
            };
            if round_up {
                digits += 1;
            }
        }
        break;
    }

    DecimalFloat::new(false, digits, k - digit_count)
}

fn prefers_up(tie: BinaryToDecimalRoundingPolicy) -> bool {
    matches!(
        tie,
        BinaryToDecimalRoundingPolicy::AwayFromZero | BinaryToDecimalRoundingPolicy::ToOdd
    )
}

/// Build the initial `(R, S, M+, M-)` quadruple so that `R/S == value` and
/// `M+/S`, `M-/S` are the (possibly asymmetric) half-ULP gaps to the neighboring floats.
fn scale(significand: u128, be: i32, lower_boundary_is_closer: bool) -> (Bigint, Bigint, Bigint, Bigint) {
    let sig = Bigint::from_u128(significand);
    if be >= 0 {
        let be = be as u32;
        if !lower_boundary_is_closer {
            let mut r = sig;
            r.pow2(be + 1);
            let s = Bigint::from_u64(2);
            let mut m_plus = Bigint::from_u64(1);
            m_plus.pow2(be);
            let m_minus = m_plus.clone();
            (r, s, m_plus, m_minus)
        } else {
            let mut r = sig;
            r.pow2(be + 2);
            let s = Bigint::from_u64(4);
            let mut m_plus = Bigint::from_u64(1);
            m_plus.pow2(be + 1);
            let mut m_minus = Bigint::from_u64(1);
            m_minus.pow2(be);
            (r, s, m_plus, m_minus)
        }
    } else {
        let neg_be = (-be) as u32;
        if !lower_boundary_is_closer {
            let mut r = sig;
            r.pow2(1);
            let mut s = Bigint::from_u64(1);
            s.pow2(neg_be + 1);
            let m_plus = Bigint::from_u64(1);
            let m_minus = Bigint::from_u64(1);
            (r, s, m_plus, m_minus)
        } else {
            let mut r = sig;
            r.pow2(2);
            let mut s = Bigint::from_u64(1);
            s.pow2(neg_be + 2);
            let m_plus = Bigint::from_u64(2);
            let m_minus = Bigint::from_u64(1);
            (r, s, m_plus, m_minus)
        }
    }
}

/// Scale `(R, S, M+, M-)` by an estimated power of ten so the first digit is nonzero,
/// then bracket the estimate exactly by comparison. Returns the decimal exponent `k`
/// such that `value == 0.d1d2...dn * 10^k`.
///
/// The initial estimate uses a fixed-point `log10(2)` ratio rather than
/// [`charconv_core::log::floor_log10_pow2`], whose magic constant is only valid for a
/// much narrower exponent range than binary128's; the bracketing loop below corrects
/// any error the cheaper estimate introduces, so its precision only affects how many
/// fixup iterations run, never correctness.
fn fixup(r: &mut Bigint, s: &mut Bigint, m_plus: &mut Bigint, m_minus: &mut Bigint, significand: u128, be: i32) -> i32 {
    let bit_length = 128 - significand.leading_zeros() as i32;
    let log2v = be + bit_length - 1;
    let mut k = (((log2v as i64) * 1233) >> 12) as i32 + 1;

    if k > 0 {
        s.pow10(k as u32);
    } else if k < 0 {
        let up = (-k) as u32;
        r.pow10(up);
        m_plus.pow10(up);
        m_minus.pow10(up);
    }

    loop {
        let mut r_plus = r.clone();
        r_plus.add_bigint(m_plus, 0);
        if r_plus.compare(s) == Ordering::Greater {
            s.mul_small(10);
            k += 1;
        } else {
            break;
        }
    }

    loop {
        let mut r_plus = r.clone();
        r_plus.add_bigint(m_plus, 0);
        r_plus.mul_small(10);
        if r_plus.compare(s) != Ordering::Greater {
            r.mul_small(10);
            m_plus.mul_small(10);
            m_minus.mul_small(10);
            k -= 1;
        } else {
            break;
        }
    }

    k
}

#[cfg(test)]
mod tests {
    use charconv_core::bits::BinaryFloatView;
    use charconv_core::format::{Binary64, FloatFormat};

    use super::*;

    fn decompose(value: f64) -> (u128, i32, bool, bool) {
        let view = BinaryFloatView::<Binary64>::new(value.to_bits());
        let significand = view.binary_significand();
        let binary_exponent = view.binary_exponent() - Binary64::SIGNIFICAND_BITS as i32;
        let is_even = view.has_even_significand_bits();
        let lower_boundary_is_closer =
            view.has_all_zero_significand_bits() && view.exponent_bits() > 1;
        (significand, binary_exponent, is_even, lower_boundary_is_closer)
    }

    #[test]
    fn one_point_zero_has_significand_one() {
        let (significand, binary_exponent, is_even, lower_boundary_is_closer) = decompose(1.0);
        let decimal = to_decimal(
            significand,
            binary_exponent,
            is_even,
            lower_boundary_is_closer,
            BinaryToDecimalRoundingPolicy::ToEven,
        );
        assert_eq!(decimal.significand, 1);
        assert_eq!(decimal.decimal_exponent, 0);
    }

    #[test]
    fn one_hundred_has_three_digit_significand() {
        let (significand, binary_exponent, is_even, lower_boundary_is_closer) = decompose(100.0);
        let decimal = to_decimal(
            significand,
            binary_exponent,
            is_even,
            lower_boundary_is_closer,
            BinaryToDecimalRoundingPolicy::ToEven,
        );
        assert_eq!(decimal.significand, 1);
        assert_eq!(decimal.decimal_exponent, 2);
    }

    #[test]
    fn small_value_round_trips_in_digit_count() {
        let (significand, binary_exponent, is_even, lower_boundary_is_closer) = decompose(0.1);
        let decimal = to_decimal(
            significand,
            binary_exponent,
            is_even,
            lower_boundary_is_closer,
            BinaryToDecimalRoundingPolicy::ToEven,
        );
        assert_ne!(decimal.significand, 0);
        let recomposed = decimal.significand as f64 * 10f64.powi(decimal.decimal_exponent);
        assert!((recomposed - 0.1).abs() < 1e-9);
    }
}
