//! The Eisel-Lemire fast extended-precision algorithm (§4.8): Daniel Lemire,
//! "Number Parsing at a Gigabyte per Second" (2021), <https://arxiv.org/abs/2101.11408>.
//!
//! Computes the correctly-rounded binary float for `w * 10^q` using only 128-bit
//! arithmetic whenever the true value isn't exactly on a rounding boundary; a negative
//! `p_biased` in the returned [`BiasedFp`] signals the caller to fall back to the exact
//! bigint path instead.

use charconv_core::wide::umul128;

use super::common::BiasedFp;
use super::float::RawFloat;
use super::table::{LARGEST_POWER_OF_FIVE, POWER_OF_FIVE_128, SMALLEST_POWER_OF_FIVE};

/// `floor(q * log2(5))`, via the fixed-point ratio `152170 / 65536 ≈ log2(5)`.
const fn power(q: i32) -> i32 {
    (q.wrapping_mul(152_170).wrapping_add(65536)) >> 16
}

/// The top 128 bits of `w * 5^q` (`w` already shifted so its leading bit is set),
/// with a second multiply folded in when the first product's low `precision` bits
/// are all ones (ambiguous whether they'd carry on rounding).
fn compute_product_approx(q: i64, w: u64, precision: u32) -> (u64, u64) {
    let mask: u64 = if precision < 64 { u64::MAX >> precision } else { 0 };

    let index = (q - SMALLEST_POWER_OF_FIVE as i64) as usize;
    let (lo5, hi5) = POWER_OF_FIVE_128[index];

    let first = umul128(w, lo5);
    let mut first_lo = first.low;
    let mut first_hi = first.high;

    if first_hi & mask == mask {
        let second = umul128(w, hi5);
        let (sum, carry) = first_lo.overflowing_add(second.high);
        first_lo = sum;
        if carry {
            first_hi = first_hi.wrapping_add(1);
        }
    }
    (first_lo, first_hi)
}

/// Attempt to compute the correctly-rounded `F` for `w * 10^q`.
pub fn compute_float<F: RawFloat>(q: i64, mut w: u64) -> BiasedFp {
    if w == 0 || q < SMALLEST_POWER_OF_FIVE as i64 {
        return BiasedFp::zero_pow();
    } else if q > LARGEST_POWER_OF_FIVE as i64 {
        return BiasedFp::inf(F::INFINITE_POWER);
    }

    let lz = w.leading_zeros();
    w <<= lz;

    let precision = F::SIG_BITS + 3;
    let (lo, hi) = compute_product_approx(q, w, precision);
    if lo == u64::MAX && !(-27..=55).contains(&q) {
        return BiasedFp { m: 0, p_biased: -1 };
    }

    let upperbit = (hi >> 63) as u32;
    let shift = upperbit + 64 - F::SIG_BITS - 3;
    let mut mantissa = hi >> shift;
    let mut power2 = power(q as i32) + upperbit as i32 - lz as i32 - F::EXPONENT_BIAS + F::SIG_BITS as i32;

    if power2 <= 0 {
        let shift_out = 1 - power2;
        if shift_out >= 64 {
            return BiasedFp::zero_pow();
        }
        mantissa >>= shift_out as u32;
        mantissa += mantissa & 1;
        mantissa >>= 1;
        let biased = (mantissa >= (1u64 << F::SIG_BITS)) as i32;
        return BiasedFp { m: mantissa, p_biased: biased };
    }

    if lo <= 1
        && (-4..=55).contains(&q)
        && (mantissa & 3) == 1
        && (mantissa << shift) == hi
    {
        mantissa &= !1;
    }

    mantissa += mantissa & 1;
    mantissa >>= 1;
    if mantissa >= (2u64 << F::SIG_BITS) {
        mantissa = 1u64 << F::SIG_BITS;
        power2 += 1;
    }
    mantissa &= !(1u64 << F::SIG_BITS);

    if power2 >= F::INFINITE_POWER {
        return BiasedFp::inf(F::INFINITE_POWER);
    }

    BiasedFp { m: mantissa, p_biased: power2 }
}
