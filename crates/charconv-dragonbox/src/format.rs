//! Per-format glue: cache lookup and the wide multiplications Dragonbox needs, kept
//! separate per format since binary32 and binary64 use different native integer widths
//! for their cache entries (ยง4.2, ยง4.4).

use charconv_core::cache;
use charconv_core::format::{Binary32, Binary64, FloatFormat};
use charconv_core::wide;

/// Format-specific plumbing Dragonbox needs beyond the plain bit-layout in
/// [`FloatFormat`].
pub trait DragonboxFormat: FloatFormat {
    /// Number of trailing digits of the "large" divisor tried first (ยง4.4, glossary).
    const KAPPA: u32;

    /// `floor((2*fc+1) * 2^beta * 10^(-k))`, and whether the result is an exact
    /// integer (no bits were dropped by the cache's rounding).
    fn compute_mul(two_fc: u128, k: i32, beta: u32) -> (u128, bool);

    /// Parity (lowest bit) of `floor((2*fc-1) * 2^beta * 10^(-k))`, and whether that
    /// value is an exact integer.
    fn compute_mul_parity(two_fc: u128, k: i32, beta: u32) -> (bool, bool);

    /// The scaled interval length `delta` used to pick the large- vs small-divisor
    /// path.
    fn compute_delta(k: i32, beta: u32) -> u32;
}

impl DragonboxFormat for Binary32 {
    const KAPPA: u32 = 1;

    fn compute_mul(two_fc: u128, k: i32, beta: u32) -> (u128, bool) {
        let cache = cache::get_binary32_cache(k);
        let u = ((two_fc as u64) << beta) as u32;
        let hi = wide::umul96_upper64(u, cache);
        let lo = wide::umul96_lower64(u, cache);
        (hi as u128, lo == 0)
    }

    fn compute_mul_parity(two_fc: u128, k: i32, beta: u32) -> (bool, bool) {
        let cache = cache::get_binary32_cache(k);
        let u = (((two_fc as u64) << beta) as u32).wrapping_sub(1 << beta);
        let hi = wide::umul96_upper64(u, cache);
        let lo = wide::umul96_lower64(u, cache);
        (hi & 1 != 0, lo == 0)
    }

    fn compute_delta(k: i32, beta: u32) -> u32 {
        let cache = cache::get_binary32_cache(k);
        ((cache >> (u64::BITS - 1 - beta)) & 0xFFFF_FFFF) as u32
    }
}

impl DragonboxFormat for Binary64 {
    const KAPPA: u32 = 2;

    fn compute_mul(two_fc: u128, k: i32, beta: u32) -> (u128, bool) {
        let cache = cache::get_binary64_cache(k);
        let cache128 = ((cache.high as u128) << 64) | cache.low as u128;
        let u = (two_fc as u64) << beta;
        let hi = wide::umul192_upper128(u, cache128);
        let lo = wide::umul192_lower128(u, cache128);
        (hi, lo == 0)
    }

    fn compute_mul_parity(two_fc: u128, k: i32, beta: u32) -> (bool, bool) {
        let cache = cache::get_binary64_cache(k);
        let cache128 = ((cache.high as u128) << 64) | cache.low as u128;
        let u = ((two_fc as u64) << beta).wrapping_sub(1u64 << beta);
        let hi = wide::umul192_upper128(u, cache128);
        let lo = wide::umul192_lower128(u, cache128);
        (hi & 1 != 0, lo == 0)
    }

    fn compute_delta(k: i32, beta: u32) -> u32 {
        let cache = cache::get_binary64_cache(k);
        let cache128 = ((cache.high as u128) << 64) | cache.low as u128;
        ((cache128 >> (u128::BITS - 1 - beta)) & 0xFFFF_FFFF) as u32
    }
}
