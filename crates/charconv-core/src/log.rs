//! Fixed-point "magic constant" approximations of `floor(e * log_b(a))` (ยง4.3).
//!
//! Each function is `(e * C - S) >> shift` for a fixed-point constant `C` approximating
//! the target logarithm, valid only over the stated range of `e` — callers must stay
//! within range, there is no runtime check (these sit on formatter/parser hot paths).

/// `floor(e * log10(2))`, valid for `-2620 <= e <= 2620`.
pub fn floor_log10_pow2(e: i32) -> i32 {
    debug_assert!((-2620..=2620).contains(&e));
    (e * 315653) >> 20
}

/// `floor(e * log2(10))`, valid for `-1233 <= e <= 1233`.
pub fn floor_log2_pow10(e: i32) -> i32 {
    debug_assert!((-1233..=1233).contains(&e));
    (e * 1741647) >> 19
}

/// `floor(e * log10(5))`, valid for `-2620 <= e <= 2620`.
pub fn floor_log10_pow5(e: i32) -> i32 {
    debug_assert!((-2620..=2620).contains(&e));
    (e * 732923) >> 20
}

/// `floor(e * log5(2))`, valid for `-1831 <= e <= 1831`.
pub fn floor_log5_pow2(e: i32) -> i32 {
    debug_assert!((-1831..=1831).contains(&e));
    (e * 225799) >> 19
}

/// `floor(e * log10(2) - log10(4/3))`, valid for `-1700 <= e <= 1700`.
pub fn floor_log10_pow2_minus_log10_4_over_3(e: i32) -> i32 {
    debug_assert!((-1700..=1700).contains(&e));
    (e * 631305 - 261663) >> 21
}

/// `floor(e * log5(2) - log5(3))`, valid for `-2427 <= e <= 2427`.
pub fn floor_log5_pow2_minus_log5_3(e: i32) -> i32 {
    debug_assert!((-2427..=2427).contains(&e));
    (e * 1608515 - 1934330) >> 22
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_real_log10_pow2_near_zero() {
        for e in -20..=20 {
            let expected = (10f64.powi(0).ln() * 0.0 + (e as f64) * 2f64.log10()).floor() as i32;
            assert_eq!(floor_log10_pow2(e), expected, "e = {e}");
        }
    }

    #[test]
    fn matches_real_log2_pow10_near_zero() {
        for e in -20..=20 {
            let expected = ((e as f64) * 10f64.log2()).floor() as i32;
            assert_eq!(floor_log2_pow10(e), expected, "e = {e}");
        }
    }

    #[test]
    fn matches_real_log10_pow5_near_zero() {
        for e in -20..=20 {
            let expected = ((e as f64) * 5f64.log10()).floor() as i32;
            assert_eq!(floor_log10_pow5(e), expected, "e = {e}");
        }
    }

    #[test]
    fn matches_real_log5_pow2_near_zero() {
        for e in -20..=20 {
            let expected = ((e as f64) * 2f64.log(5.0)).floor() as i32;
            assert_eq!(floor_log5_pow2(e), expected, "e = {e}");
        }
    }
}
