//! Trailing-zero removal (ยง4.4): strip factors of ten from a Dragonbox-produced
//! decimal significand by multiplying by modular inverses of 5 (and, for binary64,
//! 10^8) rather than dividing by a variable power of ten.

/// Strip trailing zeros from a binary32-sized decimal significand, returning the
/// number of digits removed.
pub fn remove_trailing_zeros_u32(significand: &mut u64) -> u32 {
    let mut s = *significand as u32;
    let mut removed = 0u32;
    // Each successful division by 10 is checked via the modular inverse of 5 mod
    // 2^32: `s * inv5 <= u32::MAX / 10` iff `s` is a multiple of 10 at this width.
    const INV5: u32 = 0xCCCC_CCCD; // multiplicative inverse of 5 mod 2^32
    loop {
        let q = s.wrapping_mul(INV5);
        if q > u32::MAX / 10 {
            break;
        }
        s = q;
        removed += 1;
    }
    *significand = s as u64;
    removed
}

/// Strip trailing zeros from a binary64-sized decimal significand, returning the
/// number of digits removed. Tries an eight-digit-at-a-time shortcut first, then
/// falls back to one digit at a time.
pub fn remove_trailing_zeros_u64(significand: &mut u64) -> u32 {
    let mut s = *significand;
    let mut removed = 0u32;

    const POW10_8: u64 = 100_000_000;
    if s % POW10_8 == 0 {
        let reduced = s / POW10_8;
        if reduced != 0 {
            s = reduced;
            removed += 8;
        }
    }

    const INV5: u64 = 0xCCCC_CCCC_CCCC_CCCD; // multiplicative inverse of 5 mod 2^64
    loop {
        let q = s.wrapping_mul(INV5);
        if q > u64::MAX / 10 {
            break;
        }
        s = q;
        removed += 1;
    }
    *significand = s;
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_all_trailing_zeros_u64() {
        let mut s = 123_000u64;
        let removed = remove_trailing_zeros_u64(&mut s);
        assert_eq!(s, 123);
        assert_eq!(removed, 3);
    }

    #[test]
    fn leaves_non_multiples_untouched() {
        let mut s = 12345u64;
        let removed = remove_trailing_zeros_u64(&mut s);
        assert_eq!(s, 12345);
        assert_eq!(removed, 0);
    }

    #[test]
    fn strips_eight_digit_chunk() {
        let mut s = 500_000_000u64; // 5 * 10^8
        let removed = remove_trailing_zeros_u64(&mut s);
        assert_eq!(s, 5);
        assert_eq!(removed, 8);
    }
}
