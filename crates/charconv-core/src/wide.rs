//! Wide multiplication and bit-twiddling primitives (ยง4.2).
//!
//! Rust's native `u128` plays the role of the host's 128-bit extended integer type;
//! [`U256`] is the explicit `{high, low}` struct the spec calls for where no native
//! 256-bit type exists.

/// The full 128-bit product of two `u64` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Value128 {
    pub high: u64,
    pub low: u64,
}

/// `a * b` as a 128-bit product, split into high and low 64-bit halves.
pub fn umul128(a: u64, b: u64) -> Value128 {
    let full = (a as u128) * (b as u128);
    Value128 {
        high: (full >> 64) as u64,
        low: full as u64,
    }
}

/// The high 64 bits of `a * b`.
pub fn umul128_upper64(a: u64, b: u64) -> u64 {
    (((a as u128) * (b as u128)) >> 64) as u64
}

/// The high 128 bits of `u * c` where `u` is 64 bits and `c` is 128 bits, used by
/// binary64 Dragonbox's cache multiplication.
pub fn umul192_upper128(u: u64, c: u128) -> u128 {
    let c_hi = (c >> 64) as u64;
    let c_lo = c as u64;

    let high_product = (u as u128) * (c_hi as u128);
    let low_product = umul128(u, c_lo);

    let (sum, carry) = high_product.overflowing_add(low_product.high as u128);
    sum + ((carry as u128) << 64)
}

/// The low 128 bits of `u * c`, companion to [`umul192_upper128`].
pub fn umul192_lower128(u: u64, c: u128) -> u128 {
    let c_hi = (c >> 64) as u64;
    let c_lo = c as u64;

    let low_low = umul128(u, c_lo);
    let high_low = umul128(u, c_hi);

    let (mid, _carry) = (high_low.low as u128).overflowing_add((low_low.high) as u128);
    (mid << 64) | (low_low.low as u128)
}

/// The high 64 bits of `u * c` where `u` is 32 bits and `c` is 64 bits, used by
/// binary32 Dragonbox's cache multiplication.
pub fn umul96_upper64(u: u32, c: u64) -> u64 {
    umul128_upper64(u as u64, c)
}

/// The low 64 bits of `u * c`, companion to [`umul96_upper64`].
pub fn umul96_lower64(u: u32, c: u64) -> u64 {
    (u as u64).wrapping_mul(c)
}

/// A 256-bit unsigned integer represented as two `u128` halves, for the one product
/// (`u128 * u128`) that does not fit a native Rust type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct U256 {
    pub high: u128,
    pub low: u128,
}

impl U256 {
    pub const ZERO: Self = Self { high: 0, low: 0 };

    /// The high 128 bits, rounded toward zero (i.e. simply discarding `low`).
    pub fn upper_half(self) -> u128 {
        self.high
    }
}

/// `x * y` as a 256-bit product.
pub fn umul256(x: u128, y: u128) -> U256 {
    let x_hi = (x >> 64) as u64;
    let x_lo = x as u64;
    let y_hi = (y >> 64) as u64;
    let y_lo = y as u64;

    let lo_lo = (x_lo as u128) * (y_lo as u128);
    let hi_lo = (x_hi as u128) * (y_lo as u128);
    let lo_hi = (x_lo as u128) * (y_hi as u128);
    let hi_hi = (x_hi as u128) * (y_hi as u128);

    let cross = hi_lo
        .wrapping_add(lo_hi)
        .wrapping_add(lo_lo >> 64);
    let low = (lo_lo & 0xFFFF_FFFF_FFFF_FFFF) | (cross << 64);
    let high = hi_hi
        .wrapping_add(cross >> 64)
        .wrapping_add(if cross < hi_lo { 1u128 << 64 } else { 0 });

    U256 { high, low }
}

/// Number of leading zero bits in a nonzero `u64` (defined as 64 when `x == 0`,
/// matching `u64::leading_zeros`).
pub fn count_leading_zeros_u64(x: u64) -> u32 {
    x.leading_zeros()
}

/// Number of leading zero bits in a nonzero `u128`.
pub fn count_leading_zeros_u128(x: u128) -> u32 {
    x.leading_zeros()
}

/// Rotate a `u32` right by `n` bits, used by trailing-zero removal.
pub fn rotr_u32(x: u32, n: u32) -> u32 {
    x.rotate_right(n)
}

/// Rotate a `u64` right by `n` bits, used by trailing-zero removal.
pub fn rotr_u64(x: u64, n: u32) -> u64 {
    x.rotate_right(n)
}
