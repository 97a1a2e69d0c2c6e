//! The native float types the fast paths can produce directly, bridging to the
//! bit-layout constants already defined in [`charconv_core::format`] rather than
//! repeating them.

use charconv_core::format::{Binary32, Binary64, FloatFormat};

/// A native IEEE-754 binary float type the decimal-to-binary fast paths target.
///
/// Only `f32` and `f64` implement this: `Binary80`/`Binary128` have no native Rust
/// type to land in, so they skip straight to the bigint slow path (see `DESIGN.md`).
pub trait RawFloat: Sized + Copy + core::ops::Neg<Output = Self> {
    /// Width of the significand field, excluding the implicit leading bit.
    const SIG_BITS: u32;
    /// Bias subtracted from the raw exponent field to obtain the unbiased exponent.
    const EXPONENT_BIAS: i32;
    /// The biased exponent field value reserved for infinity/NaN.
    const INFINITE_POWER: i32;

    /// Build a float directly from its IEEE-754 bit pattern.
    fn from_u64_bits(bits: u64) -> Self;
    /// Infinity, with the requested sign.
    fn infinity_with_sign(negative: bool) -> Self;
    /// A quiet NaN, with the requested sign bit.
    fn nan_with_sign(negative: bool) -> Self;
    /// Round `mantissa * 10^exp10` to the nearest `Self` using native float
    /// arithmetic, returning `None` when either operand is too large for that
    /// arithmetic to be exact (the caller then tries the Eisel-Lemire path instead).
    fn try_fast_path_value(mantissa: u64, exp10: i64) -> Option<Self>;
}

impl RawFloat for f32 {
    const SIG_BITS: u32 = Binary32::SIGNIFICAND_BITS;
    const EXPONENT_BIAS: i32 = Binary32::EXPONENT_BIAS;
    const INFINITE_POWER: i32 = (1 << Binary32::EXPONENT_BITS) - 1;

    fn from_u64_bits(bits: u64) -> Self {
        f32::from_bits(bits as u32)
    }

    fn infinity_with_sign(negative: bool) -> Self {
        if negative { f32::NEG_INFINITY } else { f32::INFINITY }
    }

    fn nan_with_sign(negative: bool) -> Self {
        if negative { -f32::NAN } else { f32::NAN }
    }

    fn try_fast_path_value(mantissa: u64, exp10: i64) -> Option<Self> {
        const POWERS_OF_TEN: [f64; 11] =
            [1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10];
        if mantissa >> 24 != 0 || !(-10..=10).contains(&exp10) {
            return None;
        }
        let mut value = mantissa as f64;
        if exp10 >= 0 {
            value *= POWERS_OF_TEN[exp10 as usize];
        } else {
            value /= POWERS_OF_TEN[(-exp10) as usize];
        }
        let narrowed = value as f32;
        if narrowed as f64 == value { Some(narrowed) } else { None }
    }
}

impl RawFloat for f64 {
    const SIG_BITS: u32 = Binary64::SIGNIFICAND_BITS;
    const EXPONENT_BIAS: i32 = Binary64::EXPONENT_BIAS;
    const INFINITE_POWER: i32 = (1 << Binary64::EXPONENT_BITS) - 1;

    fn from_u64_bits(bits: u64) -> Self {
        f64::from_bits(bits)
    }

    fn infinity_with_sign(negative: bool) -> Self {
        if negative { f64::NEG_INFINITY } else { f64::INFINITY }
    }

    fn nan_with_sign(negative: bool) -> Self {
        if negative { -f64::NAN } else { f64::NAN }
    }

    fn try_fast_path_value(mantissa: u64, exp10: i64) -> Option<Self> {
        const POWERS_OF_TEN: [f64; 23] = [
            1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15,
            1e16, 1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
        ];
        if mantissa >> 53 != 0 || !(-22..=22).contains(&exp10) {
            return None;
        }
        let mut value = mantissa as f64;
        if exp10 >= 0 {
            value *= POWERS_OF_TEN[exp10 as usize];
        } else {
            value /= POWERS_OF_TEN[(-exp10) as usize];
        }
        Some(value)
    }
}
