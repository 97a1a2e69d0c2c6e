//! Dragonbox shortest-round-trip binary-to-decimal formatter for binary32 and binary64
//! (ยง4.4).
//!
//! Ported from Boost.charconv's `detail/dragonbox.hpp`: given the unpacked
//! `(two_fc, exponent)` of a normal or subnormal float, produce the shortest decimal
//! `(significand, decimal_exponent)` that round-trips back to the same bit pattern.

#![no_std]
#![deny(missing_docs)]

mod format;
mod formatter;
mod trailing_zero;

#[cfg(test)]
mod tests;

pub use format::DragonboxFormat;
pub use formatter::{to_decimal, RoundingMode};
pub use trailing_zero::{remove_trailing_zeros_u32, remove_trailing_zeros_u64};
