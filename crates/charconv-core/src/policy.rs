//! Runtime policy enums (ยง4.10).
//!
//! The reference implementation resolves these via compile-time policy-holder types
//! assembled at each call site. Without dependent templates, the idiomatic Rust
//! equivalent is a handful of small `Copy` enums passed by value and matched on in the
//! formatter's hot loop (ยง9) — branching on a two- or five-variant enum does not disturb
//! the `O(1)` cost of the algorithms it configures.

/// Whether the formatter should report the sign of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignPolicy {
    /// Drop sign information; the caller already knows it or doesn't care.
    Ignore,
    /// Report `is_negative` alongside the decimal significand.
    ReturnSign,
}

/// How trailing zeros in the decimal significand should be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingZeroPolicy {
    /// Leave trailing zeros in place.
    Ignore,
    /// Strip trailing zeros from the significand, adjusting the decimal exponent.
    Remove,
    /// Leave trailing zeros in place but report whether any were present.
    Report,
}

/// Interval-endpoint inclusion rule used when rounding a binary value to decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalToBinaryRoundingPolicy {
    /// Round to nearest, ties to even.
    NearestToEven,
    /// Round to nearest, ties to odd.
    NearestToOdd,
    /// Round to nearest, ties away from zero.
    NearestAwayFromZero,
    /// Round to nearest, ties toward zero.
    NearestTowardZero,
    /// Round toward positive infinity.
    TowardPositiveInfinity,
    /// Round toward negative infinity.
    TowardNegativeInfinity,
    /// Round toward zero (truncate).
    TowardZero,
    /// Round away from zero.
    AwayFromZero,
}

/// Tie-breaking rule Dragonbox uses at an exact-halfway decimal-to-binary boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryToDecimalRoundingPolicy {
    /// No preference; either adjacent value is acceptable.
    DoNotCare,
    /// Prefer the adjacent value with an even last significand bit.
    ToEven,
    /// Prefer the adjacent value with an odd last significand bit.
    ToOdd,
    /// Prefer the value further from zero.
    AwayFromZero,
    /// Prefer the value closer to zero.
    TowardZero,
}

/// Which binary64 power-of-ten cache to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// The dense, one-entry-per-exponent table.
    Full,
    /// A smaller table storing every 27th entry plus a recovery table (ยง3). Not
    /// currently implemented by `charconv-core::cache` — reserved for a future size
    /// -optimized build; `Full` is the only policy in active use today.
    Compact,
}
