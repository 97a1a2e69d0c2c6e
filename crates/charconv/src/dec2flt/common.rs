//! The value type shared by every stage of decimal-to-binary conversion.

/// An unrounded or finished floating-point number, expressed as `m * 2^(p_biased - bias)`.
///
/// `p_biased` already carries the target format's exponent bias. A negative `p_biased`
/// is a sentinel meaning "the fast paths could not conclusively round this value; fall
/// back to the exact bigint path", never a real exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BiasedFp {
    /// The significand, without any implicit leading bit folded in yet.
    pub m: u64,
    /// The biased binary exponent, or negative to request the slow path.
    pub p_biased: i32,
}

impl BiasedFp {
    /// The zero value for the given (already-biased) exponent field, `0`.
    pub const fn zero_pow() -> Self {
        Self { m: 0, p_biased: 0 }
    }

    /// Infinity, represented with a zero significand and the format's maximum biased
    /// exponent.
    pub const fn inf(infinite_power: i32) -> Self {
        Self { m: 0, p_biased: infinite_power }
    }
}
