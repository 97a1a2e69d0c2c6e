//! The decimal-float data model (ยง3): `(sign, significand, decimal_exponent)`, produced
//! by Dragonbox/Ryu and consumed by the decimal emitter.

/// `(-1)^sign * significand * 10^decimal_exponent`, not yet normalized to its shortest
/// form until the formatter says so.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalFloat<U> {
    /// `true` for negative values (including negative zero).
    pub sign: bool,
    /// The decimal significand, as an unsigned integer.
    pub significand: U,
    /// Power of ten the significand is scaled by.
    pub decimal_exponent: i32,
    /// Set when [`crate::policy::TrailingZeroPolicy::Report`] is in effect and the
    /// significand may still carry trailing zeros.
    pub may_have_trailing_zeros: Option<bool>,
}

impl<U> DecimalFloat<U> {
    /// Build a decimal float with no trailing-zero reporting.
    pub fn new(sign: bool, significand: U, decimal_exponent: i32) -> Self {
        Self {
            sign,
            significand,
            decimal_exponent,
            may_have_trailing_zeros: None,
        }
    }
}
