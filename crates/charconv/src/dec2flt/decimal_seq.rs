//! Normalizing a parsed [`super::decimal::Decimal`] before the slow bigint path builds
//! its numerator: trimming trailing zero digits folds them into the exponent instead of
//! paying for bigint limbs that would contribute nothing to the result.

use super::decimal::Decimal;

/// Strip trailing zero digits from `dec`, rolling them into `dec.decimal_exponent`.
pub fn trim_trailing_zeros(dec: &mut Decimal) {
    while dec.num_digits > 0 && dec.digits[dec.num_digits - 1] == 0 {
        dec.num_digits -= 1;
        dec.decimal_exponent += 1;
    }
    if dec.num_digits == 0 {
        dec.decimal_exponent = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::super::decimal::parse_decimal;
    use super::*;

    #[test]
    fn trims_and_adjusts_exponent() {
        let mut dec = parse_decimal(b"12300");
        trim_trailing_zeros(&mut dec);
        assert_eq!(&dec.digits[..dec.num_digits], &[1, 2, 3]);
        assert_eq!(dec.decimal_exponent, 2);
    }

    #[test]
    fn all_zero_digits_collapse_to_empty() {
        let mut dec = parse_decimal(b"000");
        trim_trailing_zeros(&mut dec);
        assert_eq!(dec.num_digits, 0);
        assert_eq!(dec.decimal_exponent, 0);
    }
}
