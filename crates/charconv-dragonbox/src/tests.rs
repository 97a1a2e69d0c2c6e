use charconv_core::bits::BinaryFloatView;
use charconv_core::format::{Binary64, FloatFormat};
use charconv_core::policy::BinaryToDecimalRoundingPolicy;

use crate::{to_decimal, RoundingMode};

fn decompose(value: f64) -> (u128, i32, bool) {
    let view = BinaryFloatView::<Binary64>::new(value.to_bits());
    let significand = view.binary_significand();
    let exponent = view.binary_exponent() - Binary64::SIGNIFICAND_BITS as i32;
    let two_fc = significand << 1;
    (two_fc, exponent, view.has_all_zero_significand_bits() && view.exponent_bits() != 0)
}

#[test]
fn one_point_zero_has_significand_one() {
    let (two_fc, exponent, shorter) = decompose(1.0);
    let decimal = to_decimal::<Binary64>(
        two_fc,
        exponent,
        shorter,
        RoundingMode::Nearest,
        BinaryToDecimalRoundingPolicy::ToEven,
    );
    assert_eq!(decimal.significand, 1);
}

#[test]
fn small_value_has_nonzero_significand() {
    let (two_fc, exponent, shorter) = decompose(0.1);
    let decimal = to_decimal::<Binary64>(
        two_fc,
        exponent,
        shorter,
        RoundingMode::Nearest,
        BinaryToDecimalRoundingPolicy::ToEven,
    );
    assert_ne!(decimal.significand, 0);
}
