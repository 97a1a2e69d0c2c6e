//! Lexing a decimal string into `(mantissa, decimal_exponent)` (§4.7), and the
//! native-arithmetic fast path for when both are small enough to be exact.

use super::float::RawFloat;

/// The decomposed digits of a decimal string, before any rounding to a particular
/// binary float width.
#[derive(Debug, Clone, Copy)]
pub struct Number {
    /// Power of ten `mantissa` is scaled by.
    pub exponent: i64,
    /// Up to 19 significant decimal digits, as an integer.
    pub mantissa: u64,
    /// Sign, applied by the caller once the magnitude has been resolved.
    pub negative: bool,
    /// Set when more significant digits were present than fit in `mantissa`.
    pub many_digits: bool,
}

impl Number {
    /// Round `mantissa * 10^exponent` to `F` using native float arithmetic, when both
    /// operands are small enough that the arithmetic is itself exact (§4.7's "fast
    /// path"). Returns `None` when it isn't — the caller then tries Eisel-Lemire.
    pub fn try_fast_path<F: RawFloat>(&self) -> Option<F> {
        if self.many_digits {
            return None;
        }
        let value = F::try_fast_path_value(self.mantissa, self.exponent)?;
        Some(if self.negative { -value } else { value })
    }
}

/// Parse as much of a leading `[0-9]*(\.[0-9]*)?([eE][+-]?[0-9]+)?` as possible.
///
/// `s` must be non-empty and have any leading sign already stripped. Returns the
/// parsed digits and the number of bytes consumed, or `None` if no digit was found at
/// all (the caller then tries `inf`/`nan`).
pub fn parse_partial_number(s: &[u8]) -> Option<(Number, usize)> {
    let mut i = 0usize;
    let mut mantissa: u64 = 0;
    let mut n_digits = 0usize;
    let mut many_digits = false;

    while i < s.len() && s[i].is_ascii_digit() {
        push_digit(&mut mantissa, &mut n_digits, &mut many_digits, s[i] - b'0');
        i += 1;
    }
    let int_digits = i;

    let mut exponent: i64 = 0;
    let mut n_fraction_digits = 0usize;

    if i < s.len() && s[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < s.len() && s[i].is_ascii_digit() {
            push_digit(&mut mantissa, &mut n_digits, &mut many_digits, s[i] - b'0');
            i += 1;
        }
        n_fraction_digits = i - frac_start;
    }

    if int_digits == 0 && n_fraction_digits == 0 {
        return None;
    }
    exponent -= n_fraction_digits as i64;

    if i < s.len() && (s[i] == b'e' || s[i] == b'E') {
        let checkpoint = i;
        i += 1;
        let negative_exp = if i < s.len() && (s[i] == b'+' || s[i] == b'-') {
            let negative = s[i] == b'-';
            i += 1;
            negative
        } else {
            false
        };
        let mut exp_digits = 0usize;
        let mut explicit: i64 = 0;
        while i < s.len() && s[i].is_ascii_digit() {
            if exp_digits < 18 {
                explicit = explicit * 10 + (s[i] - b'0') as i64;
            }
            exp_digits += 1;
            i += 1;
        }
        if exp_digits == 0 {
            i = checkpoint;
        } else {
            exponent += if negative_exp { -explicit } else { explicit };
        }
    }

    Some((
        Number {
            exponent,
            mantissa,
            negative: false,
            many_digits,
        },
        i,
    ))
}

fn push_digit(mantissa: &mut u64, n_digits: &mut usize, many_digits: &mut bool, digit: u8) {
    if *n_digits < 19 {
        *mantissa = *mantissa * 10 + digit as u64;
        *n_digits += 1;
        if digit != 0 {
            *many_digits = *many_digits || *n_digits == 19;
        }
    } else {
        *many_digits = true;
    }
}

/// Parse a leading `inf`, `infinity`, or `nan`, case-insensitively.
pub fn parse_inf_nan<F: RawFloat>(s: &[u8], negative: bool) -> Option<(F, usize)> {
    if starts_with_ignore_case(s, b"infinity") {
        return Some((F::infinity_with_sign(negative), 8));
    }
    if starts_with_ignore_case(s, b"inf") {
        return Some((F::infinity_with_sign(negative), 3));
    }
    if starts_with_ignore_case(s, b"nan") {
        return Some((F::nan_with_sign(negative), 3));
    }
    None
}

fn starts_with_ignore_case(s: &[u8], pattern: &[u8]) -> bool {
    s.len() >= pattern.len()
        && s[..pattern.len()]
            .iter()
            .zip(pattern)
            .all(|(a, b)| a.to_ascii_lowercase() == *b)
}
