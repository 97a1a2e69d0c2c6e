//! On some platforms the reference implementation clamps x87 extended-precision FPU
//! control registers down to the target width before rounding, to avoid double
//! rounding through an 80-bit intermediate register. This crate's slow path never
//! performs floating-point arithmetic at all — every comparison in
//! [`super::slow::parse_long_mantissa`] is exact [`charconv_core::bigint::Bigint`]
//! arithmetic — so there is no excess-precision hazard to guard against here.
