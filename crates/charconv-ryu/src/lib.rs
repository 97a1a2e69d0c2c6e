//! Generic Ryu binary-to-decimal formatter for binary80 and binary128 (ยง4.5).
//!
//! Unlike Dragonbox's per-format compile-time cache, this formatter computes its
//! power-of-five bounds on demand via [`charconv_core::bigint::Bigint`] — binary128's
//! decimal exponent range is wide enough that a dense compile-time table would be
//! impractically large (see `DESIGN.md`).

#![no_std]
#![deny(missing_docs)]

mod formatter;

pub use formatter::to_decimal;
