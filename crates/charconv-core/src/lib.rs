//! Core bit-layout, wide-arithmetic, bigint, log-table and policy primitives shared by
//! every format crate in this workspace.
//!
//! This crate has no third-party dependencies and no I/O: it is pure, total,
//! allocation-free arithmetic over IEEE-754 bit patterns. `charconv-dragonbox`,
//! `charconv-ryu` and the `charconv` facade all build directly on top of it.

#![no_std]
#![deny(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod bigint;
pub mod bits;
pub mod cache;
pub mod decimal;
pub mod error;
pub mod format;
pub mod log;
pub mod policy;
pub mod wide;

pub use decimal::DecimalFloat;
pub use error::{Error, Result};
pub use format::{Binary128, Binary32, Binary64, Binary80, FloatFormat};
