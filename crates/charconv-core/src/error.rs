//! The three-kind error taxonomy shared by every crate in the workspace.

use core::fmt;

/// The outcome of a fallible `to_chars`/`from_chars` style operation.
///
/// There are exactly two failure kinds; success is represented by the `Ok` side of a
/// [`Result`], not by a third variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// The input could not begin or continue a number under the requested format, a
    /// mandatory exponent was missing, or an unrecognized format flag was passed.
    InvalidArgument,
    /// The numeric value over- or underflowed the target type's range, or the output
    /// buffer was too small to hold the result.
    ResultOutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument => f.write_str("invalid argument"),
            Error::ResultOutOfRange => f.write_str("result out of range"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Convenience alias used throughout the workspace.
pub type Result<T> = core::result::Result<T, Error>;
