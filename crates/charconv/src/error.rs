//! The facade crate's own error type (§10.3): a thin wrapper around
//! [`charconv_core::error::Error`], kept distinct so callers of this crate are
//! insulated from the internal crate split rather than seeing `charconv-core` types
//! directly at the public boundary.

use core::fmt;

/// Failure modes for [`crate::to_chars`]/[`crate::from_chars`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Error(charconv_core::error::Error);

impl Error {
    /// The input was malformed, or an unrecognized format was requested.
    pub const INVALID_ARGUMENT: Self = Self(charconv_core::error::Error::InvalidArgument);
    /// The result over/underflowed, or the output buffer was too small.
    pub const RESULT_OUT_OF_RANGE: Self = Self(charconv_core::error::Error::ResultOutOfRange);
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<charconv_core::error::Error> for Error {
    fn from(inner: charconv_core::error::Error) -> Self {
        Self(inner)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_inner_message() {
        assert_eq!(
            Error::INVALID_ARGUMENT.to_string(),
            charconv_core::error::Error::InvalidArgument.to_string()
        );
    }
}
