//! Error types.

use core::fmt::{self, Display};

/// Result type with the `recrypt-group` crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors produced by curve contexts, scalars, and group elements.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The curve's group order or generator could not be obtained from the
    /// backend, so no context could be established.
    ContextInvalid,

    /// The operands of a binary operation were derived from different curve
    /// contexts.
    CrossContextMismatch,

    /// The backend arithmetic engine failed; currently only reachable when
    /// the random number generator repeatedly produces out-of-range values.
    ArithmeticBackend,

    /// The value has no modular inverse with respect to the group order.
    NotInvertible,

    /// The input bytes do not decode to a valid scalar or curve point.
    InvalidEncoding,

    /// The operation requires a concrete curve point, but the value is the
    /// point at infinity.
    PointNotSet,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ContextInvalid => f.write_str("curve context unavailable"),
            Error::CrossContextMismatch => f.write_str("operands belong to different curve contexts"),
            Error::ArithmeticBackend => f.write_str("arithmetic backend failure"),
            Error::NotInvertible => f.write_str("value is not invertible modulo the group order"),
            Error::InvalidEncoding => f.write_str("invalid scalar or point encoding"),
            Error::PointNotSet => f.write_str("point at infinity has no coordinates"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
