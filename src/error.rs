//! Error types for the oid map.

use std::fmt;

use crate::oid::Oid;

/// The result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for oid map operations.
///
/// A missing key is not represented here: [`OidMap::get`](crate::OidMap::get)
/// returns `Option` because absence is an expected outcome, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An insert was attempted for an identifier that is already present.
    ///
    /// This is a caller invariant violation rather than a data condition:
    /// the map never overwrites silently, and callers are expected to treat
    /// this as unrecoverable (log and terminate). The map itself is left
    /// exactly as it was before the failed insert.
    DuplicateOid(Oid),

    /// An identifier was built from input of the wrong length.
    InvalidLength {
        /// The required length.
        expected: usize,
        /// The length that was provided.
        actual: usize,
    },

    /// An identifier string contained a non-hexadecimal byte.
    InvalidHex {
        /// The offending input byte.
        byte: u8,
    },

    /// An invalid argument was provided.
    InvalidArgument(String),
}

impl Error {
    /// Creates a new invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DuplicateOid(oid) => write!(f, "duplicate object id: {}", oid),
            Error::InvalidLength { expected, actual } => {
                write!(f, "invalid length: expected {}, got {}", expected, actual)
            }
            Error::InvalidHex { byte } => {
                write!(f, "invalid hex byte: {:#04x}", byte)
            }
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
