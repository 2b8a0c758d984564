use thiserror::Error;

use crate::Prefix;

/// Errors from Base58Check encoding and decoding.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum B58Error {
    /// The string has characters outside the base58 alphabet.
    #[error("invalid base58: {0}")]
    InvalidBase58(String),

    /// The decoded data can't even hold a checksum.
    #[error("not valid base58check (only {0} bytes)")]
    TooShort(usize),

    /// The trailing checksum doesn't match the data.
    #[error("b58check checksum failed")]
    ChecksumMismatch,

    /// The decoded data doesn't start with any known prefix.
    #[error("unknown base58check prefix")]
    UnknownPrefix,

    /// The payload isn't the size its prefix calls for.
    #[error("unexpected length for prefix {prefix} ({actual} != {expected})")]
    PayloadLength {
        /// Prefix the payload was under.
        prefix: Prefix,
        /// Length the prefix calls for.
        expected: usize,
        /// Length we actually had.
        actual: usize,
    },

    /// A valid string, but not one of the kinds that was asked for.
    #[error("unexpected base58check prefix {0}")]
    UnexpectedPrefix(Prefix),
}

/// Wrapper result type.
pub type B58Result<T> = Result<T, B58Error>;
