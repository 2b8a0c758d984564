use std::str::Utf8Error;

use thiserror::Error;

/// Errors from encoding or decoding wire types.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// If a container is longer than its format allows.
    #[error("overflow container (len {0})")]
    OverflowContainer(usize),

    /// If we tried to read past the end of the underlying buffer.
    #[error("out of bounds exception: would overrun end of input")]
    OutOfBounds,

    /// If there was extra data in a buffer than we didn't consume reading a
    /// message.
    #[error("extra unnecessary input leftover")]
    ExtraInput,

    /// A tag byte that doesn't select any variant of the type being decoded.
    #[error("invalid {0} tag {1:#04x}")]
    InvalidVariant(&'static str, u8),

    /// A tag byte that doesn't match the one required by the decode path.
    #[error("wrong tag (expected {expected:#04x}, got {actual:#04x})")]
    WrongTag {
        /// Tag the decoder was asked for.
        expected: u8,
        /// Tag found in the input.
        actual: u8,
    },

    /// Zarith bytes with misplaced continuation bits.
    #[error("malformed zarith number")]
    MalformedZarith,

    /// Input ended before a zarith number's final byte.
    #[error("unterminated zarith number")]
    UnterminatedZarith,

    /// A negative value given to the natural number encoder.
    #[error("cannot encode negative value as natural number")]
    NegativeNatural,

    /// Text field was not valid UTF-8.
    #[error("invalid utf-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),

    /// A container that must hold at least one element was empty.
    #[error("empty {0}")]
    EmptyContainer(&'static str),
}

/// Wrapper result type.
pub type CodecResult<T> = Result<T, CodecError>;
