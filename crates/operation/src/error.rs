use thiserror::Error;
use tzproto_base58check::B58Error;
use tzproto_codec::CodecError;
use tzproto_keys::KeyError;

use crate::ContractId;

/// Errors from building, encoding, signing or decoding operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OpError {
    /// Bad binary encoding.
    #[error("codec: {0}")]
    Codec(#[from] CodecError),

    /// Bad Base58Check text.
    #[error("base58check: {0}")]
    Base58(#[from] B58Error),

    /// Key handling or signing failed.
    #[error("key: {0}")]
    Key(#[from] KeyError),

    /// Wanted a public key hash from an originated account.
    #[error("contract {0} is not an implicit account")]
    NotImplicit(ContractId),

    /// Named entrypoint with an empty name.
    #[error("entrypoint is not named")]
    EntrypointNotNamed,

    /// Binary contract id that's neither 22 nor 21 bytes.
    #[error("expected 22 or 21 bytes for a contract id, got {0}")]
    ContractIdLength(usize),

    /// Not even long enough to hold a signature.
    #[error("signed operation too short: {0} bytes")]
    TooShort(usize),

    /// Strict decoding found no implicit source to infer the signature type from.
    #[error("cannot infer signature type, no content has an implicit source")]
    SignatureTypeAmbiguous,
}

/// Wrapper result type.
pub type OpResult<T> = Result<T, OpError>;
