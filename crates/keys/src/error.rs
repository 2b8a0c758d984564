use thiserror::Error;
use tzproto_base58check::B58Error;
use tzproto_codec::CodecError;

use crate::{Curve, SignatureKind};

/// Errors from key handling, signing and verification.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    /// Bad Base58Check text.
    #[error("base58check: {0}")]
    Base58(#[from] B58Error),

    /// Bad binary encoding.
    #[error("codec: {0}")]
    Codec(#[from] CodecError),

    /// The operation isn't available for keys on this curve.
    #[error("unsupported curve {0}")]
    UnsupportedCurve(Curve),

    /// Verification was asked of a key we can't verify with.
    #[error("unsupported key type {0} for verification")]
    UnsupportedKeyType(Curve),

    /// The signature's declared type doesn't fit the verifying key.
    #[error("signature type {0} does not match key type")]
    SignatureTypeMismatch(SignatureKind),

    /// Key bytes rejected by the curve library.
    #[error("invalid {curve} key: {reason}")]
    InvalidKey {
        /// Curve the key was meant for.
        curve: Curve,
        /// What the curve library said.
        reason: String,
    },

    /// The curve library failed to produce a signature.
    #[error("signing with {curve} key failed: {reason}")]
    SigningFailed {
        /// Curve of the signing key.
        curve: Curve,
        /// What the curve library said.
        reason: String,
    },

    /// The signature doesn't match the message and key.
    #[error("signature verification failed")]
    VerificationFailed,
}

impl KeyError {
    pub(crate) fn invalid_key(curve: Curve, e: impl ToString) -> Self {
        Self::InvalidKey {
            curve,
            reason: e.to_string(),
        }
    }
}

/// Wrapper result type.
pub type KeyResult<T> = Result<T, KeyError>;
