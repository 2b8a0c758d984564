use std::fmt;
use std::str::FromStr;

use tzproto_base58check::{self as b58, Prefix};

use crate::{Curve, KeyError};

/// Length of every signature's raw bytes.
pub const SIGNATURE_LEN: usize = 64;

/// What a signature says about the curve that made it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SignatureKind {
    /// `edsig`.
    Ed25519,
    /// `spsig1`.
    Secp256k1,
    /// `p2sig`.
    P256,
    /// `sig`, curve not stated.
    Generic,
}

const SIGNATURE_PREFIXES: [Prefix; 4] = [
    Prefix::Ed25519Signature,
    Prefix::Secp256k1Signature,
    Prefix::P256Signature,
    Prefix::GenericSignature,
];

impl SignatureKind {
    /// Base58Check prefix for this kind.
    pub const fn prefix(self) -> Prefix {
        match self {
            Self::Ed25519 => Prefix::Ed25519Signature,
            Self::Secp256k1 => Prefix::Secp256k1Signature,
            Self::P256 => Prefix::P256Signature,
            Self::Generic => Prefix::GenericSignature,
        }
    }

    /// Kind using `prefix`, if it's a signature prefix.
    pub const fn from_prefix(prefix: Prefix) -> Option<Self> {
        match prefix {
            Prefix::Ed25519Signature => Some(Self::Ed25519),
            Prefix::Secp256k1Signature => Some(Self::Secp256k1),
            Prefix::P256Signature => Some(Self::P256),
            Prefix::GenericSignature => Some(Self::Generic),
            _ => None,
        }
    }

    /// The curve specific kind for a curve.
    pub const fn for_curve(curve: Curve) -> Self {
        match curve {
            Curve::Ed25519 => Self::Ed25519,
            Curve::Secp256k1 => Self::Secp256k1,
            Curve::P256 => Self::P256,
        }
    }
}

impl fmt::Display for SignatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ed25519 => "ed25519",
            Self::Secp256k1 => "secp256k1",
            Self::P256 => "p256",
            Self::Generic => "generic",
        })
    }
}

/// A 64 byte signature along with the kind it's labelled as.
///
/// The label only affects the text form.  On the wire only the raw bytes are
/// sent, so decoders have to guess the kind back, see
/// [`Signature::with_kind`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Signature {
    kind: SignatureKind,
    bytes: [u8; SIGNATURE_LEN],
}

impl Signature {
    /// Constructs a new instance from raw bytes.
    pub const fn from_raw(kind: SignatureKind, bytes: [u8; SIGNATURE_LEN]) -> Self {
        Self { kind, bytes }
    }

    /// Gets the kind.
    pub fn kind(&self) -> SignatureKind {
        self.kind
    }

    /// Gets the raw bytes, as sent on the wire.
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.bytes
    }

    /// Relabels the signature as another kind.
    pub fn with_kind(self, kind: SignatureKind) -> Self {
        Self { kind, ..self }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = b58::encode(self.kind.prefix(), &self.bytes).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl FromStr for Signature {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, payload) = b58::decode_with(&SIGNATURE_PREFIXES, s)?;
        let kind = SignatureKind::from_prefix(prefix).ok_or(b58::B58Error::UnexpectedPrefix(prefix))?;
        let bytes = payload
            .try_into()
            .map_err(|v: Vec<u8>| b58::B58Error::PayloadLength {
                prefix,
                expected: SIGNATURE_LEN,
                actual: v.len(),
            })?;
        Ok(Self::from_raw(kind, bytes))
    }
}
