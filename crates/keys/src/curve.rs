use std::fmt;

use tzproto_base58check::Prefix;

/// Curves keys can live on.  The discriminant is the wire tag.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Curve {
    /// Ed25519, `tz1` addresses.
    Ed25519,
    /// secp256k1, `tz2` addresses.
    Secp256k1,
    /// NIST P-256, `tz3` addresses.
    P256,
}

impl Curve {
    /// Tag byte used in binary key and key hash encodings.
    pub const fn tag(self) -> u8 {
        match self {
            Self::Ed25519 => 0,
            Self::Secp256k1 => 1,
            Self::P256 => 2,
        }
    }

    /// Inverse of [`Self::tag`].
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Ed25519),
            1 => Some(Self::Secp256k1),
            2 => Some(Self::P256),
            _ => None,
        }
    }

    /// Prefix for hashes of public keys on this curve.
    pub const fn public_key_hash_prefix(self) -> Prefix {
        match self {
            Self::Ed25519 => Prefix::Ed25519PublicKeyHash,
            Self::Secp256k1 => Prefix::Secp256k1PublicKeyHash,
            Self::P256 => Prefix::P256PublicKeyHash,
        }
    }

    /// Curve whose public key hashes use `prefix`, if any.
    pub const fn from_public_key_hash_prefix(prefix: Prefix) -> Option<Self> {
        match prefix {
            Prefix::Ed25519PublicKeyHash => Some(Self::Ed25519),
            Prefix::Secp256k1PublicKeyHash => Some(Self::Secp256k1),
            Prefix::P256PublicKeyHash => Some(Self::P256),
            _ => None,
        }
    }

    /// Prefix for public keys on this curve.
    pub const fn public_key_prefix(self) -> Prefix {
        match self {
            Self::Ed25519 => Prefix::Ed25519PublicKey,
            Self::Secp256k1 => Prefix::Secp256k1PublicKey,
            Self::P256 => Prefix::P256PublicKey,
        }
    }

    /// Prefix for secret keys on this curve.
    pub const fn secret_key_prefix(self) -> Prefix {
        match self {
            Self::Ed25519 => Prefix::Ed25519SecretKey,
            Self::Secp256k1 => Prefix::Secp256k1SecretKey,
            Self::P256 => Prefix::P256SecretKey,
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ed25519 => "ed25519",
            Self::Secp256k1 => "secp256k1",
            Self::P256 => "p256",
        })
    }
}
