use std::fmt;
use std::str::FromStr;

use tzproto_base58check::{self as b58, B58Error, Prefix};

use crate::{Curve, KeyError, KeyResult, PublicKey};

/// Secret key on one of the supported curves.
///
/// Ed25519 keys keep the 64 byte keypair form, seed followed by public key.
#[derive(Clone, Eq, PartialEq)]
pub enum PrivateKey {
    /// `edsk`, 64 bytes.
    Ed25519([u8; 64]),
    /// `spsk`, a 32 byte scalar.
    Secp256k1([u8; 32]),
    /// `p2sk`, a 32 byte scalar.
    P256([u8; 32]),
}

const SECRET_KEY_PREFIXES: [Prefix; 3] = [
    Prefix::Ed25519SecretKey,
    Prefix::Secp256k1SecretKey,
    Prefix::P256SecretKey,
];

impl PrivateKey {
    /// Gets the curve.
    pub fn curve(&self) -> Curve {
        match self {
            Self::Ed25519(_) => Curve::Ed25519,
            Self::Secp256k1(_) => Curve::Secp256k1,
            Self::P256(_) => Curve::P256,
        }
    }

    /// Gets the raw secret bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Ed25519(b) => b,
            Self::Secp256k1(b) | Self::P256(b) => b,
        }
    }

    /// Derives the matching public key.
    pub fn public_key(&self) -> KeyResult<PublicKey> {
        match self {
            Self::Ed25519(kp) => {
                let sk = ed25519_signing_key(kp)?;
                Ok(PublicKey::Ed25519(sk.verifying_key().to_bytes()))
            }
            Self::Secp256k1(b) => {
                let sk = k256_signing_key(b)?;
                let point = sk.verifying_key().to_encoded_point(true);
                PublicKey::from_curve_bytes(Curve::Secp256k1, point.as_bytes())
            }
            Self::P256(b) => {
                let sk = p256_signing_key(b)?;
                let point = sk.verifying_key().to_encoded_point(true);
                PublicKey::from_curve_bytes(Curve::P256, point.as_bytes())
            }
        }
    }
}

pub(crate) fn ed25519_signing_key(kp: &[u8; 64]) -> KeyResult<ed25519_dalek::SigningKey> {
    ed25519_dalek::SigningKey::from_keypair_bytes(kp).map_err(|e| KeyError::invalid_key(Curve::Ed25519, e))
}

pub(crate) fn k256_signing_key(b: &[u8; 32]) -> KeyResult<k256::ecdsa::SigningKey> {
    k256::ecdsa::SigningKey::from_slice(b).map_err(|e| KeyError::invalid_key(Curve::Secp256k1, e))
}

pub(crate) fn p256_signing_key(b: &[u8; 32]) -> KeyResult<p256::ecdsa::SigningKey> {
    p256::ecdsa::SigningKey::from_slice(b).map_err(|e| KeyError::invalid_key(Curve::P256, e))
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey({}, <redacted>)", self.curve())
    }
}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = b58::encode(self.curve().secret_key_prefix(), self.as_bytes())
            .map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl FromStr for PrivateKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, payload) = b58::decode_with(&SECRET_KEY_PREFIXES, s)?;
        let bad_len = |curve| {
            move |v: Vec<u8>| KeyError::invalid_key(curve, format!("bad length {}", v.len()))
        };
        Ok(match prefix {
            Prefix::Ed25519SecretKey => {
                Self::Ed25519(payload.try_into().map_err(bad_len(Curve::Ed25519))?)
            }
            Prefix::Secp256k1SecretKey => {
                Self::Secp256k1(payload.try_into().map_err(bad_len(Curve::Secp256k1))?)
            }
            Prefix::P256SecretKey => Self::P256(payload.try_into().map_err(bad_len(Curve::P256))?),
            p => return Err(B58Error::UnexpectedPrefix(p).into()),
        })
    }
}

/// A 32 byte Ed25519 seed, the short `edsk` form.
#[derive(Clone, Eq, PartialEq)]
pub struct PrivateKeySeed([u8; 32]);

impl PrivateKeySeed {
    /// Wraps raw seed bytes.
    pub const fn new(seed: [u8; 32]) -> Self {
        Self(seed)
    }

    /// Expands the seed into the full keypair form.
    pub fn private_key(&self) -> PrivateKey {
        let sk = ed25519_dalek::SigningKey::from_bytes(&self.0);
        PrivateKey::Ed25519(sk.to_keypair_bytes())
    }
}

impl fmt::Debug for PrivateKeySeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKeySeed(<redacted>)")
    }
}

impl fmt::Display for PrivateKeySeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = b58::encode(Prefix::Ed25519Seed, &self.0).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl FromStr for PrivateKeySeed {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(b58::decode_exact(Prefix::Ed25519Seed, s)?))
    }
}

#[cfg(test)]
mod tests {
    use tzproto_codec::encode_to_vec;

    use super::*;
    use crate::NativePublicKey;

    const EDSK: &str = "edskRc9Pr1NKUW9x6kAZb9cFerBWMo9X9dW4fXwzzL2rvKyKPfdJaJVUcYCfR37sbBujAXJXVJZoCXsUHzfhNcWuqy9aGunQPk";
    const EDPK: &str = "edpkuhEcwoLysLvodRxQLzuM3AVZvCuT6koVkUahS53mNBdE8LbuGo";
    const ED_PUB_HEX: &str = "8a88e3dd7409f195fd52db2d3cba5d72ca6709bf1d94121bf3748801b40f6f5c";

    #[test]
    fn test_ed25519_secret_key() {
        let sk: PrivateKey = EDSK.parse().expect("test: parse");
        assert_eq!(sk.curve(), Curve::Ed25519);
        assert_eq!(
            hex::encode(sk.as_bytes()),
            format!("{}{ED_PUB_HEX}", "01".repeat(32))
        );
        assert_eq!(sk.to_string(), EDSK);

        let pk = sk.public_key().expect("test: derive");
        assert_eq!(pk.to_string(), EDPK);
        assert_eq!(
            hex::encode(encode_to_vec(&pk).expect("test: encode")),
            format!("00{ED_PUB_HEX}")
        );
    }

    #[test]
    fn test_seed_expands_to_keypair() {
        let seed = PrivateKeySeed::new([1; 32]);
        let sk = seed.private_key();
        assert_eq!(sk.to_string(), EDSK);

        let text = seed.to_string();
        assert!(text.starts_with("edsk"));
        assert_eq!(text.parse::<PrivateKeySeed>(), Ok(seed));
    }

    #[test]
    fn test_secp256k1_secret_key() {
        let s = "spsk1S1KpLsBEXYYw3nQEGHdNQDTjpBsJH9Y86XZVJNobHFkxezaPv";
        let sk: PrivateKey = s.parse().expect("test: parse");
        assert_eq!(
            hex::encode(sk.as_bytes()),
            "0101010101010101024798bbd525dd3cfffad755af8ea0fffbbb8dec79497fc2"
        );
        assert_eq!(sk.to_string(), s);

        let pk = sk.public_key().expect("test: derive");
        assert_eq!(pk.curve(), Curve::Secp256k1);
        let native = pk.to_native().expect("test: native");
        assert!(matches!(native, NativePublicKey::Secp256k1(_)));
        assert_eq!(PublicKey::from_native(&native), Ok(pk));
    }

    #[test]
    fn test_p256_secret_key() {
        let s = "p2sk2Mg6PgZcQ3hvj3SV6CXZvSGthGM9T91YENMMAwemHKx2AJRxU6";
        let sk: PrivateKey = s.parse().expect("test: parse");
        assert_eq!(
            hex::encode(sk.as_bytes()),
            "02020201fefefeff01445d62b55152b9866561ee015f71beb5a0b12157501662"
        );
        let pk = sk.public_key().expect("test: derive");
        assert_eq!(pk.curve(), Curve::P256);
        assert_eq!(pk.as_bytes().len(), 33);
    }

    #[test]
    fn test_debug_is_redacted() {
        let sk: PrivateKey = EDSK.parse().expect("test: parse");
        assert_eq!(format!("{sk:?}"), "PrivateKey(ed25519, <redacted>)");
    }

    #[test]
    fn test_rejects_public_key_text() {
        let err = EDPK.parse::<PrivateKey>().unwrap_err();
        assert_eq!(
            err,
            KeyError::Base58(B58Error::UnexpectedPrefix(Prefix::Ed25519PublicKey))
        );
    }
}
