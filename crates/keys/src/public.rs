use std::fmt;
use std::str::FromStr;

use tzproto_base58check::{self as b58, B58Error, Prefix};
use tzproto_codec::{Codec, CodecError, Decoder, Encoder};

use crate::hash::digest_160;
use crate::{Curve, KeyError, KeyResult};

/// Public key on one of the supported curves.
///
/// secp256k1 and P256 keys are compressed SEC1 points.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PublicKey {
    /// `edpk`.
    Ed25519([u8; 32]),
    /// `sppk`.
    Secp256k1([u8; 33]),
    /// `p2pk`.
    P256([u8; 33]),
}

/// A public key as the curve library understands it.
#[derive(Clone, Debug)]
pub enum NativePublicKey {
    /// Ed25519 point.
    Ed25519(ed25519_dalek::VerifyingKey),
    /// secp256k1 point.
    Secp256k1(k256::ecdsa::VerifyingKey),
}

const PUBLIC_KEY_PREFIXES: [Prefix; 3] = [
    Prefix::Ed25519PublicKey,
    Prefix::Secp256k1PublicKey,
    Prefix::P256PublicKey,
];

impl PublicKey {
    /// Builds a key from a curve and raw bytes of the right length.
    pub fn from_curve_bytes(curve: Curve, bytes: &[u8]) -> KeyResult<Self> {
        let bad_len = |_| KeyError::invalid_key(curve, format!("bad length {}", bytes.len()));
        Ok(match curve {
            Curve::Ed25519 => Self::Ed25519(bytes.try_into().map_err(bad_len)?),
            Curve::Secp256k1 => Self::Secp256k1(bytes.try_into().map_err(bad_len)?),
            Curve::P256 => Self::P256(bytes.try_into().map_err(bad_len)?),
        })
    }

    /// Gets the curve.
    pub fn curve(&self) -> Curve {
        match self {
            Self::Ed25519(_) => Curve::Ed25519,
            Self::Secp256k1(_) => Curve::Secp256k1,
            Self::P256(_) => Curve::P256,
        }
    }

    /// Gets the raw key bytes, without the curve tag.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Ed25519(b) => b,
            Self::Secp256k1(b) | Self::P256(b) => b,
        }
    }

    /// Blake2b-160 digest of the raw key bytes.
    pub fn hash(&self) -> [u8; 20] {
        digest_160(self.as_bytes())
    }

    /// Converts to the curve library's key type, which validates the point.
    ///
    /// P256 keys can't be converted, since we don't decompress P256 points.
    pub fn to_native(&self) -> KeyResult<NativePublicKey> {
        match self {
            Self::Ed25519(b) => ed25519_dalek::VerifyingKey::from_bytes(b)
                .map(NativePublicKey::Ed25519)
                .map_err(|e| KeyError::invalid_key(Curve::Ed25519, e)),
            Self::Secp256k1(b) => k256::ecdsa::VerifyingKey::from_sec1_bytes(b)
                .map(NativePublicKey::Secp256k1)
                .map_err(|e| KeyError::invalid_key(Curve::Secp256k1, e)),
            Self::P256(_) => Err(KeyError::UnsupportedCurve(Curve::P256)),
        }
    }

    /// Converts from the curve library's key type.
    pub fn from_native(native: &NativePublicKey) -> KeyResult<Self> {
        match native {
            NativePublicKey::Ed25519(vk) => Ok(Self::Ed25519(vk.to_bytes())),
            NativePublicKey::Secp256k1(vk) => {
                let point = vk.to_encoded_point(true);
                Self::from_curve_bytes(Curve::Secp256k1, point.as_bytes())
            }
        }
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = b58::encode(self.curve().public_key_prefix(), self.as_bytes())
            .map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl FromStr for PublicKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, payload) = b58::decode_with(&PUBLIC_KEY_PREFIXES, s)?;
        let curve = match prefix {
            Prefix::Ed25519PublicKey => Curve::Ed25519,
            Prefix::Secp256k1PublicKey => Curve::Secp256k1,
            Prefix::P256PublicKey => Curve::P256,
            p => return Err(B58Error::UnexpectedPrefix(p).into()),
        };
        Self::from_curve_bytes(curve, &payload)
    }
}

/// Curve tag followed by the raw key bytes.
impl Codec for PublicKey {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        let tag = dec.read_u8()?;
        match Curve::from_tag(tag) {
            Some(Curve::Ed25519) => Ok(Self::Ed25519(dec.read_arr()?)),
            Some(Curve::Secp256k1) => Ok(Self::Secp256k1(dec.read_arr()?)),
            Some(Curve::P256) => Ok(Self::P256(dec.read_arr()?)),
            None => Err(CodecError::InvalidVariant("public key", tag)),
        }
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_buf(&[self.curve().tag()])?;
        enc.write_buf(self.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use tzproto_codec::{decode_buf_exact, encode_to_vec};

    use super::*;

    #[test]
    fn test_ed25519_binary_form() {
        let pk: PublicKey = "edpkuhEcwoLysLvodRxQLzuM3AVZvCuT6koVkUahS53mNBdE8LbuGo"
            .parse()
            .expect("test: parse");
        let buf = encode_to_vec(&pk).expect("test: encode");
        assert_eq!(
            hex::encode(&buf),
            "008a88e3dd7409f195fd52db2d3cba5d72ca6709bf1d94121bf3748801b40f6f5c"
        );
        assert_eq!(decode_buf_exact::<PublicKey>(&buf), Ok(pk));
        assert!(matches!(pk.to_native(), Ok(NativePublicKey::Ed25519(_))));
    }

    #[test]
    fn test_secp256k1_binary_form() {
        let s = "sppk7czDjVPj1o3hVLeErZTi6brjZNYGc6jFWzFVvW3oRnki3XB58Yq";
        let pk: PublicKey = s.parse().expect("test: parse");
        assert_eq!(pk.curve(), Curve::Secp256k1);
        assert_eq!(
            hex::encode(encode_to_vec(&pk).expect("test: encode")),
            "0103e4f8056521e0da9cfbb85bf7023d45089588c143e7cf4f784ff319cdc9c42385"
        );
        assert_eq!(pk.to_string(), s);
    }

    #[test]
    fn test_p256_has_no_native_form() {
        let pk: PublicKey = "p2pk653txU6DqbwmfVrpRjs3kWsMfFZD2bZxuDoMbNbu3FQ4s557mHT"
            .parse()
            .expect("test: parse");
        assert_eq!(
            hex::encode(encode_to_vec(&pk).expect("test: encode")),
            "02023ef92fb44bb6d204854a511f775947ff762d493357c1b91205ba173171f61a2c"
        );
        assert!(matches!(
            pk.to_native(),
            Err(KeyError::UnsupportedCurve(Curve::P256))
        ));
    }

    #[test]
    fn test_decode_bad_tag_and_truncation() {
        assert_eq!(
            decode_buf_exact::<PublicKey>(&[3; 33]),
            Err(CodecError::InvalidVariant("public key", 3))
        );
        assert_eq!(
            decode_buf_exact::<PublicKey>(&[0; 10]),
            Err(CodecError::OutOfBounds)
        );
        assert_eq!(decode_buf_exact::<PublicKey>(&[]), Err(CodecError::OutOfBounds));
    }

    #[test]
    fn test_wrong_length_for_curve() {
        let err = PublicKey::from_curve_bytes(Curve::Secp256k1, &[2; 32]).unwrap_err();
        assert!(matches!(
            err,
            KeyError::InvalidKey {
                curve: Curve::Secp256k1,
                ..
            }
        ));
    }
}
