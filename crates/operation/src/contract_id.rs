//! Account addresses, implicit (`tz1`/`tz2`/`tz3`) and originated (`KT1`).

use std::fmt;
use std::str::FromStr;

use tzproto_base58check::{self as b58, B58Error, Prefix};
use tzproto_codec::{Codec, CodecError, Decoder, Encoder, decode_buf_exact};
use tzproto_keys::hash::{digest_160, digest_parts};
use tzproto_keys::{Curve, KeyError, NativePublicKey, PublicKey};

use crate::{OpError, OpResult, OperationHash};

/// Length of the binary contract id.
pub const CONTRACT_ID_LEN: usize = 22;

/// Length of the binary tagged public key hash.
pub const PUBLIC_KEY_HASH_LEN: usize = 21;

const ORIGINATED_PADDING: u8 = 0;

/// Blake2b-160 hash of a public key, along with the key's curve.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PublicKeyHash {
    curve: Curve,
    hash: [u8; 20],
}

impl PublicKeyHash {
    /// Constructs a new instance.
    pub const fn new(curve: Curve, hash: [u8; 20]) -> Self {
        Self { curve, hash }
    }

    /// Hashes a public key.
    pub fn from_public_key(pk: &PublicKey) -> Self {
        Self::new(pk.curve(), pk.hash())
    }

    /// Gets the curve.
    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// Gets the hash bytes.
    pub fn hash(&self) -> &[u8; 20] {
        &self.hash
    }
}

/// Curve tag followed by the hash.
impl Codec for PublicKeyHash {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        let tag = dec.read_u8()?;
        let curve = Curve::from_tag(tag).ok_or(CodecError::InvalidVariant("public key hash", tag))?;
        Ok(Self::new(curve, dec.read_arr()?))
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_buf(&[self.curve.tag()])?;
        enc.write_buf(&self.hash)
    }
}

impl fmt::Display for PublicKeyHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = b58::encode(self.curve.public_key_hash_prefix(), &self.hash)
            .map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

/// Whether an account is controlled by a key or by a contract.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AccountType {
    /// Controlled by a key, `tz...`.
    Implicit,
    /// Created by an origination, `KT1...`.
    Originated,
}

/// An account address.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ContractId {
    /// Account named by the hash of its key.
    Implicit(PublicKeyHash),
    /// Account named by the hash of the operation that originated it.
    Originated([u8; 20]),
}

impl ContractId {
    /// The implicit account of an Ed25519 public key.
    ///
    /// Keys on other curves aren't supported here, use
    /// [`PublicKeyHash::from_public_key`] for those.
    pub fn from_public_key(pk: &PublicKey) -> OpResult<Self> {
        match pk.to_native()? {
            NativePublicKey::Ed25519(vk) => Ok(Self::Implicit(PublicKeyHash::new(
                Curve::Ed25519,
                digest_160(vk.as_bytes()),
            ))),
            _ => Err(KeyError::UnsupportedCurve(pk.curve()).into()),
        }
    }

    /// The address of the `nonce`th account originated by an operation,
    /// counting from 0.
    pub fn from_origination(op_hash: &OperationHash, nonce: u32) -> Self {
        let nonce = nonce.to_be_bytes();
        Self::Originated(digest_parts(&[&op_hash.as_bytes()[..], &nonce[..]]))
    }

    /// Decodes either the 22 byte contract id or the 21 byte tagged public
    /// key hash.
    pub fn unmarshal(buf: &[u8]) -> OpResult<Self> {
        match buf.len() {
            CONTRACT_ID_LEN => Ok(decode_buf_exact(buf)?),
            PUBLIC_KEY_HASH_LEN => Ok(Self::Implicit(decode_buf_exact(buf)?)),
            n => Err(OpError::ContractIdLength(n)),
        }
    }

    /// Gets the account type.
    pub fn account_type(&self) -> AccountType {
        match self {
            Self::Implicit(_) => AccountType::Implicit,
            Self::Originated(_) => AccountType::Originated,
        }
    }

    /// Gets the public key hash, if this is an implicit account.
    pub fn public_key_hash(&self) -> Option<&PublicKeyHash> {
        match self {
            Self::Implicit(pkh) => Some(pkh),
            Self::Originated(_) => None,
        }
    }

    /// The 21 byte tagged public key hash of an implicit account.
    pub fn encode_pub_key_hash(&self) -> OpResult<[u8; PUBLIC_KEY_HASH_LEN]> {
        let pkh = self.public_key_hash().ok_or(OpError::NotImplicit(*self))?;
        let mut out = [0; PUBLIC_KEY_HASH_LEN];
        out[0] = pkh.curve.tag();
        out[1..].copy_from_slice(&pkh.hash);
        Ok(out)
    }
}

impl From<PublicKeyHash> for ContractId {
    fn from(pkh: PublicKeyHash) -> Self {
        Self::Implicit(pkh)
    }
}

/// `00 || tagged pkh` or `01 || contract hash || 00`.
impl Codec for ContractId {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        match dec.read_u8()? {
            0 => Ok(Self::Implicit(PublicKeyHash::decode(dec)?)),
            1 => {
                let hash = dec.read_arr()?;
                let pad = dec.read_u8()?;
                if pad != ORIGINATED_PADDING {
                    return Err(CodecError::InvalidVariant("contract id padding", pad));
                }
                Ok(Self::Originated(hash))
            }
            tag => Err(CodecError::InvalidVariant("contract id", tag)),
        }
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        match self {
            Self::Implicit(pkh) => {
                enc.write_buf(&[0])?;
                pkh.encode(enc)
            }
            Self::Originated(hash) => {
                enc.write_buf(&[1])?;
                enc.write_buf(hash)?;
                enc.write_buf(&[ORIGINATED_PADDING])
            }
        }
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Implicit(pkh) => fmt::Display::fmt(pkh, f),
            Self::Originated(hash) => {
                let s = b58::encode(Prefix::ContractHash, hash).map_err(|_| fmt::Error)?;
                f.write_str(&s)
            }
        }
    }
}

impl FromStr for ContractId {
    type Err = OpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, payload) = b58::decode(s)?;
        let hash: [u8; 20] = payload.try_into().map_err(|v: Vec<u8>| B58Error::PayloadLength {
            prefix,
            expected: 20,
            actual: v.len(),
        })?;

        if prefix == Prefix::ContractHash {
            return Ok(Self::Originated(hash));
        }
        match Curve::from_public_key_hash_prefix(prefix) {
            Some(curve) => Ok(Self::Implicit(PublicKeyHash::new(curve, hash))),
            None => Err(B58Error::UnexpectedPrefix(prefix).into()),
        }
    }
}
