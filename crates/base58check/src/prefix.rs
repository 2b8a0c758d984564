//! The prefix table.

use std::fmt;

/// A Base58Check prefix, identifying what kind of payload a string carries.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Prefix {
    /// `B`, block hash.
    BlockHash,
    /// `o`, operation hash.
    OperationHash,
    /// `Lo`, operation list hash.
    OperationListHash,
    /// `LLo`, operation list list hash.
    OperationListListHash,
    /// `P`, protocol hash.
    ProtocolHash,
    /// `Co`, context hash.
    ContextHash,
    /// `tz1`, Ed25519 public key hash.
    Ed25519PublicKeyHash,
    /// `tz2`, secp256k1 public key hash.
    Secp256k1PublicKeyHash,
    /// `tz3`, P256 public key hash.
    P256PublicKeyHash,
    /// `id`, cryptobox public key hash.
    CryptoboxPublicKeyHash,
    /// `edsk` (54 chars), Ed25519 seed.
    Ed25519Seed,
    /// `edpk`, Ed25519 public key.
    Ed25519PublicKey,
    /// `spsk`, secp256k1 secret key.
    Secp256k1SecretKey,
    /// `p2sk`, P256 secret key.
    P256SecretKey,
    /// `edesk`, encrypted Ed25519 seed.
    Ed25519EncryptedSeed,
    /// `spesk`, encrypted secp256k1 secret key.
    Secp256k1EncryptedSecretKey,
    /// `p2esk`, encrypted P256 secret key.
    P256EncryptedSecretKey,
    /// `sppk`, secp256k1 public key.
    Secp256k1PublicKey,
    /// `p2pk`, P256 public key.
    P256PublicKey,
    /// `SSp`, secp256k1 scalar.
    Secp256k1Scalar,
    /// `GSp`, secp256k1 element.
    Secp256k1Element,
    /// `edsk` (98 chars), Ed25519 secret key.
    Ed25519SecretKey,
    /// `edsig`, Ed25519 signature.
    Ed25519Signature,
    /// `spsig1`, secp256k1 signature.
    Secp256k1Signature,
    /// `p2sig`, P256 signature.
    P256Signature,
    /// `sig`, signature of unknown curve.
    GenericSignature,
    /// `Net`, chain id.
    ChainId,
    /// `KT1`, originated contract hash.
    ContractHash,
}

const TABLE: [Prefix; 28] = [
    Prefix::BlockHash,
    Prefix::OperationHash,
    Prefix::OperationListHash,
    Prefix::OperationListListHash,
    Prefix::ProtocolHash,
    Prefix::ContextHash,
    Prefix::Ed25519PublicKeyHash,
    Prefix::Secp256k1PublicKeyHash,
    Prefix::P256PublicKeyHash,
    Prefix::CryptoboxPublicKeyHash,
    Prefix::Ed25519Seed,
    Prefix::Ed25519PublicKey,
    Prefix::Secp256k1SecretKey,
    Prefix::P256SecretKey,
    Prefix::Ed25519EncryptedSeed,
    Prefix::Secp256k1EncryptedSecretKey,
    Prefix::P256EncryptedSecretKey,
    Prefix::Secp256k1PublicKey,
    Prefix::P256PublicKey,
    Prefix::Secp256k1Scalar,
    Prefix::Secp256k1Element,
    Prefix::Ed25519SecretKey,
    Prefix::Ed25519Signature,
    Prefix::Secp256k1Signature,
    Prefix::P256Signature,
    Prefix::GenericSignature,
    Prefix::ChainId,
    Prefix::ContractHash,
];

// Every entry must expect a payload.
const _: () = {
    let mut i = 0;
    while i < TABLE.len() {
        assert!(TABLE[i].payload_len() > 0, "prefix: zero payload length");
        i += 1;
    }
};

/// Every prefix, in the order decoding tries them.
///
/// Decoding picks the first entry whose bytes match, so this order is part of
/// the format.
pub static PREFIXES: [Prefix; 28] = TABLE;

impl Prefix {
    /// Number of payload bytes that follow the prefix.
    pub const fn payload_len(self) -> usize {
        match self {
            Self::BlockHash
            | Self::OperationHash
            | Self::OperationListHash
            | Self::OperationListListHash
            | Self::ProtocolHash
            | Self::ContextHash
            | Self::Ed25519Seed
            | Self::Ed25519PublicKey
            | Self::Secp256k1SecretKey
            | Self::P256SecretKey => 32,
            Self::Ed25519PublicKeyHash
            | Self::Secp256k1PublicKeyHash
            | Self::P256PublicKeyHash
            | Self::ContractHash => 20,
            Self::CryptoboxPublicKeyHash => 16,
            Self::Ed25519EncryptedSeed
            | Self::Secp256k1EncryptedSecretKey
            | Self::P256EncryptedSecretKey => 56,
            Self::Secp256k1PublicKey
            | Self::P256PublicKey
            | Self::Secp256k1Scalar
            | Self::Secp256k1Element => 33,
            Self::Ed25519SecretKey
            | Self::Ed25519Signature
            | Self::Secp256k1Signature
            | Self::P256Signature
            | Self::GenericSignature => 64,
            Self::ChainId => 4,
        }
    }

    /// Raw bytes put in front of the payload before encoding.
    pub const fn bytes(self) -> &'static [u8] {
        match self {
            Self::BlockHash => &[1, 52],
            Self::OperationHash => &[5, 116],
            Self::OperationListHash => &[133, 233],
            Self::OperationListListHash => &[29, 159, 109],
            Self::ProtocolHash => &[2, 170],
            Self::ContextHash => &[79, 199],
            Self::Ed25519PublicKeyHash => &[6, 161, 159],
            Self::Secp256k1PublicKeyHash => &[6, 161, 161],
            Self::P256PublicKeyHash => &[6, 161, 164],
            Self::CryptoboxPublicKeyHash => &[153, 103],
            Self::Ed25519Seed => &[13, 15, 58, 7],
            Self::Ed25519PublicKey => &[13, 15, 37, 217],
            Self::Secp256k1SecretKey => &[17, 162, 224, 201],
            Self::P256SecretKey => &[16, 81, 238, 189],
            Self::Ed25519EncryptedSeed => &[7, 90, 60, 179, 41],
            Self::Secp256k1EncryptedSecretKey => &[9, 237, 241, 174, 150],
            Self::P256EncryptedSecretKey => &[9, 48, 57, 115, 171],
            Self::Secp256k1PublicKey => &[3, 254, 226, 86],
            Self::P256PublicKey => &[3, 178, 139, 127],
            Self::Secp256k1Scalar => &[38, 248, 136],
            Self::Secp256k1Element => &[5, 92, 0],
            Self::Ed25519SecretKey => &[43, 246, 78, 7],
            Self::Ed25519Signature => &[9, 245, 205, 134, 18],
            Self::Secp256k1Signature => &[13, 115, 101, 19, 63],
            Self::P256Signature => &[54, 240, 44, 52],
            Self::GenericSignature => &[4, 130, 43],
            Self::ChainId => &[87, 82, 0],
            Self::ContractHash => &[2, 90, 121],
        }
    }

    /// Position in [`PREFIXES`].
    pub fn ordinal(self) -> usize {
        PREFIXES.iter().position(|p| *p == self).unwrap_or(PREFIXES.len())
    }
}

/// Shows the leading characters every string with this prefix shares and the
/// total string length, like `tz1(36)`.
impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lo = crate::encode_unchecked(*self, &vec![0x00; self.payload_len()]);
        let hi = crate::encode_unchecked(*self, &vec![0xff; self.payload_len()]);
        let common = lo
            .chars()
            .zip(hi.chars())
            .take_while(|(a, b)| a == b)
            .count();
        write!(f, "{}({})", &lo[..common], lo.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order() {
        assert_eq!(PREFIXES[0], Prefix::BlockHash);
        assert_eq!(PREFIXES[27], Prefix::ContractHash);
        assert_eq!(Prefix::Ed25519PublicKeyHash.ordinal(), 6);
        assert_eq!(Prefix::GenericSignature.ordinal(), 25);
    }

    #[test]
    fn test_prefix_bytes_unique() {
        for (i, a) in PREFIXES.iter().enumerate() {
            for b in &PREFIXES[i + 1..] {
                assert_ne!(a.bytes(), b.bytes(), "{a:?} and {b:?}");
            }
        }
    }

    #[test]
    fn test_display_markers() {
        assert_eq!(Prefix::OperationHash.to_string(), "o(51)");
        assert_eq!(Prefix::Ed25519PublicKey.to_string(), "edpk(54)");
        assert_eq!(Prefix::Ed25519SecretKey.to_string(), "edsk(98)");
        assert_eq!(Prefix::GenericSignature.to_string(), "sig(96)");
    }
}
