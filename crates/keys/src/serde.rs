//! Serde support for keys and signatures.
//!
//! Human readable formats get the Base58Check text.  Binary formats get the
//! tagged binary encoding for public keys, and the text for signatures since
//! the raw bytes lose the signature's label.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tzproto_codec::{decode_buf_exact, encode_to_vec};

use crate::{PublicKey, Signature};

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            let buf = encode_to_vec(self).map_err(serde::ser::Error::custom)?;
            serializer.serialize_bytes(&buf)
        }
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(TextVisitor::new("a base58check public key"))
        } else {
            deserializer.deserialize_bytes(PublicKeyBytesVisitor)
        }
    }
}

struct PublicKeyBytesVisitor;

impl<'de> Visitor<'de> for PublicKeyBytesVisitor {
    type Value = PublicKey;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a tagged public key")
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        decode_buf_exact(v).map_err(E::custom)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut buf = Vec::with_capacity(34);
        while let Some(b) = seq.next_element::<u8>()? {
            buf.push(b);
        }
        self.visit_bytes(&buf)
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(TextVisitor::new("a base58check signature"))
    }
}

/// Parses anything with a `FromStr` out of a string.
struct TextVisitor<T> {
    expecting: &'static str,
    _t: std::marker::PhantomData<T>,
}

impl<T> TextVisitor<T> {
    fn new(expecting: &'static str) -> Self {
        Self {
            expecting,
            _t: std::marker::PhantomData,
        }
    }
}

impl<'de, T> Visitor<'de> for TextVisitor<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expecting)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::{PrivateKeySeed, PublicKey, Signature, sign_message};

    #[test]
    fn test_json_uses_text() {
        let sk = PrivateKeySeed::new([1; 32]).private_key();
        let pk = sk.public_key().expect("test: derive");
        let sig = sign_message("hello", &sk).expect("test: sign");

        let pk_json = serde_json::to_string(&pk).expect("test: serialize");
        assert_eq!(
            pk_json,
            "\"edpkuhEcwoLysLvodRxQLzuM3AVZvCuT6koVkUahS53mNBdE8LbuGo\""
        );
        let back: PublicKey = serde_json::from_str(&pk_json).expect("test: deserialize");
        assert_eq!(back, pk);

        let sig_json = serde_json::to_string(&sig).expect("test: serialize");
        let back: Signature = serde_json::from_str(&sig_json).expect("test: deserialize");
        assert_eq!(back, sig);
    }

    #[test]
    fn test_json_rejects_wrong_prefix() {
        let res: Result<PublicKey, _> =
            serde_json::from_str("\"tz1KqTpEZ7Yob7QbPE4Hy4Wo8fHG8LhKxZSx\"");
        assert!(res.is_err());
    }
}
