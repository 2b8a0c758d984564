//! Serde support for addresses and hashes.
//!
//! Human readable formats get the Base58Check text, binary formats get the
//! wire encoding as a byte string.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tzproto_codec::{Codec, decode_buf_exact, encode_to_vec};

use crate::{BranchId, ContractId, OperationHash};

struct WireVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for WireVisitor<T>
where
    T: Codec + FromStr,
    T::Err: fmt::Display,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a base58check string or its binary encoding")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        decode_buf_exact(v).map_err(E::custom)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut buf = Vec::new();
        while let Some(b) = seq.next_element::<u8>()? {
            buf.push(b);
        }
        self.visit_bytes(&buf)
    }
}

macro_rules! impl_wire_serde {
    ($($ty:ty),*) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    if serializer.is_human_readable() {
                        serializer.collect_str(self)
                    } else {
                        let buf = encode_to_vec(self).map_err(serde::ser::Error::custom)?;
                        serializer.serialize_bytes(&buf)
                    }
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    if deserializer.is_human_readable() {
                        deserializer.deserialize_str(WireVisitor(PhantomData))
                    } else {
                        deserializer.deserialize_bytes(WireVisitor(PhantomData))
                    }
                }
            }
        )*
    };
}

impl_wire_serde!(BranchId, ContractId, OperationHash);
