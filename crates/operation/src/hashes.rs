//! 32 byte hashes that identify blocks and operations.

use std::fmt;
use std::str::FromStr;

use tzproto_base58check::{self as b58, Prefix};
use tzproto_codec::impl_wrapper_codec;

use crate::OpError;

macro_rules! impl_hash_type {
    ($name:ident, $prefix:expr) => {
        impl $name {
            /// Wraps raw hash bytes.
            pub const fn new(bytes: [u8; 32]) -> Self {
                Self(bytes)
            }

            /// Gets the raw hash bytes.
            pub fn as_bytes(&self) -> &[u8; 32] {
                &self.0
            }
        }

        impl From<[u8; 32]> for $name {
            fn from(bytes: [u8; 32]) -> Self {
                Self(bytes)
            }
        }

        impl_wrapper_codec!($name => [u8; 32]);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let s = b58::encode($prefix, &self.0).map_err(|_| fmt::Error)?;
                f.write_str(&s)
            }
        }

        impl FromStr for $name {
            type Err = OpError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(b58::decode_exact($prefix, s)?))
            }
        }
    };
}

/// Hash of the block an operation is anchored to, `B...` in text.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BranchId([u8; 32]);

impl_hash_type!(BranchId, Prefix::BlockHash);

/// Hash of a signed operation, `o...` in text.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct OperationHash([u8; 32]);

impl_hash_type!(OperationHash, Prefix::OperationHash);
