//! Byte strings with a 4 byte big-endian length tag.

use crate::errors::CodecError;
use crate::types::{Codec, Decoder, Encoder};

/// The largest length any dynamically sized field may have, about 1 billion.
pub const MAX_DYNAMIC_LEN: u32 = 0x3fff_ffff;

/// Opaque byte string encoded as a `u32` length followed by the bytes.
///
/// There is an optional length bound that can be set with the `BOUND` const
/// generic param.  Bounds over [`MAX_DYNAMIC_LEN`] don't do anything
/// differently than [`MAX_DYNAMIC_LEN`] itself.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct LenBytes<const BOUND: u32 = MAX_DYNAMIC_LEN> {
    inner: Vec<u8>,
}

impl<const BOUND: u32> LenBytes<BOUND> {
    /// Returns the effective max size for this type.
    pub const fn max_len() -> usize {
        if BOUND < MAX_DYNAMIC_LEN {
            BOUND as usize
        } else {
            MAX_DYNAMIC_LEN as usize
        }
    }

    /// Wraps a vec, if it's in bounds.
    pub fn new(inner: Vec<u8>) -> Result<Self, CodecError> {
        check_len::<BOUND>(inner.len())?;
        Ok(Self { inner })
    }

    /// Gets the wrapped bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.inner
    }

    /// Takes out the inner vec.
    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }

    /// Gets the number of wrapped bytes, not counting the length tag.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns if there are no wrapped bytes.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

fn check_len<const BOUND: u32>(len: usize) -> Result<(), CodecError> {
    if len > LenBytes::<BOUND>::max_len() {
        return Err(CodecError::OverflowContainer(len));
    }
    Ok(())
}

impl<const BOUND: u32> AsRef<[u8]> for LenBytes<BOUND> {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl<const BOUND: u32> TryFrom<Vec<u8>> for LenBytes<BOUND> {
    type Error = CodecError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<const BOUND: u32> Codec for LenBytes<BOUND> {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        let len = u32::decode(dec)? as usize;
        check_len::<BOUND>(len)?;
        let inner = dec.read_vec(len)?;
        Ok(Self { inner })
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        check_len::<BOUND>(self.inner.len())?;
        (self.inner.len() as u32).encode(enc)?;
        enc.write_buf(&self.inner)
    }
}
