//! Simple decoder for a flat buffer.

use crate::errors::CodecError;
use crate::types::Decoder;

/// Decoder for an arbitrary [`AsRef`] on a byte slice.
///
/// Every read advances the cursor, and a read that would run past the end of
/// the buffer fails with [`CodecError::OutOfBounds`] without consuming
/// anything.  You probably don't need to use this directly, see
/// [`crate::decode_buf_exact`] and [`crate::encode_to_vec`].
#[derive(Debug)]
pub struct BufDecoder<B> {
    buf: B,
    at: usize,
}

impl<B: AsRef<[u8]>> BufDecoder<B> {
    /// Constructs a new instance by wrapping a buffer and starting at the
    /// beginning.
    pub fn new(buf: B) -> Self {
        Self { buf, at: 0 }
    }

    /// Returns the length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.buf.as_ref().len()
    }

    /// Returns if the underlying buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.as_ref().is_empty()
    }

    /// Returns how many bytes have been consumed so far.
    pub fn position(&self) -> usize {
        self.at
    }

    /// Returns the slice of the remaining unread bytes, which might be empty.
    pub fn rest(&self) -> &[u8] {
        &self.buf.as_ref()[self.at..]
    }

    fn take(&mut self, n: usize) -> Result<&[u8], CodecError> {
        if n > Decoder::remaining(self) {
            return Err(CodecError::OutOfBounds);
        }

        let start = self.at;
        self.at += n;
        Ok(&self.buf.as_ref()[start..self.at])
    }
}

impl<B: AsRef<[u8]>> Decoder for BufDecoder<B> {
    fn read_buf(&mut self, into: &mut [u8]) -> Result<(), CodecError> {
        let src = self.take(into.len())?;
        into.copy_from_slice(src);
        Ok(())
    }

    fn read_arr<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let mut buf = [0; N];
        buf.copy_from_slice(self.take(N)?);
        Ok(buf)
    }

    fn peek_u8(&self) -> Option<u8> {
        self.rest().first().copied()
    }

    fn remaining(&self) -> usize {
        self.len() - self.at
    }
}
