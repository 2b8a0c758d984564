use crate::CodecError;

/// Generic codec trait for types that go between bytes and values.
pub trait Codec: Sized {
    /// Decodes self from a decoder.
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError>;

    /// Encodes self into an encoder.
    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError>;
}

/// Generic decoder trait that reads inputs.
pub trait Decoder {
    /// Reads a variable-size buf.  This does NOT include length tagging.
    fn read_buf(&mut self, into: &mut [u8]) -> Result<(), CodecError>;

    /// Reads a fixed size buf.  This does NOT include length tagging.
    fn read_arr<const N: usize>(&mut self) -> Result<[u8; N], CodecError>;

    /// Returns the next byte without consuming it, if there is one.
    fn peek_u8(&self) -> Option<u8>;

    /// Returns the number of bytes left to read.
    fn remaining(&self) -> usize;

    /// Reads a single byte.
    fn read_u8(&mut self) -> Result<u8, CodecError> {
        let [b] = self.read_arr::<1>()?;
        Ok(b)
    }

    /// Reads `len` bytes into a new vec.
    ///
    /// The length is checked against the remaining input before anything is
    /// allocated, so a hostile length prefix can't force a large allocation.
    fn read_vec(&mut self, len: usize) -> Result<Vec<u8>, CodecError> {
        if len > self.remaining() {
            return Err(CodecError::OutOfBounds);
        }

        let mut buf = vec![0; len];
        self.read_buf(&mut buf)?;
        Ok(buf)
    }

    /// Returns if there is nothing left to read.
    fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

/// Generic encoder trait that writes outputs.
pub trait Encoder {
    /// Writes a buf.  This does NOT include length tagging.
    fn write_buf(&mut self, buf: &[u8]) -> Result<(), CodecError>;
}

/// Encoding to a vec buffer.
impl Encoder for Vec<u8> {
    fn write_buf(&mut self, buf: &[u8]) -> Result<(), CodecError> {
        self.extend_from_slice(buf);
        Ok(())
    }
}

/// Impl for byte arrays.
impl<const N: usize> Codec for [u8; N] {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        dec.read_arr::<N>()
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_buf(self)
    }
}

/// Booleans are a full byte, `0x00` for false and `0xff` for true.
impl Codec for bool {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        match dec.read_u8()? {
            0x00 => Ok(false),
            0xff => Ok(true),
            b => Err(CodecError::InvalidVariant("bool", b)),
        }
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_buf(&[if *self { 0xff } else { 0x00 }])
    }
}

/// Optional values are a bool presence flag followed by the value.
impl<T: Codec> Codec for Option<T> {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        if bool::decode(dec)? {
            T::decode(dec).map(Some)
        } else {
            Ok(None)
        }
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        match self {
            Some(v) => {
                true.encode(enc)?;
                v.encode(enc)
            }
            None => false.encode(enc),
        }
    }
}

/// Simple macro to wrap the fixed size int types, not much to see.
macro_rules! impl_int_codec {
    ( $ity:ident $bytes:literal ) => {
        impl Codec for $ity {
            fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
                let arr: [u8; $bytes] = dec.read_arr()?;
                Ok(<$ity>::from_be_bytes(arr))
            }

            fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
                enc.write_buf(&self.to_be_bytes())
            }
        }
    };
}

impl_int_codec!(u8 1);
impl_int_codec!(i8 1);
impl_int_codec!(u16 2);
impl_int_codec!(i16 2);
impl_int_codec!(u32 4);
impl_int_codec!(i32 4);
impl_int_codec!(u64 8);
impl_int_codec!(i64 8);
