//! Zarith variable-length integers.
//!
//! Numbers are split into 7-bit groups, least significant group first.  Every
//! byte but the last has its high bit set.  Signed numbers carry the sign in
//! bit 6 of the first byte, which leaves only 6 value bits in that byte.
//!
//! ```txt
//! natural:  1ggggggg 1ggggggg ... 0ggggggg
//! signed:   1svvvvvv 1ggggggg ... 0ggggggg   (or 0svvvvvv alone)
//! ```

use std::fmt;

use num_bigint::{BigInt, BigUint, Sign};

use crate::errors::{CodecError, CodecResult};
use crate::types::{Codec, Decoder, Encoder};

const CONTINUATION: u8 = 0x80;
const GROUP_MASK: u8 = 0x7f;
const SIGN_BIT: u8 = 0x40;
const FIRST_SIGNED_MASK: u8 = 0x3f;

/// Encodes a natural number.
pub fn encode_nat(n: &BigUint) -> Vec<u8> {
    let mut out = Vec::with_capacity(n.bits() as usize / 7 + 1);
    let mut rest = n.clone();
    loop {
        let group = low_byte(&rest) & GROUP_MASK;
        rest >>= 7;
        if rest.bits() == 0 {
            out.push(group);
            return out;
        }
        out.push(group | CONTINUATION);
    }
}

/// Encodes a number that must not be negative.
pub fn encode_unsigned(n: &BigInt) -> CodecResult<Vec<u8>> {
    if n.sign() == Sign::Minus {
        return Err(CodecError::NegativeNatural);
    }
    Ok(encode_nat(n.magnitude()))
}

/// Encodes a signed number.
pub fn encode_signed(n: &BigInt) -> Vec<u8> {
    let mag = n.magnitude();
    let mut first = low_byte(mag) & FIRST_SIGNED_MASK;
    if n.sign() == Sign::Minus {
        first |= SIGN_BIT;
    }

    let rest = mag >> 6u32;
    if rest.bits() == 0 {
        return vec![first];
    }

    let mut out = vec![first | CONTINUATION];
    out.extend(encode_nat(&rest));
    out
}

/// Decodes a natural number that spans exactly the whole buffer.
pub fn decode_unsigned(buf: &[u8]) -> CodecResult<BigUint> {
    check_exact(buf)?;
    Ok(fold_groups(buf, 0))
}

/// Decodes a signed number that spans exactly the whole buffer.
pub fn decode_signed(buf: &[u8]) -> CodecResult<BigInt> {
    check_exact(buf)?;
    Ok(signed_from_groups(buf))
}

/// Decodes the natural number at the start of `stream`, returning it along
/// with the number of bytes it took up.  Anything after it is left alone.
pub fn read_next(stream: &[u8]) -> CodecResult<(BigUint, usize)> {
    let len = terminated_len(stream)?;
    Ok((fold_groups(&stream[..len], 0), len))
}

/// Signed version of [`read_next`].
pub fn read_next_signed(stream: &[u8]) -> CodecResult<(BigInt, usize)> {
    let len = terminated_len(stream)?;
    Ok((signed_from_groups(&stream[..len]), len))
}

fn low_byte(n: &BigUint) -> u8 {
    n.iter_u32_digits().next().map_or(0, |d| d as u8)
}

fn terminated_len(stream: &[u8]) -> CodecResult<usize> {
    stream
        .iter()
        .position(|b| b & CONTINUATION == 0)
        .map(|i| i + 1)
        .ok_or(CodecError::UnterminatedZarith)
}

fn check_exact(buf: &[u8]) -> CodecResult<()> {
    let Some((last, init)) = buf.split_last() else {
        return Err(CodecError::MalformedZarith);
    };

    if last & CONTINUATION != 0 || init.iter().any(|b| b & CONTINUATION == 0) {
        return Err(CodecError::MalformedZarith);
    }

    Ok(())
}

fn fold_groups(groups: &[u8], base_shift: u64) -> BigUint {
    let mut value = BigUint::default();
    for (i, b) in groups.iter().enumerate() {
        value |= BigUint::from(b & GROUP_MASK) << (base_shift + 7 * i as u64);
    }
    value
}

/// Callers make sure `groups` is non-empty.
fn signed_from_groups(groups: &[u8]) -> BigInt {
    let (first, rest) = match groups.split_first() {
        Some((first, rest)) => (*first, rest),
        None => return BigInt::default(),
    };

    let mag = BigUint::from(first & FIRST_SIGNED_MASK) | fold_groups(rest, 6);
    let sign = if first & SIGN_BIT != 0 {
        Sign::Minus
    } else {
        Sign::Plus
    };
    BigInt::from_biguint(sign, mag)
}

/// Reads the raw bytes of one number off a decoder, up to and including the
/// terminating byte.
fn read_groups(dec: &mut impl Decoder) -> CodecResult<Vec<u8>> {
    let mut groups = Vec::new();
    loop {
        let b = dec.read_u8().map_err(|e| match e {
            CodecError::OutOfBounds => CodecError::UnterminatedZarith,
            e => e,
        })?;
        groups.push(b);
        if b & CONTINUATION == 0 {
            return Ok(groups);
        }
    }
}

/// Arbitrary-precision natural number, zarith encoded on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nat(BigUint);

impl Nat {
    /// Wraps a value.
    pub fn new(v: BigUint) -> Self {
        Self(v)
    }

    /// Builds a natural from a signed value, failing if it's negative.
    pub fn try_from_signed(v: &BigInt) -> CodecResult<Self> {
        v.to_biguint().map(Self).ok_or(CodecError::NegativeNatural)
    }

    /// Gets a ref to the inner value.
    pub fn inner(&self) -> &BigUint {
        &self.0
    }

    /// Converts to the inner value.
    pub fn into_inner(self) -> BigUint {
        self.0
    }
}

impl From<BigUint> for Nat {
    fn from(v: BigUint) -> Self {
        Self(v)
    }
}

impl From<u64> for Nat {
    fn from(v: u64) -> Self {
        Self(BigUint::from(v))
    }
}

impl fmt::Display for Nat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Codec for Nat {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        let groups = read_groups(dec)?;
        Ok(Self(fold_groups(&groups, 0)))
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_buf(&encode_nat(&self.0))
    }
}

/// Arbitrary-precision signed integer, zarith encoded on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Int(BigInt);

impl Int {
    /// Wraps a value.
    pub fn new(v: BigInt) -> Self {
        Self(v)
    }

    /// Gets a ref to the inner value.
    pub fn inner(&self) -> &BigInt {
        &self.0
    }

    /// Converts to the inner value.
    pub fn into_inner(self) -> BigInt {
        self.0
    }
}

impl From<BigInt> for Int {
    fn from(v: BigInt) -> Self {
        Self(v)
    }
}

impl From<i64> for Int {
    fn from(v: i64) -> Self {
        Self(BigInt::from(v))
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Codec for Int {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        let groups = read_groups(dec)?;
        Ok(Self(signed_from_groups(&groups)))
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_buf(&encode_signed(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{BufDecoder, decode_buf_exact, encode_to_vec};

    fn nat(s: &str) -> BigUint {
        s.parse().expect("test: parse nat")
    }

    fn int(s: &str) -> BigInt {
        s.parse().expect("test: parse int")
    }

    fn hex_bytes(s: &str) -> Vec<u8> {
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).expect("test: hex"))
            .collect()
    }

    const UNSIGNED_VECTORS: &[(&str, &str)] = &[
        ("0", "00"),
        ("1", "01"),
        ("7", "07"),
        ("32", "20"),
        ("200", "c801"),
        ("4096", "8020"),
        ("10100", "f44e"),
        ("50000", "d08603"),
        ("100000000", "80c2d72f"),
    ];

    const SIGNED_VECTORS: &[(&str, &str)] = &[
        ("0", "00"),
        ("1", "01"),
        ("138", "8a02"),
        ("-64", "c001"),
        ("-120053", "f5d30e"),
        ("1000000", "80897a"),
        ("30268635200", "80e1b5c2e101"),
        ("610913435200", "80f9b9d4c723"),
    ];

    #[test]
    fn test_unsigned_vectors() {
        for (dec, hex) in UNSIGNED_VECTORS {
            assert_eq!(encode_nat(&nat(dec)), hex_bytes(hex), "encoding {dec}");
            assert_eq!(
                decode_unsigned(&hex_bytes(hex)).expect("test: decode"),
                nat(dec),
                "decoding {hex}"
            );
        }
    }

    #[test]
    fn test_signed_vectors() {
        for (dec, hex) in SIGNED_VECTORS {
            assert_eq!(encode_signed(&int(dec)), hex_bytes(hex), "encoding {dec}");
            assert_eq!(
                decode_signed(&hex_bytes(hex)).expect("test: decode"),
                int(dec),
                "decoding {hex}"
            );
        }
    }

    #[test]
    fn test_unsigned_rejects_negative() {
        assert_eq!(encode_unsigned(&int("-1")), Err(CodecError::NegativeNatural));
        assert_eq!(
            encode_unsigned(&int("50000")).expect("test: encode"),
            hex_bytes("d08603")
        );
        assert_eq!(
            Nat::try_from_signed(&int("-5")),
            Err(CodecError::NegativeNatural)
        );
    }

    #[test]
    fn test_decode_malformed() {
        assert_eq!(decode_unsigned(&[]), Err(CodecError::MalformedZarith));
        assert_eq!(decode_signed(&[]), Err(CodecError::MalformedZarith));
        // Last byte still wants more.
        assert_eq!(decode_unsigned(&[0xd0, 0x86]), Err(CodecError::MalformedZarith));
        // Terminator in the middle.
        assert_eq!(decode_unsigned(&[0x01, 0x01]), Err(CodecError::MalformedZarith));
    }

    #[test]
    fn test_read_next_leaves_trailer() {
        let stream = hex_bytes("d08603c801ff");
        let (v, n) = read_next(&stream).expect("test: read_next");
        assert_eq!(v, nat("50000"));
        assert_eq!(n, 3);

        let (v, n) = read_next(&stream[n..]).expect("test: read_next");
        assert_eq!(v, nat("200"));
        assert_eq!(n, 2);

        let (v, n) = read_next_signed(&hex_bytes("c00100")).expect("test: read_next");
        assert_eq!(v, int("-64"));
        assert_eq!(n, 2);
    }

    #[test]
    fn test_read_next_unterminated() {
        assert_eq!(read_next(&[]), Err(CodecError::UnterminatedZarith));
        assert_eq!(read_next(&[0x80, 0xff]), Err(CodecError::UnterminatedZarith));
        assert_eq!(read_next_signed(&[0xc0]), Err(CodecError::UnterminatedZarith));
    }

    #[test]
    fn test_codec_stream() {
        let mut buf = Vec::new();
        Nat::from(10100).encode(&mut buf).expect("test: encode");
        Int::from(-120053).encode(&mut buf).expect("test: encode");
        assert_eq!(buf, hex_bytes("f44ef5d30e"));

        let mut dec = BufDecoder::new(&buf);
        assert_eq!(Nat::decode(&mut dec).expect("test: decode"), Nat::from(10100));
        assert_eq!(Int::decode(&mut dec).expect("test: decode"), Int::from(-120053));
        assert!(dec.is_exhausted());
    }

    #[test]
    fn test_codec_unterminated() {
        assert_eq!(
            decode_buf_exact::<Nat>(&[0x80, 0x80]),
            Err(CodecError::UnterminatedZarith)
        );
        assert_eq!(decode_buf_exact::<Int>(&[]), Err(CodecError::UnterminatedZarith));
    }

    #[test]
    fn test_big_values() {
        let two_256 = BigUint::from(1u8) << 256u32;
        let enc = encode_nat(&two_256);
        assert_eq!(enc.len(), 37);
        assert_eq!(decode_unsigned(&enc).expect("test: decode"), two_256);

        let neg = -BigInt::from(two_256);
        let enc = encode_signed(&neg);
        assert_eq!(decode_signed(&enc).expect("test: decode"), neg);
    }

    fn any_biguint() -> impl Strategy<Value = BigUint> {
        prop::collection::vec(any::<u8>(), 0..40).prop_map(|b| BigUint::from_bytes_le(&b))
    }

    fn any_bigint() -> impl Strategy<Value = BigInt> {
        (any::<bool>(), any_biguint()).prop_map(|(neg, mag)| {
            let sign = if neg { Sign::Minus } else { Sign::Plus };
            BigInt::from_biguint(sign, mag)
        })
    }

    proptest! {
        #[test]
        fn proptest_unsigned_roundtrip(n in any_biguint()) {
            let enc = encode_nat(&n);
            prop_assert_eq!(decode_unsigned(&enc).expect("test: decode"), n);
        }

        #[test]
        fn proptest_signed_roundtrip(n in any_bigint()) {
            let enc = encode_signed(&n);
            prop_assert_eq!(decode_signed(&enc).expect("test: decode"), n);
        }

        #[test]
        fn proptest_read_next_with_trailer(n in any_biguint(), extra in prop::collection::vec(any::<u8>(), 0..8)) {
            let enc = encode_nat(&n);
            let mut stream = enc.clone();
            stream.extend(&extra);
            let (v, used) = read_next(&stream).expect("test: read_next");
            prop_assert_eq!(v, n);
            prop_assert_eq!(used, enc.len());
        }

        #[test]
        fn proptest_codec_matches_free_fns(n in any_biguint()) {
            let nat = Nat::new(n.clone());
            let buf = encode_to_vec(&nat).expect("test: encode");
            prop_assert_eq!(&buf, &encode_nat(&n));
            prop_assert_eq!(decode_buf_exact::<Nat>(&buf).expect("test: decode"), nat);
        }
    }
}
