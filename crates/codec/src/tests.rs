use crate::{BufDecoder, Codec, CodecError, Decoder, decode_buf_exact, encode_to_vec, expect_tag};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Level(i32);

crate::impl_wrapper_codec!(Level => i32);

#[test]
fn test_wrapper_macro() {
    let b = encode_to_vec(&Level(9)).expect("test: encode_to_vec");
    assert_eq!(b, [0, 0, 0, 9]);

    let back: Level = decode_buf_exact(&b).expect("test: decode");
    assert_eq!(back, Level(9));

    let neg = encode_to_vec(&Level(-2)).expect("test: encode_to_vec");
    assert_eq!(neg, [0xff, 0xff, 0xff, 0xfe]);
}

#[test]
fn test_bool_wire_values() {
    assert_eq!(encode_to_vec(&true).expect("test: encode"), [0xff]);
    assert_eq!(encode_to_vec(&false).expect("test: encode"), [0x00]);
    assert_eq!(decode_buf_exact::<bool>(&[0xff]), Ok(true));
    assert_eq!(
        decode_buf_exact::<bool>(&[0x01]),
        Err(CodecError::InvalidVariant("bool", 0x01))
    );
}

#[test]
fn test_option_flag() {
    let some = encode_to_vec(&Some(7u16)).expect("test: encode");
    assert_eq!(some, [0xff, 0x00, 0x07]);
    let none = encode_to_vec(&None::<u16>).expect("test: encode");
    assert_eq!(none, [0x00]);

    assert_eq!(decode_buf_exact::<Option<u16>>(&some), Ok(Some(7)));
    assert_eq!(decode_buf_exact::<Option<u16>>(&none), Ok(None));
    assert_eq!(
        decode_buf_exact::<Option<u16>>(&[0xff, 0x00]),
        Err(CodecError::OutOfBounds)
    );
}

#[test]
fn test_decode_exact_leftovers() {
    assert_eq!(
        decode_buf_exact::<u16>(&[1, 2, 3]),
        Err(CodecError::ExtraInput)
    );
    assert_eq!(decode_buf_exact::<u32>(&[1, 2, 3]), Err(CodecError::OutOfBounds));
}

#[test]
fn test_expect_tag() {
    let mut dec = BufDecoder::new([0x6c, 0x6d]);
    expect_tag(&mut dec, 0x6c).expect("test: tag");
    assert_eq!(
        expect_tag(&mut dec, 0x6c),
        Err(CodecError::WrongTag {
            expected: 0x6c,
            actual: 0x6d
        })
    );
    assert_eq!(expect_tag(&mut dec, 0x6c), Err(CodecError::OutOfBounds));
}

#[test]
fn test_sequential_ints() {
    let mut buf = Vec::new();
    0x0102u16.encode(&mut buf).expect("test: encode");
    (-1i8).encode(&mut buf).expect("test: encode");
    0xdead_beefu32.encode(&mut buf).expect("test: encode");

    let mut dec = BufDecoder::new(&buf);
    assert_eq!(u16::decode(&mut dec), Ok(0x0102));
    assert_eq!(i8::decode(&mut dec), Ok(-1));
    assert_eq!(u32::decode(&mut dec), Ok(0xdead_beef));
    assert_eq!(dec.remaining(), 0);
}
