use tzproto_codec::{Codec, CodecError, Decoder, Encoder, LenBytes};

use crate::OpResult;

/// Code and initial storage of an originated contract.
///
/// Both are opaque Micheline blobs, each at most 2^30 - 1 bytes.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ContractScript {
    code: LenBytes,
    storage: LenBytes,
}

impl ContractScript {
    /// Constructs a new instance, checking the size bounds.
    pub fn new(code: Vec<u8>, storage: Vec<u8>) -> OpResult<Self> {
        Ok(Self {
            code: LenBytes::new(code)?,
            storage: LenBytes::new(storage)?,
        })
    }

    /// Gets the code bytes.
    pub fn code(&self) -> &[u8] {
        self.code.as_slice()
    }

    /// Gets the storage bytes.
    pub fn storage(&self) -> &[u8] {
        self.storage.as_slice()
    }
}

impl Codec for ContractScript {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        let code = LenBytes::decode(dec)?;
        let storage = LenBytes::decode(dec)?;
        Ok(Self { code, storage })
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        self.code.encode(enc)?;
        self.storage.encode(enc)
    }
}

#[cfg(test)]
mod tests {
    use tzproto_codec::{decode_buf_exact, encode_to_vec};

    use super::*;

    #[test]
    fn test_script_layout() {
        let script = ContractScript::new(vec![0x03, 0x6c], vec![0x03, 0x6c]).expect("test: new");
        let buf = encode_to_vec(&script).expect("test: encode");
        assert_eq!(hex::encode(&buf), "00000002036c00000002036c");
        assert_eq!(decode_buf_exact::<ContractScript>(&buf), Ok(script));
    }

    #[test]
    fn test_script_truncated() {
        for h in ["", "00000002", "00000002c0de00", "00000002c0de00000007"] {
            let buf = hex::decode(h).expect("test: hex");
            assert_eq!(
                decode_buf_exact::<ContractScript>(&buf),
                Err(CodecError::OutOfBounds),
                "input {h}"
            );
        }
    }

    #[test]
    fn test_script_huge_declared_code() {
        // declared length over the bound is rejected before reading anything
        let buf = hex::decode("ffffffff00").expect("test: hex");
        assert!(matches!(
            decode_buf_exact::<ContractScript>(&buf),
            Err(CodecError::OverflowContainer(_))
        ));

        // in bounds but longer than the input
        let buf = hex::decode("3fffffff00").expect("test: hex");
        assert_eq!(
            decode_buf_exact::<ContractScript>(&buf),
            Err(CodecError::OutOfBounds)
        );
    }
}
