use tracing::*;
use tzproto_codec::{Codec, CodecError, Decoder, Encoder, encode_to_vec};
use tzproto_keys::{Watermark, signing_digest};

use crate::{BranchId, OpResult, OperationContents};

/// A branch plus a non-empty list of contents.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Operation {
    branch: BranchId,
    contents: Vec<OperationContents>,
}

impl Operation {
    /// Constructs a new instance, there must be at least one contents entry.
    pub fn new(branch: BranchId, contents: Vec<OperationContents>) -> OpResult<Self> {
        if contents.is_empty() {
            return Err(CodecError::EmptyContainer("operation contents").into());
        }
        Ok(Self { branch, contents })
    }

    /// Gets the branch.
    pub fn branch(&self) -> &BranchId {
        &self.branch
    }

    /// Gets the contents, in order.
    pub fn contents(&self) -> &[OperationContents] {
        &self.contents
    }

    /// Unwraps into the contents list.
    pub fn into_contents(self) -> Vec<OperationContents> {
        self.contents
    }

    /// The digest a signer signs, the operation watermark followed by the
    /// encoded operation.
    pub fn signable_hash(&self) -> OpResult<[u8; 32]> {
        let buf = encode_to_vec(self)?;
        Ok(signing_digest(Watermark::Operation, &buf))
    }
}

/// Contents run to the end of the input.
impl Codec for Operation {
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        let branch = BranchId::decode(dec)?;
        let mut contents = Vec::new();
        while !dec.is_exhausted() {
            contents.push(OperationContents::decode(dec)?);
        }
        if contents.is_empty() {
            return Err(CodecError::EmptyContainer("operation contents"));
        }
        debug!(%branch, count = contents.len(), "decoded operation");
        Ok(Self { branch, contents })
    }

    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        if self.contents.is_empty() {
            return Err(CodecError::EmptyContainer("operation contents"));
        }
        self.branch.encode(enc)?;
        for c in &self.contents {
            c.encode(enc)?;
        }
        Ok(())
    }
}
