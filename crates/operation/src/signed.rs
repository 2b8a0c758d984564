//! Signed operations, and working out the signature type when decoding one.
//!
//! Only the raw 64 signature bytes go over the wire.  The signature's type is
//! recovered from the curve of the first implicit source in the contents.

use tracing::*;
use tzproto_codec::{decode_buf_exact, encode_to_vec};
use tzproto_keys::hash::digest_256;
use tzproto_keys::{
    self as keys, Curve, PrivateKey, PublicKey, SIGNATURE_LEN, Signature, SignatureKind, Watermark,
};

use crate::{ContractId, OpError, OpResult, Operation, OperationHash};

/// Where a decoded signature's type came from.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SignatureInference {
    /// The curve of the first implicit source in the contents.
    FromSource(Curve),
    /// No implicit source, the signature was labelled generic.
    Fallback,
}

impl SignatureInference {
    fn kind(self) -> SignatureKind {
        match self {
            Self::FromSource(curve) => SignatureKind::for_curve(curve),
            Self::Fallback => SignatureKind::Generic,
        }
    }
}

/// Config for decoding operations.
#[derive(Copy, Clone, Debug, Default)]
pub struct DecodeConfig {
    strict_signature_inference: bool,
}

impl DecodeConfig {
    /// Constructs a new instance that falls back to generic signatures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether failing to infer the signature type is an error instead
    /// of a fallback to a generic signature.
    pub fn with_strict_signature_inference(mut self, strict: bool) -> Self {
        self.strict_signature_inference = strict;
        self
    }

    /// Attempts to decode an unsigned operation.
    pub fn try_decode_operation(&self, buf: &[u8]) -> OpResult<Operation> {
        Ok(decode_buf_exact(buf)?)
    }

    /// Attempts to decode a signed operation.
    pub fn try_decode_signed(&self, buf: &[u8]) -> OpResult<SignedOperation> {
        self.try_decode_signed_inner(buf).map(|(signed, _)| signed)
    }

    fn try_decode_signed_inner(&self, buf: &[u8]) -> OpResult<(SignedOperation, SignatureInference)> {
        let Some(split) = buf.len().checked_sub(SIGNATURE_LEN) else {
            return Err(OpError::TooShort(buf.len()));
        };
        let (op_buf, sig_buf) = buf.split_at(split);

        let operation = self.try_decode_operation(op_buf)?;
        let inference = infer_signature(&operation);
        if inference == SignatureInference::Fallback {
            if self.strict_signature_inference {
                return Err(OpError::SignatureTypeAmbiguous);
            }
            warn!(branch = %operation.branch(), "no implicit source in contents, using generic signature");
        }

        let mut bytes = [0; SIGNATURE_LEN];
        bytes.copy_from_slice(sig_buf);
        let signature = Signature::from_raw(inference.kind(), bytes);
        Ok((
            SignedOperation {
                operation,
                signature,
            },
            inference,
        ))
    }
}

fn infer_signature(op: &Operation) -> SignatureInference {
    op.contents()
        .iter()
        .filter_map(|c| c.source())
        .find_map(|src| match src {
            ContractId::Implicit(pkh) => Some(SignatureInference::FromSource(pkh.curve())),
            ContractId::Originated(_) => None,
        })
        .unwrap_or(SignatureInference::Fallback)
}

/// An operation along with its signature.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SignedOperation {
    operation: Operation,
    signature: Signature,
}

impl SignedOperation {
    /// Pairs an operation with an existing signature.
    pub fn new(operation: Operation, signature: Signature) -> Self {
        Self {
            operation,
            signature,
        }
    }

    /// Signs an operation under the operation watermark.
    pub fn sign(operation: Operation, key: &PrivateKey) -> OpResult<Self> {
        let buf = encode_to_vec(&operation)?;
        let signature = keys::sign(Watermark::Operation, &buf, key)?;
        debug!(kind = %signature.kind(), count = operation.contents().len(), "signed operation");
        Ok(Self::new(operation, signature))
    }

    /// Gets the operation.
    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    /// Gets the signature.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Encodes as the operation bytes followed by the raw signature.
    pub fn encode(&self) -> OpResult<Vec<u8>> {
        let mut buf = encode_to_vec(&self.operation)?;
        buf.extend_from_slice(self.signature.as_bytes());
        Ok(buf)
    }

    /// Decodes with the default config, falling back to a generic signature
    /// if the type can't be inferred.
    pub fn decode(buf: &[u8]) -> OpResult<Self> {
        DecodeConfig::new().try_decode_signed(buf)
    }

    /// Like [`Self::decode`], also saying how the signature type was found.
    pub fn decode_with_inference(buf: &[u8]) -> OpResult<(Self, SignatureInference)> {
        DecodeConfig::new().try_decode_signed_inner(buf)
    }

    /// Hash of the signed bytes, which identifies the operation on chain.
    pub fn hash(&self) -> OpResult<OperationHash> {
        Ok(OperationHash::new(digest_256(&self.encode()?)))
    }

    /// Checks the signature against a public key.
    pub fn verify(&self, public_key: &PublicKey) -> OpResult<()> {
        let buf = encode_to_vec(&self.operation)?;
        keys::verify(Watermark::Operation, &buf, &self.signature, public_key)?;
        Ok(())
    }
}
