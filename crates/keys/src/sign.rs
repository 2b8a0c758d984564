//! Watermarked signing and verification.
//!
//! Every signature covers `blake2b-256(watermark || message)` rather than the
//! message itself.

use ed25519_dalek::{Signer, Verifier};
use k256::ecdsa::signature::hazmat::PrehashSigner;
use tracing::*;

use crate::hash::digest_parts;
use crate::private::{ed25519_signing_key, k256_signing_key, p256_signing_key};
use crate::{
    Curve, KeyError, KeyResult, PrivateKey, PublicKey, SIGNATURE_LEN, Signature, SignatureKind,
    Watermark,
};

/// The digest actually signed for `message` under `watermark`.
pub fn signing_digest(watermark: Watermark, message: &[u8]) -> [u8; 32] {
    let wm = [watermark.byte()];
    digest_parts(&[&wm[..], message])
}

/// Signs `message` under `watermark`.
///
/// Ed25519 keys produce an `edsig` signature.  ECDSA keys produce a compact
/// `r || s` signature labelled generic.
pub fn sign(watermark: Watermark, message: &[u8], key: &PrivateKey) -> KeyResult<Signature> {
    let digest = signing_digest(watermark, message);
    debug!(curve = %key.curve(), ?watermark, len = message.len(), "signing payload");

    match key {
        PrivateKey::Ed25519(kp) => {
            let sk = ed25519_signing_key(kp)?;
            let sig = sk.sign(&digest);
            Ok(Signature::from_raw(SignatureKind::Ed25519, sig.to_bytes()))
        }
        PrivateKey::Secp256k1(b) => {
            let sk = k256_signing_key(b)?;
            let sig: k256::ecdsa::Signature = sk
                .sign_prehash(&digest)
                .map_err(|e| signing_failed(Curve::Secp256k1, e))?;
            compact(Curve::Secp256k1, &sig.to_bytes())
        }
        PrivateKey::P256(b) => {
            let sk = p256_signing_key(b)?;
            let sig: p256::ecdsa::Signature = sk
                .sign_prehash(&digest)
                .map_err(|e| signing_failed(Curve::P256, e))?;
            compact(Curve::P256, &sig.to_bytes())
        }
    }
}

fn signing_failed(curve: Curve, e: impl ToString) -> KeyError {
    KeyError::SigningFailed {
        curve,
        reason: e.to_string(),
    }
}

fn compact(curve: Curve, rs: &[u8]) -> KeyResult<Signature> {
    let bytes: [u8; SIGNATURE_LEN] = rs
        .try_into()
        .map_err(|_| signing_failed(curve, format!("signature is {} bytes", rs.len())))?;
    Ok(Signature::from_raw(SignatureKind::Generic, bytes))
}

/// Checks `signature` over `message` under `watermark`.
///
/// Only Ed25519 keys can verify.  The signature must be labelled Ed25519 or
/// generic.
pub fn verify(
    watermark: Watermark,
    message: &[u8],
    signature: &Signature,
    public_key: &PublicKey,
) -> KeyResult<()> {
    match signature.kind() {
        SignatureKind::Ed25519 | SignatureKind::Generic => {}
        kind => return Err(KeyError::SignatureTypeMismatch(kind)),
    }

    let PublicKey::Ed25519(pk) = public_key else {
        return Err(KeyError::UnsupportedKeyType(public_key.curve()));
    };
    let vk = ed25519_dalek::VerifyingKey::from_bytes(pk)
        .map_err(|e| KeyError::invalid_key(Curve::Ed25519, e))?;

    let digest = signing_digest(watermark, message);
    let sig = ed25519_dalek::Signature::from_bytes(signature.as_bytes());
    vk.verify(&digest, &sig).map_err(|_| {
        trace!(?watermark, "signature rejected");
        KeyError::VerificationFailed
    })
}

/// Signs a text message under the text watermark.
pub fn sign_message(message: &str, key: &PrivateKey) -> KeyResult<Signature> {
    sign(Watermark::Text, message.as_bytes(), key)
}

/// Verifies a signature made by [`sign_message`].
pub fn verify_message(message: &str, signature: &Signature, public_key: &PublicKey) -> KeyResult<()> {
    verify(Watermark::Text, message.as_bytes(), signature, public_key)
}
