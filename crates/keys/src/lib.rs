//! Keys, signatures and watermarked signing over Ed25519, secp256k1 and P256.
//!
//! All key material is a curve tag plus raw bytes, and shows up as
//! Base58Check text with a curve specific prefix.  Signing always hashes the
//! watermarked message with blake2b-256 first and signs the digest.

mod curve;
mod error;
pub mod hash;
mod private;
mod public;
#[cfg(feature = "serde")]
mod serde;
mod sign;
mod signature;
mod watermark;

pub use curve::Curve;
pub use error::{KeyError, KeyResult};
pub use private::{PrivateKey, PrivateKeySeed};
pub use public::{NativePublicKey, PublicKey};
pub use sign::{sign, sign_message, signing_digest, verify, verify_message};
pub use signature::{SIGNATURE_LEN, Signature, SignatureKind};
pub use watermark::Watermark;

#[cfg(test)]
use serde_json as _;
