//! Base58Check text encoding for hashes, keys, addresses and signatures.
//!
//! A string is the base58 encoding of `prefix || payload || checksum`, where
//! the checksum is the first 4 bytes of a double SHA-256 over everything
//! before it.  The prefix bytes are chosen so the encoded string starts with a
//! recognizable marker like `tz1` or `edsig`.

mod error;
mod prefix;

pub use error::{B58Error, B58Result};
pub use prefix::{PREFIXES, Prefix};

use bitcoin::base58;
use bitcoin::hashes::{Hash, sha256d};

/// Length of the trailing checksum.
const CHECKSUM_LEN: usize = 4;

fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = sha256d::Hash::hash(data).to_byte_array();
    let mut out = [0; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}

/// Encodes without checking the payload length.
fn encode_unchecked(prefix: Prefix, payload: &[u8]) -> String {
    let mut buf = Vec::with_capacity(prefix.bytes().len() + payload.len() + CHECKSUM_LEN);
    buf.extend_from_slice(prefix.bytes());
    buf.extend_from_slice(payload);
    let cksum = checksum(&buf);
    buf.extend_from_slice(&cksum);
    base58::encode(&buf)
}

/// Encodes a payload under a prefix.  The payload must be exactly as long as
/// the prefix expects.
pub fn encode(prefix: Prefix, payload: &[u8]) -> B58Result<String> {
    if payload.len() != prefix.payload_len() {
        return Err(B58Error::PayloadLength {
            prefix,
            expected: prefix.payload_len(),
            actual: payload.len(),
        });
    }

    Ok(encode_unchecked(prefix, payload))
}

/// Decodes a string, returning which prefix it had and the payload after it.
///
/// The prefix is the first entry of [`PREFIXES`] whose bytes start the
/// decoded data.
pub fn decode(input: &str) -> B58Result<(Prefix, Vec<u8>)> {
    let raw = base58::decode(input).map_err(|e| B58Error::InvalidBase58(e.to_string()))?;
    if raw.len() <= CHECKSUM_LEN {
        return Err(B58Error::TooShort(raw.len()));
    }

    let (body, cksum) = raw.split_at(raw.len() - CHECKSUM_LEN);
    if checksum(body) != cksum {
        return Err(B58Error::ChecksumMismatch);
    }

    let prefix = PREFIXES
        .iter()
        .copied()
        .find(|p| body.starts_with(p.bytes()))
        .ok_or(B58Error::UnknownPrefix)?;

    let payload = &body[prefix.bytes().len()..];
    if payload.len() != prefix.payload_len() {
        return Err(B58Error::PayloadLength {
            prefix,
            expected: prefix.payload_len(),
            actual: payload.len(),
        });
    }

    Ok((prefix, payload.to_vec()))
}

/// Decodes a string that must carry one of the `expected` prefixes.
pub fn decode_with(expected: &[Prefix], input: &str) -> B58Result<(Prefix, Vec<u8>)> {
    let (prefix, payload) = decode(input)?;
    if !expected.contains(&prefix) {
        return Err(B58Error::UnexpectedPrefix(prefix));
    }
    Ok((prefix, payload))
}

/// Decodes a string with a single known prefix into a fixed size payload.
pub fn decode_exact<const N: usize>(prefix: Prefix, input: &str) -> B58Result<[u8; N]> {
    let (_, payload) = decode_with(&[prefix], input)?;
    payload.try_into().map_err(|v: Vec<u8>| B58Error::PayloadLength {
        prefix,
        expected: N,
        actual: v.len(),
    })
}
