//! Blake2b digests.

use blake2b_simd::Params;

/// Hashes the concatenation of `parts` to an `N` byte digest.
///
/// `N` must be between 1 and 64, checked at compile time.
pub fn digest_parts<const N: usize>(parts: &[&[u8]]) -> [u8; N] {
    const { assert!(N >= 1 && N <= 64, "blake2b digest length must be 1..=64") };

    let mut state = Params::new().hash_length(N).to_state();
    for part in parts {
        state.update(part);
    }

    let mut out = [0; N];
    out.copy_from_slice(state.finalize().as_bytes());
    out
}

/// 32 byte blake2b digest.
pub fn digest_256(data: &[u8]) -> [u8; 32] {
    digest_parts(&[data])
}

/// 20 byte blake2b digest, used for public key and contract hashes.
pub fn digest_160(data: &[u8]) -> [u8; 20] {
    digest_parts(&[data])
}
