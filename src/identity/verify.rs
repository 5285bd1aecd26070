use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Exact byte-for-byte match of `provided` against `known_good`.
///
/// Both sides are hashed first and the digests compared in constant time,
/// so neither the length nor a matching prefix of the known-good token
/// shows up in timing. No normalization or case folding.
pub fn verify(provided: &str, known_good: &str) -> bool {
    let provided = Sha256::digest(provided.as_bytes());
    let known_good = Sha256::digest(known_good.as_bytes());
    provided.as_slice().ct_eq(known_good.as_slice()).into()
}
