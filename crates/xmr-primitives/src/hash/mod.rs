//! Hash function primitives for the Monero SDK.
//!
//! Monero uses Keccak-256 with the original (pre-NIST) padding rule,
//! not the standardized SHA3-256. `sha3::Keccak256` implements exactly
//! that variant.

use sha3::{Digest, Keccak256};

/// Compute the Keccak-256 hash of the input data.
///
/// This is the legacy Keccak padding variant used throughout Monero,
/// not NIST SHA3-256.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte Keccak-256 digest.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the Keccak-256 hash of several byte slices fed in sequence.
///
/// Equivalent to hashing the concatenation of all parts, without
/// allocating an intermediate buffer. Used for the address checksum,
/// which covers `network byte || spend key || view key`.
///
/// # Arguments
/// * `parts` - Byte slices to hash, in order.
///
/// # Returns
/// A 32-byte Keccak-256 digest.
pub fn keccak256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}
