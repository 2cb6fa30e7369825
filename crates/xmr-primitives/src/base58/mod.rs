//! Monero block Base58 encoding and decoding.
//!
//! Monero does not use Bitcoin's bignum Base58: the input is split into
//! 8-byte blocks, each encoded independently into a fixed 11-character
//! chunk (shorter for a trailing partial block). The fixed block size
//! makes the encoded length a function of the byte length alone, which
//! is why every standard address is exactly 95 characters.

use crate::PrimitivesError;

/// Encode a byte slice with Monero's fixed-block Base58 scheme.
///
/// # Arguments
/// * `data` - The bytes to encode.
///
/// # Returns
/// `Ok(String)` with the Base58 text, or an error if encoding fails.
pub fn encode(data: &[u8]) -> Result<String, PrimitivesError> {
    base58_monero::encode(data).map_err(|e| PrimitivesError::InvalidBase58(e.to_string()))
}

/// Decode a Monero block-Base58 string to a byte vector.
///
/// # Arguments
/// * `s` - The Base58 string to decode.
///
/// # Returns
/// `Ok(Vec<u8>)` on success, or an error for invalid characters or
/// malformed block sizes.
pub fn decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    base58_monero::decode(s).map_err(|e| PrimitivesError::InvalidBase58(e.to_string()))
}
