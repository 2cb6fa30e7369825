//! The seed-to-keys derivation pipeline.
//!
//! seed -> private spend key (reduce mod L) -> private view key
//! (keccak256 of the spend key bytes, reduced mod L) -> public keys
//! (base-point multiplication). Every step is a pure function; only
//! malformed hex or short input can fail.

use xmr_primitives::ec::PrivateKey;
use xmr_primitives::hash::keccak256;
use xmr_primitives::PrimitivesError;

use crate::KeysError;

/// Minimum seed length in bytes; longer input is truncated to this.
const SEED_BYTES_LEN: usize = 32;

/// Derive the private spend and view keys from seed bytes.
///
/// Requires at least 32 bytes and uses the first 32. The spend key is
/// the reduced seed; the view key is derived from the spend key as in
/// [`view_key_from_spend_key`].
pub fn keys_from_seed(seed: &[u8]) -> Result<(PrivateKey, PrivateKey), KeysError> {
    if seed.len() < SEED_BYTES_LEN {
        return Err(PrimitivesError::InvalidKeyLength {
            expected: SEED_BYTES_LEN,
            got: seed.len(),
        }
        .into());
    }
    let spend = PrivateKey::from_bytes(&seed[..SEED_BYTES_LEN])?;
    let view = view_key_from_spend_key(&spend);
    Ok((spend, view))
}

/// Derive the private view key from a private spend key.
///
/// keccak256 of the spend key bytes, reduced modulo L. Usable on its
/// own when only the spend key is known.
pub fn view_key_from_spend_key(spend: &PrivateKey) -> PrivateKey {
    PrivateKey::from_array(keccak256(&spend.to_bytes()))
}

/// Derive the private spend and view keys from a hex seed.
///
/// Returns the pair as lowercase hex strings.
pub fn derive_private_keys_from_hex_seed(
    hex_seed: &str,
) -> Result<(String, String), KeysError> {
    let bytes = hex::decode(hex_seed)?;
    let (spend, view) = keys_from_seed(&bytes)?;
    Ok((spend.to_hex(), view.to_hex()))
}

/// Derive the private view key from a hex private spend key.
pub fn derive_private_view_key_from_private_spend_key(
    private_spend_key: &str,
) -> Result<String, KeysError> {
    let spend = private_key_from_hex(private_spend_key)?;
    Ok(view_key_from_spend_key(&spend).to_hex())
}

/// Derive the public key for a hex private key.
///
/// Base-point multiplication of the reduced scalar, serialized as the
/// 32-byte compressed point in lowercase hex.
pub fn derive_public_key_from_private_key(private_key: &str) -> Result<String, KeysError> {
    let key = private_key_from_hex(private_key)?;
    Ok(key.pub_key().to_hex())
}

/// Decode a hex private key, requiring at least 32 bytes and using the
/// first 32.
fn private_key_from_hex(hex_str: &str) -> Result<PrivateKey, KeysError> {
    let bytes = hex::decode(hex_str)?;
    if bytes.len() < SEED_BYTES_LEN {
        return Err(PrimitivesError::InvalidKeyLength {
            expected: SEED_BYTES_LEN,
            got: bytes.len(),
        }
        .into());
    }
    Ok(PrivateKey::from_bytes(&bytes[..SEED_BYTES_LEN])?)
}
