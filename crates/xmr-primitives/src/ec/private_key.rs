//! ed25519 private key scalar.
//!
//! Wraps a curve25519-dalek `Scalar` that is always reduced modulo the
//! group order L, the canonical form Monero expects for private spend
//! and view keys.

use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::scalar::Scalar;

use crate::ec::public_key::PublicKey;
use crate::PrimitivesError;

/// Length of a serialized private key in bytes.
const PRIVATE_KEY_BYTES_LEN: usize = 32;

/// An ed25519 private key scalar, reduced modulo the group order L.
///
/// Construction always reduces the input bytes, so every value of this
/// type is in canonical form. The key material is zeroized on drop.
#[derive(Clone, Debug)]
pub struct PrivateKey {
    /// The underlying reduced scalar.
    inner: Scalar,
}

impl PrivateKey {
    /// Create a private key from raw 32-byte little-endian scalar bytes.
    ///
    /// The bytes are reduced modulo the group order L, so any 32-byte
    /// input yields a valid key.
    ///
    /// # Arguments
    /// * `bytes` - A 32-byte slice holding the scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` on success, or an error if the slice is not
    /// exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != PRIVATE_KEY_BYTES_LEN {
            return Err(PrimitivesError::InvalidKeyLength {
                expected: PRIVATE_KEY_BYTES_LEN,
                got: bytes.len(),
            });
        }
        let mut raw = [0u8; PRIVATE_KEY_BYTES_LEN];
        raw.copy_from_slice(bytes);
        Ok(Self::from_array(raw))
    }

    /// Create a private key by reducing a 32-byte array modulo L.
    ///
    /// Infallible sibling of [`PrivateKey::from_bytes`] for callers
    /// that already hold a fixed-size array, such as a hash digest.
    pub fn from_array(bytes: [u8; PRIVATE_KEY_BYTES_LEN]) -> Self {
        PrivateKey {
            inner: Scalar::from_bytes_mod_order(bytes),
        }
    }

    /// Create a private key from a 64-character hexadecimal string.
    ///
    /// # Arguments
    /// * `hex_str` - Hex string of the 32-byte little-endian scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` on success, or an error if the hex is malformed
    /// or the decoded length is wrong.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Serialize the private key as 32 little-endian bytes.
    ///
    /// # Returns
    /// The canonical (reduced) 32-byte scalar representation.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.inner.to_bytes()
    }

    /// Serialize the private key as a lowercase hexadecimal string.
    ///
    /// # Returns
    /// A 64-character hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Derive the corresponding public key via base-point multiplication.
    ///
    /// # Returns
    /// The compressed public key for this scalar.
    pub fn pub_key(&self) -> PublicKey {
        let point = EdwardsPoint::mul_base(&self.inner);
        PublicKey::from_point_bytes(point.compress().to_bytes())
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        self.inner.zeroize();
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PrivateKey {}
