//! ed25519 public key.
//!
//! A 32-byte compressed Edwards point. Only the length is validated:
//! curve membership is not checked at this boundary, matching how the
//! key material is consumed (address assembly treats it as bytes).

use curve25519_dalek::edwards::CompressedEdwardsY;

use crate::PrimitivesError;

/// Length of a compressed public key in bytes.
const PUBLIC_KEY_BYTES_LEN: usize = 32;

/// An ed25519 public key in compressed Edwards form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    /// The compressed point.
    inner: CompressedEdwardsY,
}

impl PublicKey {
    /// Create a public key from raw compressed point bytes.
    ///
    /// # Arguments
    /// * `bytes` - A 32-byte compressed Edwards point.
    ///
    /// # Returns
    /// `Ok(PublicKey)` on success, or an error if the slice is not
    /// exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != PUBLIC_KEY_BYTES_LEN {
            return Err(PrimitivesError::InvalidKeyLength {
                expected: PUBLIC_KEY_BYTES_LEN,
                got: bytes.len(),
            });
        }
        let mut raw = [0u8; PUBLIC_KEY_BYTES_LEN];
        raw.copy_from_slice(bytes);
        Ok(Self::from_point_bytes(raw))
    }

    /// Create a public key from a 64-character hexadecimal string.
    ///
    /// # Arguments
    /// * `hex_str` - Hex string of the compressed point.
    ///
    /// # Returns
    /// `Ok(PublicKey)` on success, or an error if the hex is malformed
    /// or the decoded length is wrong.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Wrap an already-sized compressed point.
    pub(crate) fn from_point_bytes(bytes: [u8; PUBLIC_KEY_BYTES_LEN]) -> Self {
        PublicKey {
            inner: CompressedEdwardsY(bytes),
        }
    }

    /// Serialize the public key as 32 compressed point bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.inner.to_bytes()
    }

    /// Serialize the public key as a lowercase hexadecimal string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}
