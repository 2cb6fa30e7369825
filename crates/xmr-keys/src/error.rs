/// Error types for key derivation and address encoding.
#[derive(Debug, thiserror::Error)]
pub enum KeysError {
    #[error("primitives error: {0}")]
    Primitives(#[from] xmr_primitives::PrimitivesError),

    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("unsupported network: {0}")]
    UnsupportedNetwork(String),
}
