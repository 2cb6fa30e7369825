#![deny(missing_docs)]

//! Monero SDK - Complete SDK.
//!
//! Re-exports all Monero SDK components for convenient single-crate
//! usage: mnemonic seed codec, key-derivation pipeline, address codec,
//! and the underlying cryptographic primitives.

pub use xmr_primitives as primitives;
pub use xmr_mnemonic as mnemonic;
pub use xmr_keys as keys;

/// SDK version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
