//! Monero SDK - Cryptographic primitives.
//!
//! This crate provides the foundational building blocks for the Monero SDK:
//! - Keccak-256 hashing (the legacy pre-NIST padding Monero uses)
//! - Monero block Base58 encoding/decoding
//! - ed25519 key types (scalars reduced modulo the group order,
//!   compressed Edwards points)

pub mod hash;
pub mod base58;
pub mod ec;

mod error;
pub use error::PrimitivesError;
