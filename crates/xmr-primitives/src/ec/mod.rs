//! Elliptic curve cryptography on ed25519.
//!
//! Provides private keys (scalars reduced modulo the group order L)
//! and public keys (compressed Edwards points) as used by Monero's
//! spend/view key pairs.

pub mod private_key;
pub mod public_key;

pub use private_key::PrivateKey;
pub use public_key::PublicKey;
