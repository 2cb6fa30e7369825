//! Monero SDK - Key derivation and addresses.
//!
//! Turns a 32-byte seed into the private spend/view key pair
//! (seed reduced modulo L; view key as keccak-then-reduce of the spend
//! key), derives public keys by base-point multiplication, and
//! assembles network-prefixed, checksummed, block-Base58 addresses.

mod error;
pub use error::KeysError;

pub mod derive;
pub mod address;

pub use address::{
    derive_address_from_public_keys, encode_address, validate_address, Network,
};
pub use derive::{
    derive_private_keys_from_hex_seed, derive_private_view_key_from_private_spend_key,
    derive_public_key_from_private_key, keys_from_seed, view_key_from_spend_key,
};
