//! Monero SDK - Mnemonic seed codec.
//!
//! Implements the Electrum-style word encoding Monero uses for wallet
//! seeds: 32 bytes of entropy become 24 words (3 words per 4-byte
//! little-endian group, base-1626), plus a 25th checksum word whose
//! position is a CRC-32 over the truncated word prefixes. Decoding
//! reverses the transform and discriminates between malformed input
//! (wrong word count, unknown word) and corrupted input (failed group
//! self-check, checksum word mismatch).

pub mod wordset;
pub mod checksum;
pub mod encode;
pub mod decode;

mod error;
pub use error::MnemonicError;

pub use wordset::{Language, WordSet};
pub use encode::{encode_bytes, generate, generate_mnemonic_seed, generate_with_rng};
pub use decode::{decode, derive_hex_seed_from_mnemonic_seed};
