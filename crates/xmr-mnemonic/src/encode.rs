//! Mnemonic generation and deterministic encoding.
//!
//! The random generator draws 24 words from a CSPRNG and appends the
//! checksum word for prefix-mode languages. The deterministic sibling
//! `encode_bytes` maps an explicit 32-byte seed to words, which is the
//! restore path for a wallet whose seed is already known.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};

use crate::checksum::checksum_index;
use crate::decode::group_value;
use crate::wordset::{for_language, WordSet};
use crate::MnemonicError;

/// Number of entropy-bearing words in a mnemonic.
const DATA_WORDS: usize = 24;

/// Words per 4-byte group.
const WORDS_PER_GROUP: usize = 3;

/// Generate a random mnemonic using the operating system CSPRNG.
pub fn generate(word_set: &WordSet) -> Vec<String> {
    generate_with_rng(word_set, &mut OsRng)
}

/// Generate a random mnemonic from the supplied CSPRNG.
///
/// Draws 24 words independently and uniformly (`gen_range` rejection
/// samples, so there is no modulo bias). A group of three whose
/// combined value does not fit in 32 bits would be undecodable, so
/// such groups are redrawn; the excluded region is under 0.1% of the
/// triple space. For prefix-mode word sets the checksum word is
/// appended as a copy of one of the 24 drawn words.
pub fn generate_with_rng<R: RngCore + CryptoRng>(
    word_set: &WordSet,
    rng: &mut R,
) -> Vec<String> {
    let n = word_set.len() as u64;
    let mut words: Vec<String> = Vec::with_capacity(DATA_WORDS + 1);
    for _ in 0..DATA_WORDS / WORDS_PER_GROUP {
        loop {
            let w1 = rng.gen_range(0..word_set.len());
            let w2 = rng.gen_range(0..word_set.len());
            let w3 = rng.gen_range(0..word_set.len());
            if group_value(n, w1 as u64, w2 as u64, w3 as u64) <= u64::from(u32::MAX) {
                words.push(word_set.word(w1).to_string());
                words.push(word_set.word(w2).to_string());
                words.push(word_set.word(w3).to_string());
                break;
            }
        }
    }
    if word_set.prefix_len() > 0 {
        let index = checksum_index(&words, word_set.prefix_len());
        words.push(words[index].clone());
    }
    words
}

/// Deterministically encode a 32-byte seed as mnemonic words.
///
/// Each 4-byte little-endian group becomes three word indices:
/// `w1 = v mod n`, `w2 = (v/n + w1) mod n`, `w3 = (v/n^2 + w2) mod n`.
/// The checksum word is appended exactly as in [`generate`].
pub fn encode_bytes(word_set: &WordSet, seed: &[u8; 32]) -> Vec<String> {
    let n = word_set.len() as u64;
    let mut words: Vec<String> = Vec::with_capacity(DATA_WORDS + 1);
    for group in seed.chunks_exact(4) {
        let value = u64::from(u32::from_le_bytes([
            group[0], group[1], group[2], group[3],
        ]));
        let w1 = value % n;
        let w2 = (value / n + w1) % n;
        let w3 = (value / (n * n) + w2) % n;
        words.push(word_set.word(w1 as usize).to_string());
        words.push(word_set.word(w2 as usize).to_string());
        words.push(word_set.word(w3 as usize).to_string());
    }
    if word_set.prefix_len() > 0 {
        let index = checksum_index(&words, word_set.prefix_len());
        words.push(words[index].clone());
    }
    words
}

/// Generate a space-joined mnemonic phrase for a language code.
///
/// Fails with `InvalidLanguage` if no word table is registered for the
/// code.
pub fn generate_mnemonic_seed(language: &str) -> Result<String, MnemonicError> {
    let word_set = for_language(language)?;
    Ok(generate(word_set).join(" "))
}
