//! Mnemonic decoding.
//!
//! The densest part of the codec: word-count policy, base-N group
//! decode with the per-group self-check, little-endian reassembly, and
//! checksum word verification, in that order. A mistyped letter is
//! usually caught by the group self-check before the (weaker) checksum
//! word comparison ever runs.

use crate::checksum::checksum_index;
use crate::wordset::{for_language, truncate, WordSet};
use crate::MnemonicError;

/// Combined value of a word-index triple.
///
/// The modular back-and-forth construction guarantees
/// `group_value(..) mod n == w1` for any triple, which is what lets
/// the decoder use that equality as an integrity check on the decoded
/// indices.
pub(crate) fn group_value(n: u64, w1: u64, w2: u64, w3: u64) -> u64 {
    w1 + n * ((n - w1 + w2) % n) + n * n * ((n - w2 + w3) % n)
}

/// Decode a mnemonic phrase to its seed bytes.
///
/// The phrase is split on whitespace. For prefix-mode word sets the
/// last word is the checksum word; every remaining group of three
/// words yields four seed bytes (little-endian). Words may be typed in
/// full or abbreviated to the word set's prefix length.
pub fn decode(word_set: &WordSet, phrase: &str) -> Result<Vec<u8>, MnemonicError> {
    let mut words: Vec<&str> = phrase.split_whitespace().collect();
    let total = words.len();
    let prefix_len = word_set.prefix_len();

    if prefix_len == 0 {
        if total % 3 != 0 {
            return Err(MnemonicError::TooFewWords { got: total });
        }
    } else {
        match total % 3 {
            2 => return Err(MnemonicError::TooFewWords { got: total }),
            0 => return Err(MnemonicError::MissingChecksumWord),
            _ => {}
        }
    }
    let checksum_word = if prefix_len > 0 { words.pop() } else { None };
    if words.is_empty() {
        return Err(MnemonicError::TooFewWords { got: total });
    }

    let n = word_set.len() as u64;
    let mut seed = Vec::with_capacity(words.len() / 3 * 4);
    let resolve = |word: &str| {
        word_set
            .index_of(word)
            .ok_or_else(|| MnemonicError::InvalidWord(word.to_string()))
    };
    for (group_no, group) in words.chunks(3).enumerate() {
        let w1 = resolve(group[0])? as u64;
        let w2 = resolve(group[1])? as u64;
        let w3 = resolve(group[2])? as u64;

        let x = group_value(n, w1, w2, w3);
        if x % n != w1 {
            return Err(MnemonicError::CorruptWordGroup { group: group_no });
        }
        let value = u32::try_from(x)
            .map_err(|_| MnemonicError::CorruptWordGroup { group: group_no })?;
        seed.extend_from_slice(&value.to_le_bytes());
    }

    if let Some(checksum_word) = checksum_word {
        let index = checksum_index(&words, prefix_len);
        let expected = truncate(words[index], prefix_len);
        if expected != truncate(checksum_word, prefix_len) {
            return Err(MnemonicError::ChecksumMismatch);
        }
    }
    Ok(seed)
}

/// Decode a mnemonic phrase to a lowercase hex seed for a language code.
pub fn derive_hex_seed_from_mnemonic_seed(
    mnemonic: &str,
    language: &str,
) -> Result<String, MnemonicError> {
    let word_set = for_language(language)?;
    Ok(hex::encode(decode(word_set, mnemonic)?))
}
