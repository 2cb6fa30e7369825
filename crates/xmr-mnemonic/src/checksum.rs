//! Checksum word position.
//!
//! The 25th word of a mnemonic is a copy of one of the first 24; which
//! one is determined here. Both the generator (choosing the word to
//! append) and the decoder (recomputing the expected word) use the
//! same function, so the index only has to be deterministic, not
//! cryptographically strong.

use crate::wordset::truncate;

/// Index of the checksum word for a sequence of mnemonic words.
///
/// Concatenates the first `prefix_len` characters of each word,
/// computes the IEEE CRC-32 of the resulting string, and reduces it
/// modulo the word count.
pub fn checksum_index<S: AsRef<str>>(words: &[S], prefix_len: usize) -> usize {
    let mut trimmed = String::new();
    for word in words {
        trimmed.push_str(&truncate(word.as_ref(), prefix_len));
    }
    let crc = crc32fast::hash(trimmed.as_bytes());
    crc as usize % words.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordset::Language;

    #[test]
    fn test_known_index() {
        // First 24 words of the English list hash to index 4.
        let ws = Language::English.word_set();
        let words: Vec<&str> = (0..24).map(|i| ws.word(i)).collect();
        assert_eq!(checksum_index(&words, 3), 4);
    }

    #[test]
    fn test_deterministic() {
        let words = ["amaze", "buffet", "cake"];
        let first = checksum_index(&words, 3);
        for _ in 0..10 {
            assert_eq!(checksum_index(&words, 3), first);
        }
    }

    #[test]
    fn test_only_prefixes_matter() {
        // Words that agree on their first three characters produce the
        // same index.
        let full = ["amaze", "buffet", "cake"];
        let abbreviated = ["ama", "buf", "cak"];
        assert_eq!(checksum_index(&full, 3), checksum_index(&abbreviated, 3));
    }
}
