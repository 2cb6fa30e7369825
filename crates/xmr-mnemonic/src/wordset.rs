//! Per-language word tables.
//!
//! A `WordSet` is an immutable ordered list of unique words plus an
//! optional truncation prefix length. When the prefix length is
//! non-zero, the first `prefix_len` characters of every word are
//! unique across the list and act as the lookup key, so users may type
//! abbreviated words. Built-in languages are process-wide statics,
//! initialized on first use and read-only afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::MnemonicError;

/// Number of leading characters that identify a word in the English list.
const ENGLISH_PREFIX_LEN: usize = 3;

static ENGLISH: LazyLock<WordSet> = LazyLock::new(|| {
    let words = include_str!("wordlists/english.txt")
        .split_whitespace()
        .map(str::to_owned)
        .collect();
    WordSet::new("english", ENGLISH_PREFIX_LEN, words)
        .expect("built-in english word list is valid")
});

/// A built-in mnemonic language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    /// English: 1626 words, unique 3-character prefixes.
    English,
}

impl Language {
    /// Resolve a language code such as `"english"`.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "english" => Some(Language::English),
            _ => None,
        }
    }

    /// The word table for this language.
    pub fn word_set(&self) -> &'static WordSet {
        match self {
            Language::English => &ENGLISH,
        }
    }
}

/// Resolve the word table for a language code.
///
/// Fails with `InvalidLanguage` for codes with no registered table.
pub fn for_language(code: &str) -> Result<&'static WordSet, MnemonicError> {
    Language::from_code(code)
        .map(|l| l.word_set())
        .ok_or_else(|| MnemonicError::InvalidLanguage(code.to_string()))
}

/// An immutable per-language word table.
///
/// The constructor is public so tests and callers with their own word
/// lists can build small synthetic tables; the built-in languages are
/// reached through [`Language`].
#[derive(Debug)]
pub struct WordSet {
    name: String,
    prefix_len: usize,
    words: Vec<String>,
    trunc_words: Vec<String>,
    full_index: HashMap<String, usize>,
    prefix_index: HashMap<String, usize>,
}

impl WordSet {
    /// Build a word set, validating the table invariants.
    ///
    /// Words must be unique; when `prefix_len > 0` the first
    /// `prefix_len` characters of every word must also be unique.
    pub fn new(
        name: &str,
        prefix_len: usize,
        words: Vec<String>,
    ) -> Result<Self, MnemonicError> {
        if words.is_empty() {
            return Err(MnemonicError::InvalidWordSet(format!(
                "word list for {} is empty",
                name
            )));
        }
        let trunc_words: Vec<String> = words
            .iter()
            .map(|w| truncate(w, prefix_len))
            .collect();

        let mut full_index = HashMap::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            if full_index.insert(word.clone(), i).is_some() {
                return Err(MnemonicError::InvalidWordSet(format!(
                    "duplicate word: {}",
                    word
                )));
            }
        }
        let mut prefix_index = HashMap::with_capacity(words.len());
        if prefix_len > 0 {
            for (i, prefix) in trunc_words.iter().enumerate() {
                if prefix_index.insert(prefix.clone(), i).is_some() {
                    return Err(MnemonicError::InvalidWordSet(format!(
                        "duplicate word prefix: {}",
                        prefix
                    )));
                }
            }
        }
        Ok(WordSet {
            name: name.to_string(),
            prefix_len,
            words,
            trunc_words,
            full_index,
            prefix_index,
        })
    }

    /// The language name of this table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of words in the table.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// The truncation prefix length; 0 means whole-word matching.
    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    /// The word at a given index.
    pub fn word(&self, index: usize) -> &str {
        &self.words[index]
    }

    /// Look up a word's index.
    ///
    /// With a non-zero prefix length the word is matched by its first
    /// `prefix_len` characters, so abbreviations resolve too. Returns
    /// `None` for words not in the table.
    pub fn index_of(&self, word: &str) -> Option<usize> {
        if self.prefix_len == 0 {
            self.full_index.get(word).copied()
        } else {
            self.prefix_index.get(&truncate(word, self.prefix_len)).copied()
        }
    }

    /// The truncated prefixes, index-aligned with the words.
    pub fn trunc_words(&self) -> &[String] {
        &self.trunc_words
    }
}

/// First `prefix_len` characters of a word.
///
/// Counted in characters, not bytes, so multi-byte scripts are safe;
/// words shorter than the prefix are returned whole.
pub(crate) fn truncate(word: &str, prefix_len: usize) -> String {
    if prefix_len == 0 {
        word.to_string()
    } else {
        word.chars().take(prefix_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_table_shape() {
        let ws = Language::English.word_set();
        assert_eq!(ws.len(), 1626);
        assert_eq!(ws.prefix_len(), 3);
        // 1626 is the smallest N with N^3 > 2^32, which is what makes
        // 3 words per 4-byte group possible.
        assert!((ws.len() as u64).pow(3) > u64::from(u32::MAX));
    }

    #[test]
    fn test_trunc_words_align_with_words() {
        let ws = Language::English.word_set();
        let prefixes = ws.trunc_words();
        assert_eq!(prefixes.len(), ws.len());
        for (i, prefix) in prefixes.iter().enumerate() {
            assert_eq!(prefix, &truncate(ws.word(i), ws.prefix_len()));
        }
    }

    #[test]
    fn test_english_lookup_full_and_abbreviated() {
        let ws = Language::English.word_set();
        let idx = ws.index_of("abbey").unwrap();
        assert_eq!(ws.word(idx), "abbey");
        assert_eq!(ws.index_of("abb"), Some(idx));
        assert_eq!(ws.index_of("notaword"), None);
        // Shorter than the prefix cannot match anything.
        assert_eq!(ws.index_of("ab"), None);
    }

    #[test]
    fn test_for_language() {
        assert!(for_language("english").is_ok());
        let err = for_language("klingon").unwrap_err();
        assert!(matches!(err, MnemonicError::InvalidLanguage(_)));
    }

    #[test]
    fn test_duplicate_word_rejected() {
        let words = vec!["alpha".into(), "beta".into(), "alpha".into()];
        assert!(WordSet::new("dup", 0, words).is_err());
    }

    #[test]
    fn test_duplicate_prefix_rejected() {
        let words = vec!["alpha".into(), "alpine".into()];
        assert!(WordSet::new("dup-prefix", 3, words).is_err());
        // The same table is fine with whole-word matching.
        let words = vec!["alpha".into(), "alpine".into()];
        assert!(WordSet::new("full", 0, words).is_ok());
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(WordSet::new("empty", 0, Vec::new()).is_err());
    }
}
