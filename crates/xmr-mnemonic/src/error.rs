/// Error types for mnemonic encoding and decoding.
///
/// The decoder distinguishes malformed input (wrong shape, unknown
/// word) from corrupted input (a self-check failed on otherwise
/// well-formed words); callers decide how to recover, nothing is
/// retried here.
#[derive(Debug, thiserror::Error)]
pub enum MnemonicError {
    #[error("unsupported language: {0}")]
    InvalidLanguage(String),

    #[error("too few words in mnemonic: got {got}")]
    TooFewWords { got: usize },

    #[error("mnemonic is missing its checksum word")]
    MissingChecksumWord,

    #[error("word not in word list: {0}")]
    InvalidWord(String),

    #[error("word group {group} failed its self-check, a word is corrupted or mistyped")]
    CorruptWordGroup { group: usize },

    #[error("checksum word does not match the rest of the mnemonic")]
    ChecksumMismatch,

    #[error("invalid word set: {0}")]
    InvalidWordSet(String),
}
