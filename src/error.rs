//! Error taxonomy for splitting and recovering mnemonics

use thiserror::Error;

/// Result alias used across the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// A required input was absent (blank mnemonic phrase)
    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("no partial mnemonics provided: at least one is required to recover a secret")]
    NoPartialMnemonics,

    #[error("invalid threshold {threshold}: {reason}")]
    InvalidThreshold { threshold: u8, reason: &'static str },

    #[error("share count must be at least 1")]
    ZeroShares,

    #[error("too many shares: requested {requested}, max amount is {max}")]
    TooManyShares { requested: u8, max: u8 },

    #[error("unsupported word count {0}: expected 12, 15, 18, 21 or 24 words")]
    UnsupportedWordCount(usize),

    #[error("word '{0}' not found in BIP39 wordlist")]
    UnknownWord(String),

    /// Fixed-width encoding overflow; signals an entropy/word-count mismatch
    #[error("value needs {required} bytes but only {length} are available")]
    InvalidLength { required: usize, length: usize },

    #[error("share index {index} does not fit in {bits} checksum bits")]
    InvalidShareIndex { index: u8, bits: u32 },

    #[error("could not collect enough valid partial mnemonics within {max_attempts} attempts")]
    PartialMnemonicsExhausted { max_attempts: u32 },

    #[error("partial mnemonic search was cancelled")]
    Cancelled,

    #[error("BIP39 error: {0}")]
    Bip39(#[from] bip39::Error),

    #[error("secret sharing error: {0}")]
    SecretSharing(String),

    #[error("background worker failed: {0}")]
    Worker(String),
}
