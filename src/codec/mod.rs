//! Bit-level encoding of mnemonics and partial mnemonics
//!
//! A BIP39 phrase of `n` words is `11 * n` bits: the entropy followed by
//! `n / 3` checksum bits. This module converts between that layout and
//! raw bytes, and uses the checksum slot of the final word to carry the
//! index number of a secret share.
//!
//! - [`bytes`]: big-endian encoding of the packed integer
//! - [`entropy`]: word indices to entropy
//! - [`embed`]: secret share to partial mnemonic and back
//!
//! # Examples
//!
//! ```rust
//! use mnemonic_sharing::Share;
//! use mnemonic_sharing::codec::{mnemonic_from_share, share_from_mnemonic};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let share = Share::new(3, vec![0xAB; 16]);
//! let partial = mnemonic_from_share(&share)?;
//! assert_eq!(partial.word_count().words(), 12);
//!
//! let back = share_from_mnemonic(&partial)?;
//! assert_eq!(back, share);
//! # Ok(())
//! # }
//! ```

pub mod bytes;
pub mod embed;
pub mod entropy;

use std::collections::HashMap;
use std::sync::LazyLock;

use bip39::Language;

use crate::error::{Error, Result};

pub use bytes::BigEndianUint;
pub use embed::{carried_share_index, embed_share_index, mnemonic_from_share, share_from_mnemonic};
pub use entropy::{checksum_bit_length, entropy_byte_length, extract_entropy};

/// Static `HashMap` for O(1) word-to-index lookups
static WORD_TO_INDEX_MAP: LazyLock<HashMap<&'static str, u16>> = LazyLock::new(|| {
    Language::English
        .word_list()
        .iter()
        .zip(0u16..)
        .map(|(&word, idx)| (word, idx))
        .collect()
});

/// Converts a BIP39 word to its index (0-2047)
///
/// # Errors
/// Returns [`Error::UnknownWord`] if the word is not in the English wordlist
pub fn word_to_index(word: &str) -> Result<u16> {
    let word_lower = word.to_lowercase();

    WORD_TO_INDEX_MAP
        .get(word_lower.as_str())
        .copied()
        .ok_or_else(|| Error::UnknownWord(word.to_string()))
}

/// Converts an index (0-2047) to its BIP39 word
///
/// # Errors
/// Returns [`Error::UnknownWord`] if the index is out of range
pub fn word_from_index(index: u16) -> Result<&'static str> {
    Language::English
        .word_list()
        .get(usize::from(index))
        .copied()
        .ok_or_else(|| Error::UnknownWord(format!("#{index}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_conversion() {
        // Test round trip
        let index = 65;
        let word = word_from_index(index).unwrap();
        let back = word_to_index(word).unwrap();
        assert_eq!(index, back);
    }

    #[test]
    fn test_word_lookup_is_case_insensitive() {
        assert_eq!(word_to_index("Abandon").unwrap(), 0);
        assert_eq!(word_to_index("ZOO").unwrap(), 2047);
    }

    #[test]
    fn test_unknown_word() {
        assert!(matches!(
            word_to_index("notaword"),
            Err(Error::UnknownWord(w)) if w == "notaword"
        ));
    }

    #[test]
    fn test_index_out_of_range() {
        assert!(word_from_index(2047).is_ok());
        assert!(word_from_index(2048).is_err());
    }
}
