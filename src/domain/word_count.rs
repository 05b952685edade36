//! `WordCount` newtype and the bit layout it implies

use crate::codec::checksum_bit_length;
use crate::error::{Error, Result};

use super::ShareCount;

/// Bits encoded by a single BIP39 word
pub const WORD_BITS: u32 = 11;

/// Number of words in a mnemonic (12, 15, 18, 21 or 24)
///
/// A phrase of `n` words carries `11 * n` bits: the entropy followed by
/// `n / 3` checksum bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordCount(u8);

impl WordCount {
    /// All supported phrase sizes
    pub const ALL: [u8; 5] = [12, 15, 18, 21, 24];

    /// Creates a word count
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedWordCount`] for anything outside 12/15/18/21/24
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mnemonic_sharing::domain::WordCount;
    ///
    /// let count = WordCount::new(24).unwrap();
    /// assert_eq!(count.checksum_bits(), 8);
    /// assert_eq!(count.entropy_bytes(), 32);
    ///
    /// assert!(WordCount::new(13).is_err());
    /// ```
    pub fn new(words: usize) -> Result<Self> {
        match u8::try_from(words) {
            Ok(value) if Self::ALL.contains(&value) => Ok(Self(value)),
            _ => Err(Error::UnsupportedWordCount(words)),
        }
    }

    /// Number of words
    #[must_use]
    pub fn words(self) -> usize {
        usize::from(self.0)
    }

    /// Length of the checksum in bits (12-4, 15-5, 18-6, 21-7, 24-8)
    #[must_use]
    pub fn checksum_bits(self) -> u32 {
        checksum_bit_length(self.words())
    }

    /// Mask selecting the checksum bits of the final word index
    #[must_use]
    pub fn checksum_mask(self) -> u16 {
        (1u16 << self.checksum_bits()) - 1
    }

    /// Length of the entropy in bytes
    #[must_use]
    pub fn entropy_bytes(self) -> usize {
        match self.0 {
            12 => 16,
            15 => 20,
            18 => 24,
            21 => 28,
            24 => 32,
            _ => unreachable!("word count validated at construction"),
        }
    }

    /// Total number of bits the words encode
    #[must_use]
    pub fn total_bits(self) -> u32 {
        u32::from(self.0) * WORD_BITS
    }

    /// Largest share count whose indices all fit in the checksum bits
    ///
    /// 15 for 12-word phrases, [`ShareCount::MAX`] for every other size.
    #[must_use]
    pub fn max_shares(self) -> u8 {
        let capacity = self.checksum_mask();
        u8::try_from(capacity)
            .map_or(ShareCount::MAX, |capacity| capacity.min(ShareCount::MAX))
    }
}

impl std::ops::Deref for WordCount {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for WordCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
