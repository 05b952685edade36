//! `ShareIndex` newtype

use crate::error::{Error, Result};

use super::WordCount;

/// Index number of a share (1..=16) as carried by a partial mnemonic
///
/// Index 0 would be the secret itself, so it is never handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareIndex(u8);

impl ShareIndex {
    /// Smallest index handed out by a split
    pub const MIN: u8 = 1;

    /// Largest index a split may hand out (16)
    pub const MAX: u8 = 16;

    /// Creates a share index for a phrase of the given size
    ///
    /// The index has to fit in the checksum bits of the phrase's final word.
    ///
    /// # Errors
    /// Returns [`Error::InvalidShareIndex`] if the index is 0, above 16, or
    /// does not fit in `word_count.checksum_bits()` bits
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mnemonic_sharing::domain::{ShareIndex, WordCount};
    ///
    /// let twelve = WordCount::new(12).unwrap();
    /// let index = ShareIndex::new(15, twelve).unwrap();
    /// assert_eq!(*index, 15);
    ///
    /// // 16 needs five bits, a 12-word phrase only has four checksum bits
    /// assert!(ShareIndex::new(16, twelve).is_err());
    /// assert!(ShareIndex::new(16, WordCount::new(15).unwrap()).is_ok());
    /// assert!(ShareIndex::new(0, twelve).is_err());
    /// ```
    pub fn new(value: u8, word_count: WordCount) -> Result<Self> {
        let bits = word_count.checksum_bits();
        if value < Self::MIN || value > Self::MAX || u16::from(value) > word_count.checksum_mask()
        {
            return Err(Error::InvalidShareIndex { index: value, bits });
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareIndex {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
