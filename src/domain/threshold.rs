//! Threshold newtype for splitting mnemonics

use crate::error::{Error, Result};

/// Minimum number of partial mnemonics needed to recover a phrase (1..)
///
/// Invariant: threshold >= 1 (enforced at construction). The upper bound
/// depends on the share count and is checked by [`SplitConfig`](super::SplitConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(u8);

impl Threshold {
    /// Creates a new threshold, returning an error if value is 0
    ///
    /// # Errors
    /// Returns [`Error::InvalidThreshold`] if the threshold is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mnemonic_sharing::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if value == 0 {
            return Err(Error::InvalidThreshold {
                threshold: value,
                reason: "threshold can not be 0",
            });
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Threshold {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
