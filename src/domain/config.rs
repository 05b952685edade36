//! Configuration validation for splits and the validity search

use crate::error::{Error, Result};

use super::{ShareCount, Threshold};

/// Attempt budget used when none is configured
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100_000;

/// Validated pair of threshold and share count
///
/// Enforces the invariant that threshold <= `share_count` at the type level.
/// This prevents creating configurations where more shares are required
/// than actually exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitConfig {
    threshold: Threshold,
    share_count: ShareCount,
}

impl SplitConfig {
    /// Creates a new split configuration
    ///
    /// # Errors
    /// Returns [`Error::InvalidThreshold`] if threshold exceeds share count
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mnemonic_sharing::domain::{SplitConfig, Threshold, ShareCount};
    ///
    /// // Valid: threshold <= share_count
    /// let config = SplitConfig::new(
    ///     Threshold::new(3).unwrap(),
    ///     ShareCount::new(5).unwrap()
    /// ).unwrap();
    ///
    /// assert_eq!(*config.threshold(), 3);
    /// assert_eq!(*config.share_count(), 5);
    ///
    /// // Invalid: threshold > share_count
    /// let result = SplitConfig::new(
    ///     Threshold::new(5).unwrap(),
    ///     ShareCount::new(3).unwrap()
    /// );
    /// assert!(result.is_err());
    /// ```
    pub fn new(threshold: Threshold, share_count: ShareCount) -> Result<Self> {
        if *threshold > *share_count {
            return Err(Error::InvalidThreshold {
                threshold: *threshold,
                reason: "threshold can not be bigger than number of shares",
            });
        }
        Ok(Self {
            threshold,
            share_count,
        })
    }

    /// Validates raw parameters in order: threshold is not 0, threshold does
    /// not exceed the share count, share count is at most 16
    ///
    /// # Errors
    /// Returns [`Error::InvalidThreshold`] or [`Error::TooManyShares`]
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mnemonic_sharing::Error;
    /// use mnemonic_sharing::domain::SplitConfig;
    ///
    /// assert!(SplitConfig::from_raw(3, 5).is_ok());
    /// assert!(matches!(SplitConfig::from_raw(0, 5), Err(Error::InvalidThreshold { .. })));
    /// assert!(matches!(SplitConfig::from_raw(6, 5), Err(Error::InvalidThreshold { .. })));
    /// assert!(matches!(SplitConfig::from_raw(5, 17), Err(Error::TooManyShares { .. })));
    /// ```
    pub fn from_raw(threshold: u8, share_count: u8) -> Result<Self> {
        let threshold = Threshold::new(threshold)?;
        if *threshold > share_count {
            return Err(Error::InvalidThreshold {
                threshold: *threshold,
                reason: "threshold can not be bigger than number of shares",
            });
        }
        Self::new(threshold, ShareCount::new(share_count)?)
    }

    /// Gets the threshold value
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Gets the share count value
    #[must_use]
    pub fn share_count(&self) -> ShareCount {
        self.share_count
    }
}

/// Bounds for the search for checksum-valid partial mnemonics
///
/// There is no wall-clock timeout; callers wanting one derive an attempt count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    max_attempts: u32,
}

impl SearchConfig {
    #[must_use]
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    /// Number of full re-splits tried before giving up
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}
