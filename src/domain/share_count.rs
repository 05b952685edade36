//! `ShareCount` newtype

use crate::error::{Error, Result};

/// Number of partial mnemonics to create (1..=16)
///
/// The ceiling comes from the share index carrier: an index has to fit in
/// the checksum bits of the final word, and the smallest phrase we might
/// share only has four of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(u8);

impl ShareCount {
    /// Minimum valid share count
    pub const MIN: u8 = 1;

    /// Maximum valid share count (16)
    pub const MAX: u8 = 16;

    /// Creates a new share count
    ///
    /// # Errors
    /// Returns [`Error::ZeroShares`] for 0 and [`Error::TooManyShares`] above 16
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mnemonic_sharing::domain::ShareCount;
    ///
    /// let count = ShareCount::new(5).unwrap();
    /// assert_eq!(*count, 5);
    ///
    /// assert!(ShareCount::new(0).is_err());
    /// assert!(ShareCount::new(17).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if value < Self::MIN {
            return Err(Error::ZeroShares);
        }
        if value > Self::MAX {
            return Err(Error::TooManyShares {
                requested: value,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareCount {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
