//! Secret share to partial mnemonic and back
//!
//! A partial mnemonic is the phrase for the share's value with the checksum
//! bits of its final word overwritten by the share's index number. Only
//! those low bits of the final word change; every other word is what a
//! plain `Mnemonic::from_entropy(share.value())` would give.

use crate::domain::{ShareIndex, WordCount};
use crate::error::Result;
use crate::mnemonic::Mnemonic;
use crate::scheme::Share;

use super::extract_entropy;

/// Replaces the checksum bits of a final word index with a share index
///
/// The high `11 - checksum_bits` bits of `last_index` are kept, the low
/// `checksum_bits` bits are cleared and `share_index` is written there.
///
/// # Errors
/// Returns [`Error::InvalidShareIndex`](crate::Error::InvalidShareIndex) if
/// `share_index` is 0 or does not fit in the checksum bits
///
/// # Examples
///
/// ```rust
/// use mnemonic_sharing::codec::embed_share_index;
/// use mnemonic_sharing::domain::WordCount;
///
/// let twelve = WordCount::new(12).unwrap();
/// assert_eq!(embed_share_index(0b111_1111_0101, twelve, 3).unwrap(), 0b111_1111_0011);
/// ```
pub fn embed_share_index(last_index: u16, word_count: WordCount, share_index: u8) -> Result<u16> {
    let share_index = ShareIndex::new(share_index, word_count)?;
    let mask = word_count.checksum_mask();
    Ok((last_index & !mask) | u16::from(*share_index))
}

/// Reads the share index carried in the checksum bits of a final word index
#[must_use]
pub fn carried_share_index(last_index: u16, word_count: WordCount) -> u8 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "checksum mask is at most 8 bits wide"
    )]
    let carried = (last_index & word_count.checksum_mask()) as u8;
    carried
}

/// Creates the partial mnemonic for a secret share
///
/// # Errors
/// Returns an error if the share value is not a valid entropy length, or if
/// the share index does not fit in the phrase's checksum bits
pub fn mnemonic_from_share(share: &Share) -> Result<Mnemonic> {
    let mnemonic = Mnemonic::from_entropy(share.value())?;
    let last_index = embed_share_index(
        mnemonic.last_index(),
        mnemonic.word_count(),
        share.index(),
    )?;
    mnemonic.with_last_index(last_index)
}

/// Recovers the secret share a partial mnemonic carries
///
/// Any phrase decodes; whether the result belongs to a split is up to the caller.
///
/// # Errors
/// Returns an error only if entropy extraction fails
pub fn share_from_mnemonic(mnemonic: &Mnemonic) -> Result<Share> {
    let index = carried_share_index(mnemonic.last_index(), mnemonic.word_count());
    Ok(Share::new(index, extract_entropy(mnemonic)?))
}
