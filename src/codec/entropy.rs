//! Conversion between a mnemonic's word indices and its entropy
//!
//! The words of an `n`-word phrase concatenate to `11 * n` bits: entropy
//! first, then `n / 3` checksum bits.

use zeroize::Zeroizing;

use super::BigEndianUint;
use crate::domain::{WORD_BITS, WordCount};
use crate::error::Result;
use crate::mnemonic::Mnemonic;

/// Length of the checksum in bits for a phrase of `word_count` words
///
/// This is the only place the entropy/checksum split is derived; it holds
/// for every supported size (12-4, 15-5, 18-6, 21-7, 24-8).
#[must_use]
pub fn checksum_bit_length(word_count: usize) -> u32 {
    u32::try_from(word_count / 3).unwrap_or(u32::MAX)
}

/// Length of the entropy in bytes for a phrase of `word_count` words
///
/// # Errors
/// Returns [`Error::UnsupportedWordCount`](crate::Error::UnsupportedWordCount)
/// for anything other than 12, 15, 18, 21 or 24
pub fn entropy_byte_length(word_count: usize) -> Result<usize> {
    Ok(WordCount::new(word_count)?.entropy_bytes())
}

/// Extracts the entropy a mnemonic encodes, dropping its checksum bits
///
/// The checksum bits are ignored, not verified, so this works for partial
/// mnemonics whose checksum slot carries a share index.
///
/// # Errors
/// Returns [`Error::InvalidLength`](crate::Error::InvalidLength) if the
/// packed words do not fit the entropy length, which would mean the word
/// count and the layout table disagree
///
/// # Examples
///
/// ```rust
/// use mnemonic_sharing::Mnemonic;
/// use mnemonic_sharing::codec::extract_entropy;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mnemonic = Mnemonic::parse(
///     "legal winner thank year wave sausage worth useful legal winner thank yellow",
/// )?;
/// assert_eq!(*extract_entropy(&mnemonic)?, vec![0x7F; 16]);
/// # Ok(())
/// # }
/// ```
pub fn extract_entropy(mnemonic: &Mnemonic) -> Result<Zeroizing<Vec<u8>>> {
    let word_count = mnemonic.word_count();

    let mut packed = BigEndianUint::default();
    for &index in mnemonic.indices() {
        packed.push_bits(index, WORD_BITS);
    }

    packed.shift_right(checksum_bit_length(word_count.words()));
    packed.to_big_endian_bytes_fixed(entropy_byte_length(word_count.words())?)
}
