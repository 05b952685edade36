//! Fixed-width big-endian encoding of unsigned integers
//!
//! A mnemonic packs up to 264 bits, more than any primitive integer holds,
//! so the integer is kept as a big-endian byte buffer and grown or shrunk
//! with bit shifts.

use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Arbitrary-width unsigned integer stored most significant byte first
///
/// The buffer may carry leading zero bytes; they are dropped on encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BigEndianUint(Zeroizing<Vec<u8>>);

impl BigEndianUint {
    /// Shifts the integer left by `bits` and ORs `value` into the freed low bits
    ///
    /// `value` must fit in `bits` bits and `bits` must not exceed 16.
    pub fn push_bits(&mut self, value: u16, bits: u32) {
        debug_assert!(bits <= 16);
        debug_assert!(u32::from(value) < (1u32 << bits));

        let mut carry = u32::from(value);
        for byte in self.0.iter_mut().rev() {
            let wide = (u32::from(*byte) << bits) | carry;
            #[allow(
                clippy::cast_possible_truncation,
                reason = "masked to the low 8 bits"
            )]
            let low = (wide & 0xFF) as u8;
            *byte = low;
            carry = wide >> 8;
        }

        while carry != 0 {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "masked to the low 8 bits"
            )]
            let low = (carry & 0xFF) as u8;
            self.0.insert(0, low);
            carry >>= 8;
        }
    }

    /// Shifts the integer right by `bits`, discarding the low bits
    pub fn shift_right(&mut self, bits: u32) {
        let whole_bytes = (bits / 8) as usize;
        let rem = bits % 8;

        let keep = self.0.len().saturating_sub(whole_bytes);
        self.0.truncate(keep);

        if rem > 0 {
            let mut carry = 0u8;
            for byte in self.0.iter_mut() {
                let spill = *byte << (8 - rem);
                *byte = (*byte >> rem) | carry;
                carry = spill;
            }
        }
    }

    /// Minimal big-endian representation, empty for zero
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mnemonic_sharing::codec::BigEndianUint;
    ///
    /// assert!(BigEndianUint::from(0u128).to_big_endian_bytes().is_empty());
    /// assert_eq!(*BigEndianUint::from(256u128).to_big_endian_bytes(), vec![0x01, 0x00]);
    /// ```
    #[must_use]
    pub fn to_big_endian_bytes(&self) -> Zeroizing<Vec<u8>> {
        let first = self
            .0
            .iter()
            .position(|&byte| byte != 0)
            .unwrap_or(self.0.len());
        Zeroizing::new(self.0[first..].to_vec())
    }

    /// Exactly `length` bytes, zero-padded on the left
    ///
    /// # Errors
    /// Returns [`Error::InvalidLength`] if the minimal representation is
    /// longer than `length`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mnemonic_sharing::codec::BigEndianUint;
    ///
    /// assert_eq!(*BigEndianUint::from(255u128).to_big_endian_bytes_fixed(1).unwrap(), vec![0xFF]);
    /// assert_eq!(*BigEndianUint::from(0u128).to_big_endian_bytes_fixed(4).unwrap(), vec![0; 4]);
    /// assert!(BigEndianUint::from(256u128).to_big_endian_bytes_fixed(1).is_err());
    /// ```
    pub fn to_big_endian_bytes_fixed(&self, length: usize) -> Result<Zeroizing<Vec<u8>>> {
        let minimal = self.to_big_endian_bytes();
        if minimal.len() > length {
            return Err(Error::InvalidLength {
                required: minimal.len(),
                length,
            });
        }

        let mut bytes = Zeroizing::new(vec![0u8; length]);
        bytes[length - minimal.len()..].copy_from_slice(&minimal);
        Ok(bytes)
    }
}

impl From<u128> for BigEndianUint {
    fn from(value: u128) -> Self {
        Self(Zeroizing::new(value.to_be_bytes().to_vec()))
    }
}
