//! Threshold secret sharing of raw entropy
//!
//! [`SecretSharing`] is the seam between the mnemonic encoding and the
//! polynomial arithmetic. [`Blahaj`] implements it with Shamir's scheme over
//! GF(256) from the `blahaj` crate.

use blahaj::Sharks;
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// One share of a secret: a 1-based index number and a value as long as the secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    index: u8,
    value: Zeroizing<Vec<u8>>,
}

impl Share {
    pub fn new(index: u8, value: impl Into<Zeroizing<Vec<u8>>>) -> Self {
        Self {
            index,
            value: value.into(),
        }
    }

    /// Index number (x coordinate) of the share
    #[must_use]
    pub fn index(&self) -> u8 {
        self.index
    }

    #[must_use]
    pub fn value(&self) -> &[u8] {
        &self.value
    }
}

/// A threshold secret-sharing primitive
pub trait SecretSharing {
    /// Splits `secret` into `share_count` shares numbered 1..=`share_count`,
    /// any `threshold` of which recover it
    ///
    /// Every call draws a fresh random polynomial.
    ///
    /// # Errors
    /// Returns [`Error::SecretSharing`] if the scheme rejects the parameters
    fn split_secret(&self, threshold: u8, share_count: u8, secret: &[u8]) -> Result<Vec<Share>>;

    /// Interpolates a secret from `shares`
    ///
    /// Returns *some* byte sequence for any non-empty set of equally long
    /// shares. It is the original secret only when at least `threshold`
    /// distinct shares of the same split are supplied; fewer give unrelated
    /// bytes, not an error. Repeated copies of a share count once.
    ///
    /// # Errors
    /// Returns [`Error::SecretSharing`] if `shares` is empty or the shares
    /// differ in length
    fn recover_secret(&self, shares: &[Share]) -> Result<Zeroizing<Vec<u8>>>;
}

/// Shamir's secret sharing over GF(256), backed by `blahaj`
#[derive(Debug, Clone, Copy, Default)]
pub struct Blahaj;

impl SecretSharing for Blahaj {
    fn split_secret(&self, threshold: u8, share_count: u8, secret: &[u8]) -> Result<Vec<Share>> {
        if threshold == 0 || threshold > share_count {
            return Err(Error::SecretSharing(format!(
                "cannot split into {share_count} shares with threshold {threshold}"
            )));
        }

        // Dealer hands out x = 1, 2, 3, ...
        let dealer = Sharks(threshold).dealer(secret);
        dealer
            .take(usize::from(share_count))
            .map(|share| from_blahaj(&share))
            .collect()
    }

    fn recover_secret(&self, shares: &[Share]) -> Result<Zeroizing<Vec<u8>>> {
        // blahaj interpolates over every point it is given, so a repeated
        // share would break the Lagrange basis
        let mut distinct: Vec<&Share> = Vec::with_capacity(shares.len());
        for share in shares {
            if !distinct.contains(&share) {
                distinct.push(share);
            }
        }
        let parsed = distinct
            .into_iter()
            .map(to_blahaj)
            .collect::<Result<Vec<_>>>()?;

        // The threshold is not known here; a threshold of 1 makes blahaj
        // interpolate whatever it is given.
        let recovered = Sharks(1)
            .recover(&parsed)
            .map_err(|e| Error::SecretSharing(format!("failed to recover secret: {e:?}")))?;

        Ok(Zeroizing::new(recovered))
    }
}

/// Converts a `blahaj` share (serialized as `x || y`) into a [`Share`]
fn from_blahaj(share: &blahaj::Share) -> Result<Share> {
    let bytes = Zeroizing::new(Vec::from(share));
    let (&index, value) = bytes
        .split_first()
        .ok_or_else(|| Error::SecretSharing("empty share".to_string()))?;
    Ok(Share::new(index, value.to_vec()))
}

fn to_blahaj(share: &Share) -> Result<blahaj::Share> {
    let mut bytes = Zeroizing::new(Vec::with_capacity(share.value.len() + 1));
    bytes.push(share.index);
    bytes.extend_from_slice(&share.value);

    blahaj::Share::try_from(bytes.as_slice())
        .map_err(|e| Error::SecretSharing(format!("failed to create share from data: {e:?}")))
}
