//! Splitting a mnemonic into partial mnemonics and recovering it
//!
//! # Caller obligations on recovery
//!
//! [`MnemonicSharing::recover`] does not know the threshold of the split and
//! does not check that the partial mnemonics come from the same split.
//! Exact repeats of a partial mnemonic count once, but two different
//! phrases carrying the same share index are both used. Supplying fewer
//! than the threshold, or mixing splits, silently yields an unrelated phrase (usually with an
//! invalid checksum) rather than an error. Callers that can tell these
//! cases apart must check before recovering.

use tracing::debug;

use crate::codec::{extract_entropy, mnemonic_from_share, share_from_mnemonic};
use crate::domain::{SearchConfig, SplitConfig};
use crate::error::{Error, Result};
use crate::mnemonic::Mnemonic;
use crate::scheme::{Blahaj, SecretSharing};
use crate::search::{self, CancellationToken, check_capacity};

/// Splits and recovers mnemonics using a secret-sharing scheme
///
/// # Examples
///
/// ```rust
/// use mnemonic_sharing::{Mnemonic, MnemonicSharing};
/// use mnemonic_sharing::domain::SplitConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mnemonic = Mnemonic::parse(
///     "legal winner thank year wave sausage worth useful legal winner thank yellow",
/// )?;
/// let sharing = MnemonicSharing::new();
///
/// let partials = sharing.split(&mnemonic, SplitConfig::from_raw(3, 5)?)?;
/// assert_eq!(partials.len(), 5);
///
/// let recovered = sharing.recover(&[
///     partials[4].clone(),
///     partials[0].clone(),
///     partials[2].clone(),
/// ])?;
/// assert_eq!(recovered, mnemonic);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MnemonicSharing<S = Blahaj> {
    scheme: S,
}

impl MnemonicSharing<Blahaj> {
    #[must_use]
    pub fn new() -> Self {
        Self { scheme: Blahaj }
    }
}

impl<S: SecretSharing> MnemonicSharing<S> {
    pub fn with_scheme(scheme: S) -> Self {
        Self { scheme }
    }

    /// Splits `mnemonic` into `config.share_count()` partial mnemonics, any
    /// `config.threshold()` of which recover it
    ///
    /// Partial mnemonics are returned in share order (index 1 first).
    ///
    /// # Errors
    /// Returns [`Error::TooManyShares`] if the share indices would not fit in
    /// the phrase's checksum bits (more than 15 shares of a 12-word phrase),
    /// and propagates secret-sharing and encoding errors
    pub fn split(&self, mnemonic: &Mnemonic, config: SplitConfig) -> Result<Vec<Mnemonic>> {
        check_capacity(mnemonic, config)?;
        debug!(
            words = mnemonic.word_count().words(),
            threshold = *config.threshold(),
            shares = *config.share_count(),
            "splitting mnemonic"
        );

        let entropy = extract_entropy(mnemonic)?;
        let shares =
            self.scheme
                .split_secret(*config.threshold(), *config.share_count(), &entropy)?;

        shares.iter().map(mnemonic_from_share).collect()
    }

    /// Like [`split`](Self::split), but every returned partial mnemonic
    /// passes the BIP39 checksum on its own
    ///
    /// # Errors
    /// Returns [`Error::PartialMnemonicsExhausted`] when `search` runs out of
    /// attempts and [`Error::Cancelled`] when `cancel` is signalled, in
    /// addition to the errors of [`split`](Self::split)
    pub fn split_only_valid(
        &self,
        mnemonic: &Mnemonic,
        config: SplitConfig,
        search: SearchConfig,
        cancel: &CancellationToken,
    ) -> Result<Vec<Mnemonic>> {
        debug!(
            words = mnemonic.word_count().words(),
            threshold = *config.threshold(),
            shares = *config.share_count(),
            max_attempts = search.max_attempts(),
            "searching for valid partial mnemonics"
        );

        search::split_only_valid(&self.scheme, mnemonic, config, search, cancel)
    }

    /// Recovers the mnemonic from partial mnemonics
    ///
    /// The result is the original phrase only if at least threshold partial
    /// mnemonics of the same split are supplied; see the module docs.
    ///
    /// # Errors
    /// Returns [`Error::NoPartialMnemonics`] for an empty slice, and
    /// propagates errors from the scheme (e.g. mixed phrase lengths)
    pub fn recover(&self, partials: &[Mnemonic]) -> Result<Mnemonic> {
        if partials.is_empty() {
            return Err(Error::NoPartialMnemonics);
        }
        debug!(partials = partials.len(), "recovering mnemonic");

        let shares = partials
            .iter()
            .map(share_from_mnemonic)
            .collect::<Result<Vec<_>>>()?;
        let entropy = self.scheme.recover_secret(&shares)?;

        Mnemonic::from_entropy(&entropy)
    }
}

impl<S> MnemonicSharing<S>
where
    S: SecretSharing + Clone + Send + 'static,
{
    /// Runs [`split_only_valid`](Self::split_only_valid) on the blocking
    /// thread pool
    ///
    /// Resolves with the same result as the synchronous form. Cancelling
    /// `cancel` stops the search at the next attempt boundary.
    ///
    /// # Errors
    /// As [`split_only_valid`](Self::split_only_valid), plus
    /// [`Error::Worker`] if the background task panicked
    pub async fn split_only_valid_async(
        &self,
        mnemonic: Mnemonic,
        config: SplitConfig,
        search: SearchConfig,
        cancel: CancellationToken,
    ) -> Result<Vec<Mnemonic>> {
        let sharing = self.clone();
        tokio::task::spawn_blocking(move || {
            sharing.split_only_valid(&mnemonic, config, search, &cancel)
        })
        .await
        .map_err(|e| Error::Worker(e.to_string()))?
    }
}
