//! Search for partial mnemonics that pass the BIP39 checksum on their own
//!
//! Overwriting the checksum bits with a share index leaves a partial
//! mnemonic valid with probability `1 / 2^checksum_bits` (1/16 for 12
//! words, 1/256 for 24). The search re-splits the entropy until one split
//! yields enough valid partial mnemonics, within an attempt budget.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, trace, warn};

use crate::codec::{extract_entropy, mnemonic_from_share};
use crate::domain::{SearchConfig, SplitConfig};
use crate::error::{Error, Result};
use crate::mnemonic::Mnemonic;
use crate::scheme::SecretSharing;

/// Cooperative cancellation flag shared between a caller and a search
///
/// Clones observe the same flag. The search checks it once before every
/// attempt; an attempt in progress always completes.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Splits `mnemonic` until `config.share_count()` partial mnemonics of a
/// single split pass the checksum
///
/// Each attempt splits the entropy into as many shares as the phrase's
/// checksum bits can number (see [`WordCount::max_shares`](crate::domain::WordCount::max_shares)),
/// keeps the valid partial mnemonics in share order, and stops at the
/// requested count. Surplus and partial progress are discarded.
///
/// # Errors
/// Returns [`Error::TooManyShares`] if the requested share indices do not
/// fit in the checksum bits, [`Error::Cancelled`] if `cancel` is signalled before an attempt,
/// [`Error::PartialMnemonicsExhausted`] once the attempt budget is spent,
/// and propagates secret-sharing and encoding errors
pub fn split_only_valid<S>(
    scheme: &S,
    mnemonic: &Mnemonic,
    config: SplitConfig,
    search: SearchConfig,
    cancel: &CancellationToken,
) -> Result<Vec<Mnemonic>>
where
    S: SecretSharing + ?Sized,
{
    check_capacity(mnemonic, config)?;
    let wanted = usize::from(*config.share_count());
    let candidates = mnemonic.word_count().max_shares();
    let entropy = extract_entropy(mnemonic)?;

    for attempt in 1..=search.max_attempts() {
        if cancel.is_cancelled() {
            warn!(attempt, "partial mnemonic search cancelled");
            return Err(Error::Cancelled);
        }

        let shares = scheme.split_secret(*config.threshold(), candidates, &entropy)?;

        let mut valid = Vec::with_capacity(wanted);
        for share in &shares {
            let partial = mnemonic_from_share(share)?;
            if partial.is_checksum_valid() {
                valid.push(partial);
                if valid.len() == wanted {
                    debug!(attempt, "found enough valid partial mnemonics");
                    return Ok(valid);
                }
            }
        }

        trace!(attempt, valid = valid.len(), wanted, "attempt fell short");
    }

    warn!(
        max_attempts = search.max_attempts(),
        "partial mnemonic search exhausted"
    );
    Err(Error::PartialMnemonicsExhausted {
        max_attempts: search.max_attempts(),
    })
}

/// Every share index of the split has to fit in the checksum bits
pub(crate) fn check_capacity(mnemonic: &Mnemonic, config: SplitConfig) -> Result<()> {
    let max = mnemonic.word_count().max_shares();
    if *config.share_count() > max {
        return Err(Error::TooManyShares {
            requested: *config.share_count(),
            max,
        });
    }
    Ok(())
}
