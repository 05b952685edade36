//! Property tests for split/recover workflows

use mnemonic_sharing::MnemonicSharing;
use mnemonic_sharing::domain::SplitConfig;
use quickcheck_macros::quickcheck;

use super::support::{ValidMnemonic, ValidParams, shuffled_indices};

/// Test that splitting and recovering with threshold partials gives the original back
#[quickcheck]
fn prop_split_recover_round_trip(mnemonic: ValidMnemonic, params: ValidParams) -> bool {
    let ValidMnemonic(mnemonic) = mnemonic;
    let sharing = MnemonicSharing::new();

    let Ok(config) = SplitConfig::from_raw(params.threshold, params.share_count) else {
        return false;
    };
    let Ok(partials) = sharing.split(&mnemonic, config) else {
        return false;
    };
    if partials.len() != usize::from(params.share_count) {
        return false;
    }

    let selected = &partials[..usize::from(params.threshold)];
    sharing
        .recover(selected)
        .is_ok_and(|recovered| recovered == mnemonic)
}

/// Test that random selections of threshold partials work
#[quickcheck]
fn prop_random_selection_recovers(
    mnemonic: ValidMnemonic,
    params: ValidParams,
    selection_seed: u64,
) -> bool {
    let ValidMnemonic(mnemonic) = mnemonic;
    let sharing = MnemonicSharing::new();

    let Ok(config) = SplitConfig::from_raw(params.threshold, params.share_count) else {
        return false;
    };
    let Ok(partials) = sharing.split(&mnemonic, config) else {
        return false;
    };

    let selected: Vec<_> = shuffled_indices(partials.len(), selection_seed)
        .into_iter()
        .take(usize::from(params.threshold))
        .map(|idx| partials[idx].clone())
        .collect();

    sharing
        .recover(&selected)
        .is_ok_and(|recovered| recovered == mnemonic)
}

/// Test that one partial short of the threshold gives a different phrase
#[quickcheck]
fn prop_below_threshold_gives_other_phrase(mnemonic: ValidMnemonic, params: ValidParams) -> bool {
    let ValidMnemonic(mnemonic) = mnemonic;
    if params.threshold < 2 {
        return true;
    }
    let sharing = MnemonicSharing::new();

    let Ok(config) = SplitConfig::from_raw(params.threshold, params.share_count) else {
        return false;
    };
    let Ok(partials) = sharing.split(&mnemonic, config) else {
        return false;
    };

    let insufficient = &partials[..usize::from(params.threshold - 1)];
    sharing
        .recover(insufficient)
        .is_ok_and(|recovered| recovered != mnemonic)
}

/// Test that every partial mnemonic has the length of the original
#[quickcheck]
fn prop_partials_keep_word_count(mnemonic: ValidMnemonic, params: ValidParams) -> bool {
    let ValidMnemonic(mnemonic) = mnemonic;

    let Ok(config) = SplitConfig::from_raw(params.threshold, params.share_count) else {
        return false;
    };
    MnemonicSharing::new()
        .split(&mnemonic, config)
        .is_ok_and(|partials| {
            partials
                .iter()
                .all(|partial| partial.word_count() == mnemonic.word_count())
        })
}
