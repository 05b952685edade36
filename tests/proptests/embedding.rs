//! Property tests for the share index carrier and entropy extraction

use mnemonic_sharing::codec::{
    carried_share_index, embed_share_index, extract_entropy, mnemonic_from_share,
    share_from_mnemonic,
};
use mnemonic_sharing::domain::WordCount;
use mnemonic_sharing::{Mnemonic, Share};
use quickcheck_macros::quickcheck;

use super::support::ValidMnemonic;

/// Extracted entropy matches the reference BIP39 implementation
#[quickcheck]
fn prop_entropy_matches_bip39(mnemonic: ValidMnemonic) -> bool {
    let ValidMnemonic(mnemonic) = mnemonic;
    let Ok(reference) = bip39::Mnemonic::parse(mnemonic.to_string()) else {
        return false;
    };

    extract_entropy(&mnemonic).is_ok_and(|entropy| *entropy == reference.to_entropy())
}

/// Embedding keeps the high bits and the carried index reads back
#[quickcheck]
fn prop_embed_then_read_back(last_index: u16, words: u8, share_index: u8) -> bool {
    let last_index = last_index % 2048;
    let words = WordCount::ALL[usize::from(words) % WordCount::ALL.len()];
    let Ok(word_count) = WordCount::new(usize::from(words)) else {
        return false;
    };
    let share_index = share_index % word_count.max_shares() + 1;

    let Ok(embedded) = embed_share_index(last_index, word_count, share_index) else {
        return false;
    };

    let mask = word_count.checksum_mask();
    embedded < 2048
        && embedded & !mask == last_index & !mask
        && carried_share_index(embedded, word_count) == share_index
}

/// A share survives the trip through a partial mnemonic, and the partial
/// mnemonic only differs from the plain phrase in the carried bits
#[quickcheck]
fn prop_partial_mnemonic_carries_share(mnemonic: ValidMnemonic, share_index: u8) -> bool {
    let ValidMnemonic(plain) = mnemonic;
    let word_count = plain.word_count();
    let share_index = share_index % word_count.max_shares() + 1;

    let Ok(entropy) = plain.entropy() else {
        return false;
    };
    let share = Share::new(share_index, entropy);

    let Ok(partial) = mnemonic_from_share(&share) else {
        return false;
    };
    let Ok(back) = share_from_mnemonic(&partial) else {
        return false;
    };

    let n = word_count.words();
    let mask = word_count.checksum_mask();
    back == share
        && partial.indices()[..n - 1] == plain.indices()[..n - 1]
        && partial.last_index() & !mask == plain.last_index() & !mask
}

/// A partial mnemonic is checksum-valid exactly when its carried index
/// happens to equal the genuine checksum
#[quickcheck]
fn prop_validity_is_index_equals_checksum(mnemonic: ValidMnemonic, share_index: u8) -> bool {
    let ValidMnemonic(plain) = mnemonic;
    let word_count = plain.word_count();
    let share_index = share_index % word_count.max_shares() + 1;

    let Ok(entropy) = plain.entropy() else {
        return false;
    };
    let Ok(partial) = mnemonic_from_share(&Share::new(share_index, entropy)) else {
        return false;
    };

    let genuine = carried_share_index(plain.last_index(), word_count);
    partial.is_checksum_valid() == (genuine == share_index)
}

/// Parsing the rendered phrase gives the same mnemonic back
#[quickcheck]
fn prop_display_parse_round_trip(mnemonic: ValidMnemonic) -> bool {
    let ValidMnemonic(mnemonic) = mnemonic;
    Mnemonic::parse(&mnemonic.to_string()).is_ok_and(|parsed| parsed == mnemonic)
}
