use serde::{Deserialize, Serialize};

use crate::domain::{SearchConfig, SplitConfig};
use crate::error::{Error, Result};
use crate::mnemonic::Mnemonic;
use crate::search::CancellationToken;
use crate::sharing::MnemonicSharing;

/// Result of a split operation (for JSON output)
#[derive(Debug, Serialize, Deserialize)]
pub struct SplitReport {
    /// The generated partial mnemonics, in share order
    pub shares: Vec<String>,
    /// Number of partial mnemonics generated
    pub share_count: u8,
    /// Threshold required to reconstruct
    pub threshold: u8,
    /// Whether every partial mnemonic passes the BIP39 checksum
    pub valid_only: bool,
}

/// Split a mnemonic phrase into partial mnemonic phrases
///
/// Parameters are validated in order: phrase present, threshold not 0,
/// threshold not above `share_count`, `share_count` at most 16.
///
/// # Errors
/// Returns an error if validation, mnemonic parsing or share encoding fails
pub fn split_mnemonic(mnemonic_str: &str, threshold: u8, share_count: u8) -> Result<Vec<String>> {
    let (mnemonic, config) = parse_split_input(mnemonic_str, threshold, share_count)?;
    let partials = MnemonicSharing::new().split(&mnemonic, config)?;
    Ok(partials.iter().map(ToString::to_string).collect())
}

/// Split a mnemonic phrase into partial mnemonic phrases that each pass
/// the BIP39 checksum
///
/// # Errors
/// As [`split_mnemonic`], plus [`Error::PartialMnemonicsExhausted`] and
/// [`Error::Cancelled`]
pub fn split_mnemonic_only_valid(
    mnemonic_str: &str,
    threshold: u8,
    share_count: u8,
    search: SearchConfig,
    cancel: &CancellationToken,
) -> Result<Vec<String>> {
    let (mnemonic, config) = parse_split_input(mnemonic_str, threshold, share_count)?;
    let partials = MnemonicSharing::new().split_only_valid(&mnemonic, config, search, cancel)?;
    Ok(partials.iter().map(ToString::to_string).collect())
}

/// Recover the original mnemonic phrase from partial mnemonic phrases
///
/// Fewer than threshold partial mnemonics give a wrong phrase, not an error.
///
/// # Errors
/// Returns an error if no phrases are given or a phrase cannot be parsed
pub fn recover_mnemonic(partial_strings: &[String]) -> Result<String> {
    if partial_strings.is_empty() {
        return Err(Error::NoPartialMnemonics);
    }

    let partials = partial_strings
        .iter()
        .map(|s| Mnemonic::parse(s))
        .collect::<Result<Vec<_>>>()?;

    let recovered = MnemonicSharing::new().recover(&partials)?;
    Ok(recovered.to_string())
}

fn parse_split_input(
    mnemonic_str: &str,
    threshold: u8,
    share_count: u8,
) -> Result<(Mnemonic, SplitConfig)> {
    if mnemonic_str.trim().is_empty() {
        return Err(Error::MissingArgument("mnemonic"));
    }
    let config = SplitConfig::from_raw(threshold, share_count)?;
    let mnemonic = Mnemonic::parse(mnemonic_str)?;
    Ok((mnemonic, config))
}

/// Labels partial mnemonics by their position in the output
///
/// The position is not necessarily the share index the phrase carries:
/// valid-only splits skip the indices whose phrases failed the checksum.
#[must_use]
pub fn label_partials(partials: &[String]) -> Vec<String> {
    let total = partials.len();
    (1..)
        .zip(partials)
        .map(|(position, partial)| format!("Partial mnemonic {position} of {total}: {partial}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_partials_by_position() {
        let partials = vec!["alpha".to_string(), "beta".to_string()];
        assert_eq!(
            label_partials(&partials),
            vec![
                "Partial mnemonic 1 of 2: alpha".to_string(),
                "Partial mnemonic 2 of 2: beta".to_string(),
            ]
        );
        assert!(label_partials(&[]).is_empty());
    }

    const TWELVE: &str = "army van defense carry jealous true garbage claim echo media make crunch";

    #[test]
    fn test_split_mnemonic_invalid_input() {
        let result = split_mnemonic("invalid mnemonic words here", 2, 3);
        assert!(matches!(result, Err(Error::UnknownWord(_))));
    }

    #[test]
    fn test_split_mnemonic_missing() {
        assert!(matches!(
            split_mnemonic("", 2, 3),
            Err(Error::MissingArgument("mnemonic"))
        ));
        assert!(matches!(
            split_mnemonic(" \n ", 2, 3),
            Err(Error::MissingArgument("mnemonic"))
        ));
    }

    #[test]
    fn test_split_mnemonic_threshold_zero() {
        let result = split_mnemonic(TWELVE, 0, 5);
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("threshold can not be 0"));
    }

    #[test]
    fn test_split_mnemonic_threshold_above_share_count() {
        assert!(matches!(
            split_mnemonic(TWELVE, 6, 5),
            Err(Error::InvalidThreshold { threshold: 6, .. })
        ));
    }

    #[test]
    fn test_split_mnemonic_too_many_shares() {
        assert!(matches!(
            split_mnemonic(TWELVE, 5, 17),
            Err(Error::TooManyShares {
                requested: 17,
                max: 16
            })
        ));
    }

    #[test]
    fn test_split_mnemonic_24_word() {
        let mnemonic_str = "void come effort suffer camp survey warrior heavy shoot primary clutch crush open amazing screen patrol group space point ten exist slush involve unfold";
        let shares = split_mnemonic(mnemonic_str, 3, 16).unwrap();
        assert_eq!(shares.len(), 16);
        for share in &shares {
            assert_eq!(share.split_whitespace().count(), 24);
        }
    }

    #[test]
    fn test_full_split_and_recover_round_trip() {
        let share_strings = split_mnemonic(TWELVE, 2, 3).unwrap();
        assert_eq!(share_strings.len(), 3);

        // Take 2 shares (threshold is 2)
        let selected_shares = vec![share_strings[0].clone(), share_strings[1].clone()];

        let recovered_mnemonic = recover_mnemonic(&selected_shares).unwrap();
        assert_eq!(TWELVE, recovered_mnemonic);
    }

    #[test]
    fn test_recover_with_insufficient_shares_is_wrong_not_an_error() {
        let share_strings = split_mnemonic(TWELVE, 3, 5).unwrap();

        // Only 2 shares (threshold is 3)
        let insufficient_shares = vec![share_strings[0].clone(), share_strings[1].clone()];
        let recovered = recover_mnemonic(&insufficient_shares).unwrap();

        assert_ne!(TWELVE, recovered);
    }

    #[test]
    fn test_recover_empty_input() {
        let empty_shares: Vec<String> = vec![];
        assert!(matches!(
            recover_mnemonic(&empty_shares),
            Err(Error::NoPartialMnemonics)
        ));
    }

    #[test]
    fn test_recover_invalid_phrase() {
        let invalid_shares = vec!["invalid word word word".to_string()];
        assert!(recover_mnemonic(&invalid_shares).is_err());
    }

    #[test]
    fn test_recover_mixed_lengths_fails() {
        let twelve = split_mnemonic(TWELVE, 1, 1).unwrap();
        let fifteen = split_mnemonic(
            "thing gaze dose wonder pave seat saddle moral cream move beauty space dignity sail typical",
            1,
            1,
        )
        .unwrap();

        let result = recover_mnemonic(&[twelve[0].clone(), fifteen[0].clone()]);
        assert!(matches!(result, Err(Error::SecretSharing(_))));
    }

    #[test]
    fn test_split_only_valid() {
        let shares = split_mnemonic_only_valid(
            TWELVE,
            2,
            2,
            SearchConfig::default(),
            &CancellationToken::new(),
        )
        .unwrap();
        assert_eq!(shares.len(), 2);
        for share in &shares {
            assert!(Mnemonic::parse(share).unwrap().is_checksum_valid());
        }
        assert_eq!(recover_mnemonic(&shares).unwrap(), TWELVE);
    }
}
