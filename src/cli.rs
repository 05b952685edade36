use clap::{Parser, Subcommand};

use crate::domain::{DEFAULT_MAX_ATTEMPTS, ShareCount, Threshold};

/// Validates that threshold is at least 1
fn validate_threshold(s: &str) -> Result<Threshold, String> {
    let value: u8 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    Threshold::new(value).map_err(|e| e.to_string())
}

/// Validates that the share count is between 1 and 16
fn validate_share_count(s: &str) -> Result<ShareCount, String> {
    let value: u8 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    ShareCount::new(value).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "mnemonic-sharing")]
#[command(about = "Split BIP39 mnemonics into partial mnemonics and recover them")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a mnemonic into partial mnemonics
    Split {
        /// Number of partial mnemonics to create (1-16, 1-15 for 12 words)
        #[arg(short, long, value_parser = validate_share_count)]
        shares: ShareCount,

        /// Threshold: minimum number of partial mnemonics needed to recover
        #[arg(short, long, value_parser = validate_threshold)]
        threshold: Threshold,

        /// Only output partial mnemonics that pass the BIP39 checksum
        #[arg(long)]
        valid_only: bool,

        /// Attempt budget for --valid-only
        #[arg(
            long,
            default_value_t = DEFAULT_MAX_ATTEMPTS,
            env = "MNEMONIC_SHARING_MAX_ATTEMPTS"
        )]
        max_attempts: u32,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Recover the original mnemonic from partial mnemonics
    Recover,
}
