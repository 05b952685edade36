use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

use mnemonic_sharing::cli::{Cli, Commands};
use mnemonic_sharing::commands::{
    SplitReport, label_partials, recover_mnemonic, split_mnemonic, split_mnemonic_only_valid,
};
use mnemonic_sharing::domain::SearchConfig;
use mnemonic_sharing::search::CancellationToken;

/// Read a mnemonic securely from stdin (hidden input when TTY available)
fn read_mnemonic() -> Result<Zeroizing<String>> {
    // Try to use TTY for secure input
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter mnemonic (12, 15, 18, 21 or 24 words):");
        rpassword::read_password()
            .map(Zeroizing::new)
            .context("Failed to read mnemonic from stdin")
    } else {
        // Non-interactive mode (piped input) - read directly from stdin
        let stdin = io::stdin();
        let mut handle = stdin.lock();
        let mut mnemonic = Zeroizing::new(String::new());
        handle
            .read_line(&mut mnemonic)
            .context("Failed to read mnemonic from stdin")?;
        Ok(Zeroizing::new(mnemonic.trim().to_string()))
    }
}

/// Read partial mnemonics from stdin (hidden input when TTY available)
/// User should input them one per line, followed by an empty line to finish
fn read_partials() -> Result<Vec<String>> {
    let mut partials = Vec::new();

    if atty::is(atty::Stream::Stdin) {
        // Interactive mode - use rpassword for hidden input
        eprintln!("Enter partial mnemonics (one per line, empty line to finish):");

        loop {
            let partial = Zeroizing::new(
                rpassword::read_password().context("Failed to read partial mnemonic from stdin")?,
            );

            // Empty line signals we're done
            if partial.trim().is_empty() {
                break;
            }

            partials.push(partial.trim().to_string());
        }
    } else {
        // Non-interactive mode - read from stdin
        let stdin = io::stdin();
        let handle = stdin.lock();

        for line in handle.lines() {
            let line = Zeroizing::new(line.context("Failed to read line from stdin")?);
            let trimmed = line.trim();

            // Empty line signals we're done
            if trimmed.is_empty() {
                break;
            }

            partials.push(trimmed.to_string());
        }
    }

    if partials.is_empty() {
        anyhow::bail!("No partial mnemonics provided");
    }

    Ok(partials)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            shares,
            threshold,
            valid_only,
            max_attempts,
            json,
        } => {
            let mnemonic = read_mnemonic()?;

            let partials = if valid_only {
                split_mnemonic_only_valid(
                    &mnemonic,
                    *threshold,
                    *shares,
                    SearchConfig::new(max_attempts),
                    &CancellationToken::new(),
                )
                .context("Failed to split mnemonic into valid partial mnemonics")?
            } else {
                split_mnemonic(&mnemonic, *threshold, *shares)
                    .context("Failed to split mnemonic")?
            };

            if json {
                let report = SplitReport {
                    shares: partials,
                    share_count: *shares,
                    threshold: *threshold,
                    valid_only,
                };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).context("Serialization failed")?
                );
            } else {
                for line in label_partials(&partials) {
                    println!("{line}");
                }
            }
        }
        Commands::Recover => {
            let partials = read_partials()?;
            let recovered = recover_mnemonic(&partials).context("Failed to recover mnemonic")?;
            println!("{recovered}");
        }
    }

    Ok(())
}
