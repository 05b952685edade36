//! Split a BIP39 mnemonic into partial mnemonics with Shamir's secret
//! sharing, and recover it from any threshold-sized subset.
//!
//! Each partial mnemonic is an ordinary-looking phrase of the same length
//! as the original: its entropy is one share's value, and the checksum bits
//! of its final word carry the share's index number.

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod commands;
pub mod domain;
pub mod error;
pub mod mnemonic;
pub mod scheme;
pub mod search;
pub mod sharing;

pub use error::{Error, Result};
pub use mnemonic::Mnemonic;
pub use scheme::{Blahaj, SecretSharing, Share};
pub use search::CancellationToken;
pub use sharing::MnemonicSharing;
