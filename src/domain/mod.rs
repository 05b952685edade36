//! Domain types for mnemonic sharing
//!
//! This module contains validated newtypes and configuration:
//! - [`Threshold`] - Minimum partial mnemonics required for recovery (1..)
//! - [`ShareCount`] - Total number of partial mnemonics to create (1..=16)
//! - [`ShareIndex`] - Share index number carried by a partial mnemonic (1..=16)
//! - [`WordCount`] - Supported phrase sizes and their entropy/checksum layout
//! - [`SplitConfig`] - Validated threshold and share count pair
//! - [`SearchConfig`] - Attempt budget for the validity search

mod config;
mod share_count;
mod share_index;
mod threshold;
mod word_count;

pub use config::{DEFAULT_MAX_ATTEMPTS, SearchConfig, SplitConfig};
pub use share_count::ShareCount;
pub use share_index::ShareIndex;
pub use threshold::Threshold;
pub use word_count::{WORD_BITS, WordCount};
