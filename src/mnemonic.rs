//! Owned BIP39 mnemonic
//!
//! Unlike [`bip39::Mnemonic`], parsing here does not verify the checksum:
//! partial mnemonics reuse the checksum bits, so most of them would be
//! rejected by a strict parser.

use bip39::Language;
use zeroize::Zeroizing;

use crate::codec::{self, word_from_index, word_to_index};
use crate::domain::WordCount;
use crate::error::{Error, Result};

/// A sequence of 12, 15, 18, 21 or 24 BIP39 words, held as word indices
///
/// Two mnemonics are equal when their word sequences are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mnemonic {
    indices: Zeroizing<Vec<u16>>,
    word_count: WordCount,
}

impl Mnemonic {
    /// Parses a whitespace-separated phrase without checking its checksum
    ///
    /// Words are matched case-insensitively against the English wordlist.
    ///
    /// # Errors
    /// Returns [`Error::MissingArgument`] for a blank phrase,
    /// [`Error::UnsupportedWordCount`] or [`Error::UnknownWord`] otherwise
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mnemonic_sharing::Mnemonic;
    ///
    /// let mnemonic = Mnemonic::parse(
    ///     "army van defense carry jealous true garbage claim echo media make crunch",
    /// ).unwrap();
    /// assert_eq!(mnemonic.word_count().words(), 12);
    /// assert!(mnemonic.is_checksum_valid());
    ///
    /// // Checksum is not enforced
    /// let wrong = Mnemonic::parse(
    ///     "three three three three three three three three three three three three",
    /// ).unwrap();
    /// assert!(!wrong.is_checksum_valid());
    /// ```
    pub fn parse(phrase: &str) -> Result<Self> {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        if words.is_empty() {
            return Err(Error::MissingArgument("mnemonic"));
        }
        Self::from_words(words)
    }

    /// Builds a mnemonic from an ordered list of words
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedWordCount`] or [`Error::UnknownWord`]
    pub fn from_words<I, W>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let indices = words
            .into_iter()
            .map(|word| word_to_index(word.as_ref()))
            .collect::<Result<Vec<_>>>()
            .map(Zeroizing::new)?;
        let word_count = WordCount::new(indices.len())?;
        Ok(Self {
            indices,
            word_count,
        })
    }

    /// Builds the mnemonic for `entropy`, with a genuine checksum
    ///
    /// # Errors
    /// Returns [`Error::Bip39`] if the entropy is not 16, 20, 24, 28 or 32 bytes
    pub fn from_entropy(entropy: &[u8]) -> Result<Self> {
        let mnemonic = bip39::Mnemonic::from_entropy_in(Language::English, entropy)?;
        let phrase = Zeroizing::new(mnemonic.to_string());
        Self::parse(&phrase)
    }

    #[must_use]
    pub fn word_count(&self) -> WordCount {
        self.word_count
    }

    /// Word indices (0-2047), first word first
    #[must_use]
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Index of the final word, the one holding the checksum bits
    #[must_use]
    pub fn last_index(&self) -> u16 {
        self.indices.last().copied().unwrap_or_default()
    }

    /// Returns a copy with the final word replaced by the word at `index`
    ///
    /// # Errors
    /// Returns an error if `index` is outside the wordlist
    pub fn with_last_index(mut self, index: u16) -> Result<Self> {
        word_from_index(index)?;
        if let Some(last) = self.indices.last_mut() {
            *last = index;
        }
        Ok(self)
    }

    /// Words of the phrase in order
    pub fn words(&self) -> impl Iterator<Item = &'static str> + '_ {
        let wordlist = Language::English.word_list();
        self.indices.iter().map(move |&index| wordlist[usize::from(index)])
    }

    /// Entropy encoded by the phrase, ignoring the checksum bits
    ///
    /// # Errors
    /// See [`codec::extract_entropy`]
    pub fn entropy(&self) -> Result<Zeroizing<Vec<u8>>> {
        codec::extract_entropy(self)
    }

    /// Whether the checksum bits match the entropy, as BIP39 requires
    #[must_use]
    pub fn is_checksum_valid(&self) -> bool {
        bip39::Mnemonic::parse_in_normalized(Language::English, &self.to_phrase()).is_ok()
    }

    /// The phrase as a single space-separated string
    #[must_use]
    pub fn to_phrase(&self) -> Zeroizing<String> {
        Zeroizing::new(self.words().collect::<Vec<_>>().join(" "))
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &*self.to_phrase())
    }
}

impl std::str::FromStr for Mnemonic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
