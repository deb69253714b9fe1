//! Mnemonic word sequences.
//!
//! A `Mnemonic` is an ordered list of lowercase words. Parsing only normalizes
//! text; membership in the word list and the word count are checked by
//! `pad::validate`.

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Ordered sequence of words.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Mnemonic {
    words: Vec<String>,
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("words", &self.words.len())
            .field("value", &"***SENSITIVE***")
            .finish()
    }
}

/// Space-separated phrase.
impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

impl Mnemonic {
    /// Splits `phrase` on any whitespace and lowercases every word.
    pub fn parse(phrase: &str) -> Self {
        let words = phrase.split_whitespace().map(|w| w.to_lowercase()).collect();
        Self { words }
    }

    pub fn from_words(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Every word but the last, and the last word.
    pub fn split_last(&self) -> Option<(&String, &[String])> {
        self.words.split_last()
    }
}
