//! Pad input validation.
//!
//! Pure checks on a parsed mnemonic, run before any decoding. Unknown words
//! are reported before a bad word count, so a typo in a phrase of the wrong
//! length is still pointed out.

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::core::WordCount;
use crate::error::SeedXorError;
use crate::mnemonic::Mnemonic;
use crate::wordlist::WordList;

/// Outcome of validating one pad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Ok(WordCount),
    InvalidWordCount(usize),
    /// Unknown words, in phrase order.
    InvalidWords(Vec<String>),
}

impl Validation {
    pub fn is_ok(&self) -> bool {
        matches!(self, Validation::Ok(_))
    }

    pub fn into_result(self) -> Result<WordCount, SeedXorError> {
        match self {
            Validation::Ok(wc) => Ok(wc),
            Validation::InvalidWordCount(n) => Err(SeedXorError::InvalidWordCount(n)),
            Validation::InvalidWords(words) => Err(SeedXorError::InvalidWords(words)),
        }
    }
}

/// Checks that every word is listed and that there are 12 or 24 of them.
pub fn validate(mnemonic: &Mnemonic, list: &WordList) -> Validation {
    let unknown: Vec<String> = mnemonic
        .words()
        .iter()
        .filter(|w| !list.contains(w))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Validation::InvalidWords(unknown);
    }

    match WordCount::from_words(mnemonic.len()) {
        Ok(wc) => Validation::Ok(wc),
        Err(_) => Validation::InvalidWordCount(mnemonic.len()),
    }
}
