//! Crate-wide error taxonomy.
//!
//! Every per-pad validation failure is recoverable: the caller re-requests the
//! offending pad. `ChecksumRecoveryFailed` and word-list integrity failures
//! abort the operation that raised them.

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::wordlist::WordListError;

/// Errors raised while decoding, combining or re-encoding pads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedXorError {
    /// One or more supplied words are absent from the word list.
    InvalidWords(Vec<String>),
    /// Word count is neither 12 nor 24.
    InvalidWordCount(usize),
    /// A pad's word count differs from the first accepted pad.
    InconsistentPadLength { expected: usize, got: usize },
    /// Fewer pads than required were supplied before finalizing.
    InsufficientPads { required: usize, got: usize },
    /// No candidate suffix reproduced the pad's last word.
    ChecksumRecoveryFailed,
    /// The backing word list is malformed.
    WordList(WordListError),
}

impl SeedXorError {
    /// Whether the collection boundary may re-prompt instead of aborting.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SeedXorError::InvalidWords(_)
            | SeedXorError::InvalidWordCount(_)
            | SeedXorError::InconsistentPadLength { .. }
            | SeedXorError::InsufficientPads { .. } => true,
            SeedXorError::ChecksumRecoveryFailed | SeedXorError::WordList(_) => false,
        }
    }
}

impl fmt::Display for SeedXorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedXorError::InvalidWords(words) => {
                write!(f, "words not in bip39 words list: {}", words.join(", "))
            }
            SeedXorError::InvalidWordCount(n) => {
                write!(f, "{} words inserted, expected 12 or 24", n)
            }
            SeedXorError::InconsistentPadLength { expected, got } => write!(
                f,
                "pad has {} words but the first pad has {}",
                got, expected
            ),
            SeedXorError::InsufficientPads { required, got } => write!(
                f,
                "at least {} pads are required, {} supplied",
                required, got
            ),
            SeedXorError::ChecksumRecoveryFailed => {
                write!(f, "last word does not carry a valid checksum")
            }
            SeedXorError::WordList(e) => write!(f, "word list integrity error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SeedXorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeedXorError::WordList(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WordListError> for SeedXorError {
    fn from(e: WordListError) -> Self {
        SeedXorError::WordList(e)
    }
}
