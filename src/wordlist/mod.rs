//! BIP-39 Word List.
//!
//! An immutable bijection between 2048 words and their 11-bit indices.
//! The list is loaded once and then shared by reference with every component
//! that needs to translate between words and indices.
//!
//! # Integrity
//! Loading fails unless the source holds exactly 2048 distinct, non-empty,
//! lowercase entries. A list that fails this check cannot be used at all.

extern crate alloc;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

/// Number of entries in every BIP-39 word list.
pub const WORD_LIST_LEN: usize = 2048;

/// Number of bits addressed by one word.
pub const BITS_PER_WORD: usize = 11;

const ENGLISH: &str = include_str!("english.txt");

/// Errors for word list loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    /// The source does not contain exactly 2048 entries.
    WrongLength(usize),
    /// The same word appears more than once.
    DuplicateWord(String),
    /// An entry at the given line is blank.
    EmptyWord(usize),
    /// An entry contains uppercase characters; input is always lowercased.
    NotLowercase(String),
    /// The backing file could not be read.
    #[cfg(feature = "std")]
    Io(std::io::ErrorKind),
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordListError::WrongLength(n) => {
                write!(f, "expected {} words, found {}", WORD_LIST_LEN, n)
            }
            WordListError::DuplicateWord(w) => write!(f, "duplicate word '{}'", w),
            WordListError::EmptyWord(line) => write!(f, "empty entry at line {}", line + 1),
            WordListError::NotLowercase(w) => write!(f, "word '{}' is not lowercase", w),
            #[cfg(feature = "std")]
            WordListError::Io(kind) => write!(f, "cannot read word list: {}", kind),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WordListError {}

/// Read-only word/index lookup table.
#[derive(Clone)]
pub struct WordList {
    words: Vec<String>,
    index: BTreeMap<String, u16>,
}

impl fmt::Debug for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordList")
            .field("len", &self.words.len())
            .field("first", &self.words.first())
            .field("last", &self.words.last())
            .finish()
    }
}

impl WordList {
    /// The standard BIP-39 English list, embedded at compile time.
    pub fn english() -> Result<Self, WordListError> {
        Self::from_lines(ENGLISH)
    }

    /// Parses a newline-separated list, one word per line.
    ///
    /// Surrounding whitespace on each line is ignored.
    pub fn from_lines(text: &str) -> Result<Self, WordListError> {
        let words: Vec<String> = text.lines().map(|l| l.trim().to_string()).collect();
        if words.len() != WORD_LIST_LEN {
            return Err(WordListError::WrongLength(words.len()));
        }

        let mut index = BTreeMap::new();
        for (i, word) in words.iter().enumerate() {
            if word.is_empty() {
                return Err(WordListError::EmptyWord(i));
            }
            if word.chars().any(char::is_uppercase) {
                return Err(WordListError::NotLowercase(word.clone()));
            }
            // i < 2048, fits in 11 bits
            if index.insert(word.clone(), i as u16).is_some() {
                return Err(WordListError::DuplicateWord(word.clone()));
            }
        }

        log::debug!("Loaded word list ({} entries)", words.len());
        Ok(Self { words, index })
    }

    /// Loads a word list from a file on disk.
    #[cfg(feature = "std")]
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, WordListError> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|e| WordListError::Io(e.kind()))?;
        Self::from_lines(&text)
    }

    /// Index of `word` (0..=2047), or `None` when the word is not listed.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(word).copied()
    }

    /// Word at `index`. Only the low 11 bits of `index` are used.
    pub fn word_at(&self, index: u16) -> &str {
        &self.words[usize::from(index) & (WORD_LIST_LEN - 1)]
    }

    /// Whether `word` belongs to the list.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
