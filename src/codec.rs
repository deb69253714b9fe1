//! Word <-> bit string translation.
//!
//! Each word contributes its 11-bit index, most significant bit first, in
//! phrase order. Checksum computation lives in `core::checksum` and is
//! re-exported here.

extern crate alloc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::core::bits::BitWriter;
use crate::error::SeedXorError;
use crate::mnemonic::Mnemonic;
use crate::wordlist::{WordList, BITS_PER_WORD};

pub use crate::core::checksum::{checksum, checksum_bits};

/// Resolves every word to its index.
///
/// # Errors
/// * `SeedXorError::InvalidWords` listing each unknown word, in order.
pub fn word_indices(words: &[String], list: &WordList) -> Result<Vec<u16>, SeedXorError> {
    let mut indices = Vec::with_capacity(words.len());
    let mut unknown = Vec::new();
    for word in words {
        match list.index_of(word) {
            Some(i) => indices.push(i),
            None => unknown.push(word.clone()),
        }
    }
    if !unknown.is_empty() {
        return Err(SeedXorError::InvalidWords(unknown));
    }
    Ok(indices)
}

/// Concatenated 11-bit indices of `words`; length is `11 * words.len()`.
///
/// Callers pass every word but the last to obtain the entropy prefix.
pub fn prefix_bits(words: &[String], list: &WordList) -> Result<BitWriter, SeedXorError> {
    let mut bits = BitWriter::new();
    for index in word_indices(words, list)? {
        bits.push(index, BITS_PER_WORD);
    }
    Ok(bits)
}

/// Splits `bits` into consecutive 11-bit groups and maps each through the list.
/// Trailing bits that do not fill a whole group are ignored.
pub fn bits_to_mnemonic(bits: &BitWriter, list: &WordList) -> Mnemonic {
    let mut reader = bits.reader();
    let mut words = Vec::with_capacity(bits.len() / BITS_PER_WORD);
    while let Some(index) = reader.read(BITS_PER_WORD) {
        words.push(list.word_at(index).to_string());
    }
    Mnemonic::from_words(words)
}
