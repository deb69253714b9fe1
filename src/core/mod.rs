//! Fixed-width primitives shared by every stage.
//!
//! # Components
//! - `bits`: MSB-first packing of 11-bit word indices and raw bytes.
//! - `checksum`: SHA-256 derived checksum bits.
//! - `xor`: byte-wise XOR accumulation used by the combiner.
//!
//! Entropy is held in a fixed 32-byte buffer; a 12-word phrase uses the first
//! 16 bytes and the remainder stays zero.

extern crate alloc;
use alloc::string::String;
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::SeedXorError;
use crate::wordlist::BITS_PER_WORD;

pub mod bits;
pub mod checksum;
pub mod xor;

/// Largest entropy size handled, in bytes (256 bits).
pub const MAX_ENTROPY_BYTES: usize = 32;

/// Supported mnemonic lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordCount {
    Twelve,
    TwentyFour,
}

impl WordCount {
    /// Maps a word count to its variant.
    ///
    /// # Errors
    /// * `SeedXorError::InvalidWordCount` for anything but 12 or 24.
    pub fn from_words(n: usize) -> Result<Self, SeedXorError> {
        match n {
            12 => Ok(WordCount::Twelve),
            24 => Ok(WordCount::TwentyFour),
            other => Err(SeedXorError::InvalidWordCount(other)),
        }
    }

    /// Maps an entropy size in bytes (16 or 32) to its variant.
    pub fn from_entropy_len(bytes: usize) -> Option<Self> {
        match bytes {
            16 => Some(WordCount::Twelve),
            32 => Some(WordCount::TwentyFour),
            _ => None,
        }
    }

    pub const fn words(self) -> usize {
        match self {
            WordCount::Twelve => 12,
            WordCount::TwentyFour => 24,
        }
    }

    /// ENT: 128 or 256.
    pub const fn entropy_bits(self) -> usize {
        match self {
            WordCount::Twelve => 128,
            WordCount::TwentyFour => 256,
        }
    }

    pub const fn entropy_bytes(self) -> usize {
        self.entropy_bits() / 8
    }

    /// CS = ENT / 32.
    pub const fn checksum_bits(self) -> usize {
        self.entropy_bits() / 32
    }

    /// Entropy bits carried by the last word next to the checksum.
    pub const fn hidden_bits(self) -> usize {
        BITS_PER_WORD - self.checksum_bits()
    }

    /// Bits encoded by every word except the last.
    pub const fn prefix_bits(self) -> usize {
        BITS_PER_WORD * (self.words() - 1)
    }

    /// ENT + CS: 132 or 264.
    pub const fn total_bits(self) -> usize {
        self.entropy_bits() + self.checksum_bits()
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words())
    }
}

/// Raw secret bits of a mnemonic, checksum excluded.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Entropy {
    #[zeroize(skip)]
    word_count: WordCount,
    bytes: [u8; MAX_ENTROPY_BYTES],
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entropy")
            .field("bits", &self.word_count.entropy_bits())
            .field("value", &"***SENSITIVE***")
            .finish()
    }
}

impl Entropy {
    /// All-zero entropy for the given length; the XOR identity.
    pub fn zeroed(word_count: WordCount) -> Self {
        Self { word_count, bytes: [0u8; MAX_ENTROPY_BYTES] }
    }

    /// Wraps 16 or 32 big-endian bytes. Returns `None` for any other length.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let word_count = WordCount::from_entropy_len(bytes.len())?;
        let mut entropy = Self::zeroed(word_count);
        entropy.bytes[..bytes.len()].copy_from_slice(bytes);
        Some(entropy)
    }

    pub fn word_count(&self) -> WordCount {
        self.word_count
    }

    pub fn bit_len(&self) -> usize {
        self.word_count.entropy_bits()
    }

    /// The used bytes, most significant first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.word_count.entropy_bytes()]
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        let len = self.word_count.entropy_bytes();
        &mut self.bytes[..len]
    }

    /// Lowercase hex rendering of the entropy.
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }
}
