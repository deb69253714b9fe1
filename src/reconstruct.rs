//! Final mnemonic reconstruction.
//!
//! Appends a freshly computed checksum to the combined entropy and maps each
//! 11-bit group of `ENT || CS` to a word. The checksum is recomputed here
//! because the combined entropy almost never shares a checksum with any pad.

use crate::codec;
use crate::core::bits::BitWriter;
use crate::core::Entropy;
use crate::mnemonic::Mnemonic;
use crate::wordlist::WordList;

/// Re-encodes entropy as a mnemonic.
#[derive(Debug, Clone, Copy)]
pub struct SeedReconstructor<'a> {
    list: &'a WordList,
}

impl<'a> SeedReconstructor<'a> {
    pub fn new(list: &'a WordList) -> Self {
        Self { list }
    }

    /// Encodes `combined` into 12 or 24 words.
    pub fn finalize(&self, combined: &Entropy) -> Mnemonic {
        let word_count = combined.word_count();
        let cs = codec::checksum(combined);

        let mut full = BitWriter::new();
        full.push_bytes(combined.as_bytes());
        full.push(u16::from(cs), word_count.checksum_bits());
        debug_assert_eq!(full.len(), word_count.total_bits());

        let mnemonic = codec::bits_to_mnemonic(&full, self.list);
        log::info!("Reconstructed {}-word mnemonic", mnemonic.len());
        mnemonic
    }
}
