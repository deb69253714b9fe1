#![forbid(unsafe_code)]
// BIP-39 checksum: the leading ENT/32 bits of SHA-256(entropy bytes).
// The width always comes from a `WordCount`, so it is 4 or 8.

use sha2::{Digest, Sha256};

use super::{Entropy, WordCount};

/// Leading `word_count.checksum_bits()` bits of SHA-256(`entropy`),
/// right-aligned.
pub fn checksum_bits(entropy: &[u8], word_count: WordCount) -> u8 {
    let hash = Sha256::digest(entropy);
    hash[0] >> (8 - word_count.checksum_bits())
}

/// Checksum for `entropy`, sized by its own word count.
pub fn checksum(entropy: &Entropy) -> u8 {
    checksum_bits(entropy.as_bytes(), entropy.word_count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_zero_vectors() {
        // SHA-256(16 x 0x00) = 374708ff...
        assert_eq!(checksum(&Entropy::from_bytes(&[0u8; 16]).unwrap()), 0x3);
        // SHA-256(32 x 0x00) = 66687aad...
        assert_eq!(checksum(&Entropy::from_bytes(&[0u8; 32]).unwrap()), 0x66);
    }

    #[test]
    fn test_width_follows_word_count() {
        let zeros = [0u8; 16];
        assert_eq!(checksum_bits(&zeros, WordCount::Twelve), 0x3);
        assert_eq!(checksum_bits(&zeros, WordCount::TwentyFour), 0x37);
        for byte in 0..=255u8 {
            let data = [byte; 16];
            assert!(checksum_bits(&data, WordCount::Twelve) < 16);
        }
    }
}
