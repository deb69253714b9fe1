//! Entropy recovery for a single pad.
//!
//! The first N-1 words decode directly to the leading 121 (12 words) or 253
//! (24 words) entropy bits. The last word packs the remaining 7 or 3 entropy
//! bits together with the 4 or 8 checksum bits, so the suffix is only accepted
//! once the checksum it implies reproduces that last word.
//!
//! Two strategies are offered:
//! - `Search`: try every suffix in ascending numeric order and keep the first
//!   one whose `suffix || checksum` selects the supplied last word.
//! - `Direct`: slice the suffix out of the last word's index and compare the
//!   checksum explicitly.
//!
//! Both accept exactly the same mnemonics and both fail with
//! `ChecksumRecoveryFailed` on a mismatch.

use crate::codec;
use crate::core::bits::BitWriter;
use crate::core::{Entropy, WordCount};
use crate::error::SeedXorError;
use crate::mnemonic::Mnemonic;
use crate::wordlist::WordList;

use super::validate::validate;
use super::Pad;

/// How the hidden entropy suffix of the last word is recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryStrategy {
    /// Bounded search over all `2^hidden_bits` suffixes.
    #[default]
    Search,
    /// Bit-slice the suffix, then verify the checksum.
    Direct,
}

/// Decodes mnemonics into pads against a shared word list.
#[derive(Debug, Clone, Copy)]
pub struct PadRecoverer<'a> {
    list: &'a WordList,
    strategy: RecoveryStrategy,
}

impl<'a> PadRecoverer<'a> {
    pub fn new(list: &'a WordList) -> Self {
        Self::with_strategy(list, RecoveryStrategy::default())
    }

    pub fn with_strategy(list: &'a WordList, strategy: RecoveryStrategy) -> Self {
        Self { list, strategy }
    }

    pub fn strategy(&self) -> RecoveryStrategy {
        self.strategy
    }

    /// Parses and recovers a whitespace-separated phrase.
    pub fn recover_phrase(&self, phrase: &str) -> Result<Pad, SeedXorError> {
        self.recover(&Mnemonic::parse(phrase))
    }

    /// Validates `mnemonic` and recovers its full entropy.
    ///
    /// # Errors
    /// * `InvalidWords` / `InvalidWordCount` when validation fails.
    /// * `ChecksumRecoveryFailed` when the last word does not match the
    ///   checksum of any candidate entropy.
    pub fn recover(&self, mnemonic: &Mnemonic) -> Result<Pad, SeedXorError> {
        let word_count = validate(mnemonic, self.list).into_result()?;
        let (last, head) = mnemonic
            .split_last()
            .ok_or(SeedXorError::InvalidWordCount(0))?;

        let prefix = codec::prefix_bits(head, self.list)?;
        debug_assert_eq!(prefix.len(), word_count.prefix_bits());

        let suffix = match self.strategy {
            RecoveryStrategy::Search => self.search_suffix(&prefix, last, word_count),
            RecoveryStrategy::Direct => self.direct_suffix(&prefix, last, word_count),
        };
        let suffix = match suffix {
            Some(s) => s,
            None => {
                log::error!("Checksum recovery failed for a {}-word pad", word_count);
                return Err(SeedXorError::ChecksumRecoveryFailed);
            }
        };

        let bits = with_suffix(&prefix, suffix, word_count);
        let mut entropy = Entropy::zeroed(word_count);
        entropy.as_bytes_mut().copy_from_slice(bits.as_bytes());

        log::debug!("Recovered {}-bit pad entropy ({:?})", entropy.bit_len(), self.strategy);
        Ok(Pad::new(mnemonic.clone(), entropy))
    }

    // Lowest suffix first; at most one suffix can select a given last word
    // because the suffix forms the high bits of that word's index.
    fn search_suffix(&self, prefix: &BitWriter, last: &str, wc: WordCount) -> Option<u16> {
        let hidden = wc.hidden_bits();
        let cs_bits = wc.checksum_bits();
        (0..1u16 << hidden).find(|&combo| {
            let candidate = with_suffix(prefix, combo, wc);
            let cs = codec::checksum_bits(candidate.as_bytes(), wc);
            let last_word_bits = (combo << cs_bits) | u16::from(cs);
            self.list.word_at(last_word_bits) == last
        })
    }

    fn direct_suffix(&self, prefix: &BitWriter, last: &str, wc: WordCount) -> Option<u16> {
        let index = self.list.index_of(last)?;
        let cs_bits = wc.checksum_bits();
        let combo = index >> cs_bits;
        let stored = index & ((1u16 << cs_bits) - 1);

        let candidate = with_suffix(prefix, combo, wc);
        let cs = codec::checksum_bits(candidate.as_bytes(), wc);
        (u16::from(cs) == stored).then_some(combo)
    }
}

fn with_suffix(prefix: &BitWriter, suffix: u16, wc: WordCount) -> BitWriter {
    let mut bits = prefix.clone();
    bits.push(suffix, wc.hidden_bits());
    bits
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_12: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    const ZERO_24: &str = "abandon abandon abandon abandon abandon abandon abandon abandon \
                           abandon abandon abandon abandon abandon abandon abandon abandon \
                           abandon abandon abandon abandon abandon abandon abandon art";

    // (entropy hex, mnemonic) reference vectors.
    const VECTORS: &[(&str, &str)] = &[
        ("00000000000000000000000000000000", ZERO_12),
        (
            "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
            "legal winner thank year wave sausage worth useful legal winner thank yellow",
        ),
        (
            "80808080808080808080808080808080",
            "letter advice cage absurd amount doctor acoustic avoid letter advice cage above",
        ),
        (
            "ffffffffffffffffffffffffffffffff",
            "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
        ),
        (
            "9e885d952ad362caeb4efe34a8e91bd2",
            "ozone drill grab fiber curtain grace pudding thank cruise elder eight picnic",
        ),
        ("0000000000000000000000000000000000000000000000000000000000000000", ZERO_24),
        (
            "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
            "legal winner thank year wave sausage worth useful legal winner thank year \
             wave sausage worth useful legal winner thank year wave sausage worth title",
        ),
        (
            "8080808080808080808080808080808080808080808080808080808080808080",
            "letter advice cage absurd amount doctor acoustic avoid letter advice cage absurd \
             amount doctor acoustic avoid letter advice cage absurd amount doctor acoustic bless",
        ),
        (
            "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo vote",
        ),
    ];

    #[test]
    fn test_reference_vectors_both_strategies() {
        let list = WordList::english().unwrap();
        for strategy in [RecoveryStrategy::Search, RecoveryStrategy::Direct] {
            let rec = PadRecoverer::with_strategy(&list, strategy);
            for (hex_entropy, phrase) in VECTORS {
                let pad = rec.recover_phrase(phrase).unwrap();
                assert_eq!(pad.entropy().to_hex(), *hex_entropy, "{:?}: {}", strategy, phrase);
                assert_eq!(pad.entropy().bit_len(), hex_entropy.len() * 4);
            }
        }
    }

    #[test]
    fn test_swapped_last_word_fails() {
        let list = WordList::english().unwrap();
        // "about" (3) -> "above" (4): same suffix, wrong checksum nibble
        let bad = ZERO_12.replace(" about", " above");
        for strategy in [RecoveryStrategy::Search, RecoveryStrategy::Direct] {
            let rec = PadRecoverer::with_strategy(&list, strategy);
            assert_eq!(
                rec.recover_phrase(&bad).unwrap_err(),
                SeedXorError::ChecksumRecoveryFailed
            );
        }
    }

    #[test]
    fn test_swapped_last_word_fails_24() {
        let list = WordList::english().unwrap();
        // "vote" -> "voyage": adjacent index, wrong checksum byte
        let phrase = VECTORS[8].1.replace(" vote", " voyage");
        let err = PadRecoverer::new(&list).recover_phrase(&phrase).unwrap_err();
        assert_eq!(err, SeedXorError::ChecksumRecoveryFailed);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_strategies_agree_on_every_last_word() {
        let list = WordList::english().unwrap();
        let search = PadRecoverer::with_strategy(&list, RecoveryStrategy::Search);
        let direct = PadRecoverer::with_strategy(&list, RecoveryStrategy::Direct);
        let head = "legal winner thank year wave sausage worth useful legal winner thank";
        let mut accepted = 0;
        for i in 0..2048u16 {
            let phrase = alloc::format!("{} {}", head, list.word_at(i));
            let a = search.recover_phrase(&phrase);
            let b = direct.recover_phrase(&phrase);
            assert_eq!(a.is_ok(), b.is_ok());
            if let (Ok(a), Ok(b)) = (a, b) {
                assert_eq!(a.entropy(), b.entropy());
                accepted += 1;
            }
        }
        // exactly one checksum per suffix
        assert_eq!(accepted, 128);
    }

    #[test]
    fn test_validation_errors_surface() {
        let list = WordList::english().unwrap();
        let rec = PadRecoverer::new(&list);
        assert_eq!(
            rec.recover_phrase("abandon about").unwrap_err(),
            SeedXorError::InvalidWordCount(2)
        );
        assert_eq!(
            rec.recover_phrase(&ZERO_12.replace("about", "bitcoin")).unwrap_err(),
            SeedXorError::InvalidWords(alloc::vec![alloc::string::String::from("bitcoin")])
        );
        // every word listed, but the last one breaks the checksum
        assert_eq!(
            rec.recover_phrase(&ZERO_12.replace("about", "satoshi")).unwrap_err(),
            SeedXorError::ChecksumRecoveryFailed
        );
    }

    #[test]
    fn test_pad_keeps_original_words() {
        let list = WordList::english().unwrap();
        let pad = PadRecoverer::new(&list).recover_phrase(&ZERO_12.to_uppercase()).unwrap();
        assert_eq!(alloc::format!("{}", pad.mnemonic()), ZERO_12);
        assert_eq!(pad.word_count(), WordCount::Twelve);
    }
}
