//! XOR recombination of pads.
//!
//! The secret entropy is the bitwise XOR of every pad's entropy. XOR is
//! associative and commutative, so pad order never changes the result.
//!
//! # Validation
//! - At least two pads.
//! - Every pad has the word count of the first one.

use crate::core::xor::xor_into;
use crate::core::Entropy;
use crate::error::SeedXorError;
use crate::pad::Pad;

/// Minimum number of pads for a reconstruction.
pub const MIN_PADS: usize = 2;

/// Stateless XOR reducer over pad entropies.
#[derive(Debug, Clone, Copy, Default)]
pub struct XorCombiner;

impl XorCombiner {
    pub fn new() -> Self {
        XorCombiner
    }

    /// XORs the entropy of every pad.
    ///
    /// # Errors
    /// * `InsufficientPads` when fewer than two pads are given.
    /// * `InconsistentPadLength` when word counts differ; reported before
    ///   any combination takes place.
    pub fn combine(&self, pads: &[Pad]) -> Result<Entropy, SeedXorError> {
        if pads.len() < MIN_PADS {
            return Err(SeedXorError::InsufficientPads { required: MIN_PADS, got: pads.len() });
        }

        let word_count = pads[0].word_count();
        if let Some(odd) = pads.iter().find(|p| p.word_count() != word_count) {
            return Err(SeedXorError::InconsistentPadLength {
                expected: word_count.words(),
                got: odd.word_count().words(),
            });
        }

        let combined = combine_entropies(pads.iter().map(Pad::entropy))
            .ok_or(SeedXorError::InsufficientPads { required: MIN_PADS, got: 0 })?;
        log::info!("Combined {} pads of {} words", pads.len(), word_count);
        Ok(combined)
    }
}

/// XOR of raw entropies; `None` for an empty input. All inputs must share a
/// word count.
pub fn combine_entropies<'a, I>(entropies: I) -> Option<Entropy>
where
    I: IntoIterator<Item = &'a Entropy>,
{
    let mut iter = entropies.into_iter();
    let mut acc = iter.next()?.clone();
    for e in iter {
        debug_assert_eq!(e.word_count(), acc.word_count());
        xor_into(acc.as_bytes_mut(), e.as_bytes());
    }
    Some(acc)
}
