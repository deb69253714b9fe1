//! Pad collection session.
//!
//! Accumulates pads one at a time, enforcing the cross-pad rules at the point
//! each pad is offered: the word count of the first accepted pad fixes the
//! word count of every later one. Rejected pads leave the session unchanged,
//! so the caller can simply ask for that pad again.

extern crate alloc;
use alloc::vec::Vec;
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::combine::XorCombiner;
use crate::config::SeedXorConfig;
use crate::core::{Entropy, WordCount};
use crate::error::SeedXorError;
use crate::mnemonic::Mnemonic;
use crate::pad::{Pad, PadRecoverer};
use crate::reconstruct::SeedReconstructor;
use crate::wordlist::WordList;

/// Result of a reconstruction: the combined entropy and its mnemonic.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Reconstruction {
    pub entropy: Entropy,
    pub mnemonic: Mnemonic,
}

impl fmt::Debug for Reconstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reconstruction")
            .field("words", &self.mnemonic.len())
            .field("value", &"***SENSITIVE***")
            .finish()
    }
}

/// Collects pads and produces the reconstructed mnemonic.
pub struct PadCollector<'a> {
    recoverer: PadRecoverer<'a>,
    reconstructor: SeedReconstructor<'a>,
    min_pads: usize,
    pads: Vec<Pad>,
}

impl<'a> PadCollector<'a> {
    pub fn new(list: &'a WordList, config: &SeedXorConfig) -> Self {
        Self {
            recoverer: PadRecoverer::with_strategy(list, config.strategy),
            reconstructor: SeedReconstructor::new(list),
            min_pads: config.min_pads(),
            pads: Vec::new(),
        }
    }

    /// Number of accepted pads.
    pub fn len(&self) -> usize {
        self.pads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pads.is_empty()
    }

    pub fn min_pads(&self) -> usize {
        self.min_pads
    }

    pub fn pads(&self) -> &[Pad] {
        &self.pads
    }

    /// Word count fixed by the first accepted pad.
    pub fn word_count(&self) -> Option<WordCount> {
        self.pads.first().map(Pad::word_count)
    }

    /// Whether enough pads have been accepted to finalize.
    pub fn is_ready(&self) -> bool {
        self.pads.len() >= self.min_pads
    }

    /// Parses, recovers and accepts one pad.
    ///
    /// # Errors
    /// Validation and checksum errors from `PadRecoverer`, or
    /// `InconsistentPadLength` when the word count differs from the first pad.
    pub fn add_phrase(&mut self, phrase: &str) -> Result<&Pad, SeedXorError> {
        let pad = self.recoverer.recover_phrase(phrase).map_err(|e| {
            log::warn!("Pad {} rejected: {}", self.pads.len() + 1, e);
            e
        })?;
        self.add_pad(pad)
    }

    /// Accepts an already recovered pad.
    pub fn add_pad(&mut self, pad: Pad) -> Result<&Pad, SeedXorError> {
        if let Some(expected) = self.word_count() {
            if pad.word_count() != expected {
                log::warn!(
                    "Pad {} rejected: {} words, first pad has {}",
                    self.pads.len() + 1,
                    pad.word_count(),
                    expected
                );
                return Err(SeedXorError::InconsistentPadLength {
                    expected: expected.words(),
                    got: pad.word_count().words(),
                });
            }
        }
        self.pads.push(pad);
        log::info!("Pad {} accepted", self.pads.len());
        Ok(&self.pads[self.pads.len() - 1])
    }

    /// Combines every accepted pad and re-encodes the result.
    ///
    /// # Errors
    /// * `InsufficientPads` when fewer than `min_pads` pads were accepted;
    ///   no combination is attempted.
    pub fn finalize(&self) -> Result<Reconstruction, SeedXorError> {
        if !self.is_ready() {
            return Err(SeedXorError::InsufficientPads {
                required: self.min_pads,
                got: self.pads.len(),
            });
        }
        let entropy = XorCombiner::new().combine(&self.pads)?;
        let mnemonic = self.reconstructor.finalize(&entropy);
        Ok(Reconstruction { entropy, mnemonic })
    }

    /// Drops every accepted pad.
    pub fn clear(&mut self) {
        self.pads.clear();
    }
}
