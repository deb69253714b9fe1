//! Pad decoding.
//!
//! A pad is one XOR share of the secret, written down as an ordinary
//! checksummed BIP-39 mnemonic. This module turns user-supplied words into a
//! `Pad` carrying the full entropy.
//!
//! # Components
//! - `validate`: word count and word list membership checks.
//! - `recover`: entropy recovery, including the bits hidden in the last word.
//!
//! # Security
//! - `Pad` zeroizes its words and entropy on drop.
//! - `Debug` never prints words or entropy.

pub mod recover;
pub mod validate;

use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::{Entropy, WordCount};
use crate::mnemonic::Mnemonic;

pub use recover::{PadRecoverer, RecoveryStrategy};
pub use validate::{validate, Validation};

/// A validated mnemonic together with its decoded entropy.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Pad {
    mnemonic: Mnemonic,
    entropy: Entropy,
}

impl fmt::Debug for Pad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pad")
            .field("words", &self.mnemonic.len())
            .field("value", &"***SENSITIVE***")
            .finish()
    }
}

impl Pad {
    pub(crate) fn new(mnemonic: Mnemonic, entropy: Entropy) -> Self {
        Self { mnemonic, entropy }
    }

    pub fn mnemonic(&self) -> &Mnemonic {
        &self.mnemonic
    }

    /// Entropy without checksum: 128 or 256 bits.
    pub fn entropy(&self) -> &Entropy {
        &self.entropy
    }

    pub fn word_count(&self) -> WordCount {
        self.entropy.word_count()
    }
}
