#![cfg_attr(not(feature = "std"), no_std)]

//! Reconstruct a BIP-39 mnemonic that was split into XOR pads.
//!
//! Each pad is itself a valid, checksummed mnemonic. Recovering the secret
//! means decoding every pad's entropy (including the bits hidden in its last
//! word), XORing the entropies together and re-encoding the result with a
//! freshly computed checksum.
//!
//! ```no_run
//! use seedxor::{reconstruct, WordList};
//!
//! let list = WordList::english()?;
//! let seed = reconstruct(&list, &[
//!     "legal winner thank year wave sausage worth useful legal winner thank yellow",
//!     "letter advice cage absurd amount doctor acoustic avoid letter advice cage above",
//! ])?;
//! assert_eq!(seed.to_string(), "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong");
//! # Ok::<(), seedxor::SeedXorError>(())
//! ```

extern crate alloc;

pub mod codec;
pub mod combine;
pub mod config;
pub mod core;
pub mod error;
pub mod mnemonic;
pub mod pad;
pub mod reconstruct;
pub mod session;
pub mod wordlist;

#[cfg(feature = "std")]
pub mod cli;

pub use crate::combine::XorCombiner;
pub use crate::config::SeedXorConfig;
pub use crate::core::{Entropy, WordCount};
pub use crate::error::SeedXorError;
pub use crate::mnemonic::Mnemonic;
pub use crate::pad::{Pad, PadRecoverer, RecoveryStrategy, Validation};
pub use crate::reconstruct::SeedReconstructor;
pub use crate::session::{PadCollector, Reconstruction};
pub use crate::wordlist::{WordList, WordListError};

/// Recovers every phrase, XORs the pads and returns the reconstructed mnemonic.
pub fn reconstruct(list: &WordList, phrases: &[&str]) -> Result<Mnemonic, SeedXorError> {
    let mut collector = PadCollector::new(list, &SeedXorConfig::default());
    for phrase in phrases {
        collector.add_phrase(phrase)?;
    }
    let result = collector.finalize()?;
    Ok(result.mnemonic.clone())
}
