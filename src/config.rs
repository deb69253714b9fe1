//! Configuration management for seedxor.
//!
//! Defines the structure for user-configurable settings.

extern crate alloc;
use alloc::string::String;

use crate::combine::MIN_PADS;
use crate::pad::RecoveryStrategy;

/// Main configuration structure.
///
/// Populated by the host application (or `from_env`) and passed to
/// `PadCollector` and the interactive front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedXorConfig {
    /// Pads required before a result is produced. Never below 2.
    pub min_pads: usize,

    /// How the entropy hidden in each pad's last word is recovered.
    pub strategy: RecoveryStrategy,

    /// Word list file to load instead of the embedded English list.
    pub word_list_path: Option<String>,

    /// Input that ends pad collection in the interactive front end.
    pub stop_token: String,

    /// Also print the reconstructed entropy as hex.
    pub show_entropy: bool,
}

impl Default for SeedXorConfig {
    fn default() -> Self {
        Self {
            min_pads: MIN_PADS,
            strategy: RecoveryStrategy::Search,
            word_list_path: None,
            stop_token: String::from("0"),
            show_entropy: false,
        }
    }
}

impl SeedXorConfig {
    /// Effective pad minimum.
    pub fn min_pads(&self) -> usize {
        self.min_pads.max(MIN_PADS)
    }

    /// Reads overrides from `SEEDXOR_WORDLIST`, `SEEDXOR_MIN_PADS`,
    /// `SEEDXOR_STRATEGY` and `SEEDXOR_SHOW_ENTROPY`. Unparseable values keep
    /// their defaults.
    #[cfg(feature = "std")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[cfg(feature = "std")]
    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(path) = lookup("SEEDXOR_WORDLIST").filter(|p| !p.is_empty()) {
            config.word_list_path = Some(path);
        }
        if let Some(n) = lookup("SEEDXOR_MIN_PADS").and_then(|v| v.trim().parse().ok()) {
            config.min_pads = n;
        }
        match lookup("SEEDXOR_STRATEGY").as_deref().map(str::trim) {
            Some("direct") => config.strategy = RecoveryStrategy::Direct,
            Some("search") | None => {}
            Some(other) => log::warn!("Unknown SEEDXOR_STRATEGY '{}', using search", other),
        }
        if let Some(v) = lookup("SEEDXOR_SHOW_ENTROPY") {
            config.show_entropy = matches!(v.trim(), "1" | "true" | "yes");
        }
        config
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let c = SeedXorConfig::from_lookup(lookup(&[]));
        assert_eq!(c, SeedXorConfig::default());
        assert_eq!(c.min_pads(), 2);
        assert_eq!(c.stop_token, "0");
    }

    #[test]
    fn test_overrides() {
        let c = SeedXorConfig::from_lookup(lookup(&[
            ("SEEDXOR_WORDLIST", "/tmp/english.txt"),
            ("SEEDXOR_MIN_PADS", "3"),
            ("SEEDXOR_STRATEGY", "direct"),
            ("SEEDXOR_SHOW_ENTROPY", "true"),
        ]));
        assert_eq!(c.word_list_path.as_deref(), Some("/tmp/english.txt"));
        assert_eq!(c.min_pads(), 3);
        assert_eq!(c.strategy, RecoveryStrategy::Direct);
        assert!(c.show_entropy);
    }

    #[test]
    fn test_min_pads_clamped() {
        let c = SeedXorConfig::from_lookup(lookup(&[("SEEDXOR_MIN_PADS", "1")]));
        assert_eq!(c.min_pads, 1);
        assert_eq!(c.min_pads(), 2);
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let c = SeedXorConfig::from_lookup(lookup(&[
            ("SEEDXOR_MIN_PADS", "many"),
            ("SEEDXOR_STRATEGY", "guess"),
        ]));
        assert_eq!(c.min_pads, 2);
        assert_eq!(c.strategy, RecoveryStrategy::Search);
    }
}
