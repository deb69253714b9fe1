//! Interactive front end.
//!
//! Line-based prompt loop over any `BufRead`/`Write` pair. Each line is one
//! pad; the configured stop token ends collection. Rejected pads are reported
//! and re-requested, nothing else about the session changes.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::config::SeedXorConfig;
use crate::error::SeedXorError;
use crate::session::{PadCollector, Reconstruction};
use crate::wordlist::WordList;

/// Errors that end an interactive session.
#[derive(Debug)]
pub enum CliError {
    Io(io::Error),
    SeedXor(SeedXorError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::SeedXor(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::SeedXor(e) => Some(e),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<SeedXorError> for CliError {
    fn from(e: SeedXorError) -> Self {
        CliError::SeedXor(e)
    }
}

/// Loads the configured word list, falling back to the embedded English one.
pub fn load_word_list(config: &SeedXorConfig) -> Result<WordList, SeedXorError> {
    let list = match &config.word_list_path {
        Some(path) => {
            log::info!("Loading word list from {}", path);
            WordList::from_file(path)?
        }
        None => WordList::english()?,
    };
    Ok(list)
}

/// Runs the prompt loop until enough pads are collected and the stop token
/// is entered.
///
/// Returns `Ok(None)` when input ends before a result is produced.
pub fn run<R, W>(
    list: &WordList,
    config: &SeedXorConfig,
    mut input: R,
    mut output: W,
) -> Result<Option<Reconstruction>, CliError>
where
    R: BufRead,
    W: Write,
{
    let mut collector = PadCollector::new(list, config);
    let stop_token = config.stop_token.trim().to_lowercase();
    writeln!(output, "\n\nSEED XOR CALCULATOR\n")?;

    let mut line = String::new();
    loop {
        write!(
            output,
            "\nYou added already {} pads. Insert all the words of another pad or {} to stop: ",
            collector.len(),
            config.stop_token
        )?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            log::warn!("Input closed after {} pads, no seed calculated", collector.len());
            writeln!(output)?;
            return Ok(None);
        }

        let entry = line.trim().to_lowercase();
        if entry == stop_token {
            if collector.is_ready() {
                break;
            }
            writeln!(
                output,
                "\n!! ERROR: At least {} pads are required. You added {} pads",
                collector.min_pads(),
                collector.len()
            )?;
            continue;
        }

        match collector.add_phrase(&entry) {
            Ok(_) => {}
            Err(SeedXorError::InvalidWords(words)) => {
                for word in words {
                    writeln!(output, "\n!! ERROR: word {} not in bip39 words list", word)?;
                }
            }
            Err(SeedXorError::InvalidWordCount(n)) => {
                writeln!(output, "\n!! ERROR: {} words inserted", n)?;
            }
            Err(SeedXorError::InconsistentPadLength { expected, .. }) => {
                writeln!(
                    output,
                    "\n!! ERROR: first pad added has {} words. All the following ones should have the same amount of words",
                    expected
                )?;
            }
            Err(SeedXorError::ChecksumRecoveryFailed) => {
                writeln!(output, "\n!! ERROR: checksum of this pad is invalid")?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    writeln!(output, "\nPads completed! I will calculate the XOR seed...")?;
    writeln!(output, "\nCalculating... You inserted these pads:")?;
    for (i, pad) in collector.pads().iter().enumerate() {
        writeln!(output, "\n{}) {}", i + 1, pad.mnemonic())?;
    }

    let result = collector.finalize()?;
    writeln!(output, "\nXOR SEED CALCULATED:\n\n{}\n", result.mnemonic)?;
    if config.show_entropy {
        writeln!(output, "Entropy: {}\n", result.entropy.to_hex())?;
    }
    output.flush()?;
    Ok(Some(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const LEGAL_12: &str = "legal winner thank year wave sausage worth useful legal winner thank yellow";
    const LETTER_12: &str = "letter advice cage absurd amount doctor acoustic avoid letter advice cage above";
    const ZOO_24: &str = "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo vote";

    fn session(config: &SeedXorConfig, lines: &[&str]) -> (Option<Reconstruction>, String) {
        let list = WordList::english().unwrap();
        let input = Cursor::new(lines.join("\n"));
        let mut out = Vec::new();
        let result = run(&list, config, input, &mut out).unwrap();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_two_pads_then_stop() {
        let (result, out) = session(&SeedXorConfig::default(), &[LEGAL_12, LETTER_12, "0"]);
        let result = result.unwrap();
        assert_eq!(result.mnemonic.to_string(), "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong");
        assert!(out.contains("SEED XOR CALCULATOR"));
        assert!(out.contains("You added already 2 pads"));
        assert!(out.contains(&format!("1) {}", LEGAL_12)));
        assert!(out.contains(&format!("2) {}", LETTER_12)));
        assert!(out.contains("XOR SEED CALCULATED:\n\nzoo zoo"));
        assert!(!out.contains("Entropy:"));
    }

    #[test]
    fn test_errors_reprompt() {
        let bad_checksum = LEGAL_12.replace("yellow", "yard");
        let typo = LEGAL_12.replace("winner", "winer");
        let (result, out) = session(
            &SeedXorConfig::default(),
            &["0", &typo, "legal winner", LEGAL_12, ZOO_24, &bad_checksum, "  LETTER ADVICE CAGE ABSURD AMOUNT DOCTOR ACOUSTIC AVOID LETTER ADVICE CAGE ABOVE ", "0"],
        );
        assert!(result.is_some());
        assert!(out.contains("!! ERROR: At least 2 pads are required. You added 0 pads"));
        assert!(out.contains("!! ERROR: word winer not in bip39 words list"));
        assert!(out.contains("!! ERROR: 2 words inserted"));
        assert!(out.contains("!! ERROR: first pad added has 12 words."));
        assert!(out.contains("!! ERROR: checksum of this pad is invalid"));
    }

    #[test]
    fn test_input_closed_without_result() {
        let (result, out) = session(&SeedXorConfig::default(), &[LEGAL_12]);
        assert!(result.is_none());
        assert!(!out.contains("XOR SEED CALCULATED"));
    }

    #[test]
    fn test_custom_stop_token_and_entropy_output() {
        let config = SeedXorConfig {
            stop_token: String::from("done"),
            show_entropy: true,
            ..SeedXorConfig::default()
        };
        let (result, out) = session(&config, &[LEGAL_12, LETTER_12, "DONE"]);
        assert!(result.is_some());
        assert!(out.contains("or done to stop"));
        assert!(out.contains(&format!("Entropy: {}", "ff".repeat(16))));
    }

    #[test]
    fn test_stop_token_matches_regardless_of_case() {
        let config = SeedXorConfig {
            stop_token: String::from("DONE"),
            ..SeedXorConfig::default()
        };
        let (result, out) = session(&config, &[LEGAL_12, LETTER_12, "done"]);
        assert!(result.is_some());
        assert!(out.contains("or DONE to stop"));
        assert!(out.contains("XOR SEED CALCULATED"));
    }

    #[test]
    fn test_load_default_word_list() {
        let list = load_word_list(&SeedXorConfig::default()).unwrap();
        assert_eq!(list.len(), 2048);
    }

    #[test]
    fn test_load_missing_word_list_file() {
        let config = SeedXorConfig {
            word_list_path: Some(String::from("/nonexistent/seedxor/english.txt")),
            ..SeedXorConfig::default()
        };
        let err = load_word_list(&config).unwrap_err();
        assert!(matches!(err, SeedXorError::WordList(_)));
        assert!(!err.is_recoverable());
    }
}
