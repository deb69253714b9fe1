use std::io;
use std::process::ExitCode;

use seedxor::cli;
use seedxor::config::SeedXorConfig;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = SeedXorConfig::from_env();
    let list = match cli::load_word_list(&config) {
        Ok(list) => list,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            eprintln!("!! FATAL: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    match cli::run(&list, &config, stdin.lock(), io::stdout()) {
        Ok(Some(_)) => ExitCode::SUCCESS,
        Ok(None) => ExitCode::from(2),
        Err(e) => {
            log::error!("Session aborted: {}", e);
            eprintln!("!! FATAL: {}", e);
            ExitCode::FAILURE
        }
    }
}
