//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `chain_resolver` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use chain_resolver::initialization::init_logger_with;
use chain_resolver::{resolve_prompt_with_retry, Config};

/// Resolves an image-generation prompt to the URL of the generated image.
#[derive(Debug, Parser)]
#[command(name = "chain_resolver", version, about)]
struct Cli {
    /// Prompt to submit; multiple words are joined with spaces
    #[arg(required = true)]
    prompt: Vec<String>,

    #[command(flatten)]
    config: Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let prompt = cli.prompt.join(" ");
    let config = cli.config;

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if prompt.trim().is_empty() {
        eprintln!("chain_resolver error: prompt must not be empty");
        process::exit(2);
    }

    match resolve_prompt_with_retry(&prompt, &config).await {
        Ok(image) => {
            println!("{}", image.resource_url);
            Ok(())
        }
        Err(e) => {
            let kind = e.error_type();
            let e = anyhow::Error::new(e)
                .context(format!("Failed to resolve prompt '{}'", prompt.trim()));
            eprintln!("chain_resolver error ({}): {:#}", kind, e);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_words_and_flags() {
        let cli = Cli::try_parse_from([
            "chain_resolver",
            "--max-hops",
            "4",
            "--file-host",
            "files.example",
            "a",
            "red",
            "fox",
        ])
        .unwrap();
        assert_eq!(cli.prompt.join(" "), "a red fox");
        assert_eq!(cli.config.max_hops, 4);
        assert!(cli.config.file_hosts().contains(&"files.example".to_string()));
    }

    #[test]
    fn test_prompt_required() {
        assert!(Cli::try_parse_from(["chain_resolver"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
