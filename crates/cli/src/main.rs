//! Mini Santa CLI - Command-line interface for Mini Santa gift exchanges.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute API commands via the shared client library.
//! - Print replies as pretty JSON on stdout; notices go to stderr.
//!
//! Does NOT handle:
//! - Session lifecycle or REST API implementation (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Without an explicit session path the platform data directory is used.

mod args;
mod commands;
mod dispatch;
mod error;
mod terminal;

use std::time::Duration;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use santa_config::{Config, ConfigLoader, default_session_path};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let exit_code = tokio::select! {
        result = run_command(cli.command, config) => match result {
            Ok(()) => ExitCode::Success,
            Err(e) => {
                eprintln!("{:#}", e);
                e.exit_code()
            }
        },
        _ = tokio::signal::ctrl_c() => {
            eprintln!("Interrupted");
            ExitCode::Interrupted
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("santa_client=debug,santa_cli=debug,warn")
        } else {
            EnvFilter::new("error")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new()
        .from_env()
        .context("Failed to load configuration from environment")?;

    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout_secs));
    }
    // Blank values fall back to the default location
    if let Some(ref path) = cli.session_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_session_path(path.clone());
    }

    let mut config = loader.build().context("Failed to build configuration")?;
    if config.session_path.is_none() {
        config.session_path = Some(default_session_path()?);
    }
    Ok(config)
}
