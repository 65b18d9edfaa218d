//! Rewind - unified CLI.

use anyhow::{Context, Result};
use clap::Parser;
use rewind::{Cli, Command, LoggingConfig, RewindConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = RewindConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play => {
            init_file_logging(config.logging())?;
            rewind::tui::run(config.display())
        }
        Command::Replay { intents, json } => {
            init_stderr_logging(config.logging());
            let output = rewind::run_replay(intents.as_slice(), json)?;
            println!("{}", output);
            Ok(())
        }
    }
}

fn env_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(logging.filter()))
}

/// Logs to a file so the terminal UI is not disturbed.
fn init_file_logging(logging: &LoggingConfig) -> Result<()> {
    let log_file = std::fs::File::create(logging.file()).with_context(|| {
        format!("Failed to create log file {}", logging.file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(logging))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(file = %logging.file().display(), "File logging initialized");
    Ok(())
}

fn init_stderr_logging(logging: &LoggingConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(logging))
        .with_writer(std::io::stderr)
        .try_init();
    debug!("Stderr logging initialized");
}
