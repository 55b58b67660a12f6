//! CLI entry and dispatch.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use gatehouse_core::config::Config;

use crate::logging;

mod commands;

#[derive(Parser)]
#[command(name = "gatehouse")]
#[command(version)]
#[command(about = "Terminal sign-in for your Gatehouse project")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to an alternate config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
pub enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Create a default config file
    Init,
}

/// Parses arguments and dispatches.
///
/// # Errors
/// Returns an error if the selected command fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { command }) => commands::config(&command),
        None => login(cli.config.as_deref()),
    }
}

/// Opens the sign-in screen and reports the outcome.
fn login(config_path: Option<&Path>) -> Result<()> {
    let config = match config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Keep the guard alive for the whole run so buffered logs are flushed.
    let _log_guard = logging::init().context("Failed to initialize logging")?;

    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    let session = rt.block_on(gatehouse_tui::run_login_screen(config))?;
    tracing::info!(signed_in = session.is_some(), "sign-in screen closed");

    // The screen never navigates; this is the session-change observer.
    // Tokens are never printed.
    match session {
        Some(session) => {
            let identity = session
                .user
                .and_then(|user| user.email)
                .unwrap_or_else(|| "your account".to_string());
            println!("Signed in as {identity}");
            if let Some(expires_at) = session.expires_at
                && let Some(when) = chrono::DateTime::from_timestamp(expires_at, 0)
            {
                println!("Session expires at {}", when.to_rfc3339());
            }
        }
        None => println!("Not signed in."),
    }

    Ok(())
}
