//! Entry point: CLI parsing, logging setup, and the TUI.

use anyhow::{Context, Result};
use clap::Parser;
use neon_tictactoe::cli::{Cli, Command};
use neon_tictactoe::store::{JsonFileStore, StateStore};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so tracing output doesn't fight the TUI for the
    // terminal.
    let log_file =
        std::fs::File::create("neon_tictactoe.log").context("Failed to create log file")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    match cli.command {
        Some(Command::Reset) => {
            let mut store = JsonFileStore::open(&cli.save);
            store.clear();
            info!(path = %cli.save.display(), "Saved state erased");
            println!("Saved state erased: {}", cli.save.display());
            Ok(())
        }
        None => {
            let store = JsonFileStore::open(&cli.save);
            neon_tictactoe::tui::run(store, cli.skip_welcome).await
        }
    }
}
