//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Terminal tic-tac-toe with themes, undo, and a random computer opponent.
#[derive(Parser, Debug)]
#[command(name = "neon_tictactoe")]
#[command(about = "Terminal tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path of the save file.
    #[arg(long, default_value = "neon_tictactoe.json")]
    pub save: PathBuf,

    /// Skip the welcome screen and go straight to the board.
    #[arg(long)]
    pub skip_welcome: bool,

    /// Subcommand to run; plays the game when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Erase the save file and exit.
    Reset,
}
