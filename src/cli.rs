//! Command-line interface for tictactui.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal, with move history and time travel.
#[derive(Parser, Debug)]
#[command(name = "tictactui")]
#[command(about = "Terminal tic-tac-toe with move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File to write logs to; the terminal itself is occupied by the game.
    #[arg(long, default_value = "tictactui.log")]
    pub log_file: PathBuf,

    /// Disable logging entirely.
    #[arg(long)]
    pub no_log: bool,
}
