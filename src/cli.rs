//! Command-line interface for the tic-tac-toe console game.

use clap::Parser;

/// Two-player tic-tac-toe sharing one console
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Tracing filter used when RUST_LOG is unset (logs go to stderr)
    #[arg(long, default_value = "warn")]
    pub log_filter: String,
}
