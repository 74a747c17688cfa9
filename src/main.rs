//! Tic-tac-toe - console entry point
//!
//! Two players share the terminal, alternating 'o' and 'x' through a
//! line-oriented prompt loop.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tictactoe::{Session, StdConsole};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the game prompts.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting tic-tac-toe session");

    let mut session = Session::new(StdConsole::new());
    session.run()?;

    info!("Session ended");
    Ok(())
}
