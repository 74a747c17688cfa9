//! Session loop: start decisions, move prompts, round reporting.
//!
//! The loop walks three states per the game lifecycle: awaiting the
//! start decision, a round in progress, and round-over reporting, then
//! back to the start decision until the player declines.

use crate::console::Console;
use crate::game::{Coordinate, GameStatus, Outcome, Round};
use crate::input::{self, InputError};
use tracing::{info, instrument, warn};

/// Error that ends a session abnormally.
///
/// Player mistakes re-prompt and never surface here; only the console
/// itself failing (closed stdin, broken pipe) does.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SessionError {
    /// Reading or writing the console failed.
    #[display("console i/o failed: {}", _0)]
    Io(#[error(source)] std::io::Error),
}

/// One console session: rounds replay until the player declines.
///
/// Holds the single [`Round`] for the process lifetime; the board is
/// cleared per round, never reallocated.
#[derive(Debug)]
pub struct Session<C> {
    console: C,
    round: Round,
}

impl<C: Console> Session<C> {
    /// Creates a session over the given console.
    pub fn new(console: C) -> Self {
        Self {
            console,
            round: Round::new(),
        }
    }

    /// Returns the round for inspection.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Runs rounds until the player answers `n` to the start prompt.
    ///
    /// Any other answer than `y` or `n` re-prompts. The match is exact,
    /// as the original prompt was: `" y"` is not an answer.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            self.console
                .write_line("Do you want to play a game of TicTacToe? [y/n]")?;
            let answer = self.console.read_line()?;
            match answer.as_str() {
                "y" => {
                    info!("Starting round");
                    self.round.reset();
                    self.play_round()?;
                }
                "n" => {
                    info!("Session closed by player");
                    return Ok(());
                }
                other => {
                    warn!(input = other, "Unrecognized start answer");
                    self.console.write_line("Please enter 'y' or 'n'.")?;
                }
            }
        }
    }

    /// Plays one round to its outcome and reports it.
    #[instrument(skip(self))]
    fn play_round(&mut self) -> Result<(), SessionError> {
        let outcome = loop {
            self.print_board()?;
            self.console
                .write_line(&format!("Turn of player '{}': ", self.round.to_move()))?;
            let coordinate = self.prompt_move()?;
            match self.round.play(coordinate) {
                Ok(GameStatus::InProgress) => {}
                Ok(GameStatus::Over(outcome)) => break outcome,
                Err(error) => {
                    // parse_move vets occupancy before the engine runs;
                    // a refusal here re-prompts like any invalid input.
                    warn!(%error, "Engine refused a vetted move");
                    self.console
                        .write_line(&InputError::OccupiedOrInvalidCell.to_string())?;
                }
            }
        };

        self.print_board()?;
        match outcome {
            Outcome::Draw => self.console.write_line("The game has ended in a draw!")?,
            Outcome::Winner(mark) => self
                .console
                .write_line(&format!("Player '{}' has won!", mark))?,
        }
        for _ in 0..3 {
            self.console.write_line("")?;
        }

        Ok(())
    }

    /// Prompts for column and row lines until they parse to a legal move.
    ///
    /// Unbounded: only a valid move (or console failure) gets out. The
    /// board is read, never written.
    fn prompt_move(&mut self) -> Result<Coordinate, SessionError> {
        loop {
            self.console
                .write_line("What column do you want to mark? [0,1,2]")?;
            let raw_col = self.console.read_line()?;
            self.console
                .write_line("What row do you want to mark? [0,1,2]")?;
            let raw_row = self.console.read_line()?;

            match input::parse_move(&raw_col, &raw_row, self.round.board()) {
                Ok(coordinate) => return Ok(coordinate),
                Err(error) => {
                    warn!(%error, %raw_col, %raw_row, "Rejected move input");
                    self.console.write_line(&error.to_string())?;
                }
            }
        }
    }

    fn print_board(&mut self) -> Result<(), SessionError> {
        for line in self.round.board().display_lines() {
            self.console.write_line(&line)?;
        }
        Ok(())
    }
}
