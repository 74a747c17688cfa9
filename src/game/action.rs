//! First-class move events for tic-tac-toe.
//!
//! A move is the player's intent, recorded as data. Keeping it as a
//! value lets the round log it, store it in history, and report it in
//! errors without re-deriving anything from the board.

use super::coordinate::Coordinate;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// A move: a mark placed at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where it lands.
    pub coordinate: Coordinate,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, coordinate: Coordinate) -> Self {
        Self { mark, coordinate }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' -> {}", self.mark, self.coordinate)
    }
}

/// Error that can occur when applying a move to a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the coordinate is already marked.
    #[display("Cell {} is already marked", _0)]
    CellOccupied(Coordinate),

    /// The round is already over.
    #[display("Round is already over")]
    RoundOver,
}

impl std::error::Error for MoveError {}
