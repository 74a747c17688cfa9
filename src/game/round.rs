//! Round engine: board, turn alternation, and rule evaluation.

use super::action::{Move, MoveError};
use super::coordinate::Coordinate;
use super::rules;
use super::types::{Board, Cell, GameStatus, Mark, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One round of tic-tac-toe, from empty board to win or draw.
///
/// Owns the board, the mark to move, the round status, and the moves
/// played so far. A session keeps one value alive for its whole
/// lifetime and calls [`Round::reset`] per round instead of allocating
/// a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    board: Board,
    to_move: Mark,
    status: GameStatus,
    history: Vec<Move>,
}

impl Round {
    /// Creates a round with an empty board, 'o' to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::default(),
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Clears the board and restores the opening mark for a fresh round.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.to_move = Mark::default();
        self.status = GameStatus::InProgress;
        self.history.clear();
        debug!("Round reset");
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move.
    ///
    /// After a terminal move this still names the mover, so round-over
    /// reporting can use it.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the round status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves played so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current mark at the coordinate and evaluates the rules.
    ///
    /// The winner check runs for the mover first, then the draw check;
    /// on either, the round ends and the mover identity stays in place.
    /// Otherwise the turn flips to the opponent.
    ///
    /// # Errors
    ///
    /// [`MoveError::RoundOver`] if the round has already ended, and
    /// [`MoveError::CellOccupied`] if the target cell is marked. The
    /// board is untouched in both cases.
    #[instrument(skip(self), fields(mover = %self.to_move))]
    pub fn play(&mut self, coordinate: Coordinate) -> Result<GameStatus, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::RoundOver);
        }
        if !self.board.is_empty(coordinate) {
            return Err(MoveError::CellOccupied(coordinate));
        }

        let mover = self.to_move;
        self.board.set(coordinate, Cell::Occupied(mover));
        self.history.push(Move::new(mover, coordinate));

        if rules::check_winner(&self.board, mover) {
            self.status = GameStatus::Over(Outcome::Winner(mover));
            info!(winner = %mover, moves = self.history.len(), "Round won");
        } else if rules::check_draw(&self.board) {
            self.status = GameStatus::Over(Outcome::Draw);
            info!(moves = self.history.len(), "Round drawn");
        } else {
            self.to_move = mover.opponent();
            debug!(next = %self.to_move, "Turn passed");
        }

        Ok(self.status)
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
