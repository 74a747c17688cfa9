//! Draw detection logic for tic-tac-toe.
//!
//! The rule here is inherited unchanged: a "draw" holds only while no
//! cell carries a mark, so a full board without a winner never reports
//! one. [`Board::is_full`] stays public as the hook for the corrected
//! `is_full && !check_winner` definition.
//!
//! [`Board::is_full`]: super::super::Board::is_full

use super::super::coordinate::Coordinate;
use super::super::types::Board;
use tracing::instrument;

/// Checks the draw rule: true only while the board carries no marks.
#[instrument(skip(board))]
pub fn check_draw(board: &Board) -> bool {
    Coordinate::ALL.iter().all(|&c| board.is_empty(c))
}
