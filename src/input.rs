//! Move input parsing.
//!
//! Parsing is a pure function over the raw prompt lines and the current
//! board, so validation is unit-testable without a console attached.

use crate::game::{Board, Coordinate};
use tracing::instrument;

/// A rejected move attempt.
///
/// The display text is the console message; the session prints it and
/// re-prompts, so neither kind ever aborts a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// One of the raw lines did not parse as an integer.
    #[display("Please enter values between 0 and 2.")]
    MalformedCoordinate,

    /// The integers point outside the grid or at a marked cell.
    #[display("Please choose an empty grid cell.")]
    OccupiedOrInvalidCell,
}

impl std::error::Error for InputError {}

/// Parses a raw column/row pair into a coordinate playable on the board.
///
/// Both lines must parse as integers (signed, so `-1` falls to the
/// range check rather than the parse), land inside 0..=2 on both axes,
/// and address an unmarked cell. The board is never mutated here.
#[instrument(skip(board))]
pub fn parse_move(raw_col: &str, raw_row: &str, board: &Board) -> Result<Coordinate, InputError> {
    let col: i64 = raw_col
        .trim()
        .parse()
        .map_err(|_| InputError::MalformedCoordinate)?;
    let row: i64 = raw_row
        .trim()
        .parse()
        .map_err(|_| InputError::MalformedCoordinate)?;

    let coordinate = Coordinate::new(col, row).ok_or(InputError::OccupiedOrInvalidCell)?;
    if !board.is_empty(coordinate) {
        return Err(InputError::OccupiedOrInvalidCell);
    }

    Ok(coordinate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Mark};

    #[test]
    fn test_valid_pair_parses() {
        let board = Board::new();
        let coordinate = parse_move("2", "0", &board).expect("valid move");
        assert_eq!((coordinate.col(), coordinate.row()), (2, 0));
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        let board = Board::new();
        assert!(parse_move(" 1 ", "\t2", &board).is_ok());
    }

    #[test]
    fn test_non_numeric_column_is_malformed() {
        let board = Board::new();
        assert_eq!(
            parse_move("left", "0", &board),
            Err(InputError::MalformedCoordinate)
        );
    }

    #[test]
    fn test_non_numeric_row_is_malformed() {
        let board = Board::new();
        assert_eq!(
            parse_move("0", "", &board),
            Err(InputError::MalformedCoordinate)
        );
    }

    #[test]
    fn test_out_of_range_pair_is_invalid_not_fatal() {
        let board = Board::new();
        assert_eq!(
            parse_move("3", "0", &board),
            Err(InputError::OccupiedOrInvalidCell)
        );
        assert_eq!(
            parse_move("0", "9", &board),
            Err(InputError::OccupiedOrInvalidCell)
        );
    }

    #[test]
    fn test_negative_axis_is_invalid_not_malformed() {
        let board = Board::new();
        assert_eq!(
            parse_move("-1", "0", &board),
            Err(InputError::OccupiedOrInvalidCell)
        );
    }

    #[test]
    fn test_marked_cell_is_refused() {
        let mut board = Board::new();
        let center = Coordinate::new(1, 1).expect("in range");
        board.set(center, Cell::Occupied(Mark::Nought));
        assert_eq!(
            parse_move("1", "1", &board),
            Err(InputError::OccupiedOrInvalidCell)
        );
    }
}
