//! Win detection logic for tic-tac-toe.

use super::super::coordinate::Coordinate;
use super::super::types::{Board, Cell, Mark};
use tracing::instrument;

/// The eight winning lines: three rows, three columns, two diagonals.
const LINES: [[Coordinate; 3]; 8] = [
    // Rows
    [
        Coordinate::axes(0, 0),
        Coordinate::axes(1, 0),
        Coordinate::axes(2, 0),
    ],
    [
        Coordinate::axes(0, 1),
        Coordinate::axes(1, 1),
        Coordinate::axes(2, 1),
    ],
    [
        Coordinate::axes(0, 2),
        Coordinate::axes(1, 2),
        Coordinate::axes(2, 2),
    ],
    // Columns
    [
        Coordinate::axes(0, 0),
        Coordinate::axes(0, 1),
        Coordinate::axes(0, 2),
    ],
    [
        Coordinate::axes(1, 0),
        Coordinate::axes(1, 1),
        Coordinate::axes(1, 2),
    ],
    [
        Coordinate::axes(2, 0),
        Coordinate::axes(2, 1),
        Coordinate::axes(2, 2),
    ],
    // Diagonals
    [
        Coordinate::axes(0, 0),
        Coordinate::axes(1, 1),
        Coordinate::axes(2, 2),
    ],
    [
        Coordinate::axes(0, 2),
        Coordinate::axes(1, 1),
        Coordinate::axes(2, 0),
    ],
];

/// Checks whether the mark holds a complete line.
///
/// Every cell of the line must carry the mark itself; empty cells never
/// match, so a line of three blanks wins for no one.
#[instrument(skip(board))]
pub fn check_winner(board: &Board, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&c| board.get(c) == Cell::Occupied(mark)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_empty_board_wins_for_no_one() {
        let board = Board::new();
        for mark in Mark::iter() {
            assert!(!check_winner(&board, mark));
        }
    }

    #[test]
    fn test_every_line_wins_for_its_owner_only() {
        for mark in Mark::iter() {
            for line in LINES {
                let mut board = Board::new();
                for coordinate in line {
                    board.set(coordinate, Cell::Occupied(mark));
                }
                assert!(check_winner(&board, mark), "{mark} should win {line:?}");
                assert!(
                    !check_winner(&board, mark.opponent()),
                    "{} should not win {line:?}",
                    mark.opponent()
                );
            }
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let mut board = Board::new();
        board.set(Coordinate::axes(0, 0), Cell::Occupied(Mark::Nought));
        board.set(Coordinate::axes(1, 0), Cell::Occupied(Mark::Nought));
        assert!(!check_winner(&board, Mark::Nought));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.set(Coordinate::axes(0, 0), Cell::Occupied(Mark::Nought));
        board.set(Coordinate::axes(1, 1), Cell::Occupied(Mark::Cross));
        board.set(Coordinate::axes(2, 2), Cell::Occupied(Mark::Nought));
        assert!(!check_winner(&board, Mark::Nought));
        assert!(!check_winner(&board, Mark::Cross));
    }

    #[test]
    fn test_top_row_scenario() {
        let mut board = Board::new();
        board.set(Coordinate::axes(0, 0), Cell::Occupied(Mark::Nought));
        board.set(Coordinate::axes(1, 0), Cell::Occupied(Mark::Nought));
        board.set(Coordinate::axes(2, 0), Cell::Occupied(Mark::Nought));
        assert!(check_winner(&board, Mark::Nought));
        assert!(!check_winner(&board, Mark::Cross));
    }

    #[test]
    fn test_anti_diagonal_scenario() {
        let mut board = Board::new();
        board.set(Coordinate::axes(0, 2), Cell::Occupied(Mark::Cross));
        board.set(Coordinate::axes(1, 1), Cell::Occupied(Mark::Cross));
        board.set(Coordinate::axes(2, 0), Cell::Occupied(Mark::Cross));
        assert!(check_winner(&board, Mark::Cross));
    }
}
