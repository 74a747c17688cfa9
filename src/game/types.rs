//! Core domain types for tic-tac-toe.

use super::coordinate::Coordinate;
use serde::{Deserialize, Serialize};

/// A player's mark, which doubles as the turn identity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Mark {
    /// The 'o' mark (opens every round).
    Nought,
    /// The 'x' mark.
    Cross,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Nought => Mark::Cross,
            Mark::Cross => Mark::Nought,
        }
    }

    /// The console symbol for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::Nought => 'o',
            Mark::Cross => 'x',
        }
    }
}

impl Default for Mark {
    /// 'o' moves first.
    fn default() -> Self {
        Mark::Nought
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Unmarked cell.
    Empty,
    /// Cell holding a player's mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
///
/// Cells are marked once per round and only wiped wholesale by
/// [`Board::clear`] when a new round starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Resets every cell to empty.
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Gets the cell at the coordinate.
    pub fn get(&self, coordinate: Coordinate) -> Cell {
        self.cells[coordinate.index()]
    }

    /// Writes a cell at the coordinate.
    ///
    /// Occupancy is the caller's contract: [`Round::play`] refuses to
    /// overwrite a marked cell before calling this.
    ///
    /// [`Round::play`]: super::Round::play
    pub fn set(&mut self, coordinate: Coordinate, cell: Cell) {
        self.cells[coordinate.index()] = cell;
    }

    /// Checks if the cell at the coordinate is unmarked.
    pub fn is_empty(&self, coordinate: Coordinate) -> bool {
        self.get(coordinate) == Cell::Empty
    }

    /// Checks if no cell is unmarked.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Returns all cells as a slice (row-major).
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Formats the board for the console, one entry per output line.
    ///
    /// A blank line precedes the grid and follows each row; cells print
    /// left to right as `o`, `x`, or `-`, each padded to five columns
    /// with trailing spaces.
    pub fn display_lines(&self) -> Vec<String> {
        let mut lines = vec![String::new()];
        for row in 0..3u8 {
            let mut line = String::new();
            for col in 0..3u8 {
                let symbol = match self.get(Coordinate::axes(col, row)) {
                    Cell::Empty => '-',
                    Cell::Occupied(mark) => mark.symbol(),
                };
                line.push(symbol);
                line.push_str("    ");
            }
            lines.push(line);
            lines.push(String::new());
        }
        lines
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_lines().join("\n"))
    }
}

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Round is ongoing.
    InProgress,
    /// Round ended with an outcome.
    Over(Outcome),
}

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The mark completed a line.
    Winner(Mark),
    /// The round ended without a winner.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "player '{}' wins", mark),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}
