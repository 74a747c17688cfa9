//! Board coordinates for tic-tac-toe moves.

use serde::{Deserialize, Serialize};

/// A validated (column, row) pair addressing one of the nine cells.
///
/// Both axes run 0..=2, column 0 at the left and row 0 at the top.
/// Out-of-range pairs are rejected at construction, so every coordinate
/// in circulation indexes the board safely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    col: u8,
    row: u8,
}

impl Coordinate {
    /// All nine coordinates in row-major order.
    pub const ALL: [Coordinate; 9] = [
        Coordinate::axes(0, 0),
        Coordinate::axes(1, 0),
        Coordinate::axes(2, 0),
        Coordinate::axes(0, 1),
        Coordinate::axes(1, 1),
        Coordinate::axes(2, 1),
        Coordinate::axes(0, 2),
        Coordinate::axes(1, 2),
        Coordinate::axes(2, 2),
    ];

    /// Creates a coordinate, rejecting axes outside 0..=2.
    ///
    /// Takes signed integers so callers can pass parsed input directly;
    /// negative values fail the range check like any other out-of-range
    /// value.
    pub fn new(col: i64, row: i64) -> Option<Self> {
        if (0..3).contains(&col) && (0..3).contains(&row) {
            Some(Self {
                col: col as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }

    // Axes must already be in range; only for crate-internal constants
    // and loops over 0..3.
    pub(crate) const fn axes(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Column index (0-2).
    pub fn col(&self) -> u8 {
        self.col
    }

    /// Row index (0-2).
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Flat board index (0-8, row-major).
    pub(crate) fn index(self) -> usize {
        self.row as usize * 3 + self.col as usize
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
