//! Board coordinates and movement geometry.
//!
//! Coordinates are zero-indexed `(row, col)` pairs. Out-of-range values are
//! representable so that callers can submit arbitrary requests; validation
//! rejects them with `OutOfBounds` rather than panicking.

use serde::{Deserialize, Serialize};

use crate::board::BOARD_SIZE;

/// A board cell address, `(row, col)` with both in `[0, 5]` when on-board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    /// Create a coordinate. No range check; see [`Coord::in_bounds`].
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Whether this coordinate addresses a cell on the 6×6 board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Distance to `other` along a single rank or file.
    ///
    /// Returns `None` when the two cells are not on a common rank or file,
    /// or when they coincide (a move must change exactly one axis).
    #[must_use]
    pub fn line_distance(self, other: Coord) -> Option<u8> {
        let same_row = self.row == other.row;
        let same_col = self.col == other.col;

        match (same_row, same_col) {
            (true, false) => Some(self.col.abs_diff(other.col)),
            (false, true) => Some(self.row.abs_diff(other.row)),
            // Diagonal or zero-length.
            _ => None,
        }
    }

    /// Iterate over every on-board coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Coord::new(row, col)))
    }
}

impl From<(u8, u8)> for Coord {
    fn from((row, col): (u8, u8)) -> Self {
        Coord::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
