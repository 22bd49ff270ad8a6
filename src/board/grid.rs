//! The 6×6 grid of stacks and the fixed starting layout.

use serde::{Deserialize, Serialize};

use super::stack::Stack;
use crate::core::{Coord, Side};

/// Board edge length in cells.
pub const BOARD_SIZE: usize = 6;

/// The 6×6 playing surface.
///
/// Cells are addressed by [`Coord`] `(row, col)`. Accessors panic on
/// out-of-range coordinates; move validation performs the bounds check
/// first, so only already-validated coordinates reach the accessors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Stack; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// An empty board, every cell an empty stack.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: std::array::from_fn(|_| std::array::from_fn(|_| Stack::new())),
        }
    }

    /// The fixed Focus starting position.
    ///
    /// Even rows hold `[P1, P1, P2, P2, P1, P1]`, odd rows
    /// `[P2, P2, P1, P1, P2, P2]`, every cell a single piece. This layout
    /// is a constant of the game and is reproduced exactly: 18 pieces per
    /// side, 36 on the board.
    #[must_use]
    pub fn starting_position() -> Self {
        const EVEN_ROW: [Side; BOARD_SIZE] = [
            Side::P1, Side::P1, Side::P2, Side::P2, Side::P1, Side::P1,
        ];
        const ODD_ROW: [Side; BOARD_SIZE] = [
            Side::P2, Side::P2, Side::P1, Side::P1, Side::P2, Side::P2,
        ];

        Self {
            cells: std::array::from_fn(|row| {
                let pattern = if row % 2 == 0 { EVEN_ROW } else { ODD_ROW };
                std::array::from_fn(|col| Stack::from_pieces(&[pattern[col]]))
            }),
        }
    }

    /// The stack at `coord`.
    #[must_use]
    pub fn stack(&self, coord: Coord) -> &Stack {
        &self.cells[coord.row as usize][coord.col as usize]
    }

    /// Mutable access to the stack at `coord`.
    pub fn stack_mut(&mut self, coord: Coord) -> &mut Stack {
        &mut self.cells[coord.row as usize][coord.col as usize]
    }

    /// Iterate over every cell with its coordinate, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Stack)> {
        Coord::all().map(move |c| (c, self.stack(c)))
    }

    /// Total pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.iter().map(|(_, s)| s.height()).sum()
    }

    /// Pieces on the board owned by `side`.
    #[must_use]
    pub fn piece_count_for(&self, side: Side) -> usize {
        self.iter()
            .flat_map(|(_, s)| s.pieces())
            .filter(|&&p| p == side)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}
