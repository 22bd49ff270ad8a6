//! A single cell's stack of pieces.
//!
//! Pieces are stored bottom to top; only the topmost piece is exposed for
//! ownership checks. Stacks are capped at [`MAX_STACK_HEIGHT`] pieces once a
//! move resolves, but may transiently exceed the cap between landing pieces
//! and squeeze-off.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Side;

/// Maximum pieces a cell may hold after a move completes.
pub const MAX_STACK_HEIGHT: usize = 5;

/// Ordered pieces on one cell, index 0 = bottom, last = top.
///
/// The inline capacity of 10 covers the transient worst case: a full stack
/// of 5 landing on another full stack of 5 before squeeze-off runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stack {
    pieces: SmallVec<[Side; 10]>,
}

impl Stack {
    /// An empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A stack holding the given pieces, bottom to top.
    #[must_use]
    pub fn from_pieces(pieces: &[Side]) -> Self {
        Self {
            pieces: SmallVec::from_slice(pieces),
        }
    }

    /// Number of pieces on this cell.
    #[must_use]
    pub fn height(&self) -> usize {
        self.pieces.len()
    }

    /// Whether the cell is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// The exposed (movable) piece, if any.
    #[must_use]
    pub fn top(&self) -> Option<Side> {
        self.pieces.last().copied()
    }

    /// The pieces bottom to top.
    #[must_use]
    pub fn pieces(&self) -> &[Side] {
        &self.pieces
    }

    /// Push a single piece onto the top.
    pub fn push(&mut self, side: Side) {
        self.pieces.push(side);
    }

    /// Remove the top `count` pieces, preserving their relative order.
    ///
    /// Panics if `count` exceeds the height; validation rules this out
    /// before any mutation happens.
    pub fn take_top(&mut self, count: usize) -> SmallVec<[Side; 10]> {
        assert!(count <= self.pieces.len(), "take_top beyond stack height");
        let split = self.pieces.len() - count;
        let moved = SmallVec::from_slice(&self.pieces[split..]);
        self.pieces.truncate(split);
        moved
    }

    /// Append pieces onto the top, preserving their relative order.
    pub fn land(&mut self, pieces: &[Side]) {
        self.pieces.extend_from_slice(pieces);
    }

    /// Enforce the height cap, removing excess pieces from the **bottom**.
    ///
    /// Returns the removed pieces in bottom-first order (oldest placed
    /// first); empty when the stack is already within the cap.
    pub fn squeeze_off(&mut self) -> SmallVec<[Side; 10]> {
        if self.pieces.len() <= MAX_STACK_HEIGHT {
            return SmallVec::new();
        }
        let excess = self.pieces.len() - MAX_STACK_HEIGHT;
        let removed = SmallVec::from_slice(&self.pieces[..excess]);
        self.pieces.drain(..excess);
        removed
    }
}
