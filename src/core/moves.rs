//! Move representation and history records.
//!
//! A [`Move`] is the request a driver submits; a [`MoveRecord`] is what the
//! engine appends to the history after the move succeeds, carrying the
//! squeeze-off consequences for replay and debugging.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::player::Side;

/// A move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Move the top `count` pieces of the stack at `from` onto `to`.
    Stack { from: Coord, to: Coord, count: u8 },
    /// Re-enter one piece from the mover's reserve onto `to`.
    Reserve { to: Coord },
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Stack { from, to, count } => {
                write!(f, "{count} from {from} to {to}")
            }
            Move::Reserve { to } => write!(f, "reserve to {to}"),
        }
    }
}

/// A successfully applied move with its consequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who moved.
    pub side: Side,
    /// The move as submitted.
    pub mv: Move,
    /// Opponent pieces the mover captured via squeeze-off on this move.
    pub captured: u32,
    /// Own pieces the mover recovered to reserve via squeeze-off.
    pub reserved: u32,
}
