//! Error taxonomy for move requests and queries.
//!
//! Every variant is a recoverable rejection: the request is refused and the
//! game state is left untouched. Nothing here is fatal, and the engine has
//! no internal panic paths reachable through the public API.

use thiserror::Error;

use crate::core::Coord;

/// Why a request was rejected.
///
/// Validation reports the *first* failing precondition in a fixed priority
/// order (bounds, direction, distance, count, ownership, turn), so the same
/// bad request always yields the same error.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// A coordinate lies outside the 6×6 board.
    #[error("coordinate {0} is outside the 6x6 board")]
    OutOfBounds(Coord),

    /// The move is diagonal or zero-length.
    #[error("a move must travel along a single rank or file")]
    InvalidDirection,

    /// The move length differs from the number of pieces moved.
    #[error("a stack of {count} pieces must move exactly {count} cells")]
    InvalidDistance {
        /// Pieces the mover asked to move.
        count: u8,
    },

    /// `count` is zero or exceeds the source stack height.
    #[error("cannot move {count} pieces from a stack of {height}")]
    InvalidCount {
        /// Pieces the mover asked to move.
        count: u8,
        /// Height of the source stack.
        height: usize,
    },

    /// The top piece of the source stack belongs to the opponent.
    #[error("the top piece of the source stack belongs to the opponent")]
    NotTopOwner,

    /// The mover moved last; turns strictly alternate.
    #[error("not this player's turn")]
    OutOfTurn,

    /// A reserve re-entry was requested with an empty reserve.
    #[error("no pieces in reserve")]
    EmptyReserve,

    /// The supplied name matches neither player.
    #[error("no player named {0:?}")]
    UnknownPlayer(String),

    /// A move was submitted after the game was won.
    #[error("the game is already over")]
    GameOver,
}
