//! # focus-core
//!
//! Rules engine for Focus (Domination), a two-player abstract strategy game
//! played on a 6×6 grid of piece stacks.
//!
//! ## Design Principles
//!
//! 1. **Rules kernel only**: no rendering, networking, persistence formats,
//!    or move search. Drivers call the in-process API.
//!
//! 2. **Validate, then mutate**: every precondition is checked before any
//!    state change, so a rejected move leaves the game untouched.
//!
//! 3. **Ownership tags, not player records**: pieces carry a two-variant
//!    [`Side`] tag; stack-ownership checks compare tags, never identities.
//!
//! ## The game in brief
//!
//! Each cell holds a stack of up to five pieces; only the top piece's owner
//! may move the stack, exactly as many cells as pieces moved, along a rank
//! or file. Stacks that grow past five squeeze pieces off the bottom: the
//! mover's own pieces return to reserve (replayable anywhere), opponent
//! pieces are captured. Six captures win.
//!
//! ## Modules
//!
//! - `core`: sides, coordinates, moves, game state
//! - `board`: the 6×6 grid and per-cell stacks
//! - `rules`: move validation, squeeze-off resolution, win detection
//! - `game`: name-keyed two-player facade for drivers
//! - `error`: the rejection taxonomy
//!
//! ## Concurrency
//!
//! A game is a single synchronous state machine with one legal actor at a
//! time. Embedders running many games keep one [`GameState`] per game and
//! serialize access to each; independent games share nothing.

pub mod board;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::board::{Board, Stack, BOARD_SIZE, MAX_STACK_HEIGHT};
pub use crate::core::{Coord, GameState, Move, MoveRecord, PlayerState, Side, SideMap};
pub use crate::error::GameError;
pub use crate::game::{FocusGame, PlayerInfo};
pub use crate::rules::{apply_move, legal_moves, validate_move, MoveOutcome, WIN_CAPTURES};
