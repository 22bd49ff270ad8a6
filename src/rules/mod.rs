//! Rules layer: move legality, squeeze-off resolution, win detection.

pub mod engine;

pub use engine::{apply_move, legal_moves, validate_move, MoveOutcome, WIN_CAPTURES};
