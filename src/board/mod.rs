//! Board representation: the 6×6 grid and the per-cell piece stacks.

pub mod grid;
pub mod stack;

pub use grid::{Board, BOARD_SIZE};
pub use stack::{Stack, MAX_STACK_HEIGHT};
