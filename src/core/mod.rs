//! Core engine types: sides, coordinates, moves, state.

pub mod coord;
pub mod moves;
pub mod player;
pub mod state;

pub use coord::Coord;
pub use moves::{Move, MoveRecord};
pub use player::{PlayerState, Side, SideMap};
pub use state::GameState;
