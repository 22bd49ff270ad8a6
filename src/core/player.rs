//! Player identification and per-player bookkeeping.
//!
//! ## Side
//!
//! A piece on the board is tagged with the `Side` that owns it. Focus is
//! strictly two-player, so `Side` has exactly two variants; comparing two
//! `Side` values is the ownership check everywhere in the engine (in
//! particular for the top-of-stack test, which compares ownership tags,
//! never player records).
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, used for the per-player
//! counters and for name/marker registration in the facade.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players, used as the ownership tag on every piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The first player passed at game creation.
    P1,
    /// The second player passed at game creation.
    P2,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::P1 => Side::P2,
            Side::P2 => Side::P1,
        }
    }

    /// 0 for `P1`, 1 for `P2`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::P1 => 0,
            Side::P2 => 1,
        }
    }

    /// Both sides, in player order.
    #[must_use]
    pub const fn both() -> [Side; 2] {
        [Side::P1, Side::P2]
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::P1 => write!(f, "player 1"),
            Side::P2 => write!(f, "player 2"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// Backed by a two-element array, one slot per `Side`.
///
/// ## Example
///
/// ```
/// use focus_core::core::{Side, SideMap};
///
/// let mut wins: SideMap<u32> = SideMap::with_default();
/// wins[Side::P1] += 1;
/// assert_eq!(wins[Side::P1], 1);
/// assert_eq!(wins[Side::P2], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new map with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::P1), factory(Side::P2)],
        }
    }

    /// Create a new map with both slots defaulted.
    #[must_use]
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs in player order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::both().into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

/// A player's off-board piece pools.
///
/// `captured` counts opponent pieces permanently removed from play and is
/// monotonically non-decreasing. `reserve` counts the player's own pieces
/// held off-board and available for re-entry; it moves in both directions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    /// Opponent pieces this player has captured.
    pub captured: u32,
    /// Own pieces available for reserve re-entry.
    pub reserve: u32,
}
