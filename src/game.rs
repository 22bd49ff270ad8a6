//! Name-keyed two-player game facade.
//!
//! [`FocusGame`] is the surface a driver (CLI, UI, test harness) talks to:
//! players are addressed by the names given at creation, and stacks are
//! reported as the players' marker characters. Name matching is
//! **case-insensitive** (ASCII), one documented policy for every lookup.
//!
//! The rules themselves live in [`crate::rules`]; the facade only resolves
//! names to [`Side`] and forwards.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, GameState, Move, Side, SideMap};
use crate::error::GameError;
use crate::rules::{apply_move, MoveOutcome};

/// A registered player: display name plus the single-character marker used
/// when rendering stacks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub name: String,
    pub marker: char,
}

/// One game of Focus with name-keyed access.
///
/// ## Example
///
/// ```
/// use focus_core::FocusGame;
///
/// let mut game = FocusGame::new(("alice", 'A'), ("bob", 'B'));
/// game.move_stack("alice", (0, 1).into(), (0, 2).into(), 1).unwrap();
/// assert_eq!(game.stack_at((0, 2).into()).unwrap(), vec!['B', 'A']);
/// assert_eq!(game.captured("BOB").unwrap(), 0); // lookup ignores case
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FocusGame {
    state: GameState,
    players: SideMap<PlayerInfo>,
}

impl FocusGame {
    /// Start a game from the standard position.
    ///
    /// Each player is a `(name, marker)` pair. Names must be distinct under
    /// the case-insensitive policy.
    #[must_use]
    pub fn new(player1: (&str, char), player2: (&str, char)) -> Self {
        assert!(
            !player1.0.eq_ignore_ascii_case(player2.0),
            "player names must be distinct (case-insensitive)"
        );

        let infos = [player1, player2].map(|(name, marker)| PlayerInfo {
            name: name.to_string(),
            marker,
        });
        let [p1, p2] = infos;

        Self {
            state: GameState::new(),
            players: SideMap::new(|side| match side {
                Side::P1 => p1.clone(),
                Side::P2 => p2.clone(),
            }),
        }
    }

    /// Resolve a name to a side, case-insensitively.
    pub fn side_of(&self, name: &str) -> Result<Side, GameError> {
        Side::both()
            .into_iter()
            .find(|&side| self.players[side].name.eq_ignore_ascii_case(name))
            .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))
    }

    /// The registered name and marker for a side.
    #[must_use]
    pub fn player_info(&self, side: Side) -> &PlayerInfo {
        &self.players[side]
    }

    /// The underlying engine state, for drivers that want direct access.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable engine state, for scenario setup by drivers and tests.
    ///
    /// Rule-governed play goes through [`FocusGame::move_stack`] and
    /// [`FocusGame::place_from_reserve`].
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Move the top `count` pieces from `from` to `to` for the named player.
    pub fn move_stack(
        &mut self,
        name: &str,
        from: Coord,
        to: Coord,
        count: u8,
    ) -> Result<MoveOutcome, GameError> {
        let side = self.side_of(name)?;
        apply_move(&mut self.state, side, Move::Stack { from, to, count })
    }

    /// Place one reserve piece on `to` for the named player.
    pub fn place_from_reserve(&mut self, name: &str, to: Coord) -> Result<MoveOutcome, GameError> {
        let side = self.side_of(name)?;
        apply_move(&mut self.state, side, Move::Reserve { to })
    }

    /// The stack at `coord` as marker characters, bottom to top.
    pub fn stack_at(&self, coord: Coord) -> Result<Vec<char>, GameError> {
        if !coord.in_bounds() {
            return Err(GameError::OutOfBounds(coord));
        }
        Ok(self
            .state
            .board()
            .stack(coord)
            .pieces()
            .iter()
            .map(|&side| self.players[side].marker)
            .collect())
    }

    /// Pieces the named player has captured.
    pub fn captured(&self, name: &str) -> Result<u32, GameError> {
        Ok(self.state.captured(self.side_of(name)?))
    }

    /// Pieces the named player holds in reserve.
    pub fn reserve(&self, name: &str) -> Result<u32, GameError> {
        Ok(self.state.reserve(self.side_of(name)?))
    }

    /// The winner's name, once the game has ended.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.state
            .winner()
            .map(|side| self.players[side].name.as_str())
    }
}
