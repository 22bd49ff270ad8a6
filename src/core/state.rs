//! Complete game state: board, player pools, turn tracking, history.
//!
//! `GameState` is plain owned data with no interior mutability: one value
//! per game, mutated only through the rules layer. Embedders running many
//! games keep one `GameState` each and serialize access per game.
//!
//! The move history uses `im::Vector` so cloned snapshots share structure
//! instead of copying the whole log.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::moves::MoveRecord;
use super::player::{PlayerState, Side, SideMap};
use crate::board::Board;

/// The full state of one game of Focus.
///
/// Construct with [`GameState::new`] for the fixed starting position, or
/// rebuild a checkpoint with [`GameState::from_bytes`]. All rule-governed
/// mutation goes through [`crate::rules::apply_move`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    players: SideMap<PlayerState>,
    /// Side that made the last successful move; `None` before the first.
    last_mover: Option<Side>,
    /// Set once a player reaches the capture threshold; terminal.
    winner: Option<Side>,
    history: Vector<MoveRecord>,
}

impl GameState {
    /// A fresh game: starting position, empty pools, either side to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::starting_position(),
            players: SideMap::with_default(),
            last_mover: None,
            winner: None,
            history: Vector::new(),
        }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, for scenario setup by drivers and tests.
    ///
    /// Rule-governed play never needs this; prefer
    /// [`crate::rules::apply_move`].
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// A side's captured/reserve pools.
    #[must_use]
    pub fn player(&self, side: Side) -> &PlayerState {
        &self.players[side]
    }

    /// Mutable pool access, for scenario setup by drivers and tests.
    pub fn player_mut(&mut self, side: Side) -> &mut PlayerState {
        &mut self.players[side]
    }

    /// Opponent pieces `side` has captured.
    #[must_use]
    pub fn captured(&self, side: Side) -> u32 {
        self.players[side].captured
    }

    /// Pieces `side` holds in reserve.
    #[must_use]
    pub fn reserve(&self, side: Side) -> u32 {
        self.players[side].reserve
    }

    /// Side that made the last successful move, if any.
    #[must_use]
    pub fn last_mover(&self) -> Option<Side> {
        self.last_mover
    }

    /// Whether `side` may move next (strict alternation; either side may
    /// open the game).
    #[must_use]
    pub fn is_turn(&self, side: Side) -> bool {
        self.last_mover != Some(side)
    }

    /// The winner, once a side has reached the capture threshold.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Successful moves in order of play.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Pieces on the board plus both captured and reserve pools.
    ///
    /// Invariant under every legal move: 36 for a game started from the
    /// standard position.
    #[must_use]
    pub fn total_pieces(&self) -> usize {
        self.board.piece_count()
            + self
                .players
                .iter()
                .map(|(_, p)| (p.captured + p.reserve) as usize)
                .sum::<usize>()
    }

    pub(crate) fn record_move(&mut self, record: MoveRecord) {
        self.last_mover = Some(record.side);
        self.history.push_back(record);
    }

    pub(crate) fn set_winner(&mut self, side: Side) {
        self.winner = Some(side);
    }

    // === Snapshots ===

    /// Serialize this state to a compact binary checkpoint.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Restore a state from [`GameState::to_bytes`] output.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coord, Move};

    #[test]
    fn test_new_game() {
        let state = GameState::new();

        assert_eq!(state.board().piece_count(), 36);
        assert_eq!(state.captured(Side::P1), 0);
        assert_eq!(state.captured(Side::P2), 0);
        assert_eq!(state.reserve(Side::P1), 0);
        assert_eq!(state.reserve(Side::P2), 0);
        assert_eq!(state.last_mover(), None);
        assert_eq!(state.winner(), None);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_either_side_may_open() {
        let state = GameState::new();
        assert!(state.is_turn(Side::P1));
        assert!(state.is_turn(Side::P2));
    }

    #[test]
    fn test_record_move_updates_turn() {
        let mut state = GameState::new();
        state.record_move(MoveRecord {
            side: Side::P1,
            mv: Move::Reserve { to: Coord::new(0, 0) },
            captured: 0,
            reserved: 0,
        });

        assert_eq!(state.last_mover(), Some(Side::P1));
        assert!(!state.is_turn(Side::P1));
        assert!(state.is_turn(Side::P2));
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_total_pieces_counts_pools() {
        let mut state = GameState::new();
        state.player_mut(Side::P1).captured = 2;
        state.player_mut(Side::P2).reserve = 3;

        assert_eq!(state.total_pieces(), 36 + 5);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut state = GameState::new();
        state.player_mut(Side::P2).captured = 4;
        state.record_move(MoveRecord {
            side: Side::P2,
            mv: Move::Stack {
                from: Coord::new(0, 0),
                to: Coord::new(0, 1),
                count: 1,
            },
            captured: 0,
            reserved: 0,
        });

        let bytes = state.to_bytes().unwrap();
        let restored = GameState::from_bytes(&bytes).unwrap();

        assert_eq!(restored, state);
        assert_eq!(restored.last_mover(), Some(Side::P2));
    }

    #[test]
    fn test_json_round_trip() {
        let state = GameState::new();
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
