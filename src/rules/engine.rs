//! Move validation and application.
//!
//! Validation is fully separated from mutation: [`apply_move`] runs every
//! precondition before touching the state, so a rejected request leaves the
//! game byte-for-byte unchanged. Preconditions are checked in a fixed
//! priority order and the first failure is the reported error, which keeps
//! rejection reasons deterministic.

use crate::core::{Coord, GameState, Move, MoveRecord, Side};
use crate::error::GameError;

/// Captured pieces needed to win.
pub const WIN_CAPTURES: u32 = 6;

/// Outcome of a successfully applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MoveOutcome {
    /// The game goes on; the other side moves next.
    Continue,
    /// The mover reached the capture threshold; the game is over.
    Win(Side),
}

impl MoveOutcome {
    /// Whether this outcome ended the game for `side`.
    #[must_use]
    pub fn is_win_for(self, side: Side) -> bool {
        self == MoveOutcome::Win(side)
    }
}

/// Check every precondition for `mv` without mutating anything.
///
/// Stack moves are checked in priority order: game over, bounds, direction,
/// distance, count, top-piece ownership, turn. Reserve moves: game over,
/// non-empty reserve, bounds, turn.
pub fn validate_move(state: &GameState, side: Side, mv: Move) -> Result<(), GameError> {
    if state.is_over() {
        return Err(GameError::GameOver);
    }

    match mv {
        Move::Stack { from, to, count } => validate_stack_move(state, side, from, to, count),
        Move::Reserve { to } => validate_reserve_move(state, side, to),
    }
}

fn validate_stack_move(
    state: &GameState,
    side: Side,
    from: Coord,
    to: Coord,
    count: u8,
) -> Result<(), GameError> {
    if !from.in_bounds() {
        return Err(GameError::OutOfBounds(from));
    }
    if !to.in_bounds() {
        return Err(GameError::OutOfBounds(to));
    }

    let distance = from.line_distance(to).ok_or(GameError::InvalidDirection)?;
    if distance != count {
        return Err(GameError::InvalidDistance { count });
    }

    let stack = state.board().stack(from);
    let height = stack.height();
    if count == 0 || count as usize > height {
        return Err(GameError::InvalidCount { count, height });
    }

    // `count >= 1` guarantees the stack is non-empty here.
    if stack.top() != Some(side) {
        return Err(GameError::NotTopOwner);
    }

    if !state.is_turn(side) {
        return Err(GameError::OutOfTurn);
    }

    Ok(())
}

fn validate_reserve_move(state: &GameState, side: Side, to: Coord) -> Result<(), GameError> {
    if state.reserve(side) == 0 {
        return Err(GameError::EmptyReserve);
    }
    if !to.in_bounds() {
        return Err(GameError::OutOfBounds(to));
    }
    if !state.is_turn(side) {
        return Err(GameError::OutOfTurn);
    }
    Ok(())
}

/// Validate and apply `mv` for `side`.
///
/// On success the board is updated, squeeze-off resolves before the turn
/// tracker and win check run, and the move lands in the history. On error
/// the state is unchanged.
pub fn apply_move(state: &mut GameState, side: Side, mv: Move) -> Result<MoveOutcome, GameError> {
    validate_move(state, side, mv)?;

    let (captured, reserved) = match mv {
        Move::Stack { from, to, count } => {
            let moved = state.board_mut().stack_mut(from).take_top(count as usize);
            state.board_mut().stack_mut(to).land(&moved);
            resolve_squeeze_off(state, side, to)
        }
        Move::Reserve { to } => {
            state.player_mut(side).reserve -= 1;
            state.board_mut().stack_mut(to).push(side);
            resolve_squeeze_off(state, side, to)
        }
    };

    state.record_move(MoveRecord {
        side,
        mv,
        captured,
        reserved,
    });
    log::debug!("{side} played {mv} (captured {captured}, reserved {reserved})");

    if state.captured(side) >= WIN_CAPTURES {
        state.set_winner(side);
        log::debug!("{side} wins with {} captures", state.captured(side));
        return Ok(MoveOutcome::Win(side));
    }

    Ok(MoveOutcome::Continue)
}

/// Enforce the stack cap at `at`, crediting the mover's pools.
///
/// Removed pieces come off the bottom of the stack; the mover's own pieces
/// return to reserve, opponent pieces are captured. Returns the number of
/// pieces `(captured, reserved)`.
fn resolve_squeeze_off(state: &mut GameState, mover: Side, at: Coord) -> (u32, u32) {
    let removed = state.board_mut().stack_mut(at).squeeze_off();
    if removed.is_empty() {
        return (0, 0);
    }

    let mut captured = 0;
    let mut reserved = 0;
    for piece in &removed {
        if *piece == mover {
            reserved += 1;
        } else {
            captured += 1;
        }
    }

    state.player_mut(mover).captured += captured;
    state.player_mut(mover).reserve += reserved;
    log::trace!("squeeze-off at {at}: {captured} captured, {reserved} to reserve");

    (captured, reserved)
}

/// Every move `side` could legally make right now.
///
/// Empty when the game is over or it is not `side`'s turn. Every returned
/// move passes [`validate_move`] by construction.
#[must_use]
pub fn legal_moves(state: &GameState, side: Side) -> Vec<Move> {
    if state.is_over() || !state.is_turn(side) {
        return Vec::new();
    }

    let mut moves = Vec::new();

    for (from, stack) in state.board().iter() {
        if stack.top() != Some(side) {
            continue;
        }
        for count in 1..=stack.height() as u8 {
            for (dr, dc) in [(-1i16, 0i16), (1, 0), (0, -1), (0, 1)] {
                let row = i16::from(from.row) + dr * i16::from(count);
                let col = i16::from(from.col) + dc * i16::from(count);
                if (0..crate::board::BOARD_SIZE as i16).contains(&row)
                    && (0..crate::board::BOARD_SIZE as i16).contains(&col)
                {
                    moves.push(Move::Stack {
                        from,
                        to: Coord::new(row as u8, col as u8),
                        count,
                    });
                }
            }
        }
    }

    if state.reserve(side) > 0 {
        moves.extend(Coord::all().map(|to| Move::Reserve { to }));
    }

    moves
}
