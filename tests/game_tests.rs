//! Facade integration tests: name-keyed play from game start to a win.

use focus_core::{Coord, FocusGame, GameError, MoveOutcome, Side, Stack};

fn coord(row: u8, col: u8) -> Coord {
    Coord::new(row, col)
}

/// A scripted opening: nine plies ending in the first squeeze-off capture.
#[test]
fn test_scripted_opening_to_first_capture() {
    let mut game = FocusGame::new(("jo", 'J'), ("ak", 'A'));
    let script: [(&str, (u8, u8), (u8, u8), u8); 9] = [
        ("jo", (0, 1), (0, 2), 1),
        ("ak", (0, 3), (0, 2), 1),
        ("jo", (1, 2), (0, 2), 1),
        ("ak", (2, 2), (1, 2), 1),
        ("jo", (1, 3), (1, 2), 1),
        ("ak", (1, 1), (1, 2), 1),
        ("jo", (0, 0), (0, 1), 1),
        ("ak", (1, 2), (0, 2), 1),
        ("jo", (1, 2), (0, 2), 1),
    ];

    for (name, from, to, count) in script {
        let outcome = game.move_stack(name, from.into(), to.into(), count).unwrap();
        assert_eq!(outcome, MoveOutcome::Continue);
        assert_eq!(game.state().total_pieces(), 36);
    }

    // The ninth ply made (0, 2) six high; ak's bottom piece was captured.
    assert_eq!(game.captured("jo").unwrap(), 1);
    assert_eq!(game.reserve("jo").unwrap(), 0);
    assert_eq!(game.captured("ak").unwrap(), 0);
    assert_eq!(game.reserve("ak").unwrap(), 0);
    assert_eq!(
        game.stack_at(coord(0, 2)).unwrap(),
        vec!['J', 'A', 'J', 'A', 'J']
    );
}

#[test]
fn test_queries_are_read_only() {
    let game = FocusGame::new(("jo", 'J'), ("ak", 'A'));
    let before = game.clone();

    let _ = game.stack_at(coord(0, 0)).unwrap();
    let _ = game.captured("jo").unwrap();
    let _ = game.reserve("AK").unwrap();

    assert_eq!(game, before);
}

#[test]
fn test_unknown_player_queries() {
    let game = FocusGame::new(("jo", 'J'), ("ak", 'A'));

    assert_eq!(
        game.captured("nobody").unwrap_err(),
        GameError::UnknownPlayer("nobody".to_string())
    );
    assert_eq!(
        game.reserve("nobody").unwrap_err(),
        GameError::UnknownPlayer("nobody".to_string())
    );
}

#[test]
fn test_empty_reserve_rejected_and_state_unchanged() {
    let mut game = FocusGame::new(("jo", 'J'), ("ak", 'A'));
    let before = game.clone();

    let err = game.place_from_reserve("jo", coord(0, 0)).unwrap_err();

    assert_eq!(err, GameError::EmptyReserve);
    assert_eq!(game, before);
}

#[test]
fn test_win_reports_player_name() {
    let mut game = FocusGame::new(("jo", 'J'), ("ak", 'A'));
    game.state_mut().player_mut(Side::P1).captured = 5;
    *game.state_mut().board_mut().stack_mut(coord(0, 2)) = Stack::from_pieces(&[
        Side::P2,
        Side::P2,
        Side::P1,
        Side::P1,
        Side::P2,
    ]);

    let outcome = game.move_stack("jo", coord(0, 1), coord(0, 2), 1).unwrap();

    assert_eq!(outcome, MoveOutcome::Win(Side::P1));
    assert_eq!(game.winner(), Some("jo"));

    // Terminal: nobody moves again.
    assert_eq!(
        game.move_stack("ak", coord(0, 3), coord(0, 4), 1).unwrap_err(),
        GameError::GameOver
    );
}

#[test]
fn test_snapshot_resumes_play() {
    let mut game = FocusGame::new(("jo", 'J'), ("ak", 'A'));
    game.move_stack("jo", coord(0, 1), coord(0, 2), 1).unwrap();

    let bytes = game.state().to_bytes().unwrap();
    let restored = focus_core::GameState::from_bytes(&bytes).unwrap();

    assert_eq!(&restored, game.state());
    assert_eq!(restored.last_mover(), Some(Side::P1));

    // Play continues from the checkpoint.
    let mut resumed = restored;
    focus_core::apply_move(
        &mut resumed,
        Side::P2,
        focus_core::Move::Stack {
            from: coord(0, 3),
            to: coord(0, 2),
            count: 1,
        },
    )
    .unwrap();
    assert_eq!(resumed.history().len(), 2);
}
