use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use focus_core::{apply_move, legal_moves, GameState, Move, Side};

/// Nine plies ending in the first squeeze-off capture.
const OPENING: [(Side, (u8, u8), (u8, u8), u8); 9] = [
    (Side::P1, (0, 1), (0, 2), 1),
    (Side::P2, (0, 3), (0, 2), 1),
    (Side::P1, (1, 2), (0, 2), 1),
    (Side::P2, (2, 2), (1, 2), 1),
    (Side::P1, (1, 3), (1, 2), 1),
    (Side::P2, (1, 1), (1, 2), 1),
    (Side::P1, (0, 0), (0, 1), 1),
    (Side::P2, (1, 2), (0, 2), 1),
    (Side::P1, (1, 2), (0, 2), 1),
];

fn bench_opening_replay(c: &mut Criterion) {
    c.bench_function("opening_replay", |b| {
        b.iter(|| {
            let mut state = GameState::new();
            for (side, from, to, count) in OPENING {
                apply_move(
                    &mut state,
                    side,
                    Move::Stack {
                        from: from.into(),
                        to: to.into(),
                        count,
                    },
                )
                .unwrap();
            }
            black_box(state.captured(Side::P1))
        });
    });
}

fn bench_legal_moves(c: &mut Criterion) {
    let state = GameState::new();
    c.bench_function("legal_moves_start", |b| {
        b.iter(|| legal_moves(black_box(&state), Side::P1).len());
    });
}

criterion_group!(benches, bench_opening_replay, bench_legal_moves);
criterion_main!(benches);
