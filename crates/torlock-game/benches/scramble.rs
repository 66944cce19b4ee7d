//! Benchmarks for move resolution and scrambling.
//!
//! # Benchmarks
//!
//! - **`prepare_move`**: resolves a single move on a board where glue and
//!   groupings chain across several lines, which is the worst case for
//!   the closure loop.
//! - **`scramble_100`**: a full 100-move scramble on the same board,
//!   including the generate-and-test retries.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench scramble
//! ```

use std::hint;

use criterion::{Criterion, criterion_group, criterion_main};
use torlock_core::{Axis, Move, Position, Side};
use torlock_game::Game;
use torlock_scramble::{MoveSource, ScrambleSeed};

fn tangled_board() -> Game {
    let mut game = Game::new();
    game.start_editing();
    game.toggle_bandage(Position::new(1, 0), Side::Down);
    game.toggle_bandage(Position::new(6, 1), Side::Down);
    game.toggle_bandage(Position::new(3, 4), Side::Right);
    game.merge_lines(Axis::Row, 5, 7);
    game.merge_lines(Axis::Column, 0, 8);
    game.finish_editing();
    game
}

fn bench_prepare_move(c: &mut Criterion) {
    let game = tangled_board();
    c.bench_function("prepare_move", |b| {
        b.iter(|| {
            let prepared = game.prepare_move(hint::black_box(Move::new(Axis::Row, 0, 3)));
            hint::black_box(prepared).ok()
        });
    });
}

fn bench_scramble(c: &mut Criterion) {
    let seed = ScrambleSeed::from_phrase("bench");
    c.bench_function("scramble_100", |b| {
        b.iter(|| {
            let mut game = tangled_board();
            let mut source = MoveSource::new(&seed);
            hint::black_box(game.scramble(100, &mut source))
        });
    });
}

criterion_group!(benches, bench_prepare_move, bench_scramble);
criterion_main!(benches);
