//! Example demonstrating scrambling and progress round-trips.
//!
//! Scrambles a board from a reproducible seed, prints the scrambled grid
//! and the scramble notation, then plays a few moves, saves progress to
//! an in-memory store, and restores it into a second game.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example scramble
//! ```
//!
//! Pick a seed phrase and scramble length:
//!
//! ```sh
//! cargo run --example scramble -- --seed "weekly race 12" --moves 200
//! ```
//!
//! Add a pair of glued rows before scrambling:
//!
//! ```sh
//! cargo run --example scramble -- --bandage
//! ```

use clap::Parser;
use torlock_core::{Position, Side, torus::SIZE};
use torlock_game::{Game, MemoryStore};
use torlock_scramble::{MoveSource, ScrambleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed phrase; the same phrase always yields the same scramble.
    #[arg(long, value_name = "PHRASE", default_value = "torlock demo")]
    seed: String,

    /// Number of scramble moves to apply.
    #[arg(long, value_name = "COUNT", default_value_t = 100)]
    moves: usize,

    /// Glue a pair of rows together before scrambling.
    #[arg(long)]
    bandage: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut game = Game::new();
    if args.bandage {
        game.start_editing();
        game.toggle_bandage(Position::new(4, 3), Side::Down);
        game.finish_editing();
    }

    let seed = ScrambleSeed::from_phrase(&args.seed);
    let mut source = MoveSource::new(&seed);
    let applied = game.scramble(args.moves, &mut source);

    println!("seed: {seed}");
    println!("applied {applied} scramble moves:");
    println!("  {}", game.scramble_history().join(" "));
    println!();
    print_grid(&game);

    // Play a couple of moves and persist the session.
    for notation in ["3R2", "5C4'"] {
        let mv = notation.parse().expect("well-formed notation");
        game.play(mv).expect("legal on this board");
    }
    let mut store = MemoryStore::new();
    game.save_progress(&mut store);

    // A second game with the same configuration picks the session up.
    let mut resumed = Game::new();
    resumed
        .load_config(&game.config())
        .expect("round-tripped config");
    resumed
        .restore_progress(&store)
        .expect("stored progress replays");
    println!();
    println!(
        "restored session: {} user moves, solved: {}",
        resumed.move_count(),
        resumed.is_solved()
    );
}

fn print_grid(game: &Game) {
    for y in 0..SIZE {
        let mut row = String::new();
        for x in 0..SIZE {
            let piece = game.board().piece_at(Position::new(x, y));
            row.push(char::from(b'0' + piece.color()));
            row.push(' ');
        }
        println!("  {}", row.trim_end());
    }
}
