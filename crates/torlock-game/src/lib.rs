//! The Torlock puzzle engine.
//!
//! A 9×9 toroidal sliding-block puzzle: moves shift an entire row or
//! column cyclically, pieces can be glued together, pinned, or set
//! spinning, and lines can be grouped so that moving one moves them all.
//! This crate owns the mutable game state and everything that operates on
//! it: move resolution and execution, undo, scrambling, editing, the
//! configuration codecs, and progress persistence behind a storage trait.
//!
//! Value types live in [`torlock_core`]; seeded randomness lives in
//! [`torlock_scramble`]. Rendering, gesture capture, and actual storage
//! backends are left to embedding applications.
//!
//! # Examples
//!
//! ```
//! use torlock_game::Game;
//! use torlock_scramble::{MoveSource, ScrambleSeed};
//!
//! let mut game = Game::new();
//! let mut source = MoveSource::new(&ScrambleSeed::from_phrase("demo"));
//! game.scramble(100, &mut source);
//! assert!(!game.is_solved());
//!
//! // The whole setup fits in a short shareable record.
//! let config = game.config();
//! let mut restored = Game::new();
//! restored.load_config(&config).unwrap();
//! ```

pub use self::{
    board::Board,
    codec::DecodeError,
    config::{Challenge, GameConfig},
    drag::{DragAction, GHOST_OFFSETS},
    error::GameError,
    game::{Game, GameState},
    grouping::LineGrouping,
    progress::{MemoryStore, ProgressStore},
    resolver::PreparedMove,
};

mod board;
pub mod codec;
mod config;
mod drag;
mod error;
mod game;
mod grouping;
mod progress;
mod resolver;
