//! Seeded random move generation for scrambling Torlock boards.
//!
//! Scrambling works by generate-and-test: this crate produces a
//! reproducible stream of candidate moves, and the game engine discards
//! the ones its move resolver rejects. Keeping the randomness here, behind
//! a fixed seed type, makes every scramble replayable from its seed.
//!
//! # Examples
//!
//! ```
//! use torlock_scramble::{MoveSource, ScrambleSeed};
//!
//! let seed = ScrambleSeed::from_phrase("weekly race 12");
//! let mut a = MoveSource::new(&seed);
//! let mut b = MoveSource::new(&seed);
//! // The same seed always yields the same stream.
//! for _ in 0..100 {
//!     assert_eq!(a.next_move(), b.next_move());
//! }
//! ```

pub use self::{
    seed::{ScrambleSeed, SeedParseError},
    source::MoveSource,
};

mod seed;
mod source;
