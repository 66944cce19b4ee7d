//! The candidate move stream.

use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use torlock_core::{Axis, Move};

use crate::ScrambleSeed;

/// A deterministic stream of random candidate moves.
///
/// Each candidate has a uniformly random axis, a uniformly random line,
/// and a nonzero delta in `-8..=8` (a drawn zero becomes `1`). Candidates
/// are not legality-checked here; the engine prepares each one and
/// discards the blocked ones.
#[derive(Debug, Clone)]
pub struct MoveSource {
    rng: Pcg64Mcg,
}

impl MoveSource {
    /// Creates a stream that replays the sequence identified by `seed`.
    #[must_use]
    pub fn new(seed: &ScrambleSeed) -> Self {
        let mut state = [0_u8; 16];
        state.copy_from_slice(&seed.as_bytes()[..16]);
        Self {
            rng: Pcg64Mcg::from_seed(state),
        }
    }

    /// Creates a stream from a fresh entropy-drawn seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(&ScrambleSeed::generate())
    }

    /// Draws the next candidate move.
    pub fn next_move(&mut self) -> Move {
        let axis = if self.rng.random_bool(0.5) {
            Axis::Row
        } else {
            Axis::Column
        };
        let line = self.rng.random_range(0..9_u8);
        let mut delta = self.rng.random_range(-8..=8_i8);
        if delta == 0 {
            delta = 1;
        }
        Move::new(axis, line, delta)
    }
}
