//! Engine error types.

use torlock_core::{Axis, NotationError};

/// Reasons a move cannot be carried out.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// The move's closure reaches a fixed piece.
    #[display("{} is blocked", axis.line_label(*line))]
    Blocked {
        /// Axis of the grabbed line.
        axis: Axis,
        /// Index of the grabbed line.
        line: u8,
    },
    /// A stored history entry does not parse as move notation.
    #[display("{_0}")]
    Notation(#[from] NotationError),
}
