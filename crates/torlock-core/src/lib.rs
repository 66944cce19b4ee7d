//! Core value types for the Torlock puzzle.
//!
//! The puzzle is played on a 9×9 grid that wraps around at every edge, like
//! the surface of a torus. Moves shift an entire row or column cyclically;
//! pieces may be glued ("bandaged") to a neighbor, pinned in place, or set
//! spinning as their line moves. This crate holds the plain data types that
//! describe such a board. It performs no I/O and owns no game state.
//!
//! # Overview
//!
//! - [`torus`]: grid dimensions and wrapping coordinate arithmetic
//! - [`position`]: cell coordinates and their row-major indices
//! - [`line_set`]: a 9-bit set of row or column indices
//! - [`axis`]: the row/column distinction and its coordinate roles
//! - [`piece`]: a single cell's state (origin, color, mode, bandages)
//! - [`moves`]: a cyclic shift of one line, with its text notation
//!
//! # Examples
//!
//! ```
//! use torlock_core::{Axis, Move, Position};
//!
//! // "4R2'" shifts row 4 (index 3) left by two cells.
//! let mv: Move = "4R2'".parse().unwrap();
//! assert_eq!(mv.axis(), Axis::Row);
//! assert_eq!(mv.line(), 3);
//! assert_eq!(mv.delta(), -2);
//!
//! // Shifts wrap: the cell at x = 8 ends up at x = 1 after +2.
//! let pos = Position::new(8, 3);
//! assert_eq!(torlock_core::torus::wrap(i16::from(pos.x()) + 2), 1);
//! ```

pub use self::{
    axis::{Axis, Side},
    line_set::LineSet,
    moves::{Move, NotationError},
    piece::{Bandages, Piece, PieceMode},
    position::Position,
};

pub mod axis;
pub mod line_set;
pub mod moves;
pub mod piece;
pub mod position;
pub mod torus;
