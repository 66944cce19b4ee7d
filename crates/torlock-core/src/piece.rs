//! A single cell's state.

use bitflags::bitflags;

use crate::{Axis, Position, Side, torus};

/// Degrees a rotating piece turns per unit of shift.
///
/// Nine steps make a full turn, so shifting a line all the way around the
/// torus leaves its rotating pieces back in their original orientation.
pub const ROTATION_STEP: u16 = 40;

bitflags! {
    /// The glue flags of a piece, one per direction.
    ///
    /// Glue is symmetric: a piece with [`Bandages::RIGHT`] set is attached
    /// to the wrapped right neighbor, which carries [`Bandages::LEFT`].
    /// Keeping the two sides mirrored is the board owner's responsibility;
    /// this type only stores the flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Bandages: u8 {
        /// Glued to the piece above.
        const UP = 1 << 3;
        /// Glued to the piece to the right.
        const RIGHT = 1 << 2;
        /// Glued to the piece below.
        const DOWN = 1 << 1;
        /// Glued to the piece to the left.
        const LEFT = 1 << 0;
    }
}

impl Bandages {
    /// The flag for a single direction.
    #[must_use]
    pub const fn from_side(side: Side) -> Self {
        match side {
            Side::Up => Self::UP,
            Side::Right => Self::RIGHT,
            Side::Down => Self::DOWN,
            Side::Left => Self::LEFT,
        }
    }
}

/// What a piece does when its line is asked to move.
///
/// Exactly one mode holds at a time. `Fixed` pieces block every move whose
/// closure reaches them; `Rotating` pieces spin as their line shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum PieceMode {
    /// Moves normally.
    #[default]
    Free,
    /// Pinned in place; blocks any move that would relocate it.
    Fixed,
    /// Moves normally and accumulates [`ROTATION_STEP`] degrees per cell
    /// of shift.
    Rotating,
}

impl PieceMode {
    /// The next mode in the editing cycle: free, fixed, rotating, free.
    ///
    /// A bandaged piece skips `Rotating` and returns straight to `Free`,
    /// since glue and rotation are mutually exclusive.
    ///
    /// # Examples
    ///
    /// ```
    /// use torlock_core::PieceMode;
    ///
    /// assert_eq!(PieceMode::Free.cycled(false), PieceMode::Fixed);
    /// assert_eq!(PieceMode::Fixed.cycled(false), PieceMode::Rotating);
    /// assert_eq!(PieceMode::Fixed.cycled(true), PieceMode::Free);
    /// assert_eq!(PieceMode::Rotating.cycled(false), PieceMode::Free);
    /// ```
    #[must_use]
    pub const fn cycled(self, bandaged: bool) -> Self {
        match self {
            Self::Free => Self::Fixed,
            Self::Fixed => {
                if bandaged {
                    Self::Free
                } else {
                    Self::Rotating
                }
            }
            Self::Rotating => Self::Free,
        }
    }
}

/// One of the 81 unit pieces on the board.
///
/// A piece remembers where it was created (`origin`), which never changes
/// and determines its color block, and where it currently sits
/// (`position`), which wraps around the torus as lines shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    position: Position,
    origin: Position,
    color: u8,
    mode: PieceMode,
    bandages: Bandages,
    rotation: u16,
}

impl Piece {
    /// Creates a piece at its origin with default flags.
    #[must_use]
    pub fn new(origin: Position) -> Self {
        Self {
            position: origin,
            origin,
            color: origin.block(),
            mode: PieceMode::Free,
            bandages: Bandages::empty(),
            rotation: 0,
        }
    }

    /// Current position on the board.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// The cell this piece was created in.
    #[must_use]
    pub const fn origin(&self) -> Position {
        self.origin
    }

    /// Row-major index of the origin cell, the identity used by the
    /// configuration codecs.
    #[must_use]
    pub const fn origin_index(&self) -> u8 {
        self.origin.index()
    }

    /// The color block this piece belongs to, in `0..9`.
    #[must_use]
    pub const fn color(&self) -> u8 {
        self.color
    }

    /// The piece's move behavior.
    #[must_use]
    pub const fn mode(&self) -> PieceMode {
        self.mode
    }

    /// Sets the piece's move behavior.
    pub const fn set_mode(&mut self, mode: PieceMode) {
        self.mode = mode;
    }

    /// The piece's glue flags.
    #[must_use]
    pub const fn bandages(&self) -> Bandages {
        self.bandages
    }

    /// Whether the piece is glued toward `side`.
    #[must_use]
    pub const fn bandaged(&self, side: Side) -> bool {
        self.bandages.contains(Bandages::from_side(side))
    }

    /// Whether the piece carries any glue flag.
    #[must_use]
    pub const fn is_bandaged(&self) -> bool {
        !self.bandages.is_empty()
    }

    /// Flips the glue flag toward `side` on this piece only.
    ///
    /// The mirrored flag on the neighbor is the board owner's job.
    pub fn toggle_bandage(&mut self, side: Side) {
        self.bandages.toggle(Bandages::from_side(side));
    }

    /// Replaces all glue flags at once.
    pub const fn set_bandages(&mut self, bandages: Bandages) {
        self.bandages = bandages;
    }

    /// Current rotation in degrees, in `0..360`.
    #[must_use]
    pub const fn rotation(&self) -> u16 {
        self.rotation
    }

    /// Whether the piece has any residual rotation.
    #[must_use]
    pub const fn has_rotation(&self) -> bool {
        self.rotation != 0
    }

    /// Shifts the piece `delta` cells along `axis`, wrapping around the
    /// board edge. A rotating piece also turns [`ROTATION_STEP`] degrees
    /// per cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use torlock_core::{Axis, Piece, Position};
    ///
    /// let mut piece = Piece::new(Position::new(8, 3));
    /// piece.shift(Axis::Row, 5);
    /// assert_eq!(piece.position(), Position::new(4, 3));
    /// piece.shift(Axis::Column, -4);
    /// assert_eq!(piece.position(), Position::new(4, 8));
    /// ```
    pub fn shift(&mut self, axis: Axis, delta: i8) {
        let (x, y) = (self.position.x(), self.position.y());
        self.position = match axis {
            Axis::Row => Position::new(torus::wrap(i16::from(x) + i16::from(delta)), y),
            Axis::Column => Position::new(x, torus::wrap(i16::from(y) + i16::from(delta))),
        };
        if self.mode.is_rotating() {
            self.rotate(delta);
        }
    }

    /// Turns the piece `delta` steps of [`ROTATION_STEP`] degrees.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_lossless
    )]
    pub const fn rotate(&mut self, delta: i8) {
        let degrees = delta as i32 * ROTATION_STEP as i32;
        self.rotation = (self.rotation as i32 + degrees).rem_euclid(360) as u16;
    }

    /// Puts the piece back on its origin cell and clears its rotation.
    /// Mode and glue flags are left alone.
    pub const fn reset_position(&mut self) {
        self.position = self.origin;
        self.rotation = 0;
    }

    /// Clears mode and glue flags, returning the piece to a plain free
    /// piece. Position is left alone.
    pub const fn revert_edits(&mut self) {
        self.mode = PieceMode::Free;
        self.bandages = Bandages::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_piece_is_plain() {
        let piece = Piece::new(Position::new(4, 7));
        assert_eq!(piece.position(), piece.origin());
        assert_eq!(piece.color(), 7);
        assert!(piece.mode().is_free());
        assert!(!piece.is_bandaged());
        assert!(!piece.has_rotation());
    }

    #[test]
    fn shift_wraps_both_ways() {
        let mut piece = Piece::new(Position::new(0, 0));
        piece.shift(Axis::Row, -1);
        assert_eq!(piece.position(), Position::new(8, 0));
        piece.shift(Axis::Column, -1);
        assert_eq!(piece.position(), Position::new(8, 8));
        piece.shift(Axis::Row, 1);
        piece.shift(Axis::Column, 1);
        assert_eq!(piece.position(), Position::new(0, 0));
    }

    #[test]
    fn free_piece_does_not_rotate() {
        let mut piece = Piece::new(Position::new(1, 1));
        piece.shift(Axis::Row, 3);
        assert_eq!(piece.rotation(), 0);
    }

    #[test]
    fn rotating_piece_turns_with_its_line() {
        let mut piece = Piece::new(Position::new(1, 1));
        piece.set_mode(PieceMode::Rotating);
        piece.shift(Axis::Row, 2);
        assert_eq!(piece.rotation(), 80);
        piece.shift(Axis::Row, -2);
        assert_eq!(piece.rotation(), 0);
    }

    #[test]
    fn full_wrap_restores_orientation() {
        let mut piece = Piece::new(Position::new(5, 5));
        piece.set_mode(PieceMode::Rotating);
        piece.shift(Axis::Column, 9);
        assert_eq!(piece.position(), Position::new(5, 5));
        assert!(!piece.has_rotation());
    }

    #[test]
    fn toggle_bandage_flips_one_side() {
        let mut piece = Piece::new(Position::new(0, 0));
        piece.toggle_bandage(Side::Right);
        assert!(piece.bandaged(Side::Right));
        assert!(!piece.bandaged(Side::Left));
        piece.toggle_bandage(Side::Right);
        assert!(!piece.is_bandaged());
    }

    #[test]
    fn reset_position_keeps_edits() {
        let mut piece = Piece::new(Position::new(2, 2));
        piece.set_mode(PieceMode::Fixed);
        piece.toggle_bandage(Side::Down);
        piece.shift(Axis::Row, 4);
        piece.reset_position();
        assert_eq!(piece.position(), piece.origin());
        assert!(piece.mode().is_fixed());
        assert!(piece.bandaged(Side::Down));
    }

    #[test]
    fn revert_edits_keeps_position() {
        let mut piece = Piece::new(Position::new(2, 2));
        piece.set_mode(PieceMode::Fixed);
        piece.toggle_bandage(Side::Down);
        piece.shift(Axis::Row, 4);
        piece.revert_edits();
        assert_eq!(piece.position(), Position::new(6, 2));
        assert!(piece.mode().is_free());
        assert!(!piece.is_bandaged());
    }
}
