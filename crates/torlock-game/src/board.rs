//! The piece arena.

use torlock_core::{
    Axis, LineSet, Piece, Position,
    torus::{BLOCK, CELL_COUNT, SIZE},
};

/// The 81 pieces of a board, with O(1) lookup by current position.
///
/// The board owns every piece; nothing else holds piece references. A
/// cell index (`by_cell`) is kept alongside the arena and rebuilt after
/// each mutation pass, so position lookups never scan the piece list.
/// Canonical coordinates are always in range; wraparound ghosts for
/// drag animation are a render-side overlay, not extra pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pieces: Vec<Piece>,
    by_cell: [u8; CELL_COUNT],
}

impl Board {
    /// Creates a solved board: 81 pieces, each at its origin.
    #[must_use]
    pub fn new() -> Self {
        Self::from_pieces(Position::all().map(Piece::new).collect())
    }

    /// Builds a board from decoded pieces.
    ///
    /// Callers guarantee one piece per cell; this is upheld by the piece
    /// codec, which rejects duplicate cell records.
    #[must_use]
    pub(crate) fn from_pieces(pieces: Vec<Piece>) -> Self {
        debug_assert_eq!(pieces.len(), CELL_COUNT);
        let mut board = Self {
            pieces,
            by_cell: [0; CELL_COUNT],
        };
        board.rebuild_cells();
        board
    }

    fn rebuild_cells(&mut self) {
        for (slot, piece) in self.pieces.iter().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let slot = slot as u8;
            self.by_cell[usize::from(piece.position().index())] = slot;
        }
    }

    /// The piece currently occupying `pos`.
    #[must_use]
    pub fn piece_at(&self, pos: Position) -> &Piece {
        &self.pieces[usize::from(self.by_cell[usize::from(pos.index())])]
    }

    pub(crate) fn piece_at_mut(&mut self, pos: Position) -> &mut Piece {
        &mut self.pieces[usize::from(self.by_cell[usize::from(pos.index())])]
    }

    /// All pieces, in creation order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    pub(crate) fn pieces_mut(&mut self) -> impl Iterator<Item = &mut Piece> {
        self.pieces.iter_mut()
    }

    /// Shifts every piece whose cross coordinate falls in `lines` by
    /// `delta` cells along `axis`, in one pass.
    pub(crate) fn shift_lines(&mut self, axis: Axis, lines: LineSet, delta: i8) {
        for piece in &mut self.pieces {
            if lines.contains(axis.cross(piece.position())) {
                piece.shift(axis, delta);
            }
        }
        self.rebuild_cells();
    }

    /// Puts every piece back on its origin cell and clears rotations.
    pub(crate) fn reset_positions(&mut self) {
        for piece in &mut self.pieces {
            piece.reset_position();
        }
        self.rebuild_cells();
    }

    /// Clears every piece's mode and glue flags.
    pub(crate) fn revert_edits(&mut self) {
        for piece in &mut self.pieces {
            piece.revert_edits();
        }
    }

    /// Whether every 3×3 block is color-homogeneous and no piece has
    /// residual rotation.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        for block_y in (0..SIZE).step_by(usize::from(BLOCK)) {
            for block_x in (0..SIZE).step_by(usize::from(BLOCK)) {
                let color = self.piece_at(Position::new(block_x, block_y)).color();
                for dy in 0..BLOCK {
                    for dx in 0..BLOCK {
                        let pos = Position::new(block_x + dx, block_y + dy);
                        if self.piece_at(pos).color() != color {
                            return false;
                        }
                    }
                }
            }
        }
        self.pieces.iter().all(|piece| !piece.has_rotation())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use torlock_core::PieceMode;

    use super::*;

    #[test]
    fn fresh_board_is_solved() {
        assert!(Board::new().is_solved());
    }

    #[test]
    fn lookup_matches_positions() {
        let board = Board::new();
        for pos in Position::all() {
            assert_eq!(board.piece_at(pos).position(), pos);
        }
    }

    #[test]
    fn shifting_a_row_unsolves_blocks() {
        let mut board = Board::new();
        board.shift_lines(Axis::Row, LineSet::single(0), 3);
        assert!(!board.is_solved());
        // Row 0 cell (0,0) now holds the piece that started at x = 6.
        assert_eq!(board.piece_at(Position::new(0, 0)).origin(), Position::new(6, 0));
    }

    #[test]
    fn full_wrap_is_identity() {
        let mut board = Board::new();
        board.shift_lines(Axis::Column, LineSet::single(4), 9);
        assert!(board.is_solved());
    }

    #[test]
    fn shift_and_inverse_restore_lookup() {
        let mut board = Board::new();
        let lines = LineSet::from_iter([1, 2]);
        board.shift_lines(Axis::Row, lines, 5);
        board.shift_lines(Axis::Row, lines, -5);
        for pos in Position::all() {
            assert_eq!(board.piece_at(pos).origin(), pos);
        }
    }

    #[test]
    fn residual_rotation_blocks_solved() {
        let mut board = Board::new();
        board.piece_at_mut(Position::new(0, 0)).set_mode(PieceMode::Rotating);
        // Shifting the top three rows by a block width keeps every block
        // homogeneous, but the rotating piece is a third of a turn off.
        let top_rows = LineSet::from_iter([0, 1, 2]);
        board.shift_lines(Axis::Row, top_rows, 3);
        assert!(!board.is_solved());
        // Two more block widths complete the turn and the wrap.
        board.shift_lines(Axis::Row, top_rows, 6);
        assert!(board.is_solved());
    }

    #[test]
    fn reset_positions_clears_rotation() {
        let mut board = Board::new();
        board.piece_at_mut(Position::new(2, 0)).set_mode(PieceMode::Rotating);
        board.shift_lines(Axis::Row, LineSet::single(0), 2);
        assert!(!board.is_solved());
        board.reset_positions();
        assert!(board.is_solved());
        for pos in Position::all() {
            assert_eq!(board.piece_at(pos).origin(), pos);
        }
    }
}
