//! Move resolution: which lines must move together.

use torlock_core::{LineSet, Move, torus};

use crate::{Board, GameError, LineGrouping};

/// A move whose full set of co-moving lines has been resolved and whose
/// legality has been checked.
///
/// Produced by [`Game::prepare_move`](crate::Game::prepare_move);
/// executing a prepared move shifts every piece on a resolved line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreparedMove {
    mv: Move,
    lines: LineSet,
}

impl PreparedMove {
    /// The underlying move.
    #[must_use]
    pub const fn as_move(&self) -> Move {
        self.mv
    }

    /// Every line that moves when this move executes, the grabbed line
    /// included.
    #[must_use]
    pub const fn lines(&self) -> LineSet {
        self.lines
    }
}

/// Resolves the closure of lines recruited by a move and checks it for
/// fixed pieces.
///
/// Bandaging and grouping each pull further lines into the move, and they
/// interact transitively (a grouped line may itself be glued to a third),
/// so both closures repeat until a fixpoint. The working set only grows
/// and is bounded by nine lines, which guarantees termination.
pub(crate) fn resolve(
    board: &Board,
    grouping: &LineGrouping,
    mv: Move,
) -> Result<PreparedMove, GameError> {
    let axis = mv.axis();
    let mut lines = closure(board, grouping, mv);

    let blocked = board.pieces().any(|piece| {
        lines.contains(axis.cross(piece.position())) && piece.mode().is_fixed()
    });
    if blocked {
        return Err(GameError::Blocked {
            axis,
            line: mv.line(),
        });
    }

    Ok(PreparedMove { mv, lines })
}

/// The closure itself, without the legality check.
pub(crate) fn closure(board: &Board, grouping: &LineGrouping, mv: Move) -> LineSet {
    let axis = mv.axis();
    let mut lines = LineSet::single(mv.line());
    let mut settled = lines.len();

    while !lines.is_full() {
        for side in axis.bandage_sides() {
            close_under_bandaging(board, &mut lines, side);
        }
        grouping.close(&mut lines);
        if lines.len() == settled {
            break;
        }
        settled = lines.len();
    }
    lines
}

/// Recruits the line glued to the working set on one side, if any.
///
/// A piece glued toward `side` whose own line is already in the set pulls
/// the wrapped neighboring line in.
fn close_under_bandaging(board: &Board, lines: &mut LineSet, side: torlock_core::Side) {
    let recruited = board.pieces().find_map(|piece| {
        if !piece.bandaged(side) {
            return None;
        }
        let line = side.line_of(piece.position());
        let neighbor = torus::wrap(i16::from(line) + i16::from(side.line_step()));
        (lines.contains(line) && !lines.contains(neighbor)).then_some(neighbor)
    });
    if let Some(line) = recruited {
        lines.insert(line);
    }
}

#[cfg(test)]
mod tests {
    use torlock_core::{Axis, PieceMode, Position, Side};

    use super::*;

    fn glue_down(board: &mut Board, pos: Position) {
        board.piece_at_mut(pos).toggle_bandage(Side::Down);
        board
            .piece_at_mut(pos.neighbor(Side::Down))
            .toggle_bandage(Side::Up);
    }

    fn glue_right(board: &mut Board, pos: Position) {
        board.piece_at_mut(pos).toggle_bandage(Side::Right);
        board
            .piece_at_mut(pos.neighbor(Side::Right))
            .toggle_bandage(Side::Left);
    }

    #[test]
    fn lone_line_resolves_to_itself() {
        let board = Board::new();
        let grouping = LineGrouping::new();
        let prepared = resolve(&board, &grouping, Move::new(Axis::Row, 4, 1)).unwrap();
        assert_eq!(prepared.lines(), LineSet::single(4));
    }

    #[test]
    fn glue_recruits_the_neighboring_row() {
        let mut board = Board::new();
        glue_down(&mut board, Position::new(3, 2));
        let grouping = LineGrouping::new();

        // Grabbing row 2 drags row 3, and vice versa.
        let from_above = resolve(&board, &grouping, Move::new(Axis::Row, 2, 1)).unwrap();
        assert_eq!(from_above.lines(), LineSet::from_iter([2, 3]));
        let from_below = resolve(&board, &grouping, Move::new(Axis::Row, 3, 1)).unwrap();
        assert_eq!(from_below.lines(), LineSet::from_iter([2, 3]));
    }

    #[test]
    fn glue_chains_transitively() {
        let mut board = Board::new();
        glue_down(&mut board, Position::new(0, 1));
        glue_down(&mut board, Position::new(7, 2));
        let grouping = LineGrouping::new();

        let prepared = resolve(&board, &grouping, Move::new(Axis::Row, 1, 1)).unwrap();
        assert_eq!(prepared.lines(), LineSet::from_iter([1, 2, 3]));
    }

    #[test]
    fn glue_wraps_around_the_edge() {
        let mut board = Board::new();
        glue_down(&mut board, Position::new(5, 8));
        let grouping = LineGrouping::new();

        let prepared = resolve(&board, &grouping, Move::new(Axis::Row, 8, 1)).unwrap();
        assert_eq!(prepared.lines(), LineSet::from_iter([0, 8]));
    }

    #[test]
    fn column_glue_uses_horizontal_sides() {
        let mut board = Board::new();
        glue_right(&mut board, Position::new(6, 0));
        let grouping = LineGrouping::new();

        let prepared = resolve(&board, &grouping, Move::new(Axis::Column, 6, 1)).unwrap();
        assert_eq!(prepared.lines(), LineSet::from_iter([6, 7]));
        // The same glue is irrelevant to row moves.
        let row = resolve(&board, &grouping, Move::new(Axis::Row, 0, 1)).unwrap();
        assert_eq!(row.lines(), LineSet::single(0));
    }

    #[test]
    fn grouping_and_glue_interact_transitively() {
        let mut board = Board::new();
        // Row 5 is glued to row 6; rows 1 and 5 are grouped.
        glue_down(&mut board, Position::new(2, 5));
        let mut grouping = LineGrouping::new();
        grouping.merge(1, 5);

        let prepared = resolve(&board, &grouping, Move::new(Axis::Row, 1, 1)).unwrap();
        assert_eq!(prepared.lines(), LineSet::from_iter([1, 5, 6]));
    }

    #[test]
    fn closure_is_idempotent() {
        let mut board = Board::new();
        glue_down(&mut board, Position::new(0, 0));
        glue_down(&mut board, Position::new(8, 4));
        let mut grouping = LineGrouping::new();
        grouping.merge(1, 4);

        let lines = closure(&board, &grouping, Move::new(Axis::Row, 0, 1));
        // Re-running the closure from any member yields the same set.
        for line in lines.iter() {
            let again = closure(&board, &grouping, Move::new(Axis::Row, line, 1));
            assert_eq!(again, lines);
        }
    }

    #[test]
    fn fixed_piece_blocks_the_whole_closure() {
        let mut board = Board::new();
        glue_down(&mut board, Position::new(4, 6));
        board
            .piece_at_mut(Position::new(0, 7))
            .set_mode(PieceMode::Fixed);
        let grouping = LineGrouping::new();

        // Row 6 is glued to row 7, which holds a fixed piece.
        let err = resolve(&board, &grouping, Move::new(Axis::Row, 6, 1)).unwrap_err();
        assert_eq!(
            err,
            GameError::Blocked {
                axis: Axis::Row,
                line: 6
            }
        );
        // A row outside the closure is unaffected.
        assert!(resolve(&board, &grouping, Move::new(Axis::Row, 0, 1)).is_ok());
    }

    #[test]
    fn fixed_piece_off_the_closure_does_not_block() {
        let mut board = Board::new();
        board
            .piece_at_mut(Position::new(0, 7))
            .set_mode(PieceMode::Fixed);
        let grouping = LineGrouping::new();

        assert!(resolve(&board, &grouping, Move::new(Axis::Row, 6, 1)).is_ok());
        // Column moves through the fixed piece's column are blocked.
        let err = resolve(&board, &grouping, Move::new(Axis::Column, 0, 1)).unwrap_err();
        assert_eq!(
            err,
            GameError::Blocked {
                axis: Axis::Column,
                line: 0
            }
        );
    }

    #[test]
    fn glue_follows_pieces_as_they_move() {
        let mut board = Board::new();
        glue_down(&mut board, Position::new(0, 0));
        let grouping = LineGrouping::new();

        // Move every column down by two, carrying the glue with it.
        board.shift_lines(Axis::Column, LineSet::FULL, 2);

        // The glue now joins rows 2 and 3.
        let prepared = resolve(&board, &grouping, Move::new(Axis::Row, 2, 1)).unwrap();
        assert_eq!(prepared.lines(), LineSet::from_iter([2, 3]));
        let free = resolve(&board, &grouping, Move::new(Axis::Row, 0, 1)).unwrap();
        assert_eq!(free.lines(), LineSet::single(0));
    }
}
