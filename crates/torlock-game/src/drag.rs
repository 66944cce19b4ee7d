//! Drag gesture geometry.
//!
//! Gesture adapters feed raw pixel coordinates in here; everything below
//! is pure arithmetic plus calls into the engine. While a drag is live the
//! game sits in the `Moving` state and nothing canonical mutates: the
//! preview is an offset overlay, and wraparound ghosts are drawn at fixed
//! whole-board cell offsets rather than materialized as extra pieces.
//! Committing executes a real move; cancelling just drops the overlay.

use torlock_core::{Axis, LineSet, Move, torus::SIZE};

use crate::{Game, GameError};

/// Whole-board cell offsets at which ghost copies of the moving lines are
/// drawn, so motion past an edge appears continuous.
pub const GHOST_OFFSETS: [i16; 4] = [-18, -9, 9, 18];

/// Largest commit delta a single drag can produce.
const MAX_DRAG_DELTA: f32 = 10.0;

/// One in-progress drag.
///
/// Created when a gesture has travelled far enough to call its direction,
/// consumed by [`commit`](Self::commit) or [`cancel`](Self::cancel).
///
/// # Examples
///
/// ```
/// use torlock_game::{DragAction, Game};
///
/// let mut game = Game::new();
/// // A 540-pixel board; grab (200, 100) and pull right.
/// let mut drag = DragAction::begin(&mut game, (200.0, 100.0), (24.0, 3.0), 540.0).unwrap();
/// assert!(game.state().is_moving());
///
/// // Travel of two cell widths commits a +2 row move.
/// drag.update((120.0, 0.0));
/// drag.commit(&mut game, 540.0).unwrap();
/// assert_eq!(game.move_history(), ["2R2"]);
/// ```
#[derive(Debug, Clone)]
pub struct DragAction {
    axis: Axis,
    line: u8,
    lines: LineSet,
    offset: f32,
}

impl DragAction {
    /// Starts a drag from `start` (pixels relative to the board's
    /// top-left corner) whose initial travel is `travel`, on a square
    /// board `board_size` pixels wide.
    ///
    /// The dominant travel component picks the axis; the start position's
    /// cross coordinate picks the grabbed line. Returns `None` when the
    /// game is not idle.
    pub fn begin(
        game: &mut Game,
        start: (f32, f32),
        travel: (f32, f32),
        board_size: f32,
    ) -> Option<Self> {
        if !game.begin_drag() {
            return None;
        }
        let axis = if travel.0.abs() > travel.1.abs() {
            Axis::Row
        } else {
            Axis::Column
        };
        let cross = match axis {
            Axis::Row => start.1,
            Axis::Column => start.0,
        };
        let line = grid_line(cross, board_size);
        let lines = game.moving_lines(Move::new(axis, line, 0));
        Some(Self {
            axis,
            line,
            lines,
            offset: 0.0,
        })
    }

    /// The axis the drag settled on.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// The grabbed line.
    #[must_use]
    pub const fn line(&self) -> u8 {
        self.line
    }

    /// Every line moving with the grabbed one, for preview rendering.
    #[must_use]
    pub const fn lines(&self) -> LineSet {
        self.lines
    }

    /// The current preview offset in pixels along the drag axis.
    #[must_use]
    pub const fn offset(&self) -> f32 {
        self.offset
    }

    /// Updates the preview offset from the latest pointer travel.
    pub fn update(&mut self, travel: (f32, f32)) {
        self.offset = match self.axis {
            Axis::Row => travel.0,
            Axis::Column => travel.1,
        };
    }

    /// The whole-cell delta the current offset would commit.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn delta(&self, board_size: f32) -> i8 {
        let cells = (self.offset * f32::from(SIZE) / board_size).round();
        cells.clamp(-MAX_DRAG_DELTA, MAX_DRAG_DELTA) as i8
    }

    /// Ends the drag and executes the move it settled on.
    ///
    /// A drag that rounds to zero cells executes nothing and returns
    /// `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Blocked`] when the move is blocked; the
    /// preview is discarded and canonical state is untouched.
    pub fn commit(self, game: &mut Game, board_size: f32) -> Result<bool, GameError> {
        let delta = self.delta(board_size);
        game.end_drag();
        if delta == 0 {
            return Ok(false);
        }
        game.play(Move::new(self.axis, self.line, delta))
    }

    /// Ends the drag without executing anything.
    pub fn cancel(self, game: &mut Game) {
        game.end_drag();
    }
}

/// The line under a pixel offset on a board `size` pixels wide, clamped
/// onto the grid.
#[must_use]
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn grid_line(offset: f32, size: f32) -> u8 {
    let line = (offset * f32::from(SIZE) / size).floor();
    line.clamp(0.0, f32::from(SIZE - 1)) as u8
}
