//! The puzzle state and its operations.

use torlock_core::{Axis, Bandages, LineSet, Move, Piece, PieceMode, Position, Side};
use torlock_scramble::MoveSource;

use crate::{
    Board, Challenge, DecodeError, GameConfig, GameError, LineGrouping, PreparedMove, ProgressStore,
    codec, resolver,
};

/// Attempts allowed per requested scramble move before the scramble gives
/// up. Keeps degenerate bandaged boards from looping forever.
const SCRAMBLE_ATTEMPT_FACTOR: usize = 100;

/// What the game is currently doing.
///
/// The state gates which operations take effect: moves, resets, undo, and
/// scrambles only run from `Idle`; bandage, mode, and grouping edits only
/// apply in `Editing`. Operations invoked from the wrong state are silent
/// no-ops: they represent adapter races, not data errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum GameState {
    /// Waiting for input.
    #[default]
    Idle,
    /// A drag is in progress.
    Moving,
    /// A scramble is running.
    Scrambling,
    /// The board layout is being edited.
    Editing,
}

/// How an executed move is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MoveKind {
    /// A user move, appended to the undoable history.
    User,
    /// A scramble move, kept on the separate scramble list.
    Scramble,
    /// An internal replay (undo), recorded nowhere.
    Forget,
}

/// A Torlock game session.
///
/// Owns the 81-piece board, the row and column groupings, and both move
/// histories. All mutation goes through methods here; `prepare_move` is
/// the only entry point for move legality, for users and scrambles alike.
///
/// # Example
///
/// ```
/// use torlock_core::{Axis, Move};
/// use torlock_game::Game;
///
/// let mut game = Game::new();
/// assert!(game.is_solved());
///
/// game.play(Move::new(Axis::Row, 0, 3)).unwrap();
/// assert!(!game.is_solved());
/// assert_eq!(game.move_count(), 1);
///
/// game.undo_move().unwrap();
/// assert!(game.is_solved());
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    row_grouping: LineGrouping,
    col_grouping: LineGrouping,
    state: GameState,
    move_history: Vec<String>,
    scramble_history: Vec<String>,
}

impl Game {
    /// Creates a solved game with no edits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            row_grouping: LineGrouping::new(),
            col_grouping: LineGrouping::new(),
            state: GameState::Idle,
            move_history: Vec::new(),
            scramble_history: Vec::new(),
        }
    }

    /// The current state tag.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// The piece arena.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The grouping for one axis.
    #[must_use]
    pub const fn grouping(&self, axis: Axis) -> &LineGrouping {
        match axis {
            Axis::Row => &self.row_grouping,
            Axis::Column => &self.col_grouping,
        }
    }

    fn grouping_mut(&mut self, axis: Axis) -> &mut LineGrouping {
        match axis {
            Axis::Row => &mut self.row_grouping,
            Axis::Column => &mut self.col_grouping,
        }
    }

    /// Whether every block is color-homogeneous and no piece has residual
    /// rotation.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Number of moves on the undoable history.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.move_history.len()
    }

    /// The undoable history, oldest first, as notation strings.
    #[must_use]
    pub fn move_history(&self) -> &[String] {
        &self.move_history
    }

    /// The scramble that produced the current position, as notation
    /// strings.
    #[must_use]
    pub fn scramble_history(&self) -> &[String] {
        &self.scramble_history
    }

    /// Whether the board has been scrambled since the last reset.
    #[must_use]
    pub fn has_scramble(&self) -> bool {
        !self.scramble_history.is_empty()
    }

    /// Resolves the full set of lines a move would drag along and checks
    /// it for fixed pieces. Pure: no state changes.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Blocked`] when the closure reaches a fixed
    /// piece.
    pub fn prepare_move(&self, mv: Move) -> Result<PreparedMove, GameError> {
        resolver::resolve(&self.board, self.grouping(mv.axis()), mv)
    }

    /// The closure of lines a grab on `mv`'s line would drag along,
    /// without the legality check. Used for drag previews.
    #[must_use]
    pub fn moving_lines(&self, mv: Move) -> LineSet {
        resolver::closure(&self.board, self.grouping(mv.axis()), mv)
    }

    /// Prepares and executes one user move.
    ///
    /// Returns `Ok(false)` without touching anything when the game is not
    /// idle or the move has zero delta.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Blocked`] when the move's closure reaches a
    /// fixed piece; nothing is mutated in that case.
    pub fn play(&mut self, mv: Move) -> Result<bool, GameError> {
        if !self.state.is_idle() || !mv.is_effective() {
            return Ok(false);
        }
        let prepared = self.prepare_move(mv)?;
        Ok(self.execute_move(&prepared))
    }

    /// Executes a prepared user move.
    ///
    /// A move that exactly inverts the previous history entry is treated
    /// as an undo: the entry is popped instead of a new one accumulating.
    /// Returns `false` without touching anything when the game is not
    /// idle or the move has zero delta.
    pub fn execute_move(&mut self, prepared: &PreparedMove) -> bool {
        let mv = prepared.as_move();
        if !self.state.is_idle() || !mv.is_effective() {
            return false;
        }
        if let Some(last) = self.last_move()
            && last.cancels(mv)
            && matches!(self.undo_move(), Ok(true))
        {
            return true;
        }
        self.apply(prepared, MoveKind::User);
        true
    }

    /// Reverses the most recent user move.
    ///
    /// Returns `Ok(false)` when there is nothing to undo or the game is
    /// not idle.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Notation`] if the stored entry is corrupt and
    /// [`GameError::Blocked`] if the inverse is blocked, which is possible
    /// only when the configuration was edited after the move. History is left
    /// intact on error.
    pub fn undo_move(&mut self) -> Result<bool, GameError> {
        if !self.state.is_idle() {
            return Ok(false);
        }
        let Some(notation) = self.move_history.last() else {
            return Ok(false);
        };
        let last: Move = notation.parse().map_err(GameError::from)?;
        let prepared = self.prepare_move(last.inverse())?;
        self.apply(&prepared, MoveKind::Forget);
        self.move_history.pop();
        Ok(true)
    }

    /// Puts every piece back on its origin cell and clears both
    /// histories. Only runs from idle.
    pub fn reset(&mut self) {
        if !self.state.is_idle() {
            return;
        }
        self.board.reset_positions();
        self.move_history.clear();
        self.scramble_history.clear();
    }

    /// Applies `count` random legal moves from `source`.
    ///
    /// Candidates are tested with the same [`prepare_move`] check as
    /// manual moves; blocked ones are discarded, under an overall attempt
    /// budget so heavily bandaged boards still terminate. The board is
    /// reset first, the moves land on the scramble history, and the user
    /// history ends empty. Returns the number of moves applied, which is
    /// less than `count` only when the budget ran out. Only runs from
    /// idle (returns 0 otherwise).
    ///
    /// [`prepare_move`]: Self::prepare_move
    pub fn scramble(&mut self, count: usize, source: &mut MoveSource) -> usize {
        if !self.state.is_idle() || count == 0 {
            return 0;
        }
        self.reset();
        self.state = GameState::Scrambling;
        log::debug!("scrambling: {count} moves requested");

        let budget = count.saturating_mul(SCRAMBLE_ATTEMPT_FACTOR);
        let mut applied = 0;
        let mut attempts = 0;
        while applied < count && attempts < budget {
            attempts += 1;
            let mv = source.next_move();
            if let Ok(prepared) = self.prepare_move(mv) {
                self.apply(&prepared, MoveKind::Scramble);
                applied += 1;
            }
        }
        if applied < count {
            log::warn!("scramble gave up after {attempts} attempts: {applied}/{count} moves applied");
        }

        self.state = GameState::Idle;
        self.move_history.clear();
        applied
    }

    /// Enters editing from idle. Returns whether the transition happened.
    pub fn start_editing(&mut self) -> bool {
        if self.state.is_idle() {
            self.state = GameState::Editing;
            true
        } else {
            false
        }
    }

    /// Leaves editing back to idle. Returns whether the transition
    /// happened.
    pub fn finish_editing(&mut self) -> bool {
        if self.state.is_editing() {
            self.state = GameState::Idle;
            true
        } else {
            false
        }
    }

    pub(crate) fn begin_drag(&mut self) -> bool {
        if self.state.is_idle() {
            self.state = GameState::Moving;
            true
        } else {
            false
        }
    }

    pub(crate) fn end_drag(&mut self) {
        if self.state.is_moving() {
            self.state = GameState::Idle;
        }
    }

    /// Toggles the glue between the piece at `pos` and its neighbor on
    /// `side`, keeping the two mirrored flags in step.
    ///
    /// Refused while either endpoint is rotating, and outside editing.
    pub fn toggle_bandage(&mut self, pos: Position, side: Side) {
        if !self.state.is_editing() {
            return;
        }
        // Normalize so the flag owner is the right/down endpoint's partner.
        let (pos, side) = match side {
            Side::Right | Side::Down => (pos, side),
            Side::Left | Side::Up => (pos.neighbor(side), side.opposite()),
        };
        let neighbor = pos.neighbor(side);
        if self.board.piece_at(pos).mode().is_rotating()
            || self.board.piece_at(neighbor).mode().is_rotating()
        {
            return;
        }
        self.board.piece_at_mut(pos).toggle_bandage(side);
        self.board
            .piece_at_mut(neighbor)
            .toggle_bandage(side.opposite());
    }

    /// Advances the piece at `pos` through the free → fixed → rotating
    /// cycle; bandaged pieces skip rotating. Only applies in editing.
    pub fn cycle_mode(&mut self, pos: Position) {
        if !self.state.is_editing() {
            return;
        }
        let piece = self.board.piece_at_mut(pos);
        piece.set_mode(piece.mode().cycled(piece.is_bandaged()));
    }

    /// Joins two lines of one axis into a group. Only applies in editing.
    pub fn merge_lines(&mut self, axis: Axis, a: u8, b: u8) {
        if !self.state.is_editing() {
            return;
        }
        self.grouping_mut(axis).merge(a, b);
    }

    /// Deletes the group containing `line` on `axis`, if any. Only
    /// applies in editing.
    pub fn remove_line_group(&mut self, axis: Axis, line: u8) {
        if !self.state.is_editing() {
            return;
        }
        self.grouping_mut(axis).remove_group(line);
    }

    /// Clears every group on `axis`. Only applies in editing.
    pub fn reset_grouping(&mut self, axis: Axis) {
        if !self.state.is_editing() {
            return;
        }
        self.grouping_mut(axis).reset();
    }

    /// Clears every piece edit and both groupings. Only applies in
    /// editing.
    pub fn revert_edits(&mut self) {
        if !self.state.is_editing() {
            return;
        }
        self.board.revert_edits();
        self.row_grouping.reset();
        self.col_grouping.reset();
    }

    /// Snapshots the current configuration (piece flags and groupings,
    /// not positions or history) as codec strings.
    #[must_use]
    pub fn config(&self) -> GameConfig {
        GameConfig {
            fixed: self.flag_subset(|piece| piece.mode().is_fixed()),
            rotating: self.flag_subset(|piece| piece.mode().is_rotating()),
            up: self.flag_subset(|piece| piece.bandaged(Side::Up)),
            right: self.flag_subset(|piece| piece.bandaged(Side::Right)),
            down: self.flag_subset(|piece| piece.bandaged(Side::Down)),
            left: self.flag_subset(|piece| piece.bandaged(Side::Left)),
            rows: codec::encode_groups(self.row_grouping.groups()),
            cols: codec::encode_groups(self.col_grouping.groups()),
        }
    }

    fn flag_subset(&self, pred: impl Fn(&Piece) -> bool) -> String {
        codec::encode_subset(
            self.board
                .pieces()
                .filter(|piece| pred(piece))
                .map(Piece::origin_index),
        )
    }

    /// Rebuilds the game from a configuration snapshot.
    ///
    /// Every field is decoded before anything is applied, so a bad field
    /// leaves the game untouched. On success all pieces return to their
    /// origins and both histories are cleared. A piece listed as both
    /// fixed and rotating comes back rotating.
    ///
    /// # Errors
    ///
    /// Returns the first field's [`DecodeError`], with no partial state.
    pub fn load_config(&mut self, config: &GameConfig) -> Result<(), DecodeError> {
        let fixed = codec::decode_subset(&config.fixed)?;
        let rotating = codec::decode_subset(&config.rotating)?;
        let sides = [
            (Side::Up, codec::decode_subset(&config.up)?),
            (Side::Right, codec::decode_subset(&config.right)?),
            (Side::Down, codec::decode_subset(&config.down)?),
            (Side::Left, codec::decode_subset(&config.left)?),
        ];
        let rows = codec::decode_groups(&config.rows)?;
        let cols = codec::decode_groups(&config.cols)?;

        for piece in self.board.pieces_mut() {
            let index = piece.origin_index();
            let mut mode = PieceMode::Free;
            if fixed.binary_search(&index).is_ok() {
                mode = PieceMode::Fixed;
            }
            if rotating.binary_search(&index).is_ok() {
                mode = PieceMode::Rotating;
            }
            piece.set_mode(mode);

            let mut bandages = Bandages::empty();
            for (side, subset) in &sides {
                if subset.binary_search(&index).is_ok() {
                    bandages |= Bandages::from_side(*side);
                }
            }
            piece.set_bandages(bandages);
        }
        self.row_grouping.set_groups(rows);
        self.col_grouping.set_groups(cols);

        self.board.reset_positions();
        self.move_history.clear();
        self.scramble_history.clear();
        Ok(())
    }

    /// The catalog entry whose configuration structurally equals the
    /// current one, if any.
    #[must_use]
    pub fn matching_challenge<'a>(&self, catalog: &'a [Challenge]) -> Option<&'a Challenge> {
        let config = self.config();
        catalog.iter().find(|challenge| challenge.config == config)
    }

    /// Writes both histories to `store` under keys derived from the
    /// current configuration.
    ///
    /// An empty scramble clears both keys; an empty user history clears
    /// its key.
    pub fn save_progress(&self, store: &mut dyn ProgressStore) {
        let scramble_key = self.scramble_key();
        if self.scramble_history.is_empty() {
            store.remove(&scramble_key);
        } else {
            store.set(&scramble_key, &self.scramble_history.join(","));
        }

        let moves_key = self.moves_key();
        if self.scramble_history.is_empty() || self.move_history.is_empty() {
            store.remove(&moves_key);
        } else {
            store.set(&moves_key, &self.move_history.join(","));
        }
    }

    /// Replays stored progress for the current configuration.
    ///
    /// Replays the scramble, then the user moves, from a freshly reset
    /// board. Missing progress resets the board and returns `Ok(false)`.
    /// Only runs from idle (returns `Ok(false)` otherwise).
    ///
    /// # Errors
    ///
    /// An entry that fails to parse or is blocked aborts the restore: the
    /// offending entry is logged, the board fully resets, and the error is
    /// returned. A partial replay is never left in place.
    pub fn restore_progress(&mut self, store: &dyn ProgressStore) -> Result<bool, GameError> {
        if !self.state.is_idle() {
            return Ok(false);
        }
        let (Some(scramble), Some(moves)) = (
            store.get(&self.scramble_key()),
            store.get(&self.moves_key()),
        ) else {
            self.reset();
            return Ok(false);
        };

        self.board.reset_positions();
        self.move_history.clear();
        self.scramble_history.clear();

        for (notation, kind) in scramble
            .split(',')
            .map(|n| (n, MoveKind::Scramble))
            .chain(moves.split(',').map(|n| (n, MoveKind::User)))
        {
            if let Err(err) = self.replay_entry(notation, kind) {
                log::error!("cannot replay stored entry {notation:?}: {err}");
                self.reset();
                return Err(err);
            }
        }
        Ok(true)
    }

    fn replay_entry(&mut self, notation: &str, kind: MoveKind) -> Result<(), GameError> {
        let mv: Move = notation.parse().map_err(GameError::from)?;
        let prepared = self.prepare_move(mv)?;
        self.apply(&prepared, kind);
        Ok(())
    }

    fn scramble_key(&self) -> String {
        format!("scramble:{}", self.progress_tag())
    }

    fn moves_key(&self) -> String {
        format!("moves:{}", self.progress_tag())
    }

    // Deterministic identity of the current configuration. Adapters may
    // hash it; the engine only needs it stable.
    fn progress_tag(&self) -> String {
        let config = self.config();
        [
            config.fixed,
            config.rotating,
            config.up,
            config.right,
            config.down,
            config.left,
            config.rows,
            config.cols,
        ]
        .join("_")
    }

    fn last_move(&self) -> Option<Move> {
        self.move_history.last()?.parse().ok()
    }

    fn apply(&mut self, prepared: &PreparedMove, kind: MoveKind) {
        let mv = prepared.as_move();
        if !mv.is_effective() {
            return;
        }
        self.board.shift_lines(mv.axis(), prepared.lines(), mv.delta());
        match kind {
            MoveKind::User => self.move_history.push(mv.to_string()),
            MoveKind::Scramble => self.scramble_history.push(mv.to_string()),
            MoveKind::Forget => {}
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
