//! Engine module - the game state machine
//!
//! Orchestrates the phases {Playing, Paused, LineClearing, GameOver} over the
//! board, the active/next/held pieces and the score/level/lines counters.
//! The engine is advanced purely by external calls: discrete player actions,
//! periodic time ticks and the clear-animation-finished callback. It never
//! blocks; LineClearing is a logical suspension of gravity that only the
//! callback lifts.

use blockfall_types::{
    GameAction, GamePhase, HARD_DROP_POINTS, SOFT_DROP_POINTS, SPAWN_X, SPAWN_Y,
};

use crate::board::{Board, RowList};
use crate::scoring::{drop_interval_ms, level_for_lines, line_clear_score};
use crate::shapes::KICK_OFFSETS;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::source::PieceSource;
use crate::tetromino::Tetromino;

/// Complete game engine state
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    source: PieceSource,
    current: Tetromino,
    next: Tetromino,
    held: Option<Tetromino>,
    can_hold: bool,
    score: u32,
    level: u32,
    lines: u32,
    phase: GamePhase,
    /// Full rows recorded at lock time, sorted ascending.
    /// Non-empty only while the phase is LineClearing.
    pending_clear: RowList,
    /// Timestamp of the last automatic drop. None until the first tick after
    /// initialization or pause-resume, which anchors the timer.
    last_drop_ms: Option<u64>,
}

impl Engine {
    /// Create a new engine with the given RNG seed, ready to play
    pub fn new(seed: u32) -> Self {
        let mut source = PieceSource::new(seed);
        let current = source.next();
        let next = source.next();
        Self {
            board: Board::new(),
            source,
            current,
            next,
            held: None,
            can_hold: true,
            score: 0,
            level: 1,
            lines: 0,
            phase: GamePhase::Playing,
            pending_clear: RowList::new(),
            last_drop_ms: None,
        }
    }

    /// Reset to a fresh session: empty board, zeroed counters, no held
    /// piece, freshly spawned current and next pieces. Always leaves the
    /// phase at Playing; this is also the restart path from GameOver.
    pub fn initialize_game(&mut self) {
        self.board.clear();
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.held = None;
        self.can_hold = true;
        self.pending_clear.clear();
        self.current = self.source.next();
        self.next = self.source.next();
        self.phase = GamePhase::Playing;
        self.last_drop_ms = None;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_piece(&self) -> Tetromino {
        self.current
    }

    pub fn next_piece(&self) -> Tetromino {
        self.next
    }

    pub fn held_piece(&self) -> Option<Tetromino> {
        self.held
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Rows awaiting physical removal; non-empty only during LineClearing
    pub fn pending_clear_rows(&self) -> &[usize] {
        &self.pending_clear
    }

    /// Advance gravity. No-op unless Playing.
    ///
    /// `now_ms` is a monotonic timestamp supplied by the host scheduler.
    /// The first tick after initialization or pause-resume anchors the drop
    /// timer; after that, each elapsed drop interval performs one automatic
    /// downward move (locking the piece when the move is blocked).
    pub fn on_tick(&mut self, now_ms: u64) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let last = match self.last_drop_ms {
            Some(t) => t,
            None => {
                self.last_drop_ms = Some(now_ms);
                return;
            }
        };
        if now_ms.saturating_sub(last) >= drop_interval_ms(self.level) {
            self.last_drop_ms = Some(now_ms);
            if !self.try_move(0, 1) {
                self.lock_piece();
            }
        }
    }

    /// Apply a player action. Ignored unless Playing.
    pub fn apply_action(&mut self, action: GameAction) {
        if self.phase != GamePhase::Playing {
            return;
        }
        match action {
            GameAction::MoveLeft => {
                self.try_move(-1, 0);
            }
            GameAction::MoveRight => {
                self.try_move(1, 0);
            }
            GameAction::SoftDrop => {
                if self.try_move(0, 1) {
                    self.score += SOFT_DROP_POINTS;
                } else {
                    self.lock_piece();
                }
            }
            GameAction::Rotate => self.rotate_with_kicks(),
            GameAction::HardDrop => {
                while self.try_move(0, 1) {
                    self.score += HARD_DROP_POINTS;
                }
                self.lock_piece();
            }
            GameAction::Hold => self.hold(),
        }
    }

    /// Toggle Playing <-> Paused. No effect in LineClearing or GameOver.
    /// Resuming re-anchors the drop timer so paused wall-time is not
    /// caught up as a burst of drops.
    pub fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Playing => self.phase = GamePhase::Paused,
            GamePhase::Paused => {
                self.phase = GamePhase::Playing;
                self.last_drop_ms = None;
            }
            GamePhase::LineClearing | GamePhase::GameOver => {}
        }
    }

    /// Presentation-layer callback: the clear visual has finished.
    ///
    /// Removes the pending rows, applies the line-clear score formula
    /// (using the level at the time of the clear), recomputes the level,
    /// spawns the next piece and resumes Playing unless the spawn failed.
    pub fn on_clear_animation_finished(&mut self) {
        if self.phase != GamePhase::LineClearing {
            return;
        }
        self.board.remove_rows(&self.pending_clear);
        let cleared = self.pending_clear.len();
        self.score += line_clear_score(cleared, self.level);
        self.lines += cleared as u32;
        self.level = level_for_lines(self.lines);
        self.pending_clear.clear();
        self.phase = GamePhase::Playing;
        self.spawn_next();
    }

    /// Try to shift the active piece; reverts nothing on failure
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let shape = self.current.current_shape();
        if self
            .board
            .is_valid_position(shape, self.current.x + dx, self.current.y + dy)
        {
            self.current.offset(dx, dy);
            true
        } else {
            false
        }
    }

    /// Rotate the active piece, kicking horizontally if needed.
    ///
    /// Offsets are tried in the fixed order 0, +1, -1, +2, -2 against the
    /// next rotation's shape; the first valid one is committed together with
    /// the rotation. If none fits the rotation fails silently.
    fn rotate_with_kicks(&mut self) {
        let shape = self.current.peek_next_shape();
        for &offset in KICK_OFFSETS.iter() {
            if self
                .board
                .is_valid_position(shape, self.current.x + offset, self.current.y)
            {
                self.current.offset(offset, 0);
                self.current.rotate();
                return;
            }
        }
    }

    /// Fix the active piece into the grid and route by full-row count:
    /// none found spawns immediately, otherwise the sorted row list is
    /// recorded and the engine parks in LineClearing until the external
    /// clear-finished signal arrives.
    fn lock_piece(&mut self) {
        self.board.place_piece(&self.current);
        let mut rows = self.board.find_full_rows();
        if rows.is_empty() {
            self.spawn_next();
        } else {
            rows.sort_unstable();
            self.pending_clear = rows;
            self.phase = GamePhase::LineClearing;
        }
    }

    /// Promote next to current and draw a fresh next piece.
    /// A blocked spawn position is the one terminal condition: GameOver.
    fn spawn_next(&mut self) {
        self.current = self.next;
        self.next = self.source.next();
        self.can_hold = true;
        if !self.piece_fits(&self.current) {
            self.phase = GamePhase::GameOver;
        }
    }

    /// Set aside or swap the active piece, once per spawn
    fn hold(&mut self) {
        if !self.can_hold {
            return;
        }
        match self.held.take() {
            Some(mut held) => {
                held.set_position(SPAWN_X, SPAWN_Y);
                let swapped_out = std::mem::replace(&mut self.current, held);
                self.held = Some(swapped_out);
                if !self.piece_fits(&self.current) {
                    self.phase = GamePhase::GameOver;
                }
            }
            None => {
                self.held = Some(self.current);
                self.spawn_next();
            }
        }
        self.can_hold = false;
    }

    fn piece_fits(&self, piece: &Tetromino) -> bool {
        self.board
            .is_valid_position(piece.current_shape(), piece.x, piece.y)
    }

    /// Write the full observable state into a reusable snapshot
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.current = PieceSnapshot::from(self.current);
        out.next = PieceSnapshot::from(self.next);
        out.held = self.held.map(PieceSnapshot::from);
        out.can_hold = self.can_hold;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.phase = self.phase;
        out.pending_clear_rows.clear();
        out.pending_clear_rows
            .extend(self.pending_clear.iter().copied());
    }

    /// Allocate a fresh snapshot of the observable state
    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(1)
    }
}
