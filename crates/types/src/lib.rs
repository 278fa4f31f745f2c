//! Core types shared across the engine
//! This module contains pure data types with no game logic

use serde::Serialize;

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Side length of the square shape matrix (uniform for all piece kinds)
pub const SHAPE_SIZE: usize = 5;

/// Canonical spawn anchor for new pieces
pub const SPAWN_X: i8 = 3;
pub const SPAWN_Y: i8 = 0;

/// Automatic drop intervals by level band (milliseconds)
pub const DROP_INTERVAL_SLOW_MS: u64 = 1000;
pub const DROP_INTERVAL_MEDIUM_MS: u64 = 700;
pub const DROP_INTERVAL_FAST_MS: u64 = 400;

/// Line clear base points, indexed by number of rows cleared (1-4)
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Points per cell for player-driven drops
pub const SOFT_DROP_POINTS: u32 = 1;
pub const HARD_DROP_POINTS: u32 = 2;

/// Lines required to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in table order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Index into the rotation table
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }

    /// Convert to lowercase string (for display layers)
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Player actions accepted while the game is in the Playing phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
    Hold,
}

/// Engine phases
///
/// `LineClearing` suspends gravity until the presentation layer reports its
/// clear animation finished. `GameOver` is terminal; a new session requires
/// re-initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    Playing,
    Paused,
    LineClearing,
    GameOver,
}

/// Marker stored in occupied board cells.
///
/// Piece identity is discarded on lock: the grid keeps a single generic tag,
/// which is all collision detection needs. A display layer that wants
/// per-kind colors must read the active piece before it locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Locked;

/// Cell on the board (None = empty)
pub type Cell = Option<Locked>;
