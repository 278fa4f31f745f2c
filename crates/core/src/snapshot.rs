//! Read-only observable state for presentation layers
//!
//! The engine never pushes state; a host polls these snapshots (or the
//! individual getters) after each action, tick or callback. Everything here
//! is serde-serializable so the surface can cross an IPC or FFI boundary
//! unchanged.

use serde::Serialize;

use blockfall_types::{GamePhase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

use crate::board::RowList;
use crate::tetromino::Tetromino;

/// One piece as seen by a renderer: kind, rotation state and board anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl From<Tetromino> for PieceSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Complete observable engine state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// 0 = empty, 1 = locked; row 0 is the top of the board
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub current: PieceSnapshot,
    pub next: PieceSnapshot,
    pub held: Option<PieceSnapshot>,
    pub can_hold: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub phase: GamePhase,
    /// Non-empty only while the phase is LineClearing
    pub pending_clear_rows: RowList,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let placeholder = PieceSnapshot {
            kind: PieceKind::I,
            rotation: 0,
            x: 0,
            y: 0,
        };
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current: placeholder,
            next: placeholder,
            held: None,
            can_hold: true,
            score: 0,
            level: 1,
            lines: 0,
            phase: GamePhase::Playing,
            pending_clear_rows: RowList::new(),
        }
    }
}
