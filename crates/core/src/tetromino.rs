//! Tetromino - one active piece instance
//!
//! A piece is its kind, a rotation index and the board-anchored position of
//! its shape matrix's top-left corner. Movement setters do not validate; the
//! engine checks candidate positions against the board before committing.

use blockfall_types::{PieceKind, SPAWN_X, SPAWN_Y};

use crate::shapes::{self, ShapeMatrix};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    /// Rotation index 0-3; fixed for O
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at the canonical spawn anchor
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Shape matrix for the current rotation state
    pub fn current_shape(&self) -> &'static ShapeMatrix {
        shapes::shape(self.kind, self.rotation)
    }

    /// Shape matrix for the next (not yet committed) rotation state.
    /// Never mutates the piece.
    pub fn peek_next_shape(&self) -> &'static ShapeMatrix {
        shapes::shape(self.kind, (self.rotation + 1) % 4)
    }

    /// Advance to the next rotation state. No-op for O.
    pub fn rotate(&mut self) {
        if self.kind == PieceKind::O {
            return;
        }
        self.rotation = (self.rotation + 1) % 4;
    }

    /// Shift the anchor by (dx, dy). No validity check.
    pub fn offset(&mut self, dx: i8, dy: i8) {
        self.x += dx;
        self.y += dy;
    }

    /// Move the anchor to an absolute position. No validity check.
    pub fn set_position(&mut self, x: i8, y: i8) {
        self.x = x;
        self.y = y;
    }
}
