//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management for the
//! falling-block engine. It has **zero dependencies** on UI, networking, or
//! I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical piece streams
//! - **Testable**: Every rule is exercised by unit and integration tests
//! - **Portable**: Runs in any host (GUI, terminal, headless test harness)
//! - **Fast**: Zero-allocation tick and line-clear paths
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision testing, placement and row removal
//! - [`shapes`]: Precomputed 5x5 rotation tables for the 7 piece kinds
//! - [`tetromino`]: The active piece (kind, rotation index, board anchor)
//! - [`source`]: Uniform-random seeded piece generation
//! - [`scoring`]: Line-clear points, leveling and drop-speed rules
//! - [`engine`]: The {Playing, Paused, LineClearing, GameOver} state machine
//! - [`snapshot`]: Read-only observable state for presentation layers
//!
//! # Game Rules
//!
//! - **Rotation**: Each kind carries 4 precomputed states; O never rotates.
//!   A colliding rotation kicks horizontally through 0, +1, -1, +2, -2 and
//!   fails silently when none fits.
//! - **Locking**: A blocked downward move (gravity or soft drop) locks the
//!   piece; locked cells keep a generic marker, not the piece kind.
//! - **Line clears**: A lock that completes rows parks the engine in
//!   LineClearing; gravity resumes only after the host reports its clear
//!   animation finished and the rows are physically removed.
//! - **Scoring**: 40/100/300/1200 base points times the current level;
//!   level is `lines / 10 + 1`, recomputed after every clear. Soft drops
//!   award 1 point per cell, hard drops 2.
//! - **Hold**: Store or swap the active piece, once per spawn.
//!
//! # Example
//!
//! ```
//! use blockfall_core::Engine;
//! use blockfall_types::{GameAction, GamePhase};
//!
//! let mut engine = Engine::new(12345);
//!
//! engine.apply_action(GameAction::MoveRight);
//! engine.apply_action(GameAction::Rotate);
//! engine.apply_action(GameAction::HardDrop);
//!
//! assert!(engine.score() > 0); // hard drop awards points
//! assert_eq!(engine.phase(), GamePhase::Playing);
//! ```
//!
//! # Timing
//!
//! The engine is advanced by [`Engine::on_tick`] with a monotonic timestamp
//! in milliseconds; the host chooses the cadence. Gravity steps once per
//! drop interval (1000 ms through level 3, 700 ms through level 6, 400 ms
//! beyond) and is suspended while paused or line-clearing.

pub mod board;
pub mod engine;
pub mod scoring;
pub mod shapes;
pub mod snapshot;
pub mod source;
pub mod tetromino;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, RowList};
pub use engine::Engine;
pub use shapes::{occupied_cells, shape, ShapeMatrix, KICK_OFFSETS};
pub use snapshot::{GameSnapshot, PieceSnapshot};
pub use source::{PieceSource, SimpleRng};
pub use tetromino::Tetromino;
