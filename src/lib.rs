//! Blockfall (workspace facade crate).
//!
//! This package keeps the `blockfall::{core,types}` public API stable while
//! the implementation lives in dedicated crates under `crates/`.

pub use blockfall_core as core;
pub use blockfall_types as types;
