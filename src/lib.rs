//! Tetris 2048 (workspace facade crate).
//!
//! This package keeps a single `tui_tetris_2048::{core,input,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use tetris2048_core as core;
pub use tetris2048_input as input;
pub use tetris2048_term as term;
pub use tetris2048_types as types;
