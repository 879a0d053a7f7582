//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`tetris2048_types::GameAction`].
//! Intentionally independent of any UI framework; the game loop decides
//! how to apply the actions.

pub mod map;

pub use tetris2048_types as types;

pub use map::{handle_key_event, should_quit};
