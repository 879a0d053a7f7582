//! Terminal rendering for the game.
//!
//! [`GameView`] is pure and maps game state to a [`FrameBuffer`];
//! [`TerminalRenderer`] owns the real terminal and flushes frames to it.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
