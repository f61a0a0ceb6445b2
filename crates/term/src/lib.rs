//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that can be flushed to a terminal
//! backend, instead of going through a widget/layout framework.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the board -> framebuffer mapping pure so it can be unit-tested
//! - Allow precise control over the table geometry (4-character-wide cells)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::TerminalRenderer;
