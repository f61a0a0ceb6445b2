//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Direction`] slides and detects
//! the quit chord. Unknown keys map to `None` and are simply ignored by the
//! session loop, which is the raw-mode equivalent of re-prompting.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
