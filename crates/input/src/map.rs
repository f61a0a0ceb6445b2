//! Key mapping from terminal events to slide directions.
//!
//! Arrow keys and the classic single-letter commands (U/D/L/R, any case) both
//! work. The letters follow the move prompt, so `L` is Left and `R` is Right;
//! vim-style keys are deliberately not bound because `l` would collide.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a slide direction.
pub fn handle_key_event(key: KeyEvent) -> Option<Direction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('u') | KeyCode::Char('U') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('l') | KeyCode::Char('L') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('r') | KeyCode::Char('R') => Some(Direction::Right),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
