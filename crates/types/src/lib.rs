//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, input mapping, terminal rendering).
//!
//! # Grid dimensions
//!
//! The playfield is a fixed 4x4 grid:
//!
//! - **Rows**: 4 (indexed 0-3, top to bottom)
//! - **Columns**: 4 (indexed 0-3, left to right)
//! - A cell holds `0` (empty) or a power of two (a tile)
//!
//! # Game modes
//!
//! Each mode binds a win target and a spawn bias. New tiles are decided by a
//! uniform roll in `1..=10`; rolls inside the mode's 2-tile band produce a 2,
//! rolls above it produce a 4:
//!
//! | Mode | Win target | 2-tile rolls | 4-tile rolls |
//! |--------|-----------|--------------|--------------|
//! | Easy | 256 | 1-5 | 6-10 |
//! | Medium | 512 | 1-7 | 8-10 |
//! | Hard | 1024 | 1-9 | 10 |
//!
//! Harder modes raise the target and hand out fewer 4s, so the climb is
//! longer rather than luckier.
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Difficulty, Direction, GRID_SIZE};
//!
//! // Parse a mode selection (case-insensitive)
//! let mode = Difficulty::from_str("e").unwrap();
//! assert_eq!(mode, Difficulty::Easy);
//! assert_eq!(mode.win_target(), 256);
//!
//! // Parse a move command
//! let dir = Direction::from_char('L').unwrap();
//! assert_eq!(dir, Direction::Left);
//!
//! // Grid dimensions
//! assert_eq!(GRID_SIZE, 4);
//! ```

/// Grid side length in cells (the board is `GRID_SIZE` x `GRID_SIZE`)
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Number of tiles spawned when a new game is created
pub const INITIAL_TILES: usize = 2;

/// Lowest value of the spawn roll (inclusive)
pub const SPAWN_ROLL_MIN: u32 = 1;

/// Highest value of the spawn roll (inclusive)
pub const SPAWN_ROLL_MAX: u32 = 10;

/// The three game modes
///
/// A mode is chosen once at game start and never changes. It decides the
/// value a tile must reach to win and how often a spawned tile is a 4
/// rather than a 2 (see the crate-level table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse a mode from string (case-insensitive)
    ///
    /// Accepts the single letters used by the mode prompt as well as full
    /// names: `"e"` / `"easy"`, `"m"` / `"medium"`, `"h"` / `"hard"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("E"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("medium"), Some(Difficulty::Medium));
    /// assert_eq!(Difficulty::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "e" | "easy" => Some(Difficulty::Easy),
            "m" | "medium" => Some(Difficulty::Medium),
            "h" | "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// The tile value that wins the game
    pub fn win_target(&self) -> u32 {
        match self {
            Difficulty::Easy => 256,
            Difficulty::Medium => 512,
            Difficulty::Hard => 1024,
        }
    }

    /// Highest spawn roll that still yields a 2-tile
    ///
    /// Rolls in `SPAWN_ROLL_MIN..=two_roll_cap()` spawn a 2; anything above
    /// spawns a 4.
    pub fn two_roll_cap(&self) -> u32 {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 7,
            Difficulty::Hard => 9,
        }
    }
}

/// The four slide directions
///
/// A direction is stateless; it only selects which edge tiles are pushed
/// toward. The cycle of 90-degree rotations maps any direction onto any
/// other, which the engine uses to run a single canonical slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in prompt order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse a single move command character (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_char('u'), Some(Direction::Up));
    /// assert_eq!(Direction::from_char('R'), Some(Direction::Right));
    /// assert_eq!(Direction::from_char('x'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'u' => Some(Direction::Up),
            'd' => Some(Direction::Down),
            'l' => Some(Direction::Left),
            'r' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_letters_and_names() {
        assert_eq!(Difficulty::from_str("E"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str("e"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str("M"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_str("hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str(""), None);
        assert_eq!(Difficulty::from_str("easy "), None);
    }

    #[test]
    fn difficulty_tables_match_mode_prompt() {
        assert_eq!(Difficulty::Easy.win_target(), 256);
        assert_eq!(Difficulty::Medium.win_target(), 512);
        assert_eq!(Difficulty::Hard.win_target(), 1024);

        assert_eq!(Difficulty::Easy.two_roll_cap(), 5);
        assert_eq!(Difficulty::Medium.two_roll_cap(), 7);
        assert_eq!(Difficulty::Hard.two_roll_cap(), 9);
    }

    #[test]
    fn direction_parses_move_commands() {
        assert_eq!(Direction::from_char('u'), Some(Direction::Up));
        assert_eq!(Direction::from_char('D'), Some(Direction::Down));
        assert_eq!(Direction::from_char('l'), Some(Direction::Left));
        assert_eq!(Direction::from_char('R'), Some(Direction::Right));
        assert_eq!(Direction::from_char('q'), None);
    }

    #[test]
    fn direction_all_lists_each_variant_once() {
        for dir in Direction::ALL {
            assert_eq!(
                Direction::ALL.iter().filter(|&&d| d == dir).count(),
                1,
                "{:?} should appear exactly once",
                dir
            );
        }
    }
}
