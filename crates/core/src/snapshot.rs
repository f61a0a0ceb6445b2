//! Snapshot of the observable game state.
//!
//! The renderer never touches the live engine; it consumes this plain-data
//! copy instead, which keeps the view layer pure and unit-testable.

use crate::types::{Difficulty, GRID_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSnapshot {
    /// Cell values, rows top to bottom (0 = empty).
    pub cells: [[u32; GRID_SIZE]; GRID_SIZE],
    pub difficulty: Difficulty,
    pub win_target: u32,
    pub seed: u32,
    pub move_count: u32,
    pub max_tile: u32,
    pub won: bool,
    pub game_over: bool,
}

impl Default for GridSnapshot {
    fn default() -> Self {
        Self {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
            difficulty: Difficulty::Easy,
            win_target: Difficulty::Easy.win_target(),
            seed: 0,
            move_count: 0,
            max_tile: 0,
            won: false,
            game_over: false,
        }
    }
}
