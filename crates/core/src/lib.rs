//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management for the
//! sliding-tile game. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed and mode produce identical games
//! - **Testable**: Unit tests cover every slide/merge/spawn rule
//! - **Portable**: Can run in any environment (terminal, headless)
//! - **Fast**: Zero-allocation hot paths for slides and spawn scans
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 playfield with the slide/merge pass and rotation remaps
//! - [`game_state`]: the engine tying grid, mode, and RNG together
//! - [`rng`]: seedable uniform-integer generator for tile spawning
//! - [`snapshot`]: plain-data copy of observable state for rendering
//!
//! # Game Rules
//!
//! - Tiles slide toward the chosen edge; two equal neighbors merge into
//!   their sum, at most once per tile per move
//! - Every move that changes the grid spawns one new tile (2 or 4, with
//!   the mix decided by the game mode) in a random empty cell
//! - The game is won when a tile reaches the mode's target value, and lost
//!   when the grid is full with no equal neighbors left to merge
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Difficulty, Direction};
//!
//! // Create a game: two tiles are spawned up front
//! let mut game = GameState::new(Difficulty::Easy, 12345);
//!
//! // Apply slides; `true` means the grid changed and a tile spawned
//! game.apply_move(Direction::Left);
//! game.apply_move(Direction::Down);
//!
//! assert!(!game.is_terminal());
//! ```

pub mod game_state;
pub mod grid;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use grid::Grid;
pub use rng::SimpleRng;
pub use snapshot::GridSnapshot;
