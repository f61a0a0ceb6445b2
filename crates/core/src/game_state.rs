//! Game state module - ties the grid, game mode, and RNG into one engine
//!
//! The engine owns the grid exclusively: it is mutated only by [`GameState::apply_move`]
//! and [`GameState::spawn_tile`]. Everything here is synchronous and I/O-free;
//! the session loop drives it and the renderer reads it through snapshots.

use crate::rng::SimpleRng;
use crate::snapshot::GridSnapshot;
use crate::types::{Difficulty, Direction, INITIAL_TILES, SPAWN_ROLL_MAX, SPAWN_ROLL_MIN};
use crate::Grid;

/// Complete game state for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    difficulty: Difficulty,
    rng: SimpleRng,
    /// Seed the RNG was created from (exported in snapshots).
    seed: u32,
    /// Number of slides that changed the grid.
    move_count: u32,
    won: bool,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given mode and RNG seed
    ///
    /// The grid starts all-zero and receives the two starting tiles.
    pub fn new(difficulty: Difficulty, seed: u32) -> Self {
        let mut state = Self::from_grid(Grid::new(), difficulty, seed);
        for _ in 0..INITIAL_TILES {
            state.spawn_tile();
        }
        state
    }

    /// Build an engine around a prepared grid without spawning starting tiles
    ///
    /// Useful for driving specific positions (tests, tooling). The win and
    /// game-over flags are evaluated against the given grid immediately.
    pub fn from_grid(grid: Grid, difficulty: Difficulty, seed: u32) -> Self {
        let mut state = Self {
            grid,
            difficulty,
            rng: SimpleRng::new(seed),
            seed,
            move_count: 0,
            won: false,
            game_over: false,
        };
        state.refresh_status();
        state
    }

    /// Slide all tiles toward the given edge
    ///
    /// Returns true if the grid changed; exactly one tile is spawned in that
    /// case. A slide that moves nothing leaves the grid untouched and spawns
    /// nothing. Once the game is won or dead, every move is a no-op.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        if self.won || self.game_over {
            return false;
        }
        if !self.grid.slide(direction) {
            return false;
        }

        self.move_count += 1;
        self.spawn_tile();
        self.refresh_status();
        true
    }

    /// Spawn one tile (2 or 4) into a uniformly chosen empty cell
    ///
    /// The 2-vs-4 split comes from the mode's spawn table: a roll in
    /// `1..=10` up to [`Difficulty::two_roll_cap`] yields a 2, above it a 4.
    /// No-op returning false when the grid is full.
    pub fn spawn_tile(&mut self) -> bool {
        let empties = self.grid.empty_cells();
        if empties.is_empty() {
            return false;
        }

        let pick = self.rng.choose(0, empties.len() as u32 - 1) as usize;
        let (row, col) = empties[pick];
        let roll = self.rng.choose(SPAWN_ROLL_MIN, SPAWN_ROLL_MAX);
        let value = if roll <= self.difficulty.two_roll_cap() {
            2
        } else {
            4
        };
        self.grid.set(row, col, value);
        true
    }

    /// True iff any tile has reached the mode's win target. Pure read.
    pub fn check_win(&self) -> bool {
        self.grid.contains(self.difficulty.win_target())
    }

    /// True iff no slide in any direction can ever change the grid. Pure read.
    pub fn is_terminal(&self) -> bool {
        self.grid.is_deadlocked()
    }

    fn refresh_status(&mut self) {
        self.won = self.check_win();
        self.game_over = self.is_terminal();
    }

    /// Cell value at (row, col); 0 for empty or out-of-bounds coordinates
    pub fn cell(&self, row: usize, col: usize) -> u32 {
        self.grid.get(row, col).unwrap_or(0)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Win flag as of the last move (see [`Self::check_win`] for the pure read)
    pub fn won(&self) -> bool {
        self.won
    }

    /// Game-over flag as of the last move (see [`Self::is_terminal`])
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Fill an existing snapshot with the current observable state
    pub fn snapshot_into(&self, out: &mut GridSnapshot) {
        out.cells = self.grid.to_rows();
        out.difficulty = self.difficulty;
        out.win_target = self.difficulty.win_target();
        out.seed = self.seed;
        out.move_count = self.move_count;
        out.max_tile = self.grid.max_tile();
        out.won = self.won;
        out.game_over = self.game_over;
    }

    /// Allocate a fresh snapshot of the current observable state
    pub fn snapshot(&self) -> GridSnapshot {
        let mut snap = GridSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
