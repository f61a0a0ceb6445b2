//! Grid tests - slide/merge scenarios and rotation properties

use tui_2048::core::Grid;
use tui_2048::types::{Direction, GRID_SIZE};

fn first_row(grid: &Grid) -> [u32; GRID_SIZE] {
    grid.to_rows()[0]
}

#[test]
fn sliding_a_row_merges_then_packs_then_stops() {
    let mut grid = Grid::from_rows([
        [2, 2, 4, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ]);

    assert!(grid.slide(Direction::Left));
    assert_eq!(first_row(&grid), [4, 4, 0, 0]);

    assert!(grid.slide(Direction::Left));
    assert_eq!(first_row(&grid), [8, 0, 0, 0]);

    // Fully packed: a third slide changes nothing.
    assert!(!grid.slide(Direction::Left));
    assert_eq!(first_row(&grid), [8, 0, 0, 0]);
}

#[test]
fn row_does_not_chain_merges() {
    let mut quads = Grid::from_rows([
        [2, 2, 2, 2],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ]);
    assert!(quads.slide(Direction::Left));
    assert_eq!(first_row(&quads), [4, 4, 0, 0]);

    // The freshly merged 4 must not swallow the pre-existing 4.
    let mut mixed = Grid::from_rows([
        [2, 2, 4, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ]);
    assert!(mixed.slide(Direction::Left));
    assert_eq!(first_row(&mixed), [4, 4, 0, 0]);
}

#[test]
fn alternating_row_is_a_no_op() {
    let rows = [
        [2, 4, 2, 4],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ];
    let mut grid = Grid::from_rows(rows);
    assert!(!grid.slide(Direction::Left));
    assert_eq!(grid.to_rows(), rows);
}

#[test]
fn compaction_without_merges_still_counts_as_moved() {
    let mut grid = Grid::from_rows([
        [0, 2, 0, 4],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ]);
    assert!(grid.slide(Direction::Left));
    assert_eq!(first_row(&grid), [2, 4, 0, 0]);
}

#[test]
fn every_direction_moves_tiles_toward_its_edge() {
    let start = Grid::from_rows([
        [0, 0, 0, 0],
        [0, 2, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ]);

    let mut up = start;
    assert!(up.slide(Direction::Up));
    assert_eq!(up.get(0, 1), Some(2));

    let mut down = start;
    assert!(down.slide(Direction::Down));
    assert_eq!(down.get(3, 1), Some(2));

    let mut left = start;
    assert!(left.slide(Direction::Left));
    assert_eq!(left.get(1, 0), Some(2));

    let mut right = start;
    assert!(right.slide(Direction::Right));
    assert_eq!(right.get(1, 3), Some(2));
}

#[test]
fn four_quarter_turns_reproduce_the_grid() {
    let grid = Grid::from_rows([
        [2, 0, 4, 0],
        [0, 8, 0, 16],
        [32, 0, 64, 0],
        [0, 128, 0, 256],
    ]);

    let mut ccw = grid;
    let mut cw = grid;
    for _ in 0..4 {
        ccw = ccw.rotated_ccw();
        cw = cw.rotated_cw();
    }
    assert_eq!(ccw, grid);
    assert_eq!(cw, grid);
}

#[test]
fn full_grid_without_neighbors_is_deadlocked_in_every_direction() {
    let mut grid = Grid::from_rows([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ]);
    assert!(grid.is_deadlocked());

    let before = grid;
    for dir in Direction::ALL {
        assert!(!grid.slide(dir), "{:?} should not move", dir);
        assert_eq!(grid, before);
    }
}

#[test]
fn full_grid_with_a_pair_still_has_a_move() {
    let mut grid = Grid::from_rows([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 4],
    ]);
    assert!(!grid.is_deadlocked());
    assert!(grid.slide(Direction::Right));
}
