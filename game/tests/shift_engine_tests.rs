use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use twenty48::matrix::{GRID_SIZE, Grid, reverse_rows, rotate_left, rotate_right};
use twenty48::shift::{Direction, MoveEvent, shift_grid};

fn random_grid(rng: &mut SmallRng) -> Grid {
    let mut grid = [[0; GRID_SIZE]; GRID_SIZE];
    for row in grid.iter_mut() {
        for cell in row.iter_mut() {
            *cell = [0, 0, 2, 2, 4, 8][rng.gen_range(0..6)];
        }
    }
    grid
}

fn sample_grids() -> Vec<Grid> {
    let mut rng = SmallRng::seed_from_u64(2048);
    (0..200).map(|_| random_grid(&mut rng)).collect()
}

#[test]
fn two_pairs_merge_into_two_fours() {
    let grid = [[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]];
    let out = shift_grid(&grid, Direction::Left);
    assert_eq!(out.grid[0], [4, 4, 0, 0]);
    assert_eq!(out.gained, 8);
    assert!(out.moved());
}

#[test]
fn right_shift_example() {
    let grid = [[0, 2, 2, 4], [0; 4], [0; 4], [0; 4]];
    let out = shift_grid(&grid, Direction::Right);
    assert_eq!(out.grid[0], [0, 0, 4, 4]);
    assert_eq!(out.gained, 4);
}

const LAST: usize = GRID_SIZE - 1;

/// Shifting `grid` toward `dir` must equal: transform, shift left, undo the transform. Every
/// event of the left shift, mapped back through `back`, must match the direct event in order.
fn assert_matches_left_shift(
    dir: Direction,
    transform: fn(&Grid) -> Grid,
    undo: fn(&Grid) -> Grid,
    back: fn(usize, usize) -> (usize, usize),
) {
    for grid in sample_grids() {
        let direct = shift_grid(&grid, dir);
        let via_left = shift_grid(&transform(&grid), Direction::Left);

        assert_eq!(direct.grid, undo(&via_left.grid), "{dir:?} grid of {grid:?}");
        assert_eq!(direct.shadow, undo(&via_left.shadow), "{dir:?} shadow of {grid:?}");
        assert_eq!(direct.gained, via_left.gained, "{dir:?} score of {grid:?}");

        let mapped: Vec<MoveEvent> = via_left
            .events
            .iter()
            .map(|ev| {
                let (start_row, start_col) = back(ev.start_row, ev.start_col);
                let (end_row, end_col) = back(ev.end_row, ev.end_col);
                MoveEvent {
                    start_row,
                    start_col,
                    end_row,
                    end_col,
                    ..*ev
                }
            })
            .collect();
        assert_eq!(direct.events, mapped, "{dir:?} events of {grid:?}");
    }
}

#[test]
fn right_is_mirrored_left() {
    assert_matches_left_shift(Direction::Right, reverse_rows, reverse_rows, |r, c| (r, LAST - c));
}

#[test]
fn down_is_rotated_left() {
    assert_matches_left_shift(Direction::Down, rotate_right, rotate_left, |r, c| (LAST - c, r));
}

#[test]
fn up_is_rotated_left() {
    assert_matches_left_shift(Direction::Up, rotate_left, rotate_right, |r, c| (c, LAST - r));
}

#[test]
fn tile_sum_is_conserved() {
    for grid in sample_grids() {
        let before: u32 = grid.iter().flatten().sum();
        for dir in Direction::ALL {
            let after: u32 = shift_grid(&grid, dir).grid.iter().flatten().sum();
            assert_eq!(before, after, "{dir:?}");
        }
    }
}

#[test]
fn events_point_at_real_cells_in_caller_orientation() {
    for grid in sample_grids() {
        for dir in Direction::ALL {
            let out = shift_grid(&grid, dir);
            let mut last_value_at = [[None; GRID_SIZE]; GRID_SIZE];
            for ev in &out.events {
                assert_eq!(grid[ev.start_row][ev.start_col], ev.start_value, "{dir:?} {ev:?}");
                assert_eq!(out.shadow[ev.start_row][ev.start_col], 0, "{dir:?} {ev:?}");
                match dir {
                    Direction::Left | Direction::Right => assert_eq!(ev.start_row, ev.end_row),
                    Direction::Up | Direction::Down => assert_eq!(ev.start_col, ev.end_col),
                }
                match dir {
                    Direction::Left => assert!(ev.end_col < ev.start_col),
                    Direction::Right => assert!(ev.end_col > ev.start_col),
                    Direction::Up => assert!(ev.end_row < ev.start_row),
                    Direction::Down => assert!(ev.end_row > ev.start_row),
                }
                last_value_at[ev.end_row][ev.end_col] = Some(ev.end_value);
            }
            for r in 0..GRID_SIZE {
                for c in 0..GRID_SIZE {
                    if let Some(v) = last_value_at[r][c] {
                        assert_eq!(out.grid[r][c], v, "{dir:?} landing at ({r},{c})");
                    }
                }
            }
        }
    }
}

#[test]
fn unmoved_cells_stay_in_the_shadow() {
    for grid in sample_grids() {
        for dir in Direction::ALL {
            let out = shift_grid(&grid, dir);
            for r in 0..GRID_SIZE {
                for c in 0..GRID_SIZE {
                    let moved_from_here =
                        out.events.iter().any(|e| e.start_row == r && e.start_col == c);
                    if !moved_from_here {
                        assert_eq!(out.shadow[r][c], grid[r][c], "{dir:?} ({r},{c})");
                    }
                }
            }
        }
    }
}

#[test]
fn no_move_means_no_change() {
    let packed = [[2, 4, 8, 16], [4, 8, 16, 32], [8, 16, 32, 64], [16, 32, 64, 128]];
    for dir in Direction::ALL {
        let out = shift_grid(&packed, dir);
        assert!(!out.moved(), "{dir:?}");
        assert_eq!(out.grid, packed);
        assert_eq!(out.gained, 0);
    }
}

#[test]
fn display_moves_stay_on_the_board() {
    for grid in sample_grids().into_iter().take(20) {
        for dir in Direction::ALL {
            for ev in shift_grid(&grid, dir).events {
                let d = ev.to_display();
                for (row, col) in [(d.start_row, d.start_col), (d.end_row, d.end_col)] {
                    assert_eq!((row - 1) % 6, 0);
                    assert_eq!((col - 1) % 12, 0);
                    assert!(row <= 19 && col <= 37);
                }
            }
        }
    }
}
