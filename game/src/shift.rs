//! Directional shift/merge.
//!
//! Every direction is reduced to a left shift: the grid is turned so the requested direction
//! points left, each row is compacted and merged, then the grid and the emitted moves are turned
//! back. `Direction::to_grid` is the single place that knows how canonical coordinates map back
//! to the caller's orientation.

use serde::{Deserialize, Serialize};

use crate::matrix::{GRID_SIZE, Grid, reverse_rows, rotate_left, rotate_right};

/// Display rows per grid row (a tile is 5 rows tall plus a border).
pub const CELL_ROWS: u16 = 6;
/// Display columns per grid column (a tile is 11 columns wide plus a border).
pub const CELL_COLS: u16 = 12;

pub fn display_row(row: usize) -> u16 {
    row as u16 * CELL_ROWS + 1
}

pub fn display_col(col: usize) -> u16 {
    col as u16 * CELL_COLS + 1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Turns `grid` so this direction points left.
    pub fn to_canonical(self, grid: &Grid) -> Grid {
        match self {
            Direction::Left => *grid,
            Direction::Right => reverse_rows(grid),
            Direction::Down => rotate_right(grid),
            Direction::Up => rotate_left(grid),
        }
    }

    /// Inverse of `to_canonical`.
    pub fn from_canonical(self, grid: &Grid) -> Grid {
        match self {
            Direction::Left => *grid,
            Direction::Right => reverse_rows(grid),
            Direction::Down => rotate_left(grid),
            Direction::Up => rotate_right(grid),
        }
    }

    /// Maps a canonical `(row, col)` to the cell it came from in the caller's grid.
    ///
    /// For every grid `g`: `g[to_grid(r, c)] == to_canonical(g)[r][c]`.
    pub fn to_grid(self, row: usize, col: usize) -> (usize, usize) {
        let last = GRID_SIZE - 1;
        match self {
            Direction::Left => (row, col),
            Direction::Right => (row, last - col),
            Direction::Down => (last - col, row),
            Direction::Up => (col, last - row),
        }
    }
}

/// One tile slide in grid coordinates. `end_value` differs from `start_value` on a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEvent {
    pub start_row: usize,
    pub start_col: usize,
    pub end_row: usize,
    pub end_col: usize,
    pub start_value: u32,
    pub end_value: u32,
}

impl MoveEvent {
    pub fn is_merge(&self) -> bool {
        self.end_value != self.start_value
    }

    fn reoriented(self, direction: Direction) -> Self {
        let (start_row, start_col) = direction.to_grid(self.start_row, self.start_col);
        let (end_row, end_col) = direction.to_grid(self.end_row, self.end_col);
        Self {
            start_row,
            start_col,
            end_row,
            end_col,
            ..self
        }
    }

    /// Re-expresses the move in console cells (top-left corner of each tile).
    pub fn to_display(&self) -> DisplayMove {
        DisplayMove {
            start_row: display_row(self.start_row),
            start_col: display_col(self.start_col),
            end_row: display_row(self.end_row),
            end_col: display_col(self.end_col),
            start_value: self.start_value,
            end_value: self.end_value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMove {
    pub start_row: u16,
    pub start_col: u16,
    pub end_row: u16,
    pub end_col: u16,
    pub start_value: u32,
    pub end_value: u32,
}

/// Result of one row pass: the moves (row-local columns) and the points scored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowShift {
    /// `(from, to, start_value, end_value)` per slide, in emission order.
    pub moves: Vec<(usize, usize, u32, u32)>,
    pub gained: u32,
}

/// Compacts and merges one row toward index 0.
///
/// `anchor` is the cell tiles land against; `scan` walks right of it. A merged anchor is passed
/// over immediately, so a tile takes part in at most one merge per call.
pub fn shift_row_left(row: &mut [u32; GRID_SIZE]) -> RowShift {
    let mut out = RowShift::default();
    let mut anchor = 0;

    for scan in 1..GRID_SIZE {
        let value = row[scan];
        if value == 0 {
            continue;
        }

        let target = row[anchor];
        if target == 0 {
            row[anchor] = value;
            row[scan] = 0;
            out.moves.push((scan, anchor, value, value));
        } else if target == value {
            let merged = value * 2;
            row[anchor] = merged;
            row[scan] = 0;
            out.gained += merged;
            out.moves.push((scan, anchor, value, merged));
            anchor += 1;
        } else {
            if anchor + 1 != scan {
                row[anchor + 1] = value;
                row[scan] = 0;
                out.moves.push((scan, anchor + 1, value, value));
            }
            anchor += 1;
        }
    }

    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftOutcome {
    pub grid: Grid,
    /// The pre-shift grid with every moved source cleared: what stays still while tiles slide.
    pub shadow: Grid,
    pub events: Vec<MoveEvent>,
    pub gained: u32,
}

impl ShiftOutcome {
    pub fn moved(&self) -> bool {
        !self.events.is_empty()
    }
}

/// Shifts `grid` toward `direction`. Pure; callers commit the outcome only if it `moved()`.
pub fn shift_grid(grid: &Grid, direction: Direction) -> ShiftOutcome {
    let mut canonical = direction.to_canonical(grid);
    let mut shadow = canonical;
    let mut events = Vec::new();
    let mut gained = 0;

    for (r, row) in canonical.iter_mut().enumerate() {
        let pass = shift_row_left(row);
        gained += pass.gained;
        for (from, to, start_value, end_value) in pass.moves {
            shadow[r][from] = 0;
            events.push(
                MoveEvent {
                    start_row: r,
                    start_col: from,
                    end_row: r,
                    end_col: to,
                    start_value,
                    end_value,
                }
                .reoriented(direction),
            );
        }
    }

    ShiftOutcome {
        grid: direction.from_canonical(&canonical),
        shadow: direction.from_canonical(&shadow),
        events,
        gained,
    }
}
