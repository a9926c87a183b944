//! Square-grid geometry. Every transform returns a new grid.

pub const GRID_SIZE: usize = 4;

pub type Grid = [[u32; GRID_SIZE]; GRID_SIZE];

pub const EMPTY_GRID: Grid = [[0; GRID_SIZE]; GRID_SIZE];

pub fn transpose(grid: &Grid) -> Grid {
    let mut out = EMPTY_GRID;
    for (r, row) in grid.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            out[c][r] = value;
        }
    }
    out
}

/// Mirrors left to right: every row is reversed.
pub fn reverse_rows(grid: &Grid) -> Grid {
    let mut out = *grid;
    for row in out.iter_mut() {
        row.reverse();
    }
    out
}

/// Mirrors top to bottom: every column is reversed.
pub fn reverse_cols(grid: &Grid) -> Grid {
    let mut out = *grid;
    out.reverse();
    out
}

/// Quarter turn counter-clockwise.
pub fn rotate_left(grid: &Grid) -> Grid {
    reverse_cols(&transpose(grid))
}

/// Quarter turn clockwise.
pub fn rotate_right(grid: &Grid) -> Grid {
    reverse_rows(&transpose(grid))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        [[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 14, 15, 16]]
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let t = transpose(&sample());
        assert_eq!(t[0], [1, 5, 9, 13]);
        assert_eq!(t[3], [4, 8, 12, 16]);
        assert_eq!(transpose(&t), sample());
    }

    #[test]
    fn mirrors_are_involutions() {
        assert_eq!(reverse_rows(&sample())[0], [4, 3, 2, 1]);
        assert_eq!(reverse_cols(&sample())[0], [13, 14, 15, 16]);
        assert_eq!(reverse_rows(&reverse_rows(&sample())), sample());
        assert_eq!(reverse_cols(&reverse_cols(&sample())), sample());
    }

    #[test]
    fn rotations_move_corners_the_expected_way() {
        // Top-right lands top-left on a counter-clockwise turn.
        assert_eq!(rotate_left(&sample())[0][0], 4);
        // Bottom-left lands top-left on a clockwise turn.
        assert_eq!(rotate_right(&sample())[0][0], 13);
    }

    #[test]
    fn rotations_are_mutual_inverses() {
        let g = sample();
        assert_eq!(rotate_left(&rotate_right(&g)), g);
        assert_eq!(rotate_right(&rotate_left(&g)), g);
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        let g = sample();
        let left4 = (0..4).fold(g, |acc, _| rotate_left(&acc));
        let right4 = (0..4).fold(g, |acc, _| rotate_right(&acc));
        assert_eq!(left4, g);
        assert_eq!(right4, g);
    }
}
