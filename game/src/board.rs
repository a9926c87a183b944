use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::matrix::{EMPTY_GRID, GRID_SIZE, Grid};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Grid,
}

impl Board {
    pub fn new() -> Self {
        Self { cells: EMPTY_GRID }
    }

    pub fn from_grid(cells: Grid) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &Grid {
        &self.cells
    }

    pub fn set_cells(&mut self, cells: Grid) {
        self.cells = cells;
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.cells.get(row)?.get(col).copied()
    }

    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = value;
        }
    }

    pub fn clear(&mut self) {
        self.cells = EMPTY_GRID;
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.tiles_with_empty().filter(|&(_, _, v)| v == 0).map(|(r, c, _)| (r, c))
    }

    /// Non-empty tiles as `(row, col, value)`.
    pub fn tiles(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        self.tiles_with_empty().filter(|&(_, _, v)| v != 0)
    }

    fn tiles_with_empty(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, &v)| (r, c, v)))
    }

    pub fn is_full(&self) -> bool {
        self.empty_cells().next().is_none()
    }

    pub fn contains(&self, value: u32) -> bool {
        self.cells.iter().flatten().any(|&v| v == value)
    }

    /// Some neighbouring pair (horizontal or vertical) holds the same value.
    pub fn has_equal_neighbours(&self) -> bool {
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                let v = self.cells[r][c];
                if c + 1 < GRID_SIZE && self.cells[r][c + 1] == v {
                    return true;
                }
                if r + 1 < GRID_SIZE && self.cells[r + 1][c] == v {
                    return true;
                }
            }
        }
        false
    }

    pub fn is_won(&self, winning_tile: u32) -> bool {
        self.contains(winning_tile)
    }

    /// No empty cell and nothing left to merge.
    pub fn is_lost(&self) -> bool {
        self.is_full() && !self.has_equal_neighbours()
    }

    /// Drops a 2 or a 4 (even odds) on a uniformly chosen empty cell. Full board: no-op.
    pub fn insert_random_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(usize, usize, u32)> {
        let empty: Vec<(usize, usize)> = self.empty_cells().collect();
        if empty.is_empty() {
            return None;
        }
        let (r, c) = empty[rng.gen_range(0..empty.len())];
        let value = if rng.gen_bool(0.5) { 2 } else { 4 };
        self.cells[r][c] = value;
        Some((r, c, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn won_only_with_winning_tile_present() {
        let mut b = Board::new();
        b.set(2, 3, 1024);
        assert!(!b.is_won(2048));
        b.set(0, 0, 2048);
        assert!(b.is_won(2048));
    }

    #[test]
    fn full_board_without_pairs_is_lost() {
        let b = Board::from_grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(b.is_lost());

        let mut gap = b;
        gap.set(1, 1, 0);
        assert!(!gap.is_lost());

        let mut pair = b;
        pair.set(3, 3, 4);
        assert!(!pair.is_lost());
    }

    #[test]
    fn random_tile_fills_only_empty_cells_with_two_or_four() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut b = Board::new();
        for _ in 0..GRID_SIZE * GRID_SIZE {
            let (r, c, v) = b.insert_random_tile(&mut rng).expect("room left");
            assert!(v == 2 || v == 4);
            assert_eq!(b.get(r, c), Some(v));
        }
        assert!(b.is_full());
        let before = b;
        assert_eq!(b.insert_random_tile(&mut rng), None);
        assert_eq!(b, before);
    }

    #[test]
    fn both_tile_values_show_up() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut seen = [false, false];
        for _ in 0..64 {
            let mut b = Board::new();
            let (_, _, v) = b.insert_random_tile(&mut rng).expect("empty board");
            seen[(v / 2 - 1) as usize] = true;
        }
        assert_eq!(seen, [true, true]);
    }

    #[test]
    fn out_of_range_access_is_ignored() {
        let mut b = Board::new();
        b.set(9, 0, 2);
        assert_eq!(b, Board::new());
        assert_eq!(b.get(0, 9), None);
    }
}
