//! Gem board data structures.
//!
//! The board is a fixed-size square grid of gem slots. A slot holds
//! `Some(Gem)` or `None`; empty slots exist only between elimination and
//! refill within a single resolution step.

use serde::{Deserialize, Serialize};

use crate::constants::BOARD_SIZE;

/// A board position as (row, col), 0-indexed from the top-left.
pub type Position = (usize, usize);

/// A single gem kind. Five elemental kinds plus two special markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gem {
    Fire,
    Water,
    Wood,
    Light,
    Dark,
    /// Explodes into its orthogonal neighbors when eliminated.
    Bomb,
    /// Clears its full row and column when eliminated.
    Flame,
}

impl Gem {
    /// The five elemental kinds, in draw order.
    pub const ELEMENTS: [Gem; 5] = [Gem::Fire, Gem::Water, Gem::Wood, Gem::Light, Gem::Dark];

    /// Whether this gem is a special marker (bomb or flame) rather than
    /// an elemental kind.
    pub fn is_special(&self) -> bool {
        matches!(self, Gem::Bomb | Gem::Flame)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Gem::Fire => "fire",
            Gem::Water => "water",
            Gem::Wood => "wood",
            Gem::Light => "light",
            Gem::Dark => "dark",
            Gem::Bomb => "bomb",
            Gem::Flame => "flame",
        }
    }
}

/// Errors from raw board access. Never escapes the session API: skill
/// targeting filters out-of-board positions before they reach the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    OutOfBounds { row: usize, col: usize },
}

/// The gem board. Always `size` x `size`; indexed as (row, col).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    grid: Vec<Vec<Option<Gem>>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_SIZE)
    }
}

impl Board {
    /// Create an all-empty board. Use `board::logic::generate` (or
    /// `fill_empty_spaces`) to populate it.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            grid: vec![vec![None; size]; size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Read a slot. Fails with `OutOfBounds` outside `[0, size)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Option<Gem>, BoardError> {
        if !self.in_bounds(row, col) {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(self.grid[row][col])
    }

    /// Write a slot. Fails with `OutOfBounds` outside `[0, size)`.
    pub fn set(&mut self, row: usize, col: usize, cell: Option<Gem>) -> Result<(), BoardError> {
        if !self.in_bounds(row, col) {
            return Err(BoardError::OutOfBounds { row, col });
        }
        self.grid[row][col] = cell;
        Ok(())
    }

    /// Convenience read for in-bounds positions; `None` for empty slots
    /// and for positions off the board.
    pub fn gem_at(&self, pos: Position) -> Option<Gem> {
        self.get(pos.0, pos.1).ok().flatten()
    }

    /// Empty the given slots. Already-empty slots are skipped; positions
    /// off the board are ignored.
    pub fn clear_cells<'a, I: IntoIterator<Item = &'a Position>>(&mut self, positions: I) {
        for &(row, col) in positions {
            if self.in_bounds(row, col) {
                self.grid[row][col] = None;
            }
        }
    }

    /// All empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.positions_where(|cell| cell.is_none())
    }

    /// All positions holding the given gem, in row-major order.
    pub fn positions_of(&self, gem: Gem) -> Vec<Position> {
        self.positions_where(|cell| *cell == Some(gem))
    }

    /// All positions whose slot satisfies the predicate, in row-major order.
    pub fn positions_where<F: Fn(&Option<Gem>) -> bool>(&self, pred: F) -> Vec<Position> {
        let mut positions = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if pred(&self.grid[row][col]) {
                    positions.push((row, col));
                }
            }
        }
        positions
    }

    /// The ≤4 orthogonal in-bounds neighbors of a position.
    pub fn orthogonal_neighbors(&self, row: usize, col: usize) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(4);
        if row > 0 {
            neighbors.push((row - 1, col));
        }
        if row + 1 < self.size {
            neighbors.push((row + 1, col));
        }
        if col > 0 {
            neighbors.push((row, col - 1));
        }
        if col + 1 < self.size {
            neighbors.push((row, col + 1));
        }
        neighbors
    }

    /// Read-only copy of the full grid for the presentation layer.
    pub fn snapshot(&self) -> Vec<Vec<Option<Gem>>> {
        self.grid.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(6);
        assert_eq!(board.size(), 6);
        assert_eq!(board.empty_positions().len(), 36);
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut board = Board::new(6);
        board.set(2, 3, Some(Gem::Fire)).unwrap();
        assert_eq!(board.get(2, 3).unwrap(), Some(Gem::Fire));
        board.set(2, 3, None).unwrap();
        assert_eq!(board.get(2, 3).unwrap(), None);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut board = Board::new(6);
        assert_eq!(
            board.get(6, 0),
            Err(BoardError::OutOfBounds { row: 6, col: 0 })
        );
        assert_eq!(
            board.set(0, 9, Some(Gem::Water)),
            Err(BoardError::OutOfBounds { row: 0, col: 9 })
        );
    }

    #[test]
    fn test_clear_cells_skips_empty_and_out_of_bounds() {
        let mut board = Board::new(6);
        board.set(0, 0, Some(Gem::Dark)).unwrap();
        // (5, 5) is already empty, (9, 9) is off the board
        board.clear_cells(&[(0, 0), (5, 5), (9, 9)]);
        assert_eq!(board.get(0, 0).unwrap(), None);
        assert_eq!(board.empty_positions().len(), 36);
    }

    #[test]
    fn test_orthogonal_neighbors_corner_edge_center() {
        let board = Board::new(6);
        assert_eq!(board.orthogonal_neighbors(0, 0).len(), 2);
        assert_eq!(board.orthogonal_neighbors(0, 3).len(), 3);
        assert_eq!(board.orthogonal_neighbors(3, 3).len(), 4);
        assert_eq!(board.orthogonal_neighbors(5, 5).len(), 2);
    }

    #[test]
    fn test_positions_of() {
        let mut board = Board::new(6);
        board.set(1, 1, Some(Gem::Flame)).unwrap();
        board.set(4, 2, Some(Gem::Flame)).unwrap();
        assert_eq!(board.positions_of(Gem::Flame), vec![(1, 1), (4, 2)]);
    }

    #[test]
    fn test_gem_is_special() {
        assert!(Gem::Bomb.is_special());
        assert!(Gem::Flame.is_special());
        for gem in Gem::ELEMENTS {
            assert!(!gem.is_special());
        }
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut board = Board::new(6);
        board.set(0, 0, Some(Gem::Wood)).unwrap();
        let snap = board.snapshot();
        board.set(0, 0, None).unwrap();
        assert_eq!(snap[0][0], Some(Gem::Wood));
    }
}
