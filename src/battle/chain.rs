//! Chain-reaction expansion of an elimination seed set.
//!
//! Bombs add their orthogonal neighbors; flames add their full row and
//! column. How far those reactions cascade is a rules choice, so both
//! observed interpretations are available as `ChainMode`.

use std::collections::BTreeSet;

use crate::board::{Board, Gem, Position};

/// How far bomb/flame reactions propagate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChainMode {
    /// One bounded pass: bombs in the seed explode, flames in the seed or
    /// uncovered by a bomb burn their row and column, and nothing found
    /// beyond that re-triggers.
    #[default]
    SinglePass,
    /// Iterate until stable: every bomb or flame that enters the set
    /// triggers its own expansion, including ones uncovered by a flame.
    Fixpoint,
}

/// Expand a bounds-filtered seed set into the full elimination set.
/// Never mutates the board; the result always contains the seeds, and
/// positions are ordered row-major by the set itself.
pub fn expand_eliminations(board: &Board, seeds: &[Position], mode: ChainMode) -> BTreeSet<Position> {
    match mode {
        ChainMode::SinglePass => expand_single_pass(board, seeds),
        ChainMode::Fixpoint => expand_fixpoint(board, seeds),
    }
}

fn expand_single_pass(board: &Board, seeds: &[Position]) -> BTreeSet<Position> {
    let mut removed: BTreeSet<Position> = seeds.iter().copied().collect();
    let mut flames: Vec<Position> = Vec::new();
    let mut bombs: Vec<Position> = Vec::new();

    for &pos in seeds {
        match board.gem_at(pos) {
            Some(Gem::Bomb) => bombs.push(pos),
            Some(Gem::Flame) => flames.push(pos),
            _ => {}
        }
    }

    // Bombs take their neighbors with them; a flame caught in a blast
    // still burns its row and column.
    for &(row, col) in &bombs {
        for neighbor in board.orthogonal_neighbors(row, col) {
            removed.insert(neighbor);
            if board.gem_at(neighbor) == Some(Gem::Flame) && !flames.contains(&neighbor) {
                flames.push(neighbor);
            }
        }
    }

    for &(row, col) in &flames {
        for pos in row_and_column(board.size(), row, col) {
            removed.insert(pos);
        }
    }

    removed
}

fn expand_fixpoint(board: &Board, seeds: &[Position]) -> BTreeSet<Position> {
    let mut removed: BTreeSet<Position> = seeds.iter().copied().collect();
    let mut pending: Vec<Position> = removed.iter().copied().collect();

    while let Some(pos) = pending.pop() {
        let additions: Vec<Position> = match board.gem_at(pos) {
            Some(Gem::Bomb) => board.orthogonal_neighbors(pos.0, pos.1),
            Some(Gem::Flame) => row_and_column(board.size(), pos.0, pos.1),
            _ => Vec::new(),
        };
        for added in additions {
            if removed.insert(added) {
                pending.push(added);
            }
        }
    }

    removed
}

/// Every position in the given row and column, the cell itself included
/// once.
fn row_and_column(size: usize, row: usize, col: usize) -> Vec<Position> {
    let mut positions = Vec::with_capacity(2 * size - 1);
    for c in 0..size {
        positions.push((row, c));
    }
    for r in 0..size {
        if r != row {
            positions.push((r, col));
        }
    }
    positions
}
