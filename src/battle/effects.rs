//! Gem conversion effects: the pre- and post-cast board transformations
//! attached to hero skills. Effects mutate only the board, never HP, and
//! report the positions they touched for the event log.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Gem, Position};
use crate::heroes::PreCastEffect;

/// Whether a slot may be converted to `target`: occupied, not already the
/// target kind, and not a special marker.
fn is_convertible(board: &Board, pos: Position, target: Gem) -> bool {
    match board.gem_at(pos) {
        Some(gem) => gem != target && !gem.is_special(),
        None => false,
    }
}

/// Apply a pre-cast effect to the bounds-filtered footprint. Returns the
/// converted positions in row-major order.
pub fn apply_pre_cast(
    board: &mut Board,
    footprint: &[Position],
    effect: PreCastEffect,
) -> Vec<Position> {
    match effect {
        PreCastEffect::SpreadAdjacent { source } => {
            // Collect first, then convert: a cell adjacent to two sources
            // converts once, and conversions never chain into each other.
            let mut targets: Vec<Position> = Vec::new();
            for &pos in footprint {
                if board.gem_at(pos) != Some(source) {
                    continue;
                }
                for neighbor in board.orthogonal_neighbors(pos.0, pos.1) {
                    if is_convertible(board, neighbor, source) && !targets.contains(&neighbor) {
                        targets.push(neighbor);
                    }
                }
            }
            targets.sort();
            for &(row, col) in &targets {
                board.set(row, col, Some(source)).expect("in bounds");
            }
            targets
        }
    }
}

/// Apply the random-conversion post-cast effect on the refilled board.
/// Converts `min(max_cells, convertible)` cells, chosen uniformly.
pub fn apply_convert_random<R: Rng>(
    board: &mut Board,
    target: Gem,
    max_cells: usize,
    rng: &mut R,
) -> Vec<Position> {
    let mut candidates = board.positions_where(|cell| match cell {
        Some(gem) => *gem != target && !gem.is_special(),
        None => false,
    });
    candidates.shuffle(rng);
    candidates.truncate(max_cells);
    candidates.sort();
    for &(row, col) in &candidates {
        board.set(row, col, Some(target)).expect("in bounds");
    }
    candidates
}

/// Place one flame gem: on a uniformly random empty slot if any exist,
/// otherwise overwriting a uniformly random occupied slot.
pub fn spawn_flame<R: Rng>(board: &mut Board, rng: &mut R) -> Position {
    let empties = board.empty_positions();
    let (row, col) = if empties.is_empty() {
        (
            rng.gen_range(0..board.size()),
            rng.gen_range(0..board.size()),
        )
    } else {
        *empties.choose(rng).expect("non-empty")
    };
    board.set(row, col, Some(Gem::Flame)).expect("in bounds");
    (row, col)
}
