//! Board mutation logic: random gem draws, generation, gravity, refill.

use rand::Rng;

use super::{Board, Gem, Position};
use crate::constants::BOMB_SPAWN_RATE;

/// Draw a random gem: a bomb at `BOMB_SPAWN_RATE`, otherwise a uniform
/// elemental kind. Flame gems are never drawn; they only enter the board
/// through the Fire Sorcerer's spawn effect.
pub fn random_gem<R: Rng>(rng: &mut R) -> Gem {
    if rng.gen_bool(BOMB_SPAWN_RATE) {
        return Gem::Bomb;
    }
    Gem::ELEMENTS[rng.gen_range(0..Gem::ELEMENTS.len())]
}

/// Create a fully populated board of the given size.
pub fn generate<R: Rng>(size: usize, rng: &mut R) -> Board {
    let mut board = Board::new(size);
    fill_empty_spaces(&mut board, rng);
    board
}

/// Compact each column downward: non-empty slots keep their relative
/// order, empties collect at the top. Must run to completion before
/// `fill_empty_spaces`.
pub fn apply_gravity(board: &mut Board) {
    let size = board.size();
    for col in 0..size {
        let mut write_row = size - 1;
        for row in (0..size).rev() {
            if let Some(gem) = board.gem_at((row, col)) {
                if write_row != row {
                    board.set(write_row, col, Some(gem)).expect("in bounds");
                    board.set(row, col, None).expect("in bounds");
                }
                write_row = write_row.saturating_sub(1);
            }
        }
    }
}

/// Fill every empty slot with a fresh random draw. Returns the filled
/// positions in row-major order for the event log.
pub fn fill_empty_spaces<R: Rng>(board: &mut Board, rng: &mut R) -> Vec<Position> {
    let empties = board.empty_positions();
    for &(row, col) in &empties {
        let gem = random_gem(rng);
        board.set(row, col, Some(gem)).expect("in bounds");
    }
    empties
}
