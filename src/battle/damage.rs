//! Damage computation for a resolved cast.

use std::collections::BTreeSet;

use crate::board::{Board, Gem, Position};
use crate::constants::DAMAGE_PER_MATCH;
use crate::heroes::BonusDamage;

/// Number of eliminated cells matching the caster's attribute. Bombs and
/// flames never match: the attribute is always an elemental kind.
pub fn matching_count(board: &Board, removed: &BTreeSet<Position>, attribute: Gem) -> usize {
    removed
        .iter()
        .filter(|&&pos| board.gem_at(pos) == Some(attribute))
        .count()
}

/// Base damage: 150 per matching gem, zero without matches.
pub fn damage_for_matches(count: usize) -> u32 {
    count as u32 * DAMAGE_PER_MATCH
}

/// Result of a bonus-damage hook: the extra cells it eliminates and the
/// damage they add.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BonusResult {
    pub extra_cells: Vec<Position>,
    pub extra_damage: u32,
}

/// Apply a bonus-damage hook against the current board. `removed` is the
/// chain result; swept cells are always outside it. Does not mutate the
/// board — the caller folds `extra_cells` into the elimination.
pub fn apply_bonus(board: &Board, removed: &BTreeSet<Position>, bonus: BonusDamage) -> BonusResult {
    match bonus {
        BonusDamage::BoardSweep { gem, per_gem } => {
            let extra_cells: Vec<Position> = board
                .positions_of(gem)
                .into_iter()
                .filter(|pos| !removed.contains(pos))
                .collect();
            let extra_damage = extra_cells.len() as u32 * per_gem;
            BonusResult {
                extra_cells,
                extra_damage,
            }
        }
    }
}
