//! Turn sequencing: hero selection, cast resolution, the enemy counter
//! attack, and level progression.
//!
//! A cast resolves synchronously: by the time `cast` returns, the board,
//! both HP pools, and the state machine hold their final values, and the
//! session's event log carries the ordered steps for replay.

use std::collections::BTreeSet;

use rand::Rng;

use super::chain::expand_eliminations;
use super::damage::{apply_bonus, damage_for_matches, matching_count};
use super::effects::{apply_convert_random, apply_pre_cast, spawn_flame};
use super::targeting::{filter_in_bounds, footprint};
use super::types::{BattleEvent, BattleSession, BattleState};
use crate::board::{self, Position};
use crate::constants::BOARD_SIZE;
use crate::heroes::{PostCastEffect, PreCastEffect};

/// Select the casting hero. Selecting while another hero is pending
/// replaces that selection with no board effect. Returns false when the
/// hero does not exist, is unavailable, or the state disallows selection.
pub fn choose_hero(session: &mut BattleSession, hero_id: u32) -> bool {
    if !matches!(
        session.state,
        BattleState::SelectingHero | BattleState::SelectingTarget
    ) {
        return false;
    }

    let index = match session
        .heroes
        .iter()
        .position(|h| h.hero.id == hero_id && h.available)
    {
        Some(index) => index,
        None => return false,
    };

    session.selected_hero = Some(index);
    session.state = BattleState::SelectingTarget;
    true
}

/// Resolve a cast of the selected hero centered on `center`. Returns
/// false if no cast is pending. On success the session has moved on to
/// `EnemyTurn`, `SelectingHero` (level advanced), or `Victory`.
pub fn cast<R: Rng>(session: &mut BattleSession, center: Position, rng: &mut R) -> bool {
    if session.state != BattleState::SelectingTarget {
        return false;
    }
    let hero = match session.selected_hero {
        Some(index) => session.heroes[index].hero.clone(),
        None => return false,
    };

    session.state = BattleState::Resolving;

    // Footprint, bounds-filtered at the targeting boundary
    let area = footprint(center, hero.shape);
    let cells = filter_in_bounds(&area, session.board.size());

    // Pre-cast conversions run first so elimination sees the converted board
    if let Some(effect) = hero.effects.pre_cast {
        let converted = apply_pre_cast(&mut session.board, &cells, effect);
        if !converted.is_empty() {
            let PreCastEffect::SpreadAdjacent { source } = effect;
            session.push_event(BattleEvent::CellsConverted {
                positions: converted,
                new_gem: source,
            });
        }
    }

    // Chain expansion and damage
    let mut removed = expand_eliminations(&session.board, &cells, session.rules.chain_mode);
    let mut total_damage =
        damage_for_matches(matching_count(&session.board, &removed, hero.attribute));

    if let Some(bonus) = hero.effects.bonus {
        let result = apply_bonus(&session.board, &removed, bonus);
        total_damage += result.extra_damage;
        if session.rules.bonus_sweep_rechains {
            let rechained =
                expand_eliminations(&session.board, &result.extra_cells, session.rules.chain_mode);
            removed.extend(rechained);
        } else {
            removed.extend(result.extra_cells);
        }
    }

    eliminate(session, &removed, total_damage);

    // Post-cast spawn lands in the elimination hole, then falls
    if hero.effects.post_cast == Some(PostCastEffect::SpawnFlame) {
        let pos = spawn_flame(&mut session.board, rng);
        session.push_event(BattleEvent::CellsConverted {
            positions: vec![pos],
            new_gem: crate::board::Gem::Flame,
        });
    }

    board::apply_gravity(&mut session.board);
    session.push_event(BattleEvent::GravityApplied);
    board::fill_empty_spaces(&mut session.board, rng);
    session.push_event(BattleEvent::RefillApplied);

    // Post-cast conversion works on the refilled board
    if let Some(PostCastEffect::ConvertRandom { target, max_cells }) = hero.effects.post_cast {
        let converted = apply_convert_random(&mut session.board, target, max_cells, rng);
        if !converted.is_empty() {
            session.push_event(BattleEvent::CellsConverted {
                positions: converted,
                new_gem: target,
            });
        }
    }

    // Board work is done; only now does the enemy take the hit
    session.damage_enemy(total_damage);
    session.selected_hero = None;

    if session.is_enemy_alive() {
        session.state = BattleState::EnemyTurn;
    } else {
        session.push_event(BattleEvent::LevelWon);
        advance_level(session, rng);
    }
    true
}

/// Remove the elimination set from the board and log it. Already-empty
/// cells are skipped inside `clear_cells`.
fn eliminate(session: &mut BattleSession, removed: &BTreeSet<Position>, damage: u32) {
    let positions: Vec<Position> = removed.iter().copied().collect();
    session.board.clear_cells(&positions);
    session.push_event(BattleEvent::CellsEliminated { positions, damage });
}

/// Move to the next configured level, or finish the campaign. Player HP
/// carries over (already capped); the enemy and board start fresh.
fn advance_level<R: Rng>(session: &mut BattleSession, rng: &mut R) {
    let next_index = session.level_index + 1;
    if next_index >= session.levels.len() {
        session.push_event(BattleEvent::CampaignComplete);
        session.state = BattleState::Victory;
        return;
    }

    session.level_index = next_index;
    session.enemy_max_hp = session.levels[next_index].enemy.max_hp;
    session.enemy_hp = session.enemy_max_hp;
    session.player_hp = session.player_hp.min(session.player_max_hp);
    session.board = board::generate(BOARD_SIZE, rng);
    session.push_event(BattleEvent::LevelAdvanced {
        next_level_id: session.levels[next_index].id,
    });
    session.state = BattleState::SelectingHero;
}

/// Run the enemy's counter attack: uniform damage from the level's range.
/// Returns false unless the session is in `EnemyTurn`. A killing blow
/// resets the level and leaves the session in `Defeat`.
pub fn enemy_turn<R: Rng>(session: &mut BattleSession, rng: &mut R) -> bool {
    if session.state != BattleState::EnemyTurn {
        return false;
    }

    let enemy = &session.current_level().enemy;
    let amount = rng.gen_range(enemy.min_damage..=enemy.max_damage);
    session.damage_player(amount);
    session.push_event(BattleEvent::EnemyAttacked { amount });

    if session.is_player_alive() {
        session.state = BattleState::SelectingHero;
    } else {
        session.push_event(BattleEvent::LevelLost);
        reset_level(session, rng);
        session.state = BattleState::Defeat;
    }
    true
}

/// Restore the current level to its starting state: fresh board, enemy
/// and player at full HP.
fn reset_level<R: Rng>(session: &mut BattleSession, rng: &mut R) {
    session.enemy_hp = session.enemy_max_hp;
    session.player_hp = session.player_max_hp;
    session.selected_hero = None;
    session.board = board::generate(BOARD_SIZE, rng);
}

/// Leave the `Defeat` state and return to hero selection. The level
/// reset already happened when the defeat was recorded.
pub fn resume(session: &mut BattleSession) -> bool {
    if session.state != BattleState::Defeat {
        return false;
    }
    session.state = BattleState::SelectingHero;
    true
}
