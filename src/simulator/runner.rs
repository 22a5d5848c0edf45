//! Simulation runner: plays whole campaigns with a random-target policy
//! through the real battle engine, so results match live behavior.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::battle::{cast, choose_hero, enemy_turn, BattleEvent, BattleSession, BattleState};
use crate::config::GameConfig;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_battles as usize);

    for run_idx in 0..config.num_battles {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_battle(config, &mut rng);
        if config.verbosity >= 2 {
            println!(
                "Battle {}/{} - won {}, turns {}, levels {}, damage {}",
                run_idx + 1,
                config.num_battles,
                stats.won_campaign,
                stats.turns,
                stats.levels_cleared,
                stats.total_cast_damage
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs)
}

/// Play one campaign to completion, defeat, or the turn cap. The policy
/// is uniform random: any available hero, any target cell.
fn simulate_battle<R: Rng>(config: &SimConfig, rng: &mut R) -> RunStats {
    let campaign = config
        .campaign
        .clone()
        .unwrap_or_else(GameConfig::default);
    let mut session = BattleSession::start(campaign, config.rules(), rng);

    let mut stats = RunStats {
        won_campaign: false,
        defeated: false,
        timed_out: false,
        turns: 0,
        casts: 0,
        total_cast_damage: 0,
        levels_cleared: 0,
    };
    let size = session.board.size();

    while stats.turns < config.max_turns_per_battle {
        match session.state {
            BattleState::SelectingHero => {
                let hero_ids: Vec<u32> = session
                    .heroes
                    .iter()
                    .filter(|h| h.available)
                    .map(|h| h.hero.id)
                    .collect();
                let hero_id = match hero_ids.choose(rng) {
                    Some(&id) => id,
                    None => break,
                };
                choose_hero(&mut session, hero_id);
            }
            BattleState::SelectingTarget => {
                let center = (rng.gen_range(0..size), rng.gen_range(0..size));
                cast(&mut session, center, rng);
                stats.turns += 1;
                stats.casts += 1;
                for event in session.drain_events() {
                    match event {
                        BattleEvent::CellsEliminated { damage, .. } => {
                            stats.total_cast_damage += damage as u64;
                        }
                        BattleEvent::LevelWon => stats.levels_cleared += 1,
                        _ => {}
                    }
                }
            }
            BattleState::EnemyTurn => {
                enemy_turn(&mut session, rng);
                session.drain_events();
            }
            BattleState::Victory => {
                stats.won_campaign = true;
                break;
            }
            BattleState::Defeat => {
                stats.defeated = true;
                break;
            }
            BattleState::Resolving => unreachable!("cast resolves synchronously"),
        }
    }

    if !stats.won_campaign && !stats.defeated {
        stats.timed_out = true;
    }
    stats
}
