//! Battle session state: the board, the hero roster, HP pools, the turn
//! state machine, and the pending event log.

use serde::Serialize;

use super::chain::ChainMode;
use crate::board::{Board, Gem, Position};
use crate::config::{GameConfig, LevelConfig};
use crate::heroes::{get_all_heroes, HeroInstance};

/// Turn state machine. `Victory` is terminal (campaign complete);
/// `Defeat` is left through `logic::resume` after the level reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BattleState {
    SelectingHero,
    SelectingTarget,
    Resolving,
    EnemyTurn,
    Victory,
    Defeat,
}

/// Ordered notifications for the presentation layer. Positions are
/// row-major so a replay renders deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BattleEvent {
    CellsEliminated {
        positions: Vec<Position>,
        damage: u32,
    },
    CellsConverted {
        positions: Vec<Position>,
        new_gem: Gem,
    },
    GravityApplied,
    RefillApplied,
    EnemyAttacked {
        amount: u32,
    },
    LevelWon,
    LevelLost,
    LevelAdvanced {
        next_level_id: u32,
    },
    CampaignComplete,
}

/// Chain and bonus-sweep behavior for a session. The defaults mirror the
/// single-bounded-pass rules of the classic game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionRules {
    pub chain_mode: ChainMode,
    /// Whether cells swept by a bonus-damage hook feed back into the
    /// chain resolver.
    pub bonus_sweep_rechains: bool,
}

/// Read-only view of a session for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct BattleSnapshot {
    pub board: Vec<Vec<Option<Gem>>>,
    pub enemy_hp: u32,
    pub enemy_max_hp: u32,
    pub player_hp: u32,
    pub player_max_hp: u32,
    pub state: BattleState,
}

/// A battle run: one player working through the configured level list.
/// All mutation goes through `battle::logic`; the session owns its board
/// exclusively for the whole run.
#[derive(Debug, Clone)]
pub struct BattleSession {
    pub board: Board,
    pub heroes: Vec<HeroInstance>,
    pub state: BattleState,
    /// Index into `heroes` of the hero pending a target, if any.
    pub selected_hero: Option<usize>,
    pub enemy_hp: u32,
    pub enemy_max_hp: u32,
    pub player_hp: u32,
    pub player_max_hp: u32,
    pub level_index: usize,
    pub levels: Vec<LevelConfig>,
    pub rules: ResolutionRules,
    pub(super) events: Vec<BattleEvent>,
}

impl BattleSession {
    /// Start a session at the first configured level with a fresh board.
    pub fn start<R: rand::Rng>(config: GameConfig, rules: ResolutionRules, rng: &mut R) -> Self {
        let config = if config.is_valid() {
            config
        } else {
            GameConfig::default()
        };
        let first_enemy_hp = config.levels[0].enemy.max_hp;
        Self {
            board: crate::board::generate(crate::constants::BOARD_SIZE, rng),
            heroes: get_all_heroes().into_iter().map(HeroInstance::new).collect(),
            state: BattleState::SelectingHero,
            selected_hero: None,
            enemy_hp: first_enemy_hp,
            enemy_max_hp: first_enemy_hp,
            player_hp: config.player.initial_hp,
            player_max_hp: config.player.initial_hp,
            level_index: 0,
            levels: config.levels,
            rules,
            events: Vec::new(),
        }
    }

    pub fn current_level(&self) -> &LevelConfig {
        &self.levels[self.level_index]
    }

    pub fn is_enemy_alive(&self) -> bool {
        self.enemy_hp > 0
    }

    pub fn is_player_alive(&self) -> bool {
        self.player_hp > 0
    }

    /// Damage the enemy, flooring at zero.
    pub fn damage_enemy(&mut self, amount: u32) {
        self.enemy_hp = self.enemy_hp.saturating_sub(amount);
    }

    /// Damage the player, flooring at zero.
    pub fn damage_player(&mut self, amount: u32) {
        self.player_hp = self.player_hp.saturating_sub(amount);
    }

    pub(super) fn push_event(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    /// Take the pending event log, oldest first. The log only grows until
    /// drained, so a driver may batch several turns before replaying.
    pub fn drain_events(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot {
            board: self.board.snapshot(),
            enemy_hp: self.enemy_hp,
            enemy_max_hp: self.enemy_max_hp,
            player_hp: self.player_hp,
            player_max_hp: self.player_max_hp,
            state: self.state,
        }
    }
}
