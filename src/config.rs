//! Level and player configuration.
//!
//! Config arrives as JSON from an external provider. Anything malformed,
//! missing, or inconsistent falls back to the built-in default campaign
//! rather than failing: one level against a 500 HP enemy hitting for
//! 500-1000, player at 10000 HP.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ENEMY_MAX_DAMAGE, DEFAULT_ENEMY_MAX_HP, DEFAULT_ENEMY_MIN_DAMAGE, DEFAULT_PLAYER_HP,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemyConfig {
    pub name: String,
    pub max_hp: u32,
    #[serde(default = "default_min_damage")]
    pub min_damage: u32,
    #[serde(default = "default_max_damage")]
    pub max_damage: u32,
}

fn default_min_damage() -> u32 {
    DEFAULT_ENEMY_MIN_DAMAGE
}

fn default_max_damage() -> u32 {
    DEFAULT_ENEMY_MAX_DAMAGE
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelRewards {
    pub gold: u32,
    pub exp: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelConfig {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    pub enemy: EnemyConfig,
    #[serde(default)]
    pub rewards: Option<LevelRewards>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerConfig {
    pub initial_hp: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    pub levels: Vec<LevelConfig>,
    pub player: PlayerConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            levels: vec![LevelConfig {
                id: 1,
                name: "Shadow Lich".to_string(),
                enemy: EnemyConfig {
                    name: "Shadow Lich".to_string(),
                    max_hp: DEFAULT_ENEMY_MAX_HP,
                    min_damage: DEFAULT_ENEMY_MIN_DAMAGE,
                    max_damage: DEFAULT_ENEMY_MAX_DAMAGE,
                },
                rewards: None,
            }],
            player: PlayerConfig {
                initial_hp: DEFAULT_PLAYER_HP,
            },
        }
    }
}

impl GameConfig {
    /// Structural validity: at least one level, positive HP everywhere,
    /// and no inverted damage range.
    pub fn is_valid(&self) -> bool {
        !self.levels.is_empty()
            && self.player.initial_hp > 0
            && self.levels.iter().all(|level| {
                level.enemy.max_hp > 0 && level.enemy.min_damage <= level.enemy.max_damage
            })
    }
}

/// Parse a JSON config string, falling back to the default campaign when
/// the JSON is malformed or fails validation.
pub fn parse_config(json: &str) -> GameConfig {
    match serde_json::from_str::<GameConfig>(json) {
        Ok(config) if config.is_valid() => config,
        _ => GameConfig::default(),
    }
}

/// Load a JSON config file, falling back to the default campaign when the
/// file is missing or unreadable.
pub fn load_config(path: &str) -> GameConfig {
    match std::fs::read_to_string(path) {
        Ok(json) => parse_config(&json),
        Err(_) => GameConfig::default(),
    }
}
