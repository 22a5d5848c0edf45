// Board constants
pub const BOARD_SIZE: usize = 6;
pub const BOMB_SPAWN_RATE: f64 = 0.1;

// Damage constants
pub const DAMAGE_PER_MATCH: u32 = 150;
pub const SWEEP_DAMAGE_PER_GEM: u32 = 50;

// Conversion effect constants
pub const MAX_RANDOM_CONVERSIONS: usize = 5;

// Fallback level constants (used when the level config is missing or invalid)
pub const DEFAULT_ENEMY_MAX_HP: u32 = 500;
pub const DEFAULT_ENEMY_MIN_DAMAGE: u32 = 500;
pub const DEFAULT_ENEMY_MAX_DAMAGE: u32 = 1000;
pub const DEFAULT_PLAYER_HP: u32 = 10_000;
