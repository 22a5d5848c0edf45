//! Gembattle - Turn-Based Puzzle-Battle Engine
//!
//! The core of a gem-board battle game: skill targeting, chain-reaction
//! elimination, damage, gravity/refill, and the player/enemy turn
//! machine with level progression. Rendering, animation timing, and
//! input wiring live outside this crate; it exposes read-only snapshots
//! and an ordered event log instead.

pub mod battle;
pub mod board;
pub mod config;
pub mod constants;
pub mod heroes;
pub mod simulator;

pub use battle::{BattleEvent, BattleSession, BattleSnapshot, BattleState, ResolutionRules};
pub use board::{Board, Gem, Position};
pub use config::GameConfig;
