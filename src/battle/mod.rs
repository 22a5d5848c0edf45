//! Battle resolution: targeting, chain expansion, damage, conversion
//! effects, and the turn state machine.

pub mod chain;
pub mod damage;
pub mod effects;
pub mod logic;
pub mod targeting;
pub mod types;

pub use chain::{expand_eliminations, ChainMode};
pub use logic::{cast, choose_hero, enemy_turn, resume};
pub use types::{BattleEvent, BattleSession, BattleSnapshot, BattleState, ResolutionRules};
