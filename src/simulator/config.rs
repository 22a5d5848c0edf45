//! Simulation configuration.

use crate::battle::{ChainMode, ResolutionRules};
use crate::config::GameConfig;

/// Configuration for a batch of simulated battles.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of battles to simulate
    pub num_battles: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Maximum player turns per battle before the run counts as timed out
    pub max_turns_per_battle: u32,

    /// Resolve chains to a fixpoint instead of the classic single pass
    pub fixpoint_chains: bool,

    /// Campaign to play; None uses the built-in default campaign
    pub campaign: Option<GameConfig>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per battle)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_battles: 1000,
            seed: None,
            max_turns_per_battle: 10_000,
            fixpoint_chains: false,
            campaign: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    pub fn rules(&self) -> ResolutionRules {
        ResolutionRules {
            chain_mode: if self.fixpoint_chains {
                ChainMode::Fixpoint
            } else {
                ChainMode::SinglePass
            },
            bonus_sweep_rechains: false,
        }
    }
}
