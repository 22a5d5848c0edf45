//! Simulation report generation.

use serde::Serialize;

/// Outcome of one simulated battle run.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub won_campaign: bool,
    pub defeated: bool,
    pub timed_out: bool,
    pub turns: u32,
    pub casts: u32,
    pub total_cast_damage: u64,
    pub levels_cleared: u32,
}

/// Aggregated results from a simulation batch.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_battles: u32,
    pub campaigns_won: u32,
    pub defeats: u32,
    pub timeouts: u32,
    pub win_rate: f64,
    pub avg_turns: f64,
    pub avg_levels_cleared: f64,
    pub avg_damage_per_cast: f64,
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_battles = runs.len() as u32;
        let campaigns_won = runs.iter().filter(|r| r.won_campaign).count() as u32;
        let defeats = runs.iter().filter(|r| r.defeated).count() as u32;
        let timeouts = runs.iter().filter(|r| r.timed_out).count() as u32;

        let denom = num_battles.max(1) as f64;
        let win_rate = campaigns_won as f64 / denom;
        let avg_turns = runs.iter().map(|r| r.turns as f64).sum::<f64>() / denom;
        let avg_levels_cleared =
            runs.iter().map(|r| r.levels_cleared as f64).sum::<f64>() / denom;

        let total_casts: u64 = runs.iter().map(|r| r.casts as u64).sum();
        let total_damage: u64 = runs.iter().map(|r| r.total_cast_damage).sum();
        let avg_damage_per_cast = total_damage as f64 / total_casts.max(1) as f64;

        Self {
            num_battles,
            campaigns_won,
            defeats,
            timeouts,
            win_rate,
            avg_turns,
            avg_levels_cleared,
            avg_damage_per_cast,
            run_stats: runs,
        }
    }

    /// Human-readable summary for the CLI.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Simulation Report ===\n");
        out.push_str(&format!("Battles:            {}\n", self.num_battles));
        out.push_str(&format!(
            "Campaigns won:      {} ({:.1}%)\n",
            self.campaigns_won,
            self.win_rate * 100.0
        ));
        out.push_str(&format!("Defeats:            {}\n", self.defeats));
        out.push_str(&format!("Timeouts:           {}\n", self.timeouts));
        out.push_str(&format!("Avg turns:          {:.1}\n", self.avg_turns));
        out.push_str(&format!(
            "Avg levels cleared: {:.2}\n",
            self.avg_levels_cleared
        ));
        out.push_str(&format!(
            "Avg damage/cast:    {:.0}\n",
            self.avg_damage_per_cast
        ));
        out
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
