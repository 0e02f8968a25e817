//! Simulation report generation.

use super::config::SelectionPolicy;
use super::runner::RunStats;
use crate::items::EffectKind;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_timed_out: u32,
    pub policy: String,

    // Rounds reached
    pub avg_final_round: f64,
    pub median_final_round: u32,
    pub min_final_round: u32,
    pub max_final_round: u32,
    pub round_distribution: BTreeMap<u32, u32>,

    // Combat
    pub avg_rolls: f64,
    pub avg_damage_dealt: f64,
    pub avg_damage_taken: f64,
    pub crit_rate: f64,

    // Loot
    pub offers_seen: u32,
    pub category_picks: BTreeMap<String, u32>,
    pub effect_picks: BTreeMap<String, u32>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn mean(values: impl Iterator<Item = f64>, count: u32) -> f64 {
    values.sum::<f64>() / count.max(1) as f64
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, policy: SelectionPolicy) -> Self {
        let num_runs = runs.len() as u32;
        let runs_timed_out = runs.iter().filter(|r| r.timed_out).count() as u32;

        let mut rounds: Vec<u32> = runs.iter().map(|r| r.final_round).collect();
        rounds.sort_unstable();
        let median_final_round = rounds.get(rounds.len() / 2).copied().unwrap_or(0);
        let min_final_round = rounds.first().copied().unwrap_or(0);
        let max_final_round = rounds.last().copied().unwrap_or(0);

        let mut round_distribution = BTreeMap::new();
        for round in &rounds {
            *round_distribution.entry(*round).or_insert(0) += 1;
        }

        let total_rolls: u64 = runs.iter().map(|r| r.rolls).sum();
        let total_crits: u64 = runs.iter().map(|r| r.crits).sum();
        let crit_rate = if total_rolls > 0 {
            total_crits as f64 / total_rolls as f64
        } else {
            0.0
        };

        let mut category_picks = BTreeMap::new();
        for (slot, name) in ["Damage", "Health", "Effect"].iter().enumerate() {
            let picks = runs.iter().map(|r| r.category_picks[slot]).sum();
            category_picks.insert(name.to_string(), picks);
        }

        let mut effect_picks = BTreeMap::new();
        for kind in EffectKind::ALL {
            let picks: u32 = runs
                .iter()
                .map(|r| r.effect_picks.get(kind.index()).copied().unwrap_or(0))
                .sum();
            if picks > 0 {
                effect_picks.insert(kind.name().to_string(), picks);
            }
        }

        let offers_seen = runs.iter().map(|r| r.offers_seen).sum();

        Self {
            num_runs,
            runs_timed_out,
            policy: policy.to_string(),
            avg_final_round: mean(runs.iter().map(|r| r.final_round as f64), num_runs),
            median_final_round,
            min_final_round,
            max_final_round,
            round_distribution,
            avg_rolls: mean(runs.iter().map(|r| r.rolls as f64), num_runs),
            avg_damage_dealt: mean(runs.iter().map(|r| r.damage_dealt as f64), num_runs),
            avg_damage_taken: mean(runs.iter().map(|r| r.damage_taken as f64), num_runs),
            crit_rate,
            offers_seen,
            category_picks,
            effect_picks,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                  DICE OF FATE SIMULATION\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} timed out, policy {}\n\n",
            self.num_runs, self.runs_timed_out, self.policy
        ));

        report.push_str("── ROUNDS ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Round:  {:.2}\n", self.avg_final_round));
        report.push_str(&format!("  Median:           {}\n", self.median_final_round));
        report.push_str(&format!(
            "  Range:            {} - {}\n\n",
            self.min_final_round, self.max_final_round
        ));

        report.push_str("── COMBAT ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Rolls:        {:.1}\n", self.avg_rolls));
        report.push_str(&format!("  Avg Damage Dealt: {:.1}\n", self.avg_damage_dealt));
        report.push_str(&format!("  Avg Damage Taken: {:.1}\n", self.avg_damage_taken));
        report.push_str(&format!(
            "  Crit Rate:        {:.1}%\n\n",
            self.crit_rate * 100.0
        ));

        report.push_str("── ROUND REACHED ────────────────────────────────────────────────\n");
        for (round, count) in &self.round_distribution {
            let pct = (*count as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar = "█".repeat((pct / 2.0) as usize);
            report.push_str(&format!("  Round {:3}: {:>5.1}% {}\n", round, pct, bar));
        }
        report.push('\n');

        report.push_str("── LOOT PICKS ───────────────────────────────────────────────────\n");
        report.push_str(&format!("  {:<16} {}\n", "Offers", self.offers_seen));
        for (category, picks) in &self.category_picks {
            report.push_str(&format!("  {:<16} {}\n", category, picks));
        }
        if !self.effect_picks.is_empty() {
            report.push_str("  Effects:\n");
            for (name, picks) in &self.effect_picks {
                report.push_str(&format!("    {:<16} {}\n", name, picks));
            }
        }

        report
    }

    /// Serialize the aggregates as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
