//! Simulation configuration.

use std::fmt;
use std::str::FromStr;

/// How the bot picks from a loot offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Always the first card.
    First,
    /// Uniformly random card.
    Random,
    /// Damage, then Health, then the best-ranked effect.
    Greedy,
}

impl FromStr for SelectionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first" => Ok(SelectionPolicy::First),
            "random" => Ok(SelectionPolicy::Random),
            "greedy" => Ok(SelectionPolicy::Greedy),
            other => Err(format!(
                "unknown policy '{}' (expected first, random or greedy)",
                other
            )),
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SelectionPolicy::First => "first",
            SelectionPolicy::Random => "random",
            SelectionPolicy::Greedy => "greedy",
        };
        f.write_str(name)
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of games to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Maximum die rolls per game before it is cut off
    pub max_rolls_per_run: u64,

    /// Loot selection strategy
    pub policy: SelectionPolicy,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,

    /// Emit the report as JSON instead of text
    pub json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_rolls_per_run: 10_000,
            policy: SelectionPolicy::Greedy,
            verbosity: 1,
            json: false,
        }
    }
}

impl SimConfig {
    /// Small seeded batch for tests and smoke runs
    pub fn quick(num_runs: u32, seed: u64) -> Self {
        Self {
            num_runs,
            seed: Some(seed),
            max_rolls_per_run: 2_000,
            verbosity: 0,
            ..Default::default()
        }
    }

    /// Same batch size and seed, different policy, for side-by-side comparison
    pub fn with_policy(policy: SelectionPolicy) -> Self {
        Self {
            num_runs: 500,
            seed: Some(42),
            policy,
            ..Default::default()
        }
    }
}
