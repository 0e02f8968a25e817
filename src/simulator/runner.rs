//! Main simulation runner.
//!
//! Each run plays a full game through the public `Game` API with an
//! `AutoPlayer` presenter, so the numbers come from the same code path the
//! terminal UI drives.

use super::config::SimConfig;
use super::policy::{choose_item, AutoPlayer};
use super::report::SimReport;
use crate::core::{Game, GamePhase};
use crate::items::{EffectKind, ItemCategory};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// What happened in one simulated game.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub final_round: u32,
    pub monsters_defeated: u32,
    pub rolls: u64,
    pub damage_dealt: u64,
    pub damage_taken: u64,
    pub crits: u64,
    pub dodges: u64,
    /// Loot offers presented; equals `monsters_defeated`
    pub offers_seen: u32,
    /// Game hit `max_rolls_per_run` before the player died
    pub timed_out: bool,
    /// Picks per category, indexed Damage, Health, Effect
    pub category_picks: [u32; 3],
    /// Picks per effect kind, indexed by `EffectKind::index`
    pub effect_picks: Vec<u32>,
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, &mut rng);
        if config.verbosity >= 2 {
            tracing::info!(
                run = run_idx + 1,
                of = config.num_runs,
                round = stats.final_round,
                rolls = stats.rolls,
                timed_out = stats.timed_out,
                "run finished"
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs, config.policy)
}

/// Play one game to completion or until the roll cap.
///
/// Stacked heals can keep a player alive indefinitely, so the cap is the only
/// guaranteed exit. It is checked before each roll, never while an offer is
/// open, so every kill in a capped run still gets its pick.
pub fn simulate_single_run(config: &SimConfig, rng: &mut ChaCha8Rng) -> RunStats {
    let mut bot = AutoPlayer::default();
    let mut game = Game::start(&mut bot, rng);
    let mut stats = RunStats {
        effect_picks: vec![0; EffectKind::COUNT],
        ..Default::default()
    };

    loop {
        let result = match game.phase() {
            GamePhase::Combat => {
                if bot.rolls >= config.max_rolls_per_run {
                    stats.timed_out = true;
                    tracing::warn!(round = game.round(), "run cut off at roll cap");
                    break;
                }
                game.take_turn(&mut bot, rng).map(|_| ())
            }
            GamePhase::LootSelection => {
                let index = choose_item(config.policy, game.offer(), rng);
                game.select_offer(index, &mut bot, rng).map(|item| {
                    let slot = match item.category() {
                        ItemCategory::Damage => 0,
                        ItemCategory::Health => 1,
                        ItemCategory::Effect => 2,
                    };
                    stats.category_picks[slot] += 1;
                    if let Some(kind) = item.effect_kind() {
                        stats.effect_picks[kind.index()] += 1;
                    }
                })
            }
            GamePhase::GameOver => break,
        };

        if let Err(err) = result {
            tracing::warn!(error = %err, "simulated game rejected an action");
            break;
        }
    }

    stats.final_round = bot.final_round.unwrap_or_else(|| game.round());
    stats.monsters_defeated = game.monsters_defeated();
    stats.offers_seen = bot.offers_seen;
    stats.rolls = bot.rolls;
    stats.damage_dealt = bot.damage_dealt;
    stats.damage_taken = bot.damage_taken;
    stats.crits = bot.crits;
    stats.dodges = bot.dodges;
    stats
}
