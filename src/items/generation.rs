//! Loot generation: round-scaled magnitudes, the candidate pool, and the
//! three-card offer shown after each kill.

use super::effects::{Effect, EffectKind, Scale};
use super::types::{Item, Upgrade};
use crate::core::constants::*;
use rand::seq::SliceRandom;
use rand::Rng;

pub const DAMAGE_ITEM_NAME: &str = "Enchanted Blade";
pub const HEALTH_ITEM_NAME: &str = "Healing Potion";

/// Flat magnitude for the given round.
/// Early rounds roll 1-5; later rounds grow by half a point per round.
pub fn flat_magnitude(round: u32, rng: &mut impl Rng) -> u32 {
    if round < EARLY_GAME_ROUND_LIMIT {
        rng.gen_range(EARLY_FLAT_MIN..=EARLY_FLAT_MAX)
    } else {
        LATE_FLAT_BASE + round / 2 + rng.gen_range(0..=LATE_FLAT_SPREAD)
    }
}

/// Percent magnitude for the given round.
/// Early rounds roll 3-10; later rounds grow by two points per round.
pub fn percent_magnitude(round: u32, rng: &mut impl Rng) -> u32 {
    if round < EARLY_GAME_ROUND_LIMIT {
        rng.gen_range(EARLY_PERCENT_MIN..=EARLY_PERCENT_MAX)
    } else {
        LATE_PERCENT_BASE
            + round.saturating_mul(LATE_PERCENT_PER_ROUND)
            + rng.gen_range(0..=LATE_PERCENT_SPREAD)
    }
}

pub fn magnitude_for(scale: Scale, round: u32, rng: &mut impl Rng) -> u32 {
    match scale {
        Scale::Flat => flat_magnitude(round, rng),
        Scale::Percent => percent_magnitude(round, rng),
    }
}

/// Item ids are v4 UUIDs built from the supplied RNG so generation stays a
/// function of the RNG stream.
fn item_id(rng: &mut impl Rng) -> String {
    uuid::Builder::from_random_bytes(rng.gen())
        .into_uuid()
        .to_string()
}

pub fn damage_item(round: u32, rng: &mut impl Rng) -> Item {
    let percent = percent_magnitude(round, rng);
    Item {
        id: item_id(rng),
        name: DAMAGE_ITEM_NAME.to_string(),
        description: format!("+{}% damage", percent),
        upgrade: Upgrade::Damage { percent },
    }
}

pub fn health_item(round: u32, rng: &mut impl Rng) -> Item {
    let amount = flat_magnitude(round, rng);
    Item {
        id: item_id(rng),
        name: HEALTH_ITEM_NAME.to_string(),
        description: format!("+{} health", amount),
        upgrade: Upgrade::Health { amount },
    }
}

pub fn effect_item(kind: EffectKind, round: u32, rng: &mut impl Rng) -> Item {
    let effect = Effect::new(kind, magnitude_for(kind.scale(), round, rng));
    Item {
        id: item_id(rng),
        name: kind.name().to_string(),
        description: effect.description(),
        upgrade: Upgrade::Effect(effect),
    }
}

/// Builds the full candidate pool for a round: one Damage item, one Health
/// item, then one Effect item for each of `EFFECTS_PER_POOL` distinct kinds
/// drawn by uniform shuffle.
pub fn build_loot_pool(round: u32, rng: &mut impl Rng) -> Vec<Item> {
    let mut pool = Vec::with_capacity(2 + EFFECTS_PER_POOL);
    pool.push(damage_item(round, rng));
    pool.push(health_item(round, rng));

    let mut kinds = EffectKind::ALL;
    kinds.shuffle(rng);
    for kind in kinds.iter().take(EFFECTS_PER_POOL) {
        pool.push(effect_item(*kind, round, rng));
    }

    pool
}

/// Shuffles a freshly built pool and keeps the first `OFFER_SIZE` items.
pub fn generate_offer(round: u32, rng: &mut impl Rng) -> Vec<Item> {
    let mut pool = build_loot_pool(round, rng);
    pool.shuffle(rng);
    pool.truncate(OFFER_SIZE);
    tracing::trace!(
        round,
        offer = ?pool.iter().map(|i| i.name.as_str()).collect::<Vec<_>>(),
        "loot offer generated"
    );
    pool
}
