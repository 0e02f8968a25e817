use crate::core::constants::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Glyphs used for monster patterns. Repeats weight the draw.
pub const MONSTER_SYMBOLS: [char; 8] = ['\'', '#', '.', ',', '[', ']', '\'', '1'];

const NAME_PREFIXES: [&str; 7] = [
    "Dark", "Ancient", "Cursed", "Wicked", "Shadow", "Bloody", "Grim",
];
const NAME_CREATURES: [&str; 9] = [
    "Golem", "Demon", "Dragon", "Ghost", "Skeleton", "Beast", "Warden", "Warlock", "Prince",
];
const NAME_SUFFIXES: [&str; 8] = [
    "of the Abyss",
    "of Chaos",
    "of Darkness",
    "of the Void",
    "of the Night",
    "of Death",
    "of Pain",
    "Ha-ha-ha-ha",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    /// Newline-joined glyph grid.
    pub pattern: String,
    pub max_health: u32,
    pub current_health: u32,
}

impl Monster {
    pub fn new(name: String, pattern: String, max_health: u32) -> Self {
        Self {
            name,
            pattern,
            max_health,
            current_health: max_health,
        }
    }

    /// True when current health is at or below 30% of max.
    pub fn is_executable(&self) -> bool {
        self.current_health as f64 <= self.max_health as f64 * EXECUTE_HEALTH_THRESHOLD
    }

    pub fn health_fraction(&self) -> f64 {
        if self.max_health == 0 {
            0.0
        } else {
            self.current_health as f64 / self.max_health as f64
        }
    }
}

/// Rolls a fair six-sided die.
pub fn roll_die(rng: &mut impl Rng) -> u8 {
    rng.gen_range(1..=DIE_FACES)
}

pub fn generate_monster_name(rng: &mut impl Rng) -> String {
    let prefix = NAME_PREFIXES[rng.gen_range(0..NAME_PREFIXES.len())];
    let creature = NAME_CREATURES[rng.gen_range(0..NAME_CREATURES.len())];
    let suffix = NAME_SUFFIXES[rng.gen_range(0..NAME_SUFFIXES.len())];

    format!("{} {} {}", prefix, creature, suffix)
}

pub fn generate_monster_pattern(rng: &mut impl Rng) -> String {
    let width = rng.gen_range(MONSTER_PATTERN_WIDTH_MIN..=MONSTER_PATTERN_WIDTH_MAX);
    let height = rng.gen_range(MONSTER_PATTERN_HEIGHT_MIN..=MONSTER_PATTERN_HEIGHT_MAX);

    let mut rows = Vec::with_capacity(height);
    for _ in 0..height {
        let mut row = String::with_capacity(width);
        for _ in 0..width {
            row.push(MONSTER_SYMBOLS[rng.gen_range(0..MONSTER_SYMBOLS.len())]);
        }
        rows.push(row);
    }
    rows.join("\n")
}

/// Max health for a monster of the given round:
/// base in [6, 11] plus (round - 1) growth steps of [2, 4].
pub fn monster_health(round: u32, rng: &mut impl Rng) -> u32 {
    let base = rng.gen_range(MONSTER_BASE_HEALTH_MIN..=MONSTER_BASE_HEALTH_MAX);
    let growth = rng.gen_range(MONSTER_HEALTH_GROWTH_MIN..=MONSTER_HEALTH_GROWTH_MAX);
    base + round.saturating_sub(1) * growth
}

/// Spawns a fresh monster at full health for the given round.
pub fn spawn_monster(round: u32, rng: &mut impl Rng) -> Monster {
    let max_health = monster_health(round, rng);
    let name = generate_monster_name(rng);
    let pattern = generate_monster_pattern(rng);
    Monster::new(name, pattern, max_health)
}
