use super::constants::*;
use crate::items::types::{Item, Upgrade};
use crate::items::EffectKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which operations the game currently accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Rolling enabled.
    Combat,
    /// Monster down, waiting for the player to pick one of three items.
    LootSelection,
    /// Player down. Only a reset leaves this phase.
    GameOver,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GamePhase::Combat => "combat",
            GamePhase::LootSelection => "loot selection",
            GamePhase::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// Everything the player has accumulated this run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub health: u32,
    pub max_health: u32,
    /// Damage multiplier as a whole percentage (100 = x1.0). Only grows.
    pub damage_percent: u32,
    /// Owned Effect items in acquisition order. Only grows.
    pub items: Vec<Item>,
    /// Running sum of every Burning magnitude picked this run.
    pub burning: u32,
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            health: STARTING_HEALTH,
            max_health: STARTING_HEALTH,
            damage_percent: STARTING_DAMAGE_PERCENT,
            items: Vec::new(),
            burning: 0,
        }
    }

    pub fn damage_multiplier(&self) -> f64 {
        self.damage_percent as f64 / 100.0
    }

    pub fn health_fraction(&self) -> f64 {
        if self.max_health == 0 {
            0.0
        } else {
            self.health as f64 / self.max_health as f64
        }
    }

    /// Applies a picked item.
    ///
    /// Damage raises the multiplier, Health raises max and current health by
    /// the same amount, and effects join the owned list (Burning also feeds
    /// the burning accumulator).
    pub fn apply_item(&mut self, item: Item) {
        match item.upgrade {
            Upgrade::Damage { percent } => {
                self.damage_percent = self.damage_percent.saturating_add(percent);
            }
            Upgrade::Health { amount } => {
                self.max_health = self.max_health.saturating_add(amount);
                self.health = self.health.saturating_add(amount).min(self.max_health);
            }
            Upgrade::Effect(effect) => {
                if effect.kind == EffectKind::Burning {
                    self.burning = self.burning.saturating_add(effect.magnitude);
                }
                self.items.push(item);
            }
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}
