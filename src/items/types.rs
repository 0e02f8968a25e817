use super::effects::{Effect, EffectKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Damage,
    Health,
    Effect,
}

impl ItemCategory {
    /// Returns the display name for this category.
    pub fn name(&self) -> &'static str {
        match self {
            ItemCategory::Damage => "Damage",
            ItemCategory::Health => "Health",
            ItemCategory::Effect => "Effect",
        }
    }
}

/// What picking an item does to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Upgrade {
    /// Adds `percent / 100` to the damage multiplier.
    Damage { percent: u32 },
    /// Raises max health and current health by `amount`.
    Health { amount: u32 },
    /// Joins the player's owned effects.
    Effect(Effect),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub upgrade: Upgrade,
}

impl Item {
    pub fn category(&self) -> ItemCategory {
        match self.upgrade {
            Upgrade::Damage { .. } => ItemCategory::Damage,
            Upgrade::Health { .. } => ItemCategory::Health,
            Upgrade::Effect(_) => ItemCategory::Effect,
        }
    }

    /// Numeric value of the item. Damage items report their multiplier
    /// increment (`percent / 100`), everything else its raw magnitude.
    pub fn magnitude(&self) -> f64 {
        match self.upgrade {
            Upgrade::Damage { percent } => percent as f64 / 100.0,
            Upgrade::Health { amount } => amount as f64,
            Upgrade::Effect(effect) => effect.magnitude as f64,
        }
    }

    pub fn effect(&self) -> Option<Effect> {
        match self.upgrade {
            Upgrade::Effect(effect) => Some(effect),
            _ => None,
        }
    }

    pub fn effect_kind(&self) -> Option<EffectKind> {
        self.effect().map(|e| e.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(upgrade: Upgrade) -> Item {
        Item {
            id: "test".to_string(),
            name: "Test".to_string(),
            description: String::new(),
            upgrade,
        }
    }

    #[test]
    fn test_category_follows_upgrade() {
        assert_eq!(
            item(Upgrade::Damage { percent: 5 }).category(),
            ItemCategory::Damage
        );
        assert_eq!(
            item(Upgrade::Health { amount: 2 }).category(),
            ItemCategory::Health
        );
        assert_eq!(
            item(Upgrade::Effect(Effect::new(EffectKind::Bleed, 3))).category(),
            ItemCategory::Effect
        );
    }

    #[test]
    fn test_damage_magnitude_is_multiplier_increment() {
        let blade = item(Upgrade::Damage { percent: 25 });
        assert!((blade.magnitude() - 0.25).abs() < f64::EPSILON);
        assert_eq!(blade.effect_kind(), None);
    }

    #[test]
    fn test_effect_kind() {
        let thorns = item(Upgrade::Effect(Effect::new(EffectKind::Thorns, 4)));
        assert_eq!(thorns.effect_kind(), Some(EffectKind::Thorns));
        assert_eq!(thorns.magnitude(), 4.0);
    }
}
