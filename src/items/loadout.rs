//! Owned effects grouped by kind.
//!
//! Built once per exchange from the player's item list so each combat stage
//! reads its own group instead of rescanning every item.

use super::effects::{Effect, EffectKind};
use super::types::Item;

#[derive(Debug, Clone, Default)]
pub struct Loadout {
    groups: [Vec<Effect>; EffectKind::COUNT],
}

impl Loadout {
    pub fn from_items(items: &[Item]) -> Self {
        Self::from_effects(items.iter().filter_map(Item::effect))
    }

    pub fn from_effects(effects: impl IntoIterator<Item = Effect>) -> Self {
        let mut loadout = Self::default();
        for effect in effects {
            loadout.groups[effect.kind.index()].push(effect);
        }
        loadout
    }

    /// Owned effects of one kind, in acquisition order.
    pub fn of(&self, kind: EffectKind) -> &[Effect] {
        &self.groups[kind.index()]
    }

    pub fn has(&self, kind: EffectKind) -> bool {
        !self.of(kind).is_empty()
    }

    /// Sum of magnitudes for one kind.
    pub fn total(&self, kind: EffectKind) -> u32 {
        self.of(kind)
            .iter()
            .fold(0u32, |acc, e| acc.saturating_add(e.magnitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_and_totals() {
        let loadout = Loadout::from_effects([
            Effect::new(EffectKind::Sharpness, 2),
            Effect::new(EffectKind::Bleed, 1),
            Effect::new(EffectKind::Sharpness, 5),
        ]);
        assert_eq!(loadout.of(EffectKind::Sharpness).len(), 2);
        assert_eq!(loadout.total(EffectKind::Sharpness), 7);
        assert_eq!(loadout.total(EffectKind::Bleed), 1);
        assert_eq!(loadout.total(EffectKind::Armor), 0);
        assert!(!loadout.has(EffectKind::Armor));
    }

    #[test]
    fn test_from_items_skips_stat_upgrades() {
        use crate::items::types::Upgrade;
        let item = |upgrade| Item {
            id: String::new(),
            name: String::new(),
            description: String::new(),
            upgrade,
        };
        let loadout = Loadout::from_items(&[
            item(Upgrade::Damage { percent: 5 }),
            item(Upgrade::Effect(Effect::new(EffectKind::Thorns, 3))),
            item(Upgrade::Health { amount: 2 }),
        ]);
        assert_eq!(loadout.total(EffectKind::Thorns), 3);
        assert!(EffectKind::ALL
            .iter()
            .filter(|k| **k != EffectKind::Thorns)
            .all(|k| !loadout.has(*k)));
    }
}
