//! Effect registry: the closed set of item effects, how their magnitudes
//! scale, and how they describe themselves on a loot card.

use serde::{Deserialize, Serialize};

/// How an effect's magnitude is rolled and read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scale {
    /// Absolute value, e.g. +3 damage.
    Flat,
    /// Percentage, e.g. +20% or a 20% chance.
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EffectKind {
    Sharpness,
    Burning,
    Poison,
    Lifesteal,
    Critical,
    Thorns,
    Dodge,
    Armor,
    Regeneration,
    Fury,
    Precision,
    VampiricStrike,
    ChainLightning,
    Freeze,
    Bleed,
    Execute,
    Shield,
    Berserk,
    Lucky,
}

impl EffectKind {
    pub const COUNT: usize = 19;

    /// All kinds in registry order.
    pub const ALL: [EffectKind; EffectKind::COUNT] = [
        EffectKind::Sharpness,
        EffectKind::Burning,
        EffectKind::Poison,
        EffectKind::Lifesteal,
        EffectKind::Critical,
        EffectKind::Thorns,
        EffectKind::Dodge,
        EffectKind::Armor,
        EffectKind::Regeneration,
        EffectKind::Fury,
        EffectKind::Precision,
        EffectKind::VampiricStrike,
        EffectKind::ChainLightning,
        EffectKind::Freeze,
        EffectKind::Bleed,
        EffectKind::Execute,
        EffectKind::Shield,
        EffectKind::Berserk,
        EffectKind::Lucky,
    ];

    /// Position of this kind in [`EffectKind::ALL`] and [`REGISTRY`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn def(self) -> &'static EffectDef {
        &REGISTRY[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.def().name
    }

    pub fn scale(self) -> Scale {
        self.def().scale
    }

    pub fn describe(self, magnitude: u32) -> String {
        (self.def().describe)(magnitude)
    }

    /// Kinds that are offered and owned but never touch an exchange.
    pub fn is_inert(self) -> bool {
        matches!(
            self,
            EffectKind::Poison | EffectKind::Regeneration | EffectKind::Freeze | EffectKind::Berserk
        )
    }
}

/// One registry entry.
pub struct EffectDef {
    pub kind: EffectKind,
    pub name: &'static str,
    pub scale: Scale,
    pub describe: fn(u32) -> String,
}

impl std::fmt::Debug for EffectDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectDef")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("scale", &self.scale)
            .finish()
    }
}

pub static REGISTRY: [EffectDef; EffectKind::COUNT] = [
    EffectDef {
        kind: EffectKind::Sharpness,
        name: "Sharpness",
        scale: Scale::Flat,
        describe: |v| format!("+{} flat damage", v),
    },
    EffectDef {
        kind: EffectKind::Burning,
        name: "Burning",
        scale: Scale::Flat,
        describe: |v| format!("{} damage every turn", v),
    },
    EffectDef {
        kind: EffectKind::Poison,
        name: "Poison",
        scale: Scale::Flat,
        describe: |v| format!("{} damage over time", v),
    },
    EffectDef {
        kind: EffectKind::Lifesteal,
        name: "Lifesteal",
        scale: Scale::Flat,
        describe: |v| format!("Restores {} HP on attack", v),
    },
    EffectDef {
        kind: EffectKind::Critical,
        name: "Critical Strike",
        scale: Scale::Percent,
        describe: |v| format!("{}% chance to double damage", v),
    },
    EffectDef {
        kind: EffectKind::Thorns,
        name: "Thorns",
        scale: Scale::Flat,
        describe: |v| format!("Deals {} damage to attackers", v),
    },
    EffectDef {
        kind: EffectKind::Dodge,
        name: "Dodge",
        scale: Scale::Percent,
        describe: |v| format!("{}% chance to dodge", v),
    },
    EffectDef {
        kind: EffectKind::Armor,
        name: "Armor",
        scale: Scale::Flat,
        describe: |v| format!("Reduces damage taken by {}", v),
    },
    EffectDef {
        kind: EffectKind::Regeneration,
        name: "Regeneration",
        scale: Scale::Flat,
        describe: |v| format!("Restores {} HP every turn", v),
    },
    EffectDef {
        kind: EffectKind::Fury,
        name: "Fury",
        scale: Scale::Percent,
        describe: |v| format!("+{}% damage", v),
    },
    EffectDef {
        kind: EffectKind::Precision,
        name: "Precision",
        scale: Scale::Flat,
        describe: |v| format!("+{} damage", v),
    },
    EffectDef {
        kind: EffectKind::VampiricStrike,
        name: "Vampiric Strike",
        scale: Scale::Percent,
        describe: |v| format!("Restores {}% of damage dealt", v),
    },
    EffectDef {
        kind: EffectKind::ChainLightning,
        name: "Chain Lightning",
        scale: Scale::Flat,
        describe: |v| format!("30% chance to deal {} extra damage", v),
    },
    EffectDef {
        kind: EffectKind::Freeze,
        name: "Freeze",
        scale: Scale::Percent,
        describe: |v| format!("{}% chance to freeze the enemy", v),
    },
    EffectDef {
        kind: EffectKind::Bleed,
        name: "Bleed",
        scale: Scale::Flat,
        describe: |v| format!("{} bleed damage", v),
    },
    EffectDef {
        kind: EffectKind::Execute,
        name: "Execute",
        scale: Scale::Percent,
        describe: |v| format!("+{}% damage against enemies below 30% HP", v),
    },
    EffectDef {
        kind: EffectKind::Shield,
        name: "Shield",
        scale: Scale::Percent,
        describe: |v| format!("Reduces damage taken by {}%", v),
    },
    EffectDef {
        kind: EffectKind::Berserk,
        name: "Berserk",
        scale: Scale::Percent,
        describe: |v| format!("+{}% damage while below 50% HP", v),
    },
    EffectDef {
        kind: EffectKind::Lucky,
        name: "Lucky",
        scale: Scale::Percent,
        describe: |v| format!("{}% chance of bonus damage", v),
    },
];

/// An owned effect: a kind and the magnitude rolled for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    pub magnitude: u32,
}

impl Effect {
    pub fn new(kind: EffectKind, magnitude: u32) -> Self {
        Self { kind, magnitude }
    }

    pub fn description(&self) -> String {
        self.kind.describe(self.magnitude)
    }

    /// Probability gate shared by percent-chance effects: `uniform * 100 < magnitude`.
    pub fn triggers(&self, uniform: f64) -> bool {
        uniform * 100.0 < self.magnitude as f64
    }

    /// Running-total multiplier used by Fury and Execute: `floor(total * (1 + m / 100))`.
    pub fn amplify(&self, total: u32) -> u32 {
        let scaled = total as u64 * (100 + self.magnitude as u64) / 100;
        scaled.min(u32::MAX as u64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_matches_kind_order() {
        for (i, kind) in EffectKind::ALL.iter().enumerate() {
            assert_eq!(REGISTRY[i].kind, *kind);
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_registry_names_are_unique() {
        let mut names: Vec<_> = REGISTRY.iter().map(|d| d.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), EffectKind::COUNT);
    }

    #[test]
    fn test_scales() {
        assert_eq!(EffectKind::Sharpness.scale(), Scale::Flat);
        assert_eq!(EffectKind::Critical.scale(), Scale::Percent);
        assert_eq!(EffectKind::ChainLightning.scale(), Scale::Flat);
        assert_eq!(EffectKind::Shield.scale(), Scale::Percent);
        let percent = EffectKind::ALL
            .iter()
            .filter(|k| k.scale() == Scale::Percent)
            .count();
        assert_eq!(percent, 9);
    }

    #[test]
    fn test_descriptions_embed_magnitude() {
        for kind in EffectKind::ALL {
            assert!(kind.describe(17).contains("17"), "{:?}", kind);
        }
    }

    #[test]
    fn test_triggers_bounds() {
        let always = Effect::new(EffectKind::Critical, 100);
        let never = Effect::new(EffectKind::Critical, 0);
        assert!(always.triggers(0.0));
        assert!(always.triggers(0.9999));
        assert!(!never.triggers(0.0));
        assert!(!never.triggers(0.5));
    }

    #[test]
    fn test_amplify_floors() {
        assert_eq!(Effect::new(EffectKind::Fury, 50).amplify(10), 15);
        assert_eq!(Effect::new(EffectKind::Fury, 10).amplify(7), 7);
        assert_eq!(Effect::new(EffectKind::Execute, 33).amplify(3), 3);
        // 50 * 1.14 is 56.99.. in floating point; integer math keeps it exact
        assert_eq!(Effect::new(EffectKind::Fury, 14).amplify(50), 57);
    }

    #[test]
    fn test_inert_kinds() {
        let inert: Vec<_> = EffectKind::ALL.iter().filter(|k| k.is_inert()).collect();
        assert_eq!(inert.len(), 4);
    }
}
