use serde::{Deserialize, Serialize};
use std::fmt;

/// Label shown on the primary damage line. Only the highest-precedence
/// flag is shown: Critical > Execute > Lucky > Normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitLabel {
    Normal,
    Critical,
    Execute,
    Lucky,
}

impl HitLabel {
    pub fn from_flags(critical: bool, execute: bool, lucky: bool) -> Self {
        if critical {
            HitLabel::Critical
        } else if execute {
            HitLabel::Execute
        } else if lucky {
            HitLabel::Lucky
        } else {
            HitLabel::Normal
        }
    }
}

/// A single thing that happened during an exchange, in the order it happened.
///
/// The presentation layer turns these into log lines via `Display`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatEvent {
    /// The player's attack after every damage stage.
    Hit { damage: u32, label: HitLabel },
    Lifesteal { healed: u32 },
    VampiricStrike { healed: u32 },
    Burning { damage: u32 },
    Bleed { damage: u32 },
    ChainLightning { damage: u32 },
    MonsterDefeated { name: String },
    Dodged,
    ArmorFailed,
    ArmorReduced,
    Thorns { damage: u32 },
    MonsterHit { name: String, damage: u32 },
    PlayerDefeated,
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatEvent::Hit { damage, label } => match label {
                HitLabel::Critical => write!(f, "CRITICAL HIT! You dealt {} damage!", damage),
                HitLabel::Execute => write!(f, "EXECUTE! You dealt {} damage!", damage),
                HitLabel::Lucky => write!(f, "LUCKY! You dealt {} damage!", damage),
                HitLabel::Normal => write!(f, "You dealt {} damage!", damage),
            },
            CombatEvent::Lifesteal { healed } => {
                write!(f, "Lifesteal restored {} HP!", healed)
            }
            CombatEvent::VampiricStrike { healed } => {
                write!(f, "Vampiric strike restored {} HP!", healed)
            }
            CombatEvent::Burning { damage } => write!(f, "Burning dealt {} damage!", damage),
            CombatEvent::Bleed { damage } => write!(f, "Bleeding dealt {} damage!", damage),
            CombatEvent::ChainLightning { damage } => {
                write!(f, "Chain lightning dealt {} damage!", damage)
            }
            CombatEvent::MonsterDefeated { name } => write!(f, "{} is defeated!", name),
            CombatEvent::Dodged => write!(f, "You dodged the attack!"),
            CombatEvent::ArmorFailed => write!(f, "Your armor failed!"),
            CombatEvent::ArmorReduced => write!(f, "Your armor reduced the damage!"),
            CombatEvent::Thorns { damage } => {
                write!(f, "Thorns dealt {} damage back!", damage)
            }
            CombatEvent::MonsterHit { name, damage } => {
                write!(f, "{} hit you for {} damage!", name, damage)
            }
            CombatEvent::PlayerDefeated => write!(f, "You have fallen..."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_precedence() {
        assert_eq!(HitLabel::from_flags(true, true, true), HitLabel::Critical);
        assert_eq!(HitLabel::from_flags(false, true, true), HitLabel::Execute);
        assert_eq!(HitLabel::from_flags(false, false, true), HitLabel::Lucky);
        assert_eq!(HitLabel::from_flags(false, false, false), HitLabel::Normal);
    }

    #[test]
    fn test_hit_lines() {
        let hit = CombatEvent::Hit {
            damage: 7,
            label: HitLabel::Normal,
        };
        assert_eq!(hit.to_string(), "You dealt 7 damage!");
        let crit = CombatEvent::Hit {
            damage: 14,
            label: HitLabel::Critical,
        };
        assert!(crit.to_string().starts_with("CRITICAL"));
    }

    #[test]
    fn test_monster_lines_use_name() {
        let event = CombatEvent::MonsterHit {
            name: "Grim Ghost of Pain".to_string(),
            damage: 2,
        };
        assert_eq!(event.to_string(), "Grim Ghost of Pain hit you for 2 damage!");
    }
}
