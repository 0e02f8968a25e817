//! Exchange resolution: one player attack and, if the monster survives,
//! one counterattack.
//!
//! The attack runs through a fixed pipeline on a running total:
//! base roll, flat bonuses, Fury, Critical, Lucky, Execute. After the hit
//! lands, heals and damage-over-time stages run in order, each reading the
//! monster health left by the previous stage. The counterattack is skipped
//! entirely when the monster is down.

use super::events::{CombatEvent, HitLabel};
use super::types::Monster;
use crate::core::constants::*;
use crate::core::game_state::PlayerState;
use crate::items::effects::EffectKind;
use crate::items::loadout::Loadout;
use rand::Rng;

/// Result of the attack pipeline before it is applied to the monster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackRoll {
    pub damage: u32,
    pub critical: bool,
    pub lucky: bool,
    pub execute: bool,
}

impl AttackRoll {
    pub fn label(&self) -> HitLabel {
        HitLabel::from_flags(self.critical, self.execute, self.lucky)
    }
}

/// Everything an exchange changed. The inputs are never mutated; callers
/// copy the two health values back onto their own state.
#[derive(Debug, Clone)]
pub struct ExchangeOutcome {
    pub monster_health: u32,
    pub player_health: u32,
    pub events: Vec<CombatEvent>,
    /// Damage of the primary hit (all attack stages applied).
    pub damage_dealt: u32,
    /// Damage the player took from the counterattack.
    pub damage_taken: u32,
    pub monster_defeated: bool,
    pub player_defeated: bool,
}

impl ExchangeOutcome {
    pub fn log_lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}

/// `floor(die * multiplier)` with the multiplier held as a whole percentage.
pub fn base_damage(die: u8, damage_percent: u32) -> u32 {
    let scaled = die as u64 * damage_percent as u64 / 100;
    scaled.min(u32::MAX as u64) as u32
}

/// Runs attack stages 1-7 on the running total.
pub fn roll_attack(
    die: u8,
    damage_percent: u32,
    loadout: &Loadout,
    monster: &Monster,
    rng: &mut impl Rng,
) -> AttackRoll {
    let mut damage = base_damage(die, damage_percent);

    damage = damage.saturating_add(loadout.total(EffectKind::Sharpness));
    damage = damage.saturating_add(loadout.total(EffectKind::Precision));

    for fury in loadout.of(EffectKind::Fury) {
        damage = fury.amplify(damage);
    }

    let mut critical = false;
    for crit in loadout.of(EffectKind::Critical) {
        if crit.triggers(rng.gen()) {
            damage = damage.saturating_mul(2);
            critical = true;
        }
    }

    let mut lucky = false;
    for luck in loadout.of(EffectKind::Lucky) {
        if luck.triggers(rng.gen()) {
            damage = damage.saturating_add(rng.gen_range(LUCKY_BONUS_MIN..=LUCKY_BONUS_MAX));
            lucky = true;
        }
    }

    // Threshold reads the monster as it stood before this hit
    let mut execute = false;
    if monster.is_executable() {
        for exec in loadout.of(EffectKind::Execute) {
            damage = exec.amplify(damage);
            execute = true;
        }
    }

    AttackRoll {
        damage,
        critical,
        lucky,
        execute,
    }
}

/// Counterattack base damage: always 1 on the first round, 1-3 afterwards.
pub fn monster_base_damage(round: u32, rng: &mut impl Rng) -> u32 {
    if round <= STARTING_ROUND {
        MONSTER_BASE_DAMAGE
    } else {
        MONSTER_BASE_DAMAGE + rng.gen_range(0..=MONSTER_DAMAGE_BONUS_MAX)
    }
}

/// Applies flat Armor then percent Shield. Never lets a hit drop below 1.
pub fn mitigate(raw: u32, armor: u32, shield_percent: u32) -> u32 {
    let mut damage = raw
        .saturating_sub(armor)
        .max(MIN_MONSTER_DAMAGE_AFTER_ARMOR);
    if shield_percent > 0 {
        let kept = 100u64.saturating_sub(shield_percent as u64);
        damage = (damage as u64 * kept / 100) as u32;
    }
    damage.max(MIN_MONSTER_DAMAGE_AFTER_ARMOR)
}

fn heal(health: &mut u32, max_health: u32, amount: u32) -> u32 {
    let healed = amount.min(max_health.saturating_sub(*health));
    *health += healed;
    healed
}

/// Resolves one exchange for an already-rolled die face.
///
/// `round` only affects the counterattack's base damage.
pub fn resolve_exchange(
    die: u8,
    round: u32,
    player: &PlayerState,
    monster: &Monster,
    rng: &mut impl Rng,
) -> ExchangeOutcome {
    let loadout = Loadout::from_items(&player.items);
    let mut monster_health = monster.current_health;
    let mut health = player.health;
    let mut events = Vec::new();

    // --- Attack ---
    let attack = roll_attack(die, player.damage_percent, &loadout, monster, rng);
    monster_health = monster_health.saturating_sub(attack.damage);
    events.push(CombatEvent::Hit {
        damage: attack.damage,
        label: attack.label(),
    });

    // --- Heals ---
    if loadout.has(EffectKind::Lifesteal) {
        let healed = heal(
            &mut health,
            player.max_health,
            loadout.total(EffectKind::Lifesteal),
        );
        if healed > 0 {
            events.push(CombatEvent::Lifesteal { healed });
        }
    }

    if loadout.has(EffectKind::VampiricStrike) {
        let percent = loadout.total(EffectKind::VampiricStrike) as u64;
        let amount = (attack.damage as u64 * percent / 100).min(u32::MAX as u64) as u32;
        let healed = heal(&mut health, player.max_health, amount);
        if healed > 0 {
            events.push(CombatEvent::VampiricStrike { healed });
        }
    }

    // --- Damage over time (compounding) ---
    if player.burning > 0 {
        monster_health = monster_health.saturating_sub(player.burning);
        events.push(CombatEvent::Burning {
            damage: player.burning,
        });
    }

    if loadout.has(EffectKind::Bleed) {
        let bleed = loadout.total(EffectKind::Bleed);
        monster_health = monster_health.saturating_sub(bleed);
        events.push(CombatEvent::Bleed { damage: bleed });
    }

    if loadout.has(EffectKind::ChainLightning) && rng.gen::<f64>() < CHAIN_LIGHTNING_CHANCE {
        let chain = loadout.total(EffectKind::ChainLightning);
        monster_health = monster_health.saturating_sub(chain);
        events.push(CombatEvent::ChainLightning { damage: chain });
    }

    if monster_health == 0 {
        events.push(CombatEvent::MonsterDefeated {
            name: monster.name.clone(),
        });
        tracing::debug!(
            die,
            damage = attack.damage,
            monster = %monster.name,
            "monster defeated before counterattack"
        );
        return ExchangeOutcome {
            monster_health,
            player_health: health,
            events,
            damage_dealt: attack.damage,
            damage_taken: 0,
            monster_defeated: true,
            player_defeated: false,
        };
    }

    // --- Counterattack ---
    let mut dodged = false;
    for dodge in loadout.of(EffectKind::Dodge) {
        // Every dodge item rolls, even after one has succeeded
        if dodge.triggers(rng.gen()) {
            dodged = true;
        }
    }

    let mut damage_taken = 0;
    if dodged {
        events.push(CombatEvent::Dodged);
    } else {
        let raw = monster_base_damage(round, rng);
        let armor = loadout.total(EffectKind::Armor);
        let shield = loadout.total(EffectKind::Shield);

        damage_taken = if rng.gen::<f64>() < ARMOR_FAILURE_CHANCE {
            events.push(CombatEvent::ArmorFailed);
            raw
        } else {
            if armor > 0 || shield > 0 {
                events.push(CombatEvent::ArmorReduced);
            }
            mitigate(raw, armor, shield)
        };

        if loadout.has(EffectKind::Thorns) {
            let thorns = loadout.total(EffectKind::Thorns);
            monster_health = monster_health.saturating_sub(thorns);
            events.push(CombatEvent::Thorns { damage: thorns });
        }

        health = health.saturating_sub(damage_taken);
        events.push(CombatEvent::MonsterHit {
            name: monster.name.clone(),
            damage: damage_taken,
        });
    }

    let player_defeated = health == 0;
    let monster_defeated = monster_health == 0;
    if player_defeated {
        events.push(CombatEvent::PlayerDefeated);
    } else if monster_defeated {
        // Thorns finished it off
        events.push(CombatEvent::MonsterDefeated {
            name: monster.name.clone(),
        });
    }

    tracing::debug!(
        die,
        damage = attack.damage,
        damage_taken,
        monster_health,
        player_health = health,
        "exchange resolved"
    );

    ExchangeOutcome {
        monster_health,
        player_health: health,
        events,
        damage_dealt: attack.damage,
        damage_taken,
        monster_defeated,
        player_defeated,
    }
}
