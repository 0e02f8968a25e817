//! The simulator's automatic player.

use super::config::SelectionPolicy;
use crate::combat::{CombatEvent, Monster};
use crate::core::{PlayerState, Presenter};
use crate::items::{EffectKind, Item, ItemCategory};
use rand::Rng;

/// Effects in the order the greedy policy prefers them.
const EFFECT_RANKING: [EffectKind; EffectKind::COUNT] = [
    EffectKind::Critical,
    EffectKind::Fury,
    EffectKind::Sharpness,
    EffectKind::Precision,
    EffectKind::Execute,
    EffectKind::Lifesteal,
    EffectKind::VampiricStrike,
    EffectKind::Armor,
    EffectKind::Shield,
    EffectKind::Dodge,
    EffectKind::Lucky,
    EffectKind::Bleed,
    EffectKind::Burning,
    EffectKind::ChainLightning,
    EffectKind::Thorns,
    EffectKind::Poison,
    EffectKind::Regeneration,
    EffectKind::Freeze,
    EffectKind::Berserk,
];

fn greedy_rank(item: &Item) -> usize {
    match item.category() {
        ItemCategory::Damage => 0,
        ItemCategory::Health => 1,
        ItemCategory::Effect => {
            let position = item
                .effect_kind()
                .and_then(|kind| EFFECT_RANKING.iter().position(|k| *k == kind))
                .unwrap_or(EFFECT_RANKING.len());
            2 + position
        }
    }
}

/// Index of the offer card the policy picks. The offer must not be empty.
pub fn choose_item(policy: SelectionPolicy, offer: &[Item], rng: &mut impl Rng) -> usize {
    match policy {
        SelectionPolicy::First => 0,
        SelectionPolicy::Random => rng.gen_range(0..offer.len()),
        SelectionPolicy::Greedy => offer
            .iter()
            .enumerate()
            .min_by_key(|(_, item)| greedy_rank(item))
            .map(|(i, _)| i)
            .unwrap_or(0),
    }
}

/// Presenter that rolls fair dice and keeps per-game tallies.
#[derive(Debug, Default)]
pub struct AutoPlayer {
    pub rolls: u64,
    pub damage_dealt: u64,
    pub damage_taken: u64,
    pub crits: u64,
    pub dodges: u64,
    pub offers_seen: u32,
    pub final_round: Option<u32>,
}

impl Presenter for AutoPlayer {
    fn request_roll(&mut self, rng: &mut impl Rng) -> u8 {
        self.rolls += 1;
        crate::combat::roll_die(rng)
    }

    fn on_exchange_resolved(
        &mut self,
        events: &[CombatEvent],
        _monster: &Monster,
        _player: &PlayerState,
    ) {
        for event in events {
            match event {
                CombatEvent::Hit { damage, label } => {
                    self.damage_dealt += *damage as u64;
                    if *label == crate::combat::HitLabel::Critical {
                        self.crits += 1;
                    }
                }
                CombatEvent::MonsterHit { damage, .. } => self.damage_taken += *damage as u64,
                CombatEvent::Dodged => self.dodges += 1,
                _ => {}
            }
        }
    }

    fn on_loot_offered(&mut self, _items: &[Item]) {
        self.offers_seen += 1;
    }

    fn on_game_over(&mut self, final_round: u32) {
        self.final_round = Some(final_round);
    }
}
