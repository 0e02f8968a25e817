//! Boundary between the game and whatever displays it.
//!
//! The game never draws anything. It asks its presenter for die faces and
//! tells it what happened; the terminal UI and the simulator's bot are both
//! presenters.

use super::game_state::PlayerState;
use crate::combat::{roll_die, CombatEvent, Monster};
use crate::items::Item;
use rand::Rng;

pub trait Presenter {
    /// Supplies the face of the die for the next exchange.
    fn request_roll(&mut self, rng: &mut impl Rng) -> u8 {
        roll_die(rng)
    }

    /// A new monster appeared for `round`.
    fn on_round_started(&mut self, _round: u32, _monster: &Monster) {}

    fn on_exchange_resolved(
        &mut self,
        _events: &[CombatEvent],
        _monster: &Monster,
        _player: &PlayerState,
    ) {
    }

    fn on_loot_offered(&mut self, _items: &[Item]) {}

    fn on_game_over(&mut self, _final_round: u32) {}
}

/// Presenter that rolls fair dice and ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}
