//! Dice of Fate - a turn-based dice combat roguelite.
//!
//! Roll a die, hit a monster, take a hit back, and pick one of three
//! upgrades after every kill. This crate exposes the game engine for the
//! terminal front end, the balance simulator, and tests.

pub mod build_info;
pub mod combat;
pub mod core;
pub mod items;
pub mod simulator;

pub use crate::core::constants::*;
pub use crate::core::{Game, GameError, GamePhase, NullPresenter, PlayerState, Presenter};
