//! Core game state, the round state machine, and balance constants.

pub mod constants;
pub mod error;
pub mod game;
pub mod game_state;
pub mod presenter;

pub use error::GameError;
pub use game::Game;
pub use game_state::{GamePhase, PlayerState};
pub use presenter::{NullPresenter, Presenter};
