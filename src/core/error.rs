use super::game_state::GamePhase;

/// Inputs the game rejects. None of these change state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("not allowed during {actual} (requires {expected})")]
    PhaseMismatch {
        expected: GamePhase,
        actual: GamePhase,
    },

    #[error("a roll is already being resolved")]
    RollInFlight,

    #[error("no roll is waiting to be resolved")]
    NoPendingRoll,

    #[error("die face {0} is outside 1..=6")]
    InvalidDieFace(u8),

    #[error("item {0} is not part of the current offer")]
    ItemNotOffered(String),
}
