//! Engine error taxonomy.
//!
//! Illegal commands are inert: the controller returns
//! `EngineError::IllegalCommand` and leaves state untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by engine commands.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Coordinate outside the grid.
    #[error("coordinate ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    /// A command precondition was violated.
    #[error("illegal command: {0}")]
    IllegalCommand(Rejection),

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<Rejection> for EngineError {
    fn from(rejection: Rejection) -> Self {
        EngineError::IllegalCommand(rejection)
    }
}

/// The precondition an illegal command violated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum Rejection {
    #[error("the game is over")]
    GameOver,
    #[error("the cell is occupied")]
    CellOccupied,
    #[error("a skill effect is still resolving")]
    TurnLocked,
    #[error("a target selection is pending")]
    TargetPending,
    #[error("a skill was already used this turn")]
    SkillAlreadyUsedThisTurn,
    #[error("not enough skill points")]
    InsufficientPoints,
    #[error("the skill was already consumed this game")]
    SkillConsumed,
    #[error("the skill's precondition does not hold")]
    SkillUnavailable,
    #[error("the target is not an opposing stone")]
    InvalidTarget,
    #[error("no target selection is pending")]
    NoPendingTarget,
    #[error("the skill does not take a target")]
    TargetNotExpected,
    #[error("the effect token does not match the effect in flight")]
    StaleToken,
    #[error("no effect is waiting to resolve")]
    NothingToResolve,
}
