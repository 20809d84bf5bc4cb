//! Engine configuration.

use serde::{Deserialize, Serialize};

use super::EngineError;
use crate::board::BOARD_SIZE;

/// Stones in a row needed to win.
pub const WIN_LENGTH: usize = 5;

/// Upper bound on a player's skill points.
pub const MAX_SKILL_POINTS: u32 = 15;

/// Delay between accepting a skill and applying its effect.
pub const EFFECT_DELAY_MS: u64 = 800;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Board edge length (default: 15).
    pub board_size: usize,

    /// Run length that wins the game (default: 5).
    pub win_length: usize,

    /// Skill points are clamped to `[0, max_skill_points]`.
    pub max_skill_points: u32,

    /// Resolution delay stamped on every effect token, in milliseconds.
    /// The engine never waits on it; presentation uses it for animation.
    pub effect_delay_ms: u64,

    /// Seed for anything random layered on top of the engine
    /// (the automated player's fallback moves).
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            win_length: WIN_LENGTH,
            max_skill_points: MAX_SKILL_POINTS,
            effect_delay_ms: EFFECT_DELAY_MS,
            seed: 42,
        }
    }
}

impl EngineConfig {
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    pub fn with_win_length(mut self, length: usize) -> Self {
        self.win_length = length;
        self
    }

    pub fn with_max_skill_points(mut self, max: u32) -> Self {
        self.max_skill_points = max;
        self
    }

    pub fn with_effect_delay_ms(mut self, delay: u64) -> Self {
        self.effect_delay_ms = delay;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.board_size == 0 {
            return Err(EngineError::InvalidConfig("board_size must be positive".into()));
        }
        if self.win_length == 0 {
            return Err(EngineError::InvalidConfig("win_length must be positive".into()));
        }
        if self.win_length > self.board_size {
            return Err(EngineError::InvalidConfig(format!(
                "win_length {} exceeds board_size {}",
                self.win_length, self.board_size
            )));
        }
        Ok(())
    }
}
