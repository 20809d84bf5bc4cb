//! Core engine types: players, state, commands, errors, RNG, configuration.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Command, CommandRecord};
pub use config::{EngineConfig, EFFECT_DELAY_MS, MAX_SKILL_POINTS, WIN_LENGTH};
pub use error::{EngineError, Rejection};
pub use player::{Player, PlayerMap};
pub use rng::GameRng;
pub use state::{EngineState, Phase, PlayerResources, WinningLine, WipedBoard};
