//! # skill-gomoku
//!
//! A connect-five engine on a 15x15 board where each player earns skill
//! points by placing stones and spends them on six rule-breaking skills.
//!
//! ## Design Principles
//!
//! 1. **Single Writer**: Only the `Controller` mutates game state. Board,
//!    win detection and history are invoked synchronously from it.
//!
//! 2. **Illegal Input Is Inert**: Every command validates all of its
//!    preconditions before mutating anything. A rejected command returns
//!    an `EngineError` and leaves the state untouched.
//!
//! 3. **Deferred Effects**: Accepting a skill locks the turn and returns
//!    an `EffectToken`. The effect is applied when the token is resolved,
//!    so presentation can animate in between and tests can resolve at once.
//!
//! ## Architecture
//!
//! - **Persistent Boards**: Boards are `im::Vector`s, so every history
//!   snapshot is an O(1) clone sharing structure with its neighbours.
//!
//! - **Generations**: A reset bumps the controller generation. Effect
//!   tokens and automated-player requests from an older generation are
//!   discarded.
//!
//! ## Modules
//!
//! - `board`: Grid, cells and coordinates
//! - `core`: Players, state, commands, errors, RNG, configuration
//! - `rules`: Win detection
//! - `history`: Board snapshot log
//! - `skills`: Skill catalog, availability, targeting and effects
//! - `resolution`: Two-phase effect tokens
//! - `controller`: The command processor and its read-only view
//! - `driver`: Automated player and move providers

pub mod board;
pub mod controller;
pub mod core;
pub mod driver;
pub mod history;
pub mod resolution;
pub mod rules;
pub mod skills;

// Re-export commonly used types
pub use crate::board::{Board, Cell, Coord, BOARD_SIZE};

pub use crate::core::{
    Command, CommandRecord,
    EngineConfig, EngineError, Rejection,
    EngineState, Phase, PlayerResources, WinningLine,
    GameRng, Player, PlayerMap,
};

pub use crate::controller::{Controller, EngineView, Interaction, PlaceOutcome, SkillResponse};

pub use crate::skills::{SkillCatalog, SkillDefinition, SkillId, SkillOutcome, TargetState};

pub use crate::resolution::EffectToken;

pub use crate::driver::{
    AutoPlayer, Difficulty, DriverOutcome, MoveProvider, MoveRequest,
    ProviderError, Suggestion,
};
