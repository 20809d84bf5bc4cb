//! Turn and skill controller.
//!
//! `Controller` accepts commands (place, invoke, target, cancel, resolve,
//! reset), validates them against the current state and applies them.
//! `EngineView` is the serializable snapshot presentation reads.

mod engine;
mod view;

pub use engine::{Controller, Interaction, PlaceOutcome, SkillResponse};
pub use view::EngineView;
