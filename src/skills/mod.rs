//! Skill system.
//!
//! - `SkillId`: the closed set of six skills
//! - `SkillCatalog`: costs and flags for each skill
//! - `TargetState`: two-phase targeting and resolution state
//! - `SkillOutcome`: what a resolved skill did

mod catalog;
mod definition;
mod effect;
mod targeting;

pub use catalog::SkillCatalog;
pub use definition::{SkillDefinition, SkillId, UnknownSkill};
pub use effect::SkillOutcome;
pub use targeting::{valid_targets, validate_target, TargetState};
