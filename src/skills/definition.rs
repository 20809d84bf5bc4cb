//! Skill identifiers and static definitions.

use serde::{Deserialize, Serialize};

/// The closed set of skills.
///
/// Each variant carries its own availability predicate and effect (see
/// `effect.rs`); adding a skill is an exhaustive-match change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillId {
    /// Undo the last two snapshots.
    Rewind,
    /// Remove one opposing stone.
    RemoveStone,
    /// Bank a bonus turn.
    SkipOpponent,
    /// Clear the board and pass the turn.
    WipeBoard,
    /// Bring back the board the opponent wiped.
    RestoreBoard,
    /// Swap every stone's color and pass the turn.
    SwapColors,
}

impl SkillId {
    /// Every skill, in catalog order.
    pub const ALL: [SkillId; 6] = [
        SkillId::Rewind,
        SkillId::RemoveStone,
        SkillId::SkipOpponent,
        SkillId::WipeBoard,
        SkillId::RestoreBoard,
        SkillId::SwapColors,
    ];

    /// Stable string id used at the presentation boundary.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            SkillId::Rewind => "rewind",
            SkillId::RemoveStone => "remove-stone",
            SkillId::SkipOpponent => "skip-opponent",
            SkillId::WipeBoard => "wipe-board",
            SkillId::RestoreBoard => "restore-board",
            SkillId::SwapColors => "swap-colors",
        }
    }

    /// Look up a skill by its string id.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<SkillId> {
        Self::ALL.into_iter().find(|s| s.tag() == tag)
    }
}

impl std::fmt::Display for SkillId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for SkillId {
    type Err = UnknownSkill;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownSkill(s.to_string()))
    }
}

/// A string id that names no skill in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown skill id `{0}`")]
pub struct UnknownSkill(pub String);

/// Static description of a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SkillDefinition {
    pub id: SkillId,

    /// Display name.
    pub name: &'static str,

    /// One-line description for presentation.
    pub description: &'static str,

    /// Skill points spent on invocation.
    pub cost: u32,

    /// Reusable skills are never recorded as consumed.
    pub reusable: bool,

    /// Needs an opposing stone selected before it resolves.
    pub requires_target: bool,
}
