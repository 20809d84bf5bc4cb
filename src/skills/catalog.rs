//! The skill catalog.
//!
//! A fixed table with one definition per `SkillId`. Lookup is total: every
//! variant has an entry, so there is no "not found" path for typed ids.

use super::definition::{SkillDefinition, SkillId};

const STANDARD: [SkillDefinition; 6] = [
    SkillDefinition {
        id: SkillId::Rewind,
        name: "Time Reversal",
        description: "Undo the last two moves. No use limit.",
        cost: 4,
        reusable: true,
        requires_target: false,
    },
    SkillDefinition {
        id: SkillId::RemoveStone,
        name: "Sandstorm",
        description: "Blow one opposing stone off the board. Your turn continues.",
        cost: 6,
        reusable: false,
        requires_target: true,
    },
    SkillDefinition {
        id: SkillId::SkipOpponent,
        name: "Still Water",
        description: "Freeze your opponent: after your next stone, you move again.",
        cost: 6,
        reusable: false,
        requires_target: false,
    },
    SkillDefinition {
        id: SkillId::WipeBoard,
        name: "Uproot the Mountain",
        description: "Clear the whole board. Your opponent moves next.",
        cost: 10,
        reusable: false,
        requires_target: false,
    },
    SkillDefinition {
        id: SkillId::RestoreBoard,
        name: "Comeback",
        description: "After your opponent clears the board, put it back.",
        cost: 8,
        reusable: false,
        requires_target: false,
    },
    SkillDefinition {
        id: SkillId::SwapColors,
        name: "Polarity Flip",
        description: "Every stone changes color. Your opponent moves next.",
        cost: 10,
        reusable: false,
        requires_target: false,
    },
];

/// Registry of skill definitions.
///
/// ## Example
///
/// ```
/// use skill_gomoku::skills::{SkillCatalog, SkillId};
///
/// let catalog = SkillCatalog::standard();
/// assert_eq!(catalog.get(SkillId::Rewind).cost, 4);
/// assert_eq!(catalog.find_by_tag("swap-colors").unwrap().cost, 10);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SkillCatalog {
    skills: &'static [SkillDefinition; 6],
}

impl SkillCatalog {
    /// The standard six-skill catalog.
    #[must_use]
    pub const fn standard() -> Self {
        Self { skills: &STANDARD }
    }

    /// Get a skill definition by ID.
    #[must_use]
    pub fn get(&self, id: SkillId) -> &'static SkillDefinition {
        let skills: &'static [SkillDefinition; 6] = self.skills;
        let def = &skills[id as usize];
        debug_assert_eq!(def.id, id, "catalog order must follow SkillId order");
        def
    }

    /// Look up a definition by its string id.
    #[must_use]
    pub fn find_by_tag(&self, tag: &str) -> Option<&'static SkillDefinition> {
        SkillId::from_tag(tag).map(|id| self.get(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Iterate over all definitions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &'static SkillDefinition> {
        let skills: &'static [SkillDefinition; 6] = self.skills;
        skills.iter()
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
