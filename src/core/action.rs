//! Command representation.
//!
//! Presentation talks to the controller through a small set of discrete
//! commands. Accepted commands are recorded in order for replay and
//! debugging; rejected ones leave no trace.

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::board::Coord;
use crate::resolution::EffectToken;
use crate::skills::SkillId;

/// A command accepted by the controller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Place the current player's stone.
    PlaceStone(Coord),

    /// Invoke a skill, optionally aimed at a target.
    ///
    /// For targeting skills, the first call without a target opens the
    /// target selection and a second call without a target cancels it.
    InvokeSkill {
        skill: SkillId,
        target: Option<Coord>,
    },

    /// Abandon a pending target selection.
    CancelTarget,

    /// Apply the effect behind a token.
    Resolve(EffectToken),
}

/// A recorded command with ordering metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// The player whose turn it was.
    pub player: Player,

    /// The command.
    pub command: Command,

    /// Position in the game's command sequence (0-based).
    pub sequence: u32,
}

impl CommandRecord {
    #[must_use]
    pub fn new(player: Player, command: Command, sequence: u32) -> Self {
        Self {
            player,
            command,
            sequence,
        }
    }
}
