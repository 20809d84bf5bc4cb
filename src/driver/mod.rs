//! Automated player.
//!
//! The engine never calls out to a move provider itself. An `AutoPlayer`
//! reads the controller when it is its turn, asks a `MoveProvider` for a
//! coordinate and feeds the answer back as an ordinary placement. Provider
//! failures never reach the engine: the driver substitutes a random legal
//! move instead.

mod player;
mod providers;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, Coord};
use crate::core::Player;

pub use player::{AutoPlayer, DriverOutcome, PendingRequest, FALLBACK_RATIONALE};
pub use providers::{FailingProvider, RandomProvider};

/// Strength requested from the provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
    SuperHard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Hard, Difficulty::SuperHard];

    /// Stable tag sent to providers.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
            Difficulty::SuperHard => "super_hard",
        }
    }

    /// How the provider should play at this level.
    #[must_use]
    pub fn persona(self) -> &'static str {
        match self {
            Difficulty::Easy => "a beginner who plays quickly and often ignores threats",
            Difficulty::Hard => "a strong player who blocks every open three and builds attacks",
            Difficulty::SuperHard => "a master who reads deep and never lets an advantage go",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.tag() == s)
            .ok_or_else(|| ProviderError::UnknownDifficulty(s.to_string()))
    }
}

/// What a provider is asked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub board: Board,
    pub difficulty: Difficulty,
    pub player: Player,
}

impl MoveRequest {
    /// Natural-language prompt for text-based providers.
    #[must_use]
    pub fn prompt(&self) -> String {
        let size = self.board.size();
        format!(
            "Board size: {size}x{size}\n\
             Format: [row] cells (0=empty, 1=black, 2=white)\n\
             {board}\n\
             You play {player} ({own}); your opponent is {opp}.\n\
             You are {persona}.\n\
             Reply with the best [row, col] between 0 and {max}, on an empty cell, \
             and a short reason.",
            board = self.board,
            player = self.player,
            own = code(self.player),
            opp = code(self.player.opponent()),
            persona = self.difficulty.persona(),
            max = size - 1,
        )
    }
}

fn code(player: Player) -> u8 {
    crate::board::Cell::from(player).code()
}

/// A provider's answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub coord: Coord,
    pub rationale: Option<String>,
}

impl Suggestion {
    #[must_use]
    pub fn new(coord: Coord) -> Self {
        Self { coord, rationale: None }
    }

    #[must_use]
    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = Some(rationale.into());
        self
    }
}

/// Ways a provider can fail.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    #[error("provider timed out")]
    Timeout,

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

/// Source of suggested moves.
pub trait MoveProvider {
    /// Propose a move for `request.player`. The answer is untrusted: the
    /// driver checks it before playing it.
    fn suggest(&mut self, request: &MoveRequest) -> Result<Suggestion, ProviderError>;

    /// Returns the provider's display name.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_tags() {
        assert_eq!(Difficulty::SuperHard.tag(), "super_hard");
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("expert".parse::<Difficulty>().is_err());
        assert_eq!(
            serde_json::to_string(&Difficulty::SuperHard).unwrap(),
            "\"super_hard\""
        );
    }

    #[test]
    fn test_prompt_contains_grid() {
        let request = MoveRequest {
            board: Board::standard().place(Coord::new(0, 1), Player::Black),
            difficulty: Difficulty::Easy,
            player: Player::White,
        };
        let prompt = request.prompt();

        assert!(prompt.contains("[0] 0 1 0"));
        assert!(prompt.contains("[14] 0 0"));
        assert!(prompt.contains("between 0 and 14"));
        assert!(prompt.contains("White (2)"));
    }
}
