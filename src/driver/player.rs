//! The automated player.

use tracing::{debug, info, warn};

use super::{Difficulty, MoveProvider, MoveRequest, ProviderError, Suggestion};
use crate::board::{Board, Coord};
use crate::controller::{Controller, PlaceOutcome};
use crate::core::{EngineConfig, EngineError, GameRng, Player};

/// Rationale attached to moves the driver picked itself.
pub const FALLBACK_RATIONALE: &str = "fallback: random move";

/// A request issued to a provider, stamped with the controller generation
/// it was issued in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingRequest {
    generation: u64,
    request: MoveRequest,
}

impl PendingRequest {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn request(&self) -> &MoveRequest {
        &self.request
    }
}

/// What happened to a provider's answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DriverOutcome {
    /// The move was placed.
    Played {
        suggestion: Suggestion,
        outcome: PlaceOutcome,
        fallback: bool,
    },
    /// The game moved on (reset, or no longer our turn) before the answer
    /// arrived.
    Discarded,
    /// Every cell is occupied.
    NoMoveAvailable,
}

/// Plays one side of the game through a `MoveProvider`.
#[derive(Clone, Debug)]
pub struct AutoPlayer {
    player: Player,
    difficulty: Difficulty,
    rng: GameRng,
}

impl AutoPlayer {
    #[must_use]
    pub fn new(player: Player, difficulty: Difficulty, rng: GameRng) -> Self {
        Self { player, difficulty, rng }
    }

    /// Seed the fallback RNG from `config.seed`. Each colour gets its own
    /// fork, so both players can share one configuration.
    #[must_use]
    pub fn for_config(player: Player, difficulty: Difficulty, config: &EngineConfig) -> Self {
        let mut root = GameRng::new(config.seed);
        let black = root.fork();
        let rng = match player {
            Player::Black => black,
            Player::White => root.fork(),
        };
        Self::new(player, difficulty, rng)
    }

    #[must_use]
    pub fn player(&self) -> Player {
        self.player
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Issue a request if the controller is waiting on this player's move.
    #[must_use]
    pub fn begin_turn(&self, controller: &Controller) -> Option<PendingRequest> {
        if !controller.is_awaiting_move(self.player) {
            return None;
        }
        debug!(player = %self.player, difficulty = %self.difficulty, "requesting move");
        Some(PendingRequest {
            generation: controller.generation(),
            request: MoveRequest {
                board: controller.state().board().clone(),
                difficulty: self.difficulty,
                player: self.player,
            },
        })
    }

    /// Feed a provider's answer back into the controller.
    ///
    /// Answers to requests from an earlier generation, or arriving when
    /// the controller is no longer waiting on this player, are discarded.
    /// Failures and illegal coordinates are replaced by a random empty cell.
    pub fn complete(
        &mut self,
        ticket: PendingRequest,
        result: Result<Suggestion, ProviderError>,
        controller: &mut Controller,
    ) -> Result<DriverOutcome, EngineError> {
        if ticket.generation != controller.generation() || !controller.is_awaiting_move(self.player) {
            debug!(
                player = %self.player,
                ticket = ticket.generation,
                current = controller.generation(),
                "discarding stale provider answer"
            );
            return Ok(DriverOutcome::Discarded);
        }

        let board = controller.state().board();
        let (suggestion, fallback) = match result {
            Ok(suggestion) if board.is_empty_at(suggestion.coord) => (suggestion, false),
            Ok(suggestion) => {
                warn!(player = %self.player, coord = %suggestion.coord, "provider suggested an illegal cell");
                match self.fallback(board) {
                    Some(s) => (s, true),
                    None => return Ok(DriverOutcome::NoMoveAvailable),
                }
            }
            Err(error) => {
                warn!(player = %self.player, %error, "provider failed");
                match self.fallback(board) {
                    Some(s) => (s, true),
                    None => return Ok(DriverOutcome::NoMoveAvailable),
                }
            }
        };

        let outcome = controller.place_stone(suggestion.coord)?;
        info!(
            player = %self.player,
            coord = %suggestion.coord,
            fallback,
            rationale = suggestion.rationale.as_deref().unwrap_or(""),
            "automated move played"
        );
        Ok(DriverOutcome::Played {
            suggestion,
            outcome,
            fallback,
        })
    }

    /// Request, wait for and apply one move synchronously.
    ///
    /// Returns `None` if it is not this player's turn.
    pub fn play_turn<P: MoveProvider + ?Sized>(
        &mut self,
        provider: &mut P,
        controller: &mut Controller,
    ) -> Result<Option<DriverOutcome>, EngineError> {
        let Some(ticket) = self.begin_turn(controller) else {
            return Ok(None);
        };
        let result = provider.suggest(ticket.request());
        self.complete(ticket, result, controller).map(Some)
    }

    /// A uniformly random empty cell, or `None` on a full board.
    fn fallback(&mut self, board: &Board) -> Option<Suggestion> {
        let empty: Vec<Coord> = board.empty_cells().collect();
        let coord = self.rng.choose(&empty).copied();
        if coord.is_none() {
            info!(player = %self.player, "no empty cell left");
        }
        coord.map(|c| Suggestion::new(c).with_rationale(FALLBACK_RATIONALE))
    }
}
