//! The turn/skill controller.
//!
//! The only component that mutates game state. Every command checks all
//! of its preconditions before touching anything, so a rejected command
//! leaves the state exactly as it was.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::view::EngineView;
use crate::board::{Cell, Coord};
use crate::core::{
    Command, CommandRecord, EngineConfig, EngineError, EngineState, Player, Rejection, WinningLine,
};
use crate::resolution::{EffectResolver, EffectToken};
use crate::rules::check_win;
use crate::skills::{validate_target, SkillCatalog, SkillId, SkillOutcome, TargetState};

/// Result of an accepted placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceOutcome {
    /// The turn passed to `next`.
    TurnPassed { next: Player },
    /// A banked bonus turn was consumed; the same player moves again.
    BonusTurn,
    /// The stone completed a winning line.
    Won { winner: Player, line: WinningLine },
}

/// Result of an accepted skill invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillResponse {
    /// Target selection opened for a targeting skill.
    AwaitingTarget(SkillId),
    /// A second invocation closed the selection again.
    TargetCancelled(SkillId),
    /// The skill was accepted; resolve the token to apply it.
    Scheduled(EffectToken),
}

impl SkillResponse {
    /// The effect token, if the skill was scheduled.
    #[must_use]
    pub fn token(self) -> Option<EffectToken> {
        match self {
            SkillResponse::Scheduled(token) => Some(token),
            _ => None,
        }
    }
}

/// Result of a click on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Interaction {
    Placed(PlaceOutcome),
    Targeted(EffectToken),
}

/// Owns the engine state and processes commands one at a time.
///
/// ## Example
///
/// ```
/// use skill_gomoku::board::Coord;
/// use skill_gomoku::controller::{Controller, PlaceOutcome};
/// use skill_gomoku::core::Player;
///
/// let mut game = Controller::standard();
/// let outcome = game.place_stone(Coord::new(7, 7)).unwrap();
///
/// assert_eq!(outcome, PlaceOutcome::TurnPassed { next: Player::White });
/// assert_eq!(game.state().history().len(), 2);
///
/// // Occupied cells are rejected without changing anything
/// assert!(game.place_stone(Coord::new(7, 7)).is_err());
/// assert_eq!(game.state().history().len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Controller {
    config: EngineConfig,
    catalog: SkillCatalog,
    state: EngineState,
    resolver: EffectResolver,
    generation: u64,
    commands: Vec<CommandRecord>,
}

impl Controller {
    /// Create a controller for a validated configuration.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Create a controller with the standard 15x15 configuration.
    #[must_use]
    pub fn standard() -> Self {
        Self::build(EngineConfig::default())
    }

    fn build(config: EngineConfig) -> Self {
        Self {
            state: EngineState::new(&config),
            config,
            catalog: SkillCatalog::standard(),
            resolver: EffectResolver::new(),
            generation: 0,
            commands: Vec::new(),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Incremented by every reset. Tokens and driver requests carry the
    /// generation they were issued in.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Accepted commands of the current game, in order.
    #[must_use]
    pub fn commands(&self) -> &[CommandRecord] {
        &self.commands
    }

    /// Token of the effect currently resolving, if any.
    #[must_use]
    pub fn in_flight(&self) -> Option<EffectToken> {
        self.resolver.in_flight()
    }

    /// Read-only snapshot for presentation.
    #[must_use]
    pub fn view(&self) -> EngineView {
        EngineView::capture(self)
    }

    /// Check whether the current player could invoke `skill` right now.
    pub fn check_skill(&self, skill: SkillId) -> Result<(), Rejection> {
        self.ensure_accepting()?;
        if self.state.target.awaiting().is_some_and(|pending| pending != skill) {
            return Err(Rejection::TargetPending);
        }
        let def = self.catalog.get(skill);
        let player = self.state.current;
        let resources = &self.state.resources[player];

        if self.state.skill_used_this_turn {
            return Err(Rejection::SkillAlreadyUsedThisTurn);
        }
        if !def.reusable && resources.has_used(skill) {
            return Err(Rejection::SkillConsumed);
        }
        if resources.skill_points() < def.cost {
            return Err(Rejection::InsufficientPoints);
        }
        if !skill.is_available(&self.state, player) {
            return Err(Rejection::SkillUnavailable);
        }
        Ok(())
    }

    /// Skills the current player could invoke right now.
    #[must_use]
    pub fn available_skills(&self) -> Vec<SkillId> {
        SkillId::ALL
            .into_iter()
            .filter(|&skill| self.check_skill(skill).is_ok())
            .collect()
    }

    /// Whether the engine is waiting on `player` to place a stone: the game
    /// is live, it is their turn, and no effect or target selection is open.
    #[must_use]
    pub fn is_awaiting_move(&self, player: Player) -> bool {
        self.state.winner.is_none() && self.state.current == player && self.state.target.is_idle()
    }

    // === Commands ===

    /// Place the current player's stone at `coord`.
    pub fn place_stone(&mut self, coord: Coord) -> Result<PlaceOutcome, EngineError> {
        const COMMAND: &str = "place_stone";

        self.ensure_accepting().map_err(|r| self.reject(COMMAND, r))?;
        if self.state.target.awaiting().is_some() {
            return Err(self.reject(COMMAND, Rejection::TargetPending));
        }
        let cell = self.state.board.get(coord).map_err(|e| self.rejected(COMMAND, e))?;
        if !cell.is_empty() {
            return Err(self.reject(COMMAND, Rejection::CellOccupied));
        }

        let player = self.state.current;
        self.record(Command::PlaceStone(coord));
        self.state.board.set(coord, Cell::from(player));
        self.state.record_snapshot();
        self.state.last_move = Some(coord);
        self.state.resources[player].gain(1, self.config.max_skill_points);

        let outcome = if let Some(line) = check_win(&self.state.board, player, coord, self.config.win_length) {
            info!(%player, %coord, length = line.len(), "game won");
            self.state.winner = Some(player);
            self.state.winning_line = Some(line.clone());
            PlaceOutcome::Won { winner: player, line }
        } else if self.state.bonus_turn {
            self.state.bonus_turn = false;
            self.state.skill_used_this_turn = false;
            self.state.resources[player].set_pending_bonus_effect(false);
            PlaceOutcome::BonusTurn
        } else {
            self.state.pass_turn();
            PlaceOutcome::TurnPassed {
                next: self.state.current,
            }
        };

        debug!(%player, %coord, ?outcome, "stone placed");
        Ok(outcome)
    }

    /// Invoke a skill for the current player.
    ///
    /// Non-targeting skills are scheduled immediately. A targeting skill
    /// invoked without a target toggles target selection; invoked with a
    /// target while its selection is open, it is scheduled against that
    /// target.
    pub fn invoke_skill(&mut self, skill: SkillId, target: Option<Coord>) -> Result<SkillResponse, EngineError> {
        const COMMAND: &str = "invoke_skill";

        self.ensure_accepting().map_err(|r| self.reject(COMMAND, r))?;
        let requires_target = self.catalog.get(skill).requires_target;

        if let Some(pending) = self.state.target.awaiting() {
            if pending != skill {
                return Err(self.reject(COMMAND, Rejection::TargetPending));
            }
            return match target {
                Some(coord) => self.target_pending(skill, coord).map(SkillResponse::Scheduled),
                None => {
                    self.record(Command::InvokeSkill { skill, target: None });
                    self.state.target = TargetState::Idle;
                    debug!(player = %self.state.current, %skill, "target selection cancelled");
                    Ok(SkillResponse::TargetCancelled(skill))
                }
            };
        }

        if target.is_some() {
            let rejection = if requires_target {
                Rejection::NoPendingTarget
            } else {
                Rejection::TargetNotExpected
            };
            return Err(self.reject(COMMAND, rejection));
        }
        self.check_skill(skill).map_err(|r| self.reject(COMMAND, r))?;

        if requires_target {
            self.record(Command::InvokeSkill { skill, target: None });
            self.state.target = TargetState::AwaitingTarget(skill);
            debug!(player = %self.state.current, %skill, "awaiting target");
            return Ok(SkillResponse::AwaitingTarget(skill));
        }

        Ok(SkillResponse::Scheduled(self.accept(skill, None)))
    }

    /// Pick the target for the skill awaiting one.
    pub fn select_target(&mut self, coord: Coord) -> Result<EffectToken, EngineError> {
        const COMMAND: &str = "select_target";

        self.ensure_accepting().map_err(|r| self.reject(COMMAND, r))?;
        let skill = self
            .state
            .target
            .awaiting()
            .ok_or_else(|| self.reject(COMMAND, Rejection::NoPendingTarget))?;
        self.target_pending(skill, coord)
    }

    /// Close an open target selection without spending anything.
    pub fn cancel_pending_target(&mut self) -> Result<SkillId, EngineError> {
        let skill = self
            .state
            .target
            .awaiting()
            .ok_or_else(|| self.reject("cancel_pending_target", Rejection::NoPendingTarget))?;
        self.record(Command::CancelTarget);
        self.state.target = TargetState::Idle;
        debug!(player = %self.state.current, %skill, "target selection cancelled");
        Ok(skill)
    }

    /// A click on the board: selects a target while one is awaited,
    /// otherwise places a stone.
    pub fn interact(&mut self, coord: Coord) -> Result<Interaction, EngineError> {
        if self.state.target.awaiting().is_some() {
            self.select_target(coord).map(Interaction::Targeted)
        } else {
            self.place_stone(coord).map(Interaction::Placed)
        }
    }

    /// Apply the effect behind `token`.
    pub fn resolve(&mut self, token: EffectToken) -> Result<SkillOutcome, EngineError> {
        const COMMAND: &str = "resolve";

        if token.generation != self.generation {
            return Err(self.reject(COMMAND, Rejection::StaleToken));
        }
        let pending = self.resolver.take(token).map_err(|r| self.reject(COMMAND, r))?;

        self.record(Command::Resolve(token));
        let outcome = token.skill.apply(&mut self.state, pending.invoker, pending.target);
        self.state.target = TargetState::Idle;
        debug_assert!(!self.state.history.is_empty(), "history log must never be empty");

        info!(player = %pending.invoker, skill = %token.skill, ?outcome, "skill resolved");
        Ok(outcome)
    }

    /// Apply whatever effect is in flight, skipping the delay.
    pub fn resolve_pending(&mut self) -> Result<SkillOutcome, EngineError> {
        let token = self
            .resolver
            .in_flight()
            .ok_or_else(|| self.reject("resolve_pending", Rejection::NothingToResolve))?;
        self.resolve(token)
    }

    /// Discard the game, any in-flight effect and any outstanding token,
    /// and start over.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = EngineState::new(&self.config);
        self.resolver.clear();
        self.commands.clear();
        info!(generation = self.generation, "game reset");
    }

    // === Internals ===

    fn ensure_accepting(&self) -> Result<(), Rejection> {
        if self.state.winner.is_some() {
            return Err(Rejection::GameOver);
        }
        if self.state.is_turn_locked() {
            return Err(Rejection::TurnLocked);
        }
        Ok(())
    }

    fn target_pending(&mut self, skill: SkillId, coord: Coord) -> Result<EffectToken, EngineError> {
        const COMMAND: &str = "select_target";

        validate_target(&self.state.board, self.state.current, coord).map_err(|e| self.rejected(COMMAND, e))?;
        self.check_skill(skill).map_err(|r| self.reject(COMMAND, r))?;
        Ok(self.accept(skill, Some(coord)))
    }

    /// Pay for the skill and schedule its effect. All checks have passed.
    fn accept(&mut self, skill: SkillId, target: Option<Coord>) -> EffectToken {
        let def = self.catalog.get(skill);
        let player = self.state.current;

        self.record(Command::InvokeSkill { skill, target });
        let resources = &mut self.state.resources[player];
        resources.spend(def.cost);
        if !def.reusable {
            resources.consume(skill);
        }
        self.state.skill_used_this_turn = true;
        self.state.target = TargetState::Resolving(skill);

        let token = self
            .resolver
            .schedule(self.generation, skill, self.config.effect_delay_ms, player, target);
        info!(%player, %skill, cost = def.cost, ?target, "skill accepted");
        token
    }

    fn record(&mut self, command: Command) {
        let sequence = self.commands.len() as u32;
        self.commands
            .push(CommandRecord::new(self.state.current, command, sequence));
    }

    fn reject(&self, command: &'static str, rejection: Rejection) -> EngineError {
        self.rejected(command, rejection.into())
    }

    fn rejected(&self, command: &'static str, error: EngineError) -> EngineError {
        debug!(command, player = %self.state.current, %error, "command rejected");
        error
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;

    /// Play alternating stones on distinct, non-winning cells.
    fn play(game: &mut Controller, moves: &[(usize, usize)]) {
        for &(r, c) in moves {
            game.place_stone(Coord::new(r, c)).unwrap();
        }
    }

    /// Moves confined to columns 0..7 that never line up five.
    fn filler(n: usize) -> Vec<(usize, usize)> {
        (0..n).map(|i| (i / 7, (i * 2) % 7)).collect()
    }

    #[test]
    fn test_filler_is_distinct() {
        let moves = filler(30);
        let mut sorted = moves.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), moves.len());
    }

    #[test]
    fn test_place_stone_alternates() {
        let mut game = Controller::standard();
        assert_eq!(
            game.place_stone(Coord::new(7, 7)).unwrap(),
            PlaceOutcome::TurnPassed { next: Player::White }
        );
        assert_eq!(game.state().phase(), Phase::WhiteToMove);
        assert_eq!(game.state().last_move(), Some(Coord::new(7, 7)));
        assert_eq!(game.state().resources(Player::Black).skill_points(), 1);
        assert_eq!(game.commands().len(), 1);
    }

    #[test]
    fn test_place_stone_rejections_are_inert() {
        let mut game = Controller::standard();
        play(&mut game, &[(7, 7)]);

        assert_eq!(
            game.place_stone(Coord::new(7, 7)),
            Err(EngineError::IllegalCommand(Rejection::CellOccupied))
        );
        assert!(matches!(
            game.place_stone(Coord::new(15, 3)),
            Err(EngineError::OutOfBounds { .. })
        ));
        assert_eq!(game.state().current_player(), Player::White);
        assert_eq!(game.state().history().len(), 2);
        assert_eq!(game.commands().len(), 1);
    }

    #[test]
    fn test_skill_points_clamp_at_max() {
        let mut game = Controller::standard();
        play(&mut game, &filler(40));
        assert_eq!(game.state().resources(Player::Black).skill_points(), 15);
        assert_eq!(game.state().resources(Player::White).skill_points(), 15);
    }

    #[test]
    fn test_insufficient_points() {
        let mut game = Controller::standard();
        assert_eq!(
            game.invoke_skill(SkillId::SkipOpponent, None),
            Err(EngineError::IllegalCommand(Rejection::InsufficientPoints))
        );
    }

    #[test]
    fn test_turn_lock_blocks_commands() {
        let mut game = Controller::standard();
        play(&mut game, &filler(12));

        let token = game.invoke_skill(SkillId::SkipOpponent, None).unwrap().token().unwrap();
        assert_eq!(
            game.place_stone(Coord::new(14, 14)),
            Err(EngineError::IllegalCommand(Rejection::TurnLocked))
        );
        assert_eq!(
            game.invoke_skill(SkillId::Rewind, None),
            Err(EngineError::IllegalCommand(Rejection::TurnLocked))
        );
        assert_eq!(game.view().available_skills, Vec::<SkillId>::new());

        game.resolve(token).unwrap();
        assert!(game.place_stone(Coord::new(14, 14)).is_ok());
    }

    #[test]
    fn test_resolve_twice_fails() {
        let mut game = Controller::standard();
        play(&mut game, &filler(12));
        let token = game.invoke_skill(SkillId::SkipOpponent, None).unwrap().token().unwrap();

        game.resolve(token).unwrap();
        assert_eq!(
            game.resolve(token),
            Err(EngineError::IllegalCommand(Rejection::NothingToResolve))
        );
    }

    #[test]
    fn test_one_skill_per_turn() {
        let mut game = Controller::standard();
        play(&mut game, &filler(16));

        game.invoke_skill(SkillId::SkipOpponent, None).unwrap();
        game.resolve_pending().unwrap();
        assert_eq!(
            game.invoke_skill(SkillId::Rewind, None),
            Err(EngineError::IllegalCommand(Rejection::SkillAlreadyUsedThisTurn))
        );
    }

    #[test]
    fn test_reset_invalidates_tokens() {
        let mut game = Controller::standard();
        play(&mut game, &filler(12));
        let token = game.invoke_skill(SkillId::SkipOpponent, None).unwrap().token().unwrap();

        game.reset();

        assert_eq!(game.generation(), 1);
        assert_eq!(
            game.resolve(token),
            Err(EngineError::IllegalCommand(Rejection::StaleToken))
        );
        assert!(!game.state().is_turn_locked());
        assert_eq!(game.state().history().len(), 1);
        assert!(game.commands().is_empty());
    }

    #[test]
    fn test_target_not_expected() {
        let mut game = Controller::standard();
        play(&mut game, &filler(12));
        assert_eq!(
            game.invoke_skill(SkillId::SkipOpponent, Some(Coord::new(0, 0))),
            Err(EngineError::IllegalCommand(Rejection::TargetNotExpected))
        );
        assert_eq!(
            game.invoke_skill(SkillId::RemoveStone, Some(Coord::new(0, 0))),
            Err(EngineError::IllegalCommand(Rejection::NoPendingTarget))
        );
    }

    #[test]
    fn test_invalid_config() {
        assert!(Controller::new(EngineConfig::default().with_win_length(20)).is_err());
        assert!(Controller::new(EngineConfig::default().with_board_size(9)).is_ok());
    }
}
