//! Engine state.
//!
//! ## PlayerResources
//!
//! Per-player skill bookkeeping: points, consumed single-use skills and the
//! bonus-turn banner shown by presentation.
//!
//! ## EngineState
//!
//! The complete state of one game. Owned exclusively by the `Controller`;
//! everything outside the crate reads it through `&EngineState` getters or
//! an `EngineView` snapshot.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::EngineConfig;
use super::player::{Player, PlayerMap};
use crate::board::{Board, Coord};
use crate::history::HistoryLog;
use crate::skills::{SkillId, TargetState};

/// Coordinates of a winning run, ordered along its direction.
pub type WinningLine = SmallVec<[Coord; 8]>;

/// Per-player skill resources.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerResources {
    skill_points: u32,
    used_skills: FxHashSet<SkillId>,
    pending_bonus_effect: bool,
}

impl PlayerResources {
    #[must_use]
    pub fn skill_points(&self) -> u32 {
        self.skill_points
    }

    /// Single-use skills this player has consumed.
    #[must_use]
    pub fn used_skills(&self) -> &FxHashSet<SkillId> {
        &self.used_skills
    }

    #[must_use]
    pub fn has_used(&self, skill: SkillId) -> bool {
        self.used_skills.contains(&skill)
    }

    /// Presentation flag: a bonus turn is banked for this player.
    #[must_use]
    pub fn pending_bonus_effect(&self) -> bool {
        self.pending_bonus_effect
    }

    /// Add points, saturating at `max`.
    pub(crate) fn gain(&mut self, amount: u32, max: u32) {
        self.skill_points = self.skill_points.saturating_add(amount).min(max);
    }

    /// Spend points. The caller has checked affordability.
    pub(crate) fn spend(&mut self, cost: u32) {
        debug_assert!(self.skill_points >= cost, "spent more skill points than held");
        self.skill_points = self.skill_points.saturating_sub(cost);
    }

    pub(crate) fn consume(&mut self, skill: SkillId) {
        self.used_skills.insert(skill);
    }

    pub(crate) fn set_pending_bonus_effect(&mut self, value: bool) {
        self.pending_bonus_effect = value;
    }
}

/// Turn-level phase of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    BlackToMove,
    WhiteToMove,
    GameOver(Player),
}

impl Phase {
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, Phase::GameOver(_))
    }
}

/// The board as it was just before a wipe, and who wiped it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WipedBoard {
    pub board: Board,
    pub wiper: Player,
}

/// Complete state of a single game.
#[derive(Clone, Debug)]
pub struct EngineState {
    pub(crate) board: Board,
    pub(crate) current: Player,
    pub(crate) winner: Option<Player>,
    pub(crate) winning_line: Option<WinningLine>,
    pub(crate) last_move: Option<Coord>,
    pub(crate) resources: PlayerMap<PlayerResources>,
    pub(crate) history: HistoryLog,
    pub(crate) wiped: Option<WipedBoard>,
    pub(crate) target: TargetState,
    pub(crate) bonus_turn: bool,
    pub(crate) skill_used_this_turn: bool,
}

impl EngineState {
    /// Fresh game: empty board, history holding only that board, Black to
    /// move, every flag clear.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        let board = Board::new(config.board_size);
        Self {
            history: HistoryLog::new(board.clone()),
            board,
            current: Player::Black,
            winner: None,
            winning_line: None,
            last_move: None,
            resources: PlayerMap::default(),
            wiped: None,
            target: TargetState::Idle,
            bonus_turn: false,
            skill_used_this_turn: false,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    #[must_use]
    pub fn winning_line(&self) -> Option<&[Coord]> {
        self.winning_line.as_deref()
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Coord> {
        self.last_move
    }

    #[must_use]
    pub fn resources(&self, player: Player) -> &PlayerResources {
        &self.resources[player]
    }

    #[must_use]
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    #[must_use]
    pub fn wiped_board(&self) -> Option<&WipedBoard> {
        self.wiped.as_ref()
    }

    #[must_use]
    pub fn target_state(&self) -> TargetState {
        self.target
    }

    #[must_use]
    pub fn bonus_turn_granted(&self) -> bool {
        self.bonus_turn
    }

    #[must_use]
    pub fn skill_used_this_turn(&self) -> bool {
        self.skill_used_this_turn
    }

    /// True while an accepted skill's effect has not been applied yet.
    #[must_use]
    pub fn is_turn_locked(&self) -> bool {
        self.target.is_resolving()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.winner, self.current) {
            (Some(winner), _) => Phase::GameOver(winner),
            (None, Player::Black) => Phase::BlackToMove,
            (None, Player::White) => Phase::WhiteToMove,
        }
    }

    /// Hand the turn to the other player, who starts with a fresh
    /// per-turn skill allowance.
    pub(crate) fn pass_turn(&mut self) {
        self.current = self.current.opponent();
        self.skill_used_this_turn = false;
    }

    /// Append the live board to the history log.
    pub(crate) fn record_snapshot(&mut self) {
        self.history.push(self.board.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = EngineState::new(&EngineConfig::default());

        assert_eq!(state.current_player(), Player::Black);
        assert_eq!(state.phase(), Phase::BlackToMove);
        assert_eq!(state.history().len(), 1);
        assert!(state.board().is_board_empty());
        assert!(state.wiped_board().is_none());
        assert_eq!(state.target_state(), TargetState::Idle);
        assert!(!state.is_turn_locked());
        assert!(!state.bonus_turn_granted());
        assert!(!state.skill_used_this_turn());
        assert_eq!(state.resources(Player::White).skill_points(), 0);
    }

    #[test]
    fn test_pass_turn_resets_skill_flag() {
        let mut state = EngineState::new(&EngineConfig::default());
        state.skill_used_this_turn = true;

        state.pass_turn();

        assert_eq!(state.phase(), Phase::WhiteToMove);
        assert!(!state.skill_used_this_turn());
    }

    #[test]
    fn test_resources_clamp() {
        let mut res = PlayerResources::default();
        res.gain(10, 15);
        res.gain(10, 15);
        assert_eq!(res.skill_points(), 15);

        res.spend(6);
        assert_eq!(res.skill_points(), 9);

        res.consume(SkillId::SwapColors);
        assert!(res.has_used(SkillId::SwapColors));
        assert!(!res.has_used(SkillId::Rewind));
    }

    #[test]
    fn test_game_over_phase() {
        let mut state = EngineState::new(&EngineConfig::default());
        state.winner = Some(Player::White);
        assert_eq!(state.phase(), Phase::GameOver(Player::White));
        assert!(state.phase().is_over());
    }
}
