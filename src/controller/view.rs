//! Read-only projection of the engine for presentation.

use serde::{Deserialize, Serialize};

use super::engine::Controller;
use crate::board::{Board, Coord};
use crate::core::{Phase, Player, PlayerMap, PlayerResources};
use crate::resolution::EffectToken;
use crate::skills::{valid_targets, SkillId, TargetState};

/// Everything a front end needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineView {
    pub board: Board,
    pub phase: Phase,
    pub current_player: Player,
    pub winner: Option<Player>,
    pub winning_line: Option<Vec<Coord>>,
    pub last_move: Option<Coord>,
    pub resources: PlayerMap<PlayerResources>,
    pub history_len: usize,
    pub target: TargetState,
    /// Cells a pending targeting skill may pick; empty otherwise.
    pub targets: Vec<Coord>,
    pub in_flight: Option<EffectToken>,
    pub bonus_turn_granted: bool,
    pub skill_used_this_turn: bool,
    /// Who wiped the board, while a restore is still possible.
    pub wiped_by: Option<Player>,
    /// Skills the current player could invoke right now.
    pub available_skills: Vec<SkillId>,
    pub generation: u64,
}

impl EngineView {
    pub(crate) fn capture(controller: &Controller) -> Self {
        let state = controller.state();
        Self {
            board: state.board().clone(),
            phase: state.phase(),
            current_player: state.current_player(),
            winner: state.winner(),
            winning_line: state.winning_line().map(<[Coord]>::to_vec),
            last_move: state.last_move(),
            resources: state.resources.clone(),
            history_len: state.history().len(),
            target: state.target_state(),
            targets: match state.target_state().awaiting() {
                Some(_) => valid_targets(state.board(), state.current_player()).collect(),
                None => Vec::new(),
            },
            in_flight: controller.in_flight(),
            bonus_turn_granted: state.bonus_turn_granted(),
            skill_used_this_turn: state.skill_used_this_turn(),
            wiped_by: state.wiped_board().map(|w| w.wiper),
            available_skills: controller.available_skills(),
            generation: controller.generation(),
        }
    }

    /// True while an effect is resolving.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.target.is_resolving()
    }

    #[must_use]
    pub fn is_winning_cell(&self, coord: Coord) -> bool {
        self.winning_line
            .as_ref()
            .is_some_and(|line| line.contains(&coord))
    }
}
