//! Per-skill availability predicates and effects.
//!
//! Cost, single-use bookkeeping and the per-turn limit are handled by the
//! controller when a skill is accepted. What lives here is only what
//! differs between skills: when each one is available and what it does to
//! the state once its resolution delay has elapsed.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::definition::SkillId;
use crate::board::{Board, Cell, Coord};
use crate::core::{EngineState, Player, WipedBoard};

/// What a resolved skill did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillOutcome {
    /// Two snapshots dropped; the log now has this many.
    Rewound { history_len: usize },
    StoneRemoved(Coord),
    BonusTurnGranted,
    BoardWiped,
    BoardRestored,
    ColorsSwapped,
    /// The effect had nothing to act on.
    Fizzled,
}

impl SkillId {
    /// Skill-specific availability predicate.
    #[must_use]
    pub fn is_available(self, state: &EngineState, invoker: Player) -> bool {
        match self {
            SkillId::Rewind => state.history.can_rewind(),
            SkillId::RestoreBoard => state
                .wiped
                .as_ref()
                .is_some_and(|w| w.wiper == invoker.opponent()),
            SkillId::RemoveStone
            | SkillId::SkipOpponent
            | SkillId::WipeBoard
            | SkillId::SwapColors => true,
        }
    }

    /// Apply the skill's board/state mutation.
    pub(crate) fn apply(self, state: &mut EngineState, invoker: Player, target: Option<Coord>) -> SkillOutcome {
        match self {
            SkillId::Rewind => rewind(state),
            SkillId::RemoveStone => match target {
                Some(coord) => remove_stone(state, coord),
                None => {
                    debug_assert!(false, "remove-stone resolved without a target");
                    SkillOutcome::Fizzled
                }
            },
            SkillId::SkipOpponent => {
                state.bonus_turn = true;
                state.resources[invoker].set_pending_bonus_effect(true);
                SkillOutcome::BonusTurnGranted
            }
            SkillId::WipeBoard => wipe_board(state, invoker),
            SkillId::RestoreBoard => restore_board(state),
            SkillId::SwapColors => {
                state.board = state.board.swapped_colors();
                state.record_snapshot();
                state.pass_turn();
                SkillOutcome::ColorsSwapped
            }
        }
    }
}

fn rewind(state: &mut EngineState) -> SkillOutcome {
    let Some(board) = state.history.rewind().cloned() else {
        return SkillOutcome::Fizzled;
    };
    state.board = board;
    state.last_move = state.history.last_move();
    trace!(history_len = state.history.len(), "rewound two snapshots");
    SkillOutcome::Rewound {
        history_len: state.history.len(),
    }
}

fn remove_stone(state: &mut EngineState, coord: Coord) -> SkillOutcome {
    debug_assert!(state.board.contains(coord) && !state.board.at(coord).is_empty());
    state.board.set(coord, Cell::Empty);
    state.record_snapshot();
    if state.last_move == Some(coord) {
        state.last_move = None;
    }
    SkillOutcome::StoneRemoved(coord)
}

fn wipe_board(state: &mut EngineState, invoker: Player) -> SkillOutcome {
    let size = state.board.size();
    let previous = std::mem::replace(&mut state.board, Board::new(size));
    state.wiped = Some(WipedBoard {
        board: previous,
        wiper: invoker,
    });
    state.history.start_epoch(state.board.clone());
    state.last_move = None;
    state.pass_turn();
    SkillOutcome::BoardWiped
}

fn restore_board(state: &mut EngineState) -> SkillOutcome {
    let Some(wiped) = state.wiped.take() else {
        return SkillOutcome::Fizzled;
    };
    state.board = wiped.board;
    state.record_snapshot();
    SkillOutcome::BoardRestored
}
