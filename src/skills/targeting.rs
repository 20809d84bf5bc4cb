//! Skill targeting.
//!
//! Targeting skills resolve in two phases: the first invocation opens a
//! selection (`AwaitingTarget`), and picking an opposing stone drives the
//! skill to resolution. While the effect is in flight the state is
//! `Resolving`, which is also what locks the turn.

use serde::{Deserialize, Serialize};

use super::definition::SkillId;
use crate::board::{Board, Coord};
use crate::core::{EngineError, Player, Rejection};

/// Target-selection and resolution state of the skill system.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetState {
    /// No skill is pending or resolving.
    #[default]
    Idle,
    /// Waiting for the current player to pick a target for this skill.
    AwaitingTarget(SkillId),
    /// The skill was accepted and its effect has not been applied yet.
    Resolving(SkillId),
}

impl TargetState {
    #[must_use]
    pub fn is_idle(self) -> bool {
        self == TargetState::Idle
    }

    #[must_use]
    pub fn is_resolving(self) -> bool {
        matches!(self, TargetState::Resolving(_))
    }

    /// The skill awaiting a target, if any.
    #[must_use]
    pub fn awaiting(self) -> Option<SkillId> {
        match self {
            TargetState::AwaitingTarget(skill) => Some(skill),
            _ => None,
        }
    }
}

/// Check that `target` is an in-bounds cell holding `actor`'s opponent's
/// stone.
pub fn validate_target(board: &Board, actor: Player, target: Coord) -> Result<(), EngineError> {
    let cell = board.get(target)?;
    if cell.owner() == Some(actor.opponent()) {
        Ok(())
    } else {
        Err(Rejection::InvalidTarget.into())
    }
}

/// Every coordinate `actor` could target, in row-major order.
pub fn valid_targets(board: &Board, actor: Player) -> impl Iterator<Item = Coord> + '_ {
    let opponent = actor.opponent();
    board
        .iter()
        .filter(move |(_, cell)| cell.owner() == Some(opponent))
        .map(|(coord, _)| coord)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_state_queries() {
        assert!(TargetState::Idle.is_idle());
        assert_eq!(
            TargetState::AwaitingTarget(SkillId::RemoveStone).awaiting(),
            Some(SkillId::RemoveStone)
        );
        assert!(TargetState::Resolving(SkillId::Rewind).is_resolving());
        assert_eq!(TargetState::Resolving(SkillId::Rewind).awaiting(), None);
    }

    #[test]
    fn test_validate_target() {
        let board = Board::standard()
            .place(Coord::new(1, 1), Player::Black)
            .place(Coord::new(2, 2), Player::White);

        assert!(validate_target(&board, Player::Black, Coord::new(2, 2)).is_ok());

        // Own stone
        assert_eq!(
            validate_target(&board, Player::Black, Coord::new(1, 1)),
            Err(EngineError::IllegalCommand(Rejection::InvalidTarget))
        );
        // Empty cell
        assert_eq!(
            validate_target(&board, Player::Black, Coord::new(3, 3)),
            Err(EngineError::IllegalCommand(Rejection::InvalidTarget))
        );
        // Off the board
        assert!(matches!(
            validate_target(&board, Player::Black, Coord::new(20, 0)),
            Err(EngineError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_valid_targets() {
        let board = Board::standard()
            .place(Coord::new(1, 1), Player::Black)
            .place(Coord::new(2, 2), Player::White)
            .place(Coord::new(0, 5), Player::White);

        let targets: Vec<_> = valid_targets(&board, Player::Black).collect();
        assert_eq!(targets, vec![Coord::new(0, 5), Coord::new(2, 2)]);
        let targets: Vec<_> = valid_targets(&board, Player::White).collect();
        assert_eq!(targets, vec![Coord::new(1, 1)]);
    }
}
