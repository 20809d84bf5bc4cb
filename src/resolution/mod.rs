//! Deferred effect resolution.
//!
//! Accepting a skill does not change the board. It schedules the effect
//! and hands back an `EffectToken`; the effect is applied when the token
//! is resolved. Presentation resolves after `delay_ms` (playing its
//! animation meanwhile); tests resolve immediately.
//!
//! ## Example Usage
//!
//! ```
//! use skill_gomoku::controller::Controller;
//! use skill_gomoku::board::Coord;
//! use skill_gomoku::skills::{SkillId, SkillOutcome};
//!
//! let mut game = Controller::standard();
//! for (r, c) in [(7, 7), (0, 0), (7, 8), (0, 1), (7, 9), (0, 2), (9, 9), (0, 3)] {
//!     game.place_stone(Coord::new(r, c)).unwrap();
//! }
//!
//! // Black has 4 points: enough to rewind
//! let token = game.invoke_skill(SkillId::Rewind, None).unwrap().token().unwrap();
//! assert!(game.state().is_turn_locked());
//!
//! let outcome = game.resolve(token).unwrap();
//! assert_eq!(outcome, SkillOutcome::Rewound { history_len: 7 });
//! assert!(!game.state().is_turn_locked());
//! ```

use serde::{Deserialize, Serialize};

use crate::board::Coord;
use crate::core::{Player, Rejection};
use crate::skills::SkillId;

/// Handle for an accepted skill whose effect has not been applied yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectToken {
    /// Controller generation the token was issued in. A reset bumps the
    /// generation, invalidating every outstanding token.
    pub generation: u64,

    /// Issue order within the generation.
    pub sequence: u64,

    /// The skill to apply.
    pub skill: SkillId,

    /// How long presentation should wait before resolving.
    pub delay_ms: u64,
}

/// An effect waiting for its token to be resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PendingEffect {
    pub token: EffectToken,
    pub invoker: Player,
    pub target: Option<Coord>,
}

/// Holds at most one in-flight effect.
#[derive(Clone, Debug, Default)]
pub struct EffectResolver {
    pending: Option<PendingEffect>,
    next_sequence: u64,
}

impl EffectResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// The token of the in-flight effect, if any.
    #[must_use]
    pub fn in_flight(&self) -> Option<EffectToken> {
        self.pending.as_ref().map(|p| p.token)
    }

    /// Schedule an effect and return its token.
    pub(crate) fn schedule(
        &mut self,
        generation: u64,
        skill: SkillId,
        delay_ms: u64,
        invoker: Player,
        target: Option<Coord>,
    ) -> EffectToken {
        debug_assert!(self.pending.is_none(), "only one effect may be in flight");
        let token = EffectToken {
            generation,
            sequence: self.next_sequence,
            skill,
            delay_ms,
        };
        self.next_sequence += 1;
        self.pending = Some(PendingEffect {
            token,
            invoker,
            target,
        });
        token
    }

    /// Remove and return the pending effect if `token` names it.
    pub(crate) fn take(&mut self, token: EffectToken) -> Result<PendingEffect, Rejection> {
        match &self.pending {
            None => Err(Rejection::NothingToResolve),
            Some(p) if p.token != token => Err(Rejection::StaleToken),
            Some(_) => self.pending.take().ok_or(Rejection::NothingToResolve),
        }
    }

    /// Drop any in-flight effect.
    pub fn clear(&mut self) {
        self.pending = None;
        self.next_sequence = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_new() {
        let resolver = EffectResolver::new();
        assert_eq!(resolver.in_flight(), None);
    }

    #[test]
    fn test_schedule_and_take() {
        let mut resolver = EffectResolver::new();
        let token = resolver.schedule(3, SkillId::WipeBoard, 800, Player::Black, None);

        assert_eq!(token.generation, 3);
        assert_eq!(token.sequence, 0);
        assert_eq!(token.delay_ms, 800);
        assert_eq!(resolver.in_flight(), Some(token));

        let pending = resolver.take(token).unwrap();
        assert_eq!(pending.invoker, Player::Black);
        assert_eq!(resolver.in_flight(), None);

        let next = resolver.schedule(3, SkillId::Rewind, 800, Player::White, None);
        assert_eq!(next.sequence, 1);
    }

    #[test]
    fn test_take_rejects_wrong_token() {
        let mut resolver = EffectResolver::new();
        assert_eq!(
            resolver.take(EffectToken {
                generation: 0,
                sequence: 0,
                skill: SkillId::Rewind,
                delay_ms: 0,
            }),
            Err(Rejection::NothingToResolve)
        );

        let token = resolver.schedule(1, SkillId::Rewind, 800, Player::Black, None);
        let stale = EffectToken { generation: 0, ..token };
        assert_eq!(resolver.take(stale), Err(Rejection::StaleToken));
        assert!(resolver.in_flight().is_some());
    }

    #[test]
    fn test_clear() {
        let mut resolver = EffectResolver::new();
        resolver.schedule(0, SkillId::SwapColors, 800, Player::White, None);
        resolver.clear();
        assert_eq!(resolver.in_flight(), None);
    }
}
