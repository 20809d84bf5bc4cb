//! Reference move providers.

use tracing::debug;

use super::{MoveProvider, MoveRequest, ProviderError, Suggestion};
use crate::board::Coord;
use crate::core::GameRng;

/// Picks a uniformly random empty cell.
#[derive(Clone, Debug)]
pub struct RandomProvider {
    name: String,
    rng: GameRng,
}

impl RandomProvider {
    #[must_use]
    pub fn new(name: impl Into<String>, rng: GameRng) -> Self {
        Self { name: name.into(), rng }
    }
}

impl MoveProvider for RandomProvider {
    fn suggest(&mut self, request: &MoveRequest) -> Result<Suggestion, ProviderError> {
        let empty: Vec<Coord> = request.board.empty_cells().collect();
        let coord = self
            .rng
            .choose(&empty)
            .copied()
            .ok_or_else(|| ProviderError::Unavailable("board is full".to_string()))?;
        debug!(provider = %self.name, %coord, "random suggestion");
        Ok(Suggestion::new(coord).with_rationale("random"))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Always fails. Exercises the driver's fallback path.
#[derive(Clone, Debug)]
pub struct FailingProvider {
    error: ProviderError,
}

impl FailingProvider {
    #[must_use]
    pub fn new(error: ProviderError) -> Self {
        Self { error }
    }
}

impl Default for FailingProvider {
    fn default() -> Self {
        Self::new(ProviderError::Timeout)
    }
}

impl MoveProvider for FailingProvider {
    fn suggest(&mut self, _request: &MoveRequest) -> Result<Suggestion, ProviderError> {
        Err(self.error.clone())
    }

    fn name(&self) -> &str {
        "failing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::Player;
    use crate::driver::Difficulty;

    fn request(board: Board) -> MoveRequest {
        MoveRequest {
            board,
            difficulty: Difficulty::Easy,
            player: Player::Black,
        }
    }

    #[test]
    fn test_random_provider_picks_empty_cell() {
        let board = Board::new(2)
            .place(Coord::new(0, 0), Player::Black)
            .place(Coord::new(0, 1), Player::White)
            .place(Coord::new(1, 0), Player::Black);
        let mut provider = RandomProvider::new("random", GameRng::new(1));

        let suggestion = provider.suggest(&request(board)).unwrap();
        assert_eq!(suggestion.coord, Coord::new(1, 1));
    }

    #[test]
    fn test_random_provider_is_deterministic() {
        let mut a = RandomProvider::new("a", GameRng::new(9));
        let mut b = RandomProvider::new("b", GameRng::new(9));
        let req = request(Board::standard());
        assert_eq!(a.suggest(&req), b.suggest(&req));
    }

    #[test]
    fn test_failing_provider() {
        let mut provider = FailingProvider::new(ProviderError::Malformed("{}".into()));
        assert_eq!(
            provider.suggest(&request(Board::standard())),
            Err(ProviderError::Malformed("{}".into()))
        );
    }
}
