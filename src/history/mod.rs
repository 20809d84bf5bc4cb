//! History log of board snapshots.
//!
//! Append-only with one exception: rewind drops the two most recent
//! snapshots. The log is never empty.
//!
//! A wipe starts a new epoch. Snapshots before the epoch base remain in
//! the log (so its length still grows by one per recorded event) but
//! rewind can never reach them.

use im::Vector;

use crate::board::{Board, Coord};

/// Snapshots a rewind needs: the one it returns to plus the two it drops.
pub const REWIND_MIN_SNAPSHOTS: usize = 3;

/// Ordered sequence of board snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryLog {
    snapshots: Vector<Board>,
    base: usize,
}

impl HistoryLog {
    /// Create a log holding only the initial board.
    #[must_use]
    pub fn new(initial: Board) -> Self {
        Self {
            snapshots: Vector::unit(initial),
            base: 0,
        }
    }

    /// Number of snapshots (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the first snapshot of the current epoch.
    #[must_use]
    pub fn epoch_base(&self) -> usize {
        self.base
    }

    /// Snapshots recorded since the last wipe, including its empty board.
    #[must_use]
    pub fn epoch_len(&self) -> usize {
        self.len() - self.epoch_base()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.snapshots.get(index)
    }

    /// The most recent snapshot.
    #[must_use]
    pub fn latest(&self) -> &Board {
        debug_assert!(!self.snapshots.is_empty(), "history log must never be empty");
        &self.snapshots[self.snapshots.len() - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Board> {
        self.snapshots.iter()
    }

    pub(crate) fn push(&mut self, board: Board) {
        self.snapshots.push_back(board);
    }

    /// Append a board and make it the base of a new epoch.
    pub(crate) fn start_epoch(&mut self, board: Board) {
        self.snapshots.push_back(board);
        self.base = self.snapshots.len() - 1;
    }

    /// Whether a rewind may fire without crossing the epoch base.
    #[must_use]
    pub fn can_rewind(&self) -> bool {
        self.epoch_len() >= REWIND_MIN_SNAPSHOTS
    }

    /// Drop the two most recent snapshots and return the new latest one.
    ///
    /// Returns `None` (and leaves the log untouched) if that would cross
    /// the epoch base.
    pub(crate) fn rewind(&mut self) -> Option<&Board> {
        if !self.can_rewind() {
            return None;
        }
        self.snapshots.pop_back();
        self.snapshots.pop_back();
        debug_assert!(self.snapshots.len() > self.base);
        Some(self.latest())
    }

    /// The move that produced the latest snapshot, if it was a placement.
    ///
    /// `None` when fewer than two snapshots exist or the top two differ by
    /// no newly occupied cell.
    #[must_use]
    pub fn last_move(&self) -> Option<Coord> {
        let len = self.snapshots.len();
        if len < 2 {
            return None;
        }
        last_move_between(&self.snapshots[len - 1], &self.snapshots[len - 2])
    }
}

/// First cell (row-major) occupied in `current` but empty in `previous`.
#[must_use]
pub fn last_move_between(current: &Board, previous: &Board) -> Option<Coord> {
    current
        .iter()
        .zip(previous.iter())
        .find(|((_, now), (_, before))| !now.is_empty() && before.is_empty())
        .map(|((coord, _), _)| coord)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    fn log_with_moves(moves: &[(usize, usize)]) -> HistoryLog {
        let mut board = Board::standard();
        let mut log = HistoryLog::new(board.clone());
        let mut player = Player::Black;
        for &(r, c) in moves {
            board = board.place(Coord::new(r, c), player);
            log.push(board.clone());
            player = player.opponent();
        }
        log
    }

    #[test]
    fn test_new_log() {
        let log = HistoryLog::new(Board::standard());
        assert_eq!(log.len(), 1);
        assert!(!log.is_empty());
        assert!(!log.can_rewind());
        assert_eq!(log.last_move(), None);
    }

    #[test]
    fn test_rewind_drops_two() {
        let mut log = log_with_moves(&[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(log.len(), 4);

        let s1 = log.get(1).cloned().unwrap();
        let top = log.rewind().cloned().unwrap();

        assert_eq!(log.len(), 2);
        assert_eq!(top, s1);
        assert_eq!(log.last_move(), Some(Coord::new(0, 0)));
    }

    #[test]
    fn test_rewind_needs_three() {
        let mut log = log_with_moves(&[(0, 0)]);
        assert!(!log.can_rewind());
        assert!(log.rewind().is_none());
        assert_eq!(log.len(), 2);

        let mut log = log_with_moves(&[(0, 0), (1, 1)]);
        assert!(log.rewind().is_some());
        assert_eq!(log.len(), 1);
        assert_eq!(log.last_move(), None);
    }

    #[test]
    fn test_epoch_blocks_rewind() {
        let mut log = log_with_moves(&[(0, 0), (1, 1), (2, 2)]);
        log.start_epoch(Board::standard());

        assert_eq!(log.len(), 5);
        assert_eq!(log.epoch_base(), 4);
        assert_eq!(log.epoch_len(), 1);
        assert!(!log.can_rewind());

        let b = Board::standard().place(Coord::new(5, 5), Player::White);
        log.push(b.clone());
        log.push(b.place(Coord::new(6, 6), Player::Black));
        assert!(log.can_rewind());
        log.rewind();
        assert_eq!(log.len(), 5);
        assert!(log.latest().is_board_empty());
    }

    #[test]
    fn test_last_move_between() {
        let before = Board::standard().place(Coord::new(1, 1), Player::Black);
        let after = before.place(Coord::new(4, 9), Player::White);
        assert_eq!(last_move_between(&after, &before), Some(Coord::new(4, 9)));
        assert_eq!(last_move_between(&before, &after), None);
    }
}
