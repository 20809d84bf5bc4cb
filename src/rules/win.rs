//! Five-in-a-row detection.
//!
//! Only the four axes through the last-placed stone are scanned, so the
//! check is cheap and independent of history.

use crate::board::{Board, Cell, Coord};
use crate::core::{Player, WinningLine};

/// Direction vectors for line checking, in tie-break order.
pub const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Contiguous run of `player`'s stones through `origin` along one axis.
///
/// The run is ordered from the backward end to the forward end. Empty if
/// `origin` does not hold the player's stone.
pub fn run_through(board: &Board, player: Player, origin: Coord, (dr, dc): (isize, isize)) -> WinningLine {
    let mark = Cell::from(player);
    let size = board.size();
    let mut line = WinningLine::new();

    if !board.contains(origin) || board.at(origin) != mark {
        return line;
    }

    // Walk backward first so the run comes out in order
    let mut back = origin;
    while let Some(prev) = back.offset(-dr, -dc, size) {
        if board.at(prev) != mark {
            break;
        }
        back = prev;
    }

    let mut cursor = Some(back);
    while let Some(pos) = cursor {
        if board.at(pos) != mark {
            break;
        }
        line.push(pos);
        cursor = pos.offset(dr, dc, size);
    }

    line
}

/// Check whether the stone at `last` completes a winning run.
///
/// Returns the first run (in `DIRECTIONS` order) of at least `win_length`
/// stones containing `last`, exactly as long as the contiguous run.
pub fn check_win(board: &Board, player: Player, last: Coord, win_length: usize) -> Option<WinningLine> {
    DIRECTIONS
        .iter()
        .map(|&dir| run_through(board, player, last, dir))
        .find(|line| line.len() >= win_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BOARD_SIZE;

    fn board_with(stones: &[(usize, usize)], player: Player) -> Board {
        stones
            .iter()
            .fold(Board::standard(), |b, &(r, c)| b.place(Coord::new(r, c), player))
    }

    #[test]
    fn test_horizontal_win() {
        let board = board_with(&[(7, 7), (7, 8), (7, 9), (7, 10), (7, 11)], Player::Black);
        let line = check_win(&board, Player::Black, Coord::new(7, 11), 5).unwrap();
        let expected: Vec<_> = (7..=11).map(|c| Coord::new(7, c)).collect();
        assert_eq!(line.to_vec(), expected);
    }

    #[test]
    fn test_vertical_win_from_middle() {
        let board = board_with(&[(2, 4), (3, 4), (4, 4), (5, 4), (6, 4)], Player::White);
        let line = check_win(&board, Player::White, Coord::new(4, 4), 5).unwrap();
        assert_eq!(line.len(), 5);
        assert_eq!(line[0], Coord::new(2, 4));
        assert_eq!(line[4], Coord::new(6, 4));
    }

    #[test]
    fn test_diagonal_wins() {
        let se = board_with(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)], Player::Black);
        assert!(check_win(&se, Player::Black, Coord::new(0, 0), 5).is_some());

        let sw = board_with(&[(4, 8), (5, 7), (6, 6), (7, 5), (8, 4)], Player::White);
        let line = check_win(&sw, Player::White, Coord::new(6, 6), 5).unwrap();
        // Ordered from the backward end: (1, -1) walks back up-right
        assert_eq!(line[0], Coord::new(4, 8));
        assert_eq!(line[4], Coord::new(8, 4));
    }

    #[test]
    fn test_four_is_not_a_win() {
        let board = board_with(&[(9, 0), (9, 1), (9, 2), (9, 3)], Player::Black);
        assert!(check_win(&board, Player::Black, Coord::new(9, 3), 5).is_none());
    }

    #[test]
    fn test_overline_reports_full_run() {
        let board = board_with(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5)], Player::Black);
        let line = check_win(&board, Player::Black, Coord::new(0, 2), 5).unwrap();
        assert_eq!(line.len(), 6);
    }

    #[test]
    fn test_edge_and_corner() {
        let last = BOARD_SIZE - 1;
        let board = board_with(
            &[(last, 10), (last, 11), (last, 12), (last, 13), (last, 14)],
            Player::White,
        );
        assert!(check_win(&board, Player::White, Coord::new(last, last), 5).is_some());
    }

    #[test]
    fn test_opponent_stones_do_not_count() {
        let board = board_with(&[(7, 7), (7, 8), (7, 9), (7, 10)], Player::Black)
            .place(Coord::new(7, 11), Player::White);
        assert!(check_win(&board, Player::Black, Coord::new(7, 10), 5).is_none());
        assert!(check_win(&board, Player::White, Coord::new(7, 11), 5).is_none());
    }

    #[test]
    fn test_horizontal_wins_tie_break() {
        // (7,7) completes both a row and a column
        let mut stones: Vec<_> = (3..=7).map(|c| (7, c)).collect();
        stones.extend((3..7).map(|r| (r, 7)));
        let board = board_with(&stones, Player::Black);

        let line = check_win(&board, Player::Black, Coord::new(7, 7), 5).unwrap();
        assert!(line.iter().all(|c| c.row == 7));
    }

    #[test]
    fn test_shorter_win_length() {
        let board = board_with(&[(1, 1), (1, 2), (1, 3)], Player::Black);
        assert!(check_win(&board, Player::Black, Coord::new(1, 2), 3).is_some());
    }
}
