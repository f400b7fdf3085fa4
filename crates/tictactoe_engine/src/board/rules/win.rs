//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};

/// The eight winning lines: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `mark` has three in a row.
pub fn has_win(board: &Board, mark: Mark) -> bool {
    let sq = Square::Occupied(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == sq))
}

/// Checks if there is a winner on the board.
///
/// X is checked first, so a malformed board carrying lines for both marks
/// reports X.
pub fn check_winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| has_win(board, mark))
}

/// Counts `(own, opponent)` marks on one line.
pub fn line_counts(board: &Board, line: &[Position; 3], mark: Mark) -> (usize, usize) {
    line.iter()
        .fold((0, 0), |(own, opp), &pos| match board.get(pos).mark() {
            Some(m) if m == mark => (own + 1, opp),
            Some(_) => (own, opp + 1),
            None => (own, opp),
        })
}

/// Whether `mark` has two on some line whose third square is empty.
pub fn has_open_pair(board: &Board, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line_counts(board, line, mark) == (2, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX______".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "O___O___O".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = "_O__O__O_".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX_______".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_open_pair_needs_empty_third() {
        let board: Board = "XX_______".parse().unwrap();
        assert!(has_open_pair(&board, Mark::X));
        let blocked: Board = "XXO______".parse().unwrap();
        assert!(!has_open_pair(&blocked, Mark::X));
    }
}
