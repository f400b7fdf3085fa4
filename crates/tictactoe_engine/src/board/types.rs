//! Core domain types for tic-tac-toe.

use super::position::Position;
use super::rules;
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{instrument, warn};

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// Result of classifying a board.
///
/// Always recomputed from the squares, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// No line is complete and empty squares remain.
    #[display("ongoing")]
    Ongoing,
    /// X has three in a row.
    #[display("X wins")]
    XWins,
    /// O has three in a row.
    #[display("O wins")]
    OWins,
    /// The board is full and nobody has a line.
    #[display("draw")]
    Draw,
}

impl Outcome {
    /// The winning outcome for `mark`.
    pub fn win_for(mark: Mark) -> Self {
        match mark {
            Mark::X => Outcome::XWins,
            Mark::O => Outcome::OWins,
        }
    }

    /// Returns the winning mark, if the game was won.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::XWins => Some(Mark::X),
            Outcome::OWins => Some(Mark::O),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    /// Whether the game is over.
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are small `Copy` values. Every move produces a new board, so a
/// snapshot handed to a strategy can never be changed underneath it.
///
/// On the wire a board is nine cells, each `null`, `"X"` or `"O"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[Option<Mark>; 9]", into = "[Option<Mark>; 9]")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at a raw index, or `None` when the index is past 8.
    pub fn get_index(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty squares in ascending index order.
    ///
    /// Empty only when the board is full. Whether the game has already been
    /// won is a separate question answered by [`Board::outcome`].
    pub fn legal_moves(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Returns a copy of this board with `mark` placed at `index`.
    ///
    /// # Errors
    ///
    /// [`EngineError::OutOfRange`] if `index` is not 0-8,
    /// [`EngineError::CellOccupied`] if the square is taken.
    #[instrument(level = "trace")]
    pub fn apply(&self, index: usize, mark: Mark) -> Result<Board, EngineError> {
        let pos = Position::from_index(index).ok_or(EngineError::OutOfRange(index))?;
        self.place(pos, mark)
    }

    /// Like [`Board::apply`] but addressed by [`Position`].
    pub fn place(&self, pos: Position, mark: Mark) -> Result<Board, EngineError> {
        if !self.is_empty(pos) {
            warn!(position = %pos, "Rejected move onto occupied square");
            return Err(EngineError::CellOccupied(pos.to_index()));
        }
        Ok(self.with(pos, mark))
    }

    /// Places a mark without checking occupancy. Used inside the search where
    /// the move is known to come from [`Board::legal_moves`].
    pub(crate) fn with(&self, pos: Position, mark: Mark) -> Board {
        let mut next = *self;
        next.squares[pos.to_index()] = Square::Occupied(mark);
        next
    }

    /// Classifies the board.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(self)
    }

    /// Returns the mark with three in a row, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Counts `(x, o)` marks on the board.
    pub fn mark_counts(&self) -> (usize, usize) {
        self.squares
            .iter()
            .fold((0, 0), |(x, o), square| match square {
                Square::Occupied(Mark::X) => (x + 1, o),
                Square::Occupied(Mark::O) => (x, o + 1),
                Square::Empty => (x, o),
            })
    }

    /// The mark whose turn it is, derived from the mark counts on the
    /// assumption that X opened.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidBoard`] unless X leads O by zero or one.
    pub fn to_move(&self) -> Result<Mark, EngineError> {
        match self.mark_counts() {
            (x, o) if x == o => Ok(Mark::X),
            (x, o) if x == o + 1 => Ok(Mark::O),
            (x, o) => Err(EngineError::InvalidBoard { x, o }),
        }
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based cell number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[Option<Mark>; 9]> for Board {
    fn from(cells: [Option<Mark>; 9]) -> Self {
        Self {
            squares: cells.map(|cell| cell.map_or(Square::Empty, Square::Occupied)),
        }
    }
}

impl From<Board> for [Option<Mark>; 9] {
    fn from(board: Board) -> Self {
        board.squares.map(Square::mark)
    }
}

/// Parses nine cells such as `"XX_OO____"`.
///
/// `X`/`O` (either case) are marks; `_`, `.`, `-` and space are empty.
impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 9 {
            return Err(EngineError::BoardParse(format!(
                "expected 9 cells, found {}",
                chars.len()
            )));
        }

        let mut cells = [None; 9];
        for (cell, ch) in cells.iter_mut().zip(chars) {
            *cell = match ch {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '_' | '.' | '-' | ' ' => None,
                other => {
                    return Err(EngineError::BoardParse(format!(
                        "unexpected character {other:?}"
                    )));
                }
            };
        }
        Ok(Board::from(cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XX_OO____".parse().unwrap();
        assert_eq!(board.display(), "X|X|3\n-+-+-\nO|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        assert!(matches!(
            "XO".parse::<Board>(),
            Err(EngineError::BoardParse(_))
        ));
    }

    #[test]
    fn test_to_move_from_counts() {
        assert_eq!(Board::new().to_move().unwrap(), Mark::X);
        let board: Board = "X________".parse().unwrap();
        assert_eq!(board.to_move().unwrap(), Mark::O);
        let board: Board = "XX_______".parse().unwrap();
        assert_eq!(
            board.to_move(),
            Err(EngineError::InvalidBoard { x: 2, o: 0 })
        );
    }

    #[test]
    fn test_serde_uses_nullable_cells() {
        let board: Board = "X___O____".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"["X",null,null,null,"O",null,null,null,null]"#);
    }
}
