//! Errors surfaced by the decision engine.

use crate::board::{Mark, Outcome};

/// Error that can occur when validating a board, applying a move or asking a
/// strategy for one.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// The move index is not 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the index is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(usize),

    /// A strategy was asked to move on a finished board.
    #[display("No legal move: game is already over ({})", _0)]
    NoLegalMove(Outcome),

    /// The mark counts differ by more than one.
    #[display("Invalid board: {} X marks against {} O marks", x, o)]
    InvalidBoard {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },

    /// The requested mark does not match the mark counts.
    #[display("It's not {}'s turn ({} to move)", requested, expected)]
    WrongTurn {
        /// Mark implied by the board.
        expected: Mark,
        /// Mark the caller asked for.
        requested: Mark,
    },

    /// No strategy is registered under this id.
    #[display("Unknown strategy: {}", _0)]
    UnknownStrategy(String),

    /// Board text could not be parsed.
    #[display("Cannot parse board: {}", _0)]
    BoardParse(String),
}

impl EngineError {
    /// Whether this is a rejected human move the caller can re-prompt for.
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, EngineError::OutOfRange(_) | EngineError::CellOccupied(_))
    }
}

impl std::error::Error for EngineError {}
