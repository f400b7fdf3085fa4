//! Decision engine facade.
//!
//! The single entry point a front end calls: hand over a board snapshot, the
//! mark to move and a strategy, get back a move.

use crate::board::{Board, Mark, Position};
use crate::error::EngineError;
use crate::strategy::StrategyKind;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Asks `strategy` for a move on `board`.
///
/// The mark counts must differ by at most one, `mark` must not be the mark
/// already ahead, and the game must not be decided.
///
/// # Errors
///
/// - [`EngineError::InvalidBoard`] if one mark leads by more than one.
/// - [`EngineError::WrongTurn`] if `mark` is not to move.
/// - [`EngineError::NoLegalMove`] if the board is already won or full.
#[instrument(skip(board, rng), fields(board = %board.display()))]
pub fn choose_move<R: Rng + ?Sized>(
    board: Board,
    mark: Mark,
    strategy: StrategyKind,
    rng: &mut R,
) -> Result<Position, EngineError> {
    check_turn(&board, mark)?;

    let outcome = board.outcome();
    if outcome.is_terminal() {
        warn!(%outcome, "Move requested on finished board");
        return Err(EngineError::NoLegalMove(outcome));
    }

    let pos = strategy.choose(&board, mark, rng)?;
    debug!(%strategy, position = %pos, "Strategy chose move");
    Ok(pos)
}

/// Checks the mark counts allow `mark` to move.
///
/// Counts may differ by at most one and the trailing mark moves next. With
/// equal counts either mark may move, since the board does not record who
/// opened.
fn check_turn(board: &Board, mark: Mark) -> Result<(), EngineError> {
    let (x, o) = board.mark_counts();
    let expected = if x == o {
        return Ok(());
    } else if x == o + 1 {
        Mark::O
    } else if o == x + 1 {
        Mark::X
    } else {
        return Err(EngineError::InvalidBoard { x, o });
    };

    if expected != mark {
        warn!(%expected, requested = %mark, "Move requested out of turn");
        return Err(EngineError::WrongTurn {
            expected,
            requested: mark,
        });
    }
    Ok(())
}

/// A request from the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRequest {
    /// Board snapshot.
    pub board: Board,
    /// Mark the strategy plays.
    pub mark_to_move: Mark,
    /// Which strategy to consult.
    pub strategy: StrategyKind,
}

/// The engine's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionResponse {
    /// Chosen cell index (0-8).
    #[serde(rename = "move")]
    pub cell: usize,
}

impl DecisionRequest {
    /// Answers this request using `rng` for any random choices.
    pub fn decide_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<DecisionResponse, EngineError> {
        let pos = choose_move(self.board, self.mark_to_move, self.strategy, rng)?;
        Ok(DecisionResponse {
            cell: pos.to_index(),
        })
    }
}

/// Answers `request` with the thread-local RNG.
pub fn decide(request: &DecisionRequest) -> Result<DecisionResponse, EngineError> {
    request.decide_with(&mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Outcome;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_rejects_wrong_turn() {
        let board: Board = "X________".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            choose_move(board, Mark::X, StrategyKind::Random, &mut rng),
            Err(EngineError::WrongTurn {
                expected: Mark::O,
                requested: Mark::X
            })
        );
    }

    #[test]
    fn test_rejects_invalid_counts() {
        let board: Board = "OO_______".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            choose_move(board, Mark::X, StrategyKind::Goal, &mut rng),
            Err(EngineError::InvalidBoard { x: 0, o: 2 })
        );
    }

    #[test]
    fn test_accepts_o_opening() {
        let board: Board = "OO_X_____".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let pos = choose_move(board, Mark::X, StrategyKind::Goal, &mut rng).unwrap();
        assert_eq!(pos, Position::TopRight);
        assert!(matches!(
            choose_move(board, Mark::O, StrategyKind::Goal, &mut rng),
            Err(EngineError::WrongTurn { .. })
        ));
    }

    #[test]
    fn test_rejects_finished_board() {
        let board: Board = "XXXOO____".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            choose_move(board, Mark::O, StrategyKind::Minimax, &mut rng),
            Err(EngineError::NoLegalMove(Outcome::XWins))
        );
    }

    #[test]
    fn test_decide_returns_index() {
        let request = DecisionRequest {
            board: "XX_OO____".parse().unwrap(),
            mark_to_move: Mark::X,
            strategy: StrategyKind::AlphaBeta,
        };
        assert_eq!(decide(&request).unwrap(), DecisionResponse { cell: 2 });
    }
}
