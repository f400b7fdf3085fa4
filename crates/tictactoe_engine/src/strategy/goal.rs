//! Greedy rule cascade: win now, else block, else random.

use super::{playable_moves, random};
use crate::board::rules::has_win;
use crate::board::{Board, Mark, Position};
use crate::error::EngineError;
use rand::Rng;
use tracing::debug;

/// Plays an immediate win, otherwise blocks the opponent's immediate win,
/// otherwise falls back to [`random::choose`].
///
/// When several squares qualify, the lowest index is taken.
///
/// # Errors
///
/// [`EngineError::NoLegalMove`] if the board is already decided.
pub fn choose<R: Rng + ?Sized>(
    board: &Board,
    mark: Mark,
    rng: &mut R,
) -> Result<Position, EngineError> {
    let moves = playable_moves(board)?;

    if let Some(pos) = winning_move(board, &moves, mark) {
        debug!(position = %pos, %mark, "Taking winning move");
        return Ok(pos);
    }

    if let Some(pos) = winning_move(board, &moves, mark.opponent()) {
        debug!(position = %pos, %mark, "Blocking opponent");
        return Ok(pos);
    }

    random::choose(board, rng)
}

/// First move in `moves` that completes a line for `mark`.
pub fn winning_move(board: &Board, moves: &[Position], mark: Mark) -> Option<Position> {
    moves
        .iter()
        .copied()
        .find(|&pos| has_win(&board.with(pos, mark), mark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_prefers_win_over_block() {
        // O also threatens row 2; X should finish row 1.
        let board: Board = "XX_OO____".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(choose(&board, Mark::X, &mut rng).unwrap(), Position::TopRight);
    }

    #[test]
    fn test_blocks_when_no_win() {
        let board: Board = "OO_X_____".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(choose(&board, Mark::X, &mut rng).unwrap(), Position::TopRight);
    }

    #[test]
    fn test_lowest_index_win_is_taken() {
        // X can win at 2 (row) or 6 (column).
        let board: Board = "XX_XOO_O_".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(choose(&board, Mark::X, &mut rng).unwrap(), Position::TopRight);
    }
}
