//! Uniformly random legal move.

use super::playable_moves;
use crate::board::{Board, Position};
use crate::error::EngineError;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

/// Picks any legal move with equal probability.
///
/// # Errors
///
/// [`EngineError::NoLegalMove`] if the board is already decided.
pub fn choose<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Position, EngineError> {
    let moves = playable_moves(board)?;
    let pos = moves
        .choose(rng)
        .copied()
        .ok_or_else(|| EngineError::NoLegalMove(board.outcome()))?;
    debug!(position = %pos, candidates = moves.len(), "Random move");
    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_only_picks_empty_squares() {
        let board: Board = "XOX_O_X__".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let pos = choose(&board, &mut rng).unwrap();
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_eventually_covers_every_move() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<Position> = (0..500).map(|_| choose(&board, &mut rng).unwrap()).collect();
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "XOXOXXOXO".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            choose(&board, &mut rng),
            Err(EngineError::NoLegalMove(_))
        ));
    }
}
