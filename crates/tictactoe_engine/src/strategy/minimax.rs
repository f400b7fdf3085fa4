//! Exhaustive minimax search.
//!
//! A 3x3 game ends within nine plies, so the whole tree below any board is
//! searched. The searching mark maximizes and its opponent minimizes;
//! leaves are scored by [`WIN_SCORE`](super::WIN_SCORE) minus the ply depth
//! so quicker wins and slower losses are preferred.

use super::playable_moves;
use super::search::{SearchResult, SearchStats, terminal_value};
use crate::board::{Board, Mark, Position};
use crate::error::EngineError;
use tracing::{debug, instrument};

/// Searches every line of play from `board` with `mark` to move.
///
/// Returns the lowest-index move among those with the best value.
///
/// # Errors
///
/// [`EngineError::NoLegalMove`] if the board is already decided.
#[instrument(level = "debug", skip(board), fields(board = %board.display()))]
pub fn search(board: &Board, mark: Mark) -> Result<SearchResult, EngineError> {
    let moves = playable_moves(board)?;
    let mut stats = SearchStats {
        nodes: 1,
        leaves: 0,
    };

    let mut best: Option<(Position, i32)> = None;
    for pos in moves {
        let value = min_value(&board.with(pos, mark), mark, 1, &mut stats);
        if best.is_none_or(|(_, top)| value > top) {
            best = Some((pos, value));
        }
    }

    let (best_move, value) = best.ok_or_else(|| EngineError::NoLegalMove(board.outcome()))?;
    debug!(position = %best_move, value, nodes = stats.nodes, leaves = stats.leaves, "Minimax move");
    Ok(SearchResult {
        best_move,
        value,
        stats,
    })
}

/// Value of `board` with `root` to move.
fn max_value(board: &Board, root: Mark, ply: i32, stats: &mut SearchStats) -> i32 {
    stats.nodes += 1;
    if let Some(value) = terminal_value(board, root, ply) {
        stats.leaves += 1;
        return value;
    }

    let mut best = i32::MIN;
    for pos in board.legal_moves() {
        best = best.max(min_value(&board.with(pos, root), root, ply + 1, stats));
    }
    best
}

/// Value of `board` with `root`'s opponent to move.
fn min_value(board: &Board, root: Mark, ply: i32, stats: &mut SearchStats) -> i32 {
    stats.nodes += 1;
    if let Some(value) = terminal_value(board, root, ply) {
        stats.leaves += 1;
        return value;
    }

    let mut best = i32::MAX;
    for pos in board.legal_moves() {
        best = best.min(max_value(
            &board.with(pos, root.opponent()),
            root,
            ply + 1,
            stats,
        ));
    }
    best
}
