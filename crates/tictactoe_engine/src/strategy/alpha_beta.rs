//! Minimax with alpha-beta pruning.
//!
//! `alpha` is the value the maximizing side can already guarantee and
//! `beta` the value the minimizing side can. A node stops expanding
//! children once `alpha >= beta`. Bounds only move on a strict
//! improvement, so the root picks the same move and value as
//! [`minimax::search`](super::minimax::search).

use super::playable_moves;
use super::search::{SearchResult, SearchStats, terminal_value};
use crate::board::{Board, Mark, Position};
use crate::error::EngineError;
use tracing::{debug, instrument};

/// Searches from `board` with `mark` to move, pruning branches that cannot
/// change the result.
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

    let mut alpha = i32::MIN;
    let mut best: Option<(Position, i32)> = None;
    for pos in moves {
        let value = min_value(&board.with(pos, mark), mark, 1, alpha, i32::MAX, &mut stats);
        if best.is_none_or(|(_, top)| value > top) {
            best = Some((pos, value));
            alpha = alpha.max(value);
        }
    }

    let (best_move, value) = best.ok_or_else(|| EngineError::NoLegalMove(board.outcome()))?;
    debug!(position = %best_move, value, nodes = stats.nodes, leaves = stats.leaves, "Alpha-beta move");
    Ok(SearchResult {
        best_move,
        value,
        stats,
    })
}

fn max_value(
    board: &Board,
    root: Mark,
    ply: i32,
    mut alpha: i32,
    beta: i32,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;
    if let Some(value) = terminal_value(board, root, ply) {
        stats.leaves += 1;
        return value;
    }

    let mut best = i32::MIN;
    for pos in board.legal_moves() {
        let value = min_value(&board.with(pos, root), root, ply + 1, alpha, beta, stats);
        if value > best {
            best = value;
            alpha = alpha.max(best);
        }
        if alpha >= beta {
            break;
        }
    }
    best
}

fn min_value(
    board: &Board,
    root: Mark,
    ply: i32,
    alpha: i32,
    mut beta: i32,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;
    if let Some(value) = terminal_value(board, root, ply) {
        stats.leaves += 1;
        return value;
    }

    let mut best = i32::MAX;
    for pos in board.legal_moves() {
        let value = max_value(
            &board.with(pos, root.opponent()),
            root,
            ply + 1,
            alpha,
            beta,
            stats,
        );
        if value < best {
            best = value;
            beta = beta.min(best);
        }
        if alpha >= beta {
            break;
        }
    }
    best
}
