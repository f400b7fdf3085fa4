//! Shared pieces of the game-tree searches.

use crate::board::{Board, Mark, Position};
use serde::{Deserialize, Serialize};

/// Value of a win found at the root; each ply of delay costs one point.
pub const WIN_SCORE: i32 = 10;

/// Work done by one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, root included.
    pub nodes: u64,
    /// Terminal boards evaluated.
    pub leaves: u64,
}

/// Chosen move together with its value and the cost of finding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Lowest-index move among those with the best value.
    pub best_move: Position,
    /// Value of `best_move` for the searching mark.
    pub value: i32,
    /// Search statistics.
    pub stats: SearchStats,
}

/// Scores a decided board from `root`'s point of view, or `None` while the
/// game is still going.
pub(crate) fn terminal_value(board: &Board, root: Mark, ply: i32) -> Option<i32> {
    match board.winner() {
        Some(mark) if mark == root => Some(WIN_SCORE - ply),
        Some(_) => Some(ply - WIN_SCORE),
        None if board.is_full() => Some(0),
        None => None,
    }
}
