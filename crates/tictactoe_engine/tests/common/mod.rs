//! Helpers shared by the integration tests.

use std::collections::HashSet;
use tictactoe_engine::{Board, Mark};

/// Every board reachable from the empty board under legal alternating play,
/// stopping at decided boards. Sorted for stable iteration.
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    collect(Board::new(), Mark::X, &mut seen);
    let mut boards: Vec<Board> = seen.into_iter().collect();
    boards.sort_by_key(|board| <[Option<Mark>; 9]>::from(*board).map(encode));
    boards
}

fn collect(board: Board, to_move: Mark, seen: &mut HashSet<Board>) {
    if !seen.insert(board) || board.outcome().is_terminal() {
        return;
    }
    for pos in board.legal_moves() {
        let next = board.place(pos, to_move).expect("legal move");
        collect(next, to_move.opponent(), seen);
    }
}

fn encode(cell: Option<Mark>) -> u8 {
    match cell {
        None => 0,
        Some(Mark::X) => 1,
        Some(Mark::O) => 2,
    }
}

/// Reachable boards on which a move can still be made.
#[allow(dead_code)]
pub fn playable_boards() -> Vec<Board> {
    reachable_boards()
        .into_iter()
        .filter(|board| !board.outcome().is_terminal())
        .collect()
}
