//! One-ply lookahead scored by a static utility function.

use super::playable_moves;
use crate::board::rules::{LINES, has_open_pair, has_win, line_counts};
use crate::board::{Board, Mark, Position, SquareKind};
use crate::error::EngineError;
use tracing::{debug, instrument};

/// Score of a move that wins on the spot.
pub const WIN_UTILITY: i32 = 1_000;
/// Score of a move that leaves the opponent a line to complete.
pub const LOSS_UTILITY: i32 = -1_000;

/// Plays the legal move whose resulting board scores highest.
///
/// Ties go to the lowest index.
///
/// # Errors
///
/// [`EngineError::NoLegalMove`] if the board is already decided.
#[instrument(level = "debug", skip(board), fields(board = %board.display()))]
pub fn choose(board: &Board, mark: Mark) -> Result<Position, EngineError> {
    let moves = playable_moves(board)?;

    let mut best: Option<(Position, i32)> = None;
    for pos in moves {
        let score = score_move(board, pos, mark);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((pos, score));
        }
    }

    let (pos, score) = best.ok_or_else(|| EngineError::NoLegalMove(board.outcome()))?;
    debug!(position = %pos, score, "Utility move");
    Ok(pos)
}

/// Utility of playing `mark` at `pos`.
pub fn score_move(board: &Board, pos: Position, mark: Mark) -> i32 {
    let next = board.with(pos, mark);
    if has_win(&next, mark) {
        WIN_UTILITY
    } else if has_open_pair(&next, mark.opponent()) {
        LOSS_UTILITY
    } else {
        evaluate(&next, mark)
    }
}

/// Static heuristic for a board that nobody has won, from `mark`'s side.
///
/// Lines only one side can still complete count for that side (one mark
/// is worth 1, two marks 3). Squares add center 2, corner 1, edge 0 for
/// the owner.
pub fn evaluate(board: &Board, mark: Mark) -> i32 {
    let lines: i32 = LINES
        .iter()
        .map(|line| line_utility(line_counts(board, line, mark)))
        .sum();

    let squares: i32 = Position::ALL
        .iter()
        .filter_map(|&pos| {
            let owner = board.get(pos).mark()?;
            let weight = square_weight(pos.kind());
            Some(if owner == mark { weight } else { -weight })
        })
        .sum();

    lines + squares
}

fn line_utility((own, opp): (usize, usize)) -> i32 {
    let progress = |count: usize| match count {
        1 => 1,
        2 => 3,
        _ => 0,
    };
    match (own, opp) {
        (own, 0) => progress(own),
        (0, opp) => -progress(opp),
        _ => 0,
    }
}

fn square_weight(kind: SquareKind) -> i32 {
    match kind {
        SquareKind::Center => 2,
        SquareKind::Corner => 1,
        SquareKind::Edge => 0,
    }
}
