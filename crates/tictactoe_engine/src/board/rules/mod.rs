//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board. Rules are
//! separated from board storage so the strategies can reuse them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, has_open_pair, has_win, line_counts};

use super::{Board, Outcome};

/// Classifies a board as exactly one of the four outcomes.
pub fn outcome(board: &Board) -> Outcome {
    match check_winner(board) {
        Some(mark) => Outcome::win_for(mark),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::Ongoing,
    }
}
