//! Board model: squares, positions, and the rules that classify them.

mod position;
pub mod rules;
mod types;

pub use position::{Position, SquareKind};
pub use types::{Board, Mark, Outcome, Square};
