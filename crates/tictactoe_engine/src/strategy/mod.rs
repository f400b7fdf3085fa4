//! The five opponent strategies and their catalog.
//!
//! Strategies are a closed set: [`StrategyKind`] names one, and
//! [`StrategyKind::choose`] dispatches to that strategy's function. Every
//! strategy is a pure function of the board and the mark to move; only
//! the random fallbacks consume the caller's RNG.

pub mod alpha_beta;
pub mod goal;
pub mod minimax;
pub mod random;
mod search;
pub mod utility;

pub use search::{SearchResult, SearchStats, WIN_SCORE};

use crate::board::{Board, Mark, Position};
use crate::error::EngineError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;

/// Identifies one of the five strategies.
///
/// Declaration order is difficulty order. The lowercase variant name is the
/// stable id used on the wire and on the command line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StrategyKind {
    /// Uniformly random legal move.
    Random,
    /// Win, else block, else random.
    Goal,
    /// One-ply lookahead over a static utility.
    Utility,
    /// Exhaustive game-tree search.
    Minimax,
    /// Game-tree search with alpha-beta pruning.
    AlphaBeta,
}

impl StrategyKind {
    /// Parses a strategy id such as `"alphabeta"`.
    ///
    /// # Errors
    ///
    /// [`EngineError::UnknownStrategy`] if no strategy has this id.
    pub fn from_id(id: &str) -> Result<Self, EngineError> {
        StrategyKind::from_str(id.trim()).map_err(|_| EngineError::UnknownStrategy(id.to_string()))
    }

    /// The stable id.
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Random => "Random",
            StrategyKind::Goal => "Goal-Based",
            StrategyKind::Utility => "Utility-Based",
            StrategyKind::Minimax => "Minimax",
            StrategyKind::AlphaBeta => "Alpha-Beta",
        }
    }

    /// Difficulty from 1 (easiest) to 5.
    pub fn difficulty(self) -> u8 {
        match self {
            StrategyKind::Random => 1,
            StrategyKind::Goal => 2,
            StrategyKind::Utility => 3,
            StrategyKind::Minimax => 4,
            StrategyKind::AlphaBeta => 5,
        }
    }

    /// Asks this strategy for a move.
    ///
    /// Callers normally go through [`crate::choose_move`], which also
    /// validates the board and the turn.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoLegalMove`] if the board is already decided.
    pub fn choose<R: Rng + ?Sized>(
        self,
        board: &Board,
        mark: Mark,
        rng: &mut R,
    ) -> Result<Position, EngineError> {
        match self {
            StrategyKind::Random => random::choose(board, rng),
            StrategyKind::Goal => goal::choose(board, mark, rng),
            StrategyKind::Utility => utility::choose(board, mark),
            StrategyKind::Minimax => minimax::search(board, mark).map(|r| r.best_move),
            StrategyKind::AlphaBeta => alpha_beta::search(board, mark).map(|r| r.best_move),
        }
    }
}

/// Catalog entry describing a strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyInfo {
    /// Stable id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Difficulty from 1 to 5.
    pub difficulty: u8,
}

impl From<StrategyKind> for StrategyInfo {
    fn from(kind: StrategyKind) -> Self {
        Self {
            id: kind.id().to_string(),
            name: kind.name().to_string(),
            difficulty: kind.difficulty(),
        }
    }
}

/// All strategies, sorted by difficulty.
pub fn catalog() -> Vec<StrategyInfo> {
    let mut info: Vec<StrategyInfo> = StrategyKind::iter().map(StrategyInfo::from).collect();
    info.sort_by_key(|entry| entry.difficulty);
    info
}

/// Legal moves on a board that is still in play.
///
/// Shared guard for every strategy: a decided board has no legal moves even
/// when empty squares remain.
pub(crate) fn playable_moves(board: &Board) -> Result<Vec<Position>, EngineError> {
    let outcome = board.outcome();
    if outcome.is_terminal() {
        return Err(EngineError::NoLegalMove(outcome));
    }
    Ok(board.legal_moves())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for kind in StrategyKind::iter() {
            assert_eq!(StrategyKind::from_id(kind.id()).unwrap(), kind);
            assert_eq!(kind.to_string(), kind.id());
        }
        assert_eq!(StrategyKind::AlphaBeta.id(), "alphabeta");
    }

    #[test]
    fn test_unknown_id() {
        assert_eq!(
            StrategyKind::from_id("oracle"),
            Err(EngineError::UnknownStrategy("oracle".to_string()))
        );
    }

    #[test]
    fn test_catalog_sorted_by_difficulty() {
        let ids: Vec<String> = catalog().into_iter().map(|info| info.id).collect();
        assert_eq!(ids, ["random", "goal", "utility", "minimax", "alphabeta"]);
    }

    #[test]
    fn test_playable_moves_rejects_won_board() {
        let board: Board = "XXXOO____".parse().unwrap();
        assert_eq!(
            playable_moves(&board),
            Err(EngineError::NoLegalMove(crate::board::Outcome::XWins))
        );
    }
}
