//! Tic-tac-toe decision engine.
//!
//! Pure game logic plus five opponent strategies of increasing strength:
//! random, goal-based, utility-based, minimax and alpha-beta minimax.
//!
//! # Architecture
//!
//! - **Board**: immutable 3x3 snapshots, legal moves, outcome detection
//! - **Strategies**: one pure function per [`StrategyKind`]
//! - **Engine**: [`choose_move`] validates a request and dispatches it
//! - **Session**: [`GameSession`] threads a human-vs-strategy game by value
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, Mark, StrategyKind, choose_move};
//!
//! let board: Board = "XX_OO____".parse()?;
//! let pos = choose_move(board, Mark::X, StrategyKind::Goal, &mut rand::rng())?;
//! assert_eq!(pos.to_index(), 2);
//! # Ok::<(), tictactoe_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod board;
mod engine;
mod error;
mod session;
pub mod strategy;

pub use board::{Board, Mark, Outcome, Position, Square, SquareKind};
pub use engine::{DecisionRequest, DecisionResponse, choose_move, decide};
pub use error::EngineError;
pub use session::{GameResult, GameSession, NewGame, TurnReport};
pub use strategy::{SearchResult, SearchStats, StrategyInfo, StrategyKind, catalog};
