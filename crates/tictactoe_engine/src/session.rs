//! Human-versus-strategy game sessions.
//!
//! A [`GameSession`] is plain data. Each call borrows the current session and
//! hands back the next one, so a front end juggling many games never shares
//! state between them, and a rejected move leaves the old session intact.

use crate::board::{Board, Mark, Outcome, Position};
use crate::engine::choose_move;
use crate::error::EngineError;
use crate::strategy::StrategyKind;
use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    /// The human completed a line.
    #[display("human")]
    Human,
    /// The strategy completed a line.
    #[display("ai")]
    Ai,
    /// Board filled without a line.
    #[display("draw")]
    Draw,
}

/// State of one game between a human and a strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameSession {
    /// Current board.
    board: Board,
    /// Mark played by the human.
    human_mark: Mark,
    /// Strategy playing the other mark.
    strategy: StrategyKind,
    /// Set once the game is over.
    result: Option<GameResult>,
}

/// A freshly started session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGame {
    /// The session, with the opening move already made if the strategy
    /// plays first.
    pub session: GameSession,
    /// The strategy's opening move, if it moved first.
    pub ai_move: Option<Position>,
}

/// What happened during one human turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// Session after the human move and any reply.
    pub session: GameSession,
    /// The human's move.
    pub human_move: Position,
    /// The strategy's reply, unless the human move ended the game.
    pub ai_move: Option<Position>,
}

impl GameSession {
    /// Starts a game. The human plays X when moving first, otherwise O and
    /// the strategy opens immediately.
    ///
    /// # Errors
    ///
    /// Propagates errors from the strategy's opening move.
    #[instrument(skip(rng))]
    pub fn start<R: Rng + ?Sized>(
        strategy: StrategyKind,
        human_first: bool,
        rng: &mut R,
    ) -> Result<NewGame, EngineError> {
        let human_mark = if human_first { Mark::X } else { Mark::O };
        let session = Self {
            board: Board::new(),
            human_mark,
            strategy,
            result: None,
        };
        info!(%strategy, %human_mark, "Starting new game");

        if human_first {
            return Ok(NewGame {
                session,
                ai_move: None,
            });
        }

        let (session, ai_move) = session.ai_turn(rng)?;
        Ok(NewGame {
            session,
            ai_move: Some(ai_move),
        })
    }

    /// Mark played by the strategy.
    pub fn ai_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    /// Mark to move, or `None` once the game is over.
    pub fn current_turn(&self) -> Option<Mark> {
        match self.result {
            Some(_) => None,
            None => self.board.to_move().ok(),
        }
    }

    /// Whether the game has finished.
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Plays the human's move at `index`, then the strategy's reply if the
    /// game is still open.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NoLegalMove`] if the game is already over.
    /// - [`EngineError::OutOfRange`] or [`EngineError::CellOccupied`] for an
    ///   illegal square.
    #[instrument(skip(self, rng), fields(strategy = %self.strategy))]
    pub fn human_move<R: Rng + ?Sized>(
        &self,
        index: usize,
        rng: &mut R,
    ) -> Result<TurnReport, EngineError> {
        if self.is_over() {
            warn!("Move submitted after game over");
            return Err(EngineError::NoLegalMove(self.board.outcome()));
        }

        let board = self.board.apply(index, self.human_mark)?;
        let human_move = Position::from_index(index).ok_or(EngineError::OutOfRange(index))?;
        let session = self.advance(board);

        if session.is_over() {
            return Ok(TurnReport {
                session,
                human_move,
                ai_move: None,
            });
        }

        let (session, ai_move) = session.ai_turn(rng)?;
        Ok(TurnReport {
            session,
            human_move,
            ai_move: Some(ai_move),
        })
    }

    fn ai_turn<R: Rng + ?Sized>(self, rng: &mut R) -> Result<(Self, Position), EngineError> {
        let ai_mark = self.ai_mark();
        let pos = choose_move(self.board, ai_mark, self.strategy, rng)?;
        let board = self.board.place(pos, ai_mark)?;
        Ok((self.advance(board), pos))
    }

    /// Replaces the board and records the result if the game just ended.
    fn advance(&self, board: Board) -> Self {
        let result = match board.outcome() {
            Outcome::Ongoing => None,
            Outcome::Draw => Some(GameResult::Draw),
            outcome if outcome.winner() == Some(self.human_mark) => Some(GameResult::Human),
            _ => Some(GameResult::Ai),
        };
        if let Some(result) = result {
            info!(%result, "Game over");
        }
        Self {
            board,
            result,
            ..self.clone()
        }
    }
}
