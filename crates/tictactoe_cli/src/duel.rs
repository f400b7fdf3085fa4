//! Strategy-versus-strategy matches.

use derive_getters::Getters;
use rand::Rng;
use serde::Serialize;
use tictactoe_engine::{Board, EngineError, Mark, Outcome, StrategyKind, choose_move};
use tracing::{debug, info, instrument};

/// Results of a series of games.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Getters, Serialize, derive_more::Display)]
#[display("X wins: {}, O wins: {}, draws: {}", x_wins, o_wins, draws)]
pub struct Tally {
    /// Games won by the X strategy.
    x_wins: u32,
    /// Games won by the O strategy.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::XWins => self.x_wins += 1,
            Outcome::OWins => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {}
        }
    }

    /// Number of finished games.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Plays one game from the empty board, X opening.
pub fn play_game<R: Rng + ?Sized>(
    x: StrategyKind,
    o: StrategyKind,
    rng: &mut R,
) -> Result<Outcome, EngineError> {
    let mut board = Board::new();
    let mut mark = Mark::X;
    loop {
        let outcome = board.outcome();
        if outcome.is_terminal() {
            return Ok(outcome);
        }
        let strategy = if mark == Mark::X { x } else { o };
        let pos = choose_move(board, mark, strategy, rng)?;
        board = board.place(pos, mark)?;
        mark = mark.opponent();
    }
}

/// Plays `games` games and tallies the outcomes.
#[instrument(skip(rng))]
pub fn run<R: Rng + ?Sized>(
    x: StrategyKind,
    o: StrategyKind,
    games: u32,
    rng: &mut R,
) -> Result<Tally, EngineError> {
    let mut tally = Tally::default();
    for game in 0..games {
        let outcome = play_game(x, o, rng)?;
        debug!(game, %outcome, "Game finished");
        tally.record(outcome);
    }
    info!(%tally, "Duel finished");
    Ok(tally)
}
