//! Interactive human-versus-strategy game over any line-based reader.

use anyhow::{Context, Result};
use rand::Rng;
use std::io::{BufRead, Write};
use tictactoe_engine::{GameResult, GameSession, StrategyKind};
use tracing::{debug, instrument};

/// Plays one game, reading cell numbers 1-9 from `input`.
///
/// Returns the result, or `None` if the player quit or input ended first.
#[instrument(skip(rng, input, out))]
pub fn run<R, I, W>(
    strategy: StrategyKind,
    ai_first: bool,
    rng: &mut R,
    mut input: I,
    mut out: W,
) -> Result<Option<GameResult>>
where
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    let game = GameSession::start(strategy, !ai_first, rng)?;
    let mut session = game.session;

    writeln!(
        out,
        "You are {} against {} (difficulty {}).",
        session.human_mark(),
        strategy.name(),
        strategy.difficulty()
    )?;
    if let Some(pos) = game.ai_move {
        writeln!(out, "{} plays {}.", strategy.name(), pos.to_index() + 1)?;
    }

    let mut line = String::new();
    while !session.is_over() {
        writeln!(out, "\n{}\n", session.board().display())?;
        write!(out, "Your move (1-9, q to quit): ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line).context("Failed to read move")? == 0 {
            debug!("Input closed mid-game");
            return Ok(None);
        }
        let entry = line.trim();
        if entry.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        let Some(index) = entry
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=9).contains(n))
            .map(|n| n - 1)
        else {
            writeln!(out, "Enter a number from 1 to 9.")?;
            continue;
        };

        match session.human_move(index, rng) {
            Ok(report) => {
                if let Some(pos) = report.ai_move {
                    writeln!(out, "{} plays {}.", strategy.name(), pos.to_index() + 1)?;
                }
                session = report.session;
            }
            Err(err) if err.is_illegal_move() => {
                writeln!(out, "Square {} is already taken.", index + 1)?
            }
            Err(err) => return Err(err.into()),
        }
    }

    writeln!(out, "\n{}\n", session.board().display())?;
    let result = *session.result();
    match result {
        Some(GameResult::Human) => writeln!(out, "You win!")?,
        Some(GameResult::Ai) => writeln!(out, "{} wins.", strategy.name())?,
        Some(GameResult::Draw) | None => writeln!(out, "Draw.")?,
    }
    Ok(result)
}
