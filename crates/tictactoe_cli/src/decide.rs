//! One-shot JSON decision: a request in, a move out.

use anyhow::{Context, Result};
use rand::Rng;
use tictactoe_engine::DecisionRequest;
use tracing::{debug, instrument};

/// Parses a `DecisionRequest` from `input` and returns the response JSON.
#[instrument(skip(input, rng))]
pub fn answer<R: Rng + ?Sized>(input: &str, rng: &mut R) -> Result<String> {
    let request: DecisionRequest =
        serde_json::from_str(input).context("Failed to parse decision request")?;
    debug!(strategy = %request.strategy, mark = %request.mark_to_move, "Decision request");

    let response = request.decide_with(rng)?;
    serde_json::to_string(&response).context("Failed to encode decision response")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_blocks_opponent_line() {
        let mut rng = StdRng::seed_from_u64(0);
        let input = r#"{"board":["O","O",null,"X",null,null,null,null,null],"mark_to_move":"X","strategy":"goal"}"#;
        assert_eq!(answer(input, &mut rng).unwrap(), r#"{"move":2}"#);
    }

    #[test]
    fn test_malformed_request() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = answer("{not json", &mut rng).unwrap_err();
        assert!(err.to_string().contains("Failed to parse decision request"));
    }

    #[test]
    fn test_engine_error_passes_through() {
        let mut rng = StdRng::seed_from_u64(0);
        let input = r#"{"board":["X",null,null,null,null,null,null,null,null],"mark_to_move":"X","strategy":"random"}"#;
        let err = answer(input, &mut rng).unwrap_err();
        assert_eq!(err.to_string(), "It's not X's turn (O to move)");
    }
}
