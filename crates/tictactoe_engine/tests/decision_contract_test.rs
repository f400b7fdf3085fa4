//! The JSON request/response contract a front end speaks.

use tictactoe_engine::{
    DecisionRequest, DecisionResponse, EngineError, Mark, StrategyKind, catalog, decide,
};

#[test]
fn test_request_parses_nullable_cells() {
    let json = r#"{
        "board": ["X", "X", null, "O", "O", null, null, null, null],
        "mark_to_move": "X",
        "strategy": "alphabeta"
    }"#;
    let request: DecisionRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.mark_to_move, Mark::X);
    assert_eq!(request.strategy, StrategyKind::AlphaBeta);
    assert_eq!(request.board.mark_counts(), (2, 2));

    let response = decide(&request).unwrap();
    assert_eq!(
        serde_json::to_string(&response).unwrap(),
        r#"{"move":2}"#
    );
}

#[test]
fn test_every_strategy_id_is_accepted() {
    for info in catalog() {
        let json = format!(
            r#"{{"board":[null,null,null,null,"X",null,null,null,null],"mark_to_move":"O","strategy":"{}"}}"#,
            info.id
        );
        let request: DecisionRequest = serde_json::from_str(&json).unwrap();
        let DecisionResponse { cell } = decide(&request).unwrap();
        assert_ne!(cell, 4, "{} chose the occupied center", info.id);
        assert!(cell < 9);
    }
}

#[test]
fn test_unknown_strategy_is_rejected() {
    let json = r#"{"board":[null,null,null,null,null,null,null,null,null],"mark_to_move":"X","strategy":"montecarlo"}"#;
    assert!(serde_json::from_str::<DecisionRequest>(json).is_err());
    assert_eq!(
        StrategyKind::from_id("montecarlo"),
        Err(EngineError::UnknownStrategy("montecarlo".to_string()))
    );
}

#[test]
fn test_short_board_is_rejected() {
    let json = r#"{"board":[null,null],"mark_to_move":"X","strategy":"random"}"#;
    assert!(serde_json::from_str::<DecisionRequest>(json).is_err());
}

#[test]
fn test_decide_reports_engine_errors() {
    let json = r#"{"board":["X","X","X","O","O",null,null,null,null],"mark_to_move":"O","strategy":"minimax"}"#;
    let request: DecisionRequest = serde_json::from_str(json).unwrap();
    assert!(matches!(
        decide(&request),
        Err(EngineError::NoLegalMove(_))
    ));
}
