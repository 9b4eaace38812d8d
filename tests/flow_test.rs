//! End-to-end upload → results scenarios: the real forwarder in front of a
//! mock backend, driving the upload flow state machine and the display model.

mod common;

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use vision_core::{AnalysisResult, AnalysisSession, Score, Turn, UploadFlow};

fn three_move_payload() -> Value {
    json!({
        "fen": "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
        "rendered_images": ["board_1.png", "board_2.png", "board_3.png"],
        "explanations": [
            ["f1b5", {"best_move_explanation": "Pins the knight.", "strategic_idea": "Pressure on e5.", "tactical_motif": "Pin"}],
            ["f1c4", "Eyes the f7 square."],
            ["d2d4", {}]
        ],
        "suggestions": [
            ["f1b5", "f1b5 a7a6 b5a4", 42],
            ["f1c4", "f1c4 g8f6", 31],
            ["d2d4", "d2d4 e5d4 f3d4", "Mate5"]
        ],
        "advanced_analysis": null
    })
}

/// Drive the full happy path: select a file, submit with turn Black, store
/// the session, and render three aligned move cards.
#[tokio::test]
async fn upload_with_turn_black_renders_three_aligned_cards() {
    let backend = Router::new().route(
        "/api/analyze",
        post(|_body: Bytes| async { Json(three_move_payload()) }),
    );
    let backend_addr = common::spawn(backend).await;
    let proxy = common::spawn_proxy(format!("http://{backend_addr}")).await;

    let mut flow = UploadFlow::new();
    flow.select_file("board.png");
    flow.begin_submit().unwrap();

    let resp = reqwest::Client::new()
        .post(format!("{proxy}/api/analyze"))
        .multipart(common::upload_form("Black"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let result: AnalysisResult = resp.json().await.unwrap();
    let session = flow.complete(result, Turn::Black).unwrap();
    assert_eq!(session.turn, Turn::Black);
    assert_eq!(session.file_name, "board.png");

    // Persist and reload through the three session parts, as the browser does.
    let (blob, file, turn) = session.to_parts().unwrap();
    let restored = AnalysisSession::from_parts(Some(blob), Some(file), Some(turn)).unwrap();

    let cards = restored.result.move_cards();
    assert_eq!(cards.len(), 3);

    // Input order preserved, index alignment across all three arrays.
    assert_eq!(cards[0].uci, "f1b5");
    assert_eq!(cards[0].explanation.tactical_motif, "Pin");
    assert_eq!(cards[0].score, Score::Centipawns(42.0));
    assert_eq!(cards[0].board_image.as_deref(), Some("board_1.png"));

    assert_eq!(cards[1].uci, "f1c4");
    assert_eq!(cards[1].explanation.best_move_explanation, "Eyes the f7 square.");
    assert_eq!(cards[1].board_image.as_deref(), Some("board_2.png"));

    assert_eq!(cards[2].uci, "d2d4");
    assert!(cards[2].explanation.is_empty(), "empty object falls back to the no-analysis card");
    assert_eq!(cards[2].score, Score::Mate("Mate5".to_string()));
    assert_eq!(cards[2].score.format(), "Mate in 5");
}

/// A backend-reported failure surfaces its message and leaves the flow on the
/// upload view with the file still selected.
#[tokio::test]
async fn backend_failure_surfaces_message_and_keeps_file() {
    let backend = Router::new().route(
        "/api/analyze",
        post(|_body: Bytes| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "engine timeout" })),
            )
        }),
    );
    let backend_addr = common::spawn(backend).await;
    let proxy = common::spawn_proxy(format!("http://{backend_addr}")).await;

    let mut flow = UploadFlow::new();
    flow.select_file("board.png");
    flow.begin_submit().unwrap();

    let resp = reqwest::Client::new()
        .post(format!("{proxy}/api/analyze"))
        .multipart(common::upload_form("White"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 500);

    let body: Value = resp.json().await.unwrap();
    flow.fail(body["error"].as_str().unwrap_or("Analysis failed"));

    assert!(flow.error_message().unwrap().contains("engine timeout"));
    assert_eq!(flow.file_name(), Some("board.png"));
    assert!(flow.can_submit(), "user can retry without re-choosing the file");
}

/// An HTML answer on the analyze route is a protocol violation: the forwarder
/// reports 502, distinct from a backend-reported error status.
#[tokio::test]
async fn html_answer_resolves_to_bad_gateway_error_state() {
    let backend = Router::new().route(
        "/api/analyze",
        post(|_body: Bytes| async { Html("<html>debugger</html>") }),
    );
    let backend_addr = common::spawn(backend).await;
    let proxy = common::spawn_proxy(format!("http://{backend_addr}")).await;

    let mut flow = UploadFlow::new();
    flow.select_file("board.png");
    flow.begin_submit().unwrap();

    let resp = reqwest::Client::new()
        .post(format!("{proxy}/api/analyze"))
        .multipart(common::upload_form("White"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 502);

    let body: Value = resp.json().await.unwrap();
    flow.fail(body["error"].as_str().unwrap_or("Server mismatch"));

    assert!(flow.error_message().is_some());
    assert_eq!(flow.file_name(), Some("board.png"));
}
