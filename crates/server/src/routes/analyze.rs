use std::sync::Arc;

use axum::{extract::Multipart, Extension, Json};
use serde_json::{json, Value as JsonValue};

use vision_core::session::Turn;

use crate::clients::engine::{EngineClient, ForwardPart};
use crate::error::AppError;
use crate::routes::collect_parts;

/// POST /api/analyze
///
/// Relays the upload form to the analysis backend and passes the JSON result
/// back unchanged. The form must carry a `file` part and a valid `turn`
/// selector; the backend would default a missing turn silently, so reject it
/// here instead.
pub async fn analyze(
    Extension(engine): Extension<Arc<EngineClient>>,
    mut multipart: Multipart,
) -> Result<Json<JsonValue>, AppError> {
    let parts = collect_parts(&mut multipart).await?;

    let has_file = parts
        .iter()
        .any(|p| matches!(p, ForwardPart::File { name, .. } if name == "file"));
    if !has_file {
        return Err(AppError::BadRequest("No file provided".to_string()));
    }

    let turn = parts.iter().find_map(|p| match p {
        ForwardPart::Text { name, value } if name == "turn" => Some(value.as_str()),
        _ => None,
    });
    match turn {
        Some(value) => {
            value
                .parse::<Turn>()
                .map_err(|_| AppError::BadRequest(format!("Unknown turn selection: {value}")))?;
        }
        None => return Err(AppError::BadRequest("No turn provided".to_string())),
    }

    tracing::info!("Forwarding analysis request to backend");
    let data = engine.analyze(parts).await?;

    tracing::info!(
        has_fen = data.get("fen").is_some(),
        suggestions = data.get("suggestions").and_then(|v| v.as_array()).map(|a| a.len()),
        explanations = data.get("explanations").and_then(|v| v.as_array()).map(|a| a.len()),
        "Analysis completed"
    );
    Ok(Json(data))
}

/// GET /api/analyze — liveness probe for the route itself.
pub async fn analyze_probe() -> Json<JsonValue> {
    Json(json!({ "message": "Chess Vision API route is working" }))
}
