use std::sync::Arc;

use axum::{extract::Path, Extension, Json};
use serde_json::Value as JsonValue;

use crate::clients::engine::EngineClient;
use crate::error::AppError;

/// GET /api/sequence/{move_id}
///
/// Relays the per-move image-sequence payload. The move id is the 1-based
/// position in the suggestion list; axum rejects non-integer path values.
pub async fn get_sequence(
    Extension(engine): Extension<Arc<EngineClient>>,
    Path(move_id): Path<u32>,
) -> Result<Json<JsonValue>, AppError> {
    tracing::debug!("Fetching sequence for move {move_id}");
    let data = engine.fetch_sequence(move_id).await?;
    Ok(Json(data))
}
