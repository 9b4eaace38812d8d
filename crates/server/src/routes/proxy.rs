use std::sync::Arc;

use axum::{extract::Multipart, Extension, Json};
use serde_json::{json, Value as JsonValue};

use crate::clients::engine::EngineClient;
use crate::error::AppError;
use crate::routes::collect_parts;

/// POST /api/proxy
///
/// Legacy pass-through to the backend root. The backend answers with opaque
/// HTML this layer does not interpret; success is reported without data.
pub async fn forward(
    Extension(engine): Extension<Arc<EngineClient>>,
    mut multipart: Multipart,
) -> Result<Json<JsonValue>, AppError> {
    let parts = collect_parts(&mut multipart).await?;
    engine.forward_form(parts).await?;
    Ok(Json(json!({ "success": true })))
}
