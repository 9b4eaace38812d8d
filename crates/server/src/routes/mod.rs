pub mod analyze;
pub mod health;
pub mod proxy;
pub mod sequence;

use axum::extract::Multipart;

use crate::clients::engine::ForwardPart;
use crate::error::AppError;

/// Buffer every part of an inbound multipart body for re-sending.
pub(crate) async fn collect_parts(
    multipart: &mut Multipart,
) -> Result<Vec<ForwardPart>, AppError> {
    let mut parts = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match field.file_name() {
            Some(file_name) => {
                let file_name = file_name.to_string();
                let content_type = field.content_type().map(|ct| ct.to_string());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?
                    .to_vec();
                parts.push(ForwardPart::File {
                    name,
                    file_name,
                    content_type,
                    bytes,
                });
            }
            None => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read field: {e}")))?;
                parts.push(ForwardPart::Text { name, value });
            }
        }
    }
    Ok(parts)
}
