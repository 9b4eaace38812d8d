use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Forwarder error taxonomy. Backend-reported failures keep their upstream
/// status; connectivity and protocol violations get their own codes so the
/// browser can tell the three apart.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Connectivity(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("Analysis backend error: {status} - {body}")]
    Upstream { status: u16, body: String },

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Connectivity(msg) => {
                tracing::error!("Backend unreachable: {msg}");
                (StatusCode::SERVICE_UNAVAILABLE, msg.clone())
            }
            AppError::BadGateway(msg) => {
                tracing::error!("Backend protocol violation: {msg}");
                (StatusCode::BAD_GATEWAY, msg.clone())
            }
            AppError::Upstream { status, .. } => {
                tracing::warn!("Backend reported failure: {self}");
                (
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                    self.to_string(),
                )
            }
            AppError::Anyhow(e) => {
                tracing::error!("Unexpected error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        // Same wire shape the browser views already expect: {"error": "..."}
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::BadRequest("no file".into()), 400),
            (AppError::Connectivity("down".into()), 503),
            (AppError::BadGateway("html".into()), 502),
            (AppError::Upstream { status: 500, body: "boom".into() }, 500),
            (AppError::Upstream { status: 404, body: "missing".into() }, 404),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status().as_u16(), expected);
        }
    }

    #[test]
    fn test_upstream_message_includes_status_and_body() {
        let err = AppError::Upstream { status: 500, body: "engine timeout".into() };
        assert_eq!(err.to_string(), "Analysis backend error: 500 - engine timeout");
    }
}
