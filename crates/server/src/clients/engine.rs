//! HTTP client for the external analysis backend.
//!
//! Each forwarder rebuilds the inbound request against the fixed backend
//! address and applies the same response discipline: non-success statuses are
//! surfaced with their body text, and a non-JSON content type on a JSON
//! endpoint is a protocol violation, not something to relay.

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;

use crate::config::Config;
use crate::error::AppError;

/// One part of an inbound multipart form, buffered for re-sending.
pub enum ForwardPart {
    File {
        name: String,
        file_name: String,
        content_type: Option<String>,
        bytes: Vec<u8>,
    },
    Text {
        name: String,
        value: String,
    },
}

pub struct EngineClient {
    client: Client,
    base_url: String,
}

impl EngineClient {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .user_agent("ChessVision/1.0")
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap();
        Self {
            client,
            base_url: config.backend_url.trim_end_matches('/').to_string(),
        }
    }

    /// POST the buffered form to `/api/analyze` and relay the JSON payload.
    pub async fn analyze(&self, parts: Vec<ForwardPart>) -> Result<Value, AppError> {
        let url = format!("{}/api/analyze", self.base_url);
        let resp = self
            .client
            .post(&url)
            .multipart(build_form(parts)?)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.relay_json(resp).await
    }

    /// GET `/api/sequence/{move_id}` and relay the JSON payload.
    pub async fn fetch_sequence(&self, move_id: u32) -> Result<Value, AppError> {
        let url = format!("{}/api/sequence/{move_id}", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.relay_json(resp).await
    }

    /// Legacy pass-through: POST the form to the backend root and report
    /// success. The response body (opaque HTML) is deliberately discarded.
    pub async fn forward_form(&self, parts: Vec<ForwardPart>) -> Result<(), AppError> {
        let resp = self
            .client
            .post(&self.base_url)
            .multipart(build_form(parts)?)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::Upstream {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    async fn relay_json(&self, resp: reqwest::Response) -> Result<Value, AppError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !content_type.contains("application/json") {
            return Err(AppError::BadGateway(format!(
                "Analysis backend returned '{content_type}' instead of JSON"
            )));
        }

        resp.json::<Value>()
            .await
            .map_err(|e| AppError::BadGateway(format!("Malformed JSON from backend: {e}")))
    }

    fn transport_error(&self, e: reqwest::Error) -> AppError {
        if e.is_connect() || e.is_timeout() {
            AppError::Connectivity(format!(
                "Cannot connect to analysis backend at {}",
                self.base_url
            ))
        } else {
            AppError::Anyhow(e.into())
        }
    }
}

fn build_form(parts: Vec<ForwardPart>) -> Result<Form, AppError> {
    let mut form = Form::new();
    for part in parts {
        match part {
            ForwardPart::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                let mut p = Part::bytes(bytes).file_name(file_name);
                if let Some(ct) = content_type {
                    // The content type was already parsed once by the inbound
                    // multipart extractor, so this only fails on a forged header.
                    p = p
                        .mime_str(&ct)
                        .map_err(|_| AppError::BadRequest(format!("Invalid content type: {ct}")))?;
                }
                form = form.part(name, p);
            }
            ForwardPart::Text { name, value } => {
                form = form.text(name, value);
            }
        }
    }
    Ok(form)
}
