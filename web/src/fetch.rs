//! Thin wrappers over the browser fetch API.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, RequestInit, Response};

pub async fn post_form(url: &str, form: &FormData) -> Result<(u16, String), String> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(form.as_ref());
    run(url, &opts).await
}

pub async fn get(url: &str) -> Result<(u16, String), String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    run(url, &opts).await
}

async fn run(url: &str, opts: &RequestInit) -> Result<(u16, String), String> {
    let window = web_sys::window().ok_or_else(|| "No window".to_string())?;

    let resp_value = JsFuture::from(window.fetch_with_str_and_init(url, opts))
        .await
        .map_err(|_| "Cannot connect to the analysis server".to_string())?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "Unexpected fetch response".to_string())?;

    let status = resp.status();
    let text_promise = resp
        .text()
        .map_err(|_| "Failed to read response body".to_string())?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|_| "Failed to read response body".to_string())?
        .as_string()
        .unwrap_or_default();

    Ok((status, text))
}

/// Pull the `error` field out of a JSON error body, falling back to a status
/// line when the body is not what we expect.
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| format!("Server responded with status: {status}"))
}
