pub mod clients;
pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Extension, Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::clients::engine::EngineClient;
use crate::config::Config;

/// Build the proxy router. Split out of `main` so integration tests can run
/// the app against a mock backend.
pub fn app(config: Config) -> Router {
    let engine = Arc::new(EngineClient::new(&config));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/api/analyze",
            get(routes::analyze::analyze_probe).post(routes::analyze::analyze),
        )
        .route("/api/proxy", post(routes::proxy::forward))
        .route("/api/sequence/{move_id}", get(routes::sequence::get_sequence))
        .layer(Extension(engine))
        // Board photos are routinely larger than the 2 MB extractor default.
        .layer(DefaultBodyLimit::max(25 * 1024 * 1024))
        .layer(cors)
}
