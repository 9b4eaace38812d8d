use std::net::SocketAddr;

use axum::Router;
use reqwest::multipart::{Form, Part};

/// Serve a router on an ephemeral loopback port and return its address.
pub async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Spawn the proxy app pointed at the given backend URL; returns its base URL.
pub async fn spawn_proxy(backend_url: String) -> String {
    let config = server::config::Config {
        backend_url,
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 5,
    };
    let addr = spawn(server::app(config)).await;
    format!("http://{addr}")
}

/// An address nothing listens on: bind an ephemeral port, then release it.
pub async fn dead_backend_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// A well-formed upload form: one image file plus the turn selector.
pub fn upload_form(turn: &str) -> Form {
    Form::new()
        .part(
            "file",
            Part::bytes(vec![0x89, b'P', b'N', b'G'])
                .file_name("board.png")
                .mime_str("image/png")
                .unwrap(),
        )
        .text("turn", turn.to_string())
}
