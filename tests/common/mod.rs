//! Shared utilities for integration tests.

use std::collections::HashSet;
use std::net::SocketAddr;

use axum::body::Body;
use axum::http::{Request, Response};
use dummy_submitter::config::{Configuration, SecurityConfig, SharedConfig};
use dummy_submitter::http::HttpServer;
use dummy_submitter::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// Configuration with the given default code and security disabled.
pub fn config_with_code(code: &str) -> Configuration {
    let mut config = Configuration::default();
    config.service.code = code.to_string();
    config
}

/// Configuration enforcing bearer tokens.
pub fn secured_config(code: &str, tokens: &[&str]) -> Configuration {
    let mut config = config_with_code(code);
    config.security = SecurityConfig {
        enabled: true,
        tokens: tokens.iter().map(|t| t.to_string()).collect::<HashSet<_>>(),
    };
    config
}

/// Build a POST /submit request.
#[allow(dead_code)]
pub fn submit_request(headers: &[(&str, &str)], body: impl Into<Body>) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri("/submit");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(body.into()).unwrap()
}

/// Collect a response body as UTF-8 text.
#[allow(dead_code)]
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Start a server on an ephemeral port.
#[allow(dead_code)]
pub async fn start_server(config: Configuration) -> (SocketAddr, SharedConfig, Shutdown) {
    let shared = SharedConfig::new(config);
    let server = HttpServer::new(shared.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shared, shutdown)
}
