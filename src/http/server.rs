//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with both routes
//! - Wire up middleware (request ID, tracing, auth on `/submit`)
//! - Serve on a listener until the shutdown signal fires

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::SharedConfig;
use crate::http::auth::submission_auth_middleware;
use crate::http::handlers::{get_info, submit};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: SharedConfig,
}

/// HTTP server for the submission endpoint.
pub struct HttpServer {
    router: Router,
    config: SharedConfig,
}

impl HttpServer {
    /// Create a server reading from the given configuration handle.
    pub fn new(config: SharedConfig) -> Self {
        let state = AppState {
            config: config.clone(),
        };
        Self {
            router: build_router(state),
            config,
        }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get the configuration handle requests read from.
    pub fn config(&self) -> &SharedConfig {
        &self.config
    }

    /// The router, for serving through another transport or in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router(state: AppState) -> Router {
    let auth = middleware::from_fn_with_state(state.clone(), submission_auth_middleware);

    Router::new()
        .route("/", get(get_info))
        .route("/submit", post(submit).route_layer(auth))
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}
