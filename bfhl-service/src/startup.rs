//! Application startup and lifecycle management.
//!
//! Builds the router with its middleware stack, binds the listener and
//! serves until a shutdown signal arrives.

use crate::config::BfhlConfig;
use crate::handlers;
use crate::services::providers::groq::GroqProvider;
use crate::services::providers::CompletionProvider;
use crate::services::AiDelegate;
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{panic::catch_panic_layer, tracing::request_id_middleware};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<BfhlConfig>,
    pub ai: AiDelegate,
}

impl AppState {
    pub fn new(config: BfhlConfig, provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            config: Arc::new(config),
            ai: AiDelegate::new(provider),
        }
    }

    pub fn official_email(&self) -> Option<String> {
        self.config.official_email.clone()
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/bfhl", post(handlers::bfhl::bfhl))
        .route("/health", get(handlers::health::health_check))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(catch_panic_layer())
        // Add tracing layer
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Add tracing middleware for request_id
        .layer(from_fn(request_id_middleware))
        // Any origin may call the service
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application against the hosted Groq provider.
    pub async fn build(config: BfhlConfig) -> Result<Self, AppError> {
        let provider = GroqProvider::new(config.groq.clone())
            .map_err(|e| AppError::ConfigError(anyhow::Error::new(e)))?;

        tracing::info!(
            model = %config.groq.model,
            "Initialized Groq completion provider"
        );

        Self::build_with_provider(config, Arc::new(provider)).await
    }

    /// Build the application with an explicit provider (used by tests).
    pub async fn build_with_provider(
        config: BfhlConfig,
        provider: Arc<dyn CompletionProvider>,
    ) -> Result<Self, AppError> {
        // Port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        let state = AppState::new(config, provider);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal is received.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        tracing::info!("bfhl service listening on port {}", self.port);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
