//! # HTTP Encoding API
//!
//! Exposes the encoder to browser-based editors.
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | GET | `/api/modes` | draw modes and output formats |
//! | POST | `/api/encode` | JSON with packed data and generated code |
//! | POST | `/api/encode/header` | the `.h` file as an attachment |
//!
//! ## Usage
//!
//! ```bash
//! spritepack serve --listen 0.0.0.0:8080
//! ```

mod handlers;
mod state;

pub use handlers::encode::{ApiError, EncodeRequest, EncodeResponse, ModesResponse};
pub use state::{AppState, ServerConfig, DEFAULT_MAX_DIMENSION};

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::signal;
use tower_http::trace::TraceLayer;

use crate::error::SpritepackError;

/// JSON-encoded RGBA arrays run roughly 4 characters per byte.
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Build the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/modes", get(handlers::encode::modes))
        .route("/api/encode", post(handlers::encode::encode))
        .route("/api/encode/header", post(handlers::encode::header_file))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server and run until Ctrl+C or SIGTERM.
///
/// ## Example
///
/// ```no_run
/// use spritepack::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), spritepack::error::SpritepackError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
///     ..Default::default()
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), SpritepackError> {
    let app = build_router(Arc::new(AppState::new(config.clone())));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            SpritepackError::Server(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    tracing::info!(
        listen_addr = %config.listen_addr,
        values_per_line = config.values_per_line,
        "spritepack server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SpritepackError::Server(format!("Server error: {}", e)))?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::warn!("received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::warn!("received SIGTERM, shutting down");
        }
    }
}
