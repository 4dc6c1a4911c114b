//! Application startup and lifecycle management.
//!
//! The `Application` wrapper binds its listener at build time so tests can
//! request port 0 and read back the assigned port before the server runs.

use crate::config::BfhlConfig;
use crate::handlers;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::TextProvider;
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state. Immutable after startup; no state is carried
/// between requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<BfhlConfig>,
    pub text_provider: Arc<dyn TextProvider>,
}

/// Build the service router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/bfhl", post(handlers::bfhl))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: BfhlConfig) -> Result<Self, AppError> {
        let gemini_config = GeminiConfig {
            api_key: config.gemini.api_key.clone(),
            model: config.gemini.model.clone(),
        };
        let text_provider: Arc<dyn TextProvider> = Arc::new(GeminiTextProvider::new(gemini_config));

        tracing::info!(
            model = %config.gemini.model,
            "Initialized Gemini text provider"
        );

        Self::with_provider(config, text_provider).await
    }

    /// Build with an injected text provider. Tests use this with a mock to
    /// keep the AI operation off the network.
    pub async fn with_provider(
        config: BfhlConfig,
        text_provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        // Port 0 = random port for testing.
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        let state = AppState {
            config: Arc::new(config),
            text_provider,
        };

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

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        tracing::info!("Server running on port {}", self.port);
        axum::serve(self.listener, router).await
    }
}
