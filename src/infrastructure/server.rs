//! HTTP server
//!
//! Browser sessions get server-side state under `/s/{id}`; forms post back
//! and are answered with a redirect to the session page. A small JSON API
//! exposes the same transforms without a session.

pub mod api;
pub mod files;
pub mod pages;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use color_eyre::eyre::Result;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    infrastructure::{config::Config, export::FileExporter, session::SessionStore},
    presentation::{PageRenderer, RenderError},
};

/// Shared state handed to every handler
#[derive(Debug, Clone)]
pub struct ServerState {
    pub sessions: Arc<SessionStore>,
    pub renderer: Arc<PageRenderer>,
    /// Exporter for the JSON API and `/files`
    pub exporter: FileExporter,
}

impl ServerState {
    pub fn from_config(config: &Config) -> Result<Self, RenderError> {
        let exporter = FileExporter::new(&config.export.output_dir);
        let sessions = SessionStore::new(
            exporter.clone(),
            config.export.isolate_sessions,
            config.sessions.capacity,
        );
        Ok(Self {
            sessions: Arc::new(sessions),
            renderer: Arc::new(PageRenderer::new()?),
            exporter,
        })
    }
}

pub fn create_router(state: ServerState) -> Router {
    Router::new()
        // Browser UI
        .route("/", get(pages::start_session))
        .route("/s/:session", get(pages::show_page))
        .route("/s/:session/nav/:panel", post(pages::navigate))
        .route("/s/:session/refine", post(pages::submit_refine))
        .route("/s/:session/optimize", post(pages::submit_optimize))
        .route("/s/:session/convert", post(pages::submit_convert))
        .route("/s/:session/files/:file_name", get(files::session_download))
        // Shared output directory
        .route("/files/:file_name", get(files::shared_download))
        // JSON API
        .route("/api/health", get(api::health_check))
        .route("/api/languages", get(api::list_languages))
        .route("/api/refine", post(api::refine))
        .route("/api/optimize", post(api::optimize))
        .route("/api/convert", post(api::convert))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Bind and serve until Ctrl-C or SIGTERM
pub async fn serve(config: &Config) -> Result<()> {
    let state = ServerState::from_config(config)?;
    let app = create_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        "Starting server on {addr}, exporting to {}",
        config.export.output_dir.display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Unable to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Unable to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
