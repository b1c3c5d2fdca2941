//! Server setup and lifecycle.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;

use super::{create_router, AppState};
use crate::config::Config;
use crate::error::{NotesError, Result};
use crate::service::NoteService;
use crate::storage::NoteStore;
use crate::summarize::GeminiSummarizer;

/// Open storage, build the summarizer and serve until shutdown.
pub async fn run_server(config: Config) -> Result<()> {
    let addr = config.bind_addr()?;

    let store = NoteStore::open(&config.db_path)?;
    tracing::info!(path = %config.db_path.display(), "Note store opened");

    if !config.summarizer.has_api_key() {
        tracing::warn!("GOOGLE_AI_API_KEY is not set; summarize requests will fail");
    }
    let summarizer = GeminiSummarizer::new(config.summarizer)?;

    let state = Arc::new(AppState::new(
        NoteService::new(store),
        Arc::new(summarizer),
    ));
    let router = create_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| NotesError::Server(format!("Failed to bind to {addr}: {e}")))?;

    tracing::info!(%addr, "Notes server starting");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| NotesError::Server(format!("Server error: {e}")))?;

    tracing::info!("Notes server stopped");
    Ok(())
}

/// Install the global fmt subscriber, honoring `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}

/// Signal handler for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        },
        () = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        },
    }
}
