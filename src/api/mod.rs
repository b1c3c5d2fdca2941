//! HTTP surface of the notes backend.
//!
//! ## Endpoints
//!
//! - `GET /notes` - all notes
//! - `POST /notes` - create a note, returns its id (201)
//! - `PUT /notes/{id}` - overwrite title and content (201)
//! - `DELETE /notes/{id}` - delete a note and recycle its id
//! - `POST /notes/summarise` - summarize the posted content
//! - `GET /health` - storage liveness

pub mod error;
pub mod handlers;
pub mod server;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::service::NoteService;
use crate::summarize::Summarizer;

pub use server::{init_tracing, run_server};

/// Shared state handed to every handler.
pub struct AppState {
    pub notes: NoteService,
    pub summarizer: Arc<dyn Summarizer>,
}

impl AppState {
    pub fn new(notes: NoteService, summarizer: Arc<dyn Summarizer>) -> Self {
        Self { notes, summarizer }
    }
}

/// Creates the router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    // Any origin, no credentials
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/notes", get(handlers::list_notes).post(handlers::add_note))
        .route("/notes/summarise", post(handlers::summarise_note))
        .route(
            "/notes/{id}",
            put(handlers::update_note).delete(handlers::delete_note),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
