//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::entity::Note;
use crate::error::Result;
use crate::summarize::require_content;

/// Body of POST /notes and PUT /notes/{id}.
#[derive(Debug, Default, Deserialize)]
pub struct NoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Body of POST /notes/summarise.
#[derive(Debug, Default, Deserialize)]
pub struct SummarizeRequest {
    pub content: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NoteCreatedResponse {
    pub message: String,
    pub id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.notes.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                database: "connected".to_string(),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy".to_string(),
                    database: "unavailable".to_string(),
                }),
            )
        }
    }
}

/// GET /notes
pub async fn list_notes(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Note>>> {
    let notes = state.notes.list_notes().await?;
    tracing::debug!(count = notes.len(), "Listing notes");
    Ok(Json(notes))
}

/// POST /notes
pub async fn add_note(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NoteRequest>,
) -> Result<(StatusCode, Json<NoteCreatedResponse>)> {
    let id = state.notes.add_note(req.title, req.content).await?;

    Ok((
        StatusCode::CREATED,
        Json(NoteCreatedResponse {
            message: "Note added".to_string(),
            id,
        }),
    ))
}

/// PUT /notes/{id}
///
/// Answers 201 even though nothing is created, and succeeds for unknown ids.
pub async fn update_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<NoteRequest>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    state.notes.update_note(id, req.title, req.content).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Note updated".to_string(),
        }),
    ))
}

/// DELETE /notes/{id}
pub async fn delete_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    state.notes.delete_note(id).await?;

    Ok(Json(MessageResponse {
        message: "Note deleted".to_string(),
    }))
}

/// POST /notes/summarise
pub async fn summarise_note(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<SummaryResponse>> {
    let content = require_content(req.content.as_deref())?;
    let summary = state.summarizer.summarize(content).await?;
    Ok(Json(SummaryResponse { summary }))
}
