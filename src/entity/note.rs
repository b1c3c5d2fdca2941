// src/entity/note.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title given to notes created or updated without one.
pub const DEFAULT_TITLE: &str = "UNTITLED NOTE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Note {
    pub fn new(id: i64, title: String, content: Option<String>) -> Self {
        Self {
            id,
            title,
            content,
            created_at: Utc::now(),
        }
    }
}

/// Resolve an optional client-supplied title to the stored value.
pub fn title_or_default(title: Option<String>) -> String {
    title.unwrap_or_else(|| DEFAULT_TITLE.to_string())
}
