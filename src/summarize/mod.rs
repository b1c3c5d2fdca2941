//! Note summarization through an external generative-text provider.
//!
//! The gateway is a single async call: validate the content, wrap it in a
//! fixed prompt, send it once, and return the provider's text or its error.
//! Nothing here touches note storage.

pub mod config;
mod gemini;

use async_trait::async_trait;

use crate::error::{NotesError, Result};

pub use config::SummarizerConfig;
pub use gemini::GeminiSummarizer;

/// Message returned when a summarize request has no usable content.
pub const MISSING_CONTENT: &str = "content must be present";

const PROMPT_PREFIX: &str = "Summarize the following note in 2-3 sentences:\n\n";

/// Produces a short natural-language summary of note content.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize `content`.
    ///
    /// Empty content fails with [`NotesError::Validation`] before any
    /// provider call; provider failures come back as [`NotesError::Provider`].
    async fn summarize(&self, content: &str) -> Result<String>;
}

/// Reject absent or empty content.
pub fn require_content(content: Option<&str>) -> Result<&str> {
    match content {
        Some(c) if !c.is_empty() => Ok(c),
        _ => Err(NotesError::Validation(MISSING_CONTENT.to_string())),
    }
}

/// The fixed summarization prompt. Content is inserted verbatim.
pub fn build_prompt(content: &str) -> String {
    format!("{PROMPT_PREFIX}{content}")
}
