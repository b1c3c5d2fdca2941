pub mod api;
pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod service;
pub mod storage;
pub mod summarize;

pub use api::{create_router, AppState};
pub use error::{NotesError, Result};
pub use service::NoteService;
pub use storage::NoteStore;
pub use summarize::{GeminiSummarizer, Summarizer};
