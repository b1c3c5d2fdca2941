use std::sync::Arc;

use tokio::sync::Mutex;

use crate::entity::{title_or_default, Note};
use crate::error::Result;
use crate::storage::NoteStore;

/// Note lifecycle on top of a shared [`NoteStore`].
///
/// The store lock is held for exactly one storage operation and never across
/// anything else.
#[derive(Clone)]
pub struct NoteService {
    store: Arc<Mutex<NoteStore>>,
}

impl NoteService {
    pub fn new(store: NoteStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Create a note and return its id. A missing title becomes "UNTITLED NOTE".
    pub async fn add_note(&self, title: Option<String>, content: Option<String>) -> Result<i64> {
        let title = title_or_default(title);
        let id = self
            .store
            .lock()
            .await
            .create_note(&title, content.as_deref())?;

        tracing::info!(note_id = id, "Note added");
        Ok(id)
    }

    pub async fn list_notes(&self) -> Result<Vec<Note>> {
        self.store.lock().await.list_notes()
    }

    /// Overwrite a note's title and content. Unknown ids are accepted silently.
    pub async fn update_note(
        &self,
        id: i64,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<()> {
        let title = title_or_default(title);
        let changed = self
            .store
            .lock()
            .await
            .update_note(id, &title, content.as_deref())?;

        if changed {
            tracing::info!(note_id = id, "Note updated");
        } else {
            tracing::debug!(note_id = id, "Update matched no note");
        }
        Ok(())
    }

    /// Delete a note. Unknown ids are accepted silently and not recycled.
    pub async fn delete_note(&self, id: i64) -> Result<()> {
        let existed = self.store.lock().await.delete_note(id)?;

        if existed {
            tracing::info!(note_id = id, "Note deleted");
        } else {
            tracing::debug!(note_id = id, "Delete matched no note");
        }
        Ok(())
    }

    /// Storage liveness check
    pub async fn ping(&self) -> Result<()> {
        self.store.lock().await.ping()
    }
}
