use std::path::PathBuf;

use crate::api::{init_tracing, run_server};
use crate::config::Config;
use crate::error::{NotesError, Result};
use crate::storage::NoteStore;

/// Longest content preview shown by `list`.
const PREVIEW_CHARS: usize = 60;

pub fn handle_serve(host: Option<String>, port: Option<u16>, db: Option<PathBuf>) -> Result<()> {
    init_tracing();
    let config = Config::from_env()?.with_overrides(host, port, db);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| NotesError::Server(format!("Failed to start runtime: {e}")))?;

    runtime.block_on(run_server(config))
}

pub fn handle_init(db: Option<PathBuf>) -> Result<()> {
    let config = Config::from_env()?.with_overrides(None, None, db);
    let store = NoteStore::open(&config.db_path)?;

    let path = store.path().unwrap_or(config.db_path.as_path());
    println!("Initialized note store at {}", path.display());
    Ok(())
}

pub fn handle_list(db: Option<PathBuf>, json: bool) -> Result<()> {
    let config = Config::from_env()?.with_overrides(None, None, db);
    let store = NoteStore::open(&config.db_path)?;
    let notes = store.list_notes()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&notes)?);
    } else if notes.is_empty() {
        println!("No notes found.");
    } else {
        println!("Notes:\n");
        for n in notes {
            println!(
                "  {:03} [{}] {}",
                n.id,
                n.created_at.format("%Y-%m-%d %H:%M"),
                n.title
            );
            if let Some(content) = n.content.as_deref().filter(|c| !c.is_empty()) {
                println!("      {}", preview(content));
            }
        }
    }

    Ok(())
}

fn preview(content: &str) -> String {
    let first_line = content.lines().next().unwrap_or_default();
    if first_line.chars().count() > PREVIEW_CHARS {
        let cut: String = first_line.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}...")
    } else {
        first_line.to_string()
    }
}
