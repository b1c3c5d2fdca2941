use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};

use crate::entity::{title_or_default, Note};
use crate::error::Result;

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_FILE: &str = "notes.db";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite-backed note storage and id bookkeeping.
///
/// Ids freed by deletion are kept in `deleted_ids` and handed out again,
/// smallest first, before the table grows past its current maximum.
pub struct NoteStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl NoteStore {
    /// Open or create the database file and ensure the schema exists
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;

        let store = Self {
            conn,
            path: Some(path.to_path_buf()),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Open a private in-memory database (tests and dry runs)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn, path: None };
        store.init_schema()?;
        Ok(store)
    }

    /// Location of the database file, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Create both tables if they are missing
    pub fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS notes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT,
                content TEXT,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            );

            CREATE TABLE IF NOT EXISTS deleted_ids (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                deleted_id INTEGER NOT NULL
            );
            ",
        )?;
        Ok(())
    }

    /// Cheap round trip used by the health endpoint
    pub fn ping(&self) -> Result<()> {
        self.conn.query_row("SELECT 1", [], |_| Ok(()))?;
        Ok(())
    }

    /// Reserve the next id: smallest recycled id, else `MAX(id) + 1`, else 1.
    ///
    /// A recycled id is consumed by this call even if no note is inserted
    /// afterwards. Use [`NoteStore::create_note`] to allocate and insert
    /// atomically.
    pub fn allocate_next_id(&mut self) -> Result<i64> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let id = next_id(&tx)?;
        tx.commit()?;
        Ok(id)
    }

    /// Insert a note under an already allocated id
    pub fn insert_note(&self, id: i64, title: &str, content: Option<&str>) -> Result<()> {
        insert(&self.conn, &Note::new(id, title.to_string(), content.map(str::to_string)))
    }

    /// Allocate an id and insert the note in one transaction
    pub fn create_note(&mut self, title: &str, content: Option<&str>) -> Result<i64> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let id = next_id(&tx)?;
        insert(&tx, &Note::new(id, title.to_string(), content.map(str::to_string)))?;
        tx.commit()?;
        Ok(id)
    }

    /// All notes in insertion order
    pub fn list_notes(&self) -> Result<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, content, created_at FROM notes ORDER BY rowid")?;

        let notes = stmt
            .query_map([], note_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(notes)
    }

    /// Look up a single note
    pub fn get_note(&self, id: i64) -> Result<Option<Note>> {
        let note = self
            .conn
            .query_row(
                "SELECT id, title, content, created_at FROM notes WHERE id = ?1",
                [id],
                note_from_row,
            )
            .optional()?;
        Ok(note)
    }

    /// Overwrite title and content. Returns false when no row has this id.
    pub fn update_note(&self, id: i64, title: &str, content: Option<&str>) -> Result<bool> {
        let changed = self.conn.execute(
            "UPDATE notes SET content = ?1, title = ?2 WHERE id = ?3",
            params![content, title, id],
        )?;
        Ok(changed > 0)
    }

    /// Remove a note and mark its id for reuse.
    ///
    /// The recycled id is recorded before the row is removed, both inside one
    /// transaction. Ids with no matching note are left alone and `false` is
    /// returned.
    pub fn delete_note(&mut self, id: i64) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let exists: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM notes WHERE id = ?1)",
            [id],
            |row| row.get(0),
        )?;

        if exists {
            tx.execute("INSERT INTO deleted_ids (deleted_id) VALUES (?1)", [id])?;
            tx.execute("DELETE FROM notes WHERE id = ?1", [id])?;
        }

        tx.commit()?;
        Ok(exists)
    }

    /// Ids waiting to be reused, smallest first
    pub fn pending_recycled_ids(&self) -> Result<Vec<i64>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT deleted_id FROM deleted_ids ORDER BY deleted_id")?;

        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<i64>, _>>()?;

        Ok(ids)
    }
}

fn next_id(conn: &Connection) -> Result<i64> {
    let recycled: Option<i64> =
        conn.query_row("SELECT MIN(deleted_id) FROM deleted_ids", [], |row| {
            row.get(0)
        })?;

    if let Some(id) = recycled {
        conn.execute("DELETE FROM deleted_ids WHERE deleted_id = ?1", [id])?;
        return Ok(id);
    }

    let max: Option<i64> = conn.query_row("SELECT MAX(id) FROM notes", [], |row| row.get(0))?;
    Ok(max.map_or(1, |m| m + 1))
}

fn insert(conn: &Connection, note: &Note) -> Result<()> {
    conn.execute(
        "INSERT INTO notes (id, title, content, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![note.id, note.title, note.content, note.created_at],
    )?;
    Ok(())
}

fn note_from_row(row: &Row<'_>) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get(0)?,
        title: title_or_default(row.get(1)?),
        content: row.get(2)?,
        created_at: row.get(3)?,
    })
}
