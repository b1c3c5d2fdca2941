use std::process::Command;
use tempfile::TempDir;

use notekeeper::NoteStore;

fn notekeeper_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_notekeeper"))
}

#[test]
fn test_init_creates_database() {
    let tmp = TempDir::new().unwrap();
    let db = tmp.path().join("notes.db");

    let output = notekeeper_cmd()
        .current_dir(tmp.path())
        .args(["init", "--db"])
        .arg(&db)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(db.exists());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Initialized note store"));
}

#[test]
fn test_init_twice_keeps_existing_notes() {
    let tmp = TempDir::new().unwrap();
    let db = tmp.path().join("notes.db");

    {
        let mut store = NoteStore::open(&db).unwrap();
        store.create_note("Keep me", Some("still here")).unwrap();
    }

    let output = notekeeper_cmd()
        .current_dir(tmp.path())
        .args(["init", "--db"])
        .arg(&db)
        .output()
        .unwrap();
    assert!(output.status.success());

    let store = NoteStore::open(&db).unwrap();
    assert_eq!(store.list_notes().unwrap().len(), 1);
}

#[test]
fn test_list_empty_store() {
    let tmp = TempDir::new().unwrap();
    let db = tmp.path().join("notes.db");

    let output = notekeeper_cmd()
        .current_dir(tmp.path())
        .args(["list", "--db"])
        .arg(&db)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No notes found."));
}

#[test]
fn test_list_shows_notes() {
    let tmp = TempDir::new().unwrap();
    let db = tmp.path().join("notes.db");

    {
        let mut store = NoteStore::open(&db).unwrap();
        store.create_note("Shopping", Some("milk\neggs")).unwrap();
        store.create_note("UNTITLED NOTE", None).unwrap();
    }

    let output = notekeeper_cmd()
        .current_dir(tmp.path())
        .args(["list", "--db"])
        .arg(&db)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("001"));
    assert!(stdout.contains("Shopping"));
    assert!(stdout.contains("milk"));
    assert!(!stdout.contains("eggs"));
    assert!(stdout.contains("UNTITLED NOTE"));
}

#[test]
fn test_list_json_output() {
    let tmp = TempDir::new().unwrap();
    let db = tmp.path().join("notes.db");

    {
        let mut store = NoteStore::open(&db).unwrap();
        store.create_note("First", Some("a")).unwrap();
        store.create_note("Second", None).unwrap();
        store.delete_note(1).unwrap();
    }

    let output = notekeeper_cmd()
        .current_dir(tmp.path())
        .args(["list", "--json", "--db"])
        .arg(&db)
        .output()
        .unwrap();

    assert!(output.status.success());
    let notes: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["id"], 2);
    assert_eq!(notes[0]["title"], "Second");
    assert!(notes[0]["content"].is_null());
}

#[test]
fn test_serve_rejects_invalid_host() {
    let tmp = TempDir::new().unwrap();
    let db = tmp.path().join("notes.db");

    let output = notekeeper_cmd()
        .current_dir(tmp.path())
        .args(["serve", "--host", "not a host", "--db"])
        .arg(&db)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid address"));
}
