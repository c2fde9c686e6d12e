use elotracker_db::schema::{CURRENT_VERSION, create_schema, schema_version};
use elotracker_db::{open_database, open_memory};

#[test]
fn create_schema_in_memory() {
    let conn = open_memory().unwrap();
    assert_eq!(schema_version(&conn).unwrap(), CURRENT_VERSION);
}

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    // Creating again should not error
    create_schema(&conn).unwrap();
}

#[test]
fn entries_table_exists() {
    let conn = open_memory().unwrap();
    let exists: bool = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='entries')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert!(exists);
}

#[test]
fn file_database_uses_wal() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_database(&dir.path().join("wal.db")).unwrap();
    let mode: String = conn
        .query_row("PRAGMA journal_mode", [], |row| row.get(0))
        .unwrap();
    assert_eq!(mode.to_lowercase(), "wal");
}

#[test]
fn reopening_keeps_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reopen.db");
    drop(open_database(&path).unwrap());
    let conn = open_database(&path).unwrap();
    assert_eq!(schema_version(&conn).unwrap(), CURRENT_VERSION);
}
