//! Keyed partitions: one SQLite file per entity family.

use std::path::{Path, PathBuf};

use elotracker_core::Federation;
use rusqlite::{Connection, params};

use crate::error::StoreError;
use crate::schema;

// ── Partition names ─────────────────────────────────────────────────────────

pub const FIDE_MEMBERS: &str = "fide_members";
pub const FIDE_MEMBER_SUPPLEMENT: &str = "fide_member_supplement";
pub const USCF_MEMBERS: &str = "uscf_members";
pub const USCF_MEMBER_SUPPLEMENT: &str = "uscf_member_supplement";
pub const USCF_EVENTS: &str = "uscf_events";
pub const USCF_MEMBER_NEW_RATING: &str = "uscf_member_new_rating";
pub const USCF_MEMBER_WIN_LOSS: &str = "uscf_member_win_loss";

/// Member snapshot partition for a federation.
pub fn member_partition(federation: Federation) -> &'static str {
    match federation {
        Federation::Fide => FIDE_MEMBERS,
        Federation::Uscf => USCF_MEMBERS,
    }
}

/// Supplement history partition for a federation.
pub fn supplement_partition(federation: Federation) -> &'static str {
    match federation {
        Federation::Fide => FIDE_MEMBER_SUPPLEMENT,
        Federation::Uscf => USCF_MEMBER_SUPPLEMENT,
    }
}

/// File a partition lives in under `data_dir`.
pub fn partition_path(data_dir: &Path, name: &str) -> PathBuf {
    data_dir.join(format!("{name}.db"))
}

// ── Read seam ───────────────────────────────────────────────────────────────

/// Raw keyed reads, shared by primary partitions and read replicas.
pub trait EntryReader {
    /// Partition name, used in error messages.
    fn name(&self) -> &str;

    /// Raw value for `key`, or `None` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
}

pub(crate) fn read_entry(conn: &Connection, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
    let result = conn.query_row(
        "SELECT value FROM entries WHERE key = ?1",
        params![key],
        |row| row.get::<_, Vec<u8>>(0),
    );
    match result {
        Ok(value) => Ok(Some(value)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// ── Partition ───────────────────────────────────────────────────────────────

/// A writable partition.
pub struct Partition {
    name: String,
    path: Option<PathBuf>,
    conn: Connection,
}

impl Partition {
    /// Open (or create) the partition `name` under `data_dir`.
    ///
    /// The directory is created if missing. Any failure here is fatal to the
    /// caller's run.
    pub fn open(data_dir: &Path, name: &str) -> Result<Self, StoreError> {
        std::fs::create_dir_all(data_dir)?;
        let path = partition_path(data_dir, name);
        let conn = schema::open_database(&path)?;
        log::debug!("Opened partition '{}' at {}", name, path.display());
        Ok(Self {
            name: name.to_string(),
            path: Some(path),
            conn,
        })
    }

    /// In-memory partition for tests.
    pub fn open_memory(name: &str) -> Result<Self, StoreError> {
        Ok(Self {
            name: name.to_string(),
            path: None,
            conn: schema::open_memory()?,
        })
    }

    /// Database file backing this partition; `None` for in-memory ones.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write `value` under `key`, replacing any previous value.
    pub fn put(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO entries (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    /// Number of keys stored.
    pub fn entry_count(&self) -> Result<u64, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// All keys in ascending order.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT key FROM entries ORDER BY key")?;
        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(keys)
    }
}

impl EntryReader for Partition {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        read_entry(&self.conn, key)
    }
}

impl std::fmt::Debug for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Partition")
            .field("name", &self.name)
            .field("path", &self.path)
            .finish()
    }
}
