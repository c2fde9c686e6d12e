//! Read-only replicas of primary partitions.
//!
//! A replica is a private copy of a primary partition file taken with the
//! SQLite online backup API, then opened read-only. It lags the primary
//! until [`ReadReplica::catch_up`] is called; ingestion never calls it.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::backup::Backup;
use rusqlite::{Connection, OpenFlags};

use crate::error::StoreError;
use crate::partition::{EntryReader, read_entry};

/// Pages copied per backup step.
const BACKUP_PAGES_PER_STEP: std::ffi::c_int = 256;

pub struct ReadReplica {
    name: String,
    primary_path: PathBuf,
    replica_path: PathBuf,
    conn: Connection,
}

impl ReadReplica {
    /// Copy `primary_path` into `replica_dir` and open the copy read-only.
    ///
    /// Creates `replica_dir` if needed. Fails with
    /// [`StoreError::ReplicaUnavailable`] when the primary does not exist.
    pub fn open(primary_path: &Path, replica_dir: &Path) -> Result<Self, StoreError> {
        let file_name = match primary_path.file_name() {
            Some(name) if primary_path.is_file() => name.to_owned(),
            _ => {
                return Err(StoreError::ReplicaUnavailable {
                    path: primary_path.to_path_buf(),
                });
            }
        };
        std::fs::create_dir_all(replica_dir)?;
        let replica_path = replica_dir.join(&file_name);
        let name = Path::new(&file_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        copy_from_primary(primary_path, &replica_path)?;
        let conn = open_read_only(&replica_path)?;
        log::debug!(
            "Opened replica of {} at {}",
            primary_path.display(),
            replica_path.display()
        );

        Ok(Self {
            name,
            primary_path: primary_path.to_path_buf(),
            replica_path,
            conn,
        })
    }

    /// Refresh the replica from the current state of the primary.
    pub fn catch_up(&mut self) -> Result<(), StoreError> {
        if !self.primary_path.is_file() {
            return Err(StoreError::ReplicaUnavailable {
                path: self.primary_path.clone(),
            });
        }
        copy_from_primary(&self.primary_path, &self.replica_path)?;
        self.conn = open_read_only(&self.replica_path)?;
        log::debug!("Replica '{}' caught up", self.name);
        Ok(())
    }

    pub fn replica_path(&self) -> &Path {
        &self.replica_path
    }
}

impl EntryReader for ReadReplica {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        read_entry(&self.conn, key)
    }
}

fn copy_from_primary(primary_path: &Path, replica_path: &Path) -> Result<(), StoreError> {
    let src = Connection::open_with_flags(primary_path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
    let mut dst = Connection::open(replica_path)?;
    {
        let backup = Backup::new(&src, &mut dst)?;
        backup.run_to_completion(BACKUP_PAGES_PER_STEP, Duration::ZERO, None)?;
    }
    // Replicas are single-file snapshots.
    dst.pragma_update(None, "journal_mode", "DELETE")?;
    Ok(())
}

fn open_read_only(path: &Path) -> Result<Connection, StoreError> {
    Ok(Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?)
}
