use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the keyed store.
///
/// A missing key is never an error; reads return `Ok(None)` instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode value for key '{key}': {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },
    #[error("Failed to decode value for key '{key}' in '{partition}': {source}")]
    Decode {
        partition: String,
        key: String,
        source: serde_json::Error,
    },
    #[error("Replica source not available: {}", path.display())]
    ReplicaUnavailable { path: PathBuf },
}
