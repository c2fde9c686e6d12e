use std::path::PathBuf;

use elotracker_db::StoreError;
use thiserror::Error;

/// Fatal ingestion errors. Parse-skips never surface here; they are
/// counted in [`ImportStats`](crate::ImportStats) and logged.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Delimited read error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Directory traversal error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Invalid period '{0}': expected YYYYMM")]
    InvalidPeriod(String),
    #[error("Partition not opened for this run: {0}")]
    PartitionNotOpen(&'static str),
}

impl ImportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
