use elotracker_db::StoreError;
use elotracker_import::ImportError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Store open/read/write failed
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Ingestion failed
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Bad command-line input that clap can't catch
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }
}
