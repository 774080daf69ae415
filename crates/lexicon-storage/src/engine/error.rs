//! Storage error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The database could not be opened.
    #[error("failed to open database: {0}")]
    Open(String),

    /// The database is already held open by another handle.
    #[error("database is locked by another handle: {}", .0.display())]
    Locked(PathBuf),

    /// A write was attempted through a read-only transaction.
    #[error("transaction is read-only")]
    ReadOnly,

    /// A transaction could not be started or failed while running.
    #[error("transaction error: {0}")]
    Transaction(String),

    /// A write transaction failed to commit.
    #[error("commit failed: {0}")]
    Commit(String),

    /// The backend reported an unexpected failure.
    #[error("internal storage error: {0}")]
    Internal(String),
}

impl StorageError {
    /// Returns `true` if the database could not be opened for any reason.
    #[must_use]
    pub const fn is_open_error(&self) -> bool {
        matches!(self, Self::Open(_) | Self::Locked(_))
    }
}

/// A specialized `Result` type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
