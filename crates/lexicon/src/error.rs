//! Error types for Lexicon.
//!
//! This module provides the [`enum@Error`] type returned by every dictionary
//! operation.

use lexicon_storage::StorageError;
use thiserror::Error;

/// Errors that can occur when using a Lexicon dictionary.
///
/// A returned error always means the operation did not take effect (writes)
/// or produced no data (reads).
#[derive(Debug, Error)]
pub enum Error {
    /// The store directory is inaccessible or locked by another handle.
    #[error("failed to open dictionary: {0}")]
    StorageOpen(#[source] StorageError),

    /// A read transaction failed.
    #[error("storage read failed: {0}")]
    StorageRead(#[source] StorageError),

    /// A write transaction failed to apply or commit.
    #[error("storage write failed: {0}")]
    StorageWrite(#[source] StorageError),

    /// An entry could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Stored bytes could not be decoded into an entry.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// No entry is stored under the requested word.
    #[error("word not found: {0}")]
    NotFound(String),

    /// The dictionary was configured incorrectly.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if the requested word does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns `true` if this error came from the storage engine.
    #[must_use]
    pub const fn is_storage_error(&self) -> bool {
        matches!(self, Self::StorageOpen(_) | Self::StorageRead(_) | Self::StorageWrite(_))
    }

    /// Create a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Storage failures outside a write path are open or read failures.
impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        if err.is_open_error() {
            Self::StorageOpen(err)
        } else {
            Self::StorageRead(err)
        }
    }
}

/// A specialized `Result` type for Lexicon operations.
pub type Result<T> = std::result::Result<T, Error>;
