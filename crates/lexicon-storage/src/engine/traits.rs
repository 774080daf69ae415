//! Core storage engine traits.
//!
//! This module defines the fundamental traits for storage backends:
//!
//! - [`StorageEngine`] - The main entry point for storage operations
//! - [`Transaction`] - Atomic transaction support with read/write operations
//! - [`Cursor`] - Ordered forward iteration over key-value pairs
//!
//! The traits use generic associated types so backends can hand out
//! transactions and cursors that borrow from their parent.

use super::StorageError;

/// A key-value pair returned by cursor operations.
pub type KeyValue = (Vec<u8>, Vec<u8>);

/// Result type for cursor operations that return a key-value pair.
pub type CursorResult = Result<Option<KeyValue>, StorageError>;

/// A storage engine that provides transactional key-value operations.
///
/// Implementations must be thread-safe (`Send + Sync`) so a single opened
/// engine can be shared by every caller of the owning process.
///
/// # Example
///
/// ```ignore
/// use lexicon_storage::{StorageEngine, StorageError, Transaction};
///
/// fn example<E: StorageEngine>(engine: &E) -> Result<(), StorageError> {
///     // Scoped write: commits when the closure returns Ok
///     engine.update(|tx| tx.put("words", b"Abricot", b"fruit"))?;
///
///     // Scoped read against a snapshot
///     let value = engine.view(|tx| tx.get("words", b"Abricot"))?;
///     assert_eq!(value, Some(b"fruit".to_vec()));
///     Ok(())
/// }
/// ```
pub trait StorageEngine: Send + Sync {
    /// The transaction type for this engine.
    type Transaction<'a>: Transaction
    where
        Self: 'a;

    /// Begin a read-only transaction.
    ///
    /// Read transactions provide a consistent snapshot of the database.
    /// Multiple read transactions can run concurrently.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Transaction`] if the transaction cannot be started.
    fn begin_read(&self) -> Result<Self::Transaction<'_>, StorageError>;

    /// Begin a read-write transaction.
    ///
    /// Write transactions are serialized by the backend.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Transaction`] if the transaction cannot be started.
    fn begin_write(&self) -> Result<Self::Transaction<'_>, StorageError>;

    /// Run `f` against a read-only snapshot.
    ///
    /// The transaction is released when `f` returns, whatever its outcome.
    ///
    /// # Errors
    ///
    /// Returns the error from starting the transaction, or the error `f` returned.
    fn view<'s, T, E, F>(&'s self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Self::Transaction<'s>) -> Result<T, E>,
        E: From<StorageError>,
    {
        let tx = self.begin_read()?;
        let result = f(&tx);
        tx.rollback()?;
        result
    }

    /// Run `f` inside a write transaction.
    ///
    /// All mutations made by `f` are committed atomically if it returns `Ok`,
    /// and discarded entirely if it returns `Err`.
    ///
    /// # Errors
    ///
    /// Returns the error from starting or committing the transaction, or the
    /// error `f` returned.
    fn update<'s, T, E, F>(&'s self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Self::Transaction<'s>) -> Result<T, E>,
        E: From<StorageError>,
    {
        let mut tx = self.begin_write()?;
        match f(&mut tx) {
            Ok(value) => {
                tx.commit()?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback() {
                    tracing::warn!(error = %rollback_err, "rollback after failed update");
                }
                Err(err)
            }
        }
    }
}

/// A transaction that provides atomic key-value operations.
///
/// Write transactions must be explicitly committed; dropping one without
/// committing rolls back its changes.
pub trait Transaction {
    /// The cursor type for iteration.
    type Cursor<'a>: Cursor
    where
        Self: 'a;

    /// Get a value by key from a logical table.
    ///
    /// Returns `Ok(None)` if the key doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Internal`] if the backend fails to read.
    fn get(&self, table: &str, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError>;

    /// Put a key-value pair into a logical table, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ReadOnly`] on a read-only transaction, or
    /// [`StorageError::Internal`] if the write fails.
    fn put(&mut self, table: &str, key: &[u8], value: &[u8]) -> Result<(), StorageError>;

    /// Delete a key from a logical table.
    ///
    /// Returns `Ok(true)` if the key was deleted, `Ok(false)` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ReadOnly`] on a read-only transaction, or
    /// [`StorageError::Internal`] if the delete fails.
    fn delete(&mut self, table: &str, key: &[u8]) -> Result<bool, StorageError>;

    /// Create a cursor over every key-value pair of a logical table, in key order.
    ///
    /// The cursor starts before the first key and must be advanced with
    /// [`Cursor::next`] or positioned with [`Cursor::seek_first`].
    ///
    /// # Errors
    ///
    /// Returns an error if the cursor cannot be created.
    fn cursor(&self, table: &str) -> Result<Self::Cursor<'_>, StorageError>;

    /// Commit the transaction, making all changes durable.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Commit`] if the commit fails.
    fn commit(self) -> Result<(), StorageError>;

    /// Rollback the transaction, discarding all changes.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Transaction`] if the rollback fails.
    fn rollback(self) -> Result<(), StorageError>;
}

/// A cursor for ordered forward iteration over key-value pairs.
///
/// # Iteration Pattern
///
/// ```ignore
/// let mut cursor = tx.cursor("words")?;
/// while let Some((key, value)) = cursor.next()? {
///     // Process key-value pair
/// }
/// ```
pub trait Cursor {
    /// Position the cursor on the first key-value pair.
    ///
    /// Returns `None` if the table is empty.
    fn seek_first(&mut self) -> CursorResult;

    /// Move to the next key-value pair.
    ///
    /// An unpositioned cursor moves to the first pair. Returns `None` once
    /// the table is exhausted.
    fn next(&mut self) -> CursorResult;
}
