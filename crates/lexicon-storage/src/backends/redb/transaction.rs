//! Transactions and cursors over the redb tables.
//!
//! A [`RedbTransaction`] is either a read snapshot or a write transaction;
//! both answer reads through the same code, only writes check the mode.
//!
//! # Batched Cursors
//!
//! Cursors never materialize a whole logical table. They pull up to
//! `batch_size` entries (default [`DEFAULT_BATCH_SIZE`]) at a time and resume
//! after the last key they handed out when the batch runs dry.

use std::collections::VecDeque;
use std::fmt::Display;
use std::ops::Bound;

use redb::{ReadTransaction, ReadableTable, TableError, WriteTransaction};

use crate::engine::{Cursor, CursorResult, KeyValue, StorageError, Transaction};

use super::tables::definition;

/// Default batch size for cursor operations.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Wrap a backend failure as [`StorageError::Internal`].
fn internal(err: impl Display) -> StorageError {
    StorageError::Internal(err.to_string())
}

/// A read or write transaction on a [`RedbEngine`](super::RedbEngine).
#[allow(clippy::large_enum_variant)]
pub enum RedbTransaction {
    /// Snapshot; rejects `put` and `delete`.
    Read(ReadTransaction),
    /// Serialized writer; sees its own uncommitted changes.
    Write(WriteTransaction),
}

impl RedbTransaction {
    /// Wrap a redb read transaction.
    pub const fn new_read(tx: ReadTransaction) -> Self {
        Self::Read(tx)
    }

    /// Wrap a redb write transaction.
    pub const fn new_write(tx: WriteTransaction) -> Self {
        Self::Write(tx)
    }

    /// Create a cursor that fetches `batch_size` entries at a time.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Internal`] if `batch_size` is zero.
    pub fn cursor_with_batch_size(
        &self,
        table: &str,
        batch_size: usize,
    ) -> Result<RedbCursor<'_>, StorageError> {
        RedbCursor::new(self, table, batch_size)
    }

    /// Fetch up to `limit` entries of `table` in key order, strictly after
    /// `after` when given, from the start of the table otherwise.
    fn read_batch(
        &self,
        table: &str,
        after: Option<&[u8]>,
        limit: usize,
    ) -> Result<Vec<KeyValue>, StorageError> {
        let lower = after.map_or(Bound::Unbounded, Bound::Excluded);

        match self {
            Self::Read(tx) => match tx.open_table(definition(table)) {
                Ok(t) => collect_from(&t, lower, limit),
                // Never written to: the table is empty
                Err(TableError::TableDoesNotExist(_)) => Ok(Vec::new()),
                Err(e) => Err(internal(e)),
            },
            Self::Write(tx) => {
                collect_from(&tx.open_table(definition(table)).map_err(internal)?, lower, limit)
            }
        }
    }
}

fn lookup<T>(table: &T, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError>
where
    T: ReadableTable<&'static [u8], &'static [u8]>,
{
    Ok(table.get(key).map_err(internal)?.map(|guard| guard.value().to_vec()))
}

fn collect_from<T>(
    table: &T,
    lower: Bound<&[u8]>,
    limit: usize,
) -> Result<Vec<KeyValue>, StorageError>
where
    T: ReadableTable<&'static [u8], &'static [u8]>,
{
    let bounds: (Bound<&[u8]>, Bound<&[u8]>) = (lower, Bound::Unbounded);

    table
        .range::<&[u8]>(bounds)
        .map_err(internal)?
        .take(limit)
        .map(|item| {
            let (key, value) = item.map_err(internal)?;
            Ok((key.value().to_vec(), value.value().to_vec()))
        })
        .collect()
}

impl Transaction for RedbTransaction {
    type Cursor<'a>
        = RedbCursor<'a>
    where
        Self: 'a;

    fn get(&self, table: &str, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError> {
        match self {
            Self::Read(tx) => match tx.open_table(definition(table)) {
                Ok(t) => lookup(&t, key),
                Err(TableError::TableDoesNotExist(_)) => Ok(None),
                Err(e) => Err(internal(e)),
            },
            Self::Write(tx) => lookup(&tx.open_table(definition(table)).map_err(internal)?, key),
        }
    }

    fn put(&mut self, table: &str, key: &[u8], value: &[u8]) -> Result<(), StorageError> {
        let Self::Write(tx) = self else {
            return Err(StorageError::ReadOnly);
        };

        let mut data = tx.open_table(definition(table)).map_err(internal)?;
        data.insert(key, value).map_err(internal)?;
        Ok(())
    }

    fn delete(&mut self, table: &str, key: &[u8]) -> Result<bool, StorageError> {
        let Self::Write(tx) = self else {
            return Err(StorageError::ReadOnly);
        };

        let mut data = tx.open_table(definition(table)).map_err(internal)?;
        let previous = data.remove(key).map_err(internal)?;
        Ok(previous.is_some())
    }

    fn cursor(&self, table: &str) -> Result<Self::Cursor<'_>, StorageError> {
        self.cursor_with_batch_size(table, DEFAULT_BATCH_SIZE)
    }

    fn commit(self) -> Result<(), StorageError> {
        match self {
            Self::Read(_) => Ok(()),
            Self::Write(tx) => tx.commit().map_err(|e| StorageError::Commit(e.to_string())),
        }
    }

    fn rollback(self) -> Result<(), StorageError> {
        match self {
            Self::Read(_) => Ok(()),
            Self::Write(tx) => tx.abort().map_err(|e| StorageError::Transaction(e.to_string())),
        }
    }
}

/// Forward cursor over one logical table, holding at most one batch in memory.
pub struct RedbCursor<'a> {
    tx: &'a RedbTransaction,
    table: String,
    batch_size: usize,
    /// Fetched entries not yet returned.
    pending: VecDeque<KeyValue>,
    /// The last batch was short, so the table holds nothing past `pending`.
    drained: bool,
    /// `false` until the first `seek_first`/`next`.
    started: bool,
    /// Key handed out last; the next batch starts after it.
    last_key: Option<Vec<u8>>,
}

impl<'a> RedbCursor<'a> {
    /// Create an unpositioned cursor over `table`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Internal`] if `batch_size` is zero.
    pub fn new(
        tx: &'a RedbTransaction,
        table: &str,
        batch_size: usize,
    ) -> Result<Self, StorageError> {
        if batch_size == 0 {
            return Err(StorageError::Internal("cursor batch size must be positive".to_string()));
        }

        Ok(Self {
            tx,
            table: table.to_string(),
            batch_size,
            pending: VecDeque::new(),
            drained: false,
            started: false,
            last_key: None,
        })
    }

    /// Fetch the batch following `after`.
    fn refill(&mut self, after: Option<&[u8]>) -> Result<(), StorageError> {
        let batch = self.tx.read_batch(&self.table, after, self.batch_size)?;
        self.drained = batch.len() < self.batch_size;
        self.pending.extend(batch);
        Ok(())
    }

    /// Pop the next pending entry, remembering its key.
    fn advance(&mut self) -> CursorResult {
        let next = self.pending.pop_front();
        if let Some((key, _)) = &next {
            self.last_key = Some(key.clone());
        }
        Ok(next)
    }
}

impl Cursor for RedbCursor<'_> {
    fn seek_first(&mut self) -> CursorResult {
        self.started = true;
        self.pending.clear();
        self.refill(None)?;
        self.advance()
    }

    fn next(&mut self) -> CursorResult {
        if !self.started {
            return self.seek_first();
        }

        if self.pending.is_empty() && !self.drained {
            let Some(last) = self.last_key.clone() else {
                return Ok(None);
            };
            self.refill(Some(last.as_slice()))?;
        }

        self.advance()
    }
}
