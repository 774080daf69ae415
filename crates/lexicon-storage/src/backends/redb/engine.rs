//! The redb-backed [`StorageEngine`]: one database file per store directory.

use std::fs;
use std::path::{Path, PathBuf};

use redb::{Database, DatabaseError};
use tracing::{debug, info};

use crate::engine::{StorageEngine, StorageError};

use super::transaction::RedbTransaction;

/// Name of the database file created inside the store directory.
pub const DATA_FILE_NAME: &str = "lexicon.redb";

/// Tuning for [`RedbEngine::open_with_config`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RedbConfig {
    /// Page cache size in bytes; `None` keeps redb's default.
    pub cache_size: Option<usize>,
}

impl RedbConfig {
    /// Start from redb's defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a page cache of `bytes`.
    #[must_use]
    pub const fn cache_size(mut self, bytes: usize) -> Self {
        self.cache_size = Some(bytes);
        self
    }
}

/// An open redb store.
///
/// The engine owns the open database file and its exclusive lock. Both are
/// released by [`RedbEngine::close`] or when the engine is dropped.
///
/// # Example
///
/// ```ignore
/// use lexicon_storage::backends::RedbEngine;
///
/// let engine = RedbEngine::open("words.d")?;
///
/// let mut tx = engine.begin_write()?;
/// tx.put("entries", b"Cerise", b"fruit")?;
/// tx.commit()?;
///
/// engine.close();
/// ```
pub struct RedbEngine {
    /// The underlying Redb database.
    db: Database,
    /// Directory holding the database file, `None` for in-memory engines.
    dir: Option<PathBuf>,
}

impl RedbEngine {
    /// Open or create a store rooted at the given directory.
    ///
    /// The directory is created if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Open`] if the directory or database file cannot be
    /// created or opened, and [`StorageError::Locked`] if another handle already
    /// holds the database.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        Self::open_with_config(dir, RedbConfig::default())
    }

    /// Open or create a store rooted at the given directory with custom configuration.
    ///
    /// # Errors
    ///
    /// See [`RedbEngine::open`].
    pub fn open_with_config(
        dir: impl AsRef<Path>,
        config: RedbConfig,
    ) -> Result<Self, StorageError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .map_err(|e| StorageError::Open(format!("{}: {e}", dir.display())))?;

        let path = dir.join(DATA_FILE_NAME);
        let mut builder = Database::builder();
        if let Some(bytes) = config.cache_size {
            builder.set_cache_size(bytes);
        }

        let db = builder.create(&path).map_err(|e| match e {
            DatabaseError::DatabaseAlreadyOpen => StorageError::Locked(dir.to_path_buf()),
            other => StorageError::Open(format!("{}: {other}", path.display())),
        })?;

        info!(path = %path.display(), "opened redb store");

        Ok(Self { db, dir: Some(dir.to_path_buf()) })
    }

    /// Create a volatile store, mostly for tests. Its contents vanish on drop.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Open`] if redb cannot initialise the backend.
    pub fn in_memory() -> Result<Self, StorageError> {
        let backend = redb::backends::InMemoryBackend::new();
        let db = Database::builder()
            .create_with_backend(backend)
            .map_err(|e| StorageError::Open(format!("in-memory store: {e}")))?;

        debug!("opened in-memory redb store");

        Ok(Self { db, dir: None })
    }

    /// The directory this store is rooted at, or `None` for in-memory stores.
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Close the store, releasing the database file and its lock.
    pub fn close(self) {
        match &self.dir {
            Some(dir) => info!(dir = %dir.display(), "closing redb store"),
            None => debug!("closing in-memory redb store"),
        }
        drop(self.db);
    }
}

impl StorageEngine for RedbEngine {
    type Transaction<'a> = RedbTransaction;

    fn begin_read(&self) -> Result<Self::Transaction<'_>, StorageError> {
        self.db
            .begin_read()
            .map(RedbTransaction::new_read)
            .map_err(|e| StorageError::Transaction(format!("begin read: {e}")))
    }

    fn begin_write(&self) -> Result<Self::Transaction<'_>, StorageError> {
        self.db
            .begin_write()
            .map(RedbTransaction::new_write)
            .map_err(|e| StorageError::Transaction(format!("begin write: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Transaction;

    #[test]
    fn test_in_memory_has_no_dir() {
        let engine = RedbEngine::in_memory().expect("failed to create in-memory store");
        assert!(engine.dir().is_none());

        let mut reader = engine.begin_read().expect("begin read");
        assert!(matches!(reader.put("entries", b"Kaki", b"fruit"), Err(StorageError::ReadOnly)));
    }

    #[test]
    fn test_config_cache_size() {
        assert_eq!(RedbConfig::new().cache_size, None);
        assert_eq!(RedbConfig::new().cache_size(4 << 20).cache_size, Some(4 << 20));
    }

    #[test]
    fn test_open_creates_directory() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let dir = tmp.path().join("nested").join("store");

        let engine = RedbEngine::open(&dir).expect("failed to open");
        assert!(dir.join(DATA_FILE_NAME).is_file());
        assert_eq!(engine.dir(), Some(dir.as_path()));
        engine.close();
    }

    #[test]
    fn test_open_on_file_fails() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let file = tmp.path().join("not-a-dir");
        fs::write(&file, b"plain file").expect("failed to write file");

        let err = RedbEngine::open(&file).err().expect("open should fail");
        assert!(matches!(err, StorageError::Open(_)));
    }

    #[test]
    fn test_commit_is_visible_to_new_snapshots() {
        let engine = RedbEngine::in_memory().expect("failed to create in-memory store");

        let mut writer = engine.begin_write().expect("begin write");
        writer.put("entries", b"Prune", b"fruit sec").expect("put");
        writer.commit().expect("commit");

        let reader = engine.begin_read().expect("begin read");
        assert_eq!(reader.get("entries", b"Prune").expect("get"), Some(b"fruit sec".to_vec()));
    }
}
