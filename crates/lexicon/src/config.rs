//! Dictionary configuration and builder.

use std::path::{Path, PathBuf};

use lexicon_storage::backends::redb::{RedbConfig, RedbEngine};

use crate::dictionary::Dictionary;
use crate::error::{Error, Result};

/// Options used to open a [`Dictionary`].
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Directory holding the store. Ignored for in-memory dictionaries.
    pub path: PathBuf,
    /// Keep everything in memory; nothing is persisted.
    pub in_memory: bool,
    /// Storage engine cache size in bytes, `None` for the engine default.
    pub cache_size: Option<usize>,
}

impl Config {
    /// Storage engine configuration derived from these options.
    pub fn redb_config(&self) -> RedbConfig {
        match self.cache_size {
            Some(size) => RedbConfig::new().cache_size(size),
            None => RedbConfig::new(),
        }
    }
}

/// Builder for opening a [`Dictionary`] with custom options.
///
/// # Examples
///
/// ```ignore
/// use lexicon::DictionaryBuilder;
///
/// let dict = DictionaryBuilder::new()
///     .path("words.d")
///     .cache_size(16 * 1024 * 1024)
///     .open()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct DictionaryBuilder {
    config: Config,
    path_set: bool,
}

impl DictionaryBuilder {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for an in-memory dictionary.
    pub fn in_memory() -> Self {
        Self { config: Config { in_memory: true, ..Config::default() }, path_set: false }
    }

    /// Set the store directory.
    #[must_use]
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.config.path = path.as_ref().to_path_buf();
        self.path_set = true;
        self
    }

    /// Set the storage engine cache size in bytes.
    #[must_use]
    pub fn cache_size(mut self, size: usize) -> Self {
        self.config.cache_size = Some(size);
        self
    }

    /// The configuration built so far.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Open the dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if no path was set for an on-disk dictionary,
    /// and [`Error::StorageOpen`] if the store cannot be opened.
    pub fn open(self) -> Result<Dictionary<RedbEngine>> {
        if !self.config.in_memory && !self.path_set {
            return Err(Error::config("no dictionary path specified"));
        }
        Dictionary::open_with_config(&self.config)
    }
}
