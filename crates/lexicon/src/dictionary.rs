//! The dictionary handle and its operations.
//!
//! Every operation runs in exactly one storage transaction: `add` and `remove`
//! in a write transaction that commits on success, `get` and `list` in a read
//! snapshot. Nothing is cached between calls.
//!
//! # Examples
//!
//! ```ignore
//! use lexicon::Dictionary;
//!
//! let dict = Dictionary::open("words.d")?;
//! dict.add("banane", "fruit jaune")?;
//!
//! let entry = dict.get("Banane")?;
//! assert_eq!(entry.definition, "fruit jaune");
//!
//! for entry in &dict.list()? {
//!     println!("{entry}");
//! }
//!
//! dict.close();
//! ```

use std::collections::HashMap;
use std::path::Path;

use lexicon_storage::backends::redb::tables::names::ENTRIES;
use lexicon_storage::backends::RedbEngine;
use lexicon_storage::{Cursor, StorageEngine, Transaction};
use tracing::{debug, warn};

use crate::config::{Config, DictionaryBuilder};
use crate::encoding::{Decoder, Encoder};
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::listing::Listing;
use crate::normalize::normalize_word;

/// A word/definition store on top of a transactional storage engine.
///
/// A `Dictionary` owns its engine: open it once, share it (for instance
/// behind an `Arc`) and close it when done. Dropping it releases the store
/// just like [`Dictionary::close`].
pub struct Dictionary<E: StorageEngine = RedbEngine> {
    engine: E,
}

impl Dictionary<RedbEngine> {
    /// Open or create a dictionary stored in `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageOpen`] if the directory is inaccessible or
    /// already held by another open dictionary.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        DictionaryBuilder::new().path(dir).open()
    }

    /// Create a dictionary that lives in memory only.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageOpen`] if the engine cannot be created.
    pub fn in_memory() -> Result<Self> {
        DictionaryBuilder::in_memory().open()
    }

    /// Open a dictionary with the given configuration.
    ///
    /// This is typically called through [`DictionaryBuilder::open`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageOpen`] if the store cannot be opened.
    pub fn open_with_config(config: &Config) -> Result<Self> {
        let engine = if config.in_memory {
            RedbEngine::in_memory()
        } else {
            RedbEngine::open_with_config(&config.path, config.redb_config())
        }
        .map_err(Error::StorageOpen)?;

        Ok(Self::with_engine(engine))
    }

    /// Close the dictionary, releasing the store and its lock.
    pub fn close(self) {
        self.engine.close();
    }
}

impl<E: StorageEngine> Dictionary<E> {
    /// Wrap an already opened storage engine.
    pub const fn with_engine(engine: E) -> Self {
        Self { engine }
    }

    /// The underlying storage engine.
    pub const fn engine(&self) -> &E {
        &self.engine
    }

    /// Add `word` with `definition`, replacing any entry stored under the same word.
    ///
    /// The word is normalized first and the entry stamped with the current time.
    /// Returns the entry as stored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the entry cannot be encoded and
    /// [`Error::StorageWrite`] if the write transaction fails. In both cases
    /// the store is unchanged.
    pub fn add(&self, word: &str, definition: &str) -> Result<Entry> {
        let entry = Entry::new(normalize_word(word), definition);
        let bytes = entry.encode()?;

        self.engine
            .update(|tx| tx.put(ENTRIES, entry.word.as_bytes(), &bytes))
            .map_err(Error::StorageWrite)?;

        debug!(word = %entry.word, "added entry");
        Ok(entry)
    }

    /// Look up the entry stored under `word`.
    ///
    /// `word` is used as the key exactly as given; it is not normalized.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no entry exists, [`Error::Deserialization`]
    /// if the stored bytes are corrupt, and [`Error::StorageRead`] if the read
    /// transaction fails.
    pub fn get(&self, word: &str) -> Result<Entry> {
        let entry = self.engine.view(|tx| match tx.get(ENTRIES, word.as_bytes())? {
            Some(bytes) => Entry::decode(&bytes),
            None => Err(Error::NotFound(word.to_string())),
        })?;

        debug!(word, "read entry");
        Ok(entry)
    }

    /// Read every entry in one snapshot.
    ///
    /// The whole store is decoded before anything is returned: the first entry
    /// that fails to decode aborts the listing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Deserialization`] if any stored entry is corrupt and
    /// [`Error::StorageRead`] if the read transaction fails.
    pub fn list(&self) -> Result<Listing> {
        let entries = self.engine.view(|tx| {
            let mut entries = HashMap::new();
            let mut cursor = tx.cursor(ENTRIES)?;

            while let Some((key, value)) = cursor.next()? {
                let entry = Entry::decode(&value).map_err(|e| match e {
                    Error::Deserialization(msg) => Error::Deserialization(format!(
                        "{}: {msg}",
                        String::from_utf8_lossy(&key)
                    )),
                    other => other,
                })?;

                if entry.word.as_bytes() != key.as_slice() {
                    warn!(
                        key = %String::from_utf8_lossy(&key),
                        word = %entry.word,
                        "stored entry word differs from its key"
                    );
                }
                entries.insert(entry.word.clone(), entry);
            }

            Ok::<_, Error>(entries)
        })?;

        debug!(count = entries.len(), "listed entries");
        Ok(Listing::from_entries(entries))
    }

    /// Remove the entry stored under `word`.
    ///
    /// `word` is used as the key exactly as given. Removing a word that is not
    /// stored succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageWrite`] if the write transaction fails.
    pub fn remove(&self, word: &str) -> Result<()> {
        let existed = self
            .engine
            .update(|tx| tx.delete(ENTRIES, word.as_bytes()))
            .map_err(Error::StorageWrite)?;

        debug!(word, existed, "removed entry");
        Ok(())
    }
}
