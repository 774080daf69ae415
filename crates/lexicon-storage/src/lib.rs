//! Lexicon Storage
//!
//! This crate provides the storage engine abstraction and the redb backend
//! that hold a Lexicon dictionary on disk.
//!
//! # Overview
//!
//! The storage layer exposes a transactional, ordered, byte-keyed store.
//! Callers either drive transactions explicitly with
//! [`StorageEngine::begin_read`]/[`StorageEngine::begin_write`], or hand a
//! closure to [`StorageEngine::view`]/[`StorageEngine::update`] which commit on
//! success and discard on failure.
//!
//! # Core Traits
//!
//! - [`StorageEngine`] - The main entry point for storage operations
//! - [`Transaction`] - Atomic transaction support with read/write operations
//! - [`Cursor`] - Ordered forward iteration over key-value pairs
//!
//! # Example
//!
//! ```ignore
//! use lexicon_storage::{StorageEngine, Transaction};
//! use lexicon_storage::backends::RedbEngine;
//!
//! // Open or create a store rooted at a directory
//! let engine = RedbEngine::open("words.d")?;
//!
//! let mut tx = engine.begin_write()?;
//! tx.put("words", b"Banane", b"fruit")?;
//! tx.commit()?;
//!
//! let tx = engine.begin_read()?;
//! assert_eq!(tx.get("words", b"Banane")?, Some(b"fruit".to_vec()));
//! ```

pub mod backends;
pub mod engine;

pub use engine::{
    Cursor, CursorResult, KeyValue, StorageEngine, StorageError, StorageResult, Transaction,
};
