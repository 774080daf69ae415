//! Redb storage backend.
//!
//! Redb is a pure-Rust embedded database with atomic, isolated transactions.
//! A store lives in a single file, [`DATA_FILE_NAME`], inside the directory
//! passed to [`RedbEngine::open`]. Redb holds an exclusive file lock for as
//! long as the engine is open, so one directory serves one handle at a time.
//!
//! # Example
//!
//! ```ignore
//! use lexicon_storage::backends::redb::{RedbConfig, RedbEngine};
//!
//! let config = RedbConfig::new().cache_size(16 * 1024 * 1024);
//! let engine = RedbEngine::open_with_config("words.d", config)?;
//! ```
//!
//! For tests, [`RedbEngine::in_memory`] creates a store that vanishes on drop.

mod engine;
pub mod tables;
mod transaction;

pub use engine::{RedbConfig, RedbEngine, DATA_FILE_NAME};
pub use transaction::{RedbCursor, RedbTransaction, DEFAULT_BATCH_SIZE};
