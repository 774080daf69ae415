//! Storage backend implementations.
//!
//! # Available Backends
//!
//! - [`redb`] - Pure-Rust embedded database with atomic transactions

pub mod redb;

pub use self::redb::{RedbConfig, RedbCursor, RedbEngine, RedbTransaction};
