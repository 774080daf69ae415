//! # Lexicon
//!
//! A persistent word/definition store built on an embedded, transactional
//! key-value engine.
//!
//! ## Quick Start
//!
//! ```ignore
//! use lexicon::Dictionary;
//!
//! let dict = Dictionary::open("words.d")?;
//!
//! dict.add("banane", "fruit")?;
//! dict.add("abricot", "fruit")?;
//!
//! let listing = dict.list()?;
//! assert_eq!(listing.words(), ["Abricot", "Banane"]);
//!
//! dict.remove("Banane")?;
//! dict.close();
//! ```
//!
//! ## Modules
//!
//! - [`dictionary`] - The [`Dictionary`] handle with add/get/list/remove
//! - [`entry`] - The stored [`Entry`] record and its display form
//! - [`encoding`] - Versioned binary encoding of entries
//! - [`normalize`] - Title-casing applied to words before they become keys
//! - [`listing`] - Sorted result of [`Dictionary::list`]
//! - [`config`] - [`Config`] and [`DictionaryBuilder`]
//! - [`error`] - The [`enum@Error`] type

pub mod config;
pub mod dictionary;
pub mod encoding;
pub mod entry;
pub mod error;
pub mod listing;
pub mod normalize;

pub use config::{Config, DictionaryBuilder};
pub use dictionary::Dictionary;
pub use encoding::{Decoder, Encoder, ENTRY_FORMAT_VERSION};
pub use entry::Entry;
pub use error::{Error, Result};
pub use listing::Listing;
pub use normalize::normalize_word;

pub use lexicon_storage::StorageError;
