//! The dictionary entry.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `strftime` pattern used when rendering [`Entry::created_at`].
pub const CREATED_AT_FORMAT: &str = "%b %e %H:%M:%S";

/// One stored word with its definition.
///
/// `word` is the normalized form and doubles as the storage key. `created_at`
/// is captured when the entry is added and never changes afterwards; adding
/// the same word again replaces the whole entry, timestamp included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The normalized word.
    pub word: String,
    /// Free-form definition text.
    pub definition: String,
    /// When the entry was added.
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// Create an entry stamped with the current time.
    ///
    /// `word` is stored as given; callers normalize it first.
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self::with_created_at(word, definition, Utc::now())
    }

    /// Create an entry with an explicit creation time.
    pub fn with_created_at(
        word: impl Into<String>,
        definition: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self { word: word.into(), definition: definition.into(), created_at }
    }
}

impl fmt::Display for Entry {
    /// Renders `word | definition | created` as fixed-width columns.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let created = self.created_at.format(CREATED_AT_FORMAT).to_string();
        write!(f, "{:<10}\t{:<50}{:<6}", self.word, self.definition, created)
    }
}
