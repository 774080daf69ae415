//! The result of listing a dictionary.

use std::collections::HashMap;

use crate::entry::Entry;

/// Every stored entry, with its words in ascending order.
///
/// The mapping is keyed by each entry's decoded `word` field, not by the key
/// it was stored under. The two only differ for data written under a key that
/// was not its normalized word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    words: Vec<String>,
    entries: HashMap<String, Entry>,
}

impl Listing {
    /// Build a listing from entries keyed by word.
    pub fn from_entries(entries: HashMap<String, Entry>) -> Self {
        let words = sorted_words(&entries);
        Self { words, entries }
    }

    /// Words in ascending byte-wise order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Entries keyed by word.
    pub const fn entries(&self) -> &HashMap<String, Entry> {
        &self.entries
    }

    /// Look up one entry by its word.
    pub fn get(&self, word: &str) -> Option<&Entry> {
        self.entries.get(word)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the dictionary held no entries.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over entries in word order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.words.iter().filter_map(|word| self.entries.get(word))
    }

    /// Split into the sorted words and the word-to-entry mapping.
    pub fn into_parts(self) -> (Vec<String>, HashMap<String, Entry>) {
        (self.words, self.entries)
    }
}

impl<'a> IntoIterator for &'a Listing {
    type Item = &'a Entry;
    type IntoIter = Box<dyn Iterator<Item = &'a Entry> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Collect exactly one word per entry, then sort.
fn sorted_words(entries: &HashMap<String, Entry>) -> Vec<String> {
    let mut words = Vec::with_capacity(entries.len());
    words.extend(entries.keys().cloned());
    words.sort_unstable();
    words
}
