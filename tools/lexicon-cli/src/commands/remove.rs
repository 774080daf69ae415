//! Remove command implementation.

use std::path::Path;

use lexicon::{normalize_word, Dictionary};

use crate::error::Result;

/// Run the remove command. Removing a word that is not stored is not an error.
pub fn run(dir: &Path, word: &str) -> Result<()> {
    let word = normalize_word(word);

    let dict = Dictionary::open(dir)?;
    dict.remove(&word)?;
    dict.close();

    println!("Removed: {word}");
    Ok(())
}
