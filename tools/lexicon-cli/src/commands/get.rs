//! Get command implementation.

use std::path::Path;

use lexicon::{normalize_word, Dictionary};

use crate::error::Result;
use crate::output::format_entry;
use crate::OutputFormat;

/// Run the get command.
///
/// The typed word is normalized so `banane` finds the entry added as `Banane`.
pub fn run(dir: &Path, word: &str, format: OutputFormat) -> Result<()> {
    let dict = Dictionary::open(dir)?;
    let entry = dict.get(&normalize_word(word))?;
    dict.close();

    println!("{}", format_entry(&entry, format)?);
    Ok(())
}
