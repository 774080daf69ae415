//! Add command implementation.

use std::path::Path;

use lexicon::Dictionary;

use crate::error::Result;
use crate::output::format_entry;
use crate::OutputFormat;

/// Run the add command - stores the word and prints the entry as written.
pub fn run(dir: &Path, word: &str, definition: &str, format: OutputFormat) -> Result<()> {
    let dict = Dictionary::open(dir)?;
    let entry = dict.add(word, definition)?;
    dict.close();

    println!("{}", format_entry(&entry, format)?);
    Ok(())
}
