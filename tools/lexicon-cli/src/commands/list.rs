//! List command implementation.

use std::path::Path;

use lexicon::Dictionary;

use crate::error::Result;
use crate::output::format_entries;
use crate::OutputFormat;

/// Run the list command - prints every entry in word order.
pub fn run(dir: &Path, format: OutputFormat) -> Result<()> {
    let dict = Dictionary::open(dir)?;
    let listing = dict.list()?;
    dict.close();

    let out = format_entries(&listing, format)?;
    if !out.is_empty() {
        println!("{out}");
    }
    Ok(())
}
