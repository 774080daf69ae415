//! Open command implementation.

use std::path::Path;

use lexicon::Dictionary;
use lexicon_storage::backends::redb::DATA_FILE_NAME;

use crate::error::Result;

/// Run the open command - validates that a dictionary can be opened/created in the directory.
pub fn run(dir: &Path) -> Result<()> {
    let existed = dir.join(DATA_FILE_NAME).exists();

    Dictionary::open(dir)?.close();

    if existed {
        println!("Opened dictionary: {}", dir.display());
    } else {
        println!("Created dictionary: {}", dir.display());
    }

    Ok(())
}
