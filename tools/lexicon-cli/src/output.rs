//! Output formatting utilities.

use lexicon::entry::CREATED_AT_FORMAT;
use lexicon::Entry;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::error::Result;
use crate::OutputFormat;

/// One entry as a table row.
#[derive(Tabled)]
pub struct EntryRow {
    #[tabled(rename = "Word")]
    pub word: String,
    #[tabled(rename = "Definition")]
    pub definition: String,
    #[tabled(rename = "Created")]
    pub created: String,
}

impl From<&Entry> for EntryRow {
    fn from(entry: &Entry) -> Self {
        Self {
            word: entry.word.clone(),
            definition: entry.definition.clone(),
            created: entry.created_at.format(CREATED_AT_FORMAT).to_string(),
        }
    }
}

/// Format entries according to the specified format.
pub fn format_entries<'a>(
    entries: impl IntoIterator<Item = &'a Entry>,
    format: OutputFormat,
) -> Result<String> {
    let entries: Vec<&Entry> = entries.into_iter().collect();

    match format {
        OutputFormat::Table => Ok(format_as_table(&entries)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&entries)?),
        OutputFormat::Plain => {
            Ok(entries.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n"))
        }
    }
}

/// Format a single entry. JSON output is an object rather than an array.
pub fn format_entry(entry: &Entry, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(entry)?),
        _ => format_entries([entry], format),
    }
}

fn format_as_table(entries: &[&Entry]) -> String {
    if entries.is_empty() {
        return "(0 entries)".to_string();
    }

    let mut table = Table::new(entries.iter().map(|e| EntryRow::from(*e)));
    table.with(Style::rounded());

    format!("{table}\n({} entries)", entries.len())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn entry(word: &str, definition: &str) -> Entry {
        let at = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 1).unwrap();
        Entry::with_created_at(word, definition, at)
    }

    #[test]
    fn test_table_lists_every_entry() {
        let entries = [entry("Abricot", "fruit orange"), entry("Banane", "fruit jaune")];
        let out = format_entries(&entries, OutputFormat::Table).unwrap();

        assert!(out.contains("Word"));
        assert!(out.contains("Abricot"));
        assert!(out.contains("fruit jaune"));
        assert!(out.contains("Mar  7 09:05:01"));
        assert!(out.ends_with("(2 entries)"));
    }

    #[test]
    fn test_empty_table() {
        let out = format_entries(&[], OutputFormat::Table).unwrap();
        assert_eq!(out, "(0 entries)");
    }

    #[test]
    fn test_json_list_is_array() {
        let entries = [entry("Abricot", "fruit")];
        let out = format_entries(&entries, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["word"], "Abricot");
        assert_eq!(value[0]["definition"], "fruit");
        assert_eq!(value[0]["created_at"], "2024-03-07T09:05:01Z");
    }

    #[test]
    fn test_json_single_entry_is_object() {
        let out = format_entry(&entry("Cerise", "fruit rouge"), OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["word"], "Cerise");
    }

    #[test]
    fn test_plain_uses_entry_display() {
        let e = entry("Cerise", "fruit rouge");
        let out = format_entry(&e, OutputFormat::Plain).unwrap();
        assert_eq!(out, e.to_string());
    }
}
