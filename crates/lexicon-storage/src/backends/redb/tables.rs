//! Redb table definitions.
//!
//! Each logical table maps to a redb table of the same name, keyed and valued
//! by raw bytes. Keys are stored as given, so redb's byte order is the
//! iteration order of a logical table.

use redb::TableDefinition;

/// Byte-keyed, byte-valued redb table.
pub type ByteTable<'a> = TableDefinition<'a, &'static [u8], &'static [u8]>;

/// Definition of the redb table backing the logical table `name`.
pub const fn definition(name: &str) -> ByteTable<'_> {
    TableDefinition::new(name)
}

/// Well-known logical table names.
pub mod names {
    /// Dictionary entries, keyed by normalized word.
    pub const ENTRIES: &str = "entries";
}
