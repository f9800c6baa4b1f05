//! Merging and sorting of message tables.

use crate::error::MergeError;
use crate::key::parse_message_key;
use crate::load::MessageTable;
use serde_json::Value;
use tracing::debug;

/// Union the tables in the order given; on duplicate keys the value from the
/// later table silently replaces the earlier one. An empty sequence yields an
/// empty table.
pub fn merge_tables(tables: Vec<MessageTable>) -> MessageTable {
    let mut merged = MessageTable::new();
    for table in tables {
        for (key, value) in table {
            merged.insert(key, value);
        }
    }
    debug!(entries = merged.len(), "merged tables");
    merged
}

/// Turn the merged table into a sequence of pairs sorted ascending by the
/// numeric value of each key.
///
/// Every key is parsed before the sort, so a `KeyFormat` error aborts the run
/// before any output is produced. Keys with equal numeric values (`"16"` and
/// `"0x10"`) keep their encounter order; the stable sort preserves it.
pub fn sort_entries(table: MessageTable) -> Result<Vec<(String, Value)>, MergeError> {
    let mut entries = Vec::with_capacity(table.len());
    for (key, value) in table {
        let numeric = parse_message_key(&key)?;
        entries.push((numeric, key, value));
    }
    entries.sort_by_key(|(numeric, _, _)| *numeric);
    Ok(entries.into_iter().map(|(_, key, value)| (key, value)).collect())
}
