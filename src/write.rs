//! Output encoding and writing.

use crate::error::MergeError;
use crate::load::MessageTable;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Encode sorted entries as a single object literal: 4-space indentation,
/// all keys double-quoted, members in the given order, non-ASCII characters
/// emitted literally.
pub fn encode_table(entries: Vec<(String, Value)>) -> String {
    let table: MessageTable = entries.into_iter().collect();

    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    // A string-keyed map of JSON values cannot fail to serialize.
    table.serialize(&mut serializer).expect("serialize message table");

    String::from_utf8(out).expect("serializer emits UTF-8")
}

/// Encode and write the entries to `path`, overwriting any existing file.
/// The output file is only opened once every prior stage has succeeded.
pub fn write_output(path: &Path, entries: Vec<(String, Value)>) -> Result<(), MergeError> {
    let text = encode_table(entries);
    fs::write(path, &text).map_err(|e| MergeError::file_access(path, e))?;
    debug!(path = %path.display(), bytes = text.len(), "wrote output");
    Ok(())
}
