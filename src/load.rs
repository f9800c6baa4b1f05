//! Input loading: read a JSON5 file into a message table.

use crate::error::MergeError;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::debug;

/// A top-level message object. `preserve_order` keeps insertion order as the
/// iteration order, which the writer relies on.
pub type MessageTable = Map<String, Value>;

/// Read `path` as UTF-8 text and decode it as a JSON5 object.
///
/// The file is fully read and closed before decoding starts. Fails with
/// `FileAccess` if the path is unreadable, or `Decode` if the text is not
/// valid JSON5 or its top-level value is not an object.
pub fn load_table(path: &Path) -> Result<MessageTable, MergeError> {
    let text = fs::read_to_string(path).map_err(|e| MergeError::file_access(path, e))?;

    let value: Value =
        json5::from_str(&text).map_err(|e| MergeError::decode(path, e.to_string()))?;

    match value {
        Value::Object(table) => {
            debug!(path = %path.display(), entries = table.len(), "loaded input");
            Ok(table)
        }
        other => Err(MergeError::decode(
            path,
            format!("top-level value is not an object (got {})", value_kind(&other)),
        )),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
