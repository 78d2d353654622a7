//! Reading grid specs from their JSON list form.
//!
//! ```json
//! ["x-x x", "x x-x", ["distribute", 3]]
//! ```

use gridspec_core::{GridSpec, RowEntry, SpecError};
use serde_json::Value;

const DISTRIBUTE: &str = "distribute";

/// Parse a grid spec from JSON source text.
pub fn spec_from_str(source: &str) -> Result<GridSpec, SpecError> {
    let value: Value = serde_json::from_str(source).map_err(|e| SpecError::InvalidJson {
        message: e.to_string(),
    })?;
    spec_from_json(&value)
}

/// Build a grid spec from a JSON value.
///
/// The value must be an array. Each element is either a row string or a
/// `["distribute", n]` pair with a positive integer `n`.
pub fn spec_from_json(value: &Value) -> Result<GridSpec, SpecError> {
    let entries = value.as_array().ok_or_else(|| SpecError::InvalidSpecType {
        found: kind(value).to_string(),
    })?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| row_from_json(i + 1, entry))
        .collect()
}

fn row_from_json(row: usize, entry: &Value) -> Result<RowEntry, SpecError> {
    match entry {
        Value::String(text) => Ok(RowEntry::Ascii(text.clone())),
        Value::Array(items) => match items.as_slice() {
            [Value::String(keyword), count] if keyword == DISTRIBUTE => {
                distribute_count(count).map(RowEntry::Distribute).ok_or_else(|| {
                    SpecError::MalformedSpec {
                        row,
                        reason: format!(
                            "distribute count must be a positive integer, found {count}"
                        ),
                    }
                })
            }
            _ => Err(malformed(row, entry)),
        },
        _ => Err(malformed(row, entry)),
    }
}

fn distribute_count(count: &Value) -> Option<u32> {
    count
        .as_u64()
        .filter(|&n| n > 0)
        .and_then(|n| u32::try_from(n).ok())
}

fn malformed(row: usize, entry: &Value) -> SpecError {
    SpecError::MalformedSpec {
        row,
        reason: format!(
            "expected a row string or [\"{DISTRIBUTE}\", n], found {}",
            kind(entry)
        ),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
