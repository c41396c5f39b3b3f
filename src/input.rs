use std::io::Read;

use serde_json::Value;

use crate::error::CleanError;

/// One headword and the raw markup of its dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub headword: String,
    pub html: String,
}

/// Read the whole dump before anything is parsed.
pub fn read_dictionary<R: Read>(mut reader: R) -> Result<Vec<RawEntry>, CleanError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(CleanError::Read)?;
    parse_dictionary(&bytes)
}

/// Decode the dump and check it is an object of strings.
///
/// Entries come back in document order. A headword repeated verbatim keeps
/// its first position and its last value.
pub fn parse_dictionary(bytes: &[u8]) -> Result<Vec<RawEntry>, CleanError> {
    let value: Value = serde_json::from_slice(bytes).map_err(CleanError::Json)?;
    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(CleanError::NotAnObject {
                found: json_kind(&other),
            })
        }
    };

    map.into_iter()
        .map(|(headword, value)| match value {
            Value::String(html) => Ok(RawEntry { headword, html }),
            other => Err(CleanError::NotAString {
                headword,
                found: json_kind(&other),
            }),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
