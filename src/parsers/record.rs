use serde_json::Value;
use thiserror::Error;

use crate::models::Record;

/// A single NDJSON line that could not be decoded into a [`Record`].
///
/// Never fatal: callers log it and continue with the next line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed line {line_number} in {source_name}: {message}")]
pub struct DecodeError {
    pub source_name: String,
    /// 1-based line number within the source
    pub line_number: usize,
    pub line: String,
    pub message: String,
}

impl DecodeError {
    fn new(source_name: &str, line_number: usize, line: &str, message: impl Into<String>) -> Self {
        Self {
            source_name: source_name.to_string(),
            line_number,
            line: line.to_string(),
            message: message.into(),
        }
    }
}

/// Decode one non-blank NDJSON line.
///
/// The line must hold a JSON object. Field contents are decoded leniently, so
/// apart from syntax errors the only rejected input is a JSON value of
/// another kind (array, string, number, ...).
pub fn decode_line(
    line: &str,
    source_name: &str,
    line_number: usize,
) -> Result<Record, DecodeError> {
    let value: Value = serde_json::from_str(line)
        .map_err(|e| DecodeError::new(source_name, line_number, line, e.to_string()))?;

    if !value.is_object() {
        return Err(DecodeError::new(source_name, line_number, line, "expected a JSON object"));
    }

    serde_json::from_value(value)
        .map_err(|e| DecodeError::new(source_name, line_number, line, e.to_string()))
}
