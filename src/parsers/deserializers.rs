use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Converts a scalar JSON value to the text it would have as an object key.
/// Returns `None` for null, objects and arrays.
fn scalar_to_key(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Accepts a string, or `None` for any other JSON type
pub fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Accepts a string or a number as a record identifier
pub fn deserialize_lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        _ => Ok(None),
    }
}

/// Accepts a list of scalars; anything that is not a list becomes `None`.
///
/// Strings are kept as-is, numbers and booleans are coerced to their JSON
/// text, nested values and nulls are dropped.
pub fn deserialize_lenient_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(items.into_iter().filter_map(scalar_to_key).collect())),
        _ => Ok(None),
    }
}

/// Same coercions as [`deserialize_lenient_list`], with a missing or malformed list read as empty
pub fn deserialize_lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_lenient_list(deserializer)?.unwrap_or_default())
}
