use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One idiom entry decoded from an NDJSON line.
///
/// Every attribute is optional at decode time. Fields with an unexpected JSON
/// type decode as absent instead of failing the whole line, so a record that
/// cannot be indexed is still usable for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient_id")]
    pub id: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_lenient_string"
    )]
    pub idiom: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_lenient_string"
    )]
    pub language: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_lenient_string"
    )]
    pub meaning: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::parsers::deserializers::deserialize_lenient_string"
    )]
    pub romanization: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::parsers::deserializers::deserialize_lenient_string"
    )]
    pub literal: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_lenient_tags"
    )]
    pub tags: Vec<String>,
    /// `None` when the attribute is missing or not a list.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::parsers::deserializers::deserialize_lenient_list"
    )]
    pub body_parts: Option<Vec<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::parsers::deserializers::deserialize_lenient_list"
    )]
    pub affects: Option<Vec<String>>,
    /// Attributes this crate does not model, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    /// Returns the id and body parts when the record can be indexed
    pub fn index_keys(&self) -> Option<(&str, &[String])> {
        let id = self.id.as_deref()?;
        let parts = self.body_parts.as_deref()?;
        Some((id, parts))
    }
}

/// A record tagged with the source it was read from
#[derive(Debug, Clone, PartialEq)]
pub struct SourcedRecord {
    pub source: String,
    pub line_number: usize,
    pub record: Record,
}
