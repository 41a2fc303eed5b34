//! Data models for idiom records.
//!
//! - [`Record`] - One idiom entry decoded from an NDJSON line
//! - [`SourcedRecord`] - A record tagged with its source name and line number
//!
//! Records use serde for JSON deserialization with lenient field
//! deserializers from the `parsers::deserializers` module.

pub mod record;

pub use record::{Record, SourcedRecord};
