//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for creating test idiom data directories
pub struct DataDirBuilder {
    temp_dir: TempDir,
}

impl DataDirBuilder {
    /// Create a new builder with an empty data directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the data directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a source file with the given raw content
    pub fn with_file(self, name: &str, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(name), content).expect("Failed to write source file");
        self
    }

    /// Add an NDJSON source file built from records, one per line
    pub fn with_records(self, name: &str, records: &[RecordBuilder]) -> Self {
        let content = records.iter().map(|r| r.to_json()).collect::<Vec<_>>().join("\n");
        self.with_file(name, &content)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for DataDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for idiom NDJSON lines
pub struct RecordBuilder {
    id: String,
    idiom: String,
    language: String,
    body_parts: Option<Vec<String>>,
}

impl RecordBuilder {
    /// Create a new record with default values and no body parts
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            idiom: "Test idiom".to_string(),
            language: "en".to_string(),
            body_parts: None,
        }
    }

    /// Set the idiom text
    pub fn idiom(mut self, idiom: &str) -> Self {
        self.idiom = idiom.to_string();
        self
    }

    /// Set the language tag
    pub fn language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    /// Set the body parts
    pub fn body_parts(mut self, parts: &[&str]) -> Self {
        self.body_parts = Some(parts.iter().map(|p| p.to_string()).collect());
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        let body_parts_field = self
            .body_parts
            .as_ref()
            .map(|parts| {
                let quoted: Vec<_> = parts.iter().map(|p| format!(r#""{}""#, p)).collect();
                format!(r#","body_parts":[{}]"#, quoted.join(","))
            })
            .unwrap_or_default();

        format!(
            r#"{{"id":"{}","idiom":"{}","language":"{}","meaning":"test meaning","tags":["test"]{}}}"#,
            self.id, self.idiom, self.language, body_parts_field
        )
    }
}

/// Path of the index artifact inside a data directory
pub fn index_path(dir: &Path) -> PathBuf {
    dir.join("index.json")
}

/// Read and parse the index artifact
pub fn read_index(dir: &Path) -> serde_json::Value {
    let json = fs::read_to_string(index_path(dir)).expect("Failed to read index.json");
    serde_json::from_str(&json).expect("index.json is not valid JSON")
}

/// Helper to create a realistic data directory with two languages
pub fn realistic_data_dir() -> TempDir {
    DataDirBuilder::new()
        .with_records("en.ndjson", &[
            RecordBuilder::new("en-001").idiom("cost an arm and a leg").body_parts(&["arm", "leg"]),
            RecordBuilder::new("en-002").idiom("keep an eye on").body_parts(&["eye"]),
            RecordBuilder::new("en-003").idiom("break the ice"),
        ])
        .with_records("ja.ndjson", &[
            RecordBuilder::new("ja-001")
                .idiom("目から鱗が落ちる")
                .language("ja")
                .body_parts(&["eye"]),
            RecordBuilder::new("ja-002")
                .idiom("足を洗う")
                .language("ja")
                .body_parts(&["leg", "foot"]),
        ])
        .build()
}
