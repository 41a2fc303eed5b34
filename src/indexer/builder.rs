//! Inverted index from body part to record ids.
//!
//! # Error Handling Strategy
//!
//! Index building never fails on record content:
//!
//! - **Malformed lines**: Already reported and dropped by the stream reader; they
//!   never reach the builder.
//! - **Shape mismatches**: Records without a list-shaped `body_parts` or without a
//!   usable `id` are silently excluded.
//! - **I/O failures**: A data directory that cannot be listed, or a source file that
//!   cannot be opened or read, is propagated as an error with context.

use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tokio::fs::File;
use tracing::{debug, info};

use crate::indexer::discovery::discover_sources;
use crate::models::Record;
use crate::stream::{ReaderSource, StreamReader};

/// Mapping from body part to the ids of the records that declare it.
///
/// Keys keep first-encountered order and ids keep processing order, so the
/// same input in the same order always serializes to the same bytes. Ids are
/// never deduplicated: a record processed twice contributes twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvertedIndex {
    buckets: IndexMap<String, Vec<String>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a closed sequence of records in encounter order
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut index = Self::new();
        for record in records {
            index.add(record);
        }
        index
    }

    /// Fold one record into the index.
    ///
    /// Returns `false` when the record has no usable `id` or `body_parts`.
    pub fn add(&mut self, record: &Record) -> bool {
        let Some((id, parts)) = record.index_keys() else {
            return false;
        };
        for part in parts {
            self.buckets.entry(part.clone()).or_default().push(id.to_string());
        }
        true
    }

    /// Ids recorded under `part`, in processing order
    pub fn bucket(&self, part: &str) -> Option<&[String]> {
        self.buckets.get(part).map(Vec::as_slice)
    }

    /// Body parts in first-encountered order
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.buckets.iter().map(|(part, ids)| (part.as_str(), ids.as_slice()))
    }

    /// Number of distinct body parts
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Summary of an indexing pass over a data directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub files: usize,
    pub records: usize,
    pub indexed: usize,
    pub malformed: usize,
}

/// Index every `*.ndjson` file in `data_dir`.
///
/// Files are processed one after another in file-name order and each file in
/// line order, which fixes the order of keys and ids in the result.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed or a source file cannot
/// be opened or read. Malformed lines are logged and skipped.
pub async fn build_index_from_dir(
    data_dir: &Path,
    chunk_size: usize,
) -> Result<(InvertedIndex, BuildStats)> {
    let files = discover_sources(data_dir)?;
    let mut index = InvertedIndex::new();
    let mut stats = BuildStats::default();

    for path in &files {
        let file_name =
            path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        let file = File::open(path)
            .await
            .with_context(|| format!("Failed to open source file: {}", path.display()))?;

        debug!("Indexing {}", path.display());
        let source = ReaderSource::with_chunk_size(file, chunk_size);
        let file_stats = StreamReader::new(source, file_name)
            .read_with(|record| {
                if index.add(&record) {
                    stats.indexed += 1;
                }
            })
            .await
            .with_context(|| format!("Failed to read source file: {}", path.display()))?;

        stats.files += 1;
        stats.records += file_stats.records;
        stats.malformed += file_stats.malformed;
    }

    info!(
        "Indexed {} body parts from {} records ({} files, {} malformed lines)",
        index.len(),
        stats.indexed,
        stats.files,
        stats.malformed
    );

    Ok((index, stats))
}
