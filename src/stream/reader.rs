//! Incremental NDJSON stream reader.

use std::io;

use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::source::ChunkSource;
use super::splitter::{LineSplitter, Utf8ChunkDecoder, is_blank};
use crate::models::{Record, SourcedRecord};
use crate::parsers::{DecodeError, decode_line};

/// Failure of the underlying chunk source.
///
/// Records delivered before the failure stay delivered.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("failed to read from {source_name}: {error}")]
    SourceRead {
        source_name: String,
        #[source]
        error: io::Error,
    },

    #[error("reader task for {source_name} did not complete: {message}")]
    TaskFailed { source_name: String, message: String },
}

/// Per-source counters reported when a stream completes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Non-blank lines handed to the decoder
    pub lines: usize,
    pub records: usize,
    pub malformed: usize,
}

/// Decodes one chunked NDJSON source into records, in line order.
///
/// Each reader owns its own line buffer, so several readers can run side by
/// side without sharing state.
pub struct StreamReader<S> {
    source: S,
    source_name: String,
    decoder: Utf8ChunkDecoder,
    splitter: LineSplitter,
    line_number: usize,
    stats: StreamStats,
    finished: bool,
}

impl<S: ChunkSource> StreamReader<S> {
    pub fn new(source: S, source_name: impl Into<String>) -> Self {
        Self {
            source,
            source_name: source_name.into(),
            decoder: Utf8ChunkDecoder::new(),
            splitter: LineSplitter::new(),
            line_number: 0,
            stats: StreamStats::default(),
            finished: false,
        }
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn stats(&self) -> StreamStats {
        self.stats
    }

    /// Pull one chunk and decode the lines it completes.
    ///
    /// Returns `(line_number, record)` pairs in source order. When the source
    /// is exhausted the pending suffix is flushed and decoded; after that
    /// batch, `None` is returned.
    pub async fn next_records(&mut self) -> Result<Option<Vec<(usize, Record)>>, StreamError> {
        if self.finished {
            return Ok(None);
        }

        let chunk = self.source.next_chunk().await.map_err(|error| StreamError::SourceRead {
            source_name: self.source_name.clone(),
            error,
        })?;

        let lines = match chunk {
            Some(bytes) => {
                let text = self.decoder.push(&bytes);
                self.splitter.push(&text)
            }
            None => {
                self.finished = true;
                let tail = self.decoder.finish();
                let mut lines = self.splitter.push(&tail);
                lines.extend(self.splitter.finish());
                lines
            }
        };

        let mut records = Vec::with_capacity(lines.len());
        for line in lines {
            self.line_number += 1;
            if is_blank(&line) {
                continue;
            }
            self.stats.lines += 1;

            match decode_line(&line, &self.source_name, self.line_number) {
                Ok(record) => {
                    self.stats.records += 1;
                    records.push((self.line_number, record));
                }
                Err(e) => {
                    self.stats.malformed += 1;
                    report_malformed(&e);
                }
            }
        }

        if self.finished {
            self.log_summary();
        }

        Ok(Some(records))
    }

    /// Drive the source to completion, calling `sink` once per decoded record
    pub async fn read_with<F>(mut self, mut sink: F) -> Result<StreamStats, StreamError>
    where
        F: FnMut(Record),
    {
        while let Some(batch) = self.next_records().await? {
            for (_, record) in batch {
                sink(record);
            }
        }
        Ok(self.stats)
    }

    /// Drive the source to completion, pushing records onto a channel.
    ///
    /// Stops pulling from the source as soon as the receiver is dropped.
    pub async fn read_into_channel(
        mut self,
        tx: mpsc::Sender<SourcedRecord>,
    ) -> Result<StreamStats, StreamError> {
        while let Some(batch) = self.next_records().await? {
            for (line_number, record) in batch {
                let item =
                    SourcedRecord { source: self.source_name.clone(), line_number, record };
                if tx.send(item).await.is_err() {
                    debug!("Receiver dropped, stopping read of {}", self.source_name);
                    return Ok(self.stats);
                }
            }
        }
        Ok(self.stats)
    }

    /// Drive the source to completion and collect every record
    pub async fn collect(self) -> Result<(Vec<Record>, StreamStats), StreamError> {
        let mut records = Vec::new();
        let stats = self.read_with(|record| records.push(record)).await?;
        Ok((records, stats))
    }

    fn log_summary(&self) {
        if self.stats.malformed > 0 {
            info!(
                "Parsed {}: {} records ({} skipped)",
                self.source_name, self.stats.records, self.stats.malformed
            );
        } else {
            debug!("Parsed {}: {} records", self.source_name, self.stats.records);
        }
    }
}

fn report_malformed(e: &DecodeError) {
    warn!(
        line = e.line_number,
        content = %e.line,
        "Skipping malformed line in {}: {}",
        e.source_name,
        e.message
    );
}
