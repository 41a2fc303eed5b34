//! Caller-owned record accumulator and concurrent multi-source loading.

use indexmap::IndexMap;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::reader::{StreamError, StreamReader, StreamStats};
use super::source::ChunkSource;
use crate::models::{Record, SourcedRecord};

/// Capacity of the channel shared by concurrent readers
pub const CHANNEL_CAPACITY: usize = 64;

/// Decoded records grouped by source name.
///
/// Sources keep the order they were registered in; records keep their line
/// order within a source.
#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    sources: IndexMap<String, Vec<SourcedRecord>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source so it appears even if it yields no records
    pub fn register(&mut self, source: &str) {
        self.sources.entry(source.to_string()).or_default();
    }

    pub fn push(&mut self, item: SourcedRecord) {
        self.sources.entry(item.source.clone()).or_default().push(item);
    }

    pub fn source_names(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    /// Records of one source in line order
    pub fn records_for(&self, source: &str) -> impl Iterator<Item = &Record> {
        self.sources.get(source).into_iter().flatten().map(|item| &item.record)
    }

    /// All records, source by source
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.sources.values().flatten().map(|item| &item.record)
    }

    pub fn len(&self) -> usize {
        self.sources.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of reading one source during [`load_sources`]
#[derive(Debug)]
pub struct SourceOutcome {
    pub source: String,
    pub result: Result<StreamStats, StreamError>,
}

/// Read several sources concurrently into `store`.
///
/// Every source gets its own reader task producing into a shared channel;
/// this function is the only consumer, so appends to the store never race.
/// Records from different sources interleave in arrival order, but each
/// source keeps its own line order. A failing source does not discard what
/// the other sources produced. Outcomes are returned in input order.
///
/// Must be called from within a tokio runtime.
pub async fn load_sources<I, S>(sources: I, store: &mut RecordStore) -> Vec<SourceOutcome>
where
    I: IntoIterator<Item = (String, S)>,
    S: ChunkSource + 'static,
{
    let (tx, mut rx) = mpsc::channel(CHANNEL_CAPACITY);
    let mut handles = Vec::new();

    for (name, source) in sources {
        store.register(&name);
        let reader = StreamReader::new(source, name.clone());
        handles.push((name, tokio::spawn(reader.read_into_channel(tx.clone()))));
    }
    drop(tx);

    while let Some(item) = rx.recv().await {
        store.push(item);
    }

    let mut outcomes = Vec::with_capacity(handles.len());
    for (source, handle) in handles {
        let result = match handle.await {
            Ok(result) => result,
            Err(e) => Err(StreamError::TaskFailed {
                source_name: source.clone(),
                message: e.to_string(),
            }),
        };
        match &result {
            Ok(stats) => debug!("Loaded {} records from {}", stats.records, source),
            Err(e) => warn!("Failed to load {}: {}", source, e),
        }
        outcomes.push(SourceOutcome { source, result });
    }
    outcomes
}
