//! Incremental NDJSON streaming
//!
//! Raw chunks flow through a [`Utf8ChunkDecoder`] and a [`LineSplitter`] into the
//! record decoder. A [`StreamReader`] drives one [`ChunkSource`] and hands each
//! decoded record to a sink closure or a channel; [`load_sources`] runs several
//! readers concurrently into a caller-owned [`RecordStore`].

pub mod reader;
pub mod source;
pub mod splitter;
pub mod store;

pub use reader::{StreamError, StreamReader, StreamStats};
pub use source::{BoxedSource, ChunkSource, MemorySource, ReaderSource, boxed};
pub use splitter::{LineSplitter, Utf8ChunkDecoder};
pub use store::{RecordStore, SourceOutcome, load_sources};
