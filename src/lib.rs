//! Idiom Index - incremental NDJSON decoding and body-part indexing
//!
//! This library turns newline-delimited JSON idiom files into records and an
//! inverted index. It supports:
//!
//! - Decoding NDJSON streams incrementally, chunk by chunk, across arbitrary
//!   chunk boundaries
//! - Skipping and reporting malformed lines without aborting the stream
//! - Reading several sources concurrently into a caller-owned record store
//! - Building the `body part -> [record id]` index and persisting it atomically
//!
//! # Example
//!
//! ```no_run
//! use idiom_index::stream::{MemorySource, StreamReader};
//!
//! # async fn demo() -> Result<(), idiom_index::stream::StreamError> {
//! let source = MemorySource::new([r#"{"id":"a1","bo"#, "dy_parts\":[\"hand\"]}\n"]);
//! let stats = StreamReader::new(source, "en.ndjson")
//!     .read_with(|record| println!("{:?}", record.id))
//!     .await?;
//! assert_eq!(stats.records, 1);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod index_storage;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod stream;
pub mod utils;

// Re-export commonly used types
pub use indexer::{InvertedIndex, build_index_from_dir};
pub use models::{Record, SourcedRecord};
pub use parsers::{DecodeError, decode_line};
pub use stream::{RecordStore, StreamReader, load_sources};
