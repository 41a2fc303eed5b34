//! Offline inverted-index building
//!
//! The indexer walks the data directory, streams each `*.ndjson` file through
//! the incremental reader and folds every indexable record into an
//! [`InvertedIndex`]. Line-level problems are handled by the stream reader
//! (logged and skipped); only directory or file I/O failures stop a build.

pub mod builder;
pub mod discovery;

pub use builder::{BuildStats, InvertedIndex, build_index_from_dir};
pub use discovery::discover_sources;
