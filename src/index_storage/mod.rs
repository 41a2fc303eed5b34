//! Index artifact storage
//!
//! The index is persisted as a single pretty-printed JSON object at
//! `<data-dir>/index.json`. Writes go through a temp file and a rename so a
//! previous artifact is replaced as a whole, never merged or left half written.

pub mod persistence;

pub use persistence::{INDEX_FILENAME, artifact_path, load_index, render_index, save_index};
