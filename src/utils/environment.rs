use std::env;
use std::path::{Path, PathBuf};

use crate::index_storage::INDEX_FILENAME;
use crate::stream::source::DEFAULT_CHUNK_SIZE;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "IDIOMS_DIR";

/// Data directory used when no override is set, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "idioms";

/// Settings for one indexing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexerConfig {
    pub data_dir: PathBuf,
    /// Artifact file name, placed inside `data_dir`
    pub index_file_name: String,
    pub chunk_size: usize,
}

impl IndexerConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            index_file_name: INDEX_FILENAME.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Resolve the configuration from the process environment
    pub fn from_env() -> Self {
        Self::new(get_data_dir())
    }

    /// Where the index artifact is written, always inside the data directory
    pub fn output_path(&self) -> PathBuf {
        self.data_dir.join(&self.index_file_name)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// Get the idioms data directory (`$IDIOMS_DIR`, or `./idioms`)
pub fn get_data_dir() -> PathBuf {
    resolve_data_dir(env::var(DATA_DIR_ENV).ok().as_deref())
}

/// Internal helper with the override passed explicitly (for testing)
pub(crate) fn resolve_data_dir(override_dir: Option<&str>) -> PathBuf {
    match override_dir {
        Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(DEFAULT_DATA_DIR),
    }
}
