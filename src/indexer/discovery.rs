use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use walkdir::WalkDir;

/// File extension of idiom source files
pub const SOURCE_EXTENSION: &str = "ndjson";

/// List the `*.ndjson` files directly inside `data_dir`, sorted by file name.
///
/// Subdirectories are not searched. The sort makes repeated runs over the
/// same directory process files in the same order.
///
/// # Errors
///
/// Returns an error if `data_dir` is missing, is not a directory, or cannot
/// be read.
pub fn discover_sources(data_dir: &Path) -> Result<Vec<PathBuf>> {
    if !data_dir.is_dir() {
        bail!("Data directory not found: {}", data_dir.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(data_dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| {
            format!("Failed to read data directory: {}", data_dir.display())
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}
