//! Artifact persistence: load/save with atomic writes

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::indexer::InvertedIndex;

pub const INDEX_FILENAME: &str = "index.json";

/// Location of the index artifact for a data directory
pub fn artifact_path(data_dir: &Path) -> PathBuf {
    data_dir.join(INDEX_FILENAME)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Render the index the way it is stored: two-space pretty JSON, no trailing newline
pub fn render_index(index: &InvertedIndex) -> Result<String> {
    serde_json::to_string_pretty(index).context("Failed to serialize index")
}

/// Write the index to `path`, fully replacing any previous artifact.
///
/// The JSON is written to a sibling temp file and renamed over `path`, so a
/// reader sees either the old artifact or the complete new one.
pub async fn save_index(path: &Path, index: &InvertedIndex) -> Result<()> {
    let json = render_index(index)?;
    let replacing = tokio::fs::try_exists(path).await.unwrap_or(false);

    let temp = temp_path(path);
    if let Err(e) = tokio::fs::write(&temp, json).await {
        // Nothing was renamed, the previous artifact is untouched
        let _ = tokio::fs::remove_file(&temp).await;
        return Err(e).context(format!("Failed to write index temp file: {}", temp.display()));
    }
    if let Err(e) = tokio::fs::rename(&temp, path).await {
        let _ = tokio::fs::remove_file(&temp).await;
        return Err(e).context(format!("Failed to replace index artifact: {}", path.display()));
    }

    if replacing {
        info!("Replaced existing {}", path.display());
    }
    Ok(())
}

/// Load a previously written artifact.
/// Returns None if it is missing or cannot be parsed (caller should rebuild)
pub fn load_index(path: &Path) -> Result<Option<InvertedIndex>> {
    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read index artifact: {}", path.display()))?;
    match serde_json::from_str(&json) {
        Ok(index) => Ok(Some(index)),
        Err(e) => {
            warn!("Ignoring unreadable index artifact {}: {}", path.display(), e);
            Ok(None)
        }
    }
}
