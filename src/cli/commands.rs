use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::index_storage::save_index;
use crate::indexer::{BuildStats, build_index_from_dir};
use crate::utils::{IndexerConfig, init_tracing};

/// Only `--help` and `--version`; the data directory comes from the environment
#[derive(Parser)]
#[command(name = "idiom-index")]
#[command(version = "0.1.0")]
#[command(
    about = "Build the body-part index for the idiom NDJSON files",
    long_about = "Reads every *.ndjson file in the idioms data directory ($IDIOMS_DIR, \
                  default ./idioms) and writes <data-dir>/index.json, replacing any \
                  previous index."
)]
pub struct Cli {}

pub fn run() -> Result<()> {
    let _cli = Cli::parse();
    init_tracing();

    let config = IndexerConfig::from_env();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let (output_path, _) = runtime.block_on(rebuild_index(&config))?;
    println!("Index written to {}", output_path.display());

    Ok(())
}

/// Rebuild the index for `config.data_dir` from scratch and write the artifact.
///
/// Returns the artifact path and the build summary.
pub async fn rebuild_index(config: &IndexerConfig) -> Result<(PathBuf, BuildStats)> {
    let (index, stats) = build_index_from_dir(config.data_dir(), config.chunk_size).await?;

    let output_path = config.output_path();
    save_index(&output_path, &index).await?;

    Ok((output_path, stats))
}
