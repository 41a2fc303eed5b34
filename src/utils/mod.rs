pub mod environment;
pub mod logging;

pub use environment::{DATA_DIR_ENV, IndexerConfig, get_data_dir};
pub use logging::init_tracing;
