pub mod commands;

pub use commands::{Cli, rebuild_index, run};
