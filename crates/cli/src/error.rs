//! CLI error types.

use std::path::PathBuf;

use shiftboard_core::schedule::ConfigError;
use thiserror::Error;

/// Result type alias for the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while loading input for the scheduler.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
