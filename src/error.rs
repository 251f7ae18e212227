/*
 * Error Module
 *
 * Errors only come from the edges of the program: reading and validating
 * configuration. The simulation core clamps degenerate inputs instead of
 * failing.
 */

use std::path::PathBuf;

use thiserror::Error;

// Errors that can occur while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}
