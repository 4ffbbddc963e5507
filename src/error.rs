//! Error types for the generation pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading input, resolving configuration, or writing pages.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse options file {}", path.display())]
    ParseInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to load config {}", path.display())]
    LoadConfig {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to write {}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown format: {0}. Use markdown or json")]
    UnknownFormat(String),

    #[error("failed to serialize page {page}")]
    Serialize {
        page: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
