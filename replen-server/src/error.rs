//! Error type for loading inputs and writing outputs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: bad snapshot row: {source}")]
    SnapshotRow {
        path: String,
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("invalid settings in {path}: {source}")]
    Settings {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("invalid timestamp {value:?}: expected RFC 3339 or YYYY-MM-DD")]
    Timestamp { value: String },

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for loader and export operations.
pub type CliResult<T> = Result<T, CliError>;
