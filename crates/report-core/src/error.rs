use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the session-report tool.
///
/// The aggregation pipeline itself is infallible: malformed fields degrade
/// to defaults and unmatched sessions are excluded locally. Only the I/O
/// seams around the pipeline can fail.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The input file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report could not be serialized to JSON.
    #[error("Failed to serialize report: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the report crates.
pub type Result<T> = std::result::Result<T, ReportError>;
