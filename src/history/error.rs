use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Failed to determine data directory")]
    DataDirResolution,

    #[error("Failed to read history file '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to write history file '{0}'")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse history file '{0}'")]
    Parse(PathBuf, #[source] serde_json::Error),

    #[error("Failed to encode history")]
    Encode(#[source] serde_json::Error),

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}
