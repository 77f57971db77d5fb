// src/error.rs
use thiserror::Error;

/// Everything that can stop a generation run. None of these are retried;
/// the binaries surface them through the exit status.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("byte value {0} is outside 0..=255")]
    Domain(u32),

    #[error("malformed table text: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to (de)serialize name map JSON: {0}")]
    Json(#[from] serde_json::Error),
}
