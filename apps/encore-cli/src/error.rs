//! Error types for the command-line host.

use std::path::PathBuf;

use encore_core::CoreError;

use crate::config::ConfigError;

/// Everything that can stop a billing run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Billing failed: {0}")]
    Billing(#[from] CoreError),

    #[error("Failed to serialize statements: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
