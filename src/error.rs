//! Error types
//!
//! `StorageError` covers the record files themselves; `ApiError` is what the
//! repository, command services and CLI return to their callers.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing a record collection file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record file {path}: {reason}")]
    MalformedFile { path: PathBuf, reason: String },

    #[error("Malformed {kind} record: {reason}")]
    MalformedRecord { kind: &'static str, reason: String },

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

/// Errors surfaced by repository operations and the CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{kind} not found: {key}")]
    NotFound { kind: &'static str, key: String },

    #[error("Invalid {kind} update: {reason}")]
    InvalidUpdate { kind: &'static str, reason: String },
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
