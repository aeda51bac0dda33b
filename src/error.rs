// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Error types for autocatalog

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for autocatalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// autocatalog error types
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// The path is missing or is not a regular file. Fails a single item.
    #[error("Cannot access {}: {reason}", path.display())]
    FileAccess { path: PathBuf, reason: String },

    /// Corrupt or unreadable container. Absorbed by the inference engine.
    #[error("Archive error: {0}")]
    ArchiveRead(String),

    /// A concurrent execution unit could not run an item to completion.
    #[error("Worker error: {0}")]
    WorkerSpawn(String),

    #[error("A batch is already in progress; wait for it to complete before submitting another")]
    BatchInProgress,

    #[error("Invalid submission: {0}")]
    InvalidSubmission(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

impl From<zip::result::ZipError> for CatalogError {
    fn from(err: zip::result::ZipError) -> Self {
        CatalogError::ArchiveRead(err.to_string())
    }
}

impl CatalogError {
    /// Build a `FileAccess` error for `path`
    pub fn file_access(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        CatalogError::FileAccess {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
