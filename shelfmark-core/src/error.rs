//! Error types for Shelfmark Core

use thiserror::Error;

/// Result type alias using ShelfmarkError
pub type Result<T> = std::result::Result<T, ShelfmarkError>;

/// Top-level error type for all Shelfmark operations
#[derive(Debug, Error)]
pub enum ShelfmarkError {
    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur while querying the catalog search API
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Errors that occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Backend error: {0}")]
    Backend(String),
}
