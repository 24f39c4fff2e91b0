//! Error types for dxf-json-writer

use std::io;
use thiserror::Error;

/// Main error type for loading, validating and writing documents
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input could not be decoded into a document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A known header variable carries a value of the wrong shape
    #[error("Invalid header value for {key}: expected {expected}")]
    InvalidHeaderValue { key: String, expected: &'static str },
}

/// Result type alias for dxf-json-writer operations
pub type Result<T> = std::result::Result<T, DxfError>;
