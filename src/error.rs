//! Error types for siistreams
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using SiiError
pub type Result<T> = std::result::Result<T, SiiError>;

/// Unified error type for siistreams operations
#[derive(Debug, Error)]
pub enum SiiError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    /// Input that cannot be read as a text container at all.
    /// Malformed individual lines never produce this.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("Index {index} out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Document has no file path; use save_as")]
    MissingPath,

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
