//! Error types for LexiKV
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::protocol::Status;

/// Result type alias using LexiError
pub type Result<T> = std::result::Result<T, LexiError>;

/// Unified error type for LexiKV operations
#[derive(Debug, Error)]
pub enum LexiError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Dictionary file is corrupt: {0}")]
    StorageCorrupt(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Word '{0}' already exists")]
    AlreadyExists(String),

    // -------------------------------------------------------------------------
    // Request Validation Errors
    // -------------------------------------------------------------------------
    #[error("Invalid word format")]
    InvalidFormat,

    #[error("Invalid word or definition")]
    InvalidInput,

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LexiError {
    /// Response status a caller should see for this error
    pub fn status(&self) -> Status {
        match self {
            LexiError::InvalidFormat | LexiError::InvalidInput => Status::BadRequest,
            LexiError::AlreadyExists(_) => Status::Conflict,
            _ => Status::InternalError,
        }
    }
}
