//! Error types for Symphony
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using SymphonyError
pub type Result<T> = std::result::Result<T, SymphonyError>;

/// Unified error type for Symphony operations
#[derive(Debug, Error)]
pub enum SymphonyError {
    // -------------------------------------------------------------------------
    // Call Builder Errors
    // -------------------------------------------------------------------------
    #[error("Invalid method name: '{0}'")]
    InvalidMethodName(String),

    /// A value (encode) or wire tag (decode) with no mapping
    #[error("Unsupported value type: {0}")]
    UnsupportedValueType(String),

    // -------------------------------------------------------------------------
    // Response Parser Errors
    // -------------------------------------------------------------------------
    /// Carries a short prefix of the raw document
    #[error("Invalid response shape: {0}...")]
    InvalidResponseShape(String),

    #[error("Malformed <{tag}> content: '{text}'")]
    MalformedNumber { tag: String, text: String },

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Collaborator Errors
    // -------------------------------------------------------------------------
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Cipher error: {0}")]
    Cipher(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<roxmltree::Error> for SymphonyError {
    fn from(err: roxmltree::Error) -> Self {
        SymphonyError::MalformedDocument(err.to_string())
    }
}

impl From<serde_json::Error> for SymphonyError {
    fn from(err: serde_json::Error) -> Self {
        SymphonyError::Serialization(err.to_string())
    }
}
