//! Runtime error types

use thiserror::Error;

/// Runtime error
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// A rule with the same id is already registered
    #[error("Duplicate rule: {0}")]
    DuplicateRule(String),

    /// Export requested in a format the audit log cannot produce
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Backing store for the audit log failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization of audit records failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
