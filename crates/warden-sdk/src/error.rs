//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Runtime error (duplicate rules, audit storage, export)
    #[error("Runtime error: {0}")]
    Runtime(#[from] warden_runtime::RuntimeError),

    /// Request attributes failed validation
    #[error("Invalid attributes: {0}")]
    Core(#[from] warden_core::CoreError),

    /// Request could not be assembled
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
