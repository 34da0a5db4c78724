//! Error types for Warden Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Missing attribute: {0}")]
    MissingAttribute(String),
}

/// Error raised by a rule condition while inspecting a request.
///
/// The engine never propagates these: a failing condition counts as a
/// condition that did not hold.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConditionError {
    #[error("Missing attribute: {0}")]
    MissingAttribute(&'static str),

    #[error("Invalid attribute {name}: {message}")]
    InvalidAttribute {
        name: &'static str,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
