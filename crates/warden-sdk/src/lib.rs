//! Warden SDK
//!
//! High-level API for authorizing banking actions: build an [`Authorizer`]
//! from rules (by default the built-in banking policy), authorize requests,
//! and run transactions through a [`TransactionExecutor`].

pub mod authorizer;
pub mod builder;
pub mod config;
pub mod error;
pub mod policy;
pub mod transaction;

// Re-export main types
pub use authorizer::Authorizer;
pub use builder::AuthorizerBuilder;
pub use config::{BusinessHours, EngineConfig};
pub use error::{Result, SdkError};
pub use transaction::{
    AcknowledgingHandler, ActionError, ActionHandler, TransactionExecutor, TransactionOutcome,
    TransactionRecord, TransactionRequest,
};

// Re-export commonly used types from dependencies
pub use warden_core::{AccessRequest, Decision, Effect, Outcome, Rule};
pub use warden_runtime::{AuditLog, AuditQuery, DecisionStatistics, ExportFormat, MetricsCollector};
