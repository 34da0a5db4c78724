//! Warden Runtime - Evaluation engine and audit trail
//!
//! This crate evaluates access requests against a priority-ordered rule set
//! and records every resulting decision in an append-only audit log.

pub mod audit;
pub mod engine;
pub mod error;
pub mod observability;

// Re-export main types
pub use audit::{AuditLog, AuditQuery, DecisionStatistics, ExportFormat};
pub use engine::PolicyEngine;
pub use error::{Result, RuntimeError};
pub use observability::MetricsCollector;
