//! Audit trail of decisions
//!
//! - `log`: append-only store shared across threads
//! - `query`: conjunctive filters
//! - `statistics`: aggregate counts and rates
//! - `export`: JSON and JSON Lines encodings

mod export;
mod log;
mod query;
mod statistics;

pub use export::ExportFormat;
pub use log::AuditLog;
pub use query::AuditQuery;
pub use statistics::DecisionStatistics;
