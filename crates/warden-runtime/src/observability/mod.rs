//! Observability module
//!
//! Counters and histograms for evaluations. Structured logs go through
//! `tracing` at the call sites.

pub mod metrics;

pub use metrics::{Counter, Histogram, MetricsCollector};
