//! In-memory, append-only decision log

use super::export::ExportFormat;
use super::query::AuditQuery;
use super::statistics::DecisionStatistics;
use crate::error::{Result, RuntimeError};
use std::sync::{PoisonError, RwLock, RwLockReadGuard};
use tracing::debug;
use warden_core::Decision;

/// Append-only record of every decision.
///
/// Appends take the write lock; queries, statistics and exports share the
/// read lock and each observe a consistent snapshot. Records are kept in
/// append order.
#[derive(Debug, Default)]
pub struct AuditLog {
    decisions: RwLock<Vec<Decision>>,
}

impl AuditLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a decision
    pub fn append(&self, decision: Decision) -> Result<()> {
        let mut decisions = self
            .decisions
            .write()
            .map_err(|e| RuntimeError::Storage(format!("audit log lock poisoned: {}", e)))?;

        debug!(
            decision_id = %decision.id,
            outcome = %decision.outcome,
            "Appending decision to audit log"
        );
        decisions.push(decision);
        Ok(())
    }

    /// Decisions matching every set filter, in append order
    pub fn query(&self, query: &AuditQuery) -> Vec<Decision> {
        self.read()
            .iter()
            .filter(|decision| query.matches(decision))
            .cloned()
            .collect()
    }

    /// Aggregate statistics over the whole log
    pub fn statistics(&self) -> DecisionStatistics {
        DecisionStatistics::from_decisions(self.read().iter())
    }

    /// Export the whole log. `format` is `"json"` or `"jsonl"`.
    pub fn export(&self, format: &str) -> Result<String> {
        let format: ExportFormat = format.parse()?;
        self.export_as(format)
    }

    pub fn export_as(&self, format: ExportFormat) -> Result<String> {
        format.encode(&self.read())
    }

    /// Copy of every decision, in append order
    pub fn snapshot(&self) -> Vec<Decision> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Remove every record
    pub fn clear(&self) -> Result<()> {
        self.decisions
            .write()
            .map_err(|e| RuntimeError::Storage(format!("audit log lock poisoned: {}", e)))?
            .clear();
        Ok(())
    }

    // A poisoned lock only means a writer panicked mid-push; the vector is
    // still a valid list of complete records.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Decision>> {
        self.decisions.read().unwrap_or_else(PoisonError::into_inner)
    }
}
