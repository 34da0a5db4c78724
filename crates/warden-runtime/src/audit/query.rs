//! Filters for querying the audit log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use warden_core::{Decision, Outcome};

/// Conjunctive filter over decisions. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditQuery {
    /// Actor id of the source request
    #[serde(default)]
    pub actor_id: Option<String>,

    /// Action of the source request
    #[serde(default)]
    pub action: Option<String>,

    #[serde(default)]
    pub outcome: Option<Outcome>,

    /// Inclusive lower bound on the decision timestamp
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,

    /// Inclusive upper bound on the decision timestamp
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
}

impl AuditQuery {
    /// Create a filter that matches everything
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_actor_id(mut self, actor_id: impl Into<String>) -> Self {
        self.actor_id = Some(actor_id.into());
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn with_end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// True when no filter is set
    pub fn is_empty(&self) -> bool {
        self.actor_id.is_none()
            && self.action.is_none()
            && self.outcome.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
    }

    /// Check if a decision satisfies every set filter.
    ///
    /// Actor and action filters only match decisions that carry a request.
    pub fn matches(&self, decision: &Decision) -> bool {
        if let Some(ref actor_id) = self.actor_id {
            if decision.actor_id() != Some(actor_id.as_str()) {
                return false;
            }
        }

        if let Some(ref action) = self.action {
            if decision.action() != Some(action.as_str()) {
                return false;
            }
        }

        if let Some(outcome) = self.outcome {
            if decision.outcome != outcome {
                return false;
            }
        }

        if let Some(start) = self.start_time {
            if decision.timestamp < start {
                return false;
            }
        }

        if let Some(end) = self.end_time {
            if decision.timestamp > end {
                return false;
            }
        }

        true
    }
}
