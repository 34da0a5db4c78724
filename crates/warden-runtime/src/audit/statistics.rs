//! Aggregate statistics over the audit log

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use warden_core::{Decision, Outcome};

/// Snapshot aggregate of every decision in the log
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionStatistics {
    pub total_decisions: usize,

    pub permit_rate: f64,

    pub deny_rate: f64,

    /// Actor department -> number of decisions
    pub by_department: BTreeMap<String, usize>,

    /// Action -> number of decisions
    pub by_action: BTreeMap<String, usize>,
}

impl DecisionStatistics {
    /// Aggregate over `decisions`.
    ///
    /// Every decision counts toward the total and the rates; only decisions
    /// that carry a request contribute to the breakdown maps.
    pub fn from_decisions<'a, I>(decisions: I) -> Self
    where
        I: IntoIterator<Item = &'a Decision>,
    {
        let mut stats = Self::default();
        let mut permits = 0usize;
        let mut denies = 0usize;

        for decision in decisions {
            stats.total_decisions += 1;
            match decision.outcome {
                Outcome::Permit => permits += 1,
                Outcome::Deny => denies += 1,
            }

            if let Some(request) = &decision.source_request {
                *stats
                    .by_department
                    .entry(request.actor.department().as_str().to_string())
                    .or_insert(0) += 1;
                *stats.by_action.entry(request.action.clone()).or_insert(0) += 1;
            }
        }

        if stats.total_decisions > 0 {
            let total = stats.total_decisions as f64;
            stats.permit_rate = permits as f64 / total;
            stats.deny_rate = denies as f64 / total;
        }

        stats
    }
}
