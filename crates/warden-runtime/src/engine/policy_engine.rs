//! Priority-ordered, first-match rule evaluation

use crate::error::{Result, RuntimeError};
use crate::observability::MetricsCollector;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};
use warden_core::{AccessRequest, Decision, Rule, RuleInfo};

/// Holds a rule set in priority order and evaluates requests against it.
///
/// # Combining algorithm
///
/// Priority order *is* the combining algorithm. Rules are evaluated from the
/// highest priority down, and the **first rule whose condition holds decides
/// the outcome, whatever its effect**. There is no deny-overrides or
/// permit-overrides step: a high priority deny rule pre-empts any lower
/// priority permit rule, and a high priority permit rule pre-empts any lower
/// priority deny rule. Policy authors must encode precedence through
/// priorities alone.
///
/// Equal priorities keep insertion order: among rules with the same priority,
/// the one added first is evaluated first.
///
/// When no condition holds the decision is a deny with an empty
/// `matched_rule_name`.
///
/// # Failing conditions
///
/// A condition that returns an error, or panics, is treated as a condition
/// that does not hold. The failure is logged and counted, evaluation moves on
/// to the next rule, and the decision carries no trace of it. Note for policy
/// authors: this fails safe, not closed. An erroring deny rule does not deny,
/// so a lower priority permit rule may still match.
///
/// # Concurrency
///
/// Rules are added during construction. Once built, the engine is read-only
/// and `evaluate` may be called from any number of threads through a shared
/// reference.
#[derive(Debug, Default)]
pub struct PolicyEngine {
    rules: Vec<Rule>,
    metrics: Option<Arc<MetricsCollector>>,
}

impl PolicyEngine {
    /// Create an empty engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Report evaluations to `metrics`
    pub fn with_metrics(mut self, metrics: Arc<MetricsCollector>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn metrics(&self) -> Option<&Arc<MetricsCollector>> {
        self.metrics.as_ref()
    }

    /// Add a rule and re-establish priority order.
    ///
    /// Fails with [`RuntimeError::DuplicateRule`] if a rule with the same id
    /// is already present; the existing rule set is left untouched.
    pub fn add_rule(&mut self, rule: Rule) -> Result<()> {
        if self.rules.iter().any(|existing| existing.id == rule.id) {
            return Err(RuntimeError::DuplicateRule(rule.id));
        }

        debug!(
            rule_id = %rule.id,
            priority = rule.priority,
            effect = %rule.effect,
            "Adding rule"
        );
        self.rules.push(rule);
        // sort_by_key is stable: equal priorities stay in insertion order
        self.rules.sort_by_key(|rule| std::cmp::Reverse(rule.priority));
        Ok(())
    }

    /// Add several rules, stopping at the first duplicate id
    pub fn add_rules<I>(&mut self, rules: I) -> Result<()>
    where
        I: IntoIterator<Item = Rule>,
    {
        for rule in rules {
            self.add_rule(rule)?;
        }
        Ok(())
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rule metadata in evaluation order
    pub fn rule_infos(&self) -> Vec<RuleInfo> {
        self.rules.iter().map(Rule::info).collect()
    }

    pub fn get_rule(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate a request. Never fails: every request yields a decision.
    pub fn evaluate(&self, request: AccessRequest) -> Decision {
        let start = Instant::now();

        let decision = match self
            .rules
            .iter()
            .find(|rule| self.condition_holds(rule, &request))
        {
            Some(rule) => Decision::matched(rule, request),
            None => Decision::default_deny(request),
        };

        debug!(
            decision_id = %decision.id,
            outcome = %decision.outcome,
            matched_rule = %decision.matched_rule_name,
            actor_id = decision.actor_id().unwrap_or_default(),
            action = decision.action().unwrap_or_default(),
            "Evaluated request"
        );

        if let Some(metrics) = &self.metrics {
            metrics.record_decision(decision.outcome, decision.is_default(), start.elapsed());
        }

        decision
    }

    fn condition_holds(&self, rule: &Rule, request: &AccessRequest) -> bool {
        match panic::catch_unwind(AssertUnwindSafe(|| rule.check(request))) {
            Ok(Ok(holds)) => holds,
            Ok(Err(err)) => {
                warn!(
                    rule_id = %rule.id,
                    error = %err,
                    "Rule condition failed, treating as non-match"
                );
                self.record_condition_error();
                false
            }
            Err(_) => {
                warn!(
                    rule_id = %rule.id,
                    "Rule condition panicked, treating as non-match"
                );
                self.record_condition_error();
                false
            }
        }
    }

    fn record_condition_error(&self) {
        if let Some(metrics) = &self.metrics {
            metrics.record_condition_error();
        }
    }
}
