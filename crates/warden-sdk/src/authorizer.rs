//! Authorizer: evaluate a request and record the decision

use crate::config::EngineConfig;
use crate::error::Result;
use std::sync::Arc;
use tracing::info;
use warden_core::{AccessRequest, Decision, Environment};
use warden_runtime::{AuditLog, MetricsCollector, PolicyEngine};

/// Evaluates requests against a fixed rule set and appends every decision to
/// the audit log.
///
/// The engine and the log are injected at construction (see
/// [`AuthorizerBuilder`](crate::AuthorizerBuilder)); cloning an `Authorizer`
/// shares both.
#[derive(Debug, Clone)]
pub struct Authorizer {
    engine: Arc<PolicyEngine>,
    audit_log: Arc<AuditLog>,
    config: EngineConfig,
}

impl Authorizer {
    pub(crate) fn new(engine: Arc<PolicyEngine>, audit_log: Arc<AuditLog>, config: EngineConfig) -> Self {
        Self {
            engine,
            audit_log,
            config,
        }
    }

    /// Validate, evaluate and record a request.
    ///
    /// Requests with out-of-range attributes are rejected before evaluation
    /// and leave no audit record.
    pub fn authorize(&self, request: AccessRequest) -> Result<Decision> {
        request.validate()?;

        let decision = self.engine.evaluate(request);
        self.audit_log.append(decision.clone())?;

        info!(
            decision_id = %decision.id,
            outcome = %decision.outcome,
            matched_rule = %decision.matched_rule_name,
            actor_id = decision.actor_id().unwrap_or_default(),
            action = decision.action().unwrap_or_default(),
            "Authorization decision recorded"
        );

        Ok(decision)
    }

    pub fn engine(&self) -> &Arc<PolicyEngine> {
        &self.engine
    }

    pub fn audit_log(&self) -> &Arc<AuditLog> {
        &self.audit_log
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn metrics(&self) -> Option<&Arc<MetricsCollector>> {
        self.engine.metrics()
    }

    /// Current environment, using the configured business-hours window
    pub fn environment_now(&self) -> Environment {
        let hours = self.config.business_hours;
        Environment::with_window(chrono::Utc::now(), hours.start_hour, hours.end_hour)
    }
}
