//! Builder pattern for Authorizer

use crate::authorizer::Authorizer;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::policy;
use std::sync::Arc;
use tracing::info;
use warden_core::Rule;
use warden_runtime::{AuditLog, MetricsCollector, PolicyEngine};

/// Builder for Authorizer
///
/// # Example
///
/// ```rust,ignore
/// use warden_sdk::AuthorizerBuilder;
///
/// // Default banking policy, fresh audit log
/// let authorizer = AuthorizerBuilder::new().build()?;
///
/// // Custom rules only, sharing an existing log
/// let authorizer = AuthorizerBuilder::new()
///     .with_default_policy(false)
///     .with_rule(rule)
///     .with_audit_log(log.clone())
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct AuthorizerBuilder {
    config: EngineConfig,
    rules: Vec<Rule>,
    audit_log: Option<Arc<AuditLog>>,
    metrics: Option<Arc<MetricsCollector>>,
}

impl AuthorizerBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a rule on top of the default policy (if loaded)
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add multiple rules
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Load the built-in banking rule set
    pub fn with_default_policy(mut self, load: bool) -> Self {
        self.config.load_default_policy = load;
        self
    }

    /// Record decisions in an existing log instead of a fresh one
    pub fn with_audit_log(mut self, audit_log: Arc<AuditLog>) -> Self {
        self.audit_log = Some(audit_log);
        self
    }

    /// Report to an existing metrics collector. Ignored when metrics are
    /// disabled in the configuration.
    pub fn with_metrics(mut self, metrics: Arc<MetricsCollector>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Enable metrics
    pub fn enable_metrics(mut self, enable: bool) -> Self {
        self.config.enable_metrics = enable;
        self
    }

    /// Build the authorizer.
    ///
    /// Fails on invalid configuration or on a duplicate rule id.
    pub fn build(self) -> Result<Authorizer> {
        self.config.validate()?;

        let mut engine = PolicyEngine::new();
        if self.config.enable_metrics {
            engine = engine.with_metrics(self.metrics.unwrap_or_default());
        }

        if self.config.load_default_policy {
            engine.add_rules(policy::banking_rules())?;
        }
        engine.add_rules(self.rules)?;

        info!(
            rule_count = engine.len(),
            default_policy = self.config.load_default_policy,
            metrics = self.config.enable_metrics,
            "Authorizer built"
        );

        Ok(Authorizer::new(
            Arc::new(engine),
            self.audit_log.unwrap_or_default(),
            self.config,
        ))
    }
}
