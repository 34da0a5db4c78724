//! Decision record produced by every evaluation

use crate::request::AccessRequest;
use crate::rule::{Effect, Rule};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Reason recorded when no rule's condition holds
pub const NO_APPLICABLE_RULE: &str = "No applicable rule found";

/// Final outcome of an evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Permit,
    Deny,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Permit => "permit",
            Outcome::Deny => "deny",
        }
    }

    pub fn is_permit(&self) -> bool {
        matches!(self, Outcome::Permit)
    }
}

impl From<Effect> for Outcome {
    fn from(effect: Effect) -> Self {
        match effect {
            Effect::Permit => Outcome::Permit,
            Effect::Deny => Outcome::Deny,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Outcome {
    type Err = crate::error::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "permit" => Ok(Outcome::Permit),
            "deny" => Ok(Outcome::Deny),
            other => Err(crate::error::CoreError::InvalidValue(format!(
                "unknown outcome '{}', expected 'permit' or 'deny'",
                other
            ))),
        }
    }
}

/// Outcome of evaluating one request, with its rationale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Correlation id
    pub id: Uuid,

    pub outcome: Outcome,

    /// Which rule fired, or that none did
    pub reason: String,

    /// Name of the deciding rule; empty when default-denied
    #[serde(default)]
    pub matched_rule_name: String,

    pub timestamp: DateTime<Utc>,

    /// Request that produced this decision
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_request: Option<AccessRequest>,
}

impl Decision {
    /// Decision made by `rule`
    pub fn matched(rule: &Rule, request: AccessRequest) -> Self {
        let outcome = Outcome::from(rule.effect);
        let reason = match outcome {
            Outcome::Permit => format!("Permitted by rule: {}", rule.name),
            Outcome::Deny => format!("Denied by rule: {}", rule.name),
        };
        Self {
            id: Uuid::new_v4(),
            outcome,
            reason,
            matched_rule_name: rule.name.clone(),
            timestamp: Utc::now(),
            source_request: Some(request),
        }
    }

    /// Default deny when nothing matched
    pub fn default_deny(request: AccessRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            outcome: Outcome::Deny,
            reason: NO_APPLICABLE_RULE.to_string(),
            matched_rule_name: String::new(),
            timestamp: Utc::now(),
            source_request: Some(request),
        }
    }

    pub fn is_permit(&self) -> bool {
        self.outcome.is_permit()
    }

    /// True when no rule decided the outcome
    pub fn is_default(&self) -> bool {
        self.matched_rule_name.is_empty()
    }

    pub fn actor_id(&self) -> Option<&str> {
        self.source_request.as_ref().map(|r| r.actor.id.as_str())
    }

    pub fn action(&self) -> Option<&str> {
        self.source_request.as_ref().map(|r| r.action.as_str())
    }
}
