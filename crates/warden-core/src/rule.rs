//! Rule definitions
//!
//! A rule pairs serializable metadata (id, name, priority, effect) with an
//! executable condition. Conditions are pure functions of the
//! [`AccessRequest`]; they read nothing outside the request.

use crate::error::ConditionError;
use crate::request::AccessRequest;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Outcome a rule produces when its condition holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    Permit,
    Deny,
}

impl Effect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Effect::Permit => "permit",
            Effect::Deny => "deny",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Predicate evaluated against a request
pub type Condition =
    Arc<dyn Fn(&AccessRequest) -> Result<bool, ConditionError> + Send + Sync + 'static>;

/// Serializable rule metadata, without the predicate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleInfo {
    pub id: String,
    pub name: String,
    pub priority: i32,
    pub effect: Effect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Rule definition
#[derive(Clone)]
pub struct Rule {
    /// Unique rule ID
    pub id: String,

    /// Human-readable name, reported in decisions
    pub name: String,

    /// Higher values are evaluated first
    pub priority: i32,

    pub effect: Effect,

    pub description: Option<String>,

    condition: Condition,
}

impl Rule {
    /// Create a rule from a condition that may fail
    pub fn new<F>(
        id: impl Into<String>,
        name: impl Into<String>,
        priority: i32,
        effect: Effect,
        condition: F,
    ) -> Self
    where
        F: Fn(&AccessRequest) -> Result<bool, ConditionError> + Send + Sync + 'static,
    {
        Rule {
            id: id.into(),
            name: name.into(),
            priority,
            effect,
            description: None,
            condition: Arc::new(condition),
        }
    }

    /// Create a permit rule
    pub fn permit<F>(id: impl Into<String>, name: impl Into<String>, priority: i32, condition: F) -> Self
    where
        F: Fn(&AccessRequest) -> Result<bool, ConditionError> + Send + Sync + 'static,
    {
        Self::new(id, name, priority, Effect::Permit, condition)
    }

    /// Create a deny rule
    pub fn deny<F>(id: impl Into<String>, name: impl Into<String>, priority: i32, condition: F) -> Self
    where
        F: Fn(&AccessRequest) -> Result<bool, ConditionError> + Send + Sync + 'static,
    {
        Self::new(id, name, priority, Effect::Deny, condition)
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Run the condition against a request
    pub fn check(&self, request: &AccessRequest) -> Result<bool, ConditionError> {
        (self.condition)(request)
    }

    pub fn info(&self) -> RuleInfo {
        RuleInfo {
            id: self.id.clone(),
            name: self.name.clone(),
            priority: self.priority,
            effect: self.effect,
            description: self.description.clone(),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("priority", &self.priority)
            .field("effect", &self.effect)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
