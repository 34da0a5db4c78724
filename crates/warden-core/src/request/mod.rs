//! Authorization request model
//!
//! An [`AccessRequest`] is an immutable snapshot of everything a rule may look
//! at: who is acting, what they want to do, on which resource, under which
//! environment, plus action specific attributes such as an amount.

mod actor;
mod environment;
mod resource;

pub use actor::{Actor, ActorAttributes, Department, Location, Seniority};
pub use environment::{
    is_business_hours, Environment, DEFAULT_BUSINESS_END_HOUR, DEFAULT_BUSINESS_START_HOUR,
};
pub use resource::{Resource, ResourceAttributes, ResourceStatus, ResourceType};

use crate::error::{ConditionError, CoreError, Result};
use serde::{Deserialize, Serialize};

/// Attributes specific to the requested action
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionAttributes {
    #[serde(default)]
    pub amount: Option<f64>,

    #[serde(default)]
    pub action_type: String,
}

impl ActionAttributes {
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            amount: None,
            action_type: action_type.into(),
        }
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }
}

/// Request submitted for an authorization decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessRequest {
    pub actor: Actor,
    pub action: String,
    pub resource: Resource,
    pub environment: Environment,
    #[serde(default)]
    pub action_attributes: ActionAttributes,
}

impl AccessRequest {
    /// Create a request; `action_attributes.action_type` defaults to `action`
    pub fn new(
        actor: Actor,
        action: impl Into<String>,
        resource: Resource,
        environment: Environment,
    ) -> Self {
        let action = action.into();
        Self {
            actor,
            action_attributes: ActionAttributes::new(action.clone()),
            action,
            resource,
            environment,
        }
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.action_attributes.amount = Some(amount);
        self
    }

    pub fn with_action_attributes(mut self, action_attributes: ActionAttributes) -> Self {
        self.action_attributes = action_attributes;
        self
    }

    pub fn amount(&self) -> Option<f64> {
        self.action_attributes.amount
    }

    /// Amount for conditions that cannot be decided without one
    pub fn require_amount(&self) -> std::result::Result<f64, ConditionError> {
        match self.action_attributes.amount {
            Some(amount) if amount.is_finite() => Ok(amount),
            Some(amount) => Err(ConditionError::InvalidAttribute {
                name: "amount",
                message: format!("not a finite number: {}", amount),
            }),
            None => Err(ConditionError::MissingAttribute("amount")),
        }
    }

    /// Validate attribute ranges before the request is evaluated
    pub fn validate(&self) -> Result<()> {
        if self.action.is_empty() {
            return Err(CoreError::MissingAttribute("action".to_string()));
        }
        self.actor.attributes.validate()?;
        self.resource.attributes.validate()?;
        if let Some(amount) = self.action_attributes.amount {
            if !amount.is_finite() || amount < 0.0 {
                return Err(CoreError::InvalidValue(format!(
                    "amount must be a non-negative number, got {}",
                    amount
                )));
            }
        }
        Ok(())
    }
}
