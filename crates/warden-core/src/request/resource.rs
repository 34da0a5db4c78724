//! Resource (account) attributes

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of account being acted upon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Checking,
    Savings,
    Loan,
    Investment,
    Business,
}

impl ResourceType {
    pub const ALL: [ResourceType; 5] = [
        ResourceType::Checking,
        ResourceType::Savings,
        ResourceType::Loan,
        ResourceType::Investment,
        ResourceType::Business,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Checking => "checking",
            ResourceType::Savings => "savings",
            ResourceType::Loan => "loan",
            ResourceType::Investment => "investment",
            ResourceType::Business => "business",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceStatus {
    Active,
    Frozen,
    UnderReview,
    Closed,
}

impl ResourceStatus {
    pub const ALL: [ResourceStatus; 4] = [
        ResourceStatus::Active,
        ResourceStatus::Frozen,
        ResourceStatus::UnderReview,
        ResourceStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceStatus::Active => "active",
            ResourceStatus::Frozen => "frozen",
            ResourceStatus::UnderReview => "under_review",
            ResourceStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attributes used by rules to reason about the resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceAttributes {
    pub resource_type: ResourceType,
    /// Actor id of the owner
    pub owner: String,
    pub status: ResourceStatus,
    /// Sensitivity, 1 (public) to 5 (restricted)
    pub sensitivity: u8,
    pub branch: String,
    pub region: String,
}

impl ResourceAttributes {
    pub const MIN_SENSITIVITY: u8 = 1;
    pub const MAX_SENSITIVITY: u8 = 5;

    pub fn validate(&self) -> Result<()> {
        if !(Self::MIN_SENSITIVITY..=Self::MAX_SENSITIVITY).contains(&self.sensitivity) {
            return Err(CoreError::InvalidValue(format!(
                "sensitivity must be between {} and {}, got {}",
                Self::MIN_SENSITIVITY,
                Self::MAX_SENSITIVITY,
                self.sensitivity
            )));
        }
        if self.owner.is_empty() {
            return Err(CoreError::MissingAttribute("owner".to_string()));
        }
        Ok(())
    }
}

/// The object of an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub attributes: ResourceAttributes,
}

impl Resource {
    pub fn new(id: impl Into<String>, attributes: ResourceAttributes) -> Self {
        Self {
            id: id.into(),
            attributes,
        }
    }

    pub fn status(&self) -> ResourceStatus {
        self.attributes.status
    }

    pub fn branch(&self) -> &str {
        &self.attributes.branch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attributes() -> ResourceAttributes {
        ResourceAttributes {
            resource_type: ResourceType::Checking,
            owner: "user_1".to_string(),
            status: ResourceStatus::Active,
            sensitivity: 2,
            branch: "downtown".to_string(),
            region: "west".to_string(),
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(attributes().validate().is_ok());
    }

    #[test]
    fn test_validate_sensitivity_out_of_range() {
        let mut attrs = attributes();
        attrs.sensitivity = 0;
        assert!(matches!(attrs.validate(), Err(CoreError::InvalidValue(_))));
    }

    #[test]
    fn test_validate_missing_owner() {
        let mut attrs = attributes();
        attrs.owner.clear();
        assert_eq!(
            attrs.validate(),
            Err(CoreError::MissingAttribute("owner".to_string()))
        );
    }

    #[test]
    fn test_status_serde_names() {
        let json = serde_json::to_string(&ResourceStatus::UnderReview).unwrap();
        assert_eq!(json, "\"under_review\"");
        assert!(serde_json::from_str::<ResourceStatus>("\"suspended\"").is_err());
    }
}
