//! Configuration types for the Authorizer

use crate::error::{Result, SdkError};
use serde::{Deserialize, Serialize};
use warden_core::{DEFAULT_BUSINESS_END_HOUR, DEFAULT_BUSINESS_START_HOUR};

/// Main engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Load the built-in banking rule set
    pub load_default_policy: bool,

    /// Window used when the environment is derived from the clock
    pub business_hours: BusinessHours,

    /// Enable metrics collection
    pub enable_metrics: bool,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            load_default_policy: true,
            business_hours: BusinessHours::default(),
            enable_metrics: true,
        }
    }

    pub fn with_default_policy(mut self, load: bool) -> Self {
        self.load_default_policy = load;
        self
    }

    pub fn with_business_hours(mut self, start_hour: u32, end_hour: u32) -> Self {
        self.business_hours = BusinessHours {
            start_hour,
            end_hour,
        };
        self
    }

    /// Enable metrics
    pub fn enable_metrics(mut self, enable: bool) -> Self {
        self.enable_metrics = enable;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.business_hours.validate()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Weekday business window, `[start_hour, end_hour)` in UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl BusinessHours {
    pub fn validate(&self) -> Result<()> {
        if self.end_hour > 24 {
            return Err(SdkError::Config(format!(
                "business_hours.end_hour must be at most 24, got {}",
                self.end_hour
            )));
        }
        if self.start_hour >= self.end_hour {
            return Err(SdkError::Config(format!(
                "business_hours.start_hour ({}) must be before end_hour ({})",
                self.start_hour, self.end_hour
            )));
        }
        Ok(())
    }
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_BUSINESS_START_HOUR,
            end_hour: DEFAULT_BUSINESS_END_HOUR,
        }
    }
}
