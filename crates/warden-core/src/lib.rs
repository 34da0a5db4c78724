//! Warden Core - Core types for the Warden ABAC decision engine
//!
//! This crate provides the fundamental types used across the Warden crates:
//! - Request model (actor, resource, environment and action attributes)
//! - Rules with their effect, priority and condition predicate
//! - Decisions recorded for every evaluation
//! - Error types

pub mod decision;
pub mod error;
pub mod request;
pub mod rule;

// Re-export commonly used types
pub use decision::{Decision, Outcome, NO_APPLICABLE_RULE};
pub use error::{ConditionError, CoreError};
pub use request::{
    is_business_hours, AccessRequest, ActionAttributes, Actor, ActorAttributes, Department,
    Environment, Location, Resource, ResourceAttributes, ResourceStatus, ResourceType, Seniority,
    DEFAULT_BUSINESS_END_HOUR, DEFAULT_BUSINESS_START_HOUR,
};
pub use rule::{Condition, Effect, Rule, RuleInfo};
