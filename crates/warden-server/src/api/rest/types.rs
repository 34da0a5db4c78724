//! Request/response type definitions

use crate::directory::EntityDirectory;
use crate::error::ServerError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use warden_core::{
    AccessRequest, ActionAttributes, Actor, ActorAttributes, Environment, Outcome, Resource,
    ResourceAttributes,
};
use warden_sdk::{AcknowledgingHandler, AuditQuery, Authorizer, ExportFormat, TransactionExecutor};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub executor: Arc<TransactionExecutor<AcknowledgingHandler>>,
    pub directory: Arc<EntityDirectory>,
}

impl AppState {
    pub fn authorizer(&self) -> &Authorizer {
        self.executor.authorizer()
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Service description returned by `GET /v1`
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
}

/// Actor registration body. An omitted id is generated.
#[derive(Debug, Deserialize)]
pub struct CreateActorPayload {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub attributes: ActorAttributes,
}

impl From<CreateActorPayload> for Actor {
    fn from(payload: CreateActorPayload) -> Self {
        Actor::new(payload.id.unwrap_or_default(), payload.name, payload.attributes)
    }
}

/// Resource registration body. An omitted id is generated.
#[derive(Debug, Deserialize)]
pub struct CreateResourcePayload {
    #[serde(default)]
    pub id: Option<String>,
    pub attributes: ResourceAttributes,
}

impl From<CreateResourcePayload> for Resource {
    fn from(payload: CreateResourcePayload) -> Self {
        Resource::new(payload.id.unwrap_or_default(), payload.attributes)
    }
}

/// Fully specified request for `POST /v1/decide`.
///
/// The environment defaults to the current time under the configured
/// business-hours window.
#[derive(Debug, Deserialize)]
pub struct DecideRequestPayload {
    pub actor: Actor,
    pub action: String,
    pub resource: Resource,
    #[serde(default)]
    pub environment: Option<Environment>,
    #[serde(default)]
    pub amount: Option<f64>,
}

impl DecideRequestPayload {
    pub fn into_request(self, default_environment: impl FnOnce() -> Environment) -> AccessRequest {
        let environment = self.environment.unwrap_or_else(default_environment);
        let mut action_attributes = ActionAttributes::new(self.action.clone());
        action_attributes.amount = self.amount;
        AccessRequest::new(self.actor, self.action, self.resource, environment)
            .with_action_attributes(action_attributes)
    }
}

/// Transaction by entity ids for `POST /v1/transactions`
#[derive(Debug, Deserialize)]
pub struct TransactionPayload {
    pub actor_id: String,
    pub resource_id: String,
    pub action: String,
    #[serde(default)]
    pub amount: Option<f64>,
    /// Overrides the clock-derived business-hours flag
    #[serde(default)]
    pub business_hours: Option<bool>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub target_account: Option<String>,
}

impl TransactionPayload {
    /// Environment for this transaction, starting from `now`
    pub fn environment(&self, now: Environment) -> Environment {
        let mut environment = match self.business_hours {
            Some(flag) => Environment::new(now.timestamp, flag),
            None => now,
        };
        environment.ip_address = self.ip_address.clone();
        environment.location = self.location.clone();
        environment
    }
}

/// Query parameters for `GET /v1/decisions`
#[derive(Debug, Default, Deserialize)]
pub struct DecisionQueryParams {
    pub actor_id: Option<String>,
    pub action: Option<String>,
    pub outcome: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl TryFrom<DecisionQueryParams> for AuditQuery {
    type Error = ServerError;

    fn try_from(params: DecisionQueryParams) -> Result<Self, Self::Error> {
        let outcome = params
            .outcome
            .as_deref()
            .map(str::parse::<Outcome>)
            .transpose()
            .map_err(|e| ServerError::InvalidRequest(e.to_string()))?;

        Ok(AuditQuery {
            actor_id: params.actor_id,
            action: params.action,
            outcome,
            start_time: params.start_time,
            end_time: params.end_time,
        })
    }
}

/// Query parameters for `GET /v1/decisions/export`
#[derive(Debug, Default, Deserialize)]
pub struct ExportParams {
    pub format: Option<String>,
}

impl ExportParams {
    pub fn format(&self) -> Result<ExportFormat, ServerError> {
        Ok(self.format.as_deref().unwrap_or("json").parse()?)
    }
}
