//! API endpoint handlers

use super::extractors::JsonExtractor;
use super::types::*;
use crate::error::ServerError;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use tracing::{debug, info};
use warden_core::{
    Actor, Decision, Department, Resource, ResourceStatus, ResourceType, Seniority,
};
use warden_sdk::policy::BANKING_ACTIONS;
use warden_sdk::{AuditQuery, DecisionStatistics, TransactionOutcome, TransactionRequest};

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Service description
pub(super) async fn service_info() -> Json<ServiceInfo> {
    let endpoints: BTreeMap<String, String> = [
        ("actors", "/v1/actors"),
        ("resources", "/v1/resources"),
        ("decide", "/v1/decide"),
        ("transactions", "/v1/transactions"),
        ("decisions", "/v1/decisions"),
        ("statistics", "/v1/decisions/statistics"),
        ("export", "/v1/decisions/export"),
        ("schema", "/v1/schema"),
        ("metrics", "/metrics"),
        ("health", "/health"),
    ]
    .into_iter()
    .map(|(name, path)| (name.to_string(), path.to_string()))
    .collect();

    Json(ServiceInfo {
        name: "Warden ABAC Banking Service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
    })
}

/// Attribute schema
pub(super) async fn schema() -> Json<Value> {
    let departments: Vec<&str> = Department::ALL.iter().map(|d| d.as_str()).collect();
    let seniority: Vec<&str> = Seniority::ALL.iter().map(|s| s.as_str()).collect();
    let resource_types: Vec<&str> = ResourceType::ALL.iter().map(|t| t.as_str()).collect();
    let statuses: Vec<&str> = ResourceStatus::ALL.iter().map(|s| s.as_str()).collect();

    Json(json!({
        "actor_attributes": {
            "department": departments,
            "seniority": seniority,
            "location": {
                "branch": "string",
                "region": "string",
                "country": "string"
            },
            "clearance_level": { "min": 1, "max": 5 }
        },
        "resource_attributes": {
            "resource_type": resource_types,
            "status": statuses,
            "owner": { "type": "string" },
            "sensitivity": { "min": 1, "max": 5 },
            "branch": { "type": "string" },
            "region": { "type": "string" }
        },
        "action_attributes": {
            "action_type": BANKING_ACTIONS,
            "amount": { "type": "number", "min": 0 }
        },
        "environment_attributes": {
            "timestamp": { "type": "date-time" },
            "business_hours": { "type": "boolean" },
            "ip_address": { "type": "string" },
            "location": { "type": "string" }
        }
    }))
}

/// Register an actor
pub(super) async fn create_actor(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<CreateActorPayload>,
) -> Result<(StatusCode, Json<Actor>), ServerError> {
    let actor = state.directory.create_actor(payload.into()).await?;
    info!(actor_id = %actor.id, department = %actor.department(), "Actor registered");
    Ok((StatusCode::CREATED, Json(actor)))
}

pub(super) async fn get_actor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Actor>, ServerError> {
    state
        .directory
        .get_actor(&id)
        .await
        .map(Json)
        .ok_or_else(|| ServerError::NotFound(format!("Actor with ID {} not found", id)))
}

/// Register a resource
pub(super) async fn create_resource(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<CreateResourcePayload>,
) -> Result<(StatusCode, Json<Resource>), ServerError> {
    let resource = state.directory.create_resource(payload.into()).await?;
    info!(resource_id = %resource.id, "Resource registered");
    Ok((StatusCode::CREATED, Json(resource)))
}

pub(super) async fn get_resource(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Resource>, ServerError> {
    state
        .directory
        .get_resource(&id)
        .await
        .map(Json)
        .ok_or_else(|| ServerError::NotFound(format!("Resource with ID {} not found", id)))
}

/// Evaluate a fully specified request
pub(super) async fn decide(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<DecideRequestPayload>,
) -> Result<Json<Decision>, ServerError> {
    let authorizer = state.authorizer();
    let request = payload.into_request(|| authorizer.environment_now());
    let decision = authorizer.authorize(request)?;
    Ok(Json(decision))
}

/// Authorize and execute a transaction between registered entities.
///
/// Answers 200 when performed and 403 when denied or failed, with the
/// outcome as body in both cases.
pub(super) async fn execute_transaction(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<TransactionPayload>,
) -> Result<(StatusCode, Json<TransactionOutcome>), ServerError> {
    let actor = state
        .directory
        .get_actor(&payload.actor_id)
        .await
        .ok_or_else(|| ServerError::NotFound(format!("Actor with ID {} not found", payload.actor_id)))?;
    let resource = state
        .directory
        .get_resource(&payload.resource_id)
        .await
        .ok_or_else(|| {
            ServerError::NotFound(format!("Resource with ID {} not found", payload.resource_id))
        })?;

    let environment = payload.environment(state.authorizer().environment_now());
    let mut txn = TransactionRequest::new(actor, resource, payload.action.clone())
        .with_environment(environment);
    txn.amount = payload.amount;
    txn.transaction_id = payload.transaction_id;
    txn.target_account = payload.target_account;

    let outcome = state.executor.execute(txn)?;
    debug!(
        transaction_id = %outcome.transaction.id,
        success = outcome.success,
        "Transaction processed"
    );

    let status = if outcome.success {
        StatusCode::OK
    } else {
        StatusCode::FORBIDDEN
    };
    Ok((status, Json(outcome)))
}

/// Query the audit log
pub(super) async fn query_decisions(
    State(state): State<AppState>,
    Query(params): Query<DecisionQueryParams>,
) -> Result<Json<Vec<Decision>>, ServerError> {
    let query = AuditQuery::try_from(params)?;
    Ok(Json(state.authorizer().audit_log().query(&query)))
}

pub(super) async fn decision_statistics(State(state): State<AppState>) -> Json<DecisionStatistics> {
    Json(state.authorizer().audit_log().statistics())
}

/// Export the whole audit log
pub(super) async fn export_decisions(
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
) -> Result<impl IntoResponse, ServerError> {
    let format = params.format()?;
    let body = state.authorizer().audit_log().export_as(format)?;
    Ok(([(header::CONTENT_TYPE, format.content_type())], body))
}

/// Plain-text metrics
pub(super) async fn metrics(State(state): State<AppState>) -> Result<String, ServerError> {
    state
        .authorizer()
        .metrics()
        .map(|metrics| metrics.render_text())
        .ok_or_else(|| ServerError::NotFound("Metrics are disabled".to_string()))
}
