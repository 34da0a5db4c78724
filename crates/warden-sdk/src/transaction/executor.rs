//! Transaction executor

use super::handler::ActionHandler;
use crate::authorizer::Authorizer;
use crate::error::{Result, SdkError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;
use warden_core::{AccessRequest, ActionAttributes, Actor, Decision, Environment, Resource};

/// A transaction to authorize and, if permitted, perform
#[derive(Debug, Clone)]
pub struct TransactionRequest {
    pub actor: Actor,
    pub resource: Resource,
    pub action: String,
    pub amount: Option<f64>,
    /// Defaults to the authorizer's current environment
    pub environment: Option<Environment>,
    /// Defaults to `txn_<uuid>`
    pub transaction_id: Option<String>,
    pub target_account: Option<String>,
}

impl TransactionRequest {
    pub fn new(actor: Actor, resource: Resource, action: impl Into<String>) -> Self {
        Self {
            actor,
            resource,
            action: action.into(),
            amount: None,
            environment: None,
            transaction_id: None,
            target_account: None,
        }
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn with_transaction_id(mut self, id: impl Into<String>) -> Self {
        self.transaction_id = Some(id.into());
        self
    }

    pub fn with_target_account(mut self, account_id: impl Into<String>) -> Self {
        self.target_account = Some(account_id.into());
        self
    }
}

/// Record of an attempted transaction, kept whether or not it was permitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    pub action: String,
    pub amount: Option<f64>,
    pub timestamp: DateTime<Utc>,
    pub source_account: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_account: Option<String>,
}

/// Result of [`TransactionExecutor::execute`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionOutcome {
    /// Permitted and performed
    pub success: bool,
    /// Handler message on success, otherwise the denial or failure reason
    pub message: String,
    pub transaction: TransactionRecord,
    pub decision: Decision,
}

/// Authorizes transactions and hands permitted ones to an [`ActionHandler`].
///
/// Every attempt is evaluated and recorded in the audit log. A denied
/// transaction never reaches the handler.
#[derive(Clone)]
pub struct TransactionExecutor<H: ActionHandler> {
    authorizer: Authorizer,
    handler: H,
}

impl<H: ActionHandler> TransactionExecutor<H> {
    pub fn new(authorizer: Authorizer, handler: H) -> Self {
        Self {
            authorizer,
            handler,
        }
    }

    pub fn authorizer(&self) -> &Authorizer {
        &self.authorizer
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Authorize and, on permit, perform a transaction.
    ///
    /// Errors are reserved for requests that cannot be evaluated at all
    /// (invalid attributes) and audit log failures. Denials and handler
    /// failures are reported through [`TransactionOutcome::success`].
    pub fn execute(&self, txn: TransactionRequest) -> Result<TransactionOutcome> {
        if txn.action.is_empty() {
            return Err(SdkError::InvalidRequest("action must not be empty".to_string()));
        }

        let environment = txn
            .environment
            .unwrap_or_else(|| self.authorizer.environment_now());

        let transaction = TransactionRecord {
            id: txn
                .transaction_id
                .unwrap_or_else(|| format!("txn_{}", Uuid::new_v4().simple())),
            action: txn.action.clone(),
            amount: txn.amount,
            timestamp: environment.timestamp,
            source_account: txn.resource.id.clone(),
            target_account: txn.target_account,
        };

        let mut action_attributes = ActionAttributes::new(txn.action.clone());
        action_attributes.amount = txn.amount;
        let request = AccessRequest::new(txn.actor, txn.action, txn.resource, environment)
            .with_action_attributes(action_attributes);

        let decision = self.authorizer.authorize(request)?;

        if !decision.is_permit() {
            debug!(
                transaction_id = %transaction.id,
                reason = %decision.reason,
                "Transaction denied"
            );
            return Ok(TransactionOutcome {
                success: false,
                message: decision.reason.clone(),
                transaction,
                decision,
            });
        }

        // authorize() keeps the request on every decision it returns
        let performed = match decision.source_request.as_ref() {
            Some(request) => self.handler.perform(request),
            None => {
                return Err(SdkError::InvalidRequest(
                    "decision is missing its source request".to_string(),
                ))
            }
        };

        let (success, message) = match performed {
            Ok(message) => (true, message),
            Err(err) => {
                warn!(
                    transaction_id = %transaction.id,
                    error = %err,
                    "Permitted transaction failed in handler"
                );
                (false, err.to_string())
            }
        };

        Ok(TransactionOutcome {
            success,
            message,
            transaction,
            decision,
        })
    }
}
