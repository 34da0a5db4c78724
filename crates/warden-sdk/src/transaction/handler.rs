//! Business action handlers

use thiserror::Error;
use warden_core::AccessRequest;

/// Failure of an approved business action
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActionError {
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Action {0} requires an amount")]
    MissingAmount(String),

    #[error("Transaction failed: {0}")]
    Failed(String),
}

/// Performs an action once it has been permitted.
///
/// Only called for permitted requests. The returned message is surfaced to
/// the caller as the transaction message.
pub trait ActionHandler: Send + Sync {
    fn perform(&self, request: &AccessRequest) -> Result<String, ActionError>;
}

impl<H: ActionHandler + ?Sized> ActionHandler for std::sync::Arc<H> {
    fn perform(&self, request: &AccessRequest) -> Result<String, ActionError> {
        (**self).perform(request)
    }
}

/// Acknowledges approved actions without touching balances or statuses
#[derive(Debug, Clone, Copy, Default)]
pub struct AcknowledgingHandler;

impl AcknowledgingHandler {
    fn amount(request: &AccessRequest) -> Result<f64, ActionError> {
        request
            .amount()
            .ok_or_else(|| ActionError::MissingAmount(request.action.clone()))
    }
}

impl ActionHandler for AcknowledgingHandler {
    fn perform(&self, request: &AccessRequest) -> Result<String, ActionError> {
        let message = match request.action.as_str() {
            "deposit" => format!("Deposit of ${:.2} approved", Self::amount(request)?),
            "withdrawal" => format!("Withdrawal of ${:.2} approved", Self::amount(request)?),
            "transfer" => format!("Transfer of ${:.2} approved", Self::amount(request)?),
            "approve_loan" => format!("Loan of ${:.2} approved", Self::amount(request)?),
            "view_balance" => "Balance inquiry approved".to_string(),
            "view_history" => "Transaction history retrieved".to_string(),
            "freeze_account" => format!("Freeze of account {} approved", request.resource.id),
            "close_account" => format!("Closure of account {} approved", request.resource.id),
            other => return Err(ActionError::UnknownAction(other.to_string())),
        };
        Ok(message)
    }
}
