//! Transaction execution behind an authorization check
//!
//! - `executor`: builds the request, authorizes it, and dispatches on permit
//! - `handler`: the business action seam and its acknowledging default

mod executor;
mod handler;

pub use executor::{TransactionExecutor, TransactionOutcome, TransactionRecord, TransactionRequest};
pub use handler::{AcknowledgingHandler, ActionError, ActionHandler};
