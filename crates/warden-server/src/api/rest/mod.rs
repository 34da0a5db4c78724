//! REST API implementation
//!
//! - types: Request/response type definitions and application state
//! - extractors: Custom request extractors
//! - handlers: API endpoint handlers
//! - router: Router creation and configuration
//! - tests: Unit tests for payload conversions

mod extractors;
mod handlers;
mod router;
pub mod types;

// Re-export public API
pub use extractors::JsonExtractor;
pub use router::create_router;
pub use types::{
    AppState, CreateActorPayload, CreateResourcePayload, DecideRequestPayload, DecisionQueryParams,
    ExportParams, HealthResponse, ServiceInfo, TransactionPayload,
};
