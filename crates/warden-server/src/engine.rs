//! Authorizer initialization

use crate::api::rest::AppState;
use crate::config::ServerConfig;
use crate::directory::EntityDirectory;
use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use warden_sdk::{AcknowledgingHandler, AuthorizerBuilder, TransactionExecutor};

/// Build the shared application state from configuration
pub fn init_state(config: &ServerConfig) -> Result<AppState> {
    let authorizer = AuthorizerBuilder::new()
        .with_config(config.engine_config())
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build authorizer: {}", e))?;

    info!(
        rules = authorizer.engine().len(),
        default_policy = config.load_default_policy,
        "Authorizer ready"
    );

    Ok(AppState {
        executor: Arc::new(TransactionExecutor::new(authorizer, AcknowledgingHandler)),
        directory: Arc::new(EntityDirectory::new()),
    })
}
