//! Server configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use warden_sdk::{BusinessHours, EngineConfig};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Enable metrics
    pub enable_metrics: bool,

    /// Log level
    pub log_level: String,

    /// Load the built-in banking rule set at startup
    pub load_default_policy: bool,

    /// Window used when a request does not say whether it is business hours
    pub business_hours: BusinessHours,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            enable_metrics: true,
            log_level: "info".to_string(),
            load_default_policy: true,
            business_hours: BusinessHours::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        Self::from_builder(
            config::Config::builder()
                .add_source(config::File::with_name("config/server").required(false))
                .add_source(config::Environment::with_prefix("WARDEN")),
        )
    }

    /// Load configuration from a specific file, still honoring `WARDEN_*`
    /// environment overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        Self::from_builder(
            config::Config::builder()
                .add_source(config::File::from(path.as_ref()))
                .add_source(config::Environment::with_prefix("WARDEN")),
        )
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> anyhow::Result<Self> {
        match builder.build() {
            Ok(cfg) => cfg
                .try_deserialize()
                .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e)),
            Err(e) => {
                tracing::info!("No usable config source ({}), using default configuration", e);
                Ok(Self::default())
            }
        }
    }

    /// Engine settings derived from the server configuration
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::new()
            .with_default_policy(self.load_default_policy)
            .with_business_hours(self.business_hours.start_hour, self.business_hours.end_hour)
            .enable_metrics(self.enable_metrics)
    }
}
