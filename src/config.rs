//! Configuration management for the atelier stock core
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with ATELIER_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Purchase alert policy
    pub alerts: AlertConfig,

    /// Cache configuration
    pub cache: CacheConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AlertConfig {
    /// Days after which an unresolved purchase alert counts as overdue
    pub overdue_after_days: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    /// Time-to-live for the cached tailor contact listing, in seconds
    pub contacts_ttl_secs: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("ATELIER_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("alerts.overdue_after_days", 7)?
            .set_default("cache.contacts_ttl_secs", 3600)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (ATELIER_ prefix)
            .add_source(
                Environment::with_prefix("ATELIER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            overdue_after_days: 7,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            contacts_ttl_secs: 3600,
        }
    }
}
