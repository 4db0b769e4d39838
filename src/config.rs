//! Configuration management for the record registries.
//!
//! This module handles loading and validating configuration from environment variables,
//! reading a `.env` file first if one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use tracing_subscriber::EnvFilter;

/// Configuration for the registries and their logging.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default log filter directive (default: "error")
    pub log_level: String,

    /// Initial capacity reserved by each registry (default: 16)
    pub registry_initial_capacity: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging filter directive (default: "error")
    /// - `REGISTRY_INITIAL_CAPACITY`: Capacity hint per registry (default: 16)
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if let Err(e) = EnvFilter::try_new(&log_level) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: e.to_string(),
            });
        }

        let registry_initial_capacity = Self::parse_env_usize("REGISTRY_INITIAL_CAPACITY", 16)?;

        Ok(Config {
            log_level,
            registry_initial_capacity,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            registry_initial_capacity: 16,
        }
    }
}
