//! Server configuration.
//!
//! Loaded from environment variables, with a `.env` file in the working
//! directory picked up if present.

use std::net::SocketAddr;

use crate::travel::{DEFAULT_BASE_URL, TravelCostConfig};

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Default static assets directory.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Errors loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Required variable not set
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    /// Variable set to an unusable value
    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}

/// Configuration for the whole server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Distance-matrix client settings
    pub travel: TravelCostConfig,
    /// Address to listen on
    pub bind_addr: SocketAddr,
    /// Directory served under `/static`
    pub static_dir: String,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// Required:
    /// - `GOOGLE_MAPS_API_KEY`: distance-matrix API key
    ///
    /// Optional:
    /// - `DISTANCE_MATRIX_URL`: endpoint override
    /// - `BIND_ADDR`: listen address (default `127.0.0.1:3000`)
    /// - `STATIC_DIR`: static assets directory (default `static`)
    /// - `REQUEST_TIMEOUT_SECS`: outbound request timeout (default none)
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration using `lookup` to read each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GOOGLE_MAPS_API_KEY")
            .ok_or(ConfigError::MissingVar("GOOGLE_MAPS_API_KEY"))?;
        if api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "GOOGLE_MAPS_API_KEY",
                reason: "cannot be empty".to_string(),
            });
        }

        let base_url =
            lookup("DISTANCE_MATRIX_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "DISTANCE_MATRIX_URL",
                reason: "must start with http:// or https://".to_string(),
            });
        }

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                var: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let static_dir = lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        let mut travel = TravelCostConfig::new(api_key).with_base_url(base_url);
        if let Some(raw) = lookup("REQUEST_TIMEOUT_SECS") {
            let secs = raw.parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT_SECS",
                reason: e.to_string(),
            })?;
            travel = travel.with_timeout(secs);
        }

        Ok(Self {
            travel,
            bind_addr,
            static_dir,
        })
    }
}
