//! Client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Endpoint path used when nothing else is configured. Resolves against
/// the page origin on the web target; native targets need a full URL.
pub const DEFAULT_ENDPOINT: &str = "/echo";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid echo config: {0}")]
    InvalidConfig(String),
}

/// Configuration for the echo client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EchoConfig {
    /// URL the submission is posted to.
    pub endpoint: String,
    /// Optional deadline for one request. `None` waits indefinitely for
    /// transport completion or failure.
    pub timeout: Option<Duration>,
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
        }
    }
}

impl EchoConfig {
    /// Build a config from environment variables.
    ///
    /// - `ECHO_ENDPOINT` (default: `/echo`)
    /// - `ECHO_TIMEOUT_SECS` (optional; unset means no deadline)
    ///
    /// Unset or empty variables fall back to defaults. On targets
    /// without an environment (web) this always yields the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("ECHO_ENDPOINT").ok(),
            std::env::var("ECHO_TIMEOUT_SECS").ok(),
        )
    }

    fn from_vars(endpoint: Option<String>, timeout: Option<String>) -> Result<Self, ConfigError> {
        let endpoint = endpoint
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let timeout = match timeout.and_then(non_empty) {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    ConfigError::InvalidConfig(format!(
                        "ECHO_TIMEOUT_SECS={raw} is not a whole number of seconds"
                    ))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self { endpoint, timeout })
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}
