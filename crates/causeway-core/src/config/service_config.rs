use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{PanelError, PanelResult};

/// Remote inference-service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL of the inference service.
    pub base_url: String,
    /// Overall request timeout (seconds). Bounds a hung remote call.
    pub request_timeout_secs: u64,
    /// TCP connect timeout (seconds).
    pub connect_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_SERVICE_URL.to_string(),
            request_timeout_secs: defaults::DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: defaults::DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl ServiceConfig {
    /// Parse a config from a TOML document.
    pub fn from_toml_str(content: &str) -> PanelResult<Self> {
        toml::from_str(content).map_err(|e| PanelError::Config {
            reason: e.to_string(),
        })
    }
}
