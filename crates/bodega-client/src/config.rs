//! # Client Configuration
//!
//! Where the backend lives and how long to wait for it.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Explicit ClientConfig passed to ApiClient::new (highest)            │
//! │                                                                         │
//! │  2. TOML config file, loaded by the host application                    │
//! │     base_url = "https://api.example.com/"                               │
//! │     timeout_secs = 10                                                   │
//! │                                                                         │
//! │  3. Default values (lowest priority)                                    │
//! │     http://localhost:8080/, 30 second timeout                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{ClientError, ClientResult};

/// Backend location and request timeout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL every endpoint path is joined onto.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: "http://localhost:8080/".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Parses a configuration from TOML text.
    ///
    /// Missing keys fall back to the defaults, so an empty document is a
    /// valid configuration.
    pub fn from_toml(text: &str) -> ClientResult<Self> {
        let config: ClientConfig =
            toml::from_str(text).map_err(|e| ClientError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations that cannot produce a working client.
    pub fn validate(&self) -> ClientResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ClientError::Config("base_url must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(ClientError::Config(
                "timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
