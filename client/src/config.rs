// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::error::ClientError;

/// Default API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.datadoghq.com";

/// Datadog API client configuration.
#[derive(Clone, serde::Deserialize)]
pub struct ClientConfig {
    /// Base URL of the API, without the `/api/v1` suffix.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// API key, sent as `DD-API-KEY`.
    #[serde(default)]
    pub api_key: String,
    /// Application key, sent as `DD-APPLICATION-KEY`.
    #[serde(default)]
    pub app_key: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ClientConfig {
    /// Checks that both keys are present.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] naming the first missing key.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.api_key.trim().is_empty() {
            return Err(ClientError::Config("api_key is not set".to_string()));
        }
        if self.app_key.trim().is_empty() {
            return Err(ClientError::Config("app_key is not set".to_string()));
        }
        if self.api_url.trim().is_empty() {
            return Err(ClientError::Config("api_url is empty".to_string()));
        }
        Ok(())
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("downtimectl/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Keys are never printed.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &redact(&self.api_key))
            .field("app_key", &redact(&self.app_key))
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn redact(key: &str) -> &'static str {
    if key.is_empty() { "<unset>" } else { "<redacted>" }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: String::new(),
            app_key: String::new(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
