// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use downtimectl_core::ClientConfig;
use tokio::fs;

const APP_NAME: &str = "downtimectl";

const CONFIG_ENV: &str = "DOWNTIMECTL_CONFIG";
const API_KEY_ENV: &str = "DD_API_KEY";
const APP_KEY_ENV: &str = "DD_APP_KEY";
const HOST_ENV: &str = "DD_HOST";

/// Resolves the configuration.
///
/// The file is taken from `path`, then `DOWNTIMECTL_CONFIG`, then the user
/// config directory. A missing default file is not an error, so that keys
/// can come from the environment alone. `DD_API_KEY`, `DD_APP_KEY` and
/// `DD_HOST` override the file.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        Some(path)
    } else if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        Some(PathBuf::from(env_path))
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if config.exists() {
            Some(config)
        } else {
            tracing::debug!(path = %config.display(), "no config file, using environment");
            None
        }
    };

    let mut config = match path {
        Some(path) => fs::read_to_string(&path)
            .await
            .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
            .parse::<Config>()?,
        None => Config::default(),
    };
    config.apply_env();
    Ok(config)
}

/// Configuration for downtimectl.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Datadog API access.
    #[serde(default)]
    pub client: ClientConfig,
}

impl Config {
    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            self.client.api_key = key;
        }
        if let Ok(key) = std::env::var(APP_KEY_ENV) {
            self.client.app_key = key;
        }
        if let Ok(host) = std::env::var(HOST_ENV) {
            self.client.api_url = normalize_host(&host);
        }
    }
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

/// A bare host such as `api.datadoghq.eu` is served over https.
fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.contains("://") {
        host.to_string()
    } else {
        format!("https://{host}")
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}
