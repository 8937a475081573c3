// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with API key authentication and status mapping.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::types::DowntimeId;

const API_KEY_HEADER: &str = "DD-API-KEY";
const APP_KEY_HEADER: &str = "DD-APPLICATION-KEY";

/// HTTP client for the downtime endpoints.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client, config })
    }

    /// Builds a request for `path` (relative to the API root) with the key headers.
    pub fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.api_url.trim_end_matches('/'), path);
        self.client
            .request(method, url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(APP_KEY_HEADER, &self.config.app_key)
            .header("Accept", "application/json")
    }

    /// Executes a request and checks for HTTP errors.
    ///
    /// A 404 is reported as [`ClientError::NotFound`] when the request targets
    /// a known downtime, so callers can tell a vanished resource apart from
    /// other failures.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error status code.
    pub async fn execute(
        &self,
        req: RequestBuilder,
        target: Option<DowntimeId>,
    ) -> Result<Response, ClientError> {
        let resp = req.send().await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        if let (StatusCode::NOT_FOUND, Some(id)) = (status, target) {
            return Err(ClientError::NotFound(id));
        }

        let text = resp
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read response".to_string());
        tracing::debug!(%status, body = %text, "API returned an error status");
        Err(ClientError::Api {
            status: status.as_u16(),
            message: text,
        })
    }
}
