// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Datadog client for downtime operations.

use std::sync::Arc;

use reqwest::Method;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::HttpClient;
use crate::types::{Downtime, DowntimeId};

const DOWNTIME_PATH: &str = "/api/v1/downtime";

/// Client for the Datadog downtime endpoints.
///
/// # Example
///
/// ```ignore
/// use downtimectl_client::{ClientConfig, DatadogClient, Downtime};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ClientConfig {
///     api_key: "api-key".to_string(),
///     app_key: "app-key".to_string(),
///     ..Default::default()
/// };
///
/// let client = DatadogClient::new(config)?;
/// let created = client
///     .create_downtime(&Downtime {
///         scope: vec!["*".to_string()],
///         ..Default::default()
///     })
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DatadogClient {
    http: Arc<HttpClient>,
}

impl DatadogClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is incomplete or HTTP client
    /// initialization fails.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let http = HttpClient::new(config)?;
        Ok(Self {
            http: Arc::new(http),
        })
    }

    /// Schedules a new downtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the API rejects the payload.
    #[tracing::instrument(skip_all)]
    pub async fn create_downtime(&self, downtime: &Downtime) -> Result<Downtime, ClientError> {
        let resp = self
            .http
            .execute(
                self.http
                    .build_request(Method::POST, DOWNTIME_PATH)
                    .json(downtime),
                None,
            )
            .await?;

        let created: Downtime = resp.json().await?;
        tracing::debug!(id = ?created.id, "downtime created");
        Ok(created)
    }

    /// Updates an existing downtime in place.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if the downtime no longer exists.
    #[tracing::instrument(skip(self, downtime))]
    pub async fn update_downtime(
        &self,
        id: DowntimeId,
        downtime: &Downtime,
    ) -> Result<Downtime, ClientError> {
        let resp = self
            .http
            .execute(
                self.http
                    .build_request(Method::PUT, &Self::path(id))
                    .json(downtime),
                Some(id),
            )
            .await?;

        Ok(resp.json().await?)
    }

    /// Gets a downtime by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if the downtime does not exist.
    #[tracing::instrument(skip(self))]
    pub async fn get_downtime(&self, id: DowntimeId) -> Result<Downtime, ClientError> {
        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, &Self::path(id)), Some(id))
            .await?;

        Ok(resp.json().await?)
    }

    /// Cancels a downtime. The API keeps the record, marked as canceled.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if the downtime does not exist.
    #[tracing::instrument(skip(self))]
    pub async fn delete_downtime(&self, id: DowntimeId) -> Result<(), ClientError> {
        self.http
            .execute(
                self.http.build_request(Method::DELETE, &Self::path(id)),
                Some(id),
            )
            .await?;

        Ok(())
    }

    fn path(id: DowntimeId) -> String {
        format!("{DOWNTIME_PATH}/{id}")
    }
}
