// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use downtimectl_client::{ClientError, DatadogClient, Downtime, DowntimeId};

/// Remote operations the downtime resource relies on.
///
/// [`DatadogClient`] is the production implementation.
#[async_trait]
pub trait DowntimeApi: Send + Sync {
    /// Schedules a downtime and returns the stored record.
    async fn create(&self, payload: &Downtime) -> Result<Downtime, ClientError>;

    /// Replaces the downtime `id` in place.
    async fn update(&self, id: DowntimeId, payload: &Downtime) -> Result<Downtime, ClientError>;

    /// Reads a downtime; a missing one is [`ClientError::NotFound`].
    async fn get(&self, id: DowntimeId) -> Result<Downtime, ClientError>;

    /// Cancels a downtime.
    async fn delete(&self, id: DowntimeId) -> Result<(), ClientError>;
}

#[async_trait]
impl DowntimeApi for DatadogClient {
    async fn create(&self, payload: &Downtime) -> Result<Downtime, ClientError> {
        self.create_downtime(payload).await
    }

    async fn update(&self, id: DowntimeId, payload: &Downtime) -> Result<Downtime, ClientError> {
        self.update_downtime(id, payload).await
    }

    async fn get(&self, id: DowntimeId) -> Result<Downtime, ClientError> {
        self.get_downtime(id).await
    }

    async fn delete(&self, id: DowntimeId) -> Result<(), ClientError> {
        self.delete_downtime(id).await
    }
}
