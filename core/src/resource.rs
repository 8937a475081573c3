// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Lifecycle of the downtime resource: plan, create, read, update, delete.

use downtimectl_client::DowntimeId;

use crate::api::DowntimeApi;
use crate::declaration::{DowntimeConfig, DowntimeDraft};
use crate::error::{Error, ValidationErrors};
use crate::state::DowntimeState;
use crate::window::Window;

/// The downtime resource, bound to an API implementation.
///
/// Every operation is a single round trip, nothing is cached or retried.
#[derive(Debug, Clone)]
pub struct DowntimeResource<A> {
    api: A,
}

impl<A: DowntimeApi> DowntimeResource<A> {
    /// Creates a resource driving `api`.
    pub const fn new(api: A) -> Self {
        Self { api }
    }

    /// The underlying API.
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Validates a declaration without contacting the API.
    ///
    /// # Errors
    ///
    /// Returns every validation failure found.
    pub fn plan(&self, config: &DowntimeConfig) -> Result<DowntimeDraft, ValidationErrors> {
        config.validate()
    }

    /// Schedules a new downtime and returns its state.
    ///
    /// # Errors
    ///
    /// Returns an error if the declaration is invalid or the API call fails.
    #[tracing::instrument(skip_all)]
    pub async fn create(&self, config: &DowntimeConfig) -> Result<DowntimeState, Error> {
        let draft = self.plan(config)?;
        let created = self.api.create(&draft.to_payload()).await?;
        let id = created.id.ok_or(Error::MissingId)?;
        tracing::info!(%id, "downtime scheduled");

        self.read(id, Some(&draft.window))
            .await?
            .ok_or(Error::Gone(id))
    }

    /// Reads the downtime `id`.
    ///
    /// Returns `None` when the downtime no longer exists: the API answered
    /// 404, or the record has been canceled or disabled. The caller should
    /// drop it from its tracked state.
    ///
    /// # Errors
    ///
    /// Returns an error on any other API failure.
    #[tracing::instrument(skip(self, declared))]
    pub async fn read(
        &self,
        id: DowntimeId,
        declared: Option<&Window>,
    ) -> Result<Option<DowntimeState>, Error> {
        match self.api.get(id).await {
            Ok(remote) if remote.is_canceled() => {
                tracing::info!(%id, "downtime was canceled, removing from state");
                Ok(None)
            }
            Ok(remote) => DowntimeState::from_remote(&remote, declared).map(Some),
            Err(e) if e.is_not_found() => {
                tracing::info!(%id, "downtime not found, removing from state");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Updates the downtime `id` in place; the identifier does not change.
    ///
    /// # Errors
    ///
    /// Returns an error if the declaration is invalid or the API call fails.
    #[tracing::instrument(skip(self, config))]
    pub async fn update(
        &self,
        id: DowntimeId,
        config: &DowntimeConfig,
    ) -> Result<DowntimeState, Error> {
        let draft = self.plan(config)?;
        self.api.update(id, &draft.to_payload()).await?;
        tracing::info!(%id, "downtime updated");

        self.read(id, Some(&draft.window))
            .await?
            .ok_or(Error::Gone(id))
    }

    /// Cancels the downtime `id`. The API keeps an inactive record of it.
    ///
    /// A downtime that is already gone is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error on any other API failure.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: DowntimeId) -> Result<(), Error> {
        match self.api.delete(id).await {
            Ok(()) => {
                tracing::info!(%id, "downtime canceled");
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                tracing::warn!(%id, "downtime already gone");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Whether the downtime `id` still exists.
    ///
    /// # Errors
    ///
    /// Returns an error on API failures other than not-found.
    pub async fn exists(&self, id: DowntimeId) -> Result<bool, Error> {
        Ok(self.read(id, None).await?.is_some())
    }
}
