// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory stand-in for the downtime API.
//!
//! Deleting keeps the record and marks it canceled, like the real API.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use downtimectl_client::{ClientError, Downtime, DowntimeId};
use downtimectl_core::DowntimeApi;

const FIRST_ID: u64 = 1000;
const CANCELED_AT: i64 = 1_735_700_000;

/// A call received by [`MemoryApi`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Create,
    Update(DowntimeId),
    Get(DowntimeId),
    Delete(DowntimeId),
}

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    records: BTreeMap<DowntimeId, Downtime>,
    calls: Vec<Call>,
}

#[derive(Debug, Default)]
pub struct MemoryApi {
    inner: Mutex<Inner>,
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// The stored record for `id`.
    pub fn record(&self, id: DowntimeId) -> Option<Downtime> {
        self.inner.lock().unwrap().records.get(&id).cloned()
    }

    /// Removes a record, as if it had been purged outside of the resource.
    pub fn purge(&self, id: DowntimeId) {
        self.inner.lock().unwrap().records.remove(&id);
    }

    /// Marks a record as disabled.
    pub fn disable(&self, id: DowntimeId) {
        if let Some(record) = self.inner.lock().unwrap().records.get_mut(&id) {
            record.disabled = Some(true);
        }
    }

    /// Moves the end of a record, as if it had been edited elsewhere.
    pub fn set_end(&self, id: DowntimeId, end: i64) {
        if let Some(record) = self.inner.lock().unwrap().records.get_mut(&id) {
            record.end = Some(end);
        }
    }
}

fn stored(id: DowntimeId, payload: &Downtime) -> Downtime {
    Downtime {
        id: Some(id),
        active: Some(false),
        disabled: Some(false),
        canceled: None,
        ..payload.clone()
    }
}

#[async_trait]
impl DowntimeApi for MemoryApi {
    async fn create(&self, payload: &Downtime) -> Result<Downtime, ClientError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::Create);
        let id = DowntimeId::new(FIRST_ID + inner.next_id);
        inner.next_id += 1;
        let record = stored(id, payload);
        inner.records.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, id: DowntimeId, payload: &Downtime) -> Result<Downtime, ClientError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::Update(id));
        let record = inner.records.get_mut(&id).ok_or(ClientError::NotFound(id))?;
        *record = stored(id, payload);
        Ok(record.clone())
    }

    async fn get(&self, id: DowntimeId) -> Result<Downtime, ClientError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::Get(id));
        inner
            .records
            .get(&id)
            .cloned()
            .ok_or(ClientError::NotFound(id))
    }

    async fn delete(&self, id: DowntimeId) -> Result<(), ClientError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::Delete(id));
        let record = inner.records.get_mut(&id).ok_or(ClientError::NotFound(id))?;
        record.active = Some(false);
        record.canceled = Some(CANCELED_AT);
        Ok(())
    }
}
