// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Downtime identifier assigned by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DowntimeId(u64);

impl DowntimeId {
    /// Creates a new `DowntimeId`.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DowntimeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for DowntimeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for DowntimeId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// A downtime as sent to and returned by the API.
///
/// Request payloads leave the server-populated fields (`id`, `active`,
/// `disabled`, `canceled`) unset; they are skipped when serializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Downtime {
    /// Identifier, set by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DowntimeId>,
    /// Scopes the downtime applies to.
    #[serde(default)]
    pub scope: Vec<String>,
    /// Start, in epoch seconds. The API starts immediately when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    /// End, in epoch seconds. Open-ended when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    /// Message attached to the notifications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Monitor the downtime is restricted to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_id: Option<u64>,
    /// Recurrence rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
    /// Whether the downtime is currently in effect.
    #[serde(default, skip_serializing)]
    pub active: Option<bool>,
    /// Whether the downtime has been disabled.
    #[serde(default, skip_serializing)]
    pub disabled: Option<bool>,
    /// Epoch seconds at which the downtime was canceled.
    #[serde(default, skip_serializing)]
    pub canceled: Option<i64>,
}

impl Downtime {
    /// Returns `true` once the API has canceled or disabled the downtime.
    ///
    /// Deleting a downtime does not remove the record; it stays readable with
    /// one of these markers set.
    #[must_use]
    pub fn is_canceled(&self) -> bool {
        self.canceled.is_some() || self.disabled == Some(true)
    }
}

/// Recurrence rule on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurrence {
    /// One of `days`, `weeks`, `months`, `years`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Repeat every `period` units.
    pub period: u32,
    /// Three-letter weekday codes, for weekly rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_days: Option<Vec<String>>,
    /// Epoch seconds after which the rule stops.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until_date: Option<i64>,
    /// Number of occurrences after which the rule stops.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until_occurrences: Option<u32>,
}
