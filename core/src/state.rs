// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use downtimectl_client::{Downtime, DowntimeId};

use crate::attributes::AttributeMap;
use crate::error::Error;
use crate::recurrence::RecurrenceRule;
use crate::scope::Scope;
use crate::window::Window;

/// A tracked downtime, as last read from the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DowntimeState {
    /// Identifier assigned by the API.
    pub id: DowntimeId,
    /// Scopes.
    pub scope: Vec<Scope>,
    /// Window, in the form it was declared with.
    pub window: Window,
    /// Message.
    pub message: Option<String>,
    /// Monitor restriction.
    pub monitor_id: Option<u64>,
    /// Recurrence rule.
    pub recurrence: Option<RecurrenceRule>,
    /// Whether the downtime is in effect right now.
    pub active: bool,
    /// Whether the API has disabled the downtime.
    pub disabled: bool,
}

impl DowntimeState {
    /// Builds the state from an API record.
    ///
    /// `declared` is the window of the declaration being tracked, used to keep
    /// the date-time form when it was declared that way.
    ///
    /// # Errors
    ///
    /// Returns an error if the record has no id or an invalid recurrence.
    pub fn from_remote(remote: &Downtime, declared: Option<&Window>) -> Result<Self, Error> {
        let id = remote.id.ok_or(Error::MissingId)?;
        let window = declared
            .unwrap_or(&Window::Unscheduled)
            .read_back(remote.start, remote.end);
        let recurrence = remote
            .recurrence
            .as_ref()
            .map(RecurrenceRule::from_wire)
            .transpose()?;

        Ok(Self {
            id,
            scope: remote.scope.iter().map(|s| Scope::from(s.as_str())).collect(),
            window,
            message: remote
                .message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string),
            monitor_id: remote.monitor_id,
            recurrence,
            active: remote.active.unwrap_or(false),
            disabled: remote.disabled.unwrap_or(false),
        })
    }

    /// Flattens the state into attribute keys such as `recurrence.0.type`.
    #[must_use]
    pub fn attributes(&self) -> AttributeMap {
        let mut attrs = AttributeMap::new();
        attrs.insert("id", self.id);
        attrs.insert_list("scope", &self.scope);
        self.window.write_attributes(&mut attrs);
        attrs.insert_opt("message", self.message.as_ref());
        attrs.insert_opt("monitor_id", self.monitor_id);
        attrs.insert("active", self.active);
        attrs.insert("disabled", self.disabled);

        match &self.recurrence {
            None => attrs.insert("recurrence.#", 0),
            Some(rule) => {
                attrs.insert("recurrence.#", 1);
                attrs.insert("recurrence.0.type", rule.kind);
                attrs.insert("recurrence.0.period", rule.period);
                if !rule.week_days.is_empty() {
                    attrs.insert_list("recurrence.0.week_days", &rule.week_days);
                }
                attrs.insert_opt("recurrence.0.until_date", rule.until_date);
                attrs.insert_opt("recurrence.0.until_occurrences", rule.until_occurrences);
            }
        }
        attrs
    }
}
