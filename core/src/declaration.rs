// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Downtime declarations and their validated, typed form.

use std::num::NonZeroU32;

use downtimectl_client::Downtime;

use crate::attributes::AttributeMap;
use crate::error::{ValidationError, ValidationErrorKind, ValidationErrors};
use crate::recurrence::{RecurrenceRule, RecurrenceType, Weekday};
use crate::schema::DOWNTIME_SCHEMA;
use crate::scope::Scope;
use crate::window::Window;

/// A downtime as written by the operator, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(deny_unknown_fields)]
pub struct DowntimeConfig {
    /// Scopes, e.g. `["*"]` or `["host:A", "host:B"]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<Vec<String>>,
    /// Start in epoch seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    /// End in epoch seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    /// Start as an RFC3339 date-time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// End as an RFC3339 date-time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Notification message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Monitor to restrict the downtime to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_id: Option<String>,
    /// At most one recurrence block.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recurrence: Vec<RecurrenceConfig>,
    /// Computed; rejected when declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Computed; rejected when declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

/// A `recurrence` block as written by the operator.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(deny_unknown_fields)]
pub struct RecurrenceConfig {
    /// `days`, `weeks`, `months` or `years`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Repeat every `period` units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<i64>,
    /// Week days, for weekly rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_days: Option<Vec<String>>,
    /// Stop after this instant, epoch seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until_date: Option<i64>,
    /// Stop after this many occurrences.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until_occurrences: Option<i64>,
}

impl DowntimeConfig {
    /// Flattens the declaration into attribute keys.
    #[must_use]
    pub fn to_attributes(&self) -> AttributeMap {
        let mut attrs = AttributeMap::new();
        if let Some(scope) = &self.scope {
            attrs.insert_list("scope", scope);
        }
        attrs.insert_opt("start", self.start);
        attrs.insert_opt("end", self.end);
        attrs.insert_opt("start_date", self.start_date.as_ref());
        attrs.insert_opt("end_date", self.end_date.as_ref());
        attrs.insert_opt("message", self.message.as_ref());
        attrs.insert_opt("monitor_id", self.monitor_id.as_ref());
        attrs.insert_opt("active", self.active);
        attrs.insert_opt("disabled", self.disabled);

        if !self.recurrence.is_empty() {
            attrs.insert("recurrence.#", self.recurrence.len());
        }
        for (i, rec) in self.recurrence.iter().enumerate() {
            let prefix = format!("recurrence.{i}");
            attrs.insert_opt(format!("{prefix}.type"), rec.kind.as_ref());
            attrs.insert_opt(format!("{prefix}.period"), rec.period);
            if let Some(days) = &rec.week_days {
                attrs.insert_list(&format!("{prefix}.week_days"), days);
            }
            attrs.insert_opt(format!("{prefix}.until_date"), rec.until_date);
            attrs.insert_opt(format!("{prefix}.until_occurrences"), rec.until_occurrences);
        }
        attrs
    }

    /// Runs the schema validators, then converts into a typed draft.
    ///
    /// Nothing here touches the network.
    ///
    /// # Errors
    ///
    /// Returns every validation failure found.
    pub fn validate(&self) -> Result<DowntimeDraft, ValidationErrors> {
        DOWNTIME_SCHEMA
            .validate(&self.to_attributes())
            .into_iter()
            .collect::<ValidationErrors>()
            .into_result()?;
        self.to_draft()
    }

    fn to_draft(&self) -> Result<DowntimeDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let scope: Vec<Scope> = self
            .scope
            .iter()
            .flatten()
            .map(|s| Scope::from(s.as_str()))
            .collect();
        for (i, s) in self.scope.iter().flatten().enumerate() {
            if s.trim().is_empty() {
                errors.push(ValidationError::new(
                    format!("scope.{i}"),
                    ValidationErrorKind::Empty,
                ));
            }
        }

        let window = Window::reconcile(
            self.start,
            self.end,
            self.start_date.as_deref(),
            self.end_date.as_deref(),
        )
        .unwrap_or_else(|e| {
            errors.extend(e);
            Window::Unscheduled
        });

        let monitor_id = self.monitor_id.as_deref().and_then(|raw| {
            raw.trim()
                .parse::<u64>()
                .map_err(|_| {
                    errors.push(ValidationError::new(
                        "monitor_id",
                        ValidationErrorKind::MonitorId(raw.to_string()),
                    ));
                })
                .ok()
        });

        let recurrence = match self.recurrence.first() {
            Some(rec) => rec.to_rule("recurrence.0", &mut errors),
            None => None,
        };

        errors.into_result()?;
        Ok(DowntimeDraft {
            scope,
            window,
            message: normalize_message(self.message.as_deref()),
            monitor_id,
            recurrence,
        })
    }
}

impl RecurrenceConfig {
    fn to_rule(&self, prefix: &str, errors: &mut ValidationErrors) -> Option<RecurrenceRule> {
        let kind = self.kind.as_deref()?.parse::<RecurrenceType>().ok()?;

        let period = positive_u32(format!("{prefix}.period"), self.period?, errors);
        let until_occurrences = self
            .until_occurrences
            .map(|n| positive_u32(format!("{prefix}.until_occurrences"), n, errors));
        if self.week_days.as_ref().is_some_and(Vec::is_empty) {
            errors.push(ValidationError::new(
                format!("{prefix}.week_days"),
                ValidationErrorKind::Empty,
            ));
            return None;
        }
        let period = period?;
        if until_occurrences == Some(None) {
            return None;
        }

        let week_days = self
            .week_days
            .iter()
            .flatten()
            .filter_map(|d| d.parse::<Weekday>().ok())
            .collect();

        let rule = RecurrenceRule {
            kind,
            period,
            week_days,
            until_date: self.until_date,
            until_occurrences: until_occurrences.flatten().map(NonZeroU32::get),
        };
        if !rule.week_days.is_empty() && rule.kind != RecurrenceType::Weeks {
            tracing::warn!(kind = %rule.kind, "week_days only apply to weekly recurrences");
        }
        Some(rule)
    }
}

fn positive_u32(field: String, value: i64, errors: &mut ValidationErrors) -> Option<NonZeroU32> {
    let kind = match u32::try_from(value) {
        Ok(n) => match NonZeroU32::new(n) {
            Some(n) => return Some(n),
            None => ValidationErrorKind::NotPositive(value),
        },
        Err(_) if value > 0 => ValidationErrorKind::OutOfRange(value),
        Err(_) => ValidationErrorKind::NotPositive(value),
    };
    errors.push(ValidationError::new(field, kind));
    None
}

/// Leading and trailing whitespace is not significant in messages.
fn normalize_message(message: Option<&str>) -> Option<String> {
    message
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// A validated downtime, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DowntimeDraft {
    /// Scopes.
    pub scope: Vec<Scope>,
    /// When the downtime is in effect.
    pub window: Window,
    /// Trimmed message.
    pub message: Option<String>,
    /// Monitor restriction.
    pub monitor_id: Option<u64>,
    /// Recurrence rule.
    pub recurrence: Option<RecurrenceRule>,
}

impl DowntimeDraft {
    /// Builds the create/update payload, with the window as one epoch pair.
    #[must_use]
    pub fn to_payload(&self) -> Downtime {
        let (start, end) = self.window.instants();
        Downtime {
            scope: self.scope.iter().map(ToString::to_string).collect(),
            start,
            end,
            message: self.message.clone(),
            monitor_id: self.monitor_id,
            recurrence: self.recurrence.as_ref().map(RecurrenceRule::to_wire),
            ..Default::default()
        }
    }
}
