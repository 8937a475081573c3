// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The downtime window and its two declaration forms.
//!
//! A window is declared either with epoch seconds (`start`/`end`) or with
//! RFC3339 date-times (`start_date`/`end_date`). Whichever form is used, the
//! API receives a single epoch pair.

use std::sync::OnceLock;

use jiff::Timestamp;
use regex::Regex;

use crate::attributes::AttributeMap;
use crate::error::{ValidationError, ValidationErrorKind};

/// An RFC3339 bound, keeping the text it was declared with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateBound {
    raw: String,
    at: Timestamp,
}

impl DateBound {
    /// Parses an RFC3339 date-time with offset, e.g. `2099-10-31T11:11:00+01:00`.
    ///
    /// # Errors
    ///
    /// Returns a validation error tagged with `field` if `raw` is not a valid
    /// date-time with offset.
    pub fn parse(field: &str, raw: &str) -> Result<Self, ValidationError> {
        // jiff alone also takes basic format, bracketed zones and short offsets
        const RE: &str = r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d+)?(Z|[+-]\d{2}:\d{2})$";
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());

        let invalid = |reason: String| {
            ValidationError::new(
                field,
                ValidationErrorKind::DateTime {
                    value: raw.to_string(),
                    reason,
                },
            )
        };

        if !re.is_match(raw) {
            return Err(invalid(
                "expected YYYY-MM-DDTHH:MM:SS with Z or a +HH:MM offset".to_string(),
            ));
        }
        raw.parse::<Timestamp>()
            .map(|at| Self {
                raw: raw.to_string(),
                at,
            })
            .map_err(|e| invalid(e.to_string()))
    }

    /// A bound rendered from an epoch instant, in UTC.
    ///
    /// Returns `None` if the instant is out of the supported range.
    #[must_use]
    pub fn from_epoch(seconds: i64) -> Option<Self> {
        Timestamp::from_second(seconds).ok().map(|at| Self {
            raw: at.to_string(),
            at,
        })
    }

    /// The declared text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The instant in epoch seconds.
    #[must_use]
    pub fn epoch(&self) -> i64 {
        self.at.as_second()
    }
}

/// When the downtime is in effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Window {
    /// No bounds declared; the API starts the downtime immediately and keeps
    /// it open-ended.
    #[default]
    Unscheduled,
    /// Epoch-second bounds.
    Epoch {
        /// `start`.
        start: Option<i64>,
        /// `end`.
        end: Option<i64>,
    },
    /// RFC3339 bounds.
    Dates {
        /// `start_date`.
        start: Option<DateBound>,
        /// `end_date`.
        end: Option<DateBound>,
    },
}

impl Window {
    /// Picks the declared form and parses it.
    ///
    /// `start_date` conflicts with `start` and `end_date` with `end`; each
    /// conflict is reported separately. Mixing forms across the two ends is
    /// rejected too.
    ///
    /// # Errors
    ///
    /// Returns every conflict found, or the RFC3339 parse failures.
    pub fn reconcile(
        start: Option<i64>,
        end: Option<i64>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Self, Vec<ValidationError>> {
        let mut errors = Vec::new();
        if start_date.is_some() && start.is_some() {
            errors.push(ValidationError::new(
                "start_date",
                ValidationErrorKind::ConflictsWith("start".to_string()),
            ));
        }
        if end_date.is_some() && end.is_some() {
            errors.push(ValidationError::new(
                "end_date",
                ValidationErrorKind::ConflictsWith("end".to_string()),
            ));
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let epoch = start.is_some() || end.is_some();
        let dates = start_date.is_some() || end_date.is_some();
        match (epoch, dates) {
            (false, false) => Ok(Self::Unscheduled),
            (true, false) => Ok(Self::Epoch { start, end }),
            (false, true) => {
                let parse = |field, raw: Option<&str>| raw.map(|raw| DateBound::parse(field, raw));
                let start = parse("start_date", start_date).transpose();
                let end = parse("end_date", end_date).transpose();
                match (start, end) {
                    (Ok(start), Ok(end)) => Ok(Self::Dates { start, end }),
                    (start, end) => Err(start.err().into_iter().chain(end.err()).collect()),
                }
            }
            (true, true) => {
                let (field, other) = if start_date.is_some() {
                    ("start_date", "end")
                } else {
                    ("end_date", "start")
                };
                Err(vec![ValidationError::new(
                    field,
                    ValidationErrorKind::MixedWindow(other.to_string()),
                )])
            }
        }
    }

    /// The canonical epoch pair sent to the API.
    #[must_use]
    pub fn instants(&self) -> (Option<i64>, Option<i64>) {
        match self {
            Self::Unscheduled => (None, None),
            Self::Epoch { start, end } => (*start, *end),
            Self::Dates { start, end } => (
                start.as_ref().map(DateBound::epoch),
                end.as_ref().map(DateBound::epoch),
            ),
        }
    }

    /// The window to track after reading `start`/`end` back from the API.
    ///
    /// The date form keeps the declared text for every end whose instant the
    /// API still reports; a moved end is rendered from the remote value.
    #[must_use]
    pub fn read_back(&self, start: Option<i64>, end: Option<i64>) -> Self {
        match self {
            Self::Unscheduled | Self::Epoch { .. } => {
                if start.is_none() && end.is_none() {
                    Self::Unscheduled
                } else {
                    Self::Epoch { start, end }
                }
            }
            Self::Dates {
                start: declared_start,
                end: declared_end,
            } => {
                let keep = |declared: &Option<DateBound>, remote: Option<i64>| match declared {
                    Some(bound) if Some(bound.epoch()) == remote => Some(bound.clone()),
                    _ => remote.and_then(DateBound::from_epoch),
                };
                Self::Dates {
                    start: keep(declared_start, start),
                    end: keep(declared_end, end),
                }
            }
        }
    }

    /// Writes the window into `attrs` under the keys of its declared form.
    pub fn write_attributes(&self, attrs: &mut AttributeMap) {
        match self {
            Self::Unscheduled => {}
            Self::Epoch { start, end } => {
                attrs.insert_opt("start", *start);
                attrs.insert_opt("end", *end);
            }
            Self::Dates { start, end } => {
                attrs.insert_opt("start_date", start.as_ref().map(DateBound::as_str));
                attrs.insert_opt("end_date", end.as_ref().map(DateBound::as_str));
            }
        }
    }
}
