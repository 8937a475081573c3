// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence rules: unit, period, week days and end conditions.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use downtimectl_client::Recurrence;

use crate::error::Error;

/// A token that does not belong to a closed set of values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {what} {value:?}")]
pub struct UnknownToken {
    what: &'static str,
    value: String,
}

/// Unit of a recurrence rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecurrenceType {
    /// Repeat every `period` days.
    Days,
    /// Repeat every `period` weeks, optionally on given week days.
    Weeks,
    /// Repeat every `period` months.
    Months,
    /// Repeat every `period` years.
    Years,
}

impl RecurrenceType {
    /// All recurrence types, in the order the API documents them.
    pub const ALL: [Self; 4] = [Self::Days, Self::Weeks, Self::Months, Self::Years];

    /// The token used by the API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
            Self::Years => "years",
        }
    }
}

impl fmt::Display for RecurrenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecurrenceType {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownToken {
                what: "recurrence type",
                value: s.to_string(),
            })
    }
}

/// Day of the week, in the three-letter form the API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    /// Monday.
    Mon,
    /// Tuesday.
    Tue,
    /// Wednesday.
    Wed,
    /// Thursday.
    Thu,
    /// Friday.
    Fri,
    /// Saturday.
    Sat,
    /// Sunday.
    Sun,
}

impl Weekday {
    /// All week days, Monday first.
    pub const ALL: [Self; 7] = [
        Self::Mon,
        Self::Tue,
        Self::Wed,
        Self::Thu,
        Self::Fri,
        Self::Sat,
        Self::Sun,
    ];

    /// The three-letter code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
            Self::Sat => "Sat",
            Self::Sun => "Sun",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = UnknownToken;

    /// Exact, case-sensitive match. `"mon"`, `"Monday"` and `" Mon"` are all rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownToken {
                what: "week day",
                value: s.to_string(),
            })
    }
}

/// A repeating schedule applied to the downtime window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    /// Unit.
    pub kind: RecurrenceType,
    /// Repeat every `period` units.
    pub period: NonZeroU32,
    /// Week days for weekly rules, in declaration order. Empty when unset.
    pub week_days: Vec<Weekday>,
    /// Stop after this instant, in epoch seconds.
    pub until_date: Option<i64>,
    /// Stop after this many occurrences.
    ///
    /// Both end conditions may be set, the API decides which one wins.
    pub until_occurrences: Option<u32>,
}

impl RecurrenceRule {
    /// Creates a rule without week days or end condition.
    #[must_use]
    pub const fn new(kind: RecurrenceType, period: NonZeroU32) -> Self {
        Self {
            kind,
            period,
            week_days: Vec::new(),
            until_date: None,
            until_occurrences: None,
        }
    }

    /// Converts to the wire representation.
    #[must_use]
    pub fn to_wire(&self) -> Recurrence {
        Recurrence {
            kind: self.kind.as_str().to_string(),
            period: self.period.get(),
            week_days: (!self.week_days.is_empty())
                .then(|| self.week_days.iter().map(ToString::to_string).collect()),
            until_date: self.until_date,
            until_occurrences: self.until_occurrences,
        }
    }

    /// Reads a rule returned by the API.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRemote`] if the API sent a token outside the
    /// closed sets or a zero period.
    pub fn from_wire(wire: &Recurrence) -> Result<Self, Error> {
        let kind = wire
            .kind
            .parse()
            .map_err(|e: UnknownToken| Error::InvalidRemote(e.to_string()))?;
        let period = NonZeroU32::new(wire.period)
            .ok_or_else(|| Error::InvalidRemote("recurrence period is zero".to_string()))?;
        let week_days = wire
            .week_days
            .iter()
            .flatten()
            .map(|d| d.parse())
            .collect::<Result<Vec<Weekday>, _>>()
            .map_err(|e| Error::InvalidRemote(e.to_string()))?;

        Ok(Self {
            kind,
            period,
            week_days,
            until_date: wire.until_date,
            until_occurrences: wire.until_occurrences,
        })
    }
}
