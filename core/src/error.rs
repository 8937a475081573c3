// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use downtimectl_client::{ClientError, DowntimeId};

/// Errors raised while applying a downtime declaration.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The declaration failed local validation; nothing was sent.
    #[error("invalid declaration:\n{0}")]
    Validation(#[from] ValidationErrors),

    /// The API call failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The downtime vanished right after it was written.
    #[error("downtime {0} is gone after it was written")]
    Gone(DowntimeId),

    /// The API did not return an identifier for a created downtime.
    #[error("API response is missing the downtime id")]
    MissingId,

    /// The API returned a record that does not fit the resource model.
    #[error("unexpected downtime returned by the API: {0}")]
    InvalidRemote(String),
}

/// A single validation failure, tagged with the offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("\"{field}\": {kind}")]
pub struct ValidationError {
    /// Flattened attribute key, e.g. `recurrence.0.type`.
    pub field: String,
    /// What is wrong with it.
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    /// Creates a new validation error for `field`.
    pub fn new(field: impl Into<String>, kind: ValidationErrorKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }
}

/// Kinds of validation failures.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationErrorKind {
    /// A required attribute is missing.
    #[error("required field is not set")]
    Required,

    /// A computed attribute was set in a declaration.
    #[error("computed attribute cannot be set")]
    Computed,

    /// Two attributes that exclude each other are both set.
    #[error("conflicts with {0}")]
    ConflictsWith(String),

    /// Epoch and date-time forms are mixed across the two window ends.
    #[error("cannot be combined with {0}, use either start/end or start_date/end_date")]
    MixedWindow(String),

    /// The value is not an integer.
    #[error("expected an integer, got {0:?}")]
    NotAnInteger(String),

    /// The value is not a boolean.
    #[error("expected a boolean, got {0:?}")]
    NotABool(String),

    /// More blocks than the attribute allows.
    #[error("attribute supports {max} item maximum, config has {got} declared")]
    TooManyItems {
        /// Maximum number of items.
        max: usize,
        /// Number of items declared.
        got: usize,
    },

    /// Unknown recurrence type.
    #[error("expected type to be one of [days weeks months years], got {0}")]
    RecurrenceType(String),

    /// Malformed week-day list.
    #[error("{0:?} is not a valid week day list, expected comma separated Mon, Tue, Wed, Thu, Fri, Sat or Sun")]
    WeekDays(String),

    /// Malformed RFC3339 date-time.
    #[error("cannot parse {value:?} as RFC3339: {reason}")]
    DateTime {
        /// The declared value.
        value: String,
        /// Parser message.
        reason: String,
    },

    /// The value must be strictly positive.
    #[error("must be a positive integer, got {0}")]
    NotPositive(i64),

    /// The value is out of range for the field.
    #[error("value {0} is out of range")]
    OutOfRange(i64),

    /// Monitor ids are numeric.
    #[error("{0:?} is not a numeric monitor id")]
    MonitorId(String),

    /// The value must not be empty.
    #[error("must not be empty")]
    Empty,
}

/// All validation failures found in a declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds an error.
    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// Returns `true` if no errors were collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the errors.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Returns the errors reported for `field`.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.0.iter().filter(move |e| e.field == field)
    }

    /// `Ok(())` when empty, the collection itself otherwise.
    ///
    /// # Errors
    ///
    /// Returns `self` if it holds at least one error.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl Extend<ValidationError> for ValidationErrors {
    fn extend<T: IntoIterator<Item = ValidationError>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<T: IntoIterator<Item = ValidationError>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
