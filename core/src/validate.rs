// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Field validators registered in the downtime schema.

use crate::error::{ValidationError, ValidationErrorKind};
use crate::recurrence::{RecurrenceType, Weekday};

/// A field validator: takes the raw value and its attribute key.
pub type ValidateFn = fn(&str, &str) -> Vec<ValidationError>;

/// Accepts exactly one of `days`, `weeks`, `months`, `years`.
#[must_use]
pub fn validate_recurrence_type(value: &str, key: &str) -> Vec<ValidationError> {
    match value.parse::<RecurrenceType>() {
        Ok(_) => Vec::new(),
        Err(_) => vec![ValidationError::new(
            key,
            ValidationErrorKind::RecurrenceType(value.to_string()),
        )],
    }
}

/// Accepts comma separated three-letter week days (`Mon`, `Sat,Sun`).
///
/// No whitespace or case folding; one bad element fails the whole value with
/// a single error.
#[must_use]
pub fn validate_recurrence_week_days(value: &str, key: &str) -> Vec<ValidationError> {
    if value.split(',').all(|day| day.parse::<Weekday>().is_ok()) {
        Vec::new()
    } else {
        vec![ValidationError::new(
            key,
            ValidationErrorKind::WeekDays(value.to_string()),
        )]
    }
}
