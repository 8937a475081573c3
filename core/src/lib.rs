// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Declarative downtime resource: validation, window reconciliation and
//! lifecycle on top of the Datadog downtime API.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::pedantic
)]

mod api;
mod attributes;
mod declaration;
mod error;
mod recurrence;
mod resource;
mod schema;
mod scope;
mod state;
mod validate;
mod window;

pub use crate::api::DowntimeApi;
pub use crate::attributes::AttributeMap;
pub use crate::declaration::{DowntimeConfig, DowntimeDraft, RecurrenceConfig};
pub use crate::error::{Error, ValidationError, ValidationErrorKind, ValidationErrors};
pub use crate::recurrence::{RecurrenceRule, RecurrenceType, UnknownToken, Weekday};
pub use crate::resource::DowntimeResource;
pub use crate::schema::{DOWNTIME_SCHEMA, Field, FieldKind, Presence, Schema};
pub use crate::scope::Scope;
pub use crate::state::DowntimeState;
pub use crate::validate::{ValidateFn, validate_recurrence_type, validate_recurrence_week_days};
pub use crate::window::{DateBound, Window};
pub use downtimectl_client::{ClientConfig, ClientError, DatadogClient, DowntimeId};
