// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Declarative schema of the downtime resource and plan-time validation.

use crate::attributes::AttributeMap;
use crate::error::{ValidationError, ValidationErrorKind};
use crate::validate::{ValidateFn, validate_recurrence_type, validate_recurrence_week_days};

/// Value kind of a field.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Integer scalar.
    Int,
    /// String scalar.
    String,
    /// Boolean scalar.
    Bool,
    /// List of strings; the validator runs on each item.
    List,
    /// Repeated nested block.
    Block(&'static [Field]),
}

/// Whether a field must, may or cannot be declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Must be declared.
    Required,
    /// May be declared.
    Optional,
    /// Reported by the API, never declared.
    Computed,
}

/// A field of the schema.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    /// Attribute name.
    pub name: &'static str,
    /// Value kind.
    pub kind: FieldKind,
    /// Presence.
    pub presence: Presence,
    /// Sibling fields that must not be declared together with this one.
    pub conflicts_with: &'static [&'static str],
    /// Maximum number of items for lists and blocks.
    pub max_items: Option<usize>,
    /// Value validator.
    pub validate: Option<ValidateFn>,
}

impl Field {
    /// An optional field without constraints.
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Optional,
            conflicts_with: &[],
            max_items: None,
            validate: None,
        }
    }

    /// Marks the field as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.presence = Presence::Required;
        self
    }

    /// Marks the field as computed.
    #[must_use]
    pub const fn computed(mut self) -> Self {
        self.presence = Presence::Computed;
        self
    }

    /// Declares conflicting sibling fields.
    #[must_use]
    pub const fn conflicts_with(mut self, fields: &'static [&'static str]) -> Self {
        self.conflicts_with = fields;
        self
    }

    /// Limits the number of items.
    #[must_use]
    pub const fn max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);
        self
    }

    /// Registers a value validator.
    #[must_use]
    pub const fn validate(mut self, f: ValidateFn) -> Self {
        self.validate = Some(f);
        self
    }
}

/// Fields of a `recurrence` block.
pub static RECURRENCE_FIELDS: &[Field] = &[
    Field::new("type", FieldKind::String)
        .required()
        .validate(validate_recurrence_type),
    Field::new("period", FieldKind::Int).required(),
    Field::new("week_days", FieldKind::List).validate(validate_recurrence_week_days),
    Field::new("until_date", FieldKind::Int),
    Field::new("until_occurrences", FieldKind::Int),
];

/// Fields of the downtime resource.
pub static DOWNTIME_FIELDS: &[Field] = &[
    Field::new("scope", FieldKind::List).required(),
    Field::new("start", FieldKind::Int),
    Field::new("end", FieldKind::Int),
    Field::new("start_date", FieldKind::String).conflicts_with(&["start"]),
    Field::new("end_date", FieldKind::String).conflicts_with(&["end"]),
    Field::new("message", FieldKind::String),
    Field::new("monitor_id", FieldKind::String),
    Field::new("recurrence", FieldKind::Block(RECURRENCE_FIELDS)).max_items(1),
    Field::new("active", FieldKind::Bool).computed(),
    Field::new("disabled", FieldKind::Bool).computed(),
];

/// The downtime resource schema.
pub static DOWNTIME_SCHEMA: Schema = Schema::new(DOWNTIME_FIELDS);

/// A set of fields validated together.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    fields: &'static [Field],
}

impl Schema {
    /// Creates a schema from its fields.
    #[must_use]
    pub const fn new(fields: &'static [Field]) -> Self {
        Self { fields }
    }

    /// The top-level fields.
    #[must_use]
    pub const fn fields(&self) -> &'static [Field] {
        self.fields
    }

    /// Looks up a top-level field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validates a flattened declaration and collects every error.
    #[must_use]
    pub fn validate(&self, attrs: &AttributeMap) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        validate_fields(self.fields, "", attrs, &mut errors);
        errors
    }
}

fn validate_fields(
    fields: &[Field],
    prefix: &str,
    attrs: &AttributeMap,
    errors: &mut Vec<ValidationError>,
) {
    for field in fields {
        let key = format!("{prefix}{}", field.name);
        let set = attrs.is_set(&key);

        match (field.presence, set) {
            (Presence::Required, false) => {
                errors.push(ValidationError::new(&key, ValidationErrorKind::Required));
                continue;
            }
            (Presence::Computed, true) => {
                errors.push(ValidationError::new(&key, ValidationErrorKind::Computed));
                continue;
            }
            (_, false) => continue,
            _ => {}
        }

        for other in field.conflicts_with {
            if attrs.is_set(&format!("{prefix}{other}")) {
                errors.push(ValidationError::new(
                    &key,
                    ValidationErrorKind::ConflictsWith((*other).to_string()),
                ));
            }
        }

        match field.kind {
            FieldKind::Int | FieldKind::String | FieldKind::Bool => {
                if let Some(value) = attrs.get(&key) {
                    validate_scalar(field, &key, value, errors);
                }
            }
            FieldKind::List => {
                let count = attrs.count(&key);
                check_max_items(field, &key, count, errors);
                for i in 0..count {
                    let item_key = format!("{key}.{i}");
                    if let (Some(value), Some(f)) = (attrs.get(&item_key), field.validate) {
                        errors.extend(f(value, &item_key));
                    }
                }
            }
            FieldKind::Block(nested) => {
                let count = attrs.count(&key);
                check_max_items(field, &key, count, errors);
                for i in 0..count {
                    validate_fields(nested, &format!("{key}.{i}."), attrs, errors);
                }
            }
        }
    }
}

fn validate_scalar(field: &Field, key: &str, value: &str, errors: &mut Vec<ValidationError>) {
    let kind = match field.kind {
        FieldKind::Int if value.parse::<i64>().is_err() => {
            Some(ValidationErrorKind::NotAnInteger(value.to_string()))
        }
        FieldKind::Bool if value.parse::<bool>().is_err() => {
            Some(ValidationErrorKind::NotABool(value.to_string()))
        }
        _ => None,
    };
    if let Some(kind) = kind {
        errors.push(ValidationError::new(key, kind));
        return;
    }

    if let Some(f) = field.validate {
        errors.extend(f(value, key));
    }
}

fn check_max_items(field: &Field, key: &str, count: usize, errors: &mut Vec<ValidationError>) {
    if let Some(max) = field.max_items
        && count > max
    {
        errors.push(ValidationError::new(
            key,
            ValidationErrorKind::TooManyItems { max, got: count },
        ));
    }
}
