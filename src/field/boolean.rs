//! Boolean and integer scalar fields.

use super::{FieldValue, ValueKind};
use crate::error::{ValidationError, ValidationResult};

/// Accepts exactly `true` or `false`; no truthy coercion from other types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanField;

impl BooleanField {
    /// Creates a boolean field.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidType`] for anything that is not a
    /// boolean, including `0`, `1` and `"true"`.
    pub fn validate(self, value: FieldValue) -> ValidationResult<FieldValue> {
        match value {
            FieldValue::Bool(_) => Ok(value),
            other => Err(ValidationError::InvalidType {
                expected: ValueKind::Boolean.to_string(),
                actual: other.kind(),
            }),
        }
    }
}

/// Accepts an integer, optionally within inclusive bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerField {
    min: Option<i64>,
    max: Option<i64>,
}

impl IntegerField {
    /// Creates an unbounded integer field.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Sets the inclusive lower bound.
    #[must_use]
    pub const fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the inclusive upper bound.
    #[must_use]
    pub const fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    /// Validates a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidType`] for non-integers and
    /// [`ValidationError::BelowMinimum`] or [`ValidationError::AboveMaximum`]
    /// when the value is out of bounds.
    pub fn validate(self, value: FieldValue) -> ValidationResult<FieldValue> {
        let FieldValue::Integer(number) = value else {
            return Err(ValidationError::InvalidType {
                expected: ValueKind::Integer.to_string(),
                actual: value.kind(),
            });
        };
        if let Some(min) = self.min
            && number < min
        {
            return Err(ValidationError::BelowMinimum { min, value: number });
        }
        if let Some(max) = self.max
            && number > max
        {
            return Err(ValidationError::AboveMaximum { max, value: number });
        }
        Ok(value)
    }
}
