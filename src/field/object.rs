//! Component-typed field.

use super::{FieldValue, ValueKind, value::describe_kinds};
use crate::{
    component::Schema,
    error::{ValidationError, ValidationResult},
};

/// Accepts a component declared by exactly one of the expected schemas.
///
/// Matching is by schema identity, not kind name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectField {
    expects: Vec<&'static Schema>,
}

impl ObjectField {
    /// Creates a field accepting components of the given schemas.
    #[must_use]
    pub fn of(expects: impl IntoIterator<Item = &'static Schema>) -> Self {
        Self {
            expects: expects.into_iter().collect(),
        }
    }

    /// Validates a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidType`] when the value is not a
    /// component of an expected schema.
    pub fn validate(&self, value: FieldValue) -> ValidationResult<FieldValue> {
        let accepted = value
            .as_component()
            .is_some_and(|component| self.expects.contains(&component.schema()));
        if accepted {
            return Ok(value);
        }

        let expected: Vec<ValueKind> = self
            .expects
            .iter()
            .copied()
            .map(ValueKind::Component)
            .collect();
        Err(ValidationError::InvalidType {
            expected: describe_kinds(&expected),
            actual: value.kind(),
        })
    }
}
