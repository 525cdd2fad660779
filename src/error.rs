//! Validation error type shared by fields and components.
//!
//! Uses `thiserror` for typed variants that callers can inspect to localise a
//! failure to the field that caused it.

use crate::field::ValueKind;
use thiserror::Error;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Errors raised while validating a field value or constructing a component.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The value has the wrong runtime type for the field.
    #[error("expected {expected}, got {actual}")]
    InvalidType {
        /// Description of the accepted type(s).
        expected: String,
        /// The runtime kind of the rejected value.
        actual: ValueKind,
    },

    /// A string exceeds the configured maximum length.
    #[error("length {actual} exceeds maximum of {max} characters")]
    TooLong {
        /// The maximum allowed length in characters.
        max: usize,
        /// The actual length in characters.
        actual: usize,
    },

    /// A sequence has more items than allowed.
    #[error("{actual} items exceeds maximum of {max}")]
    TooManyItems {
        /// The maximum allowed number of items.
        max: usize,
        /// The actual number of items.
        actual: usize,
    },

    /// A value is not a member of the configured option set.
    #[error("'{value}' is not one of: {}", options.join(", "))]
    NotAnOption {
        /// The rejected value.
        value: String,
        /// The accepted options.
        options: Vec<String>,
    },

    /// A string is not a well-formed absolute URL.
    #[error("invalid URL '{value}': {reason}")]
    InvalidUrl {
        /// The rejected value.
        value: String,
        /// Why the URL was rejected.
        reason: String,
    },

    /// A text object must use the plain text type.
    #[error("text must be of type plain_text")]
    PlainTextRequired,

    /// An integer is below the configured minimum.
    #[error("{value} is below the minimum of {min}")]
    BelowMinimum {
        /// The inclusive minimum.
        min: i64,
        /// The rejected value.
        value: i64,
    },

    /// An integer is above the configured maximum.
    #[error("{value} is above the maximum of {max}")]
    AboveMaximum {
        /// The inclusive maximum.
        max: i64,
        /// The rejected value.
        value: i64,
    },

    /// A required field was not supplied.
    #[error("field '{0}' is required")]
    MissingField(String),

    /// An argument names no declared field of the component.
    #[error("unknown field '{field}' for {component}")]
    UnknownField {
        /// The component kind being constructed.
        component: String,
        /// The unrecognised argument name.
        field: String,
    },

    /// A field rejected its value.
    #[error("invalid field '{field}': {source}")]
    InvalidField {
        /// External name of the offending field.
        field: String,
        /// The underlying validation failure.
        source: Box<Self>,
    },

    /// A cross-field invariant of a component does not hold.
    #[error("invalid {component}: {reason}")]
    Invariant {
        /// The component kind whose invariant failed.
        component: String,
        /// Description of the violated rule.
        reason: String,
    },
}

impl ValidationError {
    /// Creates an invariant violation for the given component kind.
    #[must_use]
    pub fn invariant(component: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invariant {
            component: component.into(),
            reason: reason.into(),
        }
    }

    /// Annotates this error with the external name of the field that raised it.
    #[must_use]
    pub fn in_field(self, field: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            source: Box::new(self),
        }
    }

    /// Returns the external name of the offending field, when known.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField(field)
            | Self::UnknownField { field, .. }
            | Self::InvalidField { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }

    /// Returns the innermost error, unwrapping any field annotations.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::InvalidField { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_field_records_field_name() {
        let error = ValidationError::PlainTextRequired.in_field("title");
        assert_eq!(error.field(), Some("title"));
        assert_eq!(
            error.to_string(),
            "invalid field 'title': text must be of type plain_text"
        );
    }

    #[test]
    fn root_cause_unwraps_nested_annotations() {
        let error = ValidationError::TooLong { max: 5, actual: 6 }
            .in_field("text")
            .in_field("title");
        assert_eq!(
            error.root_cause(),
            &ValidationError::TooLong { max: 5, actual: 6 }
        );
    }

    #[test]
    fn not_an_option_lists_choices() {
        let error = ValidationError::NotAnOption {
            value: "group".to_owned(),
            options: vec!["im".to_owned(), "mpim".to_owned()],
        };
        assert_eq!(error.to_string(), "'group' is not one of: im, mpim");
    }

    #[test]
    fn invariant_has_no_field() {
        let error = ValidationError::invariant("filter", "at least one field is required");
        assert_eq!(error.field(), None);
    }
}
