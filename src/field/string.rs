//! Text-scalar field.

use super::{FieldValue, ValueKind};
use crate::error::{ValidationError, ValidationResult};

/// Accepts a text scalar, optionally bounded in length and restricted to an
/// enumerated option set.
///
/// # Examples
///
/// ```
/// use blockkit::field::{FieldValue, StringField};
///
/// let field = StringField::new().max_length(5).options(["foo", "bar"]);
/// assert!(field.validate(FieldValue::from("foo")).is_ok());
/// assert!(field.validate(FieldValue::from("baz")).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringField {
    max_length: Option<usize>,
    options: Option<Vec<String>>,
}

impl StringField {
    /// Creates an unconstrained string field.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_length: None,
            options: None,
        }
    }

    /// Limits the value to `max_length` characters.
    #[must_use]
    pub const fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Restricts the value to one of `options`.
    #[must_use]
    pub fn options(mut self, options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    /// Validates a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidType`] for non-string values,
    /// [`ValidationError::TooLong`] when the value exceeds the maximum length,
    /// and [`ValidationError::NotAnOption`] when it is outside the option set.
    pub fn validate(&self, value: FieldValue) -> ValidationResult<FieldValue> {
        let FieldValue::String(text) = value else {
            return Err(ValidationError::InvalidType {
                expected: ValueKind::String.to_string(),
                actual: value.kind(),
            });
        };

        check_length(&text, self.max_length)?;

        if let Some(options) = self.options.as_ref()
            && !options.iter().any(|option| *option == text)
        {
            return Err(ValidationError::NotAnOption {
                value: text,
                options: options.clone(),
            });
        }

        Ok(FieldValue::String(text))
    }
}

/// Fails when `text` is longer than `max_length` characters.
pub(crate) fn check_length(text: &str, max_length: Option<usize>) -> ValidationResult<()> {
    let Some(max) = max_length else {
        return Ok(());
    };
    let actual = text.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { max, actual });
    }
    Ok(())
}
