//! Absolute URL field.

use super::{FieldValue, ValueKind, string::check_length};
use crate::error::{ValidationError, ValidationResult};
use url::Url;

/// Default maximum URL length accepted by the platform.
pub const DEFAULT_URL_MAX_LENGTH: usize = 3000;

/// Accepts a string that parses as an absolute URL with a scheme and a host.
///
/// The length limit is checked before the URL is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlField {
    max_length: usize,
}

impl Default for UrlField {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlField {
    /// Creates a URL field with the default length limit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_length: DEFAULT_URL_MAX_LENGTH,
        }
    }

    /// Overrides the maximum length.
    #[must_use]
    pub const fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Validates a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidType`] for non-strings and
    /// [`ValidationError::TooLong`] for over-long values, then
    /// [`ValidationError::InvalidUrl`] when the string is not an absolute URL
    /// with both scheme and host.
    pub fn validate(self, value: FieldValue) -> ValidationResult<FieldValue> {
        let FieldValue::String(raw) = value else {
            return Err(ValidationError::InvalidType {
                expected: ValueKind::String.to_string(),
                actual: value.kind(),
            });
        };
        check_length(&raw, Some(self.max_length))?;

        let parsed = Url::parse(&raw).map_err(|e| ValidationError::InvalidUrl {
            value: raw.clone(),
            reason: e.to_string(),
        })?;
        if !parsed.has_host() {
            return Err(ValidationError::InvalidUrl {
                value: raw,
                reason: "missing host".to_owned(),
            });
        }

        Ok(FieldValue::String(raw))
    }
}
