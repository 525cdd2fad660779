//! Field layer: validators for single component attributes.
//!
//! Each validator carries only the constraints configured when its owning
//! component schema is declared. Validation is pure: a value is either
//! returned normalised or rejected with a [`ValidationError`].
//!
//! [`ValidationError`]: crate::error::ValidationError

mod array;
mod boolean;
mod object;
mod string;
mod text;
mod url;
mod value;

pub use array::ArrayField;
pub use boolean::{BooleanField, IntegerField};
pub use object::ObjectField;
pub use string::StringField;
pub use text::{TextField, TextType};
pub(crate) use text::{EMOJI_KEY, TEXT_KEY, TEXT_SCHEMA, TYPE_KEY, VERBATIM_KEY};
pub use self::url::{DEFAULT_URL_MAX_LENGTH, UrlField};
pub use value::{FieldValue, ValueKind};

use crate::error::ValidationResult;

/// A configured validator for one component attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// Text scalar.
    String(StringField),
    /// Boolean scalar.
    Boolean(BooleanField),
    /// Integer scalar.
    Integer(IntegerField),
    /// Text object.
    Text(TextField),
    /// Sequence of values.
    Array(ArrayField),
    /// Absolute URL.
    Url(UrlField),
    /// Component of specific schemas.
    Object(ObjectField),
}

impl Field {
    /// Validates a raw value with the wrapped validator.
    ///
    /// # Errors
    ///
    /// Returns whatever [`ValidationError`](crate::error::ValidationError) the
    /// wrapped validator raises.
    pub fn validate(&self, value: FieldValue) -> ValidationResult<FieldValue> {
        match self {
            Self::String(field) => field.validate(value),
            Self::Boolean(field) => field.validate(value),
            Self::Integer(field) => field.validate(value),
            Self::Text(field) => field.validate(value),
            Self::Array(field) => field.validate(value),
            Self::Url(field) => field.validate(value),
            Self::Object(field) => field.validate(value),
        }
    }
}

impl From<StringField> for Field {
    fn from(field: StringField) -> Self {
        Self::String(field)
    }
}

impl From<BooleanField> for Field {
    fn from(field: BooleanField) -> Self {
        Self::Boolean(field)
    }
}

impl From<IntegerField> for Field {
    fn from(field: IntegerField) -> Self {
        Self::Integer(field)
    }
}

impl From<TextField> for Field {
    fn from(field: TextField) -> Self {
        Self::Text(field)
    }
}

impl From<ArrayField> for Field {
    fn from(field: ArrayField) -> Self {
        Self::Array(field)
    }
}

impl From<UrlField> for Field {
    fn from(field: UrlField) -> Self {
        Self::Url(field)
    }
}

impl From<ObjectField> for Field {
    fn from(field: ObjectField) -> Self {
        Self::Object(field)
    }
}
