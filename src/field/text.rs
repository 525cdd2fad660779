//! Text objects: their wire shape and the field accepting them.
//!
//! The text schema lives here, beside [`TextField`], because the field
//! recognises text objects by schema identity and reads their content.
//! [`Text`](crate::objects::Text) is the typed wrapper over this schema.

use super::{BooleanField, FieldValue, StringField, ValueKind, string::check_length};
use crate::{
    component::{Component, ComponentKind, Schema},
    error::{ValidationError, ValidationResult},
};
use std::{fmt, sync::LazyLock};

/// Field holding the text type discriminant.
pub(crate) const TYPE_KEY: &str = "type";
/// Field holding the text content.
pub(crate) const TEXT_KEY: &str = "text";
pub(crate) const EMOJI_KEY: &str = "emoji";
pub(crate) const VERBATIM_KEY: &str = "verbatim";

/// The text type discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextType {
    /// Plain text, emitted as `plain_text`.
    Plain,
    /// Markdown text, emitted as `mrkdwn`.
    Markdown,
}

impl TextType {
    /// Every text type, in declaration order.
    pub const ALL: [Self; 2] = [Self::Plain, Self::Markdown];

    /// Returns the platform representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain_text",
            Self::Markdown => "mrkdwn",
        }
    }

    /// Parses the platform representation.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|text_type| text_type.as_str() == value)
    }
}

impl fmt::Display for TextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TextType> for FieldValue {
    fn from(text_type: TextType) -> Self {
        Self::String(text_type.as_str().to_owned())
    }
}

pub(crate) static TEXT_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder(ComponentKind::TEXT)
        .required(
            TYPE_KEY,
            StringField::new().options(TextType::ALL.map(TextType::as_str)),
        )
        .required(TEXT_KEY, StringField::new())
        .optional(EMOJI_KEY, BooleanField::new())
        .optional(VERBATIM_KEY, BooleanField::new())
        .invariant(check_type_specific_flags)
        .build()
});

/// `emoji` only applies to plain text and `verbatim` only to markdown.
fn check_type_specific_flags(component: &Component) -> ValidationResult<()> {
    let text_type = component.get_str(TYPE_KEY).and_then(TextType::parse);
    if text_type == Some(TextType::Markdown) && component.contains(EMOJI_KEY) {
        return Err(ValidationError::invariant(
            ComponentKind::TEXT.name(),
            "emoji is only valid for plain_text",
        ));
    }
    if text_type == Some(TextType::Plain) && component.contains(VERBATIM_KEY) {
        return Err(ValidationError::invariant(
            ComponentKind::TEXT.name(),
            "verbatim is only valid for mrkdwn",
        ));
    }
    Ok(())
}

/// Accepts a [`Text`](crate::objects::Text) object.
///
/// The length limit applies to the text's underlying string. A plain-only
/// field additionally rejects markdown text. Components of other schemas are
/// rejected even when their kind is also named `text`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextField {
    max_length: Option<usize>,
    plain_only: bool,
}

impl TextField {
    /// Creates a text field accepting either text type of any length.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_length: None,
            plain_only: false,
        }
    }

    /// Limits the underlying text to `max_length` characters.
    #[must_use]
    pub const fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Restricts the field to plain text.
    #[must_use]
    pub const fn plain_only(mut self) -> Self {
        self.plain_only = true;
        self
    }

    /// Validates a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidType`] when the value is not a text
    /// object, [`ValidationError::TooLong`] when its text is over the limit,
    /// and [`ValidationError::PlainTextRequired`] for markdown text in a
    /// plain-only field.
    pub fn validate(self, value: FieldValue) -> ValidationResult<FieldValue> {
        let schema: &'static Schema = &TEXT_SCHEMA;
        let Some(text) = value
            .as_component()
            .filter(|component| component.schema() == schema)
        else {
            return Err(ValidationError::InvalidType {
                expected: ValueKind::Component(schema).to_string(),
                actual: value.kind(),
            });
        };

        let content = text.get_str(TEXT_KEY).unwrap_or_default();
        check_length(content, self.max_length)?;

        let is_plain = text.get_str(TYPE_KEY) == Some(TextType::Plain.as_str());
        if self.plain_only && !is_plain {
            return Err(ValidationError::PlainTextRequired);
        }

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        component::Arguments,
        objects::{Composition, Text},
    };

    fn text_value(text: &str, text_type: TextType) -> FieldValue {
        Text::new(text, text_type)
            .expect("text should build")
            .into()
    }

    #[test]
    fn accepts_text() {
        let value = text_value("some text", TextType::Markdown);
        assert_eq!(TextField::new().validate(value.clone()), Ok(value));
    }

    #[test]
    fn rejects_string() {
        let result = TextField::new().validate(FieldValue::from("text"));
        assert!(matches!(
            result,
            Err(ValidationError::InvalidType {
                actual: ValueKind::String,
                ..
            })
        ));
    }

    #[test]
    fn rejects_other_components() {
        let title = Text::plain("title").expect("text should build");
        let confirm = crate::objects::Confirm::new(
            title.clone(),
            title.clone(),
            title.clone(),
            title,
        )
        .expect("confirm should build");
        let result = TextField::new().validate(confirm.into_component().into());
        assert!(matches!(result, Err(ValidationError::InvalidType { .. })));
    }

    #[test]
    fn rejects_exceeding_length() {
        let result = TextField::new()
            .max_length(5)
            .validate(text_value("foobar", TextType::Plain));
        assert_eq!(result, Err(ValidationError::TooLong { max: 5, actual: 6 }));
    }

    #[test]
    fn plain_only_rejects_markdown() {
        let result = TextField::new()
            .plain_only()
            .validate(text_value("some text", TextType::Markdown));
        assert_eq!(result, Err(ValidationError::PlainTextRequired));
    }

    #[test]
    fn plain_only_accepts_plain() {
        let value = text_value("some text", TextType::Plain);
        assert!(TextField::new().plain_only().validate(value).is_ok());
    }

    static LOOKALIKE_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
        Schema::builder(ComponentKind::new("text"))
            .required("body", StringField::new())
            .build()
    });

    #[test]
    fn rejects_foreign_component_sharing_the_text_kind_name() {
        let lookalike = Component::new(
            &LOOKALIKE_SCHEMA,
            Arguments::new().with("body", "x".repeat(500)),
        )
        .expect("lookalike should build");
        assert_eq!(lookalike.kind(), ComponentKind::TEXT);

        let result = TextField::new().max_length(5).validate(lookalike.into());
        assert_eq!(
            result,
            Err(ValidationError::InvalidType {
                expected: "text object".to_owned(),
                actual: ValueKind::Component(&*LOOKALIKE_SCHEMA),
            })
        );
    }

    #[test]
    fn text_schema_is_the_one_behind_text_objects() {
        let text = Text::plain("hi").expect("text should build");
        assert_eq!(text.component().schema(), &*TEXT_SCHEMA);
        assert_eq!(Text::schema(), &*TEXT_SCHEMA);
    }
}
