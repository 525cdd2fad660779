//! Option and option group objects.

use super::{
    Text,
    limits::{
        OPTION_DESCRIPTION_MAX_LENGTH, OPTION_GROUP_LABEL_MAX_LENGTH, OPTION_GROUP_MAX_OPTIONS,
        OPTION_TEXT_MAX_LENGTH, OPTION_URL_MAX_LENGTH, OPTION_VALUE_MAX_LENGTH,
    },
};
use crate::{
    component::{Arguments, Component, ComponentKind, Schema},
    error::ValidationResult,
    field::{ArrayField, StringField, TextField, UrlField, ValueKind},
};
use std::sync::LazyLock;

static OPTION_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder(ComponentKind::OPTION)
        .required("text", TextField::new().max_length(OPTION_TEXT_MAX_LENGTH))
        .required("value", StringField::new().max_length(OPTION_VALUE_MAX_LENGTH))
        .optional("url", UrlField::new().max_length(OPTION_URL_MAX_LENGTH))
        .optional(
            "description",
            TextField::new()
                .plain_only()
                .max_length(OPTION_DESCRIPTION_MAX_LENGTH),
        )
        .build()
});

static OPTION_GROUP_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder(ComponentKind::OPTION_GROUP)
        .required(
            "label",
            TextField::new()
                .plain_only()
                .max_length(OPTION_GROUP_LABEL_MAX_LENGTH),
        )
        .required(
            "options",
            ArrayField::of([ValueKind::Component(&*OPTION_SCHEMA)])
                .max_items(OPTION_GROUP_MAX_OPTIONS),
        )
        .build()
});

/// A single selectable item in a menu, checkbox group or radio group.
///
/// # Examples
///
/// ```
/// use blockkit::objects::{Composition, OptionObject, Text};
///
/// let text = Text::plain("Apples").expect("valid text");
/// let option = OptionObject::new(text, "apples").expect("valid option");
/// assert_eq!(option.build()["value"], "apples");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionObject(Component);

composition!(OptionObject, OPTION_SCHEMA);

impl OptionObject {
    /// Creates an option with a display text and the value sent on selection.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`](crate::error::ValidationError) when the
    /// text or value is too long.
    pub fn new(text: Text, value: impl Into<String>) -> ValidationResult<Self> {
        Self::with_details(text, value, None::<String>, None)
    }

    /// Creates an option with an optional link and description.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`](crate::error::ValidationError) when a
    /// field is too long, the URL is malformed, or the description is not
    /// plain text.
    pub fn with_details(
        text: Text,
        value: impl Into<String>,
        url: Option<impl Into<String>>,
        description: Option<Text>,
    ) -> ValidationResult<Self> {
        Self::from_arguments(
            Arguments::new()
                .with("text", text)
                .with("value", Into::<String>::into(value))
                .with_optional("url", url.map(Into::<String>::into))
                .with_optional("description", description),
        )
    }

    /// Returns the value sent when the option is selected.
    #[must_use]
    pub fn value(&self) -> &str {
        self.0.get_str("value").unwrap_or_default()
    }
}

/// A labelled group of options within a select menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroup(Component);

composition!(OptionGroup, OPTION_GROUP_SCHEMA);

impl OptionGroup {
    /// Creates a group from a plain text label and its options.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`](crate::error::ValidationError) when the
    /// label is not plain text or is too long, when `options` is empty, or
    /// when there are too many options.
    pub fn new(label: Text, options: Vec<OptionObject>) -> ValidationResult<Self> {
        Self::from_arguments(
            Arguments::new()
                .with("label", label)
                .with("options", options),
        )
    }
}
