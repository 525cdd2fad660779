//! Confirmation dialog object.

use super::{
    Text,
    limits::{CONFIRM_BUTTON_MAX_LENGTH, CONFIRM_TEXT_MAX_LENGTH, CONFIRM_TITLE_MAX_LENGTH},
};
use crate::{
    component::{Arguments, Component, ComponentKind, Schema},
    error::ValidationResult,
    field::{FieldValue, ObjectField, StringField, TextField},
};
use std::sync::LazyLock;

/// Colour scheme of the dialog's confirm button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfirmStyle {
    /// Green button, for affirmative actions.
    Primary,
    /// Red button, for destructive actions.
    Danger,
}

impl ConfirmStyle {
    /// Every style, in declaration order.
    pub const ALL: [Self; 2] = [Self::Primary, Self::Danger];

    /// Returns the platform representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Danger => "danger",
        }
    }
}

impl From<ConfirmStyle> for FieldValue {
    fn from(style: ConfirmStyle) -> Self {
        Self::String(style.as_str().to_owned())
    }
}

static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder(ComponentKind::CONFIRM)
        .required(
            "title",
            TextField::new()
                .plain_only()
                .max_length(CONFIRM_TITLE_MAX_LENGTH),
        )
        .required("text", TextField::new().max_length(CONFIRM_TEXT_MAX_LENGTH))
        .required(
            "confirm",
            TextField::new()
                .plain_only()
                .max_length(CONFIRM_BUTTON_MAX_LENGTH),
        )
        .required(
            "deny",
            TextField::new()
                .plain_only()
                .max_length(CONFIRM_BUTTON_MAX_LENGTH),
        )
        .optional(
            "style",
            StringField::new().options(ConfirmStyle::ALL.map(ConfirmStyle::as_str)),
        )
        .build()
});

/// A dialog asking the user to confirm an interactive element's action.
///
/// Built as `{"title": ..., "text": ..., "confirm": ..., "deny": ...}`,
/// followed by `"style"` when one is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirm(Component);

composition!(Confirm, SCHEMA);

impl Confirm {
    /// Creates a dialog with the default button style.
    ///
    /// `title`, `confirm` and `deny` must be plain text; `text` may be either
    /// type.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`](crate::error::ValidationError) when a
    /// text has the wrong type or is too long.
    pub fn new(title: Text, text: Text, confirm: Text, deny: Text) -> ValidationResult<Self> {
        Self::from_arguments(Self::arguments(title, text, confirm, deny))
    }

    /// Creates a dialog with an explicit confirm button style.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`](crate::error::ValidationError) when a
    /// text has the wrong type or is too long.
    pub fn styled(
        title: Text,
        text: Text,
        confirm: Text,
        deny: Text,
        style: ConfirmStyle,
    ) -> ValidationResult<Self> {
        Self::from_arguments(Self::arguments(title, text, confirm, deny).with("style", style))
    }

    fn arguments(title: Text, text: Text, confirm: Text, deny: Text) -> Arguments {
        Arguments::new()
            .with("title", title)
            .with("text", text)
            .with("confirm", confirm)
            .with("deny", deny)
    }
}

impl ObjectField {
    /// Creates a field accepting a confirmation dialog.
    #[must_use]
    pub fn confirm() -> Self {
        Self::of([&*SCHEMA])
    }
}
