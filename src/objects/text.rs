//! Text object.

use crate::{
    component::{Arguments, Component},
    error::ValidationResult,
    field::{EMOJI_KEY, TEXT_KEY, TEXT_SCHEMA, TYPE_KEY, TextType, VERBATIM_KEY},
};

/// A text object: `{"type": "plain_text" | "mrkdwn", "text": ...}`.
///
/// # Examples
///
/// ```
/// use blockkit::objects::{Composition, Text};
/// use serde_json::json;
///
/// let text = Text::plain_with_emoji("hi", true).expect("valid text");
/// assert_eq!(
///     text.build(),
///     json!({"type": "plain_text", "text": "hi", "emoji": true})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text(Component);

composition!(Text, TEXT_SCHEMA);

impl Text {
    /// Creates a text object of the given type.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`](crate::error::ValidationError) if the text is rejected.
    pub fn new(text: impl Into<String>, text_type: TextType) -> ValidationResult<Self> {
        Self::from_arguments(
            Arguments::new()
                .with(TYPE_KEY, text_type)
                .with(TEXT_KEY, Into::<String>::into(text)),
        )
    }

    /// Creates a plain text object.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`](crate::error::ValidationError) if the text is rejected.
    pub fn plain(text: impl Into<String>) -> ValidationResult<Self> {
        Self::new(text, TextType::Plain)
    }

    /// Creates a markdown text object.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`](crate::error::ValidationError) if the text is rejected.
    pub fn markdown(text: impl Into<String>) -> ValidationResult<Self> {
        Self::new(text, TextType::Markdown)
    }

    /// Creates a plain text object with explicit emoji handling.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`](crate::error::ValidationError) if the text is rejected.
    pub fn plain_with_emoji(text: impl Into<String>, emoji: bool) -> ValidationResult<Self> {
        Self::from_arguments(
            Arguments::new()
                .with(TYPE_KEY, TextType::Plain)
                .with(TEXT_KEY, Into::<String>::into(text))
                .with(EMOJI_KEY, emoji),
        )
    }

    /// Creates a markdown text object with explicit verbatim handling.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`](crate::error::ValidationError) if the text is rejected.
    pub fn markdown_verbatim(text: impl Into<String>, verbatim: bool) -> ValidationResult<Self> {
        Self::from_arguments(
            Arguments::new()
                .with(TYPE_KEY, TextType::Markdown)
                .with(TEXT_KEY, Into::<String>::into(text))
                .with(VERBATIM_KEY, verbatim),
        )
    }

    /// Returns the text content.
    #[must_use]
    pub fn text(&self) -> &str {
        self.0.get_str(TEXT_KEY).unwrap_or_default()
    }

    /// Returns the text type.
    #[must_use]
    pub fn text_type(&self) -> TextType {
        self.0
            .get_str(TYPE_KEY)
            .and_then(TextType::parse)
            .unwrap_or(TextType::Plain)
    }

    /// Returns the emoji flag, if supplied.
    #[must_use]
    pub fn emoji(&self) -> Option<bool> {
        self.0.get_bool(EMOJI_KEY)
    }

    /// Returns the verbatim flag, if supplied.
    #[must_use]
    pub fn verbatim(&self) -> Option<bool> {
        self.0.get_bool(VERBATIM_KEY)
    }
}
