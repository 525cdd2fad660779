//! Conversation list filter object.

use super::{check_members, check_unique};
use crate::{
    component::{Arguments, Component, ComponentKind, Schema},
    error::{ValidationError, ValidationResult},
    field::{ArrayField, BooleanField, FieldValue, ValueKind},
};
use std::sync::LazyLock;

const INCLUDE_KEY: &str = "include";
const EXCLUDE_EXTERNAL_SHARED_CHANNELS_KEY: &str = "exclude_external_shared_channels";
const EXCLUDE_BOT_USERS_KEY: &str = "exclude_bot_users";

/// A conversation type a filter can include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversationType {
    /// Direct messages.
    Im,
    /// Multi-person direct messages.
    Mpim,
    /// Private channels.
    Private,
    /// Public channels.
    Public,
}

impl ConversationType {
    /// Every conversation type, in declaration order.
    pub const ALL: [Self; 4] = [Self::Im, Self::Mpim, Self::Private, Self::Public];

    /// Returns the platform representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Im => "im",
            Self::Mpim => "mpim",
            Self::Private => "private",
            Self::Public => "public",
        }
    }
}

impl From<ConversationType> for FieldValue {
    fn from(conversation_type: ConversationType) -> Self {
        Self::String(conversation_type.as_str().to_owned())
    }
}

static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder(ComponentKind::FILTER)
        .optional(
            INCLUDE_KEY,
            ArrayField::of([ValueKind::String]).max_items(ConversationType::ALL.len()),
        )
        .optional(EXCLUDE_EXTERNAL_SHARED_CHANNELS_KEY, BooleanField::new())
        .optional(EXCLUDE_BOT_USERS_KEY, BooleanField::new())
        .invariant(check_any_supplied)
        .invariant(check_included_types)
        .invariant(check_unique_types)
        .build()
});

fn check_any_supplied(component: &Component) -> ValidationResult<()> {
    let any = [
        INCLUDE_KEY,
        EXCLUDE_EXTERNAL_SHARED_CHANNELS_KEY,
        EXCLUDE_BOT_USERS_KEY,
    ]
    .iter()
    .any(|key| component.contains(key));
    if any {
        Ok(())
    } else {
        Err(ValidationError::invariant(
            ComponentKind::FILTER.name(),
            format!(
                "one of {INCLUDE_KEY}, {EXCLUDE_EXTERNAL_SHARED_CHANNELS_KEY} or \
                 {EXCLUDE_BOT_USERS_KEY} is required"
            ),
        ))
    }
}

fn check_included_types(component: &Component) -> ValidationResult<()> {
    let allowed = ConversationType::ALL.map(ConversationType::as_str);
    check_members(
        INCLUDE_KEY,
        component.get_list(INCLUDE_KEY).unwrap_or_default(),
        &allowed,
    )
}

fn check_unique_types(component: &Component) -> ValidationResult<()> {
    check_unique(
        ComponentKind::FILTER,
        INCLUDE_KEY,
        component.get_list(INCLUDE_KEY).unwrap_or_default(),
    )
}

/// Narrows which conversations appear in a conversations list menu.
///
/// At least one of its three fields must be supplied, and `include` lists
/// each conversation type at most once.
///
/// # Examples
///
/// ```
/// use blockkit::objects::{Composition, ConversationType, Filter};
/// use serde_json::json;
///
/// let filter = Filter::new(Some(vec![ConversationType::Im]), None, Some(true))
///     .expect("valid filter");
/// assert_eq!(
///     filter.build(),
///     json!({"include": ["im"], "exclude_bot_users": true})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter(Component);

composition!(Filter, SCHEMA);

impl Filter {
    /// Creates a filter.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when no field is supplied or `include`
    /// repeats a conversation type.
    pub fn new(
        include: Option<Vec<ConversationType>>,
        exclude_external_shared_channels: Option<bool>,
        exclude_bot_users: Option<bool>,
    ) -> ValidationResult<Self> {
        Self::from_arguments(
            Arguments::new()
                .with_optional(INCLUDE_KEY, include)
                .with_optional(
                    EXCLUDE_EXTERNAL_SHARED_CHANNELS_KEY,
                    exclude_external_shared_channels,
                )
                .with_optional(EXCLUDE_BOT_USERS_KEY, exclude_bot_users),
        )
    }
}
