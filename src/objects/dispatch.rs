//! Dispatch action configuration object.

use super::{check_members, check_unique};
use crate::{
    component::{Arguments, Component, ComponentKind, Schema},
    error::ValidationResult,
    field::{ArrayField, FieldValue, ValueKind},
};
use std::sync::LazyLock;

const TRIGGER_ACTIONS_ON_KEY: &str = "trigger_actions_on";

/// An interaction that makes a plain-text input dispatch a block action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// The user presses Enter.
    OnEnterPressed,
    /// The user types a character.
    OnCharacterEntered,
}

impl Trigger {
    /// Every trigger, in declaration order.
    pub const ALL: [Self; 2] = [Self::OnEnterPressed, Self::OnCharacterEntered];

    /// Returns the platform representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnEnterPressed => "on_enter_pressed",
            Self::OnCharacterEntered => "on_character_entered",
        }
    }
}

impl From<Trigger> for FieldValue {
    fn from(trigger: Trigger) -> Self {
        Self::String(trigger.as_str().to_owned())
    }
}

static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder(ComponentKind::DISPATCH_ACTION_CONFIG)
        .required(
            TRIGGER_ACTIONS_ON_KEY,
            ArrayField::of([ValueKind::String]).max_items(Trigger::ALL.len()),
        )
        .invariant(check_known_triggers)
        .invariant(check_unique_triggers)
        .build()
});

fn triggers(component: &Component) -> &[FieldValue] {
    component
        .get_list(TRIGGER_ACTIONS_ON_KEY)
        .unwrap_or_default()
}

fn check_known_triggers(component: &Component) -> ValidationResult<()> {
    let allowed = Trigger::ALL.map(Trigger::as_str);
    check_members(TRIGGER_ACTIONS_ON_KEY, triggers(component), &allowed)
}

fn check_unique_triggers(component: &Component) -> ValidationResult<()> {
    check_unique(
        ComponentKind::DISPATCH_ACTION_CONFIG,
        TRIGGER_ACTIONS_ON_KEY,
        triggers(component),
    )
}

/// Chooses which interactions make a plain-text input dispatch an action.
///
/// # Examples
///
/// ```
/// use blockkit::objects::{Composition, DispatchActionConfig, Trigger};
/// use serde_json::json;
///
/// let config = DispatchActionConfig::new(vec![Trigger::OnEnterPressed])
///     .expect("valid config");
/// assert_eq!(
///     config.build(),
///     json!({"trigger_actions_on": ["on_enter_pressed"]})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchActionConfig(Component);

composition!(DispatchActionConfig, SCHEMA);

impl DispatchActionConfig {
    /// Creates a configuration from a non-empty list of distinct triggers.
    ///
    /// Order is preserved in the built output.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`](crate::error::ValidationError) when
    /// `triggers` is empty, longer than the number of known triggers, or
    /// lists a trigger twice.
    pub fn new(triggers: Vec<Trigger>) -> ValidationResult<Self> {
        Self::from_arguments(Arguments::new().with(TRIGGER_ACTIONS_ON_KEY, triggers))
    }

    /// Returns the configured triggers in order.
    #[must_use]
    pub fn triggers(&self) -> Vec<Trigger> {
        triggers(&self.0)
            .iter()
            .filter_map(FieldValue::as_str)
            .filter_map(|name| {
                Trigger::ALL
                    .into_iter()
                    .find(|trigger| trigger.as_str() == name)
            })
            .collect()
    }
}
