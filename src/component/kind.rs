//! Component type tags.

use std::fmt;

/// Identifies the variant of a component.
///
/// A kind is the name a component type reports in errors and logs. Which
/// components a field accepts is decided by [`Schema`](super::Schema)
/// identity, so a consumer kind reusing a built-in name is still a distinct
/// type. Consumers declaring their own components create their own kinds
/// with [`ComponentKind::new`].
///
/// # Examples
///
/// ```
/// use blockkit::component::ComponentKind;
///
/// const BUTTON: ComponentKind = ComponentKind::new("button");
/// assert_eq!(BUTTON.name(), "button");
/// assert_ne!(BUTTON, ComponentKind::TEXT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentKind(&'static str);

impl ComponentKind {
    /// Text object.
    pub const TEXT: Self = Self::new("text");
    /// Confirmation dialog object.
    pub const CONFIRM: Self = Self::new("confirm");
    /// Option object.
    pub const OPTION: Self = Self::new("option");
    /// Option group object.
    pub const OPTION_GROUP: Self = Self::new("option_group");
    /// Conversation filter object.
    pub const FILTER: Self = Self::new("filter");
    /// Dispatch action configuration object.
    pub const DISPATCH_ACTION_CONFIG: Self = Self::new("dispatch_action_config");

    /// Creates a kind with the given name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the kind's name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
