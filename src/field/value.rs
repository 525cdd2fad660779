//! Dynamically typed argument values passed to fields.
//!
//! Component arguments arrive as [`FieldValue`]s so each field can perform
//! its own runtime type check. [`ValueKind`] names the runtime variant of a
//! value and doubles as the entry type of accepted-type sets.

use crate::component::{Component, Schema};
use serde_json::Value;
use std::fmt;

/// A single argument value prior to (and after) validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A text scalar.
    String(String),
    /// A boolean scalar.
    Bool(bool),
    /// An integer scalar.
    Integer(i64),
    /// An ordered sequence of values.
    List(Vec<FieldValue>),
    /// A nested, already validated component.
    Component(Component),
}

impl FieldValue {
    /// Returns the runtime kind of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::String(_) => ValueKind::String,
            Self::Bool(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::List(_) => ValueKind::List,
            Self::Component(component) => ValueKind::Component(component.schema()),
        }
    }

    /// Returns the string slice if this is a text scalar.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Returns the boolean if this is a boolean scalar.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the integer if this is an integer scalar.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the items if this is a sequence.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Returns the nested component if this is one.
    #[must_use]
    pub const fn as_component(&self) -> Option<&Component> {
        match self {
            Self::Component(component) => Some(component),
            _ => None,
        }
    }

    /// Returns `true` for a sequence with no items.
    #[must_use]
    pub fn is_empty_list(&self) -> bool {
        matches!(self, Self::List(items) if items.is_empty())
    }

    /// Converts the value into its JSON representation, building nested
    /// components recursively.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::String(value) => Value::String(value.clone()),
            Self::Bool(value) => Value::Bool(*value),
            Self::Integer(value) => Value::from(*value),
            Self::List(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Component(component) => component.build(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<Component> for FieldValue {
    fn from(value: Component) -> Self {
        Self::Component(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// The runtime variant of a [`FieldValue`].
///
/// Component kinds carry the declaring [`Schema`], so two component types
/// sharing a kind name are still told apart.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A text scalar.
    String,
    /// A boolean scalar.
    Boolean,
    /// An integer scalar.
    Integer,
    /// A sequence.
    List,
    /// A component declared by the given schema.
    Component(&'static Schema),
}

impl fmt::Debug for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("String"),
            Self::Boolean => f.write_str("Boolean"),
            Self::Integer => f.write_str("Integer"),
            Self::List => f.write_str("List"),
            Self::Component(schema) => f.debug_tuple("Component").field(&schema.kind()).finish(),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Boolean => f.write_str("boolean"),
            Self::Integer => f.write_str("integer"),
            Self::List => f.write_str("list"),
            Self::Component(schema) => write!(f, "{} object", schema.kind()),
        }
    }
}

/// Renders an accepted-type set as a readable list for error messages.
pub(crate) fn describe_kinds(kinds: &[ValueKind]) -> String {
    kinds
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" or ")
}
