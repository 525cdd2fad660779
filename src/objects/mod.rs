//! Composition objects of the messaging platform.
//!
//! Each object is a thin declaration over the component layer: a static
//! [`Schema`] listing its fields, its cross-field invariants, and a typed
//! wrapper around the validated [`Component`].

/// Implements [`Composition`], argument-based construction, conversion into
/// [`FieldValue`] and `Serialize` for a newtype over [`Component`].
macro_rules! composition {
    ($object:ident, $schema:ident) => {
        impl $object {
            /// Constructs the object from keyword-style arguments.
            ///
            /// # Errors
            ///
            /// Returns a [`ValidationError`](crate::error::ValidationError)
            /// when a field rejects its value, a required field is missing,
            /// or a cross-field invariant does not hold.
            pub fn from_arguments(
                arguments: crate::component::Arguments,
            ) -> crate::error::ValidationResult<Self> {
                crate::component::Component::new(&$schema, arguments).map(Self)
            }
        }

        impl crate::objects::Composition for $object {
            fn schema() -> &'static crate::component::Schema {
                &$schema
            }

            fn component(&self) -> &crate::component::Component {
                &self.0
            }

            fn into_component(self) -> crate::component::Component {
                self.0
            }
        }

        impl From<$object> for crate::field::FieldValue {
            fn from(object: $object) -> Self {
                Self::Component(object.0)
            }
        }

        impl serde::Serialize for $object {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&self.0, serializer)
            }
        }
    };
}

pub mod limits;

mod confirm;
mod dispatch;
mod filter;
mod option;
mod text;

#[cfg(test)]
mod tests;

pub use confirm::{Confirm, ConfirmStyle};
pub use dispatch::{DispatchActionConfig, Trigger};
pub use filter::{ConversationType, Filter};
pub use option::{OptionGroup, OptionObject};
pub use text::Text;
pub use crate::field::TextType;

use crate::{
    component::{Component, ComponentKind, Schema},
    error::{ValidationError, ValidationResult},
    field::FieldValue,
};
use serde_json::Value;
use std::collections::HashSet;

/// A typed composition object backed by a validated [`Component`].
pub trait Composition {
    /// Returns the schema shared by every instance of this object.
    fn schema() -> &'static Schema
    where
        Self: Sized;

    /// Returns the underlying component.
    fn component(&self) -> &Component;

    /// Consumes the object, returning the underlying component.
    fn into_component(self) -> Component
    where
        Self: Sized;

    /// Returns the object's kind.
    fn kind(&self) -> ComponentKind {
        self.component().kind()
    }

    /// Serialises the object into its platform JSON representation.
    fn build(&self) -> Value {
        self.component().build()
    }
}

/// Fails unless every string in `values` is one of `allowed`.
pub(crate) fn check_members(
    field: &str,
    values: &[FieldValue],
    allowed: &[&str],
) -> ValidationResult<()> {
    for value in values {
        let text = value.as_str().unwrap_or_default();
        if !allowed.contains(&text) {
            return Err(ValidationError::NotAnOption {
                value: text.to_owned(),
                options: allowed.iter().map(|option| (*option).to_owned()).collect(),
            }
            .in_field(field));
        }
    }
    Ok(())
}

/// Fails when a string appears more than once in `values`.
pub(crate) fn check_unique(
    component: ComponentKind,
    field: &str,
    values: &[FieldValue],
) -> ValidationResult<()> {
    let mut seen = HashSet::new();
    for value in values.iter().filter_map(FieldValue::as_str) {
        if !seen.insert(value) {
            return Err(ValidationError::invariant(
                component.name(),
                format!("'{value}' is listed more than once in {field}"),
            ));
        }
    }
    Ok(())
}
