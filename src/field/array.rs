//! Sequence field.

use super::{FieldValue, ValueKind, value::describe_kinds};
use crate::error::{ValidationError, ValidationResult};

/// Accepts a sequence whose items are all of an accepted kind.
///
/// An empty accepted-kind set places no restriction on item kinds. Items are
/// checked, not transformed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrayField {
    accepts: Vec<ValueKind>,
    max_items: Option<usize>,
}

impl ArrayField {
    /// Creates a field accepting items of any kind.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            accepts: Vec::new(),
            max_items: None,
        }
    }

    /// Creates a field accepting only items of the given kinds.
    #[must_use]
    pub fn of(accepts: impl IntoIterator<Item = ValueKind>) -> Self {
        Self {
            accepts: accepts.into_iter().collect(),
            max_items: None,
        }
    }

    /// Limits the sequence to `max_items` entries.
    #[must_use]
    pub const fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    /// Validates a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidType`] when the value is not a
    /// sequence or an item is of a kind outside the accepted set (annotated
    /// with the item index), and [`ValidationError::TooManyItems`] when the
    /// sequence is too long.
    pub fn validate(&self, value: FieldValue) -> ValidationResult<FieldValue> {
        let Some(items) = value.as_list() else {
            return Err(ValidationError::InvalidType {
                expected: ValueKind::List.to_string(),
                actual: value.kind(),
            });
        };

        if !self.accepts.is_empty() {
            for (index, item) in items.iter().enumerate() {
                let kind = item.kind();
                if !self.accepts.contains(&kind) {
                    return Err(ValidationError::InvalidType {
                        expected: describe_kinds(&self.accepts),
                        actual: kind,
                    }
                    .in_field(index.to_string()));
                }
            }
        }

        if let Some(max) = self.max_items
            && items.len() > max
        {
            return Err(ValidationError::TooManyItems {
                max,
                actual: items.len(),
            });
        }

        Ok(value)
    }
}
