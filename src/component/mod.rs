//! Component layer: declarative objects composed of validated fields.
//!
//! A component type is declared as a [`Schema`]: an ordered registry of
//! `(external name, field)` pairs plus cross-field invariants. Constructing a
//! [`Component`] routes every argument through its field, then runs the
//! invariants; construction is all-or-nothing. [`Component::build`] walks the
//! declared fields in order and serialises nested components recursively.

mod arguments;
mod kind;
mod schema;

pub use arguments::Arguments;
pub use kind::ComponentKind;
pub use schema::{FieldDef, Invariant, Schema, SchemaBuilder};

use crate::{
    error::{ValidationError, ValidationResult},
    field::FieldValue,
};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use tracing::{debug, trace};

/// A validated instance of a declared component type.
///
/// Holds the validated value of every supplied field, keyed by external
/// name. Fields that were not supplied are absent rather than stored as a
/// null. Instances are immutable once constructed.
#[derive(Clone)]
pub struct Component {
    schema: &'static Schema,
    values: IndexMap<&'static str, FieldValue>,
}

impl Component {
    /// Validates `arguments` against `schema` and constructs the component.
    ///
    /// Each declared field is looked up in declaration order. An empty
    /// sequence counts as not supplied. Once every field validated, the
    /// schema's invariants run against the result.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownField`] for an argument that names
    /// no declared field, [`ValidationError::MissingField`] for an absent
    /// required field, the field's error wrapped in
    /// [`ValidationError::InvalidField`] when a value is rejected, or the
    /// first failing invariant.
    pub fn new(schema: &'static Schema, arguments: Arguments) -> ValidationResult<Self> {
        let result = Self::validate(schema, arguments);
        match &result {
            Ok(_) => trace!(component = %schema.kind(), "constructed component"),
            Err(error) => debug!(
                component = %schema.kind(),
                field = error.field(),
                %error,
                "rejected component arguments"
            ),
        }
        result
    }

    fn validate(schema: &'static Schema, mut arguments: Arguments) -> ValidationResult<Self> {
        if let Some(unknown) = arguments.names().find(|name| schema.field(name).is_none()) {
            return Err(ValidationError::UnknownField {
                component: schema.kind().to_string(),
                field: unknown.to_owned(),
            });
        }

        let mut values = IndexMap::with_capacity(schema.fields().len());
        for def in schema.fields() {
            let supplied = arguments
                .take(def.name())
                .filter(|value| !value.is_empty_list());
            match supplied {
                Some(raw) => {
                    let value = def
                        .field()
                        .validate(raw)
                        .map_err(|error| error.in_field(def.name()))?;
                    values.insert(def.name(), value);
                }
                None if def.is_required() => {
                    return Err(ValidationError::MissingField(def.name().to_owned()));
                }
                None => {}
            }
        }

        let component = Self { schema, values };
        schema.check_invariants(&component)?;
        Ok(component)
    }

    /// Returns the component's kind.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        self.schema.kind()
    }

    /// Returns the schema this component was validated against.
    #[must_use]
    pub const fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Returns the validated value of a field, if it was supplied.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Returns `true` when the field was supplied.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns a supplied text-scalar field.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_str)
    }

    /// Returns a supplied boolean field.
    #[must_use]
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(FieldValue::as_bool)
    }

    /// Returns a supplied sequence field.
    #[must_use]
    pub fn get_list(&self, name: &str) -> Option<&[FieldValue]> {
        self.get(name).and_then(FieldValue::as_list)
    }

    /// Serialises the component into a JSON object.
    ///
    /// Only supplied fields appear, in declaration order; nested components
    /// are built recursively. Building never mutates the component, so
    /// repeated calls yield equal output.
    #[must_use]
    pub fn build(&self) -> Value {
        let mut object = Map::with_capacity(self.values.len());
        for def in self.schema.fields() {
            if let Some(value) = self.values.get(def.name()) {
                object.insert(def.name().to_owned(), value.to_json());
            }
        }
        trace!(component = %self.kind(), keys = object.len(), "built component");
        Value::Object(object)
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        self.schema == other.schema && self.values == other.values
    }
}

impl Eq for Component {}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("kind", &self.kind())
            .field("values", &self.values)
            .finish()
    }
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.build().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{ArrayField, BooleanField, StringField, ValueKind};
    use rstest::rstest;
    use serde_json::json;
    use std::sync::LazyLock;

    const WIDGET: ComponentKind = ComponentKind::new("widget");

    fn require_label_when_muted(component: &Component) -> ValidationResult<()> {
        if component.get_bool("muted") == Some(true) && !component.contains("label") {
            return Err(ValidationError::invariant(
                WIDGET.name(),
                "muted widgets need a label",
            ));
        }
        Ok(())
    }

    static WIDGET_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
        Schema::builder(WIDGET)
            .required("id", StringField::new().max_length(8))
            .optional("label", StringField::new())
            .optional("muted", BooleanField::new())
            .optional("tags", ArrayField::of([ValueKind::String]).max_items(2))
            .invariant(require_label_when_muted)
            .build()
    });

    fn widget(arguments: Arguments) -> ValidationResult<Component> {
        Component::new(&WIDGET_SCHEMA, arguments)
    }

    #[test]
    fn build_emits_fields_in_declaration_order() {
        let component = widget(
            Arguments::new()
                .with("tags", vec!["a"])
                .with("muted", false)
                .with("id", "w1"),
        )
        .expect("valid widget");

        let built = component.build();
        let keys: Vec<&String> = built.as_object().expect("object").keys().collect();
        assert_eq!(keys, ["id", "muted", "tags"]);
        assert_eq!(built, json!({"id": "w1", "muted": false, "tags": ["a"]}));
    }

    #[test]
    fn absent_optional_fields_are_not_stored() {
        let component = widget(Arguments::new().with("id", "w1")).expect("valid widget");
        assert!(!component.contains("label"));
        assert_eq!(component.build(), json!({"id": "w1"}));
    }

    #[test]
    fn false_is_present_not_absent() {
        let component =
            widget(Arguments::new().with("id", "w1").with("muted", false)).expect("valid widget");
        assert_eq!(component.get_bool("muted"), Some(false));
    }

    #[test]
    fn missing_required_field_fails() {
        let error = widget(Arguments::new()).expect_err("id is required");
        assert_eq!(error, ValidationError::MissingField("id".to_owned()));
    }

    #[test]
    fn field_error_is_annotated_with_name() {
        let error =
            widget(Arguments::new().with("id", "far-too-long")).expect_err("id is too long");
        assert_eq!(error.field(), Some("id"));
        assert!(matches!(error.root_cause(), ValidationError::TooLong { max: 8, .. }));
    }

    #[test]
    fn unknown_argument_fails() {
        let error = widget(Arguments::new().with("id", "w1").with("colour", "red"))
            .expect_err("colour is not declared");
        assert!(matches!(
            error,
            ValidationError::UnknownField { ref field, .. } if field == "colour"
        ));
    }

    #[test]
    fn empty_sequence_counts_as_absent() {
        let component = widget(Arguments::new().with("id", "w1").with("tags", Vec::<String>::new()))
            .expect("valid widget");
        assert!(!component.contains("tags"));
    }

    #[test]
    fn invariant_runs_after_fields() {
        let error = widget(Arguments::new().with("id", "w1").with("muted", true))
            .expect_err("label is needed");
        assert!(matches!(error, ValidationError::Invariant { .. }));
    }

    #[rstest]
    #[case(Arguments::new().with("id", "w1"))]
    #[case(Arguments::new().with("id", "w1").with("label", "x").with("muted", true))]
    fn build_is_repeatable(#[case] arguments: Arguments) {
        let component = widget(arguments).expect("valid widget");
        assert_eq!(component.build(), component.build());
    }

    #[test]
    fn serializes_as_built_object() {
        let component = widget(Arguments::new().with("id", "w1").with("label", "Go"))
            .expect("valid widget");
        let encoded = serde_json::to_string(&component).expect("serialize");
        assert_eq!(encoded, r#"{"id":"w1","label":"Go"}"#);
    }
}
