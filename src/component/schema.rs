//! Ordered field registries for component types.

use super::{Component, ComponentKind};
use crate::{error::ValidationResult, field::Field};
use std::{
    fmt,
    hash::{Hash, Hasher},
    ptr,
};

/// A cross-field check run after every field of a component validated.
pub type Invariant = fn(&Component) -> ValidationResult<()>;

/// Declaration of one field within a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    name: &'static str,
    field: Field,
    required: bool,
}

impl FieldDef {
    /// Returns the external serialisation name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the validator.
    #[must_use]
    pub const fn field(&self) -> &Field {
        &self.field
    }

    /// Returns `true` when construction fails without this field.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }
}

/// The declared shape of a component type: its kind, its fields in
/// serialisation order, and its cross-field invariants.
///
/// A schema is declared once per component type and shared, read-only, by
/// every instance of that type. Schemas compare by identity: two schemas
/// declaring the same kind name are still different component types.
///
/// # Examples
///
/// ```
/// use blockkit::component::{Arguments, Component, ComponentKind, Schema};
/// use blockkit::field::{BooleanField, StringField};
/// use std::sync::LazyLock;
///
/// static BADGE: LazyLock<Schema> = LazyLock::new(|| {
///     Schema::builder(ComponentKind::new("badge"))
///         .required("label", StringField::new().max_length(10))
///         .optional("muted", BooleanField::new())
///         .build()
/// });
///
/// let badge = Component::new(&BADGE, Arguments::new().with("label", "new"))
///     .expect("valid badge");
/// assert_eq!(badge.build(), serde_json::json!({"label": "new"}));
/// ```
pub struct Schema {
    kind: ComponentKind,
    fields: Vec<FieldDef>,
    invariants: Vec<Invariant>,
}

impl Schema {
    /// Starts declaring a schema for the given kind.
    #[must_use]
    pub const fn builder(kind: ComponentKind) -> SchemaBuilder {
        SchemaBuilder {
            kind,
            fields: Vec::new(),
            invariants: Vec::new(),
        }
    }

    /// Returns the component kind this schema declares.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Returns the field declarations in serialisation order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Returns the declaration for the named field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|def| def.name == name)
    }

    /// Runs every invariant against a component whose fields validated.
    ///
    /// # Errors
    ///
    /// Returns the first invariant failure.
    pub fn check_invariants(&self, component: &Component) -> ValidationResult<()> {
        self.invariants
            .iter()
            .try_for_each(|invariant| invariant(component))
    }
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

impl Eq for Schema {}

impl Hash for Schema {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ptr::hash(self, state);
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("kind", &self.kind)
            .field("fields", &self.fields)
            .field("invariants", &self.invariants.len())
            .finish()
    }
}

/// Builder registering a schema's fields one call at a time.
pub struct SchemaBuilder {
    kind: ComponentKind,
    fields: Vec<FieldDef>,
    invariants: Vec<Invariant>,
}

impl SchemaBuilder {
    /// Declares a field that must be supplied.
    #[must_use]
    pub fn required(self, name: &'static str, field: impl Into<Field>) -> Self {
        self.declare(name, field.into(), true)
    }

    /// Declares a field that may be left out.
    #[must_use]
    pub fn optional(self, name: &'static str, field: impl Into<Field>) -> Self {
        self.declare(name, field.into(), false)
    }

    /// Adds a cross-field invariant, checked in declaration order.
    #[must_use]
    pub fn invariant(mut self, invariant: Invariant) -> Self {
        self.invariants.push(invariant);
        self
    }

    /// Finishes the declaration.
    #[must_use]
    pub fn build(self) -> Schema {
        Schema {
            kind: self.kind,
            fields: self.fields,
            invariants: self.invariants,
        }
    }

    fn declare(mut self, name: &'static str, field: Field, required: bool) -> Self {
        debug_assert!(
            self.fields.iter().all(|def| def.name != name),
            "field '{name}' declared twice for {}",
            self.kind
        );
        self.fields.push(FieldDef {
            name,
            field,
            required,
        });
        self
    }
}

impl fmt::Debug for SchemaBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaBuilder")
            .field("kind", &self.kind)
            .field("fields", &self.fields)
            .field("invariants", &self.invariants.len())
            .finish()
    }
}
