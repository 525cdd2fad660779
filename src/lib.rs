//! Blockkit: validated, declarative builders for messaging-platform payloads.
//!
//! This crate turns typed constructor arguments into ordered JSON structures
//! that match the platform's composition-object schema, rejecting invalid
//! input at construction time.
//!
//! # Architecture
//!
//! Two layers, leaves first:
//!
//! - **Fields**: stateless validators for a single attribute, configured once
//!   when a component type is declared
//! - **Components**: ordered registries of named fields plus cross-field
//!   invariants; construction validates every argument, and `build` serialises
//!   the result recursively
//!
//! Concrete objects are thin declarations over the component layer.
//!
//! # Modules
//!
//! - [`field`]: field validators and the dynamic argument value type
//! - [`component`]: schemas, arguments and validated component instances
//! - [`objects`]: text, confirm, option, option group, filter and dispatch
//!   action configuration objects
//! - [`error`]: the validation error type
//!
//! # Examples
//!
//! ```
//! use blockkit::objects::{Composition, Confirm, Text};
//!
//! let confirm = Confirm::new(
//!     Text::plain("Are you sure?")?,
//!     Text::markdown("This *cannot* be undone.")?,
//!     Text::plain("Delete")?,
//!     Text::plain("Cancel")?,
//! )?;
//! let payload = serde_json::to_string(&confirm)?;
//! assert!(payload.starts_with(r#"{"title":{"type":"plain_text""#));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod component;
pub mod error;
pub mod field;
pub mod objects;

pub use error::{ValidationError, ValidationResult};
