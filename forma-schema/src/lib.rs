//! Schema compiler for Forma.
//!
//! A base [`Template`] carries the scopes, fields, and actions every domain
//! inherits. [`configure`] turns it into a [`Configurator`] whose
//! [`create`](Configurator::create) merges a [`DomainSpec`] over the template
//! and produces a compiled [`Schema`]:
//!
//! - domain fields and actions override template entries of the same name
//!   (whole-entry replacement, no deep merge)
//! - [`ActionEntry::Remove`] deletes an inherited action
//! - configuration mistakes surface as [`ConfigurationError`] at build time
//!
//! The [`labels`] module holds the translation fallback chains used when
//! rendering field, action, and group names.

mod compiler;
mod domain;
mod error;
pub mod labels;
mod settings;
mod template;

pub use compiler::{Configurator, Schema, configure};
pub use domain::{ActionEntry, DomainSpec};
pub use error::{ConfigurationError, SchemaResult};
pub use labels::{resolve_action_label, resolve_field_label, resolve_group_label};
pub use settings::CompilerSettings;
pub use template::Template;
