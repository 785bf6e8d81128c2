//! Core schema model for Forma.
//!
//! Defines the read-only descriptors every other Forma crate exchanges:
//! - [`FieldConfig`]: presentation, table, and validation metadata for one field
//! - [`ActionConfig`]: a user-triggerable operation and where it is shown
//! - [`GroupConfig`]: a named visual grouping of fields
//! - [`SchemaProvide`]: the fully resolved schema handed to render layers
//! - [`Scope`]: the closed set of UI lifecycle contexts
//! - [`Translate`]: the key-in, text-out translation contract
//!
//! These types are produced by the builders and the schema compiler and are
//! consumed by the proxies, the validation engine, and the dispatcher.

mod action;
mod error;
mod field;
mod rule;
mod schema;
mod scope;
mod translate;

pub use action::{ActionConfig, Align, Position, RowCondition, Variant};
pub use error::ModelError;
pub use field::{Component, DataType, FieldConfig, FormConfig, TableConfig};
pub use rule::ValidationRule;
pub use schema::{GroupConfig, Identity, ResourceMeta, SchemaProvide};
pub use scope::Scope;
pub use translate::Translate;

/// A dynamic field value.
pub use serde_json::Value;

/// A data record keyed by field name.
pub type Record = serde_json::Map<String, Value>;
