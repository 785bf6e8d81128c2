//! Fluent definition builders for Forma schemas.
//!
//! Each field family has its own builder type carrying only the methods that
//! make sense for it (`min_length` on text, `precision` on numbers,
//! `max_depth` on trees, ...). Every chain method consumes and returns the
//! builder, and `to_config()` snapshots the draft into an independent
//! [`FieldConfig`]:
//!
//! ```
//! use forma_builder::field;
//!
//! let name = field::text().required().max_length(80).width(50);
//! let config = name.to_config();
//! assert_eq!(config.form.width, 50);
//! assert_eq!(config.validations.len(), 2);
//! ```

mod action;
pub mod field;
mod group;

pub use action::{ActionBuilder, action};
pub use field::{
    DateBuilder, FileBuilder, ListBuilder, NumberBuilder, SelectBuilder, SelectOption,
    TextBuilder, TimeBuilder, ToggleBuilder, TreeBuilder,
};
pub use group::{GroupBuilder, group};

use forma_model::{ActionConfig, FieldConfig, GroupConfig};

/// Anything that can produce a field snapshot.
///
/// Implemented by every field builder and by [`FieldConfig`] itself, so
/// schema definitions accept either.
pub trait FieldDefinition {
    fn to_config(&self) -> FieldConfig;
}

impl FieldDefinition for FieldConfig {
    fn to_config(&self) -> FieldConfig {
        self.clone()
    }
}

/// Anything that can produce an action snapshot.
pub trait ActionDefinition {
    fn to_config(&self) -> ActionConfig;
}

impl ActionDefinition for ActionConfig {
    fn to_config(&self) -> ActionConfig {
        self.clone()
    }
}

/// Anything that can produce a group snapshot.
pub trait GroupDefinition {
    fn to_config(&self) -> GroupConfig;
}

impl GroupDefinition for GroupConfig {
    fn to_config(&self) -> GroupConfig {
        self.clone()
    }
}
