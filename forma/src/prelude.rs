//! The types most domains need, in one import.

pub use crate::{Runtime, Settings};
pub use forma_builder::{action, field, group};
pub use forma_dispatch::{
    Context, DispatchError, DispatchResult, Dispatcher, Events, FieldTrigger, Handlers, Hooks,
    SchemaContracts, SearchParams, Surface,
};
pub use forma_model::{
    Align, Component, DataType, FieldConfig, Identity, Position, Record, Scope, Translate,
    ValidationRule, Value, Variant,
};
pub use forma_proxy::{PresentationProp, SchemaProxy, StateProxy};
pub use forma_schema::{
    ConfigurationError, DomainSpec, Schema, Template, configure, resolve_action_label,
    resolve_field_label, resolve_group_label,
};
pub use forma_validation::ValidatorRegistry;
