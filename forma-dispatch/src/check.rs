//! Build-time checks binding function maps to a compiled schema.

use crate::function::{Events, Handlers, Hooks};
use forma_model::SchemaProvide;
use forma_schema::{ConfigurationError, Schema, SchemaResult};

/// Name checks for function maps, run once when a domain is wired up.
///
/// Each method returns the map unchanged when every name it binds exists
/// in the schema, and a [`ConfigurationError`] otherwise.
pub trait SchemaContracts {
    fn handlers(&self, handlers: Handlers) -> SchemaResult<Handlers>;
    fn hooks(&self, hooks: Hooks) -> SchemaResult<Hooks>;
    fn events(&self, events: Events) -> SchemaResult<Events>;
}

impl SchemaContracts for Schema {
    fn handlers(&self, handlers: Handlers) -> SchemaResult<Handlers> {
        check_handlers(&self.provide(), &handlers)?;
        Ok(handlers)
    }

    fn hooks(&self, hooks: Hooks) -> SchemaResult<Hooks> {
        check_hooks(&self.provide(), &hooks)?;
        Ok(hooks)
    }

    fn events(&self, events: Events) -> SchemaResult<Events> {
        check_events(&self.provide(), &events)?;
        Ok(events)
    }
}

pub(crate) fn check_handlers(provide: &SchemaProvide, handlers: &Handlers) -> SchemaResult<()> {
    match handlers.names().find(|name| provide.action(name).is_none()) {
        Some(action) => Err(ConfigurationError::UnknownAction {
            domain: provide.domain.clone(),
            action: action.to_string(),
        }),
        None => Ok(()),
    }
}

pub(crate) fn check_hooks(provide: &SchemaProvide, hooks: &Hooks) -> SchemaResult<()> {
    match hooks.scopes().into_iter().find(|s| !provide.has_scope(*s)) {
        Some(scope) => Err(ConfigurationError::UnknownScope {
            domain: provide.domain.clone(),
            scope: scope.to_string(),
        }),
        None => Ok(()),
    }
}

pub(crate) fn check_events(provide: &SchemaProvide, events: &Events) -> SchemaResult<()> {
    match events.fields().find(|name| provide.field(name).is_none()) {
        Some(field) => Err(ConfigurationError::UnknownField {
            domain: provide.domain.clone(),
            field: field.to_string(),
        }),
        None => Ok(()),
    }
}
