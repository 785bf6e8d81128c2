use crate::contract::{ComponentContract, FormContract, ServiceContract, TableContract};
use crate::error::{DispatchError, DispatchResult};
use forma_model::{FieldConfig, Record, SchemaProvide, Scope, Translate, Value};
use forma_proxy::{SchemaProxy, StateProxy};
use forma_validation::{FieldErrors, ValidatorRegistry};

/// Everything a handler, event, or hook can reach.
///
/// The proxies belong to the form or table instance being dispatched on;
/// the rest is shared by every dispatch of the same [`Dispatcher`](crate::Dispatcher).
pub struct Context<'a> {
    /// Scope the dispatch runs in.
    pub scope: Scope,
    pub provide: &'a SchemaProvide,
    pub state: &'a mut StateProxy,
    pub schema: &'a mut SchemaProxy,
    pub component: &'a dyn ComponentContract,
    pub service: Option<&'a dyn ServiceContract>,
    pub form: Option<&'a dyn FormContract>,
    pub table: Option<&'a dyn TableContract>,
    pub registry: &'a ValidatorRegistry,
    pub translate: Option<&'a dyn Translate>,
}

impl Context<'_> {
    pub fn domain(&self) -> &str {
        &self.provide.domain
    }

    pub fn service(&self) -> DispatchResult<&dyn ServiceContract> {
        self.service
            .ok_or_else(|| DispatchError::MissingCollaborator("service".into()))
    }

    /// Identity value of `record`, failing when any identity field is
    /// missing.
    pub fn identity_of(&self, record: &Record) -> DispatchResult<Value> {
        self.provide.identity.extract(record).ok_or_else(|| {
            DispatchError::InvalidInput(format!(
                "record has no value for identity {:?}",
                self.provide.identity.fields()
            ))
        })
    }

    /// Validates the current state against the fields active in this scope.
    pub fn validate(&self) -> FieldErrors {
        self.registry.validate_scope(
            &self.state.current(),
            &self.provide.fields,
            self.scope,
            self.translate,
        )
    }

    /// Asks the rendered form when there is one, the registry otherwise.
    pub fn is_valid(&self) -> bool {
        match self.form {
            Some(form) => form.validate(),
            None => self.validate().is_empty(),
        }
    }

    /// Translation of `key`, or `fallback` when it is unresolved or no
    /// translator is installed.
    pub fn text(&self, key: &str, fallback: &str) -> String {
        self.translate
            .and_then(|t| t.resolve(key))
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// The field-level half of an event dispatch.
#[derive(Debug, Clone, Copy)]
pub struct FieldTrigger<'a> {
    pub field: &'a str,
    /// Trigger name, such as `change` or `blur`.
    pub trigger: &'a str,
    pub value: &'a Value,
    pub config: &'a FieldConfig,
}
