use crate::contract::{FormContract, TableContract};
use forma_model::{Record, SchemaProvide, Scope};
use forma_proxy::{Overrides, SchemaProxy, StateProxy};
use std::sync::Arc;

/// One rendered form or table instance.
///
/// Created fresh per instance and never shared between concurrent renders.
pub struct Surface {
    pub state: StateProxy,
    pub schema: SchemaProxy,
    pub form: Option<Arc<dyn FormContract>>,
    pub table: Option<Arc<dyn TableContract>>,
}

impl Surface {
    pub fn new(provide: &SchemaProvide, snapshot: Record, overrides: Overrides) -> Self {
        Self {
            state: StateProxy::new(snapshot),
            schema: SchemaProxy::new(&provide.fields, overrides),
            form: None,
            table: None,
        }
    }

    /// A surface whose snapshot holds the default values of the fields
    /// active in `scope`.
    pub fn with_defaults(provide: &SchemaProvide, scope: Scope) -> Self {
        Self::new(provide, default_record(provide, scope), Overrides::new())
    }

    #[must_use]
    pub fn with_form(mut self, form: Arc<dyn FormContract>) -> Self {
        self.form = Some(form);
        self
    }

    #[must_use]
    pub fn with_table(mut self, table: Arc<dyn TableContract>) -> Self {
        self.table = Some(table);
        self
    }
}

pub(crate) fn default_record(provide: &SchemaProvide, scope: Scope) -> Record {
    provide
        .fields
        .iter()
        .filter(|(_, field)| field.is_active_in(scope))
        .filter_map(|(name, field)| Some((name.clone(), field.default_value.clone()?)))
        .collect()
}
