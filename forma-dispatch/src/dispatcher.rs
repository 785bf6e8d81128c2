use crate::check::{check_events, check_handlers, check_hooks};
use crate::context::{Context, FieldTrigger};
use crate::contract::{ComponentContract, Page, SearchParams, ServiceContract};
use crate::defaults;
use crate::error::DispatchResult;
use crate::function::{Events, Handlers, Hooks};
use crate::surface::Surface;
use forma_model::{Record, SchemaProvide, Scope, Translate, Value};
use forma_schema::{Schema, SchemaResult};
use forma_validation::ValidatorRegistry;
use std::sync::Arc;
use tracing::debug;

/// Resolves and runs the functions bound to one domain schema.
///
/// Async functions are awaited; nothing else is ordered, retried, or timed
/// out. A missing function is not an error: the dispatch reports `false`
/// (or `None` for fetches) and the caller decides what that means.
pub struct Dispatcher {
    provide: Arc<SchemaProvide>,
    handlers: Handlers,
    events: Events,
    hooks: Hooks,
    component: Arc<dyn ComponentContract>,
    service: Option<Arc<dyn ServiceContract>>,
    registry: Arc<ValidatorRegistry>,
    translate: Option<Arc<dyn Translate>>,
}

impl Dispatcher {
    pub fn new(schema: &Schema, component: Arc<dyn ComponentContract>) -> Self {
        Self {
            provide: schema.provide(),
            handlers: Handlers::new(),
            events: Events::new(),
            hooks: Hooks::new(),
            component,
            service: None,
            registry: Arc::new(ValidatorRegistry::new()),
            translate: None,
        }
    }

    /// Binds action handlers, failing on names the schema does not declare.
    /// Later bindings replace earlier ones of the same name.
    pub fn with_handlers(mut self, handlers: Handlers) -> SchemaResult<Self> {
        check_handlers(&self.provide, &handlers)?;
        self.handlers.override_from(handlers);
        Ok(self)
    }

    pub fn with_events(mut self, events: Events) -> SchemaResult<Self> {
        check_events(&self.provide, &events)?;
        self.events.override_from(events);
        Ok(self)
    }

    pub fn with_hooks(mut self, hooks: Hooks) -> SchemaResult<Self> {
        check_hooks(&self.provide, &hooks)?;
        self.hooks.override_from(hooks);
        Ok(self)
    }

    /// Fills every standard action and scope without a bound function with
    /// the default CRUD behaviour.
    #[must_use]
    pub fn with_defaults(mut self) -> Self {
        let handlers = defaults::handlers(&self.provide);
        let hooks = defaults::hooks(&self.provide);
        self.handlers.fill_from(handlers);
        self.hooks.fill_from(hooks);
        self
    }

    #[must_use]
    pub fn with_service(mut self, service: Arc<dyn ServiceContract>) -> Self {
        self.service = Some(service);
        self
    }

    #[must_use]
    pub fn with_registry(mut self, registry: Arc<ValidatorRegistry>) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub fn with_translate(mut self, translate: Arc<dyn Translate>) -> Self {
        self.translate = Some(translate);
        self
    }

    pub fn provide(&self) -> &SchemaProvide {
        &self.provide
    }

    pub fn handlers(&self) -> &Handlers {
        &self.handlers
    }

    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    fn context<'a>(&'a self, scope: Scope, surface: &'a mut Surface) -> Context<'a> {
        Context {
            scope,
            provide: &self.provide,
            state: &mut surface.state,
            schema: &mut surface.schema,
            component: self.component.as_ref(),
            service: self.service.as_deref(),
            form: surface.form.as_deref(),
            table: surface.table.as_deref(),
            registry: &self.registry,
            translate: self.translate.as_deref(),
        }
    }

    /// Runs the handler bound to `action` in the component's current scope.
    pub async fn dispatch_action(
        &self,
        action: &str,
        surface: &mut Surface,
        row: Option<&Record>,
    ) -> DispatchResult<bool> {
        let Some(handler) = self.handlers.get(action) else {
            debug!(domain = %self.provide.domain, action, "no handler bound");
            return Ok(false);
        };
        let scope = self.component.scope();
        debug!(domain = %self.provide.domain, action, %scope, "dispatching action");
        let mut ctx = self.context(scope, surface);
        handler.handle(&mut ctx, row).await?;
        Ok(true)
    }

    /// Runs the event bound to `trigger` on `field`.
    pub async fn dispatch_event(
        &self,
        field: &str,
        trigger: &str,
        value: &Value,
        surface: &mut Surface,
    ) -> DispatchResult<bool> {
        let (Some(event), Some(config)) = (self.events.get(field, trigger), self.provide.field(field))
        else {
            debug!(domain = %self.provide.domain, field, trigger, "no event bound");
            return Ok(false);
        };
        let scope = self.component.scope();
        debug!(domain = %self.provide.domain, field, trigger, "dispatching event");
        let mut ctx = self.context(scope, surface);
        let fired = FieldTrigger {
            field,
            trigger,
            value,
            config,
        };
        event.fire(&mut ctx, fired).await?;
        Ok(true)
    }

    /// Runs the bootstrap hook of `scope`, once per scope entry.
    pub async fn bootstrap(
        &self,
        scope: Scope,
        id: Option<&Value>,
        surface: &mut Surface,
    ) -> DispatchResult<bool> {
        let Some(hook) = self.hooks.bootstrap(scope) else {
            debug!(domain = %self.provide.domain, %scope, "no bootstrap hook");
            return Ok(false);
        };
        debug!(domain = %self.provide.domain, %scope, "bootstrapping");
        let mut ctx = self.context(scope, surface);
        hook.bootstrap(&mut ctx, id).await?;
        Ok(true)
    }

    /// Runs the fetch hook of `scope` for one page request.
    pub async fn fetch(
        &self,
        scope: Scope,
        params: &SearchParams,
        surface: &mut Surface,
    ) -> DispatchResult<Option<Page>> {
        let Some(hook) = self.hooks.fetch(scope) else {
            debug!(domain = %self.provide.domain, %scope, "no fetch hook");
            return Ok(None);
        };
        debug!(domain = %self.provide.domain, %scope, page = params.page, "fetching");
        let mut ctx = self.context(scope, surface);
        hook.fetch(&mut ctx, params).await.map(Some)
    }
}
