//! Function traits and the maps that bind them to schema names.

use crate::contract::{Page, SearchParams};
use crate::context::{Context, FieldTrigger};
use crate::error::DispatchResult;
use async_trait::async_trait;
use forma_model::{Record, Scope, Value};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Runs when an action is triggered. `row` is the table row the action was
/// triggered from, if any.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, ctx: &mut Context<'_>, row: Option<&Record>) -> DispatchResult<()>;
}

#[async_trait]
impl<F> Handler for F
where
    F: Fn(&mut Context<'_>, Option<&Record>) -> DispatchResult<()> + Send + Sync,
{
    async fn handle(&self, ctx: &mut Context<'_>, row: Option<&Record>) -> DispatchResult<()> {
        self(ctx, row)
    }
}

/// Runs when a field fires a trigger (`change`, `blur`, ...).
#[async_trait]
pub trait FieldEvent: Send + Sync {
    async fn fire(&self, ctx: &mut Context<'_>, event: FieldTrigger<'_>) -> DispatchResult<()>;
}

#[async_trait]
impl<F> FieldEvent for F
where
    F: Fn(&mut Context<'_>, FieldTrigger<'_>) -> DispatchResult<()> + Send + Sync,
{
    async fn fire(&self, ctx: &mut Context<'_>, event: FieldTrigger<'_>) -> DispatchResult<()> {
        self(ctx, event)
    }
}

/// Runs once each time a scope is entered.
#[async_trait]
pub trait BootstrapHook: Send + Sync {
    /// `id` is the identity of the record being opened, if any.
    async fn bootstrap(&self, ctx: &mut Context<'_>, id: Option<&Value>) -> DispatchResult<()>;
}

/// Runs for every list or paginate request.
#[async_trait]
pub trait FetchHook: Send + Sync {
    async fn fetch(&self, ctx: &mut Context<'_>, params: &SearchParams) -> DispatchResult<Page>;
}

/// Action handlers keyed by action name.
#[derive(Clone, Default)]
pub struct Handlers {
    entries: IndexMap<String, Arc<dyn Handler>>,
}

impl Handlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a synchronous closure.
    pub fn on<F>(self, action: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut Context<'_>, Option<&Record>) -> DispatchResult<()> + Send + Sync + 'static,
    {
        self.with(action, handler)
    }

    pub fn with(mut self, action: impl Into<String>, handler: impl Handler + 'static) -> Self {
        self.entries.insert(action.into(), Arc::new(handler));
        self
    }

    pub fn get(&self, action: &str) -> Option<&Arc<dyn Handler>> {
        self.entries.get(action)
    }

    pub fn contains(&self, action: &str) -> bool {
        self.entries.contains_key(action)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds entries from `other` whose names are not bound yet.
    pub(crate) fn fill_from(&mut self, other: Handlers) {
        for (name, handler) in other.entries {
            self.entries.entry(name).or_insert(handler);
        }
    }

    /// Adds every entry of `other`, replacing bindings of the same name.
    pub(crate) fn override_from(&mut self, other: Handlers) {
        self.entries.extend(other.entries);
    }
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}

/// Field events keyed by field name, then trigger name.
#[derive(Clone, Default)]
pub struct Events {
    entries: IndexMap<String, IndexMap<String, Arc<dyn FieldEvent>>>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a synchronous closure.
    pub fn on<F>(self, field: impl Into<String>, trigger: impl Into<String>, event: F) -> Self
    where
        F: Fn(&mut Context<'_>, FieldTrigger<'_>) -> DispatchResult<()> + Send + Sync + 'static,
    {
        self.with(field, trigger, event)
    }

    pub fn with(
        mut self,
        field: impl Into<String>,
        trigger: impl Into<String>,
        event: impl FieldEvent + 'static,
    ) -> Self {
        self.entries
            .entry(field.into())
            .or_default()
            .insert(trigger.into(), Arc::new(event));
        self
    }

    pub fn get(&self, field: &str, trigger: &str) -> Option<&Arc<dyn FieldEvent>> {
        self.entries.get(field)?.get(trigger)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn triggers(&self, field: &str) -> Vec<&str> {
        self.entries
            .get(field)
            .map(|t| t.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn override_from(&mut self, other: Events) {
        for (field, triggers) in other.entries {
            self.entries.entry(field).or_default().extend(triggers);
        }
    }
}

impl fmt::Debug for Events {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (field, triggers) in &self.entries {
            map.entry(field, &triggers.keys().collect::<Vec<_>>());
        }
        map.finish()
    }
}

/// Bootstrap and fetch hooks keyed by scope.
#[derive(Clone, Default)]
pub struct Hooks {
    bootstrap: IndexMap<Scope, Arc<dyn BootstrapHook>>,
    fetch: IndexMap<Scope, Arc<dyn FetchHook>>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_bootstrap(mut self, scope: Scope, hook: impl BootstrapHook + 'static) -> Self {
        self.bootstrap.insert(scope, Arc::new(hook));
        self
    }

    pub fn on_fetch(mut self, scope: Scope, hook: impl FetchHook + 'static) -> Self {
        self.fetch.insert(scope, Arc::new(hook));
        self
    }

    pub fn bootstrap(&self, scope: Scope) -> Option<&Arc<dyn BootstrapHook>> {
        self.bootstrap.get(&scope)
    }

    pub fn fetch(&self, scope: Scope) -> Option<&Arc<dyn FetchHook>> {
        self.fetch.get(&scope)
    }

    /// Every scope that has at least one hook.
    pub fn scopes(&self) -> Vec<Scope> {
        let mut scopes: Vec<Scope> = self
            .bootstrap
            .keys()
            .chain(self.fetch.keys())
            .copied()
            .collect();
        scopes.sort();
        scopes.dedup();
        scopes
    }

    pub(crate) fn override_from(&mut self, other: Hooks) {
        self.bootstrap.extend(other.bootstrap);
        self.fetch.extend(other.fetch);
    }

    pub(crate) fn fill_from(&mut self, other: Hooks) {
        for (scope, hook) in other.bootstrap {
            self.bootstrap.entry(scope).or_insert(hook);
        }
        for (scope, hook) in other.fetch {
            self.fetch.entry(scope).or_insert(hook);
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("bootstrap", &self.bootstrap.keys().collect::<Vec<_>>())
            .field("fetch", &self.fetch.keys().collect::<Vec<_>>())
            .finish()
    }
}
