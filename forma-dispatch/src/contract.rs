//! Contracts implemented by the render layer and the persistence driver.
//!
//! Everything here is external to the core: the dispatcher only calls
//! through these traits. In-memory implementations live in
//! [`mock`](crate::mock).

use crate::error::ContractResult;
use async_trait::async_trait;
use forma_model::{Record, ResourceMeta, Scope, Value};
use serde::{Deserialize, Serialize};

/// Sort direction for [`SearchParams`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// One page request. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub page: u32,
    pub limit: u32,
    pub sort: Option<String>,
    pub order: SortOrder,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            sort: None,
            order: SortOrder::Asc,
        }
    }
}

impl SearchParams {
    pub fn page(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            ..Self::default()
        }
    }

    pub fn sorted(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort = Some(field.into());
        self.order = order;
        self
    }

    /// Number of records before this page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1) as usize * self.limit as usize
    }
}

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub data: Vec<Record>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

/// Storage driver for one resource.
#[async_trait]
pub trait PersistenceContract: Send + Sync {
    /// Prepares storage for the resource (tables, indexes, ...).
    async fn initialize(&self, meta: &ResourceMeta) -> ContractResult<()>;

    async fn create(&self, meta: &ResourceMeta, data: Record) -> ContractResult<Record>;

    async fn read(&self, meta: &ResourceMeta, id: &Value) -> ContractResult<Option<Record>>;

    async fn update(&self, meta: &ResourceMeta, id: &Value, data: Record) -> ContractResult<Record>;

    async fn destroy(&self, meta: &ResourceMeta, id: &Value) -> ContractResult<()>;

    async fn search(&self, meta: &ResourceMeta, params: &SearchParams) -> ContractResult<Page>;
}

/// Domain-facing operations over a resource.
#[async_trait]
pub trait ServiceContract: Send + Sync {
    async fn paginate(&self, params: &SearchParams) -> ContractResult<Page>;

    async fn read(&self, id: &Value) -> ContractResult<Option<Record>>;

    async fn create(&self, data: Record) -> ContractResult<Record>;

    async fn update(&self, id: &Value, data: Record) -> ContractResult<Record>;

    async fn destroy(&self, id: &Value) -> ContractResult<()>;
}

/// A [`ServiceContract`] that forwards to a persistence driver, passing the
/// resource metadata on every call.
#[derive(Debug, Clone)]
pub struct Service<P> {
    meta: ResourceMeta,
    persistence: P,
}

impl<P: PersistenceContract> Service<P> {
    pub fn new(meta: ResourceMeta, persistence: P) -> Self {
        Self { meta, persistence }
    }

    pub fn meta(&self) -> &ResourceMeta {
        &self.meta
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub async fn initialize(&self) -> ContractResult<()> {
        self.persistence.initialize(&self.meta).await
    }
}

#[async_trait]
impl<P: PersistenceContract> ServiceContract for Service<P> {
    async fn paginate(&self, params: &SearchParams) -> ContractResult<Page> {
        self.persistence.search(&self.meta, params).await
    }

    async fn read(&self, id: &Value) -> ContractResult<Option<Record>> {
        self.persistence.read(&self.meta, id).await
    }

    async fn create(&self, data: Record) -> ContractResult<Record> {
        self.persistence.create(&self.meta, data).await
    }

    async fn update(&self, id: &Value, data: Record) -> ContractResult<Record> {
        self.persistence.update(&self.meta, id, data).await
    }

    async fn destroy(&self, id: &Value) -> ContractResult<()> {
        self.persistence.destroy(&self.meta, id).await
    }
}

pub trait Navigator: Send + Sync {
    fn push(&self, route: &str, params: Option<&Record>);
    fn back(&self);
    fn replace(&self, route: &str, params: Option<&Record>);
}

#[async_trait]
pub trait Dialog: Send + Sync {
    /// Asks the user to confirm; `false` when declined.
    async fn confirm(&self, title: &str, message: &str) -> bool;
    async fn alert(&self, title: &str, message: &str);
}

pub trait Toast: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
    fn warning(&self, message: &str);
    fn info(&self, message: &str);
}

pub trait Loading: Send + Sync {
    fn show(&self);
    fn hide(&self);
}

/// The hosting page or component, supplied by the render layer.
pub trait ComponentContract: Send + Sync {
    /// Scope the component is currently rendering.
    fn scope(&self) -> Scope;

    /// Route of the page rendering `scope`, if there is one.
    fn route(&self, scope: Scope) -> Option<String>;

    fn navigator(&self) -> &dyn Navigator;
    fn dialog(&self) -> &dyn Dialog;
    fn toast(&self) -> &dyn Toast;
    fn loading(&self) -> &dyn Loading;

    /// Re-renders the whole component.
    fn reload(&self);
}

/// A rendered form.
pub trait FormContract: Send + Sync {
    /// Runs the form's own validation and reports whether it passed.
    fn validate(&self) -> bool;
}

/// A rendered table.
pub trait TableContract: Send + Sync {
    /// Fetches the current page again.
    fn reload(&self);
}
