//! In-memory collaborators for tests and examples.

use crate::contract::{
    ComponentContract, Dialog, FormContract, Loading, Navigator, Page, PersistenceContract,
    SearchParams, SortOrder, TableContract, Toast,
};
use crate::error::{ContractError, ContractResult};
use async_trait::async_trait;
use forma_model::{Identity, Record, ResourceMeta, Scope, Value};
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering as AtomicOrdering};
use std::sync::{Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Persistence driver backed by an ordered in-memory map.
///
/// Single-field identities missing from created records get sequential
/// numeric ids.
#[derive(Debug, Default)]
pub struct MockPersistence {
    rows: Mutex<IndexMap<String, Record>>,
    initialized: Mutex<Vec<String>>,
    next_id: AtomicU64,
    reject_next: Mutex<Option<String>>,
}

impl MockPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next call fail with [`ContractError::Rejected`].
    pub fn reject_next(&self, reason: impl Into<String>) {
        *lock(&self.reject_next) = Some(reason.into());
    }

    pub fn len(&self) -> usize {
        lock(&self.rows).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: &Value) -> Option<Record> {
        lock(&self.rows).get(&key(id)).cloned()
    }

    /// Resources passed to `initialize`, in call order.
    pub fn initialized(&self) -> Vec<String> {
        lock(&self.initialized).clone()
    }

    fn check(&self) -> ContractResult<()> {
        match lock(&self.reject_next).take() {
            Some(reason) => Err(ContractError::Rejected(reason)),
            None => Ok(()),
        }
    }
}

fn key(id: &Value) -> String {
    id.to_string()
}

fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => a.cmp(b),
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Less,
        (_, None | Some(Value::Null)) => Ordering::Greater,
        (Some(a), Some(b)) => a.to_string().cmp(&b.to_string()),
    }
}

#[async_trait]
impl PersistenceContract for MockPersistence {
    async fn initialize(&self, meta: &ResourceMeta) -> ContractResult<()> {
        self.check()?;
        lock(&self.initialized).push(meta.resource.clone());
        Ok(())
    }

    async fn create(&self, meta: &ResourceMeta, mut data: Record) -> ContractResult<Record> {
        self.check()?;
        if let Identity::Single(field) = &meta.identity {
            if data.get(field).is_none_or(Value::is_null) {
                let id = self.next_id.fetch_add(1, AtomicOrdering::SeqCst) + 1;
                data.insert(field.clone(), Value::from(id));
            }
        }
        let id = meta
            .identity
            .extract(&data)
            .ok_or_else(|| ContractError::Rejected("record has no identity".into()))?;
        let mut rows = lock(&self.rows);
        if rows.contains_key(&key(&id)) {
            return Err(ContractError::Rejected(format!("duplicate {} {id}", meta.resource)));
        }
        rows.insert(key(&id), data.clone());
        Ok(data)
    }

    async fn read(&self, _meta: &ResourceMeta, id: &Value) -> ContractResult<Option<Record>> {
        self.check()?;
        Ok(lock(&self.rows).get(&key(id)).cloned())
    }

    async fn update(&self, meta: &ResourceMeta, id: &Value, data: Record) -> ContractResult<Record> {
        self.check()?;
        let mut rows = lock(&self.rows);
        let row = rows
            .get_mut(&key(id))
            .ok_or_else(|| ContractError::NotFound(format!("{} {id}", meta.resource)))?;
        row.extend(data);
        Ok(row.clone())
    }

    async fn destroy(&self, meta: &ResourceMeta, id: &Value) -> ContractResult<()> {
        self.check()?;
        lock(&self.rows)
            .shift_remove(&key(id))
            .map(|_| ())
            .ok_or_else(|| ContractError::NotFound(format!("{} {id}", meta.resource)))
    }

    async fn search(&self, _meta: &ResourceMeta, params: &SearchParams) -> ContractResult<Page> {
        self.check()?;
        let mut data: Vec<Record> = lock(&self.rows).values().cloned().collect();
        if let Some(field) = &params.sort {
            data.sort_by(|a, b| {
                let ordering = compare(a.get(field), b.get(field));
                match params.order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
        }
        let total = data.len() as u64;
        let data = data
            .into_iter()
            .skip(params.offset())
            .take(params.limit as usize)
            .collect();
        Ok(Page {
            data,
            total,
            page: params.page,
            limit: params.limit,
        })
    }
}

/// A component that records every call it receives.
///
/// Calls are logged as short strings (`"push /people/1 {\"id\":1}"`,
/// `"toast.success Saved"`, `"loading.show"`, ...).
#[derive(Debug)]
pub struct MockComponent {
    scope: Mutex<Scope>,
    routes: IndexMap<Scope, String>,
    confirm: AtomicBool,
    calls: Mutex<Vec<String>>,
}

impl MockComponent {
    /// A component in `scope` with routes `/{domain}/{scope}` for every
    /// scope, which confirms every dialog.
    pub fn new(domain: &str, scope: Scope) -> Self {
        let routes = Scope::ALL
            .into_iter()
            .map(|s| (s, format!("/{domain}/{s}")))
            .collect();
        Self {
            scope: Mutex::new(scope),
            routes,
            confirm: AtomicBool::new(true),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A component with no routes.
    pub fn without_routes(scope: Scope) -> Self {
        Self {
            routes: IndexMap::new(),
            ..Self::new("", scope)
        }
    }

    pub fn set_scope(&self, scope: Scope) {
        *lock(&self.scope) = scope;
    }

    /// Answer given to later confirmation dialogs.
    pub fn answer_confirm(&self, answer: bool) {
        self.confirm.store(answer, AtomicOrdering::SeqCst);
    }

    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    pub fn called(&self, call: &str) -> bool {
        lock(&self.calls).iter().any(|c| c == call)
    }

    fn record(&self, call: String) {
        lock(&self.calls).push(call);
    }
}

impl ComponentContract for MockComponent {
    fn scope(&self) -> Scope {
        *lock(&self.scope)
    }

    fn route(&self, scope: Scope) -> Option<String> {
        self.routes.get(&scope).cloned()
    }

    fn navigator(&self) -> &dyn Navigator {
        self
    }

    fn dialog(&self) -> &dyn Dialog {
        self
    }

    fn toast(&self) -> &dyn Toast {
        self
    }

    fn loading(&self) -> &dyn Loading {
        self
    }

    fn reload(&self) {
        self.record("reload".into());
    }
}

impl Navigator for MockComponent {
    fn push(&self, route: &str, params: Option<&Record>) {
        match params {
            Some(params) => self.record(format!("push {route} {}", Value::Object(params.clone()))),
            None => self.record(format!("push {route}")),
        }
    }

    fn back(&self) {
        self.record("back".into());
    }

    fn replace(&self, route: &str, _params: Option<&Record>) {
        self.record(format!("replace {route}"));
    }
}

#[async_trait]
impl Dialog for MockComponent {
    async fn confirm(&self, title: &str, _message: &str) -> bool {
        self.record(format!("confirm {title}"));
        self.confirm.load(AtomicOrdering::SeqCst)
    }

    async fn alert(&self, title: &str, _message: &str) {
        self.record(format!("alert {title}"));
    }
}

impl Toast for MockComponent {
    fn success(&self, message: &str) {
        self.record(format!("toast.success {message}"));
    }

    fn error(&self, message: &str) {
        self.record(format!("toast.error {message}"));
    }

    fn warning(&self, message: &str) {
        self.record(format!("toast.warning {message}"));
    }

    fn info(&self, message: &str) {
        self.record(format!("toast.info {message}"));
    }
}

impl Loading for MockComponent {
    fn show(&self) {
        self.record("loading.show".into());
    }

    fn hide(&self) {
        self.record("loading.hide".into());
    }
}

/// A form whose validation result is fixed by the test.
#[derive(Debug)]
pub struct MockForm {
    valid: AtomicBool,
    checks: AtomicUsize,
}

impl MockForm {
    pub fn new(valid: bool) -> Self {
        Self {
            valid: AtomicBool::new(valid),
            checks: AtomicUsize::new(0),
        }
    }

    pub fn checks(&self) -> usize {
        self.checks.load(AtomicOrdering::SeqCst)
    }
}

impl FormContract for MockForm {
    fn validate(&self) -> bool {
        self.checks.fetch_add(1, AtomicOrdering::SeqCst);
        self.valid.load(AtomicOrdering::SeqCst)
    }
}

/// A table that counts reloads.
#[derive(Debug, Default)]
pub struct MockTable {
    reloads: AtomicUsize,
}

impl MockTable {
    pub fn reloads(&self) -> usize {
        self.reloads.load(AtomicOrdering::SeqCst)
    }
}

impl TableContract for MockTable {
    fn reload(&self) {
        self.reloads.fetch_add(1, AtomicOrdering::SeqCst);
    }
}
