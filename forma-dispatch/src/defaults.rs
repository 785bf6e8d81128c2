//! Default CRUD behaviour for the standard template.
//!
//! [`Dispatcher::with_defaults`](crate::Dispatcher::with_defaults) binds these
//! to every standard action and scope the schema declares and the domain
//! has not bound itself.

use crate::context::Context;
use crate::contract::{Page, SearchParams};
use crate::error::{ContractError, DispatchError, DispatchResult};
use crate::function::{BootstrapHook, FetchHook, Handler, Handlers, Hooks};
use crate::surface::default_record;
use async_trait::async_trait;
use forma_model::{Record, SchemaProvide, Scope, Value};
use tracing::debug;

/// Default handlers for the standard actions present in `provide`.
pub fn handlers(provide: &SchemaProvide) -> Handlers {
    let mut handlers = Handlers::new();
    for name in provide.actions.keys() {
        handlers = match name.as_str() {
            "add" => handlers.with("add", Navigate::to(Scope::Add)),
            "view" => handlers.with("view", Navigate::to_record(Scope::View)),
            "edit" => handlers.with("edit", Navigate::to_record(Scope::Edit)),
            "cancel" => handlers.with("cancel", Back),
            "save" => handlers.with("save", Save),
            "destroy" => handlers.with("destroy", Destroy),
            _ => handlers,
        };
    }
    handlers
}

/// Default hooks for the scopes `provide` declares.
pub fn hooks(provide: &SchemaProvide) -> Hooks {
    let mut hooks = Hooks::new();
    for scope in &provide.scopes {
        hooks = match scope {
            Scope::Index => hooks.on_fetch(Scope::Index, Paginate),
            Scope::Add => hooks.on_bootstrap(Scope::Add, ApplyDefaults),
            Scope::View | Scope::Edit => hooks.on_bootstrap(*scope, LoadRecord),
        };
    }
    hooks
}

/// Navigates to the route of a scope, passing the record identity as `id`
/// when the target shows one record.
#[derive(Debug, Clone, Copy)]
pub struct Navigate {
    scope: Scope,
    with_id: bool,
}

impl Navigate {
    pub fn to(scope: Scope) -> Self {
        Self {
            scope,
            with_id: false,
        }
    }

    pub fn to_record(scope: Scope) -> Self {
        Self {
            scope,
            with_id: true,
        }
    }
}

#[async_trait]
impl Handler for Navigate {
    async fn handle(&self, ctx: &mut Context<'_>, row: Option<&Record>) -> DispatchResult<()> {
        let route = ctx.component.route(self.scope).ok_or_else(|| {
            DispatchError::MissingCollaborator(format!("route for scope {}", self.scope))
        })?;
        if !self.with_id {
            ctx.component.navigator().push(&route, None);
            return Ok(());
        }
        let current;
        let record = match row {
            Some(row) => row,
            None => {
                current = ctx.state.current();
                &current
            }
        };
        let mut params = Record::new();
        params.insert("id".into(), ctx.identity_of(record)?);
        ctx.component.navigator().push(&route, Some(&params));
        Ok(())
    }
}

/// Leaves the current page.
#[derive(Debug, Clone, Copy)]
pub struct Back;

#[async_trait]
impl Handler for Back {
    async fn handle(&self, ctx: &mut Context<'_>, _row: Option<&Record>) -> DispatchResult<()> {
        ctx.component.navigator().back();
        Ok(())
    }
}

/// Validates the state, then creates (`add` scope) or updates (`edit`
/// scope) the record and navigates back.
///
/// A failed validation shows a warning and persists nothing.
#[derive(Debug, Clone, Copy)]
pub struct Save;

#[async_trait]
impl Handler for Save {
    async fn handle(&self, ctx: &mut Context<'_>, _row: Option<&Record>) -> DispatchResult<()> {
        if !ctx.is_valid() {
            debug!(domain = ctx.domain(), "save blocked by validation");
            let message = ctx.text("common.messages.invalid", "Please review the highlighted fields");
            ctx.component.toast().warning(&message);
            return Ok(());
        }
        let data = ctx.state.current();
        let id = match ctx.scope {
            Scope::Add => None,
            Scope::Edit => Some(ctx.identity_of(&data)?),
            other => {
                return Err(DispatchError::InvalidInput(format!(
                    "save is not available in scope {other}"
                )));
            }
        };
        let service = ctx.service()?;

        ctx.component.loading().show();
        let saved = match &id {
            None => service.create(data).await,
            Some(id) => service.update(id, data).await,
        };
        ctx.component.loading().hide();
        let record = saved?;

        ctx.state.hydrate(record);
        let message = ctx.text("common.messages.saved", "Saved");
        ctx.component.toast().success(&message);
        ctx.component.navigator().back();
        Ok(())
    }
}

/// Asks for confirmation, destroys the record, and refreshes the list or
/// leaves the page.
///
/// Declining the confirmation is not an error.
#[derive(Debug, Clone, Copy)]
pub struct Destroy;

#[async_trait]
impl Handler for Destroy {
    async fn handle(&self, ctx: &mut Context<'_>, row: Option<&Record>) -> DispatchResult<()> {
        let current;
        let record = match row {
            Some(row) => row,
            None => {
                current = ctx.state.current();
                &current
            }
        };
        let id = ctx.identity_of(record)?;
        let service = ctx.service()?;

        let title = ctx.text("common.dialogs.destroy.title", "Delete record");
        let message = ctx.text("common.dialogs.destroy.message", "This cannot be undone.");
        if !ctx.component.dialog().confirm(&title, &message).await {
            debug!(domain = ctx.domain(), %id, "destroy declined");
            return Ok(());
        }

        ctx.component.loading().show();
        let destroyed = service.destroy(&id).await;
        ctx.component.loading().hide();
        destroyed?;

        let message = ctx.text("common.messages.destroyed", "Deleted");
        ctx.component.toast().success(&message);
        if ctx.scope == Scope::Index {
            match ctx.table {
                Some(table) => table.reload(),
                None => ctx.component.reload(),
            }
        } else {
            ctx.component.navigator().back();
        }
        Ok(())
    }
}

/// Loads the record named by `id` into the state.
#[derive(Debug, Clone, Copy)]
pub struct LoadRecord;

#[async_trait]
impl BootstrapHook for LoadRecord {
    async fn bootstrap(&self, ctx: &mut Context<'_>, id: Option<&Value>) -> DispatchResult<()> {
        let id = id.ok_or_else(|| {
            DispatchError::InvalidInput(format!("scope {} needs a record id", ctx.scope))
        })?;
        let service = ctx.service()?;

        ctx.component.loading().show();
        let found = service.read(id).await;
        ctx.component.loading().hide();

        match found? {
            Some(record) => {
                ctx.state.hydrate(record);
                Ok(())
            }
            None => Err(ContractError::NotFound(format!("{} {id}", ctx.domain())).into()),
        }
    }
}

/// Seeds the state with the default value of every field active in the
/// scope.
#[derive(Debug, Clone, Copy)]
pub struct ApplyDefaults;

#[async_trait]
impl BootstrapHook for ApplyDefaults {
    async fn bootstrap(&self, ctx: &mut Context<'_>, _id: Option<&Value>) -> DispatchResult<()> {
        let defaults = default_record(ctx.provide, ctx.scope);
        ctx.state.hydrate(defaults);
        Ok(())
    }
}

/// Asks the service for one page.
#[derive(Debug, Clone, Copy)]
pub struct Paginate;

#[async_trait]
impl FetchHook for Paginate {
    async fn fetch(&self, ctx: &mut Context<'_>, params: &SearchParams) -> DispatchResult<Page> {
        Ok(ctx.service()?.paginate(params).await?)
    }
}
