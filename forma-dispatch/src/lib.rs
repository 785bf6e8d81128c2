//! Event, handler, and hook dispatch for Forma.
//!
//! A domain binds functions by schema name:
//! - [`Handlers`]: action name to [`Handler`]
//! - [`Events`]: field name and trigger to [`FieldEvent`]
//! - [`Hooks`]: scope to [`BootstrapHook`] and [`FetchHook`]
//!
//! [`SchemaContracts`] checks those names against a compiled
//! [`Schema`](forma_schema::Schema) at build time. A [`Dispatcher`] then
//! resolves the function for a name and runs it with a [`Context`] holding
//! the instance's proxies and the external collaborators described in
//! [`contract`].
//!
//! ```ignore
//! let dispatcher = Dispatcher::new(&schema, component)
//!     .with_service(service)
//!     .with_handlers(Handlers::new().on("publish", |ctx, _| {
//!         ctx.state.set("published", true);
//!         Ok(())
//!     }))?
//!     .with_defaults();
//!
//! dispatcher.dispatch_action("publish", &mut surface, None).await?;
//! ```

mod check;
mod context;
pub mod contract;
pub mod defaults;
mod dispatcher;
mod error;
mod function;
pub mod mock;
mod surface;

pub use check::SchemaContracts;
pub use context::{Context, FieldTrigger};
pub use contract::{
    ComponentContract, Dialog, FormContract, Loading, Navigator, Page, PersistenceContract,
    SearchParams, Service, ServiceContract, SortOrder, TableContract, Toast,
};
pub use dispatcher::Dispatcher;
pub use error::{ContractError, ContractResult, DispatchError, DispatchResult};
pub use function::{BootstrapHook, Events, FetchHook, FieldEvent, Handler, Handlers, Hooks};
pub use surface::Surface;
