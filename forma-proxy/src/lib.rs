//! Per-instance proxies handed to handlers and events.
//!
//! A form or table instance owns one [`StateProxy`] (record values) and one
//! [`SchemaProxy`] (field presentation). Both leave their inputs untouched
//! and accumulate writes separately, so the render layer can read back
//! exactly what changed during a dispatch.

mod error;
mod presentation;
mod schema;
mod state;

pub use error::{ProxyError, ProxyResult};
pub use presentation::{Presentation, PresentationPatch, PresentationProp};
pub use schema::{FieldHandle, Overrides, SchemaProxy};
pub use state::StateProxy;
