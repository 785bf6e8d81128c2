//! Forma: schema-driven UI metadata.
//!
//! Domains describe their fields and actions once with the builders in
//! [`builder`]; [`schema`] compiles them over a shared template; render
//! layers read the resolved [`SchemaProvide`](model::SchemaProvide), validate
//! with [`validation`], and route user interaction through [`dispatch`].
//!
//! [`Runtime`] wires the process-wide pieces from [`Settings`]:
//!
//! ```no_run
//! use forma::prelude::*;
//!
//! let settings = Settings::load_from("forma.toml");
//! forma::logging::init(&settings.logging.filter);
//! let runtime = Runtime::bootstrap(settings);
//!
//! let schema = runtime
//!     .configure(Template::standard())
//!     .create("person", DomainSpec::new().field("name", field::text().required()))?;
//! # Ok::<(), forma::schema::ConfigurationError>(())
//! ```

mod error;
pub mod logging;
pub mod prelude;
mod runtime;
mod settings;

pub use error::{SettingsError, SettingsResult};
pub use runtime::Runtime;
pub use settings::{LoggingSettings, Settings, ValidationSettings};

pub use forma_builder as builder;
pub use forma_dispatch as dispatch;
pub use forma_model as model;
pub use forma_proxy as proxy;
pub use forma_schema as schema;
pub use forma_validation as validation;
