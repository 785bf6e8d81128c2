use crate::settings::Settings;
use forma_dispatch::{ComponentContract, Dispatcher};
use forma_schema::{Configurator, Schema, Template, configure};
use forma_validation::ValidatorRegistry;
use std::sync::Arc;
use tracing::info;

/// Process-wide Forma state, built once at startup.
///
/// Owns the validator registry. Custom validators are registered while
/// bootstrapping; afterwards the registry is shared read-only with every
/// dispatcher.
#[derive(Debug, Clone)]
pub struct Runtime {
    settings: Settings,
    registry: Arc<ValidatorRegistry>,
}

impl Runtime {
    pub fn bootstrap(settings: Settings) -> Self {
        Self::bootstrap_with(settings, |_| {})
    }

    /// Like [`bootstrap`](Self::bootstrap), letting `register` add custom
    /// validators before the registry is frozen.
    pub fn bootstrap_with(settings: Settings, register: impl FnOnce(&mut ValidatorRegistry)) -> Self {
        let mut registry = if settings.validation.builtins {
            ValidatorRegistry::new()
        } else {
            ValidatorRegistry::without_builtins()
        };
        register(&mut registry);
        info!(
            builtins = settings.validation.builtins,
            strict_removal = settings.compiler.strict_removal,
            strict_groups = settings.compiler.strict_groups,
            "forma runtime ready"
        );
        Self {
            settings,
            registry: Arc::new(registry),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn registry(&self) -> Arc<ValidatorRegistry> {
        Arc::clone(&self.registry)
    }

    /// A schema factory honouring the configured compiler strictness.
    pub fn configure(&self, template: Template) -> Configurator {
        configure(template).with_settings(self.settings.compiler)
    }

    /// A dispatcher for `schema` that validates with this runtime's
    /// registry.
    pub fn dispatcher(&self, schema: &Schema, component: Arc<dyn ComponentContract>) -> Dispatcher {
        Dispatcher::new(schema, component).with_registry(self.registry())
    }
}
