use crate::domain::{ActionEntry, DomainSpec};
use crate::error::{ConfigurationError, SchemaResult};
use crate::settings::CompilerSettings;
use crate::template::Template;
use forma_model::{ActionConfig, FieldConfig, GroupConfig, Identity, SchemaProvide, Scope};
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Wraps a base template into a schema factory.
pub fn configure(template: Template) -> Configurator {
    Configurator {
        template: Arc::new(template),
        settings: CompilerSettings::default(),
    }
}

/// Factory producing domain schemas that inherit from one template.
#[derive(Debug, Clone)]
pub struct Configurator {
    template: Arc<Template>,
    settings: CompilerSettings,
}

impl Configurator {
    #[must_use]
    pub fn with_settings(mut self, settings: CompilerSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn settings(&self) -> CompilerSettings {
        self.settings
    }

    /// Merges `spec` over the template and compiles the result.
    pub fn create(&self, domain: impl Into<String>, spec: DomainSpec) -> SchemaResult<Schema> {
        let domain = domain.into();
        let template = &self.template;

        let scopes = spec
            .scopes
            .unwrap_or_else(|| template.get_scopes().to_vec());

        let mut groups = template.get_groups().clone();
        groups.extend(spec.groups);

        let mut fields = template.get_fields().clone();
        for (name, field) in spec.fields {
            if fields.insert(name.clone(), field).is_some() {
                debug!(domain = %domain, field = %name, "domain field overrides template field");
            }
        }

        let actions = self.merge_actions(&domain, spec.actions)?;

        check_groups(&domain, &fields, &groups, self.settings.strict_groups)?;
        check_patterns(&domain, &fields)?;

        let identity = spec.identity.unwrap_or_default();
        let display = spec.display.unwrap_or_else(|| {
            identity
                .fields()
                .first()
                .map(|f| f.to_string())
                .unwrap_or_default()
        });

        debug!(
            domain = %domain,
            fields = fields.len(),
            actions = actions.len(),
            "compiled schema"
        );

        Ok(Schema {
            provide: Arc::new(SchemaProvide {
                domain,
                identity,
                display,
                scopes,
                groups,
                fields,
                actions,
            }),
        })
    }

    fn merge_actions(
        &self,
        domain: &str,
        entries: IndexMap<String, ActionEntry>,
    ) -> SchemaResult<IndexMap<String, ActionConfig>> {
        let mut actions = self.template.get_actions().clone();
        for (name, entry) in entries {
            match entry {
                ActionEntry::Set(config) => {
                    if actions.insert(name.clone(), config).is_some() {
                        debug!(domain, action = %name, "domain action overrides inherited action");
                    }
                }
                ActionEntry::Remove => {
                    if actions.shift_remove(&name).is_some() {
                        debug!(domain, action = %name, "removed inherited action");
                    } else if self.settings.strict_removal {
                        return Err(ConfigurationError::MissingRemovalTarget {
                            domain: domain.to_string(),
                            action: name,
                        });
                    } else {
                        warn!(domain, action = %name, "ignoring removal of unknown action");
                    }
                }
            }
        }
        Ok(actions)
    }
}

/// Unknown group references fail in strict mode and are logged otherwise.
fn check_groups(
    domain: &str,
    fields: &IndexMap<String, FieldConfig>,
    groups: &IndexMap<String, GroupConfig>,
    strict: bool,
) -> SchemaResult<()> {
    for (name, field) in fields {
        let Some(group) = &field.group else { continue };
        if groups.contains_key(group) {
            continue;
        }
        if strict {
            return Err(ConfigurationError::UnknownGroup {
                domain: domain.to_string(),
                field: name.clone(),
                group: group.clone(),
            });
        }
        warn!(domain, field = %name, group = %group, "field references unknown group");
    }
    Ok(())
}

fn check_patterns(domain: &str, fields: &IndexMap<String, FieldConfig>) -> SchemaResult<()> {
    for (name, field) in fields {
        for rule in field.validations.iter().filter(|r| r.rule == "pattern") {
            let invalid = |detail: String| ConfigurationError::InvalidPattern {
                domain: domain.to_string(),
                field: name.clone(),
                detail,
            };
            let (source, flags) = forma_validation::pattern_source(rule)
                .ok_or_else(|| invalid("missing params.regex".to_string()))?;
            forma_validation::compile_pattern(source, flags).map_err(|e| invalid(e.to_string()))?;
        }
    }
    Ok(())
}

/// A compiled domain schema.
///
/// Cheap to clone; the resolved [`SchemaProvide`] is shared and never
/// mutated after compilation.
#[derive(Debug, Clone)]
pub struct Schema {
    provide: Arc<SchemaProvide>,
}

impl Schema {
    pub fn domain(&self) -> &str {
        &self.provide.domain
    }

    pub fn identity(&self) -> &Identity {
        &self.provide.identity
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.provide.scopes
    }

    pub fn get_fields(&self) -> &IndexMap<String, FieldConfig> {
        &self.provide.fields
    }

    pub fn get_actions(&self) -> &IndexMap<String, ActionConfig> {
        &self.provide.actions
    }

    pub fn get_groups(&self) -> &IndexMap<String, GroupConfig> {
        &self.provide.groups
    }

    /// The resolved snapshot handed to render layers.
    pub fn provide(&self) -> Arc<SchemaProvide> {
        Arc::clone(&self.provide)
    }
}
