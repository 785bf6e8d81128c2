use forma_builder::{ActionDefinition, FieldDefinition, GroupDefinition};
use forma_model::{ActionConfig, FieldConfig, GroupConfig, Identity, Scope};
use indexmap::IndexMap;

/// A domain-level action declaration.
#[derive(Debug, Clone)]
pub enum ActionEntry {
    /// Adds the action, or replaces an inherited one of the same name.
    Set(ActionConfig),
    /// Deletes an inherited action.
    Remove,
}

/// Domain-specific part of a schema, merged over a [`Template`](crate::Template).
///
/// Definitions are snapshotted as they are added, so a builder reused after
/// being passed here does not affect this `DomainSpec`.
#[derive(Debug, Clone, Default)]
pub struct DomainSpec {
    pub(crate) identity: Option<Identity>,
    pub(crate) display: Option<String>,
    pub(crate) scopes: Option<Vec<Scope>>,
    pub(crate) groups: IndexMap<String, GroupConfig>,
    pub(crate) fields: IndexMap<String, FieldConfig>,
    pub(crate) actions: IndexMap<String, ActionEntry>,
}

impl DomainSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Primary key field. Defaults to `id`.
    pub fn identity(mut self, field: impl Into<String>) -> Self {
        self.identity = Some(Identity::Single(field.into()));
        self
    }

    pub fn composite_identity<S: Into<String>>(mut self, fields: impl IntoIterator<Item = S>) -> Self {
        self.identity = Some(Identity::Composite(fields.into_iter().map(Into::into).collect()));
        self
    }

    /// Field used as the human-readable label of a record. Defaults to the
    /// first identity field.
    pub fn display(mut self, field: impl Into<String>) -> Self {
        self.display = Some(field.into());
        self
    }

    /// Replaces the template's scopes for this domain.
    pub fn scopes(mut self, scopes: impl IntoIterator<Item = Scope>) -> Self {
        self.scopes = Some(scopes.into_iter().collect());
        self
    }

    pub fn group(mut self, name: impl Into<String>, group: impl GroupDefinition) -> Self {
        self.groups.insert(name.into(), group.to_config());
        self
    }

    pub fn field(mut self, name: impl Into<String>, field: impl FieldDefinition) -> Self {
        self.fields.insert(name.into(), field.to_config());
        self
    }

    pub fn action(mut self, name: impl Into<String>, action: impl ActionDefinition) -> Self {
        self.actions.insert(name.into(), ActionEntry::Set(action.to_config()));
        self
    }

    /// Removes an inherited action from this domain.
    pub fn remove_action(mut self, name: impl Into<String>) -> Self {
        self.actions.insert(name.into(), ActionEntry::Remove);
        self
    }
}
