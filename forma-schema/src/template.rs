use forma_builder::{ActionDefinition, FieldDefinition, GroupDefinition, action};
use forma_model::{ActionConfig, Align, FieldConfig, GroupConfig, Position, Scope};
use indexmap::IndexMap;

/// The base definition every domain schema inherits from.
#[derive(Debug, Clone)]
pub struct Template {
    scopes: Vec<Scope>,
    groups: IndexMap<String, GroupConfig>,
    fields: IndexMap<String, FieldConfig>,
    actions: IndexMap<String, ActionConfig>,
}

impl Default for Template {
    fn default() -> Self {
        Self::new()
    }
}

impl Template {
    /// An empty template active in every scope.
    pub fn new() -> Self {
        Self {
            scopes: Scope::ALL.to_vec(),
            groups: IndexMap::new(),
            fields: IndexMap::new(),
            actions: IndexMap::new(),
        }
    }

    /// The stock CRUD template: every scope, plus the `add`, `view`, `edit`,
    /// `destroy`, `save`, and `cancel` actions.
    pub fn standard() -> Self {
        Self::new()
            .action(
                "add",
                action()
                    .primary()
                    .positions([Position::Top])
                    .scopes([Scope::Index])
                    .order(1),
            )
            .action(
                "view",
                action().positions([Position::Row]).scopes([Scope::Index]).order(1),
            )
            .action(
                "edit",
                action()
                    .positions([Position::Row, Position::Footer])
                    .scopes([Scope::Index, Scope::View])
                    .order(2),
            )
            .action(
                "destroy",
                action()
                    .destructive()
                    .positions([Position::Row, Position::Footer])
                    .scopes([Scope::Index, Scope::View, Scope::Edit])
                    .order(3),
            )
            .action(
                "cancel",
                action()
                    .open()
                    .positions([Position::Footer])
                    .scopes([Scope::Add, Scope::View, Scope::Edit])
                    .align(Align::End)
                    .order(9),
            )
            .action(
                "save",
                action()
                    .primary()
                    .positions([Position::Footer])
                    .scopes([Scope::Add, Scope::Edit])
                    .align(Align::End)
                    .order(10),
            )
    }

    pub fn scopes(mut self, scopes: impl IntoIterator<Item = Scope>) -> Self {
        self.scopes = scopes.into_iter().collect();
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
        self.actions.insert(name.into(), action.to_config());
        self
    }

    pub fn get_scopes(&self) -> &[Scope] {
        &self.scopes
    }

    pub fn get_groups(&self) -> &IndexMap<String, GroupConfig> {
        &self.groups
    }

    pub fn get_fields(&self) -> &IndexMap<String, FieldConfig> {
        &self.fields
    }

    pub fn get_actions(&self) -> &IndexMap<String, ActionConfig> {
        &self.actions
    }
}
