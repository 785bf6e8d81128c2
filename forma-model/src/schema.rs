use crate::{ActionConfig, FieldConfig, Position, Record, Scope, Value};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The fully resolved, read-only schema for one domain.
///
/// Inherited template entries and domain entries are already merged; this
/// is what render layers and persistence drivers consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaProvide {
    /// Resource name (e.g. "person").
    pub domain: String,
    pub identity: Identity,
    /// Field used as the human-readable label of a record.
    pub display: String,
    pub scopes: Vec<Scope>,
    pub groups: IndexMap<String, GroupConfig>,
    pub fields: IndexMap<String, FieldConfig>,
    pub actions: IndexMap<String, ActionConfig>,
}

impl SchemaProvide {
    pub fn field(&self, name: &str) -> Option<&FieldConfig> {
        self.fields.get(name)
    }

    pub fn action(&self, name: &str) -> Option<&ActionConfig> {
        self.actions.get(name)
    }

    pub fn has_scope(&self, scope: Scope) -> bool {
        self.scopes.contains(&scope)
    }

    /// Fields active in `scope`, ordered by `form.order`.
    ///
    /// Fields without an explicit order come after ordered ones and keep
    /// their declaration order.
    pub fn fields_in(&self, scope: Scope) -> Vec<(&str, &FieldConfig)> {
        let mut fields: Vec<_> = self
            .fields
            .iter()
            .filter(|(_, f)| f.is_active_in(scope))
            .map(|(name, f)| (name.as_str(), f))
            .collect();
        fields.sort_by_key(|(_, f)| (f.form.order.is_none(), f.form.order));
        fields
    }

    /// Fields shown as table columns, ordered by `table.order`.
    pub fn columns(&self) -> Vec<(&str, &FieldConfig)> {
        let mut columns: Vec<_> = self
            .fields
            .iter()
            .filter(|(_, f)| f.table.show && f.is_active_in(Scope::Index))
            .map(|(name, f)| (name.as_str(), f))
            .collect();
        columns.sort_by_key(|(_, f)| (f.table.order.is_none(), f.table.order));
        columns
    }

    /// Visible actions for `scope` rendered at `position`, ordered by `order`.
    pub fn actions_at(&self, scope: Scope, position: Position) -> Vec<(&str, &ActionConfig)> {
        let mut actions: Vec<_> = self
            .actions
            .iter()
            .filter(|(_, a)| !a.hidden && a.is_active_in(scope) && a.is_at(position))
            .map(|(name, a)| (name.as_str(), a))
            .collect();
        actions.sort_by_key(|(_, a)| a.order);
        actions
    }

    /// Persistence-facing metadata derived from this schema.
    pub fn meta(&self) -> ResourceMeta {
        ResourceMeta {
            resource: self.domain.clone(),
            identity: self.identity.clone(),
            fields: self.fields.clone(),
        }
    }
}

/// Primary key of a domain: one field or several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identity {
    Single(String),
    Composite(Vec<String>),
}

impl Default for Identity {
    fn default() -> Self {
        Self::Single("id".into())
    }
}

impl Identity {
    pub fn fields(&self) -> Vec<&str> {
        match self {
            Self::Single(name) => vec![name.as_str()],
            Self::Composite(names) => names.iter().map(String::as_str).collect(),
        }
    }

    /// Extracts the identity value from a record.
    ///
    /// Single identities yield the field value itself; composite identities
    /// yield an object holding each key field. Returns `None` if any key
    /// field is missing or null.
    pub fn extract(&self, record: &Record) -> Option<Value> {
        match self {
            Self::Single(name) => record.get(name).filter(|v| !v.is_null()).cloned(),
            Self::Composite(names) => {
                let mut key = Record::new();
                for name in names {
                    let value = record.get(name).filter(|v| !v.is_null())?;
                    key.insert(name.clone(), value.clone());
                }
                Some(Value::Object(key))
            }
        }
    }
}

/// Descriptor for a named visual grouping of fields.
///
/// A group owns no fields: fields name their group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    pub order: i32,
    pub width: u32,
    pub collapsible: bool,
    pub collapsed: bool,
    pub scopes: Option<Vec<Scope>>,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            order: 0,
            width: 100,
            collapsible: false,
            collapsed: false,
            scopes: None,
        }
    }
}

/// Metadata handed to persistence drivers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceMeta {
    pub resource: String,
    pub identity: Identity,
    pub fields: IndexMap<String, FieldConfig>,
}
