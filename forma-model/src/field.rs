use crate::{Record, Scope, ValidationRule, Value};
use serde::{Deserialize, Serialize};

/// Immutable descriptor for one field.
///
/// Produced by the field builders' `to_config()`; every instance is an
/// independent snapshot, so later builder calls never reach into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    pub component: Component,
    pub data_type: DataType,
    /// Component-specific parameters (precision, prefix, accept, options, ...).
    #[serde(default)]
    pub attrs: Record,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub validations: Vec<ValidationRule>,
    /// Scopes in which the field is active; `None` means every scope.
    #[serde(default)]
    pub scopes: Option<Vec<Scope>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Named states available to event handlers (e.g. "new", "error").
    #[serde(default)]
    pub states: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
}

impl FieldConfig {
    /// A bare config with default presentation and no rules.
    pub fn new(component: Component, data_type: DataType) -> Self {
        Self {
            component,
            data_type,
            attrs: Record::new(),
            form: FormConfig::default(),
            table: TableConfig::default(),
            validations: Vec::new(),
            scopes: None,
            group: None,
            states: Vec::new(),
            default_value: None,
        }
    }

    pub fn is_active_in(&self, scope: Scope) -> bool {
        self.scopes.as_ref().is_none_or(|s| s.contains(&scope))
    }

    pub fn is_required(&self) -> bool {
        self.validations.iter().any(|r| r.rule == "required")
    }

    pub fn has_state(&self, state: &str) -> bool {
        self.states.iter().any(|s| s == state)
    }

    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }
}

/// Presentation defaults for a field inside a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Width as a percentage of the form row.
    pub width: u32,
    /// Height in rows.
    pub height: u32,
    pub hidden: bool,
    pub disabled: bool,
    pub order: Option<i32>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 1,
            hidden: false,
            disabled: false,
            order: None,
        }
    }
}

/// Presentation defaults for a field as a table column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub show: bool,
    pub width: Option<u32>,
    pub sortable: bool,
    pub filterable: bool,
    pub order: Option<i32>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            show: true,
            width: None,
            sortable: false,
            filterable: false,
            order: None,
        }
    }
}

/// Semantic renderer kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Text,
    Textarea,
    Email,
    Password,
    Number,
    Currency,
    Date,
    Datetime,
    Time,
    Select,
    Multiselect,
    Radio,
    Checkbox,
    Toggle,
    File,
    Image,
    List,
    Tree,
}

/// Primitive category used by persistence mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    String,
    Number,
    Boolean,
    Date,
    Datetime,
    Time,
    Array,
    File,
}
