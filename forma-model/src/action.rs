use crate::error::ModelError;
use crate::{Record, Scope};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Descriptor for one user-triggerable action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionConfig {
    #[serde(default)]
    pub variant: Variant,
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub align: Align,
    #[serde(default)]
    pub hidden: bool,
    /// `true` means no permission is required to trigger the action.
    #[serde(default)]
    pub open: bool,
    /// Scopes in which the action is offered; `None` means every scope.
    #[serde(default)]
    pub scopes: Option<Vec<Scope>>,
    /// Row-level visibility gate. Not serialized.
    #[serde(skip)]
    pub condition: Option<RowCondition>,
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Default,
            positions: Vec::new(),
            order: 0,
            align: Align::Start,
            hidden: false,
            open: false,
            scopes: None,
            condition: None,
        }
    }
}

impl ActionConfig {
    pub fn is_active_in(&self, scope: Scope) -> bool {
        self.scopes.as_ref().is_none_or(|s| s.contains(&scope))
    }

    pub fn is_at(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    /// Whether the action should be offered for `row`: not hidden, and the
    /// row condition (if any) holds.
    pub fn is_visible_for(&self, row: &Record) -> bool {
        !self.hidden && self.condition.as_ref().is_none_or(|c| c.evaluate(row))
    }
}

// Two configs are equal when their data is equal; conditions compare by identity.
impl PartialEq for ActionConfig {
    fn eq(&self, other: &Self) -> bool {
        let same_condition = match (&self.condition, &other.condition) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(&a.0, &b.0),
            _ => false,
        };
        self.variant == other.variant
            && self.positions == other.positions
            && self.order == other.order
            && self.align == other.align
            && self.hidden == other.hidden
            && self.open == other.open
            && self.scopes == other.scopes
            && same_condition
    }
}

/// Shared predicate deciding whether an action applies to a given row.
#[derive(Clone)]
pub struct RowCondition(Arc<dyn Fn(&Record) -> bool + Send + Sync>);

impl RowCondition {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Record) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn evaluate(&self, row: &Record) -> bool {
        (self.0)(row)
    }
}

impl fmt::Debug for RowCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RowCondition(..)")
    }
}

/// Visual emphasis of an action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Primary,
    Warning,
    Destructive,
}

impl FromStr for Variant {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "primary" => Ok(Self::Primary),
            "warning" => Ok(Self::Warning),
            "destructive" => Ok(Self::Destructive),
            other => Err(ModelError::UnknownVariant(other.to_string())),
        }
    }
}

/// Where an action is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Top,
    Footer,
    Row,
    Floating,
}

impl FromStr for Position {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "footer" => Ok(Self::Footer),
            "row" => Ok(Self::Row),
            "floating" => Ok(Self::Floating),
            other => Err(ModelError::UnknownPosition(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}
