use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A lifecycle context for a UI surface.
///
/// The set is closed: scope complements (see `exclude_scopes` on the
/// builders) are always computed against [`Scope::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// The list/table view.
    Index,
    /// Creating a new record.
    Add,
    /// Read-only display of a record.
    View,
    /// Editing an existing record.
    Edit,
}

impl Scope {
    /// Every scope, in canonical order.
    pub const ALL: [Scope; 4] = [Scope::Index, Scope::Add, Scope::View, Scope::Edit];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Add => "add",
            Self::View => "view",
            Self::Edit => "edit",
        }
    }

    /// Returns the scopes of [`Scope::ALL`] not contained in `excluded`.
    pub fn complement(excluded: &[Scope]) -> Vec<Scope> {
        Self::ALL
            .into_iter()
            .filter(|s| !excluded.contains(s))
            .collect()
    }

    /// Whether records are edited (rather than listed or displayed) in this scope.
    pub fn is_form(&self) -> bool {
        matches!(self, Self::Add | Self::Edit)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "index" => Ok(Self::Index),
            "add" => Ok(Self::Add),
            "view" => Ok(Self::View),
            "edit" => Ok(Self::Edit),
            other => Err(ModelError::UnknownScope(other.to_string())),
        }
    }
}
