use serde::{Deserialize, Serialize};

/// Strictness switches for the schema compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerSettings {
    /// Removing an action the template does not define is an error.
    pub strict_removal: bool,
    /// A field naming a group that is not declared is an error.
    pub strict_groups: bool,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            strict_removal: true,
            strict_groups: true,
        }
    }
}

impl CompilerSettings {
    /// Accepts every removal and group reference.
    pub fn lenient() -> Self {
        Self {
            strict_removal: false,
            strict_groups: false,
        }
    }
}
