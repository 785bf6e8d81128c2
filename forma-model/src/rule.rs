use crate::{Record, Value};
use serde::{Deserialize, Serialize};

/// A declarative validation rule attached to a field.
///
/// Rules are plain data. Pattern rules carry their expression as a source
/// string plus a flags string (`params.regex`, `params.flags`) rather than a
/// compiled expression, so cloning a rule is always a full deep copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRule {
    pub rule: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Record>,
    /// Overrides the built-in (or translated) error text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationRule {
    pub fn new(rule: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            params: None,
            message: None,
        }
    }

    /// Shorthand for `{rule: "required"}`.
    pub fn required() -> Self {
        Self::new("required")
    }

    /// A rule with a single `params.value` (min, max, minLength, minDate, ...).
    pub fn with_value(rule: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut params = Record::new();
        params.insert("value".into(), value.into());
        Self {
            rule: rule.into(),
            params: Some(params),
            message: None,
        }
    }

    /// A pattern rule. `flags` uses the single-letter convention (`"i"`, `"im"`).
    pub fn pattern(source: impl Into<String>, flags: &str, message: Option<String>) -> Self {
        let mut params = Record::new();
        params.insert("regex".into(), Value::String(source.into()));
        if !flags.is_empty() {
            params.insert("flags".into(), Value::String(flags.to_string()));
        }
        if let Some(message) = message {
            params.insert("message".into(), Value::String(message));
        }
        Self {
            rule: "pattern".into(),
            params: Some(params),
            message: None,
        }
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Looks up a parameter by name.
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params.as_ref().and_then(|p| p.get(name))
    }
}
