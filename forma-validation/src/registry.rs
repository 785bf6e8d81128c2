use crate::rules;
use forma_model::{FieldConfig, Record, Scope, Translate, ValidationRule, Value};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A custom validator: returns the error text on failure, `None` on success.
pub type ValidatorFn = Arc<dyn Fn(&Value, &Record) -> Option<String> + Send + Sync>;

/// Errors per field name. Only fields with at least one error are present.
pub type FieldErrors = IndexMap<String, Vec<String>>;

/// Named validators available to rule evaluation.
///
/// Build one at application start, register custom validators, then share it
/// (typically behind an `Arc`). Custom validators shadow built-in rules of
/// the same name.
#[derive(Clone)]
pub struct ValidatorRegistry {
    custom: HashMap<String, ValidatorFn>,
    builtins: bool,
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.custom.keys().collect();
        names.sort();
        f.debug_struct("ValidatorRegistry")
            .field("custom", &names)
            .field("builtins", &self.builtins)
            .finish()
    }
}

impl ValidatorRegistry {
    /// A registry with the built-in rules enabled.
    pub fn new() -> Self {
        Self {
            custom: HashMap::new(),
            builtins: true,
        }
    }

    /// A registry that only knows registered validators.
    pub fn without_builtins() -> Self {
        Self {
            custom: HashMap::new(),
            builtins: false,
        }
    }

    /// Adds or replaces a named validator.
    pub fn register<F>(&mut self, name: impl Into<String>, validator: F)
    where
        F: Fn(&Value, &Record) -> Option<String> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.custom.insert(name.clone(), Arc::new(validator)).is_some() {
            debug!(rule = %name, "replaced custom validator");
        }
    }

    pub fn unregister(&mut self, name: &str) -> bool {
        self.custom.remove(name).is_some()
    }

    /// Drops every custom validator.
    pub fn reset(&mut self) {
        self.custom.clear();
    }

    /// Whether a rule name resolves to a validator.
    pub fn contains(&self, name: &str) -> bool {
        self.custom.contains_key(name) || (self.builtins && rules::builtin(name).is_some())
    }

    /// Evaluates `rules` against `value` in declaration order.
    ///
    /// Each failing rule contributes one message. Message precedence:
    /// the rule's own `message`, then the validator's text (for custom
    /// validators) or `params.message` (for `pattern`), then the translated
    /// `validation.{rule}` key, then the built-in English text.
    pub fn validate_field(
        &self,
        value: &Value,
        rules: &[ValidationRule],
        translate: Option<&dyn Translate>,
    ) -> Vec<String> {
        rules
            .iter()
            .filter_map(|rule| self.evaluate(value, rule, translate))
            .collect()
    }

    /// Validates every field against its own rules. Missing values are
    /// treated as null.
    pub fn validate_all_fields(
        &self,
        state: &Record,
        fields: &IndexMap<String, FieldConfig>,
        translate: Option<&dyn Translate>,
    ) -> FieldErrors {
        self.validate_fields(state, fields.iter(), translate)
    }

    /// Like [`validate_all_fields`](Self::validate_all_fields), restricted to
    /// fields active in `scope`.
    pub fn validate_scope(
        &self,
        state: &Record,
        fields: &IndexMap<String, FieldConfig>,
        scope: Scope,
        translate: Option<&dyn Translate>,
    ) -> FieldErrors {
        let active = fields.iter().filter(|(_, f)| f.is_active_in(scope));
        self.validate_fields(state, active, translate)
    }

    fn validate_fields<'a>(
        &self,
        state: &Record,
        fields: impl Iterator<Item = (&'a String, &'a FieldConfig)>,
        translate: Option<&dyn Translate>,
    ) -> FieldErrors {
        fields
            .filter_map(|(name, field)| {
                let value = state.get(name).unwrap_or(&Value::Null);
                let errors = self.validate_field(value, &field.validations, translate);
                (!errors.is_empty()).then(|| (name.clone(), errors))
            })
            .collect()
    }

    fn evaluate(
        &self,
        value: &Value,
        rule: &ValidationRule,
        translate: Option<&dyn Translate>,
    ) -> Option<String> {
        if let Some(validator) = self.custom.get(&rule.rule) {
            let empty = Record::new();
            let params = rule.params.as_ref().unwrap_or(&empty);
            let text = validator(value, params)?;
            return Some(rule.message.clone().unwrap_or(text));
        }

        let check = self.builtins.then(|| rules::builtin(&rule.rule)).flatten();
        let Some(check) = check else {
            debug!(rule = %rule.rule, "skipping unknown validation rule");
            return None;
        };

        let fallback = check(value, rule)?;
        if let Some(message) = &rule.message {
            return Some(message.clone());
        }
        if rule.rule == "pattern" {
            if let Some(message) = rule.param("message").and_then(Value::as_str) {
                return Some(message.to_string());
            }
        }
        Some(match translate {
            Some(t) => t.translate(&format!("validation.{}", rule.rule), rule.params.as_ref()),
            None => fallback,
        })
    }
}
