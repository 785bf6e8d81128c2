//! Translation fallback chains for display labels.
//!
//! Each resolver tries progressively more generic keys and falls back to the
//! raw name. A key counts as unresolved when the translator returns it
//! unchanged.

use forma_model::Translate;

/// Label for a field, optionally specialised by its current state.
///
/// Tries `{domain}.fields.{field}[{state}]`, then `{domain}.fields.{field}`,
/// then returns `field` itself.
pub fn resolve_field_label<T: Translate + ?Sized>(
    t: &T,
    domain: &str,
    field: &str,
    state: Option<&str>,
) -> String {
    let base = format!("{domain}.fields.{field}");
    if let Some(state) = state.filter(|s| !s.is_empty()) {
        if let Some(text) = t.resolve(&format!("{base}[{state}]")) {
            return text;
        }
    }
    t.resolve(&base).unwrap_or_else(|| field.to_string())
}

/// Label for an action.
///
/// Tries `{domain}.actions.{action}`, then `common.actions.{action}`, then
/// returns `action` itself.
pub fn resolve_action_label<T: Translate + ?Sized>(t: &T, domain: &str, action: &str) -> String {
    t.resolve(&format!("{domain}.actions.{action}"))
        .or_else(|| t.resolve(&format!("common.actions.{action}")))
        .unwrap_or_else(|| action.to_string())
}

/// Label for a group: `{domain}.groups.{group}`, then `group` itself.
pub fn resolve_group_label<T: Translate + ?Sized>(t: &T, domain: &str, group: &str) -> String {
    t.resolve(&format!("{domain}.groups.{group}"))
        .unwrap_or_else(|| group.to_string())
}
