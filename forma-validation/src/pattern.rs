use forma_model::{ValidationRule, Value};
use regex_lite::Regex;

/// Extracts `(source, flags)` from a pattern rule's parameters.
pub fn pattern_source(rule: &ValidationRule) -> Option<(&str, &str)> {
    let source = rule.param("regex")?.as_str()?;
    let flags = rule.param("flags").and_then(Value::as_str).unwrap_or("");
    Some((source, flags))
}

/// Compiles a stored pattern.
///
/// Flags `i`, `m`, `s`, and `x` become inline flags; `g`, `y`, `u`, and `d`
/// have no meaning for a single match test and are dropped.
pub fn compile_pattern(source: &str, flags: &str) -> Result<Regex, regex_lite::Error> {
    let mut inline = String::new();
    for flag in flags.chars().filter(|c| matches!(c, 'i' | 'm' | 's' | 'x')) {
        if !inline.contains(flag) {
            inline.push(flag);
        }
    }
    if inline.is_empty() {
        Regex::new(source)
    } else {
        Regex::new(&format!("(?{inline}){source}"))
    }
}
