//! Built-in rule checks.
//!
//! Each check returns `None` when the value passes and the default English
//! error text when it fails. Values of the wrong type pass: type mismatches
//! are the renderer's concern, not the rule's.

use crate::pattern::{compile_pattern, pattern_source};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use forma_model::{ValidationRule, Value};
use tracing::warn;

/// Names of the rules evaluated without registration.
pub const BUILTIN_RULES: [&str; 13] = [
    "required",
    "minLength",
    "maxLength",
    "min",
    "max",
    "minDate",
    "maxDate",
    "minTime",
    "maxTime",
    "minItems",
    "maxItems",
    "pattern",
    "email",
];

pub(crate) type Check = fn(&Value, &ValidationRule) -> Option<String>;

pub(crate) fn builtin(name: &str) -> Option<Check> {
    let check: Check = match name {
        "required" => required,
        "minLength" => min_length,
        "maxLength" => max_length,
        "min" => min,
        "max" => max,
        "minDate" => min_date,
        "maxDate" => max_date,
        "minTime" => min_time,
        "maxTime" => max_time,
        "minItems" => min_items,
        "maxItems" => max_items,
        "pattern" => pattern,
        "email" => email,
        _ => return None,
    };
    Some(check)
}

fn required(value: &Value, _: &ValidationRule) -> Option<String> {
    let missing = match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    };
    missing.then(|| "This field is required".to_string())
}

fn bound_f64(rule: &ValidationRule) -> Option<f64> {
    rule.param("value").and_then(Value::as_f64)
}

fn bound_str(rule: &ValidationRule) -> Option<&str> {
    rule.param("value").and_then(Value::as_str)
}

fn min_length(value: &Value, rule: &ValidationRule) -> Option<String> {
    let (text, limit) = (value.as_str()?, bound_f64(rule)?);
    ((text.chars().count() as f64) < limit)
        .then(|| format!("Must be at least {limit} characters"))
}

fn max_length(value: &Value, rule: &ValidationRule) -> Option<String> {
    let (text, limit) = (value.as_str()?, bound_f64(rule)?);
    ((text.chars().count() as f64) > limit)
        .then(|| format!("Must be at most {limit} characters"))
}

fn min(value: &Value, rule: &ValidationRule) -> Option<String> {
    let (number, limit) = (value.as_f64()?, bound_f64(rule)?);
    (number < limit).then(|| format!("Must be at least {limit}"))
}

fn max(value: &Value, rule: &ValidationRule) -> Option<String> {
    let (number, limit) = (value.as_f64()?, bound_f64(rule)?);
    (number > limit).then(|| format!("Must be at most {limit}"))
}

/// Parses an ISO date, RFC 3339 timestamp, or naive date-time.
fn parse_instant(text: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }
    for format in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn min_date(value: &Value, rule: &ValidationRule) -> Option<String> {
    let limit = bound_str(rule)?;
    let (date, bound) = (parse_instant(value.as_str()?)?, parse_instant(limit)?);
    (date < bound).then(|| format!("Must be on or after {limit}"))
}

fn max_date(value: &Value, rule: &ValidationRule) -> Option<String> {
    let limit = bound_str(rule)?;
    let (date, bound) = (parse_instant(value.as_str()?)?, parse_instant(limit)?);
    (date > bound).then(|| format!("Must be on or before {limit}"))
}

// Times compare as `HH:MM` strings.
fn min_time(value: &Value, rule: &ValidationRule) -> Option<String> {
    let (time, limit) = (value.as_str()?, bound_str(rule)?);
    (time < limit).then(|| format!("Must be at or after {limit}"))
}

fn max_time(value: &Value, rule: &ValidationRule) -> Option<String> {
    let (time, limit) = (value.as_str()?, bound_str(rule)?);
    (time > limit).then(|| format!("Must be at or before {limit}"))
}

fn min_items(value: &Value, rule: &ValidationRule) -> Option<String> {
    let (items, limit) = (value.as_array()?, bound_f64(rule)?);
    ((items.len() as f64) < limit).then(|| format!("Must have at least {limit} items"))
}

fn max_items(value: &Value, rule: &ValidationRule) -> Option<String> {
    let (items, limit) = (value.as_array()?, bound_f64(rule)?);
    ((items.len() as f64) > limit).then(|| format!("Must have at most {limit} items"))
}

fn pattern(value: &Value, rule: &ValidationRule) -> Option<String> {
    let text = value.as_str()?;
    let (source, flags) = pattern_source(rule)?;
    match compile_pattern(source, flags) {
        Ok(regex) => (!regex.is_match(text)).then(|| "Invalid format".to_string()),
        Err(e) => {
            warn!(pattern = source, "skipping unusable pattern rule: {}", e);
            None
        }
    }
}

fn email(value: &Value, _: &ValidationRule) -> Option<String> {
    let text = value.as_str().filter(|s| !s.is_empty())?;
    let valid = text.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty()
            && !domain.starts_with('.')
            && !domain.ends_with('.')
            && domain.contains('.')
            && !text.contains(char::is_whitespace)
    });
    (!valid).then(|| "Invalid email address".to_string())
}
