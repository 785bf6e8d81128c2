use forma_model::{Component, DataType, FieldConfig, Record, Scope, ValidationRule, Value};
use forma_validation::{BUILTIN_RULES, ValidatorRegistry, compile_pattern};
use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;

fn rule(name: &str, value: Value) -> ValidationRule {
    ValidationRule::with_value(name, value)
}

fn errors(value: Value, rules: &[ValidationRule]) -> Vec<String> {
    ValidatorRegistry::new().validate_field(&value, rules, None)
}

fn key_echo(key: &str, _: Option<&Record>) -> String {
    key.to_string()
}

fn french(key: &str, _: Option<&Record>) -> String {
    match key {
        "validation.required" => "Champ obligatoire".to_string(),
        other => other.to_string(),
    }
}

// ── required ─────────────────────────────────────────────────────

#[test]
fn required_fails_only_on_empty_values() {
    let rules = [ValidationRule::required()];
    for empty in [json!(null), json!(""), json!([])] {
        assert_eq!(errors(empty, &rules).len(), 1);
    }
    for present in [json!(0), json!(false), json!("x"), json!([0]), json!({})] {
        assert!(errors(present, &rules).is_empty());
    }
}

#[test]
fn empty_rule_list_never_fails() {
    assert!(errors(json!(null), &[]).is_empty());
}

// ── bounds ───────────────────────────────────────────────────────

#[test]
fn length_bounds_apply_to_strings_only() {
    let rules = [rule("minLength", json!(3)), rule("maxLength", json!(5))];
    assert_eq!(errors(json!("ab"), &rules), vec!["Must be at least 3 characters"]);
    assert_eq!(errors(json!("abcdef"), &rules), vec!["Must be at most 5 characters"]);
    assert!(errors(json!("abcd"), &rules).is_empty());
    assert!(errors(json!(12), &rules).is_empty());
}

#[test]
fn length_counts_characters_not_bytes() {
    assert!(errors(json!("ééé"), &[rule("maxLength", json!(3))]).is_empty());
}

#[test]
fn numeric_bounds_apply_to_numbers_only() {
    let rules = [rule("min", json!(1)), rule("max", json!(10))];
    assert_eq!(errors(json!(0), &rules), vec!["Must be at least 1"]);
    assert_eq!(errors(json!(10.5), &rules), vec!["Must be at most 10"]);
    assert!(errors(json!(5), &rules).is_empty());
    assert!(errors(json!("0"), &rules).is_empty());
}

#[test]
fn date_bounds_compare_instants() {
    let rules = [rule("minDate", json!("2024-01-01")), rule("maxDate", json!("2024-12-31"))];
    assert_eq!(errors(json!("2023-12-31"), &rules).len(), 1);
    assert_eq!(errors(json!("2025-01-01"), &rules).len(), 1);
    assert!(errors(json!("2024-06-15"), &rules).is_empty());
    assert!(errors(json!("2024-06-15T10:00:00Z"), &rules).is_empty());
    assert_eq!(errors(json!("2023-12-31T23:59:00"), &rules).len(), 1);
}

#[test]
fn unparseable_dates_pass() {
    assert!(errors(json!("someday"), &[rule("minDate", json!("2024-01-01"))]).is_empty());
}

#[test]
fn time_bounds_compare_lexicographically() {
    let rules = [rule("minTime", json!("09:00")), rule("maxTime", json!("17:30"))];
    assert_eq!(errors(json!("08:59"), &rules), vec!["Must be at or after 09:00"]);
    assert_eq!(errors(json!("17:31"), &rules), vec!["Must be at or before 17:30"]);
    assert!(errors(json!("12:00"), &rules).is_empty());
}

#[test]
fn item_count_bounds() {
    let rules = [rule("minItems", json!(3))];
    assert_eq!(errors(json!([1]), &rules).len(), 1);
    assert_eq!(errors(json!([1, 2, 3]), &rules).len(), 0);
    assert_eq!(errors(json!([1, 2, 3]), &[rule("maxItems", json!(2))]).len(), 1);
}

#[test]
fn bound_rules_without_value_pass() {
    assert!(errors(json!("a"), &[ValidationRule::new("minLength")]).is_empty());
}

// ── pattern ──────────────────────────────────────────────────────

#[test]
fn pattern_matches_and_honours_flags() {
    let strict = [ValidationRule::pattern("^[a-z]+$", "", None)];
    assert_eq!(errors(json!("ABC"), &strict), vec!["Invalid format"]);

    let folded = [ValidationRule::pattern("^[a-z]+$", "gi", None)];
    assert!(errors(json!("ABC"), &folded).is_empty());
}

#[test]
fn pattern_uses_params_message() {
    let rules = [ValidationRule::pattern("^\\d+$", "", Some("digits only".into()))];
    assert_eq!(errors(json!("12a"), &rules), vec!["digits only"]);
}

#[test]
fn broken_pattern_is_skipped() {
    assert!(errors(json!("x"), &[ValidationRule::pattern("(", "", None)]).is_empty());
    assert!(compile_pattern("(", "").is_err());
    assert!(compile_pattern("^a$", "iim").is_ok());
}

#[test]
fn email_rule() {
    let rules = [ValidationRule::new("email")];
    assert!(errors(json!("ana@example.com"), &rules).is_empty());
    assert_eq!(errors(json!("ana@"), &rules).len(), 1);
    assert_eq!(errors(json!("a b@example.com"), &rules).len(), 1);
    assert!(errors(json!(""), &rules).is_empty());
}

// ── messages ─────────────────────────────────────────────────────

#[test]
fn rule_message_overrides_default_and_translation() {
    let rules = [ValidationRule::required().message("name please")];
    let registry = ValidatorRegistry::new();
    assert_eq!(registry.validate_field(&json!(null), &rules, None), vec!["name please"]);
    assert_eq!(
        registry.validate_field(&json!(null), &rules, Some(&french)),
        vec!["name please"]
    );
}

#[test]
fn translate_receives_default_key() {
    let registry = ValidatorRegistry::new();
    let rules = [ValidationRule::required(), rule("minLength", json!(4))];
    assert_eq!(
        registry.validate_field(&json!(""), &rules[..1], Some(&french)),
        vec!["Champ obligatoire"]
    );
    assert_eq!(
        registry.validate_field(&json!("ab"), &rules, Some(&key_echo)),
        vec!["validation.minLength"]
    );
}

// ── unknown and custom rules ─────────────────────────────────────

#[test]
fn unknown_rules_are_skipped() {
    let rules = [ValidationRule::new("futureRule"), ValidationRule::required()];
    assert_eq!(errors(json!(null), &rules).len(), 1);
}

#[test]
fn custom_validator_registration_lifecycle() {
    let mut registry = ValidatorRegistry::new();
    registry.register("even", |value: &Value, _: &Record| {
        value
            .as_i64()
            .filter(|n| n % 2 != 0)
            .map(|n| format!("{n} is odd"))
    });
    assert!(registry.contains("even"));

    let rules = [ValidationRule::new("even")];
    assert_eq!(registry.validate_field(&json!(3), &rules, None), vec!["3 is odd"]);
    assert!(registry.validate_field(&json!(4), &rules, None).is_empty());

    let with_message = [ValidationRule::new("even").message("needs even")];
    assert_eq!(registry.validate_field(&json!(3), &with_message, None), vec!["needs even"]);

    registry.reset();
    assert!(!registry.contains("even"));
    assert!(registry.validate_field(&json!(3), &rules, None).is_empty());
}

#[test]
fn custom_validator_receives_params_and_shadows_builtin() {
    let mut registry = ValidatorRegistry::new();
    registry.register("min", |value: &Value, params: &Record| {
        let limit = params.get("value")?.as_f64()?;
        (value.as_f64()? < limit).then(|| "custom min".to_string())
    });
    let rules = [rule("min", json!(5))];
    assert_eq!(registry.validate_field(&json!(1), &rules, None), vec!["custom min"]);

    assert!(registry.unregister("min"));
    assert_eq!(registry.validate_field(&json!(1), &rules, None), vec!["Must be at least 5"]);
}

#[test]
fn registries_do_not_share_validators() {
    let mut first = ValidatorRegistry::new();
    first.register("never", |_: &Value, _: &Record| Some("no".to_string()));
    let second = ValidatorRegistry::new();
    assert!(first.contains("never"));
    assert!(!second.contains("never"));
}

#[test]
fn registry_without_builtins_skips_them() {
    let registry = ValidatorRegistry::without_builtins();
    assert!(!registry.contains("required"));
    let found = registry.validate_field(&json!(null), &[ValidationRule::required()], None);
    assert!(found.is_empty());
    assert!(BUILTIN_RULES.iter().all(|r| ValidatorRegistry::new().contains(r)));
}

// ── whole-record validation ──────────────────────────────────────

fn fields() -> IndexMap<String, FieldConfig> {
    let mut name = FieldConfig::new(Component::Text, DataType::String);
    name.validations.push(ValidationRule::required());
    let mut age = FieldConfig::new(Component::Number, DataType::Number);
    age.validations.push(rule("min", json!(18)));
    age.scopes = Some(vec![Scope::Edit]);
    let notes = FieldConfig::new(Component::Textarea, DataType::String);

    let mut fields = IndexMap::new();
    fields.insert("name".to_string(), name);
    fields.insert("age".to_string(), age);
    fields.insert("notes".to_string(), notes);
    fields
}

#[test]
fn validate_all_fields_reports_only_failures() {
    let state = json!({"age": 12}).as_object().cloned().unwrap();
    let result = ValidatorRegistry::new().validate_all_fields(&state, &fields(), None);
    assert_eq!(result.len(), 2);
    assert_eq!(result["name"], vec!["This field is required"]);
    assert_eq!(result["age"], vec!["Must be at least 18"]);
    assert!(!result.contains_key("notes"));
}

#[test]
fn validate_scope_skips_inactive_fields() {
    let state = json!({"name": "Ana", "age": 12}).as_object().cloned().unwrap();
    let registry = ValidatorRegistry::new();
    assert!(registry.validate_scope(&state, &fields(), Scope::Add, None).is_empty());
    assert_eq!(registry.validate_scope(&state, &fields(), Scope::Edit, None).len(), 1);
}

// ── properties ───────────────────────────────────────────────────

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,12}".prop_map(Value::from),
    ]
}

proptest! {
    #[test]
    fn no_rules_no_errors(value in scalar()) {
        prop_assert!(errors(value, &[]).is_empty());
    }

    #[test]
    fn unknown_rule_adds_nothing(value in scalar(), name in "[x-z]{3,8}") {
        let known = [ValidationRule::required()];
        let mixed = [ValidationRule::new(format!("custom_{name}")), ValidationRule::required()];
        prop_assert_eq!(errors(value.clone(), &known), errors(value, &mixed));
    }

    #[test]
    fn min_items_matches_length(len in 0usize..8, limit in 0usize..8) {
        let value = Value::Array(vec![Value::Null; len]);
        let found = errors(value, &[rule("minItems", json!(limit))]);
        prop_assert_eq!(found.len(), usize::from(len < limit));
    }
}
