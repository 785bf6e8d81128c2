use forma_model::{
    ActionConfig, Component, DataType, FieldConfig, GroupConfig, Identity, Position, Record,
    RowCondition, SchemaProvide, Scope, ValidationRule, Variant,
};
use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use serde_json::json;

fn record(value: serde_json::Value) -> Record {
    value.as_object().cloned().unwrap()
}

fn text(order: Option<i32>) -> FieldConfig {
    let mut f = FieldConfig::new(Component::Text, DataType::String);
    f.form.order = order;
    f
}

fn action(order: i32, positions: &[Position]) -> ActionConfig {
    ActionConfig {
        order,
        positions: positions.to_vec(),
        ..Default::default()
    }
}

fn make_person_schema() -> SchemaProvide {
    let mut fields = IndexMap::new();
    fields.insert("name".to_string(), text(Some(2)));
    fields.insert("email".to_string(), text(None));
    fields.insert("id".to_string(), {
        let mut f = text(Some(1));
        f.scopes = Some(vec![Scope::View, Scope::Edit]);
        f.table.show = false;
        f
    });

    let mut actions = IndexMap::new();
    actions.insert("edit".to_string(), action(2, &[Position::Row]));
    actions.insert("view".to_string(), action(1, &[Position::Row]));
    actions.insert("add".to_string(), action(1, &[Position::Top]));
    actions.insert("secret".to_string(), {
        let mut a = action(0, &[Position::Row]);
        a.hidden = true;
        a
    });

    SchemaProvide {
        domain: "person".into(),
        identity: Identity::default(),
        display: "name".into(),
        scopes: Scope::ALL.to_vec(),
        groups: IndexMap::new(),
        fields,
        actions,
    }
}

// ── Scope ────────────────────────────────────────────────────────

#[test]
fn scope_parses_and_displays() {
    for scope in Scope::ALL {
        assert_eq!(scope.as_str().parse::<Scope>().unwrap(), scope);
        assert_eq!(scope.to_string(), scope.as_str());
    }
    assert!("archive".parse::<Scope>().is_err());
}

#[test]
fn scope_complement_is_against_full_set() {
    assert_eq!(
        Scope::complement(&[Scope::Index]),
        vec![Scope::Add, Scope::View, Scope::Edit]
    );
    assert_eq!(Scope::complement(&[]), Scope::ALL.to_vec());
    assert!(Scope::complement(&Scope::ALL).is_empty());
}

#[test]
fn scope_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Scope::Edit).unwrap(), json!("edit"));
}

// ── FieldConfig ──────────────────────────────────────────────────

#[test]
fn field_without_scopes_is_active_everywhere() {
    let f = text(None);
    assert!(Scope::ALL.iter().all(|s| f.is_active_in(*s)));
}

#[test]
fn field_with_scopes_is_restricted() {
    let mut f = text(None);
    f.scopes = Some(vec![Scope::Add]);
    assert!(f.is_active_in(Scope::Add));
    assert!(!f.is_active_in(Scope::Index));
}

#[test]
fn field_required_detection() {
    let mut f = text(None);
    assert!(!f.is_required());
    f.validations.push(ValidationRule::with_value("minLength", 2));
    f.validations.push(ValidationRule::required());
    assert!(f.is_required());
}

#[test]
fn field_config_serializes_camel_case() {
    let mut f = text(None);
    f.default_value = Some(json!("x"));
    let value = serde_json::to_value(&f).unwrap();
    assert_eq!(value["dataType"], json!("string"));
    assert_eq!(value["defaultValue"], json!("x"));
    assert_eq!(value["form"]["width"], json!(100));
}

// ── ValidationRule ───────────────────────────────────────────────

#[test]
fn pattern_rule_is_plain_data() {
    let rule = ValidationRule::pattern("^[a-z]+$", "i", Some("letters only".into()));
    assert_eq!(rule.rule, "pattern");
    assert_eq!(rule.param("regex"), Some(&json!("^[a-z]+$")));
    assert_eq!(rule.param("flags"), Some(&json!("i")));
    assert_eq!(rule.param("message"), Some(&json!("letters only")));

    let copy = rule.clone();
    assert_eq!(copy, rule);
}

// ── ActionConfig ─────────────────────────────────────────────────

#[test]
fn action_condition_gates_row_visibility() {
    let mut a = action(0, &[Position::Row]);
    a.condition = Some(RowCondition::new(|row| {
        row.get("active").and_then(|v| v.as_bool()) == Some(true)
    }));

    assert!(a.is_visible_for(&record(json!({"active": true}))));
    assert!(!a.is_visible_for(&record(json!({"active": false}))));

    a.hidden = true;
    assert!(!a.is_visible_for(&record(json!({"active": true}))));
}

#[test]
fn action_variant_parses() {
    assert_eq!("destructive".parse::<Variant>().unwrap(), Variant::Destructive);
    assert!("loud".parse::<Variant>().is_err());
    assert_eq!("floating".parse::<Position>().unwrap(), Position::Floating);
}

#[test]
fn action_condition_is_not_serialized() {
    let mut a = action(3, &[Position::Footer]);
    a.condition = Some(RowCondition::new(|_| true));
    let value = serde_json::to_value(&a).unwrap();
    assert!(value.get("condition").is_none());
    assert_eq!(value["order"], json!(3));
}

// ── Identity ─────────────────────────────────────────────────────

#[test]
fn single_identity_extracts_value() {
    let id = Identity::Single("id".into());
    assert_eq!(id.extract(&record(json!({"id": 7}))), Some(json!(7)));
    assert_eq!(id.extract(&record(json!({"id": null}))), None);
    assert_eq!(id.fields(), vec!["id"]);
}

#[test]
fn composite_identity_requires_every_key() {
    let id = Identity::Composite(vec!["org".into(), "code".into()]);
    assert_eq!(
        id.extract(&record(json!({"org": 1, "code": "A", "x": 0}))),
        Some(json!({"org": 1, "code": "A"}))
    );
    assert_eq!(id.extract(&record(json!({"org": 1}))), None);
}

#[test]
fn identity_deserializes_untagged() {
    let single: Identity = serde_json::from_value(json!("uuid")).unwrap();
    assert_eq!(single, Identity::Single("uuid".into()));
    let composite: Identity = serde_json::from_value(json!(["a", "b"])).unwrap();
    assert_eq!(composite.fields(), vec!["a", "b"]);
}

// ── SchemaProvide ────────────────────────────────────────────────

#[test]
fn fields_in_scope_are_ordered() {
    let schema = make_person_schema();

    let index: Vec<_> = schema.fields_in(Scope::Index).into_iter().map(|(n, _)| n).collect();
    assert_eq!(index, vec!["name", "email"]);

    let edit: Vec<_> = schema.fields_in(Scope::Edit).into_iter().map(|(n, _)| n).collect();
    assert_eq!(edit, vec!["id", "name", "email"]);
}

#[test]
fn columns_skip_hidden_columns() {
    let schema = make_person_schema();
    let columns: Vec<_> = schema.columns().into_iter().map(|(n, _)| n).collect();
    assert_eq!(columns, vec!["name", "email"]);
}

#[test]
fn actions_at_position_are_ordered_and_visible() {
    let schema = make_person_schema();
    let row: Vec<_> = schema
        .actions_at(Scope::Index, Position::Row)
        .into_iter()
        .map(|(n, _)| n)
        .collect();
    assert_eq!(row, vec!["view", "edit"]);
}

#[test]
fn meta_carries_resource_and_fields() {
    let schema = make_person_schema();
    let meta = schema.meta();
    assert_eq!(meta.resource, "person");
    assert_eq!(meta.identity, Identity::Single("id".into()));
    assert_eq!(meta.fields.len(), 3);
}

#[test]
fn group_defaults() {
    let g = GroupConfig::default();
    assert_eq!(g.width, 100);
    assert!(!g.collapsible);
    assert!(g.scopes.is_none());
}
