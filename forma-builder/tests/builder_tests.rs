use forma_builder::{FieldDefinition, SelectOption, action, field, group};
use forma_model::{Align, Component, DataType, FieldConfig, Position, Record, Scope, ValidationRule, Variant};
use pretty_assertions::assert_eq;
use serde_json::json;

// ── Snapshot independence ────────────────────────────────────────

#[test]
fn later_chain_calls_do_not_touch_issued_configs() {
    let builder = field::text().required();
    let cfg_a = builder.to_config();
    let builder = builder.width(50);
    let cfg_b = builder.to_config();

    assert_ne!(cfg_a.form.width, cfg_b.form.width);
    assert_eq!(cfg_a.form.width, 100);
    assert_eq!(cfg_b.form.width, 50);
    assert_eq!(cfg_a.validations, vec![ValidationRule::required()]);
}

#[test]
fn pattern_rules_copy_independently() {
    let builder = field::text().pattern_with_message("^[A-Z]{3}$", "i", "three letters");
    let cfg_a = builder.to_config();
    let cfg_b = builder.max_length(3).to_config();

    assert_eq!(cfg_a.validations.len(), 1);
    assert_eq!(cfg_b.validations.len(), 2);
    assert_eq!(cfg_a.validations[0], cfg_b.validations[0]);
    assert_eq!(cfg_a.validations[0].param("regex"), Some(&json!("^[A-Z]{3}$")));
}

#[test]
fn attrs_are_deep_copied() {
    let builder = field::select().option("a", "A");
    let cfg_a = builder.to_config();
    let cfg_b = builder.option("b", "B").to_config();

    assert_eq!(cfg_a.attrs["options"].as_array().unwrap().len(), 1);
    assert_eq!(cfg_b.attrs["options"].as_array().unwrap().len(), 2);
}

#[test]
fn field_config_is_its_own_definition() {
    let cfg = field::number().min(1.0).to_config();
    let again = FieldDefinition::to_config(&cfg);
    assert_eq!(cfg, again);
    let converted: FieldConfig = field::number().min(1.0).into();
    assert_eq!(converted, cfg);
}

// ── Common methods ───────────────────────────────────────────────

#[test]
fn presentation_methods_set_form_and_table() {
    let cfg = field::text()
        .width(33)
        .height(2)
        .hidden()
        .disabled()
        .order(4)
        .group("contact")
        .states(["new", "error"])
        .column(120)
        .column_order(2)
        .sortable()
        .filterable()
        .default("anon")
        .to_config();

    assert_eq!(cfg.form.width, 33);
    assert_eq!(cfg.form.height, 2);
    assert!(cfg.form.hidden);
    assert!(cfg.form.disabled);
    assert_eq!(cfg.form.order, Some(4));
    assert_eq!(cfg.group.as_deref(), Some("contact"));
    assert_eq!(cfg.states, vec!["new".to_string(), "error".to_string()]);
    assert!(cfg.table.show);
    assert_eq!(cfg.table.width, Some(120));
    assert_eq!(cfg.table.order, Some(2));
    assert!(cfg.table.sortable);
    assert!(cfg.table.filterable);
    assert_eq!(cfg.default_value, Some(json!("anon")));
}

#[test]
fn required_appends_every_time() {
    let cfg = field::text().required().required().to_config();
    assert_eq!(cfg.validations.len(), 2);
    assert!(cfg.validations.iter().all(|r| r.rule == "required"));
}

#[test]
fn message_overrides_last_rule_only() {
    let cfg = field::text()
        .required()
        .min_length(3)
        .message("too short")
        .to_config();
    assert_eq!(cfg.validations[0].message, None);
    assert_eq!(cfg.validations[1].message.as_deref(), Some("too short"));
}

#[test]
fn exclude_scopes_complements_full_set() {
    let cfg = field::text().exclude_scopes([Scope::Index, Scope::View]).to_config();
    assert_eq!(cfg.scopes, Some(vec![Scope::Add, Scope::Edit]));

    let cfg = field::text().scopes([Scope::Index]).exclude_scopes([Scope::Add]).to_config();
    assert_eq!(cfg.scopes, Some(vec![Scope::Index, Scope::View, Scope::Edit]));
}

// ── Type-specific methods ────────────────────────────────────────

#[test]
fn constructors_pick_component_and_data_type() {
    let cases = [
        (field::text().to_config(), Component::Text, DataType::String),
        (field::textarea().to_config(), Component::Textarea, DataType::String),
        (field::number().to_config(), Component::Number, DataType::Number),
        (field::date().to_config(), Component::Date, DataType::Date),
        (field::datetime().to_config(), Component::Datetime, DataType::Datetime),
        (field::time().to_config(), Component::Time, DataType::Time),
        (field::multiselect().to_config(), Component::Multiselect, DataType::Array),
        (field::toggle().to_config(), Component::Toggle, DataType::Boolean),
        (field::file().to_config(), Component::File, DataType::File),
        (field::tree().to_config(), Component::Tree, DataType::Array),
    ];
    for (cfg, component, data_type) in cases {
        assert_eq!(cfg.component, component);
        assert_eq!(cfg.data_type, data_type);
    }
}

#[test]
fn numeric_bounds_append_min_and_max() {
    let cfg = field::currency().min(0.0).max(1000.0).prefix("$").to_config();
    assert_eq!(cfg.validations[0].rule, "min");
    assert_eq!(cfg.validations[0].param("value"), Some(&json!(0.0)));
    assert_eq!(cfg.validations[1].rule, "max");
    assert_eq!(cfg.attrs["precision"], json!(2));
    assert_eq!(cfg.attrs["prefix"], json!("$"));
}

#[test]
fn date_and_time_bounds_use_their_own_rules() {
    let date = field::date().min("2020-01-01").max("2030-12-31").to_config();
    let rules: Vec<_> = date.validations.iter().map(|r| r.rule.as_str()).collect();
    assert_eq!(rules, vec!["minDate", "maxDate"]);

    let time = field::time().min("09:00").max("17:30").to_config();
    let rules: Vec<_> = time.validations.iter().map(|r| r.rule.as_str()).collect();
    assert_eq!(rules, vec!["minTime", "maxTime"]);
    assert_eq!(time.validations[1].param("value"), Some(&json!("17:30")));
}

#[test]
fn select_options_replace_list() {
    let cfg = field::radio()
        .option("x", "X")
        .options([SelectOption::new(1, "One"), SelectOption::new(2, "Two")])
        .to_config();
    assert_eq!(
        cfg.attrs["options"],
        json!([{"value": 1, "label": "One"}, {"value": 2, "label": "Two"}])
    );
}

#[test]
fn file_and_tree_attributes() {
    let file = field::file().accept([".pdf", ".png"]).max_size(1024).multiple().to_config();
    assert_eq!(file.attrs["accept"], json!([".pdf", ".png"]));
    assert_eq!(file.attrs["maxSize"], json!(1024));
    assert_eq!(file.attrs["multiple"], json!(true));

    let tree = field::tree().max_depth(3).to_config();
    assert_eq!(tree.attrs["childrenKey"], json!("children"));
    assert_eq!(tree.attrs["maxDepth"], json!(3));

    let list = field::list().min_items(1).reorderable().to_config();
    assert_eq!(list.validations[0].rule, "minItems");
    assert_eq!(list.attrs["reorderable"], json!(true));
}

// ── Actions and groups ───────────────────────────────────────────

#[test]
fn action_builder_sets_every_property() {
    let cfg = action()
        .destructive()
        .positions([Position::Row, Position::Footer])
        .order(9)
        .align(Align::End)
        .open()
        .exclude_scopes([Scope::Add])
        .condition(|row: &Record| row.contains_key("id"))
        .to_config();

    assert_eq!(cfg.variant, Variant::Destructive);
    assert!(cfg.is_at(Position::Footer));
    assert_eq!(cfg.order, 9);
    assert_eq!(cfg.align, Align::End);
    assert!(cfg.open);
    assert!(!cfg.is_active_in(Scope::Add));
    assert!(!cfg.is_visible_for(&Record::new()));
}

#[test]
fn hidden_action_snapshot_is_independent() {
    let builder = action().primary();
    let visible = builder.to_config();
    let hidden = builder.hidden().to_config();
    assert!(!visible.hidden);
    assert!(hidden.hidden);
}

#[test]
fn group_builder_collapsed_implies_collapsible() {
    let cfg = group().order(2).width(50).collapsed().scopes([Scope::Edit]).to_config();
    assert_eq!(cfg.order, 2);
    assert_eq!(cfg.width, 50);
    assert!(cfg.collapsible);
    assert!(cfg.collapsed);
    assert_eq!(cfg.scopes, Some(vec![Scope::Edit]));
}
