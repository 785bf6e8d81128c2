//! Field builders, one type per field family.

use crate::FieldDefinition;
use forma_model::{Component, DataType, FieldConfig, Scope, ValidationRule, Value};
use serde::{Deserialize, Serialize};

// Generates a builder type with the methods shared by every field family.
macro_rules! field_builder {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            draft: FieldConfig,
        }

        impl $name {
            fn of(component: Component, data_type: DataType) -> Self {
                Self {
                    draft: FieldConfig::new(component, data_type),
                }
            }

            /// Form width as a percentage of the row.
            pub fn width(mut self, width: u32) -> Self {
                self.draft.form.width = width;
                self
            }

            /// Form height in rows.
            pub fn height(mut self, height: u32) -> Self {
                self.draft.form.height = height;
                self
            }

            pub fn hidden(mut self) -> Self {
                self.draft.form.hidden = true;
                self
            }

            pub fn disabled(mut self) -> Self {
                self.draft.form.disabled = true;
                self
            }

            pub fn order(mut self, order: i32) -> Self {
                self.draft.form.order = Some(order);
                self
            }

            /// Initial value when no data is hydrated.
            pub fn default(mut self, value: impl Into<Value>) -> Self {
                self.draft.default_value = Some(value.into());
                self
            }

            pub fn group(mut self, group: impl Into<String>) -> Self {
                self.draft.group = Some(group.into());
                self
            }

            /// Restricts the field to the given scopes.
            pub fn scopes(mut self, scopes: impl IntoIterator<Item = Scope>) -> Self {
                self.draft.scopes = Some(scopes.into_iter().collect());
                self
            }

            /// Activates the field in every scope except the given ones.
            pub fn exclude_scopes(mut self, excluded: impl IntoIterator<Item = Scope>) -> Self {
                let excluded: Vec<Scope> = excluded.into_iter().collect();
                self.draft.scopes = Some(Scope::complement(&excluded));
                self
            }

            pub fn states<S: Into<String>>(mut self, states: impl IntoIterator<Item = S>) -> Self {
                self.draft.states = states.into_iter().map(Into::into).collect();
                self
            }

            /// Shows the field as a table column with a fixed width.
            pub fn column(mut self, width: u32) -> Self {
                self.draft.table.show = true;
                self.draft.table.width = Some(width);
                self
            }

            pub fn column_order(mut self, order: i32) -> Self {
                self.draft.table.order = Some(order);
                self
            }

            pub fn hide_column(mut self) -> Self {
                self.draft.table.show = false;
                self
            }

            pub fn filterable(mut self) -> Self {
                self.draft.table.filterable = true;
                self
            }

            pub fn sortable(mut self) -> Self {
                self.draft.table.sortable = true;
                self
            }

            /// Appends a `required` rule. Repeated calls append again.
            pub fn required(self) -> Self {
                self.rule(ValidationRule::required())
            }

            /// Appends an arbitrary rule, including custom registered ones.
            pub fn rule(mut self, rule: ValidationRule) -> Self {
                self.draft.validations.push(rule);
                self
            }

            /// Overrides the error text of the most recently appended rule.
            pub fn message(mut self, message: impl Into<String>) -> Self {
                if let Some(last) = self.draft.validations.last_mut() {
                    last.message = Some(message.into());
                }
                self
            }

            /// Sets a component-specific attribute.
            pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
                self.draft.attrs.insert(name.into(), value.into());
                self
            }

            /// Snapshots the current draft. The returned config is independent
            /// of this builder.
            pub fn to_config(&self) -> FieldConfig {
                self.draft.clone()
            }
        }

        impl FieldDefinition for $name {
            fn to_config(&self) -> FieldConfig {
                self.draft.clone()
            }
        }

        impl From<$name> for FieldConfig {
            fn from(builder: $name) -> Self {
                builder.draft
            }
        }
    };
}

field_builder!(
    /// Builder for free-text fields (`text`, `textarea`, `email`, `password`).
    TextBuilder
);
field_builder!(
    /// Builder for numeric fields (`number`, `currency`).
    NumberBuilder
);
field_builder!(
    /// Builder for calendar fields (`date`, `datetime`).
    DateBuilder
);
field_builder!(TimeBuilder);
field_builder!(
    /// Builder for option pickers (`select`, `multiselect`, `radio`).
    SelectBuilder
);
field_builder!(ToggleBuilder);
field_builder!(
    /// Builder for uploads (`file`, `image`).
    FileBuilder
);
field_builder!(ListBuilder);
field_builder!(
    /// Builder for hierarchical values rendered as a tree.
    TreeBuilder
);

pub fn text() -> TextBuilder {
    TextBuilder::of(Component::Text, DataType::String)
}

pub fn textarea() -> TextBuilder {
    TextBuilder::of(Component::Textarea, DataType::String).height(3)
}

/// A text field carrying an `email` format rule.
pub fn email() -> TextBuilder {
    TextBuilder::of(Component::Email, DataType::String).rule(ValidationRule::new("email"))
}

pub fn password() -> TextBuilder {
    TextBuilder::of(Component::Password, DataType::String).hide_column()
}

pub fn number() -> NumberBuilder {
    NumberBuilder::of(Component::Number, DataType::Number)
}

pub fn currency() -> NumberBuilder {
    NumberBuilder::of(Component::Currency, DataType::Number).precision(2)
}

pub fn date() -> DateBuilder {
    DateBuilder::of(Component::Date, DataType::Date)
}

pub fn datetime() -> DateBuilder {
    DateBuilder::of(Component::Datetime, DataType::Datetime)
}

pub fn time() -> TimeBuilder {
    TimeBuilder::of(Component::Time, DataType::Time)
}

pub fn select() -> SelectBuilder {
    SelectBuilder::of(Component::Select, DataType::String)
}

pub fn multiselect() -> SelectBuilder {
    SelectBuilder::of(Component::Multiselect, DataType::Array)
}

pub fn radio() -> SelectBuilder {
    SelectBuilder::of(Component::Radio, DataType::String)
}

pub fn toggle() -> ToggleBuilder {
    ToggleBuilder::of(Component::Toggle, DataType::Boolean)
}

pub fn checkbox() -> ToggleBuilder {
    ToggleBuilder::of(Component::Checkbox, DataType::Boolean)
}

pub fn file() -> FileBuilder {
    FileBuilder::of(Component::File, DataType::File)
}

pub fn image() -> FileBuilder {
    FileBuilder::of(Component::Image, DataType::File).accept(["image/*"])
}

pub fn list() -> ListBuilder {
    ListBuilder::of(Component::List, DataType::Array)
}

pub fn tree() -> TreeBuilder {
    TreeBuilder::of(Component::Tree, DataType::Array).children_key("children")
}

impl TextBuilder {
    pub fn min_length(self, length: usize) -> Self {
        self.rule(ValidationRule::with_value("minLength", length))
    }

    pub fn max_length(self, length: usize) -> Self {
        self.rule(ValidationRule::with_value("maxLength", length))
    }

    /// Appends a pattern rule. The expression is stored as source text plus
    /// flags (`"i"`, `"m"`, `"s"`, `"x"`).
    pub fn pattern(self, source: impl Into<String>, flags: &str) -> Self {
        self.rule(ValidationRule::pattern(source, flags, None))
    }

    /// Like [`pattern`](Self::pattern), with the error text stored in the
    /// rule parameters.
    pub fn pattern_with_message(
        self,
        source: impl Into<String>,
        flags: &str,
        message: impl Into<String>,
    ) -> Self {
        self.rule(ValidationRule::pattern(source, flags, Some(message.into())))
    }
}

impl NumberBuilder {
    pub fn min(self, value: f64) -> Self {
        self.rule(ValidationRule::with_value("min", value))
    }

    pub fn max(self, value: f64) -> Self {
        self.rule(ValidationRule::with_value("max", value))
    }

    /// Number of decimal places shown.
    pub fn precision(self, digits: u32) -> Self {
        self.attr("precision", digits)
    }

    pub fn prefix(self, prefix: impl Into<String>) -> Self {
        self.attr("prefix", prefix.into())
    }

    pub fn suffix(self, suffix: impl Into<String>) -> Self {
        self.attr("suffix", suffix.into())
    }
}

impl DateBuilder {
    /// Earliest accepted ISO date.
    pub fn min(self, date: impl Into<String>) -> Self {
        self.rule(ValidationRule::with_value("minDate", date.into()))
    }

    /// Latest accepted ISO date.
    pub fn max(self, date: impl Into<String>) -> Self {
        self.rule(ValidationRule::with_value("maxDate", date.into()))
    }
}

impl TimeBuilder {
    /// Earliest accepted `HH:MM` time.
    pub fn min(self, time: impl Into<String>) -> Self {
        self.rule(ValidationRule::with_value("minTime", time.into()))
    }

    /// Latest accepted `HH:MM` time.
    pub fn max(self, time: impl Into<String>) -> Self {
        self.rule(ValidationRule::with_value("maxTime", time.into()))
    }
}

/// One choice offered by a select-like field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: Value,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<Value>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl SelectBuilder {
    /// Replaces the option list.
    pub fn options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        let options: Vec<Value> = options.into_iter().map(option_value).collect();
        self.draft.attrs.insert("options".into(), Value::Array(options));
        self
    }

    /// Appends one option.
    pub fn option(mut self, value: impl Into<Value>, label: impl Into<String>) -> Self {
        let entry = option_value(SelectOption::new(value, label));
        match self.draft.attrs.get_mut("options") {
            Some(Value::Array(options)) => options.push(entry),
            _ => {
                self.draft.attrs.insert("options".into(), Value::Array(vec![entry]));
            }
        }
        self
    }

    pub fn min_items(self, count: usize) -> Self {
        self.rule(ValidationRule::with_value("minItems", count))
    }

    pub fn max_items(self, count: usize) -> Self {
        self.rule(ValidationRule::with_value("maxItems", count))
    }
}

fn option_value(option: SelectOption) -> Value {
    let mut entry = forma_model::Record::new();
    entry.insert("value".into(), option.value);
    entry.insert("label".into(), Value::String(option.label));
    Value::Object(entry)
}

impl FileBuilder {
    /// Accepted MIME types or extensions.
    pub fn accept<S: Into<String>>(self, types: impl IntoIterator<Item = S>) -> Self {
        let types: Vec<Value> = types.into_iter().map(|t| Value::String(t.into())).collect();
        self.attr("accept", Value::Array(types))
    }

    /// Maximum upload size in bytes.
    pub fn max_size(self, bytes: u64) -> Self {
        self.attr("maxSize", bytes)
    }

    pub fn multiple(self) -> Self {
        self.attr("multiple", true)
    }
}

impl ListBuilder {
    pub fn min_items(self, count: usize) -> Self {
        self.rule(ValidationRule::with_value("minItems", count))
    }

    pub fn max_items(self, count: usize) -> Self {
        self.rule(ValidationRule::with_value("maxItems", count))
    }

    pub fn reorderable(self) -> Self {
        self.attr("reorderable", true)
    }
}

impl TreeBuilder {
    /// Name of the property holding a node's children.
    pub fn children_key(self, key: impl Into<String>) -> Self {
        self.attr("childrenKey", key.into())
    }

    pub fn max_depth(self, depth: u32) -> Self {
        self.attr("maxDepth", depth)
    }

    pub fn reorderable(self) -> Self {
        self.attr("reorderable", true)
    }
}
