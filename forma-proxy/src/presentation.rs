use crate::error::{ProxyError, ProxyResult};
use forma_model::{FormConfig, Value};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A field property that handlers may change at interaction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationProp {
    Width,
    Height,
    Hidden,
    Disabled,
    Order,
    State,
}

impl PresentationProp {
    pub const ALL: [PresentationProp; 6] = [
        Self::Width,
        Self::Height,
        Self::Hidden,
        Self::Disabled,
        Self::Order,
        Self::State,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::Hidden => "hidden",
            Self::Disabled => "disabled",
            Self::Order => "order",
            Self::State => "state",
        }
    }
}

impl fmt::Display for PresentationProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresentationProp {
    type Err = ProxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ProxyError::UnknownProperty(s.to_string()))
    }
}

/// Resolved presentation of one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    pub width: u32,
    pub height: u32,
    pub hidden: bool,
    pub disabled: bool,
    pub order: Option<i32>,
    pub state: String,
}

impl From<&FormConfig> for Presentation {
    fn from(form: &FormConfig) -> Self {
        Self {
            width: form.width,
            height: form.height,
            hidden: form.hidden,
            disabled: form.disabled,
            order: form.order,
            state: String::new(),
        }
    }
}

impl Presentation {
    pub fn get(&self, prop: PresentationProp) -> Value {
        match prop {
            PresentationProp::Width => self.width.into(),
            PresentationProp::Height => self.height.into(),
            PresentationProp::Hidden => self.hidden.into(),
            PresentationProp::Disabled => self.disabled.into(),
            PresentationProp::Order => self.order.map_or(Value::Null, Value::from),
            PresentationProp::State => self.state.clone().into(),
        }
    }

    /// Applies every property present in `patch`.
    pub fn apply(&mut self, patch: &PresentationPatch) {
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(height) = patch.height {
            self.height = height;
        }
        if let Some(hidden) = patch.hidden {
            self.hidden = hidden;
        }
        if let Some(disabled) = patch.disabled {
            self.disabled = disabled;
        }
        if let Some(order) = patch.order {
            self.order = order;
        }
        if let Some(state) = &patch.state {
            self.state = state.clone();
        }
    }
}

/// A sparse set of presentation properties: only what was written.
///
/// `order` is doubly optional: `Some(None)` records a cleared order, which
/// serializes as `null` and masks any order from a lower layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    pub order: Option<Option<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl PresentationPatch {
    pub fn get(&self, prop: PresentationProp) -> Option<Value> {
        match prop {
            PresentationProp::Width => self.width.map(Value::from),
            PresentationProp::Height => self.height.map(Value::from),
            PresentationProp::Hidden => self.hidden.map(Value::from),
            PresentationProp::Disabled => self.disabled.map(Value::from),
            PresentationProp::Order => self.order.map(|o| o.map_or(Value::Null, Value::from)),
            PresentationProp::State => self.state.clone().map(Value::from),
        }
    }

    /// Stores `value` under `prop` if it has the property's type.
    /// Returns `false` and leaves the patch alone otherwise.
    pub fn set(&mut self, prop: PresentationProp, value: &Value) -> bool {
        match prop {
            PresentationProp::Width => as_u32(value).map(|v| self.width = Some(v)).is_some(),
            PresentationProp::Height => as_u32(value).map(|v| self.height = Some(v)).is_some(),
            PresentationProp::Hidden => value.as_bool().map(|v| self.hidden = Some(v)).is_some(),
            PresentationProp::Disabled => {
                value.as_bool().map(|v| self.disabled = Some(v)).is_some()
            }
            PresentationProp::Order if value.is_null() => {
                self.order = Some(None);
                true
            }
            PresentationProp::Order => value
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .map(|v| self.order = Some(Some(v)))
                .is_some(),
            PresentationProp::State => value
                .as_str()
                .map(|v| self.state = Some(v.to_string()))
                .is_some(),
        }
    }

    /// Properties set in this patch, in declaration order.
    pub fn props(&self) -> Vec<PresentationProp> {
        PresentationProp::ALL
            .into_iter()
            .filter(|p| self.get(*p).is_some())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.props().is_empty()
    }

    /// Lays `other` over `self`; properties set in `other` win.
    pub fn merge(&mut self, other: &PresentationPatch) {
        self.width = other.width.or(self.width);
        self.height = other.height.or(self.height);
        self.hidden = other.hidden.or(self.hidden);
        self.disabled = other.disabled.or(self.disabled);
        self.order = other.order.or(self.order);
        if other.state.is_some() {
            self.state.clone_from(&other.state);
        }
    }
}

/// Accepts integers and floats without a fractional part.
fn as_u32(value: &Value) -> Option<u32> {
    if let Some(v) = value.as_u64() {
        return u32::try_from(v).ok();
    }
    value
        .as_f64()
        .filter(|v| v.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(v))
        .map(|v| v as u32)
}

/// Keeps an explicit `null` as `Some(None)` instead of folding it into a
/// missing key.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<i32>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i32>::deserialize(deserializer).map(Some)
}

/// Validates a generic write before it reaches a patch.
pub(crate) fn write(
    patch: &mut PresentationPatch,
    field: &str,
    prop: PresentationProp,
    value: Value,
) -> ProxyResult<()> {
    if patch.set(prop, &value) {
        Ok(())
    } else {
        Err(ProxyError::InvalidValue {
            field: field.to_string(),
            prop,
            value,
        })
    }
}
