use crate::error::{ProxyError, ProxyResult};
use crate::presentation::{self, Presentation, PresentationPatch, PresentationProp};
use forma_model::{FieldConfig, Value};
use indexmap::IndexMap;

/// Presentation overrides keyed by field name.
pub type Overrides = IndexMap<String, PresentationPatch>;

/// Presentation view over a schema's fields for one form or table instance.
///
/// A property read resolves in three layers: a write made through this
/// proxy, then the override supplied by the caller, then the field's form
/// default. Only writes show up in [`overrides`](Self::overrides).
#[derive(Debug, Clone)]
pub struct SchemaProxy {
    defaults: IndexMap<String, Presentation>,
    current: Overrides,
    writes: Overrides,
}

impl SchemaProxy {
    pub fn new(fields: &IndexMap<String, FieldConfig>, current: Overrides) -> Self {
        let defaults = fields
            .iter()
            .map(|(name, field)| (name.clone(), Presentation::from(&field.form)))
            .collect();
        Self {
            defaults,
            current,
            writes: Overrides::new(),
        }
    }

    pub fn contains(&self, field: &str) -> bool {
        self.defaults.contains_key(field)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.defaults.keys().map(String::as_str)
    }

    /// Resolved value of one property, or `None` for an unknown field.
    pub fn get(&self, field: &str, prop: PresentationProp) -> Option<Value> {
        let default = self.defaults.get(field)?;
        self.writes
            .get(field)
            .and_then(|p| p.get(prop))
            .or_else(|| self.current.get(field).and_then(|p| p.get(prop)))
            .or_else(|| Some(default.get(prop)))
    }

    /// Records a write. The value must have the property's type.
    pub fn set(&mut self, field: &str, prop: PresentationProp, value: Value) -> ProxyResult<()> {
        if !self.contains(field) {
            return Err(ProxyError::UnknownField(field.to_string()));
        }
        let mut checked = PresentationPatch::default();
        presentation::write(&mut checked, field, prop, value)?;
        self.writes.entry(field.to_string()).or_default().merge(&checked);
        Ok(())
    }

    /// Fully resolved presentation of one field.
    pub fn field(&self, name: &str) -> Option<Presentation> {
        let mut resolved = self.defaults.get(name)?.clone();
        if let Some(patch) = self.current.get(name) {
            resolved.apply(patch);
        }
        if let Some(patch) = self.writes.get(name) {
            resolved.apply(patch);
        }
        Some(resolved)
    }

    /// Typed write handle for one field.
    pub fn field_mut(&mut self, name: &str) -> ProxyResult<FieldHandle<'_>> {
        if !self.contains(name) {
            return Err(ProxyError::UnknownField(name.to_string()));
        }
        Ok(FieldHandle {
            writes: &mut self.writes,
            name: name.to_string(),
        })
    }

    /// Fields written through this proxy, each with only the written
    /// properties.
    pub fn overrides(&self) -> &Overrides {
        &self.writes
    }

    pub fn into_overrides(self) -> Overrides {
        self.writes
    }

    /// Caller overrides with this session's writes laid over them, ready to
    /// be passed to the next instance.
    pub fn merged_overrides(&self) -> Overrides {
        let mut merged = self.current.clone();
        for (name, patch) in &self.writes {
            merged.entry(name.clone()).or_default().merge(patch);
        }
        merged
    }
}

/// Typed writes for one field of a [`SchemaProxy`].
#[derive(Debug)]
pub struct FieldHandle<'a> {
    writes: &'a mut Overrides,
    name: String,
}

impl FieldHandle<'_> {
    fn patch(&mut self) -> &mut PresentationPatch {
        self.writes.entry(self.name.clone()).or_default()
    }

    pub fn set_width(&mut self, width: u32) -> &mut Self {
        self.patch().width = Some(width);
        self
    }

    pub fn set_height(&mut self, height: u32) -> &mut Self {
        self.patch().height = Some(height);
        self
    }

    pub fn set_order(&mut self, order: i32) -> &mut Self {
        self.patch().order = Some(Some(order));
        self
    }

    /// Drops the field's order, including one supplied by the caller.
    pub fn clear_order(&mut self) -> &mut Self {
        self.patch().order = Some(None);
        self
    }

    pub fn hide(&mut self) -> &mut Self {
        self.patch().hidden = Some(true);
        self
    }

    pub fn show(&mut self) -> &mut Self {
        self.patch().hidden = Some(false);
        self
    }

    pub fn disable(&mut self) -> &mut Self {
        self.patch().disabled = Some(true);
        self
    }

    pub fn enable(&mut self) -> &mut Self {
        self.patch().disabled = Some(false);
        self
    }

    /// Switches the field to a named state (see `FieldConfig::states`).
    pub fn set_state(&mut self, state: impl Into<String>) -> &mut Self {
        self.patch().state = Some(state.into());
        self
    }
}
