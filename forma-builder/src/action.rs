use crate::ActionDefinition;
use forma_model::{ActionConfig, Align, Position, Record, RowCondition, Scope, Variant};

/// Starts an action definition with default presentation.
pub fn action() -> ActionBuilder {
    ActionBuilder {
        draft: ActionConfig::default(),
    }
}

/// Fluent builder for [`ActionConfig`].
#[derive(Debug, Clone)]
pub struct ActionBuilder {
    draft: ActionConfig,
}

impl ActionBuilder {
    pub fn variant(mut self, variant: Variant) -> Self {
        self.draft.variant = variant;
        self
    }

    pub fn primary(self) -> Self {
        self.variant(Variant::Primary)
    }

    pub fn warning(self) -> Self {
        self.variant(Variant::Warning)
    }

    pub fn destructive(self) -> Self {
        self.variant(Variant::Destructive)
    }

    pub fn positions(mut self, positions: impl IntoIterator<Item = Position>) -> Self {
        self.draft.positions = positions.into_iter().collect();
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.draft.order = order;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.draft.align = align;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.draft.hidden = true;
        self
    }

    /// Marks the action as requiring no permission.
    pub fn open(mut self) -> Self {
        self.draft.open = true;
        self
    }

    pub fn scopes(mut self, scopes: impl IntoIterator<Item = Scope>) -> Self {
        self.draft.scopes = Some(scopes.into_iter().collect());
        self
    }

    pub fn exclude_scopes(mut self, excluded: impl IntoIterator<Item = Scope>) -> Self {
        let excluded: Vec<Scope> = excluded.into_iter().collect();
        self.draft.scopes = Some(Scope::complement(&excluded));
        self
    }

    /// Gates row-level visibility on a predicate over the row.
    pub fn condition<F>(mut self, condition: F) -> Self
    where
        F: Fn(&Record) -> bool + Send + Sync + 'static,
    {
        self.draft.condition = Some(RowCondition::new(condition));
        self
    }

    pub fn to_config(&self) -> ActionConfig {
        self.draft.clone()
    }
}

impl ActionDefinition for ActionBuilder {
    fn to_config(&self) -> ActionConfig {
        self.draft.clone()
    }
}

impl From<ActionBuilder> for ActionConfig {
    fn from(builder: ActionBuilder) -> Self {
        builder.draft
    }
}
