use crate::GroupDefinition;
use forma_model::{GroupConfig, Scope};

pub fn group() -> GroupBuilder {
    GroupBuilder {
        draft: GroupConfig::default(),
    }
}

/// Fluent builder for [`GroupConfig`].
#[derive(Debug, Clone)]
pub struct GroupBuilder {
    draft: GroupConfig,
}

impl GroupBuilder {
    pub fn order(mut self, order: i32) -> Self {
        self.draft.order = order;
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.draft.width = width;
        self
    }

    pub fn collapsible(mut self) -> Self {
        self.draft.collapsible = true;
        self
    }

    /// Starts collapsed. Implies collapsible.
    pub fn collapsed(mut self) -> Self {
        self.draft.collapsible = true;
        self.draft.collapsed = true;
        self
    }

    pub fn scopes(mut self, scopes: impl IntoIterator<Item = Scope>) -> Self {
        self.draft.scopes = Some(scopes.into_iter().collect());
        self
    }

    pub fn to_config(&self) -> GroupConfig {
        self.draft.clone()
    }
}

impl GroupDefinition for GroupBuilder {
    fn to_config(&self) -> GroupConfig {
        self.draft.clone()
    }
}
