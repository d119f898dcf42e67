use crate::common::ConversationSummary;

use super::registry::ConversationRegistry;

/// Non-owning pointer (by id) at the open conversation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ActiveSelection {
    id: Option<String>,
}

impl ActiveSelection {
    pub fn select(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    pub fn clear(&mut self) {
        self.id = None;
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn is(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    /// None when unset or when the id no longer exists in the registry.
    pub fn resolve<'a>(&self, registry: &'a ConversationRegistry) -> Option<&'a ConversationSummary> {
        self.id.as_deref().and_then(|id| registry.get(id))
    }
}
