use crate::common::{ConversationSummary, JUST_NOW};

/// Ordered conversation summaries, kept in insertion order.
#[derive(Debug, Default)]
pub struct ConversationRegistry {
    conversations: Vec<ConversationSummary>,
}

impl ConversationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring match on the name. An empty filter lists everything.
    pub fn list(&self, filter: &str) -> Vec<&ConversationSummary> {
        let needle = filter.to_lowercase();
        self.conversations
            .iter()
            .filter(|conversation| conversation.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn add(&mut self, name: impl Into<String>, online: bool) -> ConversationSummary {
        let conversation = ConversationSummary::new(name, online);
        log::info!("Conversation {} created with {}", conversation.id, conversation.name);
        self.conversations.push(conversation.clone());
        conversation
    }

    pub fn get(&self, id: &str) -> Option<&ConversationSummary> {
        self.conversations.iter().find(|conversation| conversation.id == id)
    }

    pub fn remove(&mut self, id: &str) -> Option<ConversationSummary> {
        let index = self
            .conversations
            .iter()
            .position(|conversation| conversation.id == id)?;
        Some(self.conversations.remove(index))
    }

    pub fn record_outgoing(&mut self, id: &str, text: &str) {
        self.touch(id, text);
    }

    /// Returns false when the conversation is gone.
    pub fn record_incoming(&mut self, id: &str, text: &str) -> bool {
        self.touch(id, text)
    }

    pub fn bump_unread(&mut self, id: &str) {
        if let Some(conversation) = self.get_mut(id) {
            conversation.unread_count = conversation.unread_count.saturating_add(1);
        }
    }

    pub fn mark_read(&mut self, id: &str) {
        if let Some(conversation) = self.get_mut(id) {
            conversation.unread_count = 0;
        }
    }

    pub fn clear(&mut self) {
        self.conversations.clear();
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    fn touch(&mut self, id: &str, text: &str) -> bool {
        match self.get_mut(id) {
            Some(conversation) => {
                conversation.last_message = Some(text.to_string());
                conversation.last_timestamp = Some(JUST_NOW.to_string());
                true
            }
            None => {
                log::debug!("Ignoring activity for unknown conversation {id}");
                false
            }
        }
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut ConversationSummary> {
        self.conversations
            .iter_mut()
            .find(|conversation| conversation.id == id)
    }
}
