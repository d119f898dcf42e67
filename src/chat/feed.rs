use crate::common::ChatMessage;

/// Messages of the open thread. Nothing here outlives a selection change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MessageFeed {
    #[default]
    Empty,
    Loaded {
        conversation_id: String,
        messages: Vec<ChatMessage>,
    },
}

impl MessageFeed {
    /// Replaces whatever was loaded. History is sorted ascending by timestamp.
    pub fn load(&mut self, conversation_id: impl Into<String>, mut history: Vec<ChatMessage>) {
        history.sort_by_key(|message| message.timestamp);
        *self = MessageFeed::Loaded {
            conversation_id: conversation_id.into(),
            messages: history,
        };
    }

    /// Appends to the loaded thread; dropped when nothing is loaded.
    pub fn append(&mut self, message: ChatMessage) {
        match self {
            MessageFeed::Loaded { messages, .. } => messages.push(message),
            MessageFeed::Empty => log::debug!("Dropping message {} for empty feed", message.id),
        }
    }

    pub fn reset(&mut self) {
        *self = MessageFeed::Empty;
    }

    pub fn conversation_id(&self) -> Option<&str> {
        match self {
            MessageFeed::Loaded { conversation_id, .. } => Some(conversation_id.as_str()),
            MessageFeed::Empty => None,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        match self {
            MessageFeed::Loaded { messages, .. } => messages.as_slice(),
            MessageFeed::Empty => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages().is_empty()
    }
}
