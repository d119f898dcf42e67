use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Label written into `last_timestamp` whenever a conversation sees activity.
pub const JUST_NOW: &str = "Just now";

/// The signed-in user. Serialized as-is into the session slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
    pub id: String,
}

/// Sidebar projection of a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationSummary {
    pub id: String,
    pub name: String,
    pub last_message: Option<String>,
    pub last_timestamp: Option<String>,
    pub unread_count: u32,
    pub avatar: Option<String>,
    pub online: bool,
}

impl ConversationSummary {
    pub fn new(name: impl Into<String>, online: bool) -> Self {
        Self {
            id: format!("conv-{}", Uuid::new_v4()),
            name: name.into(),
            last_message: None,
            last_timestamp: Some(JUST_NOW.to_string()),
            unread_count: 0,
            avatar: None,
            online,
        }
    }

    /// First letter of the name, used as the avatar fallback.
    pub fn initial(&self) -> String {
        initial_of(&self.name)
    }
}

/// One message of the open thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub sender_id: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub encrypted: bool,
}

impl ChatMessage {
    pub fn new(sender_id: impl Into<String>, content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: format!("msg-{}", Uuid::new_v4()),
            sender_id: sender_id.into(),
            content: content.into(),
            timestamp,
            encrypted: true,
        }
    }

    pub fn is_from(&self, user_id: &str) -> bool {
        self.sender_id == user_id
    }
}

pub fn initial_of(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "U".to_string())
}
