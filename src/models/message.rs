use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A conversation row in the inbox list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    pub sender: String,
    pub sender_role: String,
    pub subject: String,
    pub preview: String,
    pub timestamp: String, // e.g., "10:30 AM", "Yesterday"
    pub unread: bool,
    pub initials: String,
}

/// One entry of the open chat thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: String,
    pub body: String,
    pub timestamp: String,
    pub outgoing: bool,
}
