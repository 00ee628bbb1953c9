//! Chat payloads exchanged with the room server.

use serde::{Deserialize, Serialize};

use super::room::RoomContext;

/// Event name used for chat messages in both directions.
pub const CHAT_MESSAGE_EVENT: &str = "chat_message";

/// Event name used to announce room membership.
pub const JOIN_EVENT: &str = "join";

/// Payload of the `join` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinRequest {
    pub room: String,
}

/// Payload of an outgoing `chat_message` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingChatMessage {
    pub room: String,
    pub message: String,
    pub receiver_id: String,
    pub product_id: String,
}

impl OutgoingChatMessage {
    pub fn new(context: &RoomContext, message: impl Into<String>) -> Self {
        Self {
            room: context.room().to_owned(),
            message: message.into(),
            receiver_id: context.receiver_id().to_owned(),
            product_id: context.product_id().to_owned(),
        }
    }
}

/// Payload of an incoming `chat_message` event.
///
/// Missing `username`/`message` fields decode as empty strings; a missing or
/// `null` timestamp decodes as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingChatMessage {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Everything the client ever emits on the channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    Join(JoinRequest),
    ChatMessage(OutgoingChatMessage),
}

impl ClientEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Join(_) => JOIN_EVENT,
            Self::ChatMessage(_) => CHAT_MESSAGE_EVENT,
        }
    }

    pub fn payload(&self) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            Self::Join(join) => serde_json::to_value(join),
            Self::ChatMessage(message) => serde_json::to_value(message),
        }
    }
}
