use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::assistant::Language;
use crate::shared::deserialize_room_number;

/// Fixed reply sent privately when the assistant cannot answer
pub const APOLOGY: &str = "Sorry, I encountered an error. Please try again.";

/// Message types for WebSocket communication
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageType {
    // Client -> Server
    JoinRoom,
    SendMessage,

    // Server -> Client
    Joined,
    ReceiveMessage,
    Error,
}

/// Metadata for WebSocket messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSocketMessageMeta {
    pub timestamp: DateTime<Utc>,
}

/// Base structure for WebSocket messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSocketMessage {
    #[serde(rename = "type")]
    pub message_type: MessageType,
    #[serde(default)]
    pub payload: serde_json::Value,
    pub meta: Option<WebSocketMessageMeta>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    Guest,
    Assistant,
}

/// Client-to-Server message payloads
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JoinRoomPayload {
    #[serde(
        default,
        alias = "roomNumber",
        deserialize_with = "deserialize_room_number"
    )]
    pub room_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SendMessagePayload {
    #[serde(default, alias = "message", alias = "content")]
    pub text: String,
    #[serde(
        default,
        alias = "roomNumber",
        deserialize_with = "deserialize_room_number"
    )]
    pub room_id: Option<String>,
    #[serde(default)]
    pub language: Language,
}

/// Server-to-Client message payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinedPayload {
    pub room_id: String,
}

/// A chat line as rendered by the guest UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatFrame {
    pub role: MessageRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatFrame {
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn apology() -> Self {
        Self::assistant(APOLOGY)
    }
}

/// Helper functions for creating messages
impl WebSocketMessage {
    pub fn new(message_type: MessageType, payload: serde_json::Value) -> Self {
        Self {
            message_type,
            payload,
            meta: Some(WebSocketMessageMeta {
                timestamp: Utc::now(),
            }),
        }
    }

    fn with_payload<T: Serialize>(message_type: MessageType, payload: &T) -> Self {
        Self::new(
            message_type,
            serde_json::to_value(payload).unwrap_or_default(),
        )
    }

    /// Create a JOIN_ROOM message
    pub fn join_room(room_id: impl Into<String>) -> Self {
        Self::with_payload(
            MessageType::JoinRoom,
            &JoinRoomPayload {
                room_id: Some(room_id.into()),
            },
        )
    }

    /// Create a SEND_MESSAGE message
    pub fn send_message(
        text: impl Into<String>,
        room_id: Option<String>,
        language: Language,
    ) -> Self {
        Self::with_payload(
            MessageType::SendMessage,
            &SendMessagePayload {
                text: text.into(),
                room_id,
                language,
            },
        )
    }

    /// Create a JOINED acknowledgement
    pub fn joined(room_id: impl Into<String>) -> Self {
        Self::with_payload(
            MessageType::Joined,
            &JoinedPayload {
                room_id: room_id.into(),
            },
        )
    }

    /// Create a RECEIVE_MESSAGE broadcast
    pub fn receive_message(frame: &ChatFrame) -> Self {
        Self::with_payload(MessageType::ReceiveMessage, frame)
    }

    /// Create a private ERROR message
    pub fn error(frame: &ChatFrame) -> Self {
        Self::with_payload(MessageType::Error, frame)
    }

    /// Decode the payload into a typed struct
    pub fn payload_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }
}
