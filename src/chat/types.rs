use serde::{Deserialize, Serialize};

use crate::websockets::ChatFrame;

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatHistoryResponse {
    pub success: bool,
    pub messages: Vec<ChatFrame>,
}

/// Reply to a message sent over HTTP instead of the socket
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSendResponse {
    pub success: bool,
    pub room_number: String,
    pub message: ChatFrame,
    /// Live connections in the room that also received the reply
    pub recipients: usize,
}
