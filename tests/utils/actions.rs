#![allow(dead_code)]

use serde_json;

use hotel_assistant::{
    websockets::SendMessagePayload, Language, MessageHandler, RelayOutcome, RoomRegistry,
    WebSocketMessage,
};

use super::setup::TestSetup;

// ============================================================================
// Action Helpers
// ============================================================================

impl TestSetup {
    /// Deliver a raw frame as if it arrived on the guest's socket
    pub async fn send_raw(&self, guest: &str, frame: &str) {
        self.relay.handle_message(guest, frame.to_string()).await;
    }

    /// Deliver a WebSocket message as if it arrived on the guest's socket
    pub async fn send_message(&self, guest: &str, message: WebSocketMessage) {
        let message_json = serde_json::to_string(&message).unwrap();
        self.send_raw(guest, &message_json).await;
    }

    /// Clear all queued frames
    pub async fn clear_messages(&self) {
        for guest in &self.guests {
            self.drain_messages_for(guest).await;
        }
    }

    // ============================================================================
    // Convenience Action Methods
    // ============================================================================

    /// Send chat text relying on the guest's joined room
    pub async fn send_text(&self, guest: &str, text: &str) {
        self.send_message(
            guest,
            WebSocketMessage::send_message(text, None, Language::En),
        )
        .await;
    }

    /// Send chat text naming the room and language explicitly
    pub async fn send_text_to_room(&self, guest: &str, text: &str, room_id: &str, language: Language) {
        self.send_message(
            guest,
            WebSocketMessage::send_message(text, Some(room_id.to_string()), language),
        )
        .await;
    }

    /// Send a JOIN_ROOM frame
    pub async fn send_join(&self, guest: &str, room_id: &str) {
        self.send_message(guest, WebSocketMessage::join_room(room_id))
            .await;
    }

    /// Relay directly and hand back the outcome
    pub async fn relay_text(&self, guest: &str, text: &str) -> RelayOutcome {
        self.relay
            .relay(
                Some(guest),
                SendMessagePayload {
                    text: text.to_string(),
                    ..Default::default()
                },
            )
            .await
    }

    /// Simulate the socket closing
    pub async fn disconnect(&self, guest: &str) -> Option<String> {
        self.registry.remove_connection(guest).await
    }
}
