use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::assistant::{IntentResolver, ResolutionRequest};

use super::{
    messages::{ChatFrame, JoinRoomPayload, MessageType, SendMessagePayload, WebSocketMessage},
    room_registry::{JoinOutcome, RoomRegistry},
    socket::MessageHandler,
};

/// Why a message was dropped before reaching the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayRejection {
    EmptyText,
    MissingRoom,
}

/// What happened to a relayed message
#[derive(Debug, Clone, PartialEq)]
pub enum RelayOutcome {
    /// Reply broadcast to the room
    Broadcast {
        room_id: String,
        frame: ChatFrame,
        recipients: usize,
    },
    /// Input failed validation; nothing was sent
    Rejected(RelayRejection),
    /// Resolver failed; the apology went to the sender only
    Failed { room_id: String, frame: ChatFrame },
}

/// Relays guest messages through the intent resolver and fans replies out to the room
pub struct ChatRelay {
    registry: Arc<dyn RoomRegistry>,
    resolver: Arc<dyn IntentResolver>,
}

impl ChatRelay {
    pub fn new(registry: Arc<dyn RoomRegistry>, resolver: Arc<dyn IntentResolver>) -> Self {
        Self { registry, resolver }
    }

    /// Moves a connection into a room and acknowledges with JOINED
    pub async fn join(&self, connection_id: &str, room_id: &str) -> JoinOutcome {
        let room_id = room_id.trim();
        if room_id.is_empty() {
            debug!(connection_id = %connection_id, "Ignoring join without a room id");
            return JoinOutcome::InvalidRoom;
        }

        let outcome = self.registry.join(connection_id, room_id).await;
        info!(
            connection_id = %connection_id,
            room_id = %room_id,
            outcome = ?outcome,
            "Client joined room"
        );

        if outcome != JoinOutcome::UnknownConnection {
            self.send_private(connection_id, &WebSocketMessage::joined(room_id))
                .await;
        }
        outcome
    }

    /// Resolves one guest message and delivers the reply
    ///
    /// `sender` is the originating connection; REST callers have none. The
    /// room in the payload wins, otherwise the sender's current room is used.
    pub async fn relay(&self, sender: Option<&str>, payload: SendMessagePayload) -> RelayOutcome {
        let text = payload.text.trim();
        if text.is_empty() {
            debug!(connection_id = ?sender, "Dropping message with empty text");
            return RelayOutcome::Rejected(RelayRejection::EmptyText);
        }

        let room_id = match payload.room_id {
            Some(room_id) => room_id,
            None => match sender {
                Some(connection_id) => match self.registry.room_of(connection_id).await {
                    Some(room_id) => room_id,
                    None => {
                        debug!(connection_id = %connection_id, "Dropping message without a room");
                        return RelayOutcome::Rejected(RelayRejection::MissingRoom);
                    }
                },
                None => return RelayOutcome::Rejected(RelayRejection::MissingRoom),
            },
        };

        let request = ResolutionRequest::new(text, room_id.clone(), payload.language);

        match self.resolver.resolve(&request).await {
            Ok(reply) => {
                let frame = ChatFrame::assistant(reply);
                let message = WebSocketMessage::receive_message(&frame);
                let recipients = match serde_json::to_string(&message) {
                    Ok(json) => self.registry.broadcast_to_room(&room_id, &json).await,
                    Err(e) => {
                        warn!(room_id = %room_id, error = %e, "Failed to serialize reply");
                        return self.fail(sender, room_id).await;
                    }
                };

                info!(
                    room_id = %room_id,
                    recipients = recipients,
                    resolver = self.resolver.resolver_name(),
                    "Broadcast assistant reply"
                );

                RelayOutcome::Broadcast {
                    room_id,
                    frame,
                    recipients,
                }
            }
            Err(e) => {
                warn!(
                    room_id = %room_id,
                    connection_id = ?sender,
                    resolver = self.resolver.resolver_name(),
                    error = %e,
                    "Intent resolution failed"
                );
                self.fail(sender, room_id).await
            }
        }
    }

    async fn fail(&self, sender: Option<&str>, room_id: String) -> RelayOutcome {
        let frame = ChatFrame::apology();
        if let Some(connection_id) = sender {
            self.send_private(connection_id, &WebSocketMessage::error(&frame))
                .await;
        }
        RelayOutcome::Failed { room_id, frame }
    }

    async fn send_private(&self, connection_id: &str, message: &WebSocketMessage) {
        match serde_json::to_string(message) {
            Ok(json) => self.registry.send_to_connection(connection_id, &json).await,
            Err(e) => warn!(
                connection_id = %connection_id,
                error = %e,
                "Failed to serialize private message"
            ),
        }
    }
}

#[async_trait]
impl MessageHandler for ChatRelay {
    async fn handle_message(&self, connection_id: &str, message: String) {
        debug!(
            connection_id = %connection_id,
            message = %message,
            "Received message"
        );

        let ws_message = match serde_json::from_str::<WebSocketMessage>(&message) {
            Ok(ws_message) => ws_message,
            Err(e) => {
                warn!(
                    connection_id = %connection_id,
                    error = %e,
                    "Failed to parse WebSocket message"
                );
                return;
            }
        };

        match ws_message.message_type {
            MessageType::JoinRoom => match ws_message.payload_as::<JoinRoomPayload>() {
                Ok(JoinRoomPayload {
                    room_id: Some(room_id),
                }) => {
                    self.join(connection_id, &room_id).await;
                }
                Ok(_) => debug!(connection_id = %connection_id, "Join without a room id"),
                Err(e) => warn!(
                    connection_id = %connection_id,
                    error = %e,
                    "Invalid JOIN_ROOM payload"
                ),
            },
            MessageType::SendMessage => match ws_message.payload_as::<SendMessagePayload>() {
                Ok(payload) => {
                    self.relay(Some(connection_id), payload).await;
                }
                Err(e) => warn!(
                    connection_id = %connection_id,
                    error = %e,
                    "Invalid SEND_MESSAGE payload"
                ),
            },
            other => {
                debug!(
                    message_type = ?other,
                    "Unhandled message type"
                );
            }
        }
    }
}
