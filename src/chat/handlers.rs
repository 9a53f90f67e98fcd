use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{debug, info, instrument, warn};

use super::types::{ChatHistoryResponse, ChatSendResponse};
use crate::shared::{AppError, AppState};
use crate::websockets::{RelayOutcome, SendMessagePayload, APOLOGY};

/// GET /api/chat/history/:room_number
///
/// Conversations are not persisted, so history is always empty
#[instrument(name = "chat_history")]
pub async fn get_history(Path(room_number): Path<String>) -> Json<ChatHistoryResponse> {
    debug!(room_number = %room_number, "Chat history requested");
    Json(ChatHistoryResponse {
        success: true,
        messages: Vec::new(),
    })
}

/// HTTP handler for sending a chat message without a socket
///
/// POST /api/chat/send
/// Runs the relay with no sender connection; the reply is broadcast to the
/// room and returned in the body
#[instrument(name = "chat_send", skip(state, payload))]
pub async fn send_message(
    State(state): State<AppState>,
    Json(payload): Json<SendMessagePayload>,
) -> Result<Json<ChatSendResponse>, AppError> {
    if payload.text.trim().is_empty() || payload.room_id.is_none() {
        return Err(AppError::BadRequest(
            "Message and room number are required".to_string(),
        ));
    }

    match state.relay.relay(None, payload).await {
        RelayOutcome::Broadcast {
            room_id,
            frame,
            recipients,
        } => {
            info!(room_id = %room_id, recipients = recipients, "Chat message relayed over HTTP");
            Ok(Json(ChatSendResponse {
                success: true,
                room_number: room_id,
                message: frame,
                recipients,
            }))
        }
        RelayOutcome::Rejected(reason) => {
            warn!(reason = ?reason, "Chat message rejected");
            Err(AppError::BadRequest(
                "Message and room number are required".to_string(),
            ))
        }
        RelayOutcome::Failed { room_id, .. } => {
            warn!(room_id = %room_id, "Chat message could not be answered");
            Err(AppError::Upstream(APOLOGY.to_string()))
        }
    }
}
