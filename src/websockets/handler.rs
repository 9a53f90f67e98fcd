use axum::{
    extract::{ws::WebSocket, Path, State, WebSocketUpgrade},
    response::Response,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::shared::AppState;

use super::socket::{Connection, MessageHandler};

/// WebSocket endpoint without a room; the client sends JOIN_ROOM itself
/// GET /ws
pub async fn websocket_handler(ws: WebSocketUpgrade, State(app_state): State<AppState>) -> Response {
    info!("WebSocket connection requested");
    ws.on_upgrade(move |socket| handle_websocket_connection(socket, None, app_state))
}

/// WebSocket endpoint that joins the room straight after the upgrade
/// GET /ws/:room_id
pub async fn websocket_room_handler(
    ws: WebSocketUpgrade,
    Path(room_id): Path<String>,
    State(app_state): State<AppState>,
) -> Response {
    info!(room_id = %room_id, "WebSocket connection requested");
    ws.on_upgrade(move |socket| handle_websocket_connection(socket, Some(room_id), app_state))
}

/// Handle the upgraded WebSocket connection
async fn handle_websocket_connection(
    socket: WebSocket,
    initial_room: Option<String>,
    app_state: AppState,
) {
    let connection_id = Uuid::new_v4().to_string();
    info!(connection_id = %connection_id, "New client connected");

    // Create the outbound channel (app -> client)
    let (outbound_sender, outbound_receiver) = mpsc::unbounded_channel::<String>();

    app_state
        .registry
        .add_connection(connection_id.clone(), outbound_sender)
        .await;

    if let Some(room_id) = initial_room {
        app_state.relay.join(&connection_id, &room_id).await;
    }

    let message_handler: Arc<dyn MessageHandler> = app_state.relay.clone();

    // Create and run the connection
    let connection = Connection::new(
        connection_id.clone(),
        Box::new(socket),
        outbound_receiver,
        message_handler,
    );

    // Run the connection until disconnect
    match connection.run().await {
        Ok(()) => {
            info!(connection_id = %connection_id, "WebSocket connection closed cleanly");
        }
        Err(e) => {
            warn!(
                connection_id = %connection_id,
                error = %e,
                "WebSocket connection error"
            );
        }
    }

    // Cleanup: the registry drops the membership with the connection
    let room_id = app_state.registry.remove_connection(&connection_id).await;
    info!(
        connection_id = %connection_id,
        room_id = ?room_id,
        "Client disconnected"
    );
}
