use async_trait::async_trait;
use axum::extract::ws::{Message, WebSocket};
use futures::stream::StreamExt;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;

/// Simple WebSocket abstraction - all we care about is send/receive
#[async_trait]
pub trait SocketWrapper: Send {
    /// Send a text message to the client
    async fn send_message(&mut self, message: String) -> Result<(), SocketError>;

    /// Receive the next text message from the client (None if connection closed)
    async fn receive_message(&mut self) -> Result<Option<String>, SocketError>;

    /// Close the connection
    async fn close(&mut self) -> Result<(), SocketError>;
}

/// Handler for incoming WebSocket messages
#[async_trait]
pub trait MessageHandler: Send + Sync {
    /// Handle an incoming message from the client
    async fn handle_message(&self, connection_id: &str, message: String);
}

#[derive(Debug, Error)]
pub enum SocketError {
    #[error("Connection closed")]
    ConnectionClosed,

    #[error("Send failed: {0}")]
    SendFailed(String),

    #[error("Receive failed: {0}")]
    ReceiveFailed(String),
}

/// Direct implementation on axum's WebSocket
#[async_trait]
impl SocketWrapper for WebSocket {
    async fn send_message(&mut self, message: String) -> Result<(), SocketError> {
        self.send(Message::Text(message))
            .await
            .map_err(|e| SocketError::SendFailed(e.to_string()))
    }

    async fn receive_message(&mut self) -> Result<Option<String>, SocketError> {
        loop {
            match self.next().await {
                Some(Ok(Message::Text(text))) => return Ok(Some(text)),
                Some(Ok(Message::Close(_))) => return Ok(None),
                // Binary and ping/pong frames carry nothing for us
                Some(Ok(_)) => continue,
                Some(Err(e)) => return Err(SocketError::ReceiveFailed(e.to_string())),
                None => return Ok(None),
            }
        }
    }

    async fn close(&mut self) -> Result<(), SocketError> {
        self.send(Message::Close(None))
            .await
            .map_err(|e| SocketError::SendFailed(e.to_string()))
    }
}

/// Connection represents a managed WebSocket connection
/// It is used to send and receive messages to and from the client
/// The outbound receiver is a channel that receives messages from the RoomRegistry's outbound sender
pub struct Connection {
    pub connection_id: String,
    socket: Box<dyn SocketWrapper>,
    outbound_receiver: mpsc::UnboundedReceiver<String>,
    message_handler: Arc<dyn MessageHandler>,
}

impl Connection {
    pub fn new(
        connection_id: String,
        socket: Box<dyn SocketWrapper>,
        outbound_receiver: mpsc::UnboundedReceiver<String>,
        message_handler: Arc<dyn MessageHandler>,
    ) -> Self {
        Self {
            connection_id,
            socket,
            outbound_receiver,
            message_handler,
        }
    }

    /// Run the connection - handles both sending and receiving until disconnect
    ///
    /// Inbound messages are handled one at a time, so a guest's messages are
    /// relayed in the order they were sent.
    pub async fn run(mut self) -> Result<(), SocketError> {
        loop {
            tokio::select! {
                // Handle outbound messages (from our app to client)
                msg = self.outbound_receiver.recv() => {
                    match msg {
                        Some(message) => {
                            self.socket.send_message(message).await?
                        }
                        None => break, // Channel closed, disconnect
                    }
                }

                // Handle inbound messages (from client to our app)
                msg = self.socket.receive_message() => {
                    match msg {
                        Ok(Some(message)) => {
                            self.message_handler
                                .handle_message(&self.connection_id, message)
                                .await;
                        }
                        Ok(None) => break, // Client disconnected
                        Err(e) => return Err(e),
                    }
                }
            }
        }

        // Flush anything queued for the client before closing
        while let Ok(message) = self.outbound_receiver.try_recv() {
            if self.socket.send_message(message).await.is_err() {
                break;
            }
        }

        let _ = self.socket.close().await;
        Ok(())
    }
}
