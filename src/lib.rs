// Library crate for the hotel assistant server
// This file exposes the public API for the binary and integration tests

pub mod assistant;
pub mod chat;
pub mod config;
pub mod hotel;
pub mod orders;
pub mod qr;
pub mod router;
pub mod shared;
pub mod websockets;

// Re-export commonly used types for easier access in tests
pub use assistant::{IntentResolver, Language, ResolutionRequest, ResolverError, ResponseCatalog};
pub use config::Config;
pub use shared::{AppError, AppState};
pub use websockets::{
    ChatFrame, ChatRelay, InMemoryRoomRegistry, MessageHandler, MessageType, RelayOutcome,
    RoomRegistry, WebSocketMessage,
};
